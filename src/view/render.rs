// src/view/render.rs
//! Renderers that fill display regions from backend payloads

use crate::types::{JobItem, StructuredResume};
use crate::view::node::{Element, Region};

pub const RAW_RESULT_LABEL: &str = "Analysis result (raw text)";

/// Score bar, summary, then the "Missing Skills" and "Improvements" lists.
pub fn render_resume_structured(result: &StructuredResume, summary: &mut Region, details: &mut Region) {
    summary.clear();
    details.clear();

    let score = Element::new("div")
        .with_class("score-wrap")
        .with_child(Element::new("div").with_class("score-label").with_text("Match Score"))
        .with_child(
            Element::new("div").with_class("score-bar").with_child(
                Element::new("div")
                    .with_class("score-fill")
                    .with_style(format!("width:{}%", result.bar_width())),
            ),
        )
        .with_child(Element::new("div").with_class("score-num").with_text(result.score_label()));
    summary.append(score);

    summary.append(Element::new("div").with_class("summary").with_text(result.summary()));

    details.append(titled_list("missing", "Missing Skills", result.missing_skills()));
    details.append(titled_list("improvements", "Improvements", result.improvements()));
}

pub fn render_plain_text(text: &str, summary: &mut Region, details: &mut Region) {
    summary.set_text(RAW_RESULT_LABEL);
    details.set_text(text);
}

/// One `job-card` per item, in order.
pub fn render_job_cards(items: &[JobItem], jobs: &mut Region) {
    jobs.clear();

    for item in items {
        let card = Element::new("div")
            .with_class("job-card")
            .with_child(Element::new("div").with_class("job-title").with_text(item.display_title()))
            .with_child(Element::new("div").with_class("job-desc").with_text(item.description()))
            .with_child(bullet_list(item.improvements()));
        jobs.append(card);
    }
}

fn titled_list(class: &'static str, heading: &str, entries: &[String]) -> Element {
    Element::new("div")
        .with_class(class)
        .with_child(Element::new("h4").with_text(heading))
        .with_child(bullet_list(entries))
}

fn bullet_list(entries: &[String]) -> Element {
    entries.iter().fold(Element::new("ul"), |list, entry| {
        list.with_child(Element::new("li").with_text(entry.as_str()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};
    use serde_json::json;

    fn select_text(html: &str, selector: &str) -> Vec<String> {
        let fragment = Html::parse_fragment(html);
        let selector = Selector::parse(selector).unwrap();
        fragment
            .select(&selector)
            .map(|el| el.text().collect::<String>())
            .collect()
    }

    fn attr(html: &str, selector: &str, name: &str) -> Option<String> {
        let fragment = Html::parse_fragment(html);
        let selector = Selector::parse(selector).unwrap();
        fragment
            .select(&selector)
            .next()
            .and_then(|el| el.value().attr(name).map(str::to_string))
    }

    fn regions() -> (Region, Region) {
        (Region::new("summaryBox"), Region::new("detailsBox"))
    }

    #[test]
    fn test_structured_resume_scenario() {
        let result: StructuredResume = serde_json::from_value(json!({
            "match_score": 72,
            "summary": "Good fit",
            "missing_skills": ["Docker"],
            "improvements": ["Add metrics experience"]
        }))
        .unwrap();
        let (mut summary, mut details) = regions();

        render_resume_structured(&result, &mut summary, &mut details);

        let summary_html = summary.to_html();
        assert_eq!(attr(&summary_html, ".score-fill", "style").as_deref(), Some("width:72%"));
        assert_eq!(select_text(&summary_html, ".score-num"), vec!["72%"]);
        assert_eq!(select_text(&summary_html, ".summary"), vec!["Good fit"]);

        let details_html = details.to_html();
        assert_eq!(select_text(&details_html, ".missing li"), vec!["Docker"]);
        assert_eq!(
            select_text(&details_html, ".improvements li"),
            vec!["Add metrics experience"]
        );
    }

    #[test]
    fn test_list_items_partitioned_in_order() {
        let result: StructuredResume = serde_json::from_value(json!({
            "match_score": 55,
            "summary": "Needs work",
            "missing_skills": ["Rust", "gRPC", "Kafka"],
            "improvements": ["Quantify impact", "Trim to one page"]
        }))
        .unwrap();
        let (mut summary, mut details) = regions();

        render_resume_structured(&result, &mut summary, &mut details);

        let html = details.to_html();
        assert_eq!(select_text(&html, "li").len(), 5);
        assert_eq!(select_text(&html, ".missing li"), vec!["Rust", "gRPC", "Kafka"]);
        assert_eq!(
            select_text(&html, ".improvements li"),
            vec!["Quantify impact", "Trim to one page"]
        );
        assert_eq!(select_text(&html, "h4"), vec!["Missing Skills", "Improvements"]);
    }

    #[test]
    fn test_empty_lists_still_render_sections() {
        let result: StructuredResume =
            serde_json::from_value(json!({"match_score": 90, "summary": "Great"})).unwrap();
        let (mut summary, mut details) = regions();

        render_resume_structured(&result, &mut summary, &mut details);

        let html = details.to_html();
        assert_eq!(select_text(&html, "ul").len(), 2);
        assert!(select_text(&html, "li").is_empty());
    }

    #[test]
    fn test_out_of_range_score_is_clamped_in_bar_only() {
        let result: StructuredResume = serde_json::from_value(json!({"match_score": 130})).unwrap();
        let (mut summary, mut details) = regions();

        render_resume_structured(&result, &mut summary, &mut details);

        let html = summary.to_html();
        assert_eq!(attr(&html, ".score-fill", "style").as_deref(), Some("width:100%"));
        assert_eq!(select_text(&html, ".score-num"), vec!["130%"]);
    }

    #[test]
    fn test_model_text_cannot_inject_markup() {
        let result: StructuredResume = serde_json::from_value(json!({
            "match_score": 10,
            "summary": "<script>alert(1)</script>",
            "missing_skills": ["<img src=x>"]
        }))
        .unwrap();
        let (mut summary, mut details) = regions();

        render_resume_structured(&result, &mut summary, &mut details);

        assert!(select_text(&summary.to_html(), "script").is_empty());
        assert_eq!(
            select_text(&summary.to_html(), ".summary"),
            vec!["<script>alert(1)</script>"]
        );
        assert!(select_text(&details.to_html(), "img").is_empty());
    }

    #[test]
    fn test_plain_text() {
        let (mut summary, mut details) = regions();
        render_plain_text("Score: 70%\nMissing: Go", &mut summary, &mut details);

        assert_eq!(summary.text_content(), "Analysis result (raw text)");
        assert_eq!(details.text_content(), "Score: 70%\nMissing: Go");
    }

    #[test]
    fn test_job_cards() {
        let items: Vec<JobItem> = serde_json::from_value(json!([
            {"role": "Backend Engineer", "description": "APIs and services", "improvements": ["Learn Go"]},
            {"title": "Platform Engineer"},
            {}
        ]))
        .unwrap();
        let mut jobs = Region::new("jobsBox");

        render_job_cards(&items, &mut jobs);

        let html = jobs.to_html();
        assert_eq!(select_text(&html, ".job-card").len(), 3);
        assert_eq!(
            select_text(&html, ".job-title"),
            vec!["Backend Engineer", "Platform Engineer", "Role"]
        );
        assert_eq!(select_text(&html, ".job-desc"), vec!["APIs and services", "", ""]);
        assert_eq!(select_text(&html, ".job-card li"), vec!["Learn Go"]);
    }
}
