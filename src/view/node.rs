// src/view/node.rs
//! Minimal element tree backing the display regions

/// Tags laid out on their own line when a region is printed as text.
const BLOCK_TAGS: &[&str] = &["div", "h4", "ul", "li", "p"];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(String),
    Element(Element),
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&html_escape(text)),
            Node::Element(element) => element.write_html(out),
        }
    }

    fn write_outline(&self, lines: &mut Vec<String>) {
        match self {
            Node::Text(text) => match lines.last_mut() {
                Some(line) => line.push_str(text),
                None => lines.push(text.clone()),
            },
            Node::Element(element) => {
                match element.tag {
                    "li" => lines.push("- ".to_string()),
                    tag if BLOCK_TAGS.contains(&tag) => lines.push(String::new()),
                    _ => {}
                }
                for child in &element.children {
                    child.write_outline(lines);
                }
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: &'static str,
    class: Option<&'static str>,
    style: Option<String>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            class: None,
            style: None,
            children: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn with_style(mut self, style: String) -> Self {
        self.style = Some(style);
        self
    }

    /// Append a text child. Text is always escaped on output.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn class(&self) -> Option<&'static str> {
        self.class
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if let Some(class) = self.class {
            out.push_str(&format!(r#" class="{}""#, html_escape(class)));
        }
        if let Some(style) = &self.style {
            out.push_str(&format!(r#" style="{}""#, html_escape(style)));
        }
        out.push('>');
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str(&format!("</{}>", self.tag));
    }
}

/// An addressable display area such as `summaryBox`.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    id: &'static str,
    nodes: Vec<Node>,
}

impl Region {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            nodes: Vec::new(),
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Replace the whole content with a single text node.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.nodes.clear();
        let text = text.into();
        if !text.is_empty() {
            self.nodes.push(Node::Text(text));
        }
    }

    pub fn append(&mut self, node: impl Into<Node>) {
        self.nodes.push(node.into());
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Concatenated text of every descendant, without separators.
    pub fn text_content(&self) -> String {
        self.nodes.iter().map(Node::text_content).collect()
    }

    /// Escaped inner HTML.
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.write_html(&mut out);
        }
        out
    }

    /// The region as a `<div id=...>` wrapper.
    pub fn to_html(&self) -> String {
        format!(r#"<div id="{}">{}</div>"#, self.id, self.inner_html())
    }

    /// Line-per-block rendering for terminals; list items get a `- ` prefix.
    pub fn outline(&self) -> String {
        let mut lines = Vec::new();
        for node in &self.nodes {
            node.write_outline(&mut lines);
        }
        lines
            .into_iter()
            .map(|line| line.trim_end().to_string())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
