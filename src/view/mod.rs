pub mod node;
pub mod pages;
pub mod render;

pub use node::{html_escape, Element, Node, Region};
pub use render::{render_job_cards, render_plain_text, render_resume_structured, RAW_RESULT_LABEL};
