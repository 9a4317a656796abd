//! A [`Prompt`] that remembers what it was asked to render

use serde_json::{Map, Value};
use winrepo_client::Reason;
use winrepo_core::Prompt;

#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Title(String),
    Success(String),
    Failure(String),
    Paragraph(String),
    Reasons(Vec<Reason>),
    Document(Map<String, Value>),
}

#[derive(Debug, Default)]
pub struct RecordingPrompt {
    pub rendered: Vec<Rendered>,
}

impl RecordingPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn successes(&self) -> Vec<&str> {
        self.rendered
            .iter()
            .filter_map(|r| match r {
                Rendered::Success(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn failures(&self) -> Vec<&str> {
        self.rendered
            .iter()
            .filter_map(|r| match r {
                Rendered::Failure(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn paragraphs(&self) -> Vec<&str> {
        self.rendered
            .iter()
            .filter_map(|r| match r {
                Rendered::Paragraph(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.rendered
            .iter()
            .filter_map(|r| match r {
                Rendered::Title(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn documents(&self) -> Vec<&Map<String, Value>> {
        self.rendered
            .iter()
            .filter_map(|r| match r {
                Rendered::Document(d) => Some(d),
                _ => None,
            })
            .collect()
    }

    /// Ids of the rendered documents, in order
    pub fn document_ids(&self) -> Vec<&str> {
        self.documents()
            .into_iter()
            .filter_map(|d| d.get("id").and_then(Value::as_str))
            .collect()
    }
}

impl Prompt for RecordingPrompt {
    fn render_title(&mut self, title: &str) {
        self.rendered.push(Rendered::Title(title.to_string()));
    }

    fn render_success_message(&mut self, message: &str) {
        self.rendered.push(Rendered::Success(message.to_string()));
    }

    fn render_failure_message(&mut self, message: &str) {
        self.rendered.push(Rendered::Failure(message.to_string()));
    }

    fn render_paragraph(&mut self, text: &str) {
        self.rendered.push(Rendered::Paragraph(text.to_string()));
    }

    fn render_reasons(&mut self, reasons: &[Reason]) {
        self.rendered.push(Rendered::Reasons(reasons.to_vec()));
    }

    fn render_document(&mut self, document: &Map<String, Value>, _order: &[&str]) {
        self.rendered.push(Rendered::Document(document.clone()));
    }
}
