//! Output seam for commands

use serde_json::{Map, Value};
use winrepo_client::Reason;

/// Renders command output for the user
pub trait Prompt {
    fn render_title(&mut self, title: &str);

    fn render_success_message(&mut self, message: &str);

    fn render_failure_message(&mut self, message: &str);

    fn render_paragraph(&mut self, text: &str);

    /// Explain why the server postponed an operation
    fn render_reasons(&mut self, reasons: &[Reason]);

    /// Render one record; `order` lists the keys shown first, in order
    fn render_document(&mut self, document: &Map<String, Value>, order: &[&str]);
}
