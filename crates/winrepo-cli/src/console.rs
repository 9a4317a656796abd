//! Terminal rendering of command output

use colored::Colorize;
use serde_json::{Map, Value};
use winrepo_client::Reason;
use winrepo_core::Prompt;

const INDENT: usize = 2;

/// Prints command output to stdout
#[derive(Debug, Default)]
pub struct ConsolePrompt;

impl ConsolePrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Prompt for ConsolePrompt {
    fn render_title(&mut self, title: &str) {
        println!();
        println!("{}", title.bold());
        println!("{}", "=".repeat(title.len()).dimmed());
        println!();
    }

    fn render_success_message(&mut self, message: &str) {
        println!("{}", message.green());
    }

    fn render_failure_message(&mut self, message: &str) {
        println!("{}", message.red().bold());
    }

    fn render_paragraph(&mut self, text: &str) {
        println!("{}", text);
    }

    fn render_reasons(&mut self, reasons: &[Reason]) {
        for reason in reasons {
            println!("  {} {}", "-".yellow(), format_reason(reason));
        }
    }

    fn render_document(&mut self, document: &Map<String, Value>, order: &[&str]) {
        for line in format_document(document, order, 0) {
            println!("{}", line);
        }
        println!();
    }
}

fn format_reason(reason: &Reason) -> String {
    format!(
        "{} [{}] is locked by a pending {} operation",
        reason.resource_type, reason.resource_id, reason.operation
    )
}

/// Lay out a document as aligned `Label: value` lines.
///
/// Keys listed in `order` come first, the rest follow alphabetically. Nested
/// objects and lists of objects are indented below their label.
pub fn format_document(document: &Map<String, Value>, order: &[&str], indent: usize) -> Vec<String> {
    let mut keys: Vec<&str> = order
        .iter()
        .copied()
        .filter(|k| document.contains_key(*k))
        .collect();
    keys.extend(
        document
            .keys()
            .map(String::as_str)
            .filter(|k| !order.contains(k)),
    );

    let labels: Vec<String> = keys
        .iter()
        .map(|k| if indent == 0 { label(k) } else { k.to_string() })
        .collect();
    let width = labels.iter().map(|l| l.len() + 2).max().unwrap_or(0);
    let pad = " ".repeat(indent);

    let mut lines = Vec::new();
    for (key, label) in keys.iter().zip(&labels) {
        let value = &document[*key];
        let heading = format!("{}:", label);
        match value {
            Value::Object(nested) if !nested.is_empty() => {
                lines.push(format!("{}{}", pad, heading));
                lines.extend(format_document(nested, &[], indent + INDENT));
            }
            Value::Array(items) if items.iter().any(Value::is_object) => {
                lines.push(format!("{}{}", pad, heading));
                for item in items {
                    match item {
                        Value::Object(nested) => {
                            lines.extend(format_document(nested, &[], indent + INDENT));
                        }
                        other => lines.push(format!("{}{}", " ".repeat(indent + INDENT), scalar(other))),
                    }
                }
            }
            other => lines.push(format!("{}{:<width$}{}", pad, heading, scalar(other)).trim_end().to_string()),
        }
    }
    lines
}

/// `display_name` -> `Display Name`
fn label(key: &str) -> String {
    key.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn scalar(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(scalar).collect::<Vec<_>>().join(", "),
        Value::Object(_) => String::new(),
        other => other.to_string(),
    }
}
