//! services/viewer/src/render/mod.rs
//!
//! Renderers that turn pipeline records into text, HTML or JSON.

pub mod html;
pub mod json;
pub mod text;

use interrogation_core::{Group, MembershipTag, RenderRecord};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Html => f.write_str("html"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("'{}' is not one of text, html, json", other)),
        }
    }
}

/// Display prefixes for the two participant groups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupLabels {
    pub a: String,
    pub b: String,
}

impl GroupLabels {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    pub fn tag(&self, tag: &MembershipTag) -> String {
        match tag.group {
            Group::A => tag.label(&self.a),
            Group::B => tag.label(&self.b),
        }
    }
}

impl Default for GroupLabels {
    fn default() -> Self {
        Self::new("I", "O")
    }
}

/// Renders a whole view in the requested format.
pub fn render(
    format: OutputFormat,
    records: &[RenderRecord],
    labels: &GroupLabels,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(text::render(records, labels)),
        OutputFormat::Html => Ok(html::render(records, labels)),
        OutputFormat::Json => json::render(records, labels),
    }
}
