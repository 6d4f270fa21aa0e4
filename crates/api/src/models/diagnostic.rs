use super::text::Range;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DIAGNOSTIC_SOURCE: &str = "stencil";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticCode {
    InvalidTag = 0,
    MissingRender = 1,
    RenderReturnsMarkup = 2,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub range: Range,
    pub severity: Severity,
    pub code: DiagnosticCode,
    pub message: String,
    pub source: String,
}

/// A clickable reference from a component option to a file on disk.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DocumentLink {
    pub range: Range,
    pub target: PathBuf,
}
