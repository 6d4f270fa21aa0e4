use super::text::TextEdit;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionKind {
    Method,
    Function,
    Field,
    File,
    Folder,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertTextFormat {
    PlainText,
    Snippet,
}

/// Round-tripped through the editor so the resolve step can find the
/// static content entry and the originating document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompletionData {
    pub id: u32,
    pub uri: String,
}

/// Which content table a deferred id belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentGroup {
    Decorator,
    LifecycleMethod,
    Method,
}

impl ContentGroup {
    pub fn of(id: u32) -> Option<Self> {
        match id {
            100..=199 => Some(Self::Decorator),
            200..=299 => Some(Self::LifecycleMethod),
            300..=399 => Some(Self::Method),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompletionCandidate {
    pub label: String,
    pub kind: CompletionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_text_format: Option<InsertTextFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_text: Option<String>,
    /// Markdown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_text_edits: Vec<TextEdit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<CompletionData>,
}

impl CompletionCandidate {
    pub fn new(label: impl Into<String>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            insert_text: None,
            insert_text_format: None,
            sort_text: None,
            documentation: None,
            additional_text_edits: Vec::new(),
            data: None,
        }
    }

    pub fn with_insert(mut self, text: impl Into<String>, format: InsertTextFormat) -> Self {
        self.insert_text = Some(text.into());
        self.insert_text_format = Some(format);
        self
    }

    pub fn with_sort_text(mut self, sort_text: impl Into<String>) -> Self {
        self.sort_text = Some(sort_text.into());
        self
    }

    pub fn deferred(mut self, id: u32, uri: impl Into<String>) -> Self {
        self.data = Some(CompletionData {
            id,
            uri: uri.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_ranges_map_to_groups() {
        assert_eq!(ContentGroup::of(100), Some(ContentGroup::Decorator));
        assert_eq!(ContentGroup::of(199), Some(ContentGroup::Decorator));
        assert_eq!(ContentGroup::of(204), Some(ContentGroup::LifecycleMethod));
        assert_eq!(ContentGroup::of(301), Some(ContentGroup::Method));
        assert_eq!(ContentGroup::of(42), None);
        assert_eq!(ContentGroup::of(400), None);
    }
}
