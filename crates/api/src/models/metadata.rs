use super::text::{Range, Span};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Static facts about the single component declared in a document.
///
/// Produced by the metadata extractor and cached per document version. Name
/// lists keep source order and are not de-duplicated: a duplicate declaration
/// in the source shows up twice here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMetadata {
    /// Custom element name from the `tag` option. Empty when the option is
    /// missing or the options could not be read as a literal.
    pub tag: String,
    /// Decoration options, evaluated as a static literal.
    pub options: serde_json::Map<String, serde_json::Value>,
    pub declaration_span: Span,
    pub declaration_range: Range,
    pub class_body_span: Span,
    /// Decoration expressions and first method statements; completions are
    /// suppressed inside these.
    pub member_regions: Vec<Span>,
    pub properties: Vec<String>,
    pub state_names: Vec<String>,
    pub method_names: Vec<String>,
    /// First argument of every `@Watch(...)`; `None` when it is not a string literal.
    pub watched_names: Vec<Option<String>>,
    pub render: Option<RenderInfo>,
    pub import_clause: Option<ImportClause>,
}

impl ComponentMetadata {
    /// A custom element name must contain a hyphen.
    pub fn has_valid_tag(&self) -> bool {
        self.tag.contains('-')
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.method_names.iter().any(|m| m == name)
    }

    pub fn watched(&self) -> impl Iterator<Item = &str> {
        self.watched_names.iter().filter_map(|w| w.as_deref())
    }

    pub fn is_watched(&self, name: &str) -> bool {
        self.watched().any(|w| w == name)
    }

    /// Properties then state fields, first occurrence wins, minus anything
    /// already bound by a `@Watch`.
    pub fn computed_props(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for name in self.properties.iter().chain(self.state_names.iter()) {
            if self.is_watched(name) || out.contains(name) {
                continue;
            }
            out.push(name.clone());
        }
        out
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RenderInfo {
    pub span: Span,
    pub range: Range,
    pub returns_markup: bool,
}

/// The named-import list pulled from the framework module.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportClause {
    /// Covers the braces: `{ A, B }`.
    pub span: Span,
    pub range: Range,
    pub multiline: bool,
    /// Entries as written, `Original as local` for renamed bindings.
    pub imported_names: Vec<String>,
}
