//! Parser service: turns document text into a tree-sitter tree and maps
//! editor positions to byte offsets.

pub mod line_index;
pub mod utils;

use crate::error::{Result, StencilError};
pub use line_index::LineIndex;
use stencil_ls_api::{Language, Position, Range, Span};
use tree_sitter::{Node, Tree};

pub trait SourceParser: Send + Sync {
    /// Never fails on malformed source; errors only when the grammar
    /// itself cannot be loaded.
    fn parse(&self, uri: &str, text: &str) -> Result<ParsedDocument>;
}

/// One parse of one document version. Nodes borrowed from [`ParsedDocument::root`]
/// carry immutable parent links, so queries never mutate the tree.
pub struct ParsedDocument {
    pub uri: String,
    pub language: Language,
    pub text: String,
    pub tree: Tree,
    pub lines: LineIndex,
}

impl ParsedDocument {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn offset_at(&self, position: Position) -> usize {
        self.lines.offset_at(&self.text, position)
    }

    pub fn position_at(&self, offset: usize) -> Position {
        self.lines.position_at(&self.text, offset)
    }

    pub fn range_of(&self, span: Span) -> Range {
        Range::new(self.position_at(span.start), self.position_at(span.end))
    }
}

/// tree-sitter backed TypeScript/TSX parser.
#[derive(Clone)]
pub struct TsParser {
    typescript: tree_sitter::Language,
    tsx: tree_sitter::Language,
}

impl Default for TsParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TsParser {
    pub fn new() -> Self {
        Self {
            typescript: tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            tsx: tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }

    fn grammar(&self, language: &Language) -> &tree_sitter::Language {
        if language.supports_markup() {
            &self.tsx
        } else {
            &self.typescript
        }
    }
}

impl SourceParser for TsParser {
    fn parse(&self, uri: &str, text: &str) -> Result<ParsedDocument> {
        let language = Language::from_uri(uri);
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(self.grammar(&language))
            .map_err(|e| StencilError::Parsing(format!("Failed to set language: {}", e)))?;

        let tree = parser
            .parse(text, None)
            .ok_or_else(|| StencilError::Parsing(format!("Failed to parse {}", uri)))?;

        Ok(ParsedDocument {
            uri: uri.to_string(),
            language,
            text: text.to_string(),
            tree,
            lines: LineIndex::new(text),
        })
    }
}
