//! Open documents and the per-version metadata cache.

use crate::ast;
use crate::error::Result;
use crate::parser::{LineIndex, ParsedDocument, SourceParser};
use dashmap::DashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use stencil_ls_api::{ComponentMetadata, ContentChange, Language};

/// Text of one open document at one version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub uri: String,
    pub text: String,
    pub version: i32,
    pub language: Language,
}

impl Document {
    pub fn new(uri: impl Into<String>, text: impl Into<String>, version: i32) -> Self {
        let uri = uri.into();
        let language = Language::from_uri(&uri);
        Self {
            uri,
            text: text.into(),
            version,
            language,
        }
    }

    /// Applies editor changes in order. Each ranged change is resolved
    /// against the text produced by the previous one.
    pub fn apply_changes(&self, changes: &[ContentChange], version: i32) -> Self {
        let mut content = self.text.clone();
        for change in changes {
            match change.range {
                Some(range) => {
                    let lines = LineIndex::new(&content);
                    let start = lines.offset_at(&content, range.start);
                    let end = lines.offset_at(&content, range.end).max(start);
                    content.replace_range(start..end, &change.text);
                }
                None => content = change.text.clone(),
            }
        }
        Self {
            uri: self.uri.clone(),
            text: content,
            version,
            language: self.language.clone(),
        }
    }
}

#[derive(Default)]
pub struct DocumentStore {
    documents: DashMap<String, Arc<Document>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self, uri: &str, text: &str, version: i32) -> Arc<Document> {
        let doc = Arc::new(Document::new(uri, text, version));
        self.documents.insert(uri.to_string(), Arc::clone(&doc));
        doc
    }

    /// Returns `None` when the document was never opened.
    pub fn change(
        &self,
        uri: &str,
        version: i32,
        changes: &[ContentChange],
    ) -> Option<Arc<Document>> {
        let mut entry = self.documents.get_mut(uri)?;
        let updated = Arc::new(entry.value().apply_changes(changes, version));
        *entry.value_mut() = Arc::clone(&updated);
        Some(updated)
    }

    pub fn close(&self, uri: &str) -> bool {
        self.documents.remove(uri).is_some()
    }

    pub fn get(&self, uri: &str) -> Option<Arc<Document>> {
        self.documents.get(uri).map(|d| Arc::clone(d.value()))
    }

    pub fn uris(&self) -> Vec<String> {
        self.documents.iter().map(|d| d.key().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Parse tree plus extracted metadata for one document version.
pub struct Analysis {
    pub version: i32,
    pub parsed: ParsedDocument,
    pub metadata: Option<Arc<ComponentMetadata>>,
}

/// Metadata keyed by document URI, reused only while the stored version
/// matches the document's current version.
pub struct MetadataCache {
    parser: Arc<dyn SourceParser>,
    entries: DashMap<String, Arc<Analysis>>,
    extractions: AtomicUsize,
}

impl MetadataCache {
    pub fn new(parser: Arc<dyn SourceParser>) -> Self {
        Self {
            parser,
            entries: DashMap::new(),
            extractions: AtomicUsize::new(0),
        }
    }

    pub fn analysis(&self, doc: &Document) -> Result<Arc<Analysis>> {
        if let Some(hit) = self.entries.get(&doc.uri) {
            if hit.version == doc.version {
                return Ok(Arc::clone(hit.value()));
            }
        }

        let parsed = self.parser.parse(&doc.uri, &doc.text)?;
        let metadata = ast::extract(&parsed).map(Arc::new);
        self.extractions.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(
            "Extracted metadata for {} v{} (component: {})",
            doc.uri,
            doc.version,
            metadata.is_some()
        );

        let analysis = Arc::new(Analysis {
            version: doc.version,
            parsed,
            metadata,
        });
        self.entries
            .insert(doc.uri.clone(), Arc::clone(&analysis));
        Ok(analysis)
    }

    pub fn get(&self, doc: &Document) -> Result<Option<Arc<ComponentMetadata>>> {
        Ok(self.analysis(doc)?.metadata.clone())
    }

    pub fn invalidate(&self, uri: &str) {
        self.entries.remove(uri);
    }

    pub fn contains(&self, uri: &str) -> bool {
        self.entries.contains_key(uri)
    }

    /// Number of extractor runs since creation.
    pub fn extraction_count(&self) -> usize {
        self.extractions.load(Ordering::Relaxed)
    }
}
