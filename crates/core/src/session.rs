//! Per-connection state: open documents, their cached analyses, settings
//! and the filesystem collaborator.

use crate::config::Settings;
use crate::error::Result;
use crate::features::{self, FsPathCompleter, PathCompleter};
use crate::parser::{SourceParser, TsParser};
use crate::store::{Analysis, DocumentStore, MetadataCache};
use std::sync::{Arc, RwLock};
use stencil_ls_api::{
    ComponentMetadata, CompletionCandidate, ContentChange, Diagnostic, DocumentLink, Position,
};

pub struct Session {
    documents: DocumentStore,
    cache: MetadataCache,
    paths: Arc<dyn PathCompleter>,
    settings: RwLock<Settings>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_collaborators(Arc::new(TsParser::new()), Arc::new(FsPathCompleter))
    }

    pub fn with_collaborators(
        parser: Arc<dyn SourceParser>,
        paths: Arc<dyn PathCompleter>,
    ) -> Self {
        Self {
            documents: DocumentStore::new(),
            cache: MetadataCache::new(parser),
            paths,
            settings: RwLock::new(Settings::default()),
        }
    }

    pub fn settings(&self) -> Settings {
        match self.settings.read() {
            Ok(settings) => settings.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn update_settings(&self, settings: Settings) {
        tracing::info!("Settings updated: {:?}", settings);
        match self.settings.write() {
            Ok(mut current) => *current = settings,
            Err(poisoned) => *poisoned.into_inner() = settings,
        }
    }

    pub fn cache(&self) -> &MetadataCache {
        &self.cache
    }

    pub fn documents(&self) -> &DocumentStore {
        &self.documents
    }

    /// Stores the document and extracts its metadata right away.
    pub fn open(
        &self,
        uri: &str,
        text: &str,
        version: i32,
    ) -> Result<Option<Arc<ComponentMetadata>>> {
        let doc = self.documents.open(uri, text, version);
        self.cache.get(&doc)
    }

    /// Applies the changes and re-extracts. Changes for documents that were
    /// never opened are dropped.
    pub fn change(
        &self,
        uri: &str,
        version: i32,
        changes: &[ContentChange],
    ) -> Result<Option<Arc<ComponentMetadata>>> {
        let Some(doc) = self.documents.change(uri, version, changes) else {
            tracing::warn!("Change for unopened document {}", uri);
            return Ok(None);
        };
        self.cache.get(&doc)
    }

    pub fn close(&self, uri: &str) {
        self.documents.close(uri);
        self.cache.invalidate(uri);
    }

    /// `None` when the document is not open.
    fn analysis(&self, uri: &str) -> Result<Option<Arc<Analysis>>> {
        match self.documents.get(uri) {
            Some(doc) => self.cache.analysis(&doc).map(Some),
            None => Ok(None),
        }
    }

    pub fn metadata(&self, uri: &str) -> Result<Option<Arc<ComponentMetadata>>> {
        Ok(self.analysis(uri)?.and_then(|a| a.metadata.clone()))
    }

    pub fn completion(&self, uri: &str, position: Position) -> Result<Vec<CompletionCandidate>> {
        let Some(analysis) = self.analysis(uri)? else {
            return Ok(Vec::new());
        };
        let offset = analysis.parsed.offset_at(position);
        Ok(features::completions(&analysis, offset, self.paths.as_ref()))
    }

    /// Resolves against the metadata of the document as it is now, not as
    /// it was when the candidate was produced.
    pub fn resolve(&self, item: CompletionCandidate) -> Result<CompletionCandidate> {
        let Some(uri) = item.data.as_ref().map(|d| d.uri.clone()) else {
            return Ok(item);
        };
        match self.metadata(&uri)? {
            Some(meta) => Ok(features::resolve(item, &meta)),
            None => Ok(item),
        }
    }

    pub fn diagnostics(&self, uri: &str) -> Result<Vec<Diagnostic>> {
        let settings = self.settings();
        if !settings.diagnostics {
            return Ok(Vec::new());
        }
        Ok(self
            .metadata(uri)?
            .map(|meta| features::validate(&meta, settings.max_number_of_problems))
            .unwrap_or_default())
    }

    pub fn document_links(&self, uri: &str) -> Result<Vec<DocumentLink>> {
        Ok(self
            .analysis(uri)?
            .map(|a| features::document_links(&a.parsed))
            .unwrap_or_default())
    }
}
