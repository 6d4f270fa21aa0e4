use tower_lsp::lsp_types::*;

/// Characters that open a new completion context: quotes for option
/// values, `/` for nested paths, `:` after an option key.
pub const TRIGGER_CHARACTERS: &[&str] = &["\"", "'", "/", ":"];

pub fn server_capabilities() -> ServerCapabilities {
    ServerCapabilities {
        text_document_sync: Some(TextDocumentSyncCapability::Kind(
            TextDocumentSyncKind::INCREMENTAL,
        )),
        completion_provider: Some(CompletionOptions {
            resolve_provider: Some(true),
            trigger_characters: Some(TRIGGER_CHARACTERS.iter().map(|c| c.to_string()).collect()),
            ..Default::default()
        }),
        document_link_provider: Some(DocumentLinkOptions {
            resolve_provider: Some(true),
            work_done_progress_options: Default::default(),
        }),
        ..Default::default()
    }
}
