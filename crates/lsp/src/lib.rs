pub mod capabilities;
pub mod completion;
pub mod convert;
pub mod links;

use std::sync::Arc;
use stencil_ls_core::{Session, Settings};
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

pub struct LspServer {
    client: Client,
    pub session: Arc<Session>,
}

impl LspServer {
    pub fn new(client: Client) -> Self {
        Self::with_session(client, Arc::new(Session::new()))
    }

    pub fn with_session(client: Client, session: Arc<Session>) -> Self {
        Self { client, session }
    }

    /// Publishes the current diagnostics for `uri`, or clears them when
    /// the document declares no component.
    async fn publish_diagnostics(&self, uri: Url, version: Option<i32>) {
        let diagnostics = match self.session.diagnostics(uri.as_str()) {
            Ok(found) => found.into_iter().map(convert::to_lsp_diagnostic).collect(),
            Err(e) => {
                tracing::warn!("diagnostics failed for {}: {}", uri, e);
                Vec::new()
            }
        };
        self.client
            .publish_diagnostics(uri, diagnostics, version)
            .await;
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for LspServer {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        if let Some(options) = params.initialization_options.as_ref() {
            self.session.update_settings(Settings::from_json(options));
        }
        if let Some(info) = params.client_info.as_ref() {
            tracing::info!("Initializing for client {}", info.name);
        }

        Ok(InitializeResult {
            server_info: Some(ServerInfo {
                name: "Stencil Language Server".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
            capabilities: capabilities::server_capabilities(),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "Stencil language server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        tracing::info!("Shutting down");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;
        // Store before the first await so requests queued behind this
        // notification see the document.
        if let Err(e) = self
            .session
            .open(uri.as_str(), &params.text_document.text, version)
        {
            tracing::warn!("did_open analysis failed for {}: {}", uri, e);
        }
        self.client
            .log_message(
                MessageType::LOG,
                format!("LSP Event: did_open uri={} version={}", uri, version),
            )
            .await;
        self.publish_diagnostics(uri, Some(version)).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;
        let changes: Vec<_> = params
            .content_changes
            .into_iter()
            .map(convert::content_change)
            .collect();

        if let Err(e) = self.session.change(uri.as_str(), version, &changes) {
            tracing::warn!("did_change analysis failed for {}: {}", uri, e);
        }
        self.publish_diagnostics(uri, Some(version)).await;
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        self.client
            .log_message(MessageType::LOG, format!("LSP Event: did_close uri={}", uri))
            .await;
        self.session.close(uri.as_str());
        self.client.publish_diagnostics(uri, Vec::new(), None).await;
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        self.session
            .update_settings(Settings::from_json(&params.settings));
        for uri in self.session.documents().uris() {
            match Url::parse(&uri) {
                Ok(url) => self.publish_diagnostics(url, None).await,
                Err(e) => tracing::warn!("Skipping diagnostics for {}: {}", uri, e),
            }
        }
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;
        let pos = params.text_document_position.position;
        self.client
            .log_message(
                MessageType::LOG,
                format!(
                    "LSP Request: textDocument/completion uri={} pos={}:{}",
                    uri, pos.line, pos.character
                ),
            )
            .await;
        let result = completion::completion(self, params).await;
        if let Ok(Some(CompletionResponse::Array(items))) = &result {
            self.client
                .log_message(
                    MessageType::LOG,
                    format!("LSP Response: found {} completions", items.len()),
                )
                .await;
        }
        result
    }

    async fn completion_resolve(&self, item: CompletionItem) -> Result<CompletionItem> {
        self.client
            .log_message(
                MessageType::LOG,
                format!("LSP Request: completionItem/resolve label={}", item.label),
            )
            .await;
        completion::resolve(self, item).await
    }

    async fn document_link(&self, params: DocumentLinkParams) -> Result<Option<Vec<DocumentLink>>> {
        self.client
            .log_message(
                MessageType::LOG,
                format!(
                    "LSP Request: textDocument/documentLink uri={}",
                    params.text_document.uri
                ),
            )
            .await;
        let result = links::document_link(self, params).await;
        if let Ok(Some(found)) = &result {
            self.client
                .log_message(
                    MessageType::LOG,
                    format!("LSP Response: found {} links", found.len()),
                )
                .await;
        }
        result
    }

    async fn document_link_resolve(&self, link: DocumentLink) -> Result<DocumentLink> {
        Ok(link)
    }
}

pub async fn run_server() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = tower_lsp::LspService::new(LspServer::new);
    tower_lsp::Server::new(stdin, stdout, socket)
        .serve(service)
        .await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower_lsp::LspService;

    const URI: &str = "file:///work/src/my-cmp.tsx";
    const SOURCE: &str =
        "import { Component } from '@stencil/core';\n@Component({ tag: 'my-cmp' })\nexport class MyCmp {\n  \n}\n";

    fn open_params() -> DidOpenTextDocumentParams {
        DidOpenTextDocumentParams {
            text_document: TextDocumentItem::new(
                Url::parse(URI).unwrap(),
                "typescriptreact".into(),
                1,
                SOURCE.into(),
            ),
        }
    }

    #[tokio::test]
    async fn opened_document_is_analysed_before_returning() {
        let (service, _socket) = LspService::new(LspServer::new);
        let server = service.inner();
        server.did_open(open_params()).await;

        let meta = server.session.metadata(URI).unwrap().unwrap();
        assert_eq!(meta.tag, "my-cmp");
        assert_eq!(server.session.cache().extraction_count(), 1);
    }

    #[tokio::test]
    async fn completion_after_open_lists_class_members() {
        let (service, _socket) = LspService::new(LspServer::new);
        let server = service.inner();
        server.did_open(open_params()).await;

        let params = CompletionParams {
            text_document_position: TextDocumentPositionParams::new(
                TextDocumentIdentifier::new(Url::parse(URI).unwrap()),
                Position::new(3, 2),
            ),
            work_done_progress_params: Default::default(),
            partial_result_params: Default::default(),
            context: None,
        };
        let Some(CompletionResponse::Array(items)) = server.completion(params).await.unwrap() else {
            panic!("expected a completion list");
        };
        assert!(items.iter().any(|i| i.label == "State"));
    }
}
