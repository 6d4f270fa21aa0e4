use crate::LspServer;
use crate::convert;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;

pub async fn document_link(
    server: &LspServer,
    params: DocumentLinkParams,
) -> Result<Option<Vec<DocumentLink>>> {
    let uri = params.text_document.uri;
    match server.session.document_links(uri.as_str()) {
        Ok(links) => Ok(Some(links.into_iter().map(convert::to_lsp_link).collect())),
        Err(e) => {
            tracing::warn!("document links failed for {}: {}", uri, e);
            Ok(None)
        }
    }
}
