use crate::LspServer;
use crate::convert;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;

pub async fn completion(
    server: &LspServer,
    params: CompletionParams,
) -> Result<Option<CompletionResponse>> {
    let uri = params.text_document_position.text_document.uri;
    let position = convert::position(params.text_document_position.position);

    let candidates = match server.session.completion(uri.as_str(), position) {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::warn!("completion failed for {}: {}", uri, e);
            return Ok(None);
        }
    };

    let items: Vec<CompletionItem> = candidates
        .into_iter()
        .map(convert::to_completion_item)
        .collect();
    Ok(Some(CompletionResponse::Array(items)))
}

/// Items the server cannot resolve are echoed back untouched.
pub async fn resolve(server: &LspServer, mut item: CompletionItem) -> Result<CompletionItem> {
    let Some(candidate) = convert::deferred_candidate(&item) else {
        return Ok(item);
    };

    match server.session.resolve(candidate) {
        Ok(resolved) => convert::apply_resolved(&mut item, resolved),
        Err(e) => tracing::warn!("completion resolve failed for {}: {}", item.label, e),
    }
    Ok(item)
}
