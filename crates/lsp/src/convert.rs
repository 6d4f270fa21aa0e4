//! Conversions between protocol types and `stencil-ls-api` models.

use stencil_ls_api as api;
use tower_lsp::lsp_types::*;

pub fn position(p: Position) -> api::Position {
    api::Position::new(p.line, p.character)
}

pub fn to_lsp_position(p: api::Position) -> Position {
    Position::new(p.line, p.character)
}

pub fn range(r: Range) -> api::Range {
    api::Range::new(position(r.start), position(r.end))
}

pub fn to_lsp_range(r: api::Range) -> Range {
    Range::new(to_lsp_position(r.start), to_lsp_position(r.end))
}

pub fn content_change(change: TextDocumentContentChangeEvent) -> api::ContentChange {
    api::ContentChange {
        range: change.range.map(range),
        text: change.text,
    }
}

pub fn to_lsp_edit(edit: &api::TextEdit) -> TextEdit {
    TextEdit::new(to_lsp_range(edit.range), edit.new_text.clone())
}

fn to_lsp_kind(kind: api::CompletionKind) -> CompletionItemKind {
    match kind {
        api::CompletionKind::Method => CompletionItemKind::METHOD,
        api::CompletionKind::Function => CompletionItemKind::FUNCTION,
        api::CompletionKind::Field => CompletionItemKind::FIELD,
        api::CompletionKind::File => CompletionItemKind::FILE,
        api::CompletionKind::Folder => CompletionItemKind::FOLDER,
    }
}

fn kind(kind: Option<CompletionItemKind>) -> api::CompletionKind {
    match kind {
        Some(CompletionItemKind::METHOD) => api::CompletionKind::Method,
        Some(CompletionItemKind::FIELD) => api::CompletionKind::Field,
        Some(CompletionItemKind::FILE) => api::CompletionKind::File,
        Some(CompletionItemKind::FOLDER) => api::CompletionKind::Folder,
        _ => api::CompletionKind::Function,
    }
}

fn to_lsp_format(format: api::InsertTextFormat) -> InsertTextFormat {
    match format {
        api::InsertTextFormat::PlainText => InsertTextFormat::PLAIN_TEXT,
        api::InsertTextFormat::Snippet => InsertTextFormat::SNIPPET,
    }
}

fn markdown(value: String) -> Documentation {
    Documentation::MarkupContent(MarkupContent {
        kind: MarkupKind::Markdown,
        value,
    })
}

pub fn to_completion_item(candidate: api::CompletionCandidate) -> CompletionItem {
    let data = candidate
        .data
        .as_ref()
        .and_then(|d| serde_json::to_value(d).ok());
    let additional_text_edits = (!candidate.additional_text_edits.is_empty())
        .then(|| candidate.additional_text_edits.iter().map(to_lsp_edit).collect());

    CompletionItem {
        label: candidate.label,
        kind: Some(to_lsp_kind(candidate.kind)),
        detail: candidate.detail,
        documentation: candidate.documentation.map(markdown),
        sort_text: candidate.sort_text,
        insert_text: candidate.insert_text,
        insert_text_format: candidate.insert_text_format.map(to_lsp_format),
        additional_text_edits,
        data,
        ..Default::default()
    }
}

/// The deferred part of a protocol item, or `None` when the item carries
/// no readable completion data.
pub fn deferred_candidate(item: &CompletionItem) -> Option<api::CompletionCandidate> {
    let data: api::CompletionData = serde_json::from_value(item.data.clone()?).ok()?;
    Some(api::CompletionCandidate::new(item.label.clone(), kind(item.kind)).deferred(data.id, data.uri))
}

/// Copies the resolved fields onto the item the client sent, leaving
/// everything else as the client had it.
pub fn apply_resolved(item: &mut CompletionItem, resolved: api::CompletionCandidate) {
    if resolved.detail.is_some() {
        item.detail = resolved.detail;
    }
    if let Some(docs) = resolved.documentation {
        item.documentation = Some(markdown(docs));
    }
    if resolved.insert_text.is_some() {
        item.insert_text = resolved.insert_text;
    }
    if let Some(format) = resolved.insert_text_format {
        item.insert_text_format = Some(to_lsp_format(format));
    }
    if !resolved.additional_text_edits.is_empty() {
        item.additional_text_edits = Some(
            resolved
                .additional_text_edits
                .iter()
                .map(to_lsp_edit)
                .collect(),
        );
    }
}

pub fn to_lsp_diagnostic(diagnostic: api::Diagnostic) -> Diagnostic {
    let severity = match diagnostic.severity {
        api::Severity::Error => DiagnosticSeverity::ERROR,
        api::Severity::Warning => DiagnosticSeverity::WARNING,
    };
    Diagnostic {
        range: to_lsp_range(diagnostic.range),
        severity: Some(severity),
        code: Some(NumberOrString::Number(diagnostic.code as i32)),
        source: Some(diagnostic.source),
        message: diagnostic.message,
        ..Default::default()
    }
}

pub fn to_lsp_link(link: api::DocumentLink) -> DocumentLink {
    DocumentLink {
        range: to_lsp_range(link.range),
        target: Url::from_file_path(&link.target).ok(),
        tooltip: None,
        data: None,
    }
}
