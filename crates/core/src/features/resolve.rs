//! Fills in deferred completion candidates.

use super::content::{self, Snippet};
use crate::ast::FRAMEWORK_MODULE;
use crate::auto_import::auto_import_edit;
use stencil_ls_api::{ComponentMetadata, CompletionCandidate, ContentGroup, InsertTextFormat};

const COMPUTED_PROPS: &str = "{{computedProps}}";
const COMPONENT_TAG: &str = "{{componentTag}}";

/// Completes `item` against the document's current metadata. Items without
/// deferred data or with an unknown id come back unchanged.
pub fn resolve(mut item: CompletionCandidate, meta: &ComponentMetadata) -> CompletionCandidate {
    let Some(id) = item.data.as_ref().map(|d| d.id) else {
        return item;
    };
    let (Some(group), Some(snippet)) = (ContentGroup::of(id), content::lookup(id)) else {
        tracing::debug!("Unknown completion id {}", id);
        return item;
    };

    let mut body = snippet.body_text();
    match group {
        ContentGroup::LifecycleMethod => {
            item.detail = Some(format!(
                "Stencil: Component Lifecycle Method\n{}",
                snippet.label
            ));
            item.documentation = Some(snippet.description_text());
        }
        ContentGroup::Method => {
            item.detail = Some(format!("Stencil: Component Method\n{}", snippet.label));
            item.documentation = Some(with_preview(snippet));
            if snippet.label == "render" {
                body = body.replace(COMPONENT_TAG, &meta.tag);
            }
        }
        ContentGroup::Decorator => {
            item.detail = Some(format!(
                "Stencil: @{}() Decorator\nAuto import from '{}'",
                snippet.label, FRAMEWORK_MODULE
            ));
            item.documentation = Some(with_preview(snippet));
            if let Some(names) = snippet.auto_import {
                item.additional_text_edits = auto_import_edit(meta.import_clause.as_ref(), names);
            }
            if snippet.label == "Watch" {
                body = body.replace(COMPUTED_PROPS, &watch_placeholder(&meta.computed_props()));
            }
        }
    }

    item.insert_text = Some(body);
    item.insert_text_format = Some(InsertTextFormat::Snippet);
    item
}

fn with_preview(snippet: &Snippet) -> String {
    format!(
        "{}\n\n```ts\n{}\n```",
        snippet.description_text(),
        snippet.preview_text()
    )
}

/// Tail of the `${1...}` tab stop in the Watch snippet: a choice list,
/// a single default, or a generic default.
fn watch_placeholder(props: &[String]) -> String {
    match props {
        [] => ":propName".to_string(),
        [only] => format!(":{}", only),
        many => format!("|{}|", many.join(",")),
    }
}
