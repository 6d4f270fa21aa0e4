//! Links from component style and asset options to files on disk.

use crate::ast::query::{decorator_call, pair_key, string_value};
use crate::parser::ParsedDocument;
use crate::parser::utils::{children, named_children};
use crate::util::resolve_relative;
use stencil_ls_api::{DocumentLink, Span};
use tree_sitter::Node;

const LINKED_OPTIONS: &[&str] = &["styleUrl", "styleUrls", "assetsDir", "assetsDirs"];

pub fn document_links(doc: &ParsedDocument) -> Vec<DocumentLink> {
    let source = doc.text.as_str();
    let Some(options) = first_component_options(doc.root(), source) else {
        return Vec::new();
    };

    let mut links = Vec::new();
    for pair in named_children(options).into_iter().filter(|n| n.kind() == "pair") {
        let linked = pair_key(pair, source).is_some_and(|k| LINKED_OPTIONS.contains(&k));
        if !linked {
            continue;
        }
        if let Some(value) = pair.child_by_field_name("value") {
            collect(doc, value, &mut links);
        }
    }
    links
}

/// Object argument of the first `@Component(...)` in pre-order.
fn first_component_options<'t>(node: Node<'t>, source: &str) -> Option<Node<'t>> {
    if node.kind() == "decorator" {
        if let Some(call) = decorator_call(node, source).filter(|c| c.name == "Component") {
            return named_children(call.arguments)
                .into_iter()
                .find(|n| n.kind() == "object");
        }
    }
    children(node)
        .into_iter()
        .find_map(|child| first_component_options(child, source))
}

/// Strings reachable through arrays and object values.
fn collect(doc: &ParsedDocument, node: Node<'_>, links: &mut Vec<DocumentLink>) {
    match node.kind() {
        "string" => {
            let Some(text) = string_value(node, &doc.text).map(str::trim) else {
                return;
            };
            if text.is_empty() {
                return;
            }
            let target = match resolve_relative(&doc.uri, text) {
                Ok(target) => target,
                Err(e) => {
                    tracing::debug!("Skipping link {:?}: {}", text, e);
                    return;
                }
            };
            let inner = Span::new(node.start_byte() + 1, node.end_byte().saturating_sub(1));
            links.push(DocumentLink {
                range: doc.range_of(inner),
                target,
            });
        }
        "array" => {
            for element in named_children(node) {
                collect(doc, element, links);
            }
        }
        "object" => {
            for pair in named_children(node).into_iter().filter(|n| n.kind() == "pair") {
                if let Some(value) = pair.child_by_field_name("value") {
                    collect(doc, value, links);
                }
            }
        }
        _ => {}
    }
}
