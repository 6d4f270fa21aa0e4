//! Single-pass extraction of [`ComponentMetadata`] from a parsed document.
//!
//! A document holds at most one recognized component: the first
//! `@Component` class met in pre-order wins and nothing below or after it
//! is considered.

use super::literal::{LiteralValue, evaluate};
use super::query::{
    class_decorators, decorator_call, direct_decorators, is_component_declaration,
    is_decorated_as, is_markup_producing, string_value,
};
use crate::parser::ParsedDocument;
use crate::parser::utils::{children, named_children, node_text, span_of};
use stencil_ls_api::{ComponentMetadata, ImportClause, RenderInfo};
use tree_sitter::Node;

/// Package whose named imports receive auto-import edits.
pub const FRAMEWORK_MODULE: &str = "@stencil/core";

/// `None` means the document declares no component; that is not an error.
pub fn extract(doc: &ParsedDocument) -> Option<ComponentMetadata> {
    let source = doc.text.as_str();
    let class = find_component(doc.root(), source)?;

    let declaration = class
        .parent()
        .filter(|p| p.kind() == "export_statement")
        .unwrap_or(class);
    let declaration_span = span_of(declaration);

    let options = component_options(class, source);
    let tag = options
        .get("tag")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    let mut meta = ComponentMetadata {
        tag,
        options,
        declaration_span,
        declaration_range: doc.range_of(declaration_span),
        ..Default::default()
    };

    if let Some(body) = class.child_by_field_name("body") {
        meta.class_body_span = span_of(body);
        collect_members(doc, body, &mut meta);
    }

    meta.import_clause = find_import_clause(doc, FRAMEWORK_MODULE);
    tracing::debug!(
        "extracted component <{}> from {}: {} props, {} states, {} methods",
        meta.tag,
        doc.uri,
        meta.properties.len(),
        meta.state_names.len(),
        meta.method_names.len()
    );
    Some(meta)
}

/// Pre-order search that stops at the first component declaration.
fn find_component<'t>(node: Node<'t>, source: &str) -> Option<Node<'t>> {
    if is_component_declaration(node, source) {
        return Some(node);
    }
    children(node)
        .into_iter()
        .find_map(|child| find_component(child, source))
}

/// First argument of `@Component(...)` read as a static literal. Anything that
/// is not a plain literal object degrades to an empty record.
fn component_options(class: Node<'_>, source: &str) -> serde_json::Map<String, serde_json::Value> {
    let Some(call) = class_decorators(class)
        .into_iter()
        .filter_map(|d| decorator_call(d, source))
        .find(|c| c.name == "Component")
    else {
        return serde_json::Map::new();
    };

    let first_arg = named_children(call.arguments)
        .into_iter()
        .find(|n| n.kind() != "comment");
    let value = first_arg.map(|arg| evaluate(arg, source));

    match value {
        Some(value @ LiteralValue::Object(_)) if value.is_literal() => match value.to_json() {
            serde_json::Value::Object(map) => map,
            _ => serde_json::Map::new(),
        },
        Some(_) => {
            tracing::debug!("component options are not a static literal; ignoring them");
            serde_json::Map::new()
        }
        None => serde_json::Map::new(),
    }
}

/// Walks the class body in order. Decorators that precede a member as
/// siblings belong to that member, as do the ones nested in it.
fn collect_members(doc: &ParsedDocument, body: Node<'_>, meta: &mut ComponentMetadata) {
    let mut pending: Vec<Node<'_>> = Vec::new();
    for child in named_children(body) {
        match child.kind() {
            "decorator" => pending.push(child),
            "comment" => {}
            _ => {
                let mut decorators = std::mem::take(&mut pending);
                decorators.extend(direct_decorators(child));
                classify_member(doc, child, &decorators, meta);
            }
        }
    }
}

fn classify_member(
    doc: &ParsedDocument,
    member: Node<'_>,
    decorators: &[Node<'_>],
    meta: &mut ComponentMetadata,
) {
    let source = doc.text.as_str();

    for decorator in decorators {
        if let Some(expression) = named_children(*decorator).into_iter().next() {
            meta.member_regions.push(span_of(expression));
        }
        if let Some(call) = decorator_call(*decorator, source).filter(|c| c.name == "Watch") {
            let watched = named_children(call.arguments)
                .into_iter()
                .find(|n| n.kind() != "comment")
                .and_then(|arg| string_value(arg, source))
                .map(str::to_string);
            meta.watched_names.push(watched);
        }
    }

    let Some(name) = member_name(member, source) else {
        return;
    };

    if is_decorated_as("Prop", source)(decorators) {
        meta.properties.push(name);
    } else if is_decorated_as("State", source)(decorators) {
        meta.state_names.push(name);
    } else if member.kind() == "method_definition" {
        let body = member.child_by_field_name("body");
        if name == "render" {
            let returns_markup = body
                .and_then(last_return_statement)
                .is_some_and(is_markup_producing);
            let span = span_of(member);
            meta.render = Some(RenderInfo {
                span,
                range: doc.range_of(span),
                returns_markup,
            });
        }
        if let Some(first) = body.and_then(|b| {
            named_children(b)
                .into_iter()
                .find(|n| n.kind() != "comment")
        }) {
            meta.member_regions.push(span_of(first));
        }
        meta.method_names.push(name);
    }
}

fn member_name(member: Node<'_>, source: &str) -> Option<String> {
    let name = member.child_by_field_name("name")?;
    match string_value(name, source) {
        Some(unquoted) => Some(unquoted.to_string()),
        None => Some(node_text(name, source).to_string()),
    }
}

fn last_return_statement(block: Node<'_>) -> Option<Node<'_>> {
    named_children(block)
        .into_iter()
        .filter(|n| n.kind() == "return_statement")
        .last()
}

/// First `import { ... } from '<module>'` anywhere in the tree.
pub fn find_import_clause(doc: &ParsedDocument, module: &str) -> Option<ImportClause> {
    find_import_in(doc, doc.root(), module)
}

fn find_import_in(doc: &ParsedDocument, node: Node<'_>, module: &str) -> Option<ImportClause> {
    if node.kind() == "import_statement" {
        return import_clause_of(doc, node, module);
    }
    children(node)
        .into_iter()
        .find_map(|child| find_import_in(doc, child, module))
}

fn import_clause_of(doc: &ParsedDocument, statement: Node<'_>, module: &str) -> Option<ImportClause> {
    let source = doc.text.as_str();
    let from = statement.child_by_field_name("source")?;
    if string_value(from, source)? != module {
        return None;
    }

    let named = named_children(statement)
        .into_iter()
        .find(|n| n.kind() == "import_clause")
        .and_then(|clause| {
            named_children(clause)
                .into_iter()
                .find(|n| n.kind() == "named_imports")
        })?;

    let imported_names = named_children(named)
        .into_iter()
        .filter(|n| n.kind() == "import_specifier")
        .filter_map(|specifier| {
            let name = node_text(specifier.child_by_field_name("name")?, source);
            Some(match specifier.child_by_field_name("alias") {
                Some(alias) => format!("{} as {}", name, node_text(alias, source)),
                None => name.to_string(),
            })
        })
        .collect();

    let span = span_of(named);
    let range = doc.range_of(span);
    Some(ImportClause {
        span,
        range,
        multiline: range.is_multiline(),
        imported_names,
    })
}
