//! Context-sensitive completion candidates.

use super::content::{DECORATORS, LIFECYCLE_METHODS, METHODS, Snippet};
use super::paths::{PathCompleter, PathEntry, STYLE_PATTERNS};
use crate::ast::query::{enclosing_decorator_name, find_node_containing, pair_key, string_value};
use crate::parser::utils::named_children;
use crate::store::Analysis;
use crate::util::resolve_relative;
use stencil_ls_api::{ComponentMetadata, CompletionCandidate, CompletionKind, InsertTextFormat};
use tree_sitter::Node;

const PROP_STRING_OPTIONS: &[&str] = &["attr", "context", "connect"];
const PROP_BOOL_OPTIONS: &[&str] = &["mutable", "reflectToAttr"];

/// What a path completion should list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PathMode {
    StyleFiles,
    Directories,
}

/// Candidates for the cursor at `offset`, in presentation order.
///
/// Returns nothing when the document declares no component or the cursor
/// is not in a recognized position.
pub fn provide(
    analysis: &Analysis,
    offset: usize,
    paths: &dyn PathCompleter,
) -> Vec<CompletionCandidate> {
    let Some(meta) = analysis.metadata.as_deref() else {
        return Vec::new();
    };
    let doc = &analysis.parsed;
    let source = doc.text.as_str();

    let Some(node) = find_node_containing(doc.root(), offset).map(normalize) else {
        return Vec::new();
    };

    match node.kind() {
        "class_body" => class_member_candidates(meta, &doc.uri),
        "object" | "string" => match enclosing_decorator_name(node, source) {
            Some("Prop") => prop_option_candidates(),
            Some("Watch") => watch_candidates(meta),
            Some(_) => Vec::new(),
            None if node.kind() == "string" => path_candidates(node, source, &doc.uri, paths),
            None => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Fragments inside a string literal stand for the literal itself.
fn normalize(node: Node<'_>) -> Node<'_> {
    match node.kind() {
        "string_fragment" | "escape_sequence" => node.parent().unwrap_or(node),
        _ => node,
    }
}

fn class_member_candidates(meta: &ComponentMetadata, uri: &str) -> Vec<CompletionCandidate> {
    let lifecycle = LIFECYCLE_METHODS
        .iter()
        .filter(|s| !meta.has_method(s.label))
        .map(|s| deferred(s, CompletionKind::Method, uri));
    let decorators = DECORATORS
        .iter()
        .map(|s| deferred(s, CompletionKind::Function, uri));
    let methods = METHODS
        .iter()
        .filter(|s| !meta.has_method(s.label))
        .map(|s| deferred(s, CompletionKind::Method, uri));

    lifecycle.chain(decorators).chain(methods).collect()
}

fn deferred(snippet: &Snippet, kind: CompletionKind, uri: &str) -> CompletionCandidate {
    CompletionCandidate::new(snippet.label, kind).deferred(snippet.id, uri)
}

fn prop_option_candidates() -> Vec<CompletionCandidate> {
    let strings = PROP_STRING_OPTIONS.iter().map(|label| {
        CompletionCandidate::new(*label, CompletionKind::Field)
            .with_insert(format!("{}: '$0'", label), InsertTextFormat::Snippet)
    });
    let bools = PROP_BOOL_OPTIONS.iter().map(|label| {
        CompletionCandidate::new(*label, CompletionKind::Field)
            .with_insert(format!("{}: ${{1|true,false|}}", label), InsertTextFormat::Snippet)
    });
    strings.chain(bools).collect()
}

fn watch_candidates(meta: &ComponentMetadata) -> Vec<CompletionCandidate> {
    meta.computed_props()
        .into_iter()
        .map(|name| {
            CompletionCandidate::new(name.clone(), CompletionKind::Field)
                .with_insert(name, InsertTextFormat::PlainText)
        })
        .collect()
}

/// Option keys whose string values name files or directories.
fn path_mode(key: &str) -> Option<PathMode> {
    match key {
        "styleUrl" | "styleUrls" => Some(PathMode::StyleFiles),
        "assetsDir" | "assetsDirs" => Some(PathMode::Directories),
        _ => None,
    }
}

/// Key of the `pair` that has `value` as its value.
fn owning_key<'s>(value: Node<'_>, source: &'s str) -> Option<&'s str> {
    let pair = value.parent().filter(|p| p.kind() == "pair")?;
    pair_key(pair, source)
}

/// `{ styleUrls: { mode: <value> } }`: the value sits in an object keyed
/// under `styleUrls`.
fn under_mode_style_urls(value: Node<'_>, source: &str) -> bool {
    value
        .parent()
        .filter(|p| p.kind() == "pair")
        .and_then(|pair| pair.parent())
        .filter(|obj| obj.kind() == "object")
        .is_some_and(|obj| owning_key(obj, source) == Some("styleUrls"))
}

fn path_candidates(
    string: Node<'_>,
    source: &str,
    uri: &str,
    paths: &dyn PathCompleter,
) -> Vec<CompletionCandidate> {
    let Some(text) = string_value(string, source) else {
        return Vec::new();
    };
    let Some(parent) = string.parent() else {
        return Vec::new();
    };

    // 1. An element of an array literal: plural options.
    if parent.kind() == "array" {
        let mode = match owning_key(parent, source) {
            Some("styleUrls") => Some(PathMode::StyleFiles),
            Some("assetsDirs") => Some(PathMode::Directories),
            _ if under_mode_style_urls(parent, source) => Some(PathMode::StyleFiles),
            _ => None,
        };
        let Some(mode) = mode else {
            return Vec::new();
        };
        let existing: Vec<&str> = named_children(parent)
            .into_iter()
            .filter_map(|el| string_value(el, source))
            .collect();
        return list_paths(uri, text, mode, paths)
            .into_iter()
            .filter(|c| !existing.contains(&c.label.as_str()))
            .collect();
    }

    // 2. The direct value of a singular option.
    let mode = match owning_key(string, source) {
        Some(key @ ("styleUrl" | "assetsDir")) => path_mode(key),
        _ if under_mode_style_urls(string, source) => Some(PathMode::StyleFiles),
        _ => None,
    };
    mode.map(|mode| list_paths(uri, text, mode, paths))
        .unwrap_or_default()
}

fn list_paths(
    uri: &str,
    relative: &str,
    mode: PathMode,
    paths: &dyn PathCompleter,
) -> Vec<CompletionCandidate> {
    let base = match resolve_relative(uri, relative) {
        Ok(base) => base,
        Err(e) => {
            tracing::debug!("No path completions for {}: {}", uri, e);
            return Vec::new();
        }
    };

    let listed = match mode {
        PathMode::StyleFiles => paths.list_candidates(&base, STYLE_PATTERNS, true, true),
        PathMode::Directories => paths.list_candidates(&base, &[], false, true),
    };

    match listed {
        Ok(entries) => entries.into_iter().map(path_candidate).collect(),
        Err(e) => {
            tracing::warn!("Failed to list {}: {}", base.display(), e);
            Vec::new()
        }
    }
}

fn path_candidate(entry: PathEntry) -> CompletionCandidate {
    if entry.is_dir {
        let sort = format!("aaa-{}", entry.name);
        CompletionCandidate::new(entry.name, CompletionKind::Folder).with_sort_text(sort)
    } else {
        let sort = format!("zzz-{}", entry.name);
        CompletionCandidate::new(entry.name, CompletionKind::File).with_sort_text(sort)
    }
}
