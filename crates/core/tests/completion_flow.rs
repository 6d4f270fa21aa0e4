mod common;

use common::{WIDGET, WIDGET_URI, apply_edits, labels, open_at_cursor, split_cursor};
use stencil_ls_api::{CompletionCandidate, CompletionKind, ContentChange, InsertTextFormat};
use stencil_ls_core::Session;

fn find<'a>(items: &'a [CompletionCandidate], label: &str) -> &'a CompletionCandidate {
    items
        .iter()
        .find(|c| c.label == label)
        .unwrap_or_else(|| panic!("no {} candidate", label))
}

#[test]
fn class_body_completion_then_resolve() {
    let (session, _, position) = open_at_cursor(WIDGET_URI, WIDGET);

    let items = session.completion(WIDGET_URI, position).unwrap();
    assert_eq!(
        labels(&items),
        vec![
            "componentWillLoad",
            "componentDidLoad",
            "componentWillUpdate",
            "componentDidUpdate",
            "componentDidUnload",
            "Prop",
            "Watch",
            "State",
            "Method",
            "Element",
            "Event",
            "Listen",
            "hostData",
        ]
    );

    let watch = session.resolve(find(&items, "Watch").clone()).unwrap();
    assert!(
        watch
            .insert_text
            .as_deref()
            .unwrap()
            .starts_with("@Watch('${1|first,count|}')")
    );
    assert_eq!(watch.insert_text_format, Some(InsertTextFormat::Snippet));
    assert_eq!(watch.additional_text_edits.len(), 1);
    assert_eq!(
        watch.additional_text_edits[0].new_text,
        "{ Component, Prop, Watch }"
    );

    let lifecycle = session
        .resolve(find(&items, "componentDidLoad").clone())
        .unwrap();
    assert!(lifecycle.additional_text_edits.is_empty());
    assert!(
        lifecycle
            .detail
            .as_deref()
            .unwrap()
            .starts_with("Stencil: Component Lifecycle Method")
    );
}

#[test]
fn render_snippet_uses_component_tag() {
    let src = "@Component({ tag: 'my-widget' })\nexport class MyWidget {\n  |\n}\n";
    let (session, _, position) = open_at_cursor(WIDGET_URI, src);
    let items = session.completion(WIDGET_URI, position).unwrap();
    let render = session.resolve(find(&items, "render").clone()).unwrap();
    assert!(
        render
            .insert_text
            .unwrap()
            .contains("<p>Hello <code>my-widget</code></p>")
    );
}

#[test]
fn auto_import_is_idempotent_once_applied() {
    let (session, text, position) = open_at_cursor(WIDGET_URI, WIDGET);
    let items = session.completion(WIDGET_URI, position).unwrap();

    let state = session.resolve(find(&items, "State").clone()).unwrap();
    assert_eq!(state.additional_text_edits.len(), 1);

    let updated = apply_edits(&text, &state.additional_text_edits);
    assert!(updated.starts_with("import { Component, Prop, State } from '@stencil/core';"));

    session
        .change(
            WIDGET_URI,
            2,
            &[ContentChange {
                range: None,
                text: updated,
            }],
        )
        .unwrap();

    let again = session.resolve(find(&items, "State").clone()).unwrap();
    assert!(again.additional_text_edits.is_empty());
}

#[test]
fn resolve_reads_metadata_at_resolve_time() {
    let (session, text, position) = open_at_cursor(WIDGET_URI, WIDGET);
    let items = session.completion(WIDGET_URI, position).unwrap();
    let watch = find(&items, "Watch").clone();

    let watched = text.replace(
        "  @State() count: number;",
        "  @State() count: number;\n  @Watch('first') firstChanged() {}",
    );
    session
        .change(
            WIDGET_URI,
            2,
            &[ContentChange {
                range: None,
                text: watched,
            }],
        )
        .unwrap();

    let resolved = session.resolve(watch).unwrap();
    assert!(
        resolved
            .insert_text
            .unwrap()
            .starts_with("@Watch('${1:count}')")
    );
}

#[test]
fn watch_without_candidates_falls_back_to_generic_name() {
    let src = "@Component({ tag: 'my-widget' })\nexport class MyWidget {\n  |\n}\n";
    let (session, _, position) = open_at_cursor(WIDGET_URI, src);
    let items = session.completion(WIDGET_URI, position).unwrap();
    let watch = session.resolve(find(&items, "Watch").clone()).unwrap();
    assert!(
        watch
            .insert_text
            .unwrap()
            .starts_with("@Watch('${1:propName}')")
    );
    // no framework import in the document
    assert!(watch.additional_text_edits.is_empty());
}

#[test]
fn decorator_arguments_complete_options_and_fields() {
    let prop_src = "@Component({ tag: 'a-b' })\nclass A {\n  @Prop({ | }) value: string;\n}\n";
    let (session, _, position) = open_at_cursor(WIDGET_URI, prop_src);
    let items = session.completion(WIDGET_URI, position).unwrap();
    assert_eq!(
        labels(&items),
        vec!["attr", "context", "connect", "mutable", "reflectToAttr"]
    );
    assert!(items.iter().all(|c| c.kind == CompletionKind::Field));

    let watch_src = "@Component({ tag: 'a-b' })\nclass A {\n  @Prop() value: string;\n  @State() open: boolean;\n  @Watch('|')\n  changed() {}\n}\n";
    let (session, _, position) = open_at_cursor(WIDGET_URI, watch_src);
    let items = session.completion(WIDGET_URI, position).unwrap();
    assert_eq!(labels(&items), vec!["value", "open"]);
}

#[test]
fn documents_without_component_have_no_completions() {
    let src = "export class Plain {\n  |\n}\n";
    let (session, _, position) = open_at_cursor(WIDGET_URI, src);
    assert!(session.metadata(WIDGET_URI).unwrap().is_none());
    assert!(session.completion(WIDGET_URI, position).unwrap().is_empty());
}

#[test]
fn stale_or_foreign_items_resolve_unchanged() {
    let session = Session::new();
    let (text, position) = split_cursor(WIDGET);
    session.open(WIDGET_URI, &text, 1).unwrap();
    let items = session.completion(WIDGET_URI, position).unwrap();
    let prop = find(&items, "Prop").clone();

    session.close(WIDGET_URI);
    assert_eq!(session.resolve(prop.clone()).unwrap(), prop);

    let plain = CompletionCandidate::new("attr", CompletionKind::Field);
    assert_eq!(session.resolve(plain.clone()).unwrap(), plain);
}
