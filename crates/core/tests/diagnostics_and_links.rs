mod common;

use common::{labels, split_cursor};
use std::fs;
use stencil_ls_api::{CompletionKind, DiagnosticCode, Severity};
use stencil_ls_core::util::path_to_uri;
use stencil_ls_core::{Session, Settings};
use tempfile::tempdir;

#[test]
fn style_urls_complete_from_disk() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.css"), "").unwrap();
    fs::write(dir.path().join("b.scss"), "").unwrap();
    fs::write(dir.path().join("colors.vars.css"), "").unwrap();
    fs::create_dir(dir.path().join("themes")).unwrap();
    let uri = path_to_uri(&dir.path().join("my-cmp.tsx")).unwrap();

    let (text, position) = split_cursor(
        "@Component({ tag: 'my-cmp', styleUrls: ['a.css', '|'] })\nexport class MyCmp {}\n",
    );
    let session = Session::new();
    session.open(&uri, &text, 1).unwrap();

    let items = session.completion(&uri, position).unwrap();
    assert_eq!(labels(&items), vec!["b.scss", "themes"]);
    assert_eq!(items[0].kind, CompletionKind::File);
    assert_eq!(items[1].kind, CompletionKind::Folder);
}

#[test]
fn assets_dir_lists_directories_only() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.css"), "").unwrap();
    fs::create_dir_all(dir.path().join("assets/icons")).unwrap();
    let uri = path_to_uri(&dir.path().join("my-cmp.tsx")).unwrap();

    let (text, position) = split_cursor(
        "@Component({ tag: 'my-cmp', assetsDir: 'assets/|' })\nexport class MyCmp {}\n",
    );
    let session = Session::new();
    session.open(&uri, &text, 1).unwrap();

    let items = session.completion(&uri, position).unwrap();
    assert_eq!(labels(&items), vec!["icons"]);
}

#[test]
fn links_point_next_to_the_component() {
    let dir = tempdir().unwrap();
    let uri = path_to_uri(&dir.path().join("my-cmp.tsx")).unwrap();
    let session = Session::new();
    session
        .open(
            &uri,
            "@Component({ tag: 'my-cmp', styleUrl: 'my-cmp.css', assetsDirs: ['assets'] })\nexport class MyCmp {}\n",
            1,
        )
        .unwrap();

    let links = session.document_links(&uri).unwrap();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].target, dir.path().join("my-cmp.css"));
    assert_eq!(links[1].target, dir.path().join("assets"));
}

#[test]
fn diagnostics_follow_settings() {
    let uri = "file:///work/widget.tsx";
    let session = Session::new();
    session
        .open(uri, "@Component({ tag: 'widget' })\nexport class Widget {}\n", 1)
        .unwrap();

    let found = session.diagnostics(uri).unwrap();
    let codes: Vec<_> = found.iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![DiagnosticCode::InvalidTag, DiagnosticCode::MissingRender]
    );
    assert!(found.iter().all(|d| d.severity == Severity::Error));

    session.update_settings(Settings {
        max_number_of_problems: 1,
        ..Settings::default()
    });
    assert_eq!(session.diagnostics(uri).unwrap().len(), 1);

    session.update_settings(Settings {
        diagnostics: false,
        ..Settings::default()
    });
    assert!(session.diagnostics(uri).unwrap().is_empty());
}

#[test]
fn render_without_markup_is_flagged() {
    let uri = "file:///work/my-widget.tsx";
    let session = Session::new();
    session
        .open(
            uri,
            "@Component({ tag: 'my-widget' })\nexport class MyWidget {\n  render() {\n    return null;\n  }\n}\n",
            1,
        )
        .unwrap();

    let found = session.diagnostics(uri).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].code, DiagnosticCode::RenderReturnsMarkup);
    assert_eq!(found[0].severity, Severity::Warning);
    assert_eq!(found[0].range.start.line, 2);
}
