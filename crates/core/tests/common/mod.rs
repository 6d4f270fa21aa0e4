use stencil_ls_api::{CompletionCandidate, Position};
use stencil_ls_core::Session;

pub const WIDGET_URI: &str = "file:///work/src/components/my-widget/my-widget.tsx";

pub const WIDGET: &str = r#"import { Component, Prop } from '@stencil/core';

@Component({
  tag: 'my-widget',
  styleUrl: 'my-widget.css',
})
export class MyWidget {
  @Prop() first: string;
  @State() count: number;

  |

  render() {
    return <div>{this.first}</div>;
  }
}
"#;

fn offset_to_point(content: &str, offset: usize) -> Position {
    let mut line = 0u32;
    let mut col = 0u32;
    for (i, ch) in content.char_indices() {
        if i >= offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            col = 0;
        } else {
            col += ch.len_utf16() as u32;
        }
    }
    Position::new(line, col)
}

/// Strips the `|` cursor marker and returns the text with the cursor position.
#[allow(dead_code)]
pub fn split_cursor(src: &str) -> (String, Position) {
    let offset = src.find('|').expect("source needs a | cursor marker");
    let text = src.replacen('|', "", 1);
    let position = offset_to_point(&text, offset);
    (text, position)
}

/// Opens `src` (with its cursor marker removed) in a fresh session.
#[allow(dead_code)]
pub fn open_at_cursor(uri: &str, src: &str) -> (Session, String, Position) {
    let (text, position) = split_cursor(src);
    let session = Session::new();
    session.open(uri, &text, 1).unwrap();
    (session, text, position)
}

#[allow(dead_code)]
pub fn labels(items: &[CompletionCandidate]) -> Vec<&str> {
    items.iter().map(|c| c.label.as_str()).collect()
}

/// Applies text edits from last to first so earlier ranges stay valid.
#[allow(dead_code)]
pub fn apply_edits(text: &str, edits: &[stencil_ls_api::TextEdit]) -> String {
    let index = stencil_ls_core::parser::LineIndex::new(text);
    let mut spans: Vec<(usize, usize, &str)> = edits
        .iter()
        .map(|e| {
            (
                index.offset_at(text, e.range.start),
                index.offset_at(text, e.range.end),
                e.new_text.as_str(),
            )
        })
        .collect();
    spans.sort_by(|a, b| b.0.cmp(&a.0));
    let mut out = text.to_string();
    for (start, end, new_text) in spans {
        out.replace_range(start..end, new_text);
    }
    out
}
