//! Text edits that add names to the framework's named-import list.

use stencil_ls_api::{ImportClause, TextEdit};

/// Sorts case-insensitively while keeping each entry's original text.
/// Ties keep their input order.
pub fn alphabetize(names: &[String]) -> Vec<String> {
    let mut sorted = names.to_vec();
    sorted.sort_by_key(|name| name.to_lowercase());
    sorted
}

/// Zero or one edit that rewrites `clause` so it also imports `names`
/// (a single name or a comma-separated list such as `Event, EventEmitter`).
///
/// No edit when there is no clause or every name is already imported.
/// Multi-line clauses are re-rendered one name per tab-indented line,
/// single-line clauses as `{ A, B }`.
pub fn auto_import_edit(clause: Option<&ImportClause>, names: &str) -> Vec<TextEdit> {
    let Some(clause) = clause else {
        return Vec::new();
    };

    let mut combined = clause.imported_names.clone();
    for name in names.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        if !combined.iter().any(|existing| existing == name) {
            combined.push(name.to_string());
        }
    }
    if combined.len() == clause.imported_names.len() {
        return Vec::new();
    }

    let (sep, indent) = if clause.multiline {
        ("\n", "\t")
    } else {
        (" ", "")
    };
    let list = alphabetize(&combined).join(&format!(",{sep}{indent}"));
    let text = format!("{{{sep}{indent}{list}{sep}}}");

    vec![TextEdit::replace(clause.range, text)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use stencil_ls_api::{Position, Range, Span};

    fn clause(names: &[&str], multiline: bool) -> ImportClause {
        ImportClause {
            span: Span::new(7, 20),
            range: Range::new(Position::new(0, 7), Position::new(0, 20)),
            multiline,
            imported_names: names.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn appends_in_alphabetical_order() {
        let edits = auto_import_edit(Some(&clause(&["Apple", "Mango"], false)), "Zebra");
        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0].new_text, "{ Apple, Mango, Zebra }");
        assert_eq!(edits[0].range.start, Position::new(0, 7));
    }

    #[test]
    fn sort_ignores_case_but_keeps_it() {
        let edits = auto_import_edit(Some(&clause(&["Banana"], false)), "apple");
        assert_eq!(edits[0].new_text, "{ apple, Banana }");
    }

    #[test]
    fn already_imported_is_a_no_op() {
        assert!(auto_import_edit(Some(&clause(&["Prop", "State"], false)), "Prop").is_empty());
        assert!(
            auto_import_edit(Some(&clause(&["Event", "EventEmitter"], false)), "Event, EventEmitter")
                .is_empty()
        );
    }

    #[test]
    fn missing_clause_is_a_no_op() {
        assert!(auto_import_edit(None, "Prop").is_empty());
    }

    #[test]
    fn adds_only_the_missing_part_of_a_list() {
        let edits = auto_import_edit(Some(&clause(&["Component", "Event"], false)), "Event, EventEmitter");
        assert_eq!(edits[0].new_text, "{ Component, Event, EventEmitter }");
    }

    #[test]
    fn multiline_clause_keeps_its_shape() {
        let edits = auto_import_edit(Some(&clause(&["Component", "State"], true)), "Prop");
        assert_eq!(edits[0].new_text, "{\n\tComponent,\n\tProp,\n\tState\n}");
    }

    #[test]
    fn renamed_entries_keep_their_alias_text() {
        let edits = auto_import_edit(Some(&clause(&["Prop as P"], false)), "Element");
        assert_eq!(edits[0].new_text, "{ Element, Prop as P }");
    }

    #[test]
    fn empty_list_receives_the_name() {
        let edits = auto_import_edit(Some(&clause(&[], false)), "Prop");
        assert_eq!(edits[0].new_text, "{ Prop }");
    }
}
