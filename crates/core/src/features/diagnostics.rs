//! Component-level problems published on open and change.

use stencil_ls_api::{
    ComponentMetadata, DIAGNOSTIC_SOURCE, Diagnostic, DiagnosticCode, Range, Severity,
};

fn diagnostic(range: Range, severity: Severity, code: DiagnosticCode, message: &str) -> Diagnostic {
    Diagnostic {
        range,
        severity,
        code,
        message: message.to_string(),
        source: DIAGNOSTIC_SOURCE.to_string(),
    }
}

/// At most `max_problems` diagnostics for one component.
pub fn validate(meta: &ComponentMetadata, max_problems: usize) -> Vec<Diagnostic> {
    let mut out = Vec::new();

    if !meta.has_valid_tag() {
        out.push(diagnostic(
            meta.declaration_range,
            Severity::Error,
            DiagnosticCode::InvalidTag,
            "Component tag must contain a hyphen, e.g. 'my-component'",
        ));
    }

    match &meta.render {
        None => out.push(diagnostic(
            meta.declaration_range,
            Severity::Error,
            DiagnosticCode::MissingRender,
            "Component must include a 'render()' method",
        )),
        Some(render) if !render.returns_markup => out.push(diagnostic(
            render.range,
            Severity::Warning,
            DiagnosticCode::RenderReturnsMarkup,
            "'render()' must return JSX.Element | JSX.Element[]",
        )),
        Some(_) => {}
    }

    out.truncate(max_problems);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use stencil_ls_api::{Position, RenderInfo, Span};

    fn render(returns_markup: bool) -> Option<RenderInfo> {
        Some(RenderInfo {
            span: Span::new(40, 60),
            range: Range::new(Position::new(3, 2), Position::new(5, 3)),
            returns_markup,
        })
    }

    #[test]
    fn healthy_component_is_clean() {
        let meta = ComponentMetadata {
            tag: "my-cmp".into(),
            render: render(true),
            ..Default::default()
        };
        assert!(validate(&meta, 1000).is_empty());
    }

    #[test]
    fn reports_tag_and_missing_render() {
        let meta = ComponentMetadata {
            tag: "widget".into(),
            ..Default::default()
        };
        let found = validate(&meta, 1000);
        let codes: Vec<_> = found.iter().map(|d| d.code).collect();
        assert_eq!(codes, vec![DiagnosticCode::InvalidTag, DiagnosticCode::MissingRender]);
        assert!(found.iter().all(|d| d.source == "stencil"));
    }

    #[test]
    fn non_markup_render_is_a_warning_on_the_method() {
        let meta = ComponentMetadata {
            tag: "my-cmp".into(),
            render: render(false),
            ..Default::default()
        };
        let found = validate(&meta, 1000);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].severity, Severity::Warning);
        assert_eq!(found[0].range.start, Position::new(3, 2));
    }

    #[test]
    fn respects_problem_limit() {
        let meta = ComponentMetadata::default();
        assert_eq!(validate(&meta, 1).len(), 1);
        assert!(validate(&meta, 0).is_empty());
    }
}
