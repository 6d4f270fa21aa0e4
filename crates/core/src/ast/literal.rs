//! Static evaluation of decoration arguments.
//!
//! Only literal syntax is interpreted. Nothing here runs user code: calls,
//! spreads, substitutions and the like evaluate to [`LiteralValue::Unsupported`].

use crate::parser::utils::{named_children, node_text};
use indexmap::IndexMap;
use tree_sitter::Node;

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Bool(bool),
    Null,
    Undefined,
    Array(Vec<LiteralValue>),
    Object(IndexMap<String, LiteralValue>),
    /// A bare identifier reference; its value is unknown statically.
    Identifier(String),
    Unsupported,
}

impl LiteralValue {
    /// True when the value contains no identifier references and nothing unsupported.
    pub fn is_literal(&self) -> bool {
        match self {
            LiteralValue::Identifier(_) | LiteralValue::Unsupported => false,
            LiteralValue::Array(items) => items.iter().all(LiteralValue::is_literal),
            LiteralValue::Object(fields) => fields.values().all(LiteralValue::is_literal),
            _ => true,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            LiteralValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value;
        match self {
            LiteralValue::String(s) => Value::String(s.clone()),
            LiteralValue::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            LiteralValue::Bool(b) => Value::Bool(*b),
            LiteralValue::Array(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            LiteralValue::Object(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
            LiteralValue::Null
            | LiteralValue::Undefined
            | LiteralValue::Identifier(_)
            | LiteralValue::Unsupported => Value::Null,
        }
    }
}

/// Recursive-descent interpretation of one expression node.
pub fn evaluate(node: Node<'_>, source: &str) -> LiteralValue {
    match node.kind() {
        "string" => LiteralValue::String(string_contents(node, source)),
        "template_string" => {
            if named_children(node)
                .iter()
                .any(|c| c.kind() == "template_substitution")
            {
                LiteralValue::Unsupported
            } else {
                LiteralValue::String(string_contents(node, source))
            }
        }
        "number" => parse_number(node_text(node, source))
            .map(LiteralValue::Number)
            .unwrap_or(LiteralValue::Unsupported),
        "true" => LiteralValue::Bool(true),
        "false" => LiteralValue::Bool(false),
        "null" => LiteralValue::Null,
        "undefined" => LiteralValue::Undefined,
        "identifier" => match node_text(node, source) {
            "undefined" => LiteralValue::Undefined,
            "NaN" => LiteralValue::Number(f64::NAN),
            "Infinity" => LiteralValue::Number(f64::INFINITY),
            name => LiteralValue::Identifier(name.to_string()),
        },
        "parenthesized_expression" => match named_children(node).as_slice() {
            [inner] => evaluate(*inner, source),
            _ => LiteralValue::Unsupported,
        },
        "unary_expression" => evaluate_unary(node, source),
        "array" => {
            let mut items = Vec::new();
            for child in named_children(node) {
                if child.kind() == "comment" {
                    continue;
                }
                match evaluate(child, source) {
                    LiteralValue::Unsupported => return LiteralValue::Unsupported,
                    value => items.push(value),
                }
            }
            LiteralValue::Array(items)
        }
        "object" => evaluate_object(node, source),
        _ => LiteralValue::Unsupported,
    }
}

fn evaluate_unary(node: Node<'_>, source: &str) -> LiteralValue {
    let (Some(operator), Some(argument)) = (
        node.child_by_field_name("operator"),
        node.child_by_field_name("argument"),
    ) else {
        return LiteralValue::Unsupported;
    };
    match (node_text(operator, source), evaluate(argument, source)) {
        ("-", LiteralValue::Number(n)) => LiteralValue::Number(-n),
        ("+", LiteralValue::Number(n)) => LiteralValue::Number(n),
        ("!", LiteralValue::Bool(b)) => LiteralValue::Bool(!b),
        _ => LiteralValue::Unsupported,
    }
}

fn evaluate_object(node: Node<'_>, source: &str) -> LiteralValue {
    let mut fields = IndexMap::new();
    for child in named_children(node) {
        match child.kind() {
            "comment" => continue,
            "pair" => {
                let (Some(key), Some(value)) = (
                    child.child_by_field_name("key"),
                    child.child_by_field_name("value"),
                ) else {
                    return LiteralValue::Unsupported;
                };
                let key = match key.kind() {
                    "property_identifier" => node_text(key, source).to_string(),
                    "string" => string_contents(key, source),
                    "number" => node_text(key, source).to_string(),
                    _ => return LiteralValue::Unsupported,
                };
                match evaluate(value, source) {
                    LiteralValue::Unsupported => return LiteralValue::Unsupported,
                    value => {
                        fields.insert(key, value);
                    }
                }
            }
            "shorthand_property_identifier" => {
                let name = node_text(child, source).to_string();
                fields.insert(name.clone(), LiteralValue::Identifier(name));
            }
            _ => return LiteralValue::Unsupported,
        }
    }
    LiteralValue::Object(fields)
}

/// Text between the delimiters, with common escapes decoded.
fn string_contents(node: Node<'_>, source: &str) -> String {
    let text = node_text(node, source);
    let inner = if text.len() >= 2 {
        text.get(1..text.len() - 1).unwrap_or("")
    } else {
        ""
    };
    unescape(inner)
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('v') => out.push('\u{b}'),
            // line continuation
            Some('\n') => {}
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

fn parse_number(text: &str) -> Option<f64> {
    let cleaned: String = text.chars().filter(|c| *c != '_').collect();
    let lower = cleaned.to_ascii_lowercase();
    let radix = |digits: &str, radix: u32| u64::from_str_radix(digits, radix).ok().map(|v| v as f64);
    if let Some(hex) = lower.strip_prefix("0x") {
        radix(hex, 16)
    } else if let Some(oct) = lower.strip_prefix("0o") {
        radix(oct, 8)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        radix(bin, 2)
    } else {
        lower.trim_end_matches('n').parse::<f64>().ok()
    }
}
