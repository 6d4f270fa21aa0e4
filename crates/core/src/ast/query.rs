//! Position containment search and node classification predicates.

use crate::parser::utils::{children, named_children, node_text, span_of};
use tree_sitter::Node;

/// Node kinds that declare a class.
pub const CLASS_KINDS: &[&str] = &["class_declaration", "abstract_class_declaration", "class"];

/// Node kinds that construct renderable markup in the TSX grammar.
pub const MARKUP_KINDS: &[&str] = &[
    "jsx_element",
    "jsx_self_closing_element",
    "jsx_opening_element",
    "jsx_closing_element",
    "jsx_fragment",
];

/// Deepest node whose byte interval strictly contains `offset`.
///
/// Descends from the top-level statements; at each level enters the child
/// that contains the offset. Returns `None` when no top-level node does.
/// Ancestors are reachable through [`Node::parent`].
pub fn find_node_containing(root: Node<'_>, offset: usize) -> Option<Node<'_>> {
    let mut container = None;
    let mut current = root;
    while let Some(next) = children(current)
        .into_iter()
        .find(|child| span_of(*child).contains(offset))
    {
        container = Some(next);
        current = next;
    }
    container
}

pub fn is_class_like(node: Node<'_>) -> bool {
    CLASS_KINDS.contains(&node.kind())
}

/// Decorators attached to a class declaration. Decorators written before
/// `export` hang off the enclosing export statement in the grammar.
pub fn class_decorators(node: Node<'_>) -> Vec<Node<'_>> {
    let mut decorators: Vec<Node<'_>> = Vec::new();
    if let Some(parent) = node.parent().filter(|p| p.kind() == "export_statement") {
        decorators.extend(direct_decorators(parent));
    }
    decorators.extend(direct_decorators(node));
    decorators
}

/// `decorator` children written directly on `node`.
pub fn direct_decorators(node: Node<'_>) -> Vec<Node<'_>> {
    named_children(node)
        .into_iter()
        .filter(|c| c.kind() == "decorator")
        .collect()
}

/// The `Name(...)` part of a `@Name(...)` decoration.
#[derive(Debug, Clone, Copy)]
pub struct DecoratorCall<'t, 's> {
    pub name: &'s str,
    pub call: Node<'t>,
    pub arguments: Node<'t>,
}

/// Reads a decorator as a call with a plain identifier callee.
/// `@Foo` (no call) and `@ns.Foo()` (member callee) yield `None`.
pub fn decorator_call<'t, 's>(decorator: Node<'t>, source: &'s str) -> Option<DecoratorCall<'t, 's>> {
    let call = named_children(decorator)
        .into_iter()
        .find(|c| c.kind() == "call_expression")?;
    let callee = call.child_by_field_name("function")?;
    if callee.kind() != "identifier" {
        return None;
    }
    let arguments = call.child_by_field_name("arguments")?;
    Some(DecoratorCall {
        name: node_text(callee, source),
        call,
        arguments,
    })
}

/// Builds a predicate matching decorator lists that contain `@name(...)`.
/// Purely lexical: no alias or import resolution.
pub fn is_decorated_as<'a>(
    name: &'a str,
    source: &'a str,
) -> impl Fn(&[Node<'_>]) -> bool + 'a {
    move |decorators| {
        decorators
            .iter()
            .any(|d| decorator_call(*d, source).is_some_and(|call| call.name == name))
    }
}

/// A class-like declaration carrying `@Component(...)`.
pub fn is_component_declaration(node: Node<'_>, source: &str) -> bool {
    is_class_like(node) && is_decorated_as("Component", source)(&class_decorators(node))
}

/// Whether the subtree builds markup.
///
/// Matches node kinds against [`MARKUP_KINDS`]; this is a syntactic
/// approximation, not a type check (`return this.renderHelper()` is false).
pub fn is_markup_producing(node: Node<'_>) -> bool {
    MARKUP_KINDS.contains(&node.kind()) || children(node).into_iter().any(is_markup_producing)
}

/// For a string or object literal written directly as an argument of a
/// decoration call, the decoration's name.
pub fn enclosing_decorator_name<'s>(node: Node<'_>, source: &'s str) -> Option<&'s str> {
    let arguments = node.parent().filter(|n| n.kind() == "arguments")?;
    let call = arguments.parent().filter(|n| n.kind() == "call_expression")?;
    let decorator = call.parent().filter(|n| n.kind() == "decorator")?;
    decorator_call(decorator, source).map(|c| c.name)
}

/// Contents of a string literal without its quotes.
pub fn string_value<'s>(node: Node<'_>, source: &'s str) -> Option<&'s str> {
    if node.kind() != "string" {
        return None;
    }
    let text = node_text(node, source);
    if text.len() < 2 {
        return Some("");
    }
    text.get(1..text.len() - 1)
}

/// Key of an object `pair` when it is a plain identifier.
pub fn pair_key<'s>(pair: Node<'_>, source: &'s str) -> Option<&'s str> {
    if pair.kind() != "pair" {
        return None;
    }
    let key = pair.child_by_field_name("key")?;
    (key.kind() == "property_identifier").then(|| node_text(key, source))
}
