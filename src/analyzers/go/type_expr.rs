//! Conversion of tree-sitter type nodes into `TypeExpr` trees

use crate::analyzers::go::parser::node_text;
use crate::core::ast::{ChanDir, Field, TypeExpr};
use tree_sitter::Node;

/// Convert a type node. Syntax outside the modelled set is kept verbatim.
pub fn type_expr(node: &Node, source: &str) -> TypeExpr {
    match node.kind() {
        "type_identifier" | "identifier" => TypeExpr::Identifier(text(node, source)),
        "pointer_type" => match first_named_child(node) {
            Some(inner) => TypeExpr::pointer(type_expr(&inner, source)),
            None => verbatim(node, source),
        },
        "qualified_type" => {
            match (
                node.child_by_field_name("package"),
                node.child_by_field_name("name"),
            ) {
                (Some(package), Some(name)) => {
                    TypeExpr::qualified(text(&package, source), text(&name, source))
                }
                _ => verbatim(node, source),
            }
        }
        "array_type" => match (
            node.child_by_field_name("length"),
            node.child_by_field_name("element"),
        ) {
            (Some(length), Some(element)) => {
                TypeExpr::array(text(&length, source), type_expr(&element, source))
            }
            _ => verbatim(node, source),
        },
        "implicit_length_array_type" => match node.child_by_field_name("element") {
            Some(element) => TypeExpr::array("...", type_expr(&element, source)),
            None => verbatim(node, source),
        },
        "slice_type" => match node.child_by_field_name("element") {
            Some(element) => TypeExpr::slice(type_expr(&element, source)),
            None => verbatim(node, source),
        },
        "map_type" => match (
            node.child_by_field_name("key"),
            node.child_by_field_name("value"),
        ) {
            (Some(key), Some(value)) => {
                TypeExpr::map(type_expr(&key, source), type_expr(&value, source))
            }
            _ => verbatim(node, source),
        },
        "channel_type" => match node.child_by_field_name("value") {
            Some(value) => TypeExpr::ChanType {
                dir: channel_direction(node),
                element: Box::new(type_expr(&value, source)),
            },
            None => verbatim(node, source),
        },
        "function_type" => TypeExpr::FuncType {
            params: node
                .child_by_field_name("parameters")
                .map(|params| field_list(&params, source))
                .unwrap_or_default(),
            results: result_fields(node, source),
        },
        "interface_type" if node.named_child_count() == 0 => TypeExpr::InterfaceType,
        "parenthesized_type" => match first_named_child(node) {
            Some(inner) => type_expr(&inner, source),
            None => verbatim(node, source),
        },
        "generic_type" => generic_type(node, source),
        _ => verbatim(node, source),
    }
}

fn generic_type(node: &Node, source: &str) -> TypeExpr {
    let (Some(base), Some(arguments)) = (
        node.child_by_field_name("type"),
        node.child_by_field_name("type_arguments"),
    ) else {
        return verbatim(node, source);
    };

    let mut cursor = arguments.walk();
    let args = arguments
        .named_children(&mut cursor)
        .filter(|arg| arg.kind() != "comment")
        .map(|arg| type_argument(&arg, source))
        .collect();

    TypeExpr::Generic {
        base: Box::new(type_expr(&base, source)),
        args,
    }
}

/// Type arguments are wrapped in `type_elem` nodes by newer grammars.
fn type_argument(node: &Node, source: &str) -> TypeExpr {
    if node.kind() == "type_elem" {
        if node.named_child_count() == 1 {
            if let Some(inner) = node.named_child(0) {
                return type_expr(&inner, source);
            }
        }
        return verbatim(node, source);
    }
    type_expr(node, source)
}

/// `chan T`, `chan<- T` and `<-chan T` differ only in where the arrow sits.
fn channel_direction(node: &Node) -> ChanDir {
    let mut cursor = node.walk();
    let tokens: Vec<&str> = node
        .children(&mut cursor)
        .filter(|child| !child.is_named())
        .map(|child| child.kind())
        .collect();

    match tokens.as_slice() {
        ["<-", "chan", ..] => ChanDir::Recv,
        ["chan", "<-", ..] => ChanDir::Send,
        _ => ChanDir::Both,
    }
}

/// Field groups of a `parameter_list` node (parameters, results or receiver).
pub fn field_list(node: &Node, source: &str) -> Vec<Field> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter_map(|child| match child.kind() {
            "parameter_declaration" => {
                let ty = child.child_by_field_name("type")?;
                let mut names_cursor = child.walk();
                let names = child
                    .children_by_field_name("name", &mut names_cursor)
                    .map(|name| text(&name, source))
                    .collect();
                Some(Field {
                    names,
                    ty: type_expr(&ty, source),
                })
            }
            "variadic_parameter_declaration" => {
                let ty = child.child_by_field_name("type")?;
                let names = child
                    .child_by_field_name("name")
                    .map(|name| vec![text(&name, source)])
                    .unwrap_or_default();
                Some(Field {
                    names,
                    ty: TypeExpr::Variadic(Box::new(type_expr(&ty, source))),
                })
            }
            _ => None,
        })
        .collect()
}

/// Result fields of a function, method or function type node.
///
/// A bare result type becomes a single anonymous field group.
pub fn result_fields(node: &Node, source: &str) -> Vec<Field> {
    match node.child_by_field_name("result") {
        Some(result) if result.kind() == "parameter_list" => field_list(&result, source),
        Some(result) => vec![Field::anonymous(type_expr(&result, source))],
        None => Vec::new(),
    }
}

fn first_named_child<'tree>(node: &Node<'tree>) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    let child = node
        .named_children(&mut cursor)
        .find(|child| child.kind() != "comment");
    child
}

fn text(node: &Node, source: &str) -> String {
    node_text(node, source).to_string()
}

fn verbatim(node: &Node, source: &str) -> TypeExpr {
    TypeExpr::Verbatim(text(node, source))
}
