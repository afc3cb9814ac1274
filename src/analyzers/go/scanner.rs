//! Top-level declaration scanning for Go source files
//!
//! Walks the top-level declarations of one file in source order and yields
//! the items tagging cares about: function and method declarations, and the
//! names introduced by type declarations. Everything else (imports, consts,
//! vars) is skipped.

use crate::analyzers::go::parser::{node_end_line, node_line, node_text, parse_source};
use crate::analyzers::go::type_expr::{field_list, result_fields};
use crate::core::ast::{Declaration, GoAst, SourceItem};
use crate::core::errors::Result;
use std::path::Path;
use tracing::debug;
use tree_sitter::Node;

/// Parse and scan one source file.
///
/// A file with syntax errors yields an error and no items.
pub fn scan(source: &str, path: &Path) -> Result<Vec<SourceItem>> {
    let ast = parse_source(source, path)?;
    let items = scan_ast(&ast);
    debug!(
        file = %path.display(),
        items = items.len(),
        "scanned source file"
    );
    Ok(items)
}

/// Scan an already parsed file
pub fn scan_ast(ast: &GoAst) -> Vec<SourceItem> {
    let root = ast.tree.root_node();
    let mut items = Vec::new();
    let mut cursor = root.walk();

    for child in root.named_children(&mut cursor) {
        match child.kind() {
            "function_declaration" | "method_declaration" => {
                if let Some(decl) = declaration(&child, &ast.source) {
                    items.push(SourceItem::Function(decl));
                }
            }
            "type_declaration" => collect_type_names(&child, &ast.source, &mut items),
            _ => {}
        }
    }

    items
}

/// Only the function and method declarations, in source order
pub fn declarations(items: Vec<SourceItem>) -> Vec<Declaration> {
    items
        .into_iter()
        .filter_map(|item| match item {
            SourceItem::Function(decl) => Some(decl),
            SourceItem::TypeName { .. } => None,
        })
        .collect()
}

fn declaration(node: &Node, source: &str) -> Option<Declaration> {
    let name = node.child_by_field_name("name")?;
    let receiver = node
        .child_by_field_name("receiver")
        .map(|receiver| field_list(&receiver, source));
    let params = node
        .child_by_field_name("parameters")
        .map(|params| field_list(&params, source))
        .unwrap_or_default();

    Some(Declaration {
        name: node_text(&name, source).to_string(),
        receiver,
        params,
        results: result_fields(node, source),
        start_line: node_line(node),
        end_line: node_end_line(node),
    })
}

/// Handles both `type T ...` and grouped `type ( ... )` forms.
fn collect_type_names(node: &Node, source: &str, items: &mut Vec<SourceItem>) {
    let mut cursor = node.walk();
    for spec in node.named_children(&mut cursor) {
        if !matches!(spec.kind(), "type_spec" | "type_alias") {
            continue;
        }
        if let Some(name) = spec.child_by_field_name("name") {
            items.push(SourceItem::TypeName {
                name: node_text(&name, source).to_string(),
                line: node_line(&spec),
            });
        }
    }
}
