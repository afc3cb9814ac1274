//! Tree-sitter parser integration for Go
//!
//! Provides parsing using the tree-sitter Go grammar.

use crate::core::ast::GoAst;
use crate::core::errors::{Error, Result};
use std::path::Path;
use tree_sitter::{Node, Parser, Tree};

/// Create a parser configured for Go
pub fn go_parser() -> Result<Parser> {
    let mut parser = Parser::new();
    parser.set_language(&tree_sitter_go::LANGUAGE.into())?;
    Ok(parser)
}

/// Parse Go source code into a tree-sitter AST.
///
/// Tree-sitter recovers from syntax errors; a tree that contains error or
/// missing nodes is reported as a parse error at the first such node.
pub fn parse_source(content: &str, path: &Path) -> Result<GoAst> {
    let mut parser = go_parser()?;
    let tree = parser
        .parse(content, None)
        .ok_or_else(|| Error::parse(path, 1, 1, "parser produced no tree"))?;

    if has_parse_errors(&tree) {
        let root = tree.root_node();
        let (line, column, message) = match first_error_node(&root) {
            Some(node) if node.is_missing() => (
                node_line(&node),
                node_column(&node),
                format!("missing {}", node.kind()),
            ),
            Some(node) => (
                node_line(&node),
                node_column(&node),
                format!("unexpected {:?}", snippet(node_text(&node, content))),
            ),
            None => (1, 1, "syntax error".to_string()),
        };
        return Err(Error::parse(path, line, column, message));
    }

    Ok(GoAst {
        tree,
        source: content.to_string(),
        path: path.to_path_buf(),
    })
}

/// Check if a parse tree has errors
pub fn has_parse_errors(tree: &Tree) -> bool {
    tree.root_node().has_error()
}

/// Find the first error or missing node in document order
pub fn first_error_node<'tree>(node: &Node<'tree>) -> Option<Node<'tree>> {
    if node.is_error() || node.is_missing() {
        return Some(*node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'tree>> = node.children(&mut cursor).collect();
    children.iter().find_map(first_error_node)
}

fn snippet(text: &str) -> String {
    const MAX_CHARS: usize = 20;
    let first_line = text.lines().next().unwrap_or("");
    first_line.chars().take(MAX_CHARS).collect()
}

/// Get text for a tree-sitter node
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    &source[node.start_byte()..node.end_byte()]
}

/// Get the line number for a tree-sitter node (1-indexed)
pub fn node_line(node: &Node) -> usize {
    node.start_position().row + 1
}

/// Get the line number where a tree-sitter node ends (1-indexed)
pub fn node_end_line(node: &Node) -> usize {
    node.end_position().row + 1
}

/// Get the column number for a tree-sitter node (1-indexed)
pub fn node_column(node: &Node) -> usize {
    node.start_position().column + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_go() {
        let source = "package main\n\nfunc main() {}\n";
        let path = PathBuf::from("main.go");
        let ast = parse_source(source, &path).unwrap();
        assert!(!has_parse_errors(&ast.tree));
        assert_eq!(ast.path, path);
        assert_eq!(ast.tree.root_node().kind(), "source_file");
    }

    #[test]
    fn test_parse_error_reports_location() {
        let source = "package main\n\nfunc main() {\n\tx := \n";
        let err = parse_source(source, Path::new("broken.go")).unwrap_err();
        match err {
            Error::Parse { file, line, .. } => {
                assert_eq!(file, PathBuf::from("broken.go"));
                assert!(line >= 3, "line {line}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_node_text_and_lines() {
        let source = "package main\n\nfunc main() {\n}\n";
        let ast = parse_source(source, Path::new("main.go")).unwrap();
        let root = ast.tree.root_node();
        assert_eq!(node_text(&root, &ast.source), source);

        let func = root.named_child(1).unwrap();
        assert_eq!(func.kind(), "function_declaration");
        assert_eq!(node_line(&func), 3);
        assert_eq!(node_end_line(&func), 4);
        assert_eq!(node_column(&func), 1);
    }

    #[test]
    fn test_snippet_truncates() {
        assert_eq!(snippet("abc\ndef"), "abc");
        assert_eq!(snippet(&"x".repeat(50)).len(), 20);
    }
}
