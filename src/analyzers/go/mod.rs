//! Go source analysis
//!
//! Parsing is done with the tree-sitter Go grammar. The scanner turns the
//! syntax tree into `SourceItem`s, converting parameter, result and receiver
//! types into `TypeExpr` trees on the way.

pub mod parser;
pub mod scanner;
pub mod type_expr;

pub use parser::parse_source;
pub use scanner::{declarations, scan, scan_ast};
