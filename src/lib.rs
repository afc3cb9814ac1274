//! Tag extraction for Go source files
//!
//! Lists top-level function and method declarations with their location,
//! classifies each as a method or a function, and infers an owning type for
//! constructor-like functions from their first result type.
//!
//! # Example
//!
//! ```rust
//! use gotags::{extract_source, ExtractOptions, TagKind, TypeRegistry};
//! use std::path::Path;
//!
//! let source = "package p\n\ntype Widget struct{}\n\nfunc NewWidget() *Widget { return nil }\n";
//! let mut registry = TypeRegistry::new();
//! let tags = extract_source(source, Path::new("w.go"), &mut registry, &ExtractOptions::default())?;
//!
//! assert_eq!(tags[0].kind, TagKind::Function);
//! assert_eq!(tags[0].receiver_types, vec!["Widget"]);
//! # Ok::<(), gotags::Error>(())
//! ```

pub mod analyzers;
pub mod cli;
pub mod config;
pub mod core;
pub mod extraction;
pub mod formatting;
pub mod io;

// Re-export commonly used types
pub use crate::core::{
    ChanDir, Declaration, Error, Field, Result, SourceItem, Tag, TagKind, TypeExpr,
};

pub use crate::analyzers::{go::scan, resolve, Resolution, TypeRegistry};

pub use crate::extraction::{
    emit, extract_file, extract_files, extract_source, ExtractOptions, ExtractionReport,
    FileFailure,
};

pub use crate::formatting::{format_type, render_field_list};

pub use crate::io::output::{create_writer, OutputFormat, TagWriter};
