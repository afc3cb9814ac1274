//! Tag extraction
//!
//! Combines the scanner, the receiver resolver and the type registry into
//! ordered `Tag` records.

pub mod emitter;
pub mod pipeline;

pub use emitter::emit;
pub use pipeline::{
    extract_file, extract_files, extract_source, ExtractOptions, ExtractionReport, FileFailure,
};
