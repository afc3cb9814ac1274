//! Tag extraction over one or many source files
//!
//! Per-file mode gives every file its own `TypeRegistry` and processes files
//! in parallel. Whole-program mode threads a single registry through the
//! files sequentially, in input order, so types declared in earlier files
//! are visible to later ones.

use crate::analyzers::go::scan;
use crate::analyzers::receiver_resolver::{resolve, result_type_name};
use crate::analyzers::type_registry::TypeRegistry;
use crate::core::ast::SourceItem;
use crate::core::errors::{Error, Result};
use crate::core::types::Tag;
use crate::extraction::emitter::emit;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Policy knobs for an extraction run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Share one registry across all files instead of one per file
    pub whole_program: bool,
    /// Also register the first result type of every plain function
    pub learn_result_types: bool,
    /// Abort on the first file that cannot be read or parsed
    pub strict: bool,
}

/// A file that contributed no tags
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: Error,
}

/// Outcome of a multi-file run
#[derive(Debug, Default)]
pub struct ExtractionReport {
    /// Input file order, then declaration order
    pub tags: Vec<Tag>,
    pub failures: Vec<FileFailure>,
}

impl ExtractionReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Extract tags from source text
pub fn extract_source(
    source: &str,
    path: &Path,
    registry: &mut TypeRegistry,
    options: &ExtractOptions,
) -> Result<Vec<Tag>> {
    let items = scan(source, path)?;
    Ok(tags_from_items(items, path, registry, options))
}

/// Read a file and extract its tags
pub fn extract_file(
    path: &Path,
    registry: &mut TypeRegistry,
    options: &ExtractOptions,
) -> Result<Vec<Tag>> {
    let source = fs::read_to_string(path)
        .map_err(|e| Error::file_system("Failed to read source file", path, e))?;
    extract_source(&source, path, registry, options)
}

/// Extract tags from many files.
///
/// Unreadable or unparsable files are recorded as failures and skipped,
/// unless `options.strict` is set, in which case the first failure in input
/// order is returned.
pub fn extract_files(paths: &[PathBuf], options: &ExtractOptions) -> Result<ExtractionReport> {
    let outcomes: Vec<Result<Vec<Tag>>> = if options.whole_program {
        let mut registry = TypeRegistry::new();
        paths
            .iter()
            .map(|path| extract_file(path, &mut registry, options))
            .collect()
    } else {
        // Indexed parallel collect keeps input order.
        paths
            .par_iter()
            .map(|path| extract_file(path, &mut TypeRegistry::new(), options))
            .collect()
    };

    let mut report = ExtractionReport::default();
    for (path, outcome) in paths.iter().zip(outcomes) {
        match outcome {
            Ok(tags) => report.tags.extend(tags),
            Err(error) if options.strict => return Err(error),
            Err(error) => {
                warn!(file = %path.display(), "skipping file: {}", error);
                report.failures.push(FileFailure {
                    path: path.clone(),
                    error,
                });
            }
        }
    }

    debug!(
        files = paths.len(),
        tags = report.tags.len(),
        failures = report.failures.len(),
        "extraction finished"
    );
    Ok(report)
}

fn tags_from_items(
    items: Vec<SourceItem>,
    path: &Path,
    registry: &mut TypeRegistry,
    options: &ExtractOptions,
) -> Vec<Tag> {
    let mut tags = Vec::new();
    for item in items {
        match item {
            SourceItem::TypeName { name, .. } => {
                registry.register(name);
            }
            SourceItem::Function(decl) => {
                let resolution = resolve(&decl, registry);
                let learned = (options.learn_result_types && !decl.has_receiver())
                    .then(|| result_type_name(&decl).map(str::to_string))
                    .flatten();
                tags.push(emit(decl, resolution, path));
                if let Some(name) = learned {
                    registry.register(name);
                }
            }
        }
    }
    tags
}
