//! Configuration for gotags
//!
//! Settings come from an optional `.gotags.toml`; command-line flags
//! override them.

pub mod loader;

use crate::extraction::ExtractOptions;
use crate::io::output::OutputFormat;
use serde::{Deserialize, Serialize};

pub use loader::{load_config, load_config_from_path, parse_config};

/// Contents of `.gotags.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TagsConfig {
    /// Share one type registry across all files
    pub whole_program: bool,
    /// Worker threads; 0 uses all cores
    pub jobs: usize,
    /// Stop at the first unreadable or unparsable file
    pub strict: bool,
    pub format: OutputFormat,
    /// Register first result types of plain functions as owner candidates
    pub learn_result_types: bool,
}

impl TagsConfig {
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            whole_program: self.whole_program,
            learn_result_types: self.learn_result_types,
            strict: self.strict,
        }
    }
}
