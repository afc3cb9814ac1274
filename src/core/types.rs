use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Classification of a tagged declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    Method,
    Function,
}

impl TagKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagKind::Method => "method",
            TagKind::Function => "function",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tagged declaration.
///
/// `receiver_types` is empty for plain functions, holds the explicit
/// receiver type for methods, or the inferred owning type for
/// constructor-like functions. `receiver_names` lines up with
/// `receiver_types` for methods and stays empty for inferred owners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub file: PathBuf,
    pub start_line: usize,
    pub end_line: usize,
    pub kind: TagKind,
    pub receiver_types: Vec<String>,
    pub receiver_names: Vec<Vec<String>>,
}

impl Tag {
    pub fn is_method(&self) -> bool {
        self.kind == TagKind::Method
    }

    /// Rendered receiver column: `w *Widget` for methods, `Widget` for
    /// inferred owners, `None` when there is nothing to show.
    pub fn receiver_display(&self) -> Option<String> {
        if self.receiver_types.is_empty() {
            return None;
        }

        let parts: Vec<String> = self
            .receiver_types
            .iter()
            .enumerate()
            .map(|(i, ty)| match self.receiver_names.get(i) {
                Some(names) if !names.is_empty() => format!("{} {}", names.join(", "), ty),
                _ => ty.clone(),
            })
            .collect();

        Some(parts.join(", "))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.name,
            self.file.display(),
            self.start_line,
            self.end_line,
            self.kind
        )?;
        if let Some(receiver) = self.receiver_display() {
            write!(f, "\t{}", receiver)?;
        }
        Ok(())
    }
}
