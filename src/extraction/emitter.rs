use crate::analyzers::receiver_resolver::Resolution;
use crate::core::ast::Declaration;
use crate::core::types::Tag;
use std::path::Path;

/// Assemble the tag for a resolved declaration.
///
/// Line numbers are taken from the declaration span unchanged.
pub fn emit(decl: Declaration, resolution: Resolution, file: &Path) -> Tag {
    Tag {
        name: decl.name,
        file: file.to_path_buf(),
        start_line: decl.start_line,
        end_line: decl.end_line,
        kind: resolution.kind,
        receiver_types: resolution.receiver_types,
        receiver_names: resolution.receiver_names,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::TagKind;
    use std::path::PathBuf;

    #[test]
    fn test_emit_copies_span_and_resolution() {
        let decl = Declaration {
            name: "Name".to_string(),
            receiver: None,
            params: Vec::new(),
            results: Vec::new(),
            start_line: 12,
            end_line: 14,
        };
        let resolution = Resolution {
            kind: TagKind::Method,
            receiver_types: vec!["*Widget".to_string()],
            receiver_names: vec![vec!["w".to_string()]],
        };

        let tag = emit(decl, resolution, Path::new("pkg/widget.go"));

        assert_eq!(tag.name, "Name");
        assert_eq!(tag.file, PathBuf::from("pkg/widget.go"));
        assert_eq!((tag.start_line, tag.end_line), (12, 14));
        assert_eq!(tag.kind, TagKind::Method);
        assert_eq!(tag.receiver_types, vec!["*Widget"]);
        assert_eq!(tag.receiver_names, vec![vec!["w".to_string()]]);
    }
}
