use std::path::PathBuf;

/// A parsed Go source file.
#[derive(Clone, Debug)]
pub struct GoAst {
    pub tree: tree_sitter::Tree,
    pub source: String,
    pub path: PathBuf,
}

/// Direction of a channel type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChanDir {
    Both,
    Send,
    Recv,
}

/// Structural description of a type as written in a declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    Identifier(String),
    Pointer(Box<TypeExpr>),
    Qualified {
        package: String,
        name: String,
    },
    /// `length` present means a fixed-size array, absent means a slice.
    Array {
        length: Option<String>,
        element: Box<TypeExpr>,
    },
    FuncType {
        params: Vec<Field>,
        results: Vec<Field>,
    },
    MapType {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
    ChanType {
        dir: ChanDir,
        element: Box<TypeExpr>,
    },
    /// The empty interface.
    InterfaceType,
    /// Trailing `...T` parameter.
    Variadic(Box<TypeExpr>),
    /// Instantiated generic type, e.g. `List[T]`.
    Generic {
        base: Box<TypeExpr>,
        args: Vec<TypeExpr>,
    },
    /// Any other type syntax, kept as written.
    Verbatim(String),
}

impl TypeExpr {
    pub fn ident(name: impl Into<String>) -> Self {
        TypeExpr::Identifier(name.into())
    }

    pub fn pointer(inner: TypeExpr) -> Self {
        TypeExpr::Pointer(Box::new(inner))
    }

    pub fn qualified(package: impl Into<String>, name: impl Into<String>) -> Self {
        TypeExpr::Qualified {
            package: package.into(),
            name: name.into(),
        }
    }

    pub fn slice(element: TypeExpr) -> Self {
        TypeExpr::Array {
            length: None,
            element: Box::new(element),
        }
    }

    pub fn array(length: impl Into<String>, element: TypeExpr) -> Self {
        TypeExpr::Array {
            length: Some(length.into()),
            element: Box::new(element),
        }
    }

    pub fn map(key: TypeExpr, value: TypeExpr) -> Self {
        TypeExpr::MapType {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn chan(element: TypeExpr) -> Self {
        TypeExpr::ChanType {
            dir: ChanDir::Both,
            element: Box::new(element),
        }
    }
}

/// One field group of a parameter, result or receiver list.
///
/// `names` is empty for anonymous fields. Several names share one type
/// (`a, b int`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    pub names: Vec<String>,
    pub ty: TypeExpr,
}

impl Field {
    pub fn named<I, S>(names: I, ty: TypeExpr) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            ty,
        }
    }

    pub fn anonymous(ty: TypeExpr) -> Self {
        Self {
            names: Vec::new(),
            ty,
        }
    }
}

/// A top-level function or method declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    /// `None` for plain functions. A present but empty list comes from a
    /// malformed `()` receiver clause.
    pub receiver: Option<Vec<Field>>,
    pub params: Vec<Field>,
    pub results: Vec<Field>,
    pub start_line: usize,
    pub end_line: usize,
}

impl Declaration {
    pub fn has_receiver(&self) -> bool {
        self.receiver.as_ref().is_some_and(|fields| !fields.is_empty())
    }
}

/// Top-level items relevant to tagging, in source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceItem {
    TypeName { name: String, line: usize },
    Function(Declaration),
}
