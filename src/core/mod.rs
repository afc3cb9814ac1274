pub mod ast;
pub mod errors;
pub mod types;

pub use ast::{ChanDir, Declaration, Field, GoAst, SourceItem, TypeExpr};
pub use errors::{Error, Result};
pub use types::{Tag, TagKind};
