//! Method / function classification with owner inference
//!
//! # Decision order
//!
//! 1. **Explicit receiver**: method, receiver types keep their pointer marker
//! 2. **No results**: plain function
//! 3. **First result group has several names** (`(a, b T)`): plain function
//! 4. **First result names a registered type** (pointer stripped): function
//!    owned by that type, without a receiver name
//!
//! Step 4 is a heuristic. It misses constructors whose type is declared
//! later in the file and can match a type by coincidence.

use crate::analyzers::type_registry::TypeRegistry;
use crate::core::ast::{Declaration, TypeExpr};
use crate::core::types::TagKind;
use crate::formatting::format_type;
use tracing::trace;

/// Classification of one declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub kind: TagKind,
    pub receiver_types: Vec<String>,
    pub receiver_names: Vec<Vec<String>>,
}

impl Resolution {
    fn function() -> Self {
        Self {
            kind: TagKind::Function,
            receiver_types: Vec::new(),
            receiver_names: Vec::new(),
        }
    }

    fn owned_by(owner: String) -> Self {
        Self {
            kind: TagKind::Function,
            receiver_types: vec![owner],
            receiver_names: Vec::new(),
        }
    }
}

pub fn resolve(decl: &Declaration, registry: &TypeRegistry) -> Resolution {
    if let Some(receiver) = decl.receiver.as_deref().filter(|fields| !fields.is_empty()) {
        let mut receiver_types = Vec::with_capacity(receiver.len());
        let mut receiver_names = Vec::with_capacity(receiver.len());
        for field in receiver {
            let ty = format_type(&field.ty, false);
            trace!(function = %decl.name, receiver_type = %ty, receiver_names = ?field.names);
            receiver_types.push(ty);
            receiver_names.push(field.names.clone());
        }
        return Resolution {
            kind: TagKind::Method,
            receiver_types,
            receiver_names,
        };
    }

    let Some(first) = decl.results.first() else {
        return Resolution::function();
    };

    if first.names.len() > 1 {
        return Resolution::function();
    }

    let owner = format_type(&first.ty, true);
    if registry.contains(&owner) {
        trace!(function = %decl.name, owner = %owner, "inferred owning type");
        Resolution::owned_by(owner)
    } else {
        Resolution::function()
    }
}

/// Name of the type a function's first result refers to, when that result
/// is a plain local type name (`T` or `*T`).
///
/// Used to learn type names from results when that policy is enabled.
pub fn result_type_name(decl: &Declaration) -> Option<&str> {
    let first = decl.results.first()?;
    if first.names.len() > 1 {
        return None;
    }
    match &first.ty {
        TypeExpr::Identifier(name) => Some(name.as_str()),
        TypeExpr::Pointer(inner) => match inner.as_ref() {
            TypeExpr::Identifier(name) => Some(name.as_str()),
            _ => None,
        },
        _ => None,
    }
}
