//! Canonical textual rendering of type expressions
//!
//! The output grammar is relied on by downstream consumers, so spacing and
//! punctuation here are fixed: `func(a, b int) int`, `map[string]*Widget`,
//! `chan int`, `[]byte`, `pkg.Type`.

use crate::core::ast::{ChanDir, Field, TypeExpr};
use std::fmt;

/// Render a type expression.
///
/// With `dereference_pointers` set, an outermost pointer marker is dropped
/// (`*Widget` renders as `Widget`). Nested types always keep their markers.
pub fn format_type(ty: &TypeExpr, dereference_pointers: bool) -> String {
    match ty {
        TypeExpr::Identifier(name) => name.clone(),
        TypeExpr::Pointer(inner) if dereference_pointers => format_type(inner, false),
        TypeExpr::Pointer(inner) => format!("*{}", format_type(inner, false)),
        TypeExpr::Qualified { package, name } => format!("{}.{}", package, name),
        TypeExpr::Array {
            length: Some(length),
            element,
        } => format!("[{}]{}", length, format_type(element, false)),
        TypeExpr::Array {
            length: None,
            element,
        } => format!("[]{}", format_type(element, false)),
        TypeExpr::FuncType { params, results } => format_func(params, results),
        TypeExpr::MapType { key, value } => format!(
            "map[{}]{}",
            format_type(key, false),
            format_type(value, false)
        ),
        TypeExpr::ChanType { dir, element } => {
            format!("{}{}", chan_prefix(*dir), format_type(element, false))
        }
        TypeExpr::InterfaceType => "interface{}".to_string(),
        TypeExpr::Variadic(inner) => format!("...{}", format_type(inner, false)),
        TypeExpr::Generic { base, args } => {
            let args: Vec<String> = args.iter().map(|arg| format_type(arg, false)).collect();
            format!("{}[{}]", format_type(base, false), args.join(", "))
        }
        TypeExpr::Verbatim(text) => text.clone(),
    }
}

fn chan_prefix(dir: ChanDir) -> &'static str {
    match dir {
        ChanDir::Both => "chan ",
        ChanDir::Send => "chan<- ",
        ChanDir::Recv => "<-chan ",
    }
}

fn format_func(params: &[Field], results: &[Field]) -> String {
    let mut out = format!("func({})", render_field_list(params, true));
    if !results.is_empty() {
        out.push(' ');
        out.push_str(&render_field_list(results, false));
    }
    out
}

/// Render a field list without the surrounding parentheses.
///
/// With `include_names`, co-declared names share one type token
/// (`a, b int`). Without names, the type token is repeated once per name so
/// the arity still matches (`int, int`). Anonymous fields render as the type
/// alone.
pub fn render_field_list(fields: &[Field], include_names: bool) -> String {
    fields
        .iter()
        .map(|field| render_field(field, include_names))
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_field(field: &Field, include_names: bool) -> String {
    let ty = format_type(&field.ty, false);
    match field.names.len() {
        0 => ty,
        _ if include_names => format!("{} {}", field.names.join(", "), ty),
        1 => ty,
        n => vec![ty; n].join(", "),
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_type(self, false))
    }
}
