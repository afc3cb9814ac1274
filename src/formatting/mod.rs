pub mod type_signature;

pub use type_signature::{format_type, render_field_list};
