pub mod go;
pub mod receiver_resolver;
pub mod type_registry;

pub use receiver_resolver::{resolve, Resolution};
pub use type_registry::TypeRegistry;
