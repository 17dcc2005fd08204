//! Shared building blocks for the graphforge code generator.
//!
//! The schema resolver and the per-language type mappers both consume the
//! types in this crate: [`NamedDefinition`] describes one resolved type
//! reference, [`OperationKind`] classifies the operation a field belongs to,
//! and [`LiteralValue`] carries schema literals to the value renderers.

pub mod operation;
pub mod schema;
pub mod utils;

pub use operation::OperationKind;
pub use schema::{LiteralValue, NamedDefinition, mandatory_type};
pub use utils::is_not_blank;
