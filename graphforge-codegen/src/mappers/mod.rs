//! Per-language mapper strategies.
//!
//! Centralizes strategy creation: [`mapper_for`] picks the implementation
//! for a configured [`Language`].

mod java;
mod scala;

pub use java::{JAVA_SYNTAX, JavaTypeMapper};
pub use scala::{SCALA_SYNTAX, ScalaTypeMapper};

use graphforge_config::Language;

use crate::language::{TypeMapper, ValueRenderer};

/// Create the mapper strategy for the given language.
pub fn mapper_for(
    language: Language,
    value_renderer: Box<dyn ValueRenderer>,
) -> Box<dyn TypeMapper> {
    match language {
        Language::Scala => Box::new(ScalaTypeMapper::new(value_renderer)),
        Language::Java => Box::new(JavaTypeMapper::new(value_renderer)),
    }
}
