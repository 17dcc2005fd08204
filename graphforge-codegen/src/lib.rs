//! Per-language type mapping for the graphforge generator.
//!
//! Given a [`MappingContext`](graphforge_config::MappingContext) and a
//! resolved type definition, a [`TypeMapper`] computes the target-language
//! type name: optional and collection wrapping, operation return-type
//! adaptation, primitive detection, and annotation strings.
//!
//! # Module Organization
//!
//! - [`types`] - Structured type names (TypeRef) and syntax tables (TypeSyntax)
//! - [`language`] - The TypeMapper and ValueRenderer traits
//! - [`mappers`] - ScalaTypeMapper, JavaTypeMapper, and strategy dispatch

pub mod language;
pub mod mappers;
pub mod types;

pub use language::{TypeMapper, ValueRenderer};
pub use mappers::{JAVA_SYNTAX, JavaTypeMapper, SCALA_SYNTAX, ScalaTypeMapper, mapper_for};
pub use types::{TypeRef, TypeSyntax};
