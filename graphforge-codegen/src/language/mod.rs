//! Language-agnostic mapping abstractions.
//!
//! This module provides the traits every target language implements:
//! - [`TypeMapper`] - Maps resolved schema types to target type names
//! - [`ValueRenderer`] - Formats schema literals into target source text

mod traits;

pub use traits::{TypeMapper, ValueRenderer};
