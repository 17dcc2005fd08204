// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod context;
mod error;
mod language;
mod validate;

use std::path::Path;
use std::str::FromStr;

pub use context::MappingContext;
pub use error::{Error, Result, SourceContext};
pub use language::Language;

/// Parse a graphforge.toml file from the given path
pub fn parse_file(path: impl AsRef<Path>) -> Result<MappingContext> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    let filename = path.display().to_string();
    parse_str_with_filename(&content, &filename)
}

/// Parse a config from a string with a custom filename for error reporting
pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<MappingContext> {
    let source = SourceContext::new(content, filename);
    let context: MappingContext = toml::from_str(content).map_err(|e| source.parse_error(e))?;

    validate::validate_context(&context, &source)?;
    Ok(context)
}

impl FromStr for MappingContext {
    type Err = Box<Error>;

    /// Parse a config from a string (uses "graphforge.toml" as default filename)
    fn from_str(content: &str) -> Result<Self> {
        parse_str_with_filename(content, "graphforge.toml")
    }
}
