use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for config operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "graphforge.toml");
/// ctx.invalid_template_error("api_return_type", 2, span);
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an error for a return-type template with too many placeholders.
    pub fn invalid_template_error(
        &self,
        option: impl Into<String>,
        placeholders: usize,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidTemplate {
            src: self.named_source(),
            span,
            option: option.into(),
            placeholders,
        })
    }

    /// Create an error for a model-name affix with identifier-unsafe characters.
    pub fn invalid_affix_error(
        &self,
        option: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidAffix {
            src: self.named_source(),
            span,
            option: option.into(),
            value: value.into(),
            reason: reason.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("check that the path points to a readable graphforge.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse graphforge.toml")]
    #[diagnostic(code(graphforge::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid return-type template in '{option}'")]
    #[diagnostic(
        code(graphforge::invalid_template),
        help("a template may contain at most one '%s' placeholder, this one has {placeholders}")
    )]
    InvalidTemplate {
        #[source_code]
        src: NamedSource<String>,
        #[label("template declared here")]
        span: Option<SourceSpan>,
        option: String,
        placeholders: usize,
    },

    #[error("invalid {option} '{value}'")]
    #[diagnostic(
        code(graphforge::invalid_affix),
        help("{reason}. Use only letters, numbers, and underscores.")
    )]
    InvalidAffix {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
        option: String,
        value: String,
        reason: String,
    },
}
