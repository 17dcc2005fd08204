//! Validation of return-type templates and model-name affixes

use miette::SourceSpan;

use crate::{MappingContext, Result, SourceContext};

/// Check every configured template and affix, reporting the first violation.
pub(crate) fn validate_context(context: &MappingContext, source: &SourceContext) -> Result<()> {
    let templates = [
        (
            "subscription_return_type",
            context.subscription_return_type.as_deref(),
        ),
        ("api_return_type", context.api_return_type.as_deref()),
        ("api_return_list_type", context.api_return_list_type.as_deref()),
    ];

    for (option, template) in templates {
        if let Some(template) = template {
            let placeholders = placeholder_count(template);
            if placeholders > 1 {
                let span = find_value_span(source.src(), template);
                return Err(source.invalid_template_error(option, placeholders, span));
            }
        }
    }

    let affixes = [
        ("model_name_prefix", context.model_name_prefix.as_deref(), true),
        (
            "model_name_suffix",
            context.model_name_suffix.as_deref(),
            false,
        ),
    ];

    for (option, affix, leading) in affixes {
        if let Some(affix) = affix {
            if let Some(reason) = validate_affix(affix, leading) {
                let span = find_value_span(source.src(), affix);
                return Err(source.invalid_affix_error(option, affix, reason, span));
            }
        }
    }

    Ok(())
}

/// Number of `%s` substitution points in a template
pub(crate) fn placeholder_count(template: &str) -> usize {
    template.matches("%s").count()
}

/// Validate that a model-name affix keeps generated identifiers valid
/// Returns None if valid, Some(reason) if invalid
///
/// `leading` marks the prefix position, which starts the identifier and
/// therefore must not begin with a digit.
pub(crate) fn validate_affix(affix: &str, leading: bool) -> Option<&'static str> {
    if leading {
        if let Some(first) = affix.chars().next() {
            if first.is_ascii_digit() {
                return Some("a model name prefix cannot start with a digit");
            }
        }
    }

    for c in affix.chars() {
        if !c.is_ascii_alphanumeric() && c != '_' {
            return Some("affix must contain only letters, numbers, and underscores");
        }
    }

    None
}

/// Find the span of a configured string value in the TOML source
/// Searches for the quoted form first, then the bare text
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{value}\"");
    if let Some(pos) = src.find(&quoted) {
        // +1 to skip the opening quote
        return Some(SourceSpan::from((pos + 1, value.len())));
    }

    // Fallback: find the bare text (less precise)
    if let Some(pos) = src.find(value) {
        return Some(SourceSpan::from((pos, value.len())));
    }

    None
}
