use graphforge_core::is_not_blank;
use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;

use crate::Language;

/// Generation options read by the type mappers.
///
/// Every option is optional in the TOML document; blank strings count as
/// unset. The context is immutable for the duration of one generation run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MappingContext {
    /// Target output language
    pub language: Language,

    /// Base package for all generated sources
    pub package_name: Option<String>,

    /// Package for generated model classes (falls back to `package_name`)
    pub model_package_name: Option<String>,

    /// Prefix prepended to generated model names
    pub model_name_prefix: Option<String>,

    /// Suffix appended to generated model names
    pub model_name_suffix: Option<String>,

    /// Template wrapping every operation return type, e.g. "Mono"
    pub api_return_type: Option<String>,

    /// Template replacing the collection wrapper on list return types
    pub api_return_list_type: Option<String>,

    /// Template wrapping subscription return types, e.g. "Publisher"
    pub subscription_return_type: Option<String>,

    /// Wrap nullable operation return types in the optional wrapper
    pub use_optional_for_nullable_return_types: bool,

    /// Schema type name (trailing `!` for mandatory) to target type overrides
    pub custom_types_mapping: IndexMap<String, String>,

    /// Decorated enum names whose resolver must import its own TypeRefer class
    pub enum_self_imports: IndexSet<String>,
}

impl MappingContext {
    /// Subscription return-type template, if a non-blank one is configured.
    pub fn subscription_template(&self) -> Option<&str> {
        filter_blank(self.subscription_return_type.as_deref())
    }

    /// Generic return-type template, if a non-blank one is configured.
    pub fn return_template(&self) -> Option<&str> {
        filter_blank(self.api_return_type.as_deref())
    }

    /// List return-type template, if a non-blank one is configured.
    pub fn return_list_template(&self) -> Option<&str> {
        filter_blank(self.api_return_list_type.as_deref())
    }

    /// Package for generated models, with the base-package fallback applied.
    pub fn model_package(&self) -> Option<&str> {
        filter_blank(self.model_package_name.as_deref())
            .or_else(|| filter_blank(self.package_name.as_deref()))
    }

    /// Applies the configured prefix and suffix to a model name.
    pub fn model_name(&self, name: &str) -> String {
        let prefix = self.model_name_prefix.as_deref().unwrap_or("");
        let suffix = self.model_name_suffix.as_deref().unwrap_or("");
        format!("{prefix}{name}{suffix}")
    }

    /// Looks up a custom target type for a schema type name.
    ///
    /// Mandatory positions must pass the `Name!` spelling; nullable ones the
    /// bare name.
    pub fn custom_type_for(&self, graphql_type_name: &str) -> Option<&str> {
        self.custom_types_mapping
            .get(graphql_type_name)
            .map(String::as_str)
    }
}

fn filter_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| is_not_blank(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let ctx = MappingContext::default();
        assert_eq!(ctx.language, Language::Scala);
        assert!(!ctx.use_optional_for_nullable_return_types);
        assert!(ctx.subscription_template().is_none());
        assert!(ctx.return_template().is_none());
        assert!(ctx.return_list_template().is_none());
        assert!(ctx.model_package().is_none());
        assert!(ctx.custom_types_mapping.is_empty());
        assert!(ctx.enum_self_imports.is_empty());
    }

    #[test]
    fn test_blank_templates_count_as_unset() {
        let ctx = MappingContext {
            subscription_return_type: Some("   ".to_string()),
            api_return_type: Some(String::new()),
            ..Default::default()
        };
        assert!(ctx.subscription_template().is_none());
        assert!(ctx.return_template().is_none());
    }

    #[test]
    fn test_model_package_fallback() {
        let ctx = MappingContext {
            package_name: Some("com.acme".to_string()),
            ..Default::default()
        };
        assert_eq!(ctx.model_package(), Some("com.acme"));

        let ctx = MappingContext {
            package_name: Some("com.acme".to_string()),
            model_package_name: Some("com.acme.model".to_string()),
            ..Default::default()
        };
        assert_eq!(ctx.model_package(), Some("com.acme.model"));

        let ctx = MappingContext {
            package_name: Some("com.acme".to_string()),
            model_package_name: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(ctx.model_package(), Some("com.acme"));
    }

    #[test]
    fn test_model_name_applies_affixes() {
        let ctx = MappingContext {
            model_name_prefix: Some("Gql".to_string()),
            model_name_suffix: Some("TO".to_string()),
            ..Default::default()
        };
        assert_eq!(ctx.model_name("User"), "GqlUserTO");

        let bare = MappingContext::default();
        assert_eq!(bare.model_name("User"), "User");
    }

    #[test]
    fn test_custom_type_for() {
        let mut mapping = IndexMap::new();
        mapping.insert("Int!".to_string(), "int".to_string());
        mapping.insert("Int".to_string(), "Integer".to_string());
        let ctx = MappingContext {
            custom_types_mapping: mapping,
            ..Default::default()
        };
        assert_eq!(ctx.custom_type_for("Int!"), Some("int"));
        assert_eq!(ctx.custom_type_for("Int"), Some("Integer"));
        assert_eq!(ctx.custom_type_for("ID"), None);
    }
}
