use std::str::FromStr;

use graphforge_config::{Language, MappingContext};
use graphforge_core::{LiteralValue, NamedDefinition, OperationKind, mandatory_type};

use crate::types::{TypeRef, TypeSyntax};

/// Renders schema literals into target-language source text.
///
/// Concrete renderers live with the template layer; a mapper only holds one
/// so downstream emission can reach it through
/// [`TypeMapper::value_renderer`].
pub trait ValueRenderer {
    /// Format a literal for the given target type.
    fn render(&self, context: &MappingContext, value: &LiteralValue, target_type: &str) -> String;
}

/// Trait for mapping resolved schema types to target-language type names.
///
/// The shared wrapping rules live in the default methods; an implementation
/// supplies a [`TypeSyntax`] table plus the few genuinely per-language
/// pieces (annotations and the value-rendering delegate).
pub trait TypeMapper {
    /// The target language this mapper renders for.
    fn language(&self) -> Language;

    /// The target language's type-syntax table.
    fn syntax(&self) -> &TypeSyntax;

    /// The injected value-rendering delegate.
    fn value_renderer(&self) -> &dyn ValueRenderer;

    /// Jackson annotation naming the polymorphic type-id resolver class for
    /// interface models. `model_package` carries its trailing dot.
    fn resolver_type_id_annotation(&self, model_package: &str) -> String;

    /// Extra annotations for a generated field or type.
    fn additional_annotations(&self, _context: &MappingContext, _type_name: &str) -> Vec<String> {
        Vec::new()
    }

    /// Wrap a type name in the language's collection wrapper.
    ///
    /// `mandatory` describes the element position; the base rule renders
    /// mandatory and nullable elements the same way.
    fn wrap_into_list(
        &self,
        context: &MappingContext,
        type_name: &str,
        _mandatory: bool,
    ) -> String {
        self.generics_string(context, self.syntax().list_type, type_name)
    }

    /// Wrap a covariant placeholder for the type in the collection wrapper,
    /// e.g. `scala.Seq[_ <: Node]`.
    fn wrap_super_type_into_list(
        &self,
        context: &MappingContext,
        type_name: &str,
        _mandatory: bool,
    ) -> String {
        let syntax = self.syntax();
        let bounded = format!("{}{}", syntax.super_bound_prefix, type_name);
        self.generics_string(context, syntax.list_type, &bounded)
    }

    /// Generic composition primitive: a template with a `%s` placeholder
    /// substitutes it, a plain name gets bracket wrapping. Every wrapping
    /// rule routes through here.
    fn generics_string(&self, _context: &MappingContext, outer: &str, inner: &str) -> String {
        self.syntax().generics(outer, inner)
    }

    /// Check if a type name is one of the language's primitives.
    fn is_primitive(&self, type_name: &str) -> bool {
        self.syntax().is_primitive(type_name)
    }

    /// Whether a generated field of this type warrants a validation
    /// annotation. Primitives never do.
    fn needs_validation_annotation(&self, type_name: &str) -> bool {
        !self.is_primitive(type_name)
    }

    /// Adapt the computed return type of a query/mutation/subscription
    /// field.
    ///
    /// Rules, applied in order:
    /// 1. subscription fields wrap in the subscription template
    /// 2. nullable non-collection names pick up the optional wrapper
    /// 3. collection names swap their outer wrapper for the list template,
    ///    keeping the element type
    /// 4. a generic return template wraps whatever the name has become
    /// 5. mandatory names fall back to a custom-mapped primitive if one fits
    fn wrap_api_return_type(
        &self,
        context: &MappingContext,
        definition: &NamedDefinition,
        parent_type_name: &str,
    ) -> String {
        let syntax = self.syntax();

        if matches!(
            OperationKind::from_str(parent_type_name),
            Ok(OperationKind::Subscription)
        ) {
            if let Some(template) = context.subscription_template() {
                return self.generics_string(context, template, &definition.name);
            }
        }

        let mut computed = TypeRef::parse(syntax, &definition.name);

        if context.use_optional_for_nullable_return_types
            && !definition.mandatory
            && !computed.is_list()
            && !computed.is_optional()
            && !syntax.is_foreign_collection(&definition.name)
        {
            computed = TypeRef::optional(computed);
        }

        if let TypeRef::List(inner) = &computed {
            if let Some(template) = context.return_list_template() {
                return self.generics_string(context, template, &inner.render(syntax));
            }
        }

        if let Some(template) = context.return_template() {
            return self.generics_string(context, template, &computed.render(syntax));
        }

        if definition.mandatory && definition.primitive_can_be_used {
            let key = mandatory_type(&definition.graphql_type_name);
            if let Some(mapped) = context.custom_type_for(&key) {
                if syntax.is_primitive(mapped) {
                    return mapped.to_string();
                }
            }
        }

        computed.render(syntax)
    }
}
