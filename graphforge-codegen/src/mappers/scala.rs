//! Scala mapping strategy.

use graphforge_config::{Language, MappingContext};

use crate::language::{TypeMapper, ValueRenderer};
use crate::types::TypeSyntax;

/// Scala type-syntax table.
pub const SCALA_SYNTAX: TypeSyntax = TypeSyntax {
    list_type: "scala.Seq",
    optional_type: "scala.Option",
    foreign_list_types: &["java.util.List"],
    generic_open: '[',
    generic_close: ']',
    super_bound_prefix: "_ <: ",
    primitives: &[
        "Byte", "Short", "Int", "Long", "Float", "Double", "Char", "Boolean",
    ],
};

/// Maps resolved schema types to Scala type names.
pub struct ScalaTypeMapper {
    value_renderer: Box<dyn ValueRenderer>,
}

impl ScalaTypeMapper {
    pub fn new(value_renderer: Box<dyn ValueRenderer>) -> Self {
        Self { value_renderer }
    }
}

impl TypeMapper for ScalaTypeMapper {
    fn language(&self) -> Language {
        Language::Scala
    }

    fn syntax(&self) -> &TypeSyntax {
        &SCALA_SYNTAX
    }

    fn value_renderer(&self) -> &dyn ValueRenderer {
        self.value_renderer.as_ref()
    }

    fn resolver_type_id_annotation(&self, model_package: &str) -> String {
        format!(
            "com.fasterxml.jackson.databind.annotation.JsonTypeIdResolver(classOf[{model_package}GraphqlJacksonTypeIdResolver])"
        )
    }

    /// Self-imported enums need Jackson pointed at their generated
    /// `TypeRefer` companion, spelled under the model package.
    fn additional_annotations(&self, context: &MappingContext, type_name: &str) -> Vec<String> {
        let decorated = context.model_name(type_name);
        if !context.enum_self_imports.contains(&decorated) {
            return Vec::new();
        }

        let package = match context.model_package() {
            Some(package) => format!("{package}."),
            None => String::new(),
        };
        vec![format!(
            "com.fasterxml.jackson.module.scala.JsonScalaEnumeration(classOf[{package}{decorated}TypeRefer])"
        )]
    }
}
