//! Java mapping strategy.

use graphforge_config::Language;

use crate::language::{TypeMapper, ValueRenderer};
use crate::types::TypeSyntax;

/// Java type-syntax table.
pub const JAVA_SYNTAX: TypeSyntax = TypeSyntax {
    list_type: "java.util.List",
    optional_type: "java.util.Optional",
    foreign_list_types: &[],
    generic_open: '<',
    generic_close: '>',
    super_bound_prefix: "? extends ",
    primitives: &[
        "int", "long", "float", "double", "boolean", "char", "byte", "short",
    ],
};

/// Maps resolved schema types to Java type names.
pub struct JavaTypeMapper {
    value_renderer: Box<dyn ValueRenderer>,
}

impl JavaTypeMapper {
    pub fn new(value_renderer: Box<dyn ValueRenderer>) -> Self {
        Self { value_renderer }
    }
}

impl TypeMapper for JavaTypeMapper {
    fn language(&self) -> Language {
        Language::Java
    }

    fn syntax(&self) -> &TypeSyntax {
        &JAVA_SYNTAX
    }

    fn value_renderer(&self) -> &dyn ValueRenderer {
        self.value_renderer.as_ref()
    }

    fn resolver_type_id_annotation(&self, model_package: &str) -> String {
        format!(
            "com.fasterxml.jackson.databind.annotation.JsonTypeIdResolver({model_package}GraphqlJacksonTypeIdResolver.class)"
        )
    }
}
