//! Structured type names and per-language syntax tables.
//!
//! Type names cross the mapper boundary as plain strings, but internally
//! every wrapping decision works on a parsed [`TypeRef`] so nested wrappers
//! survive round trips instead of being pattern-matched as substrings.

/// Per-language type-syntax table.
///
/// Each mapper implementation carries one of these as a `const`. Wrapper
/// recognition is anchored on it: a string counts as wrapped only when it
/// spells the marker directly followed by the open bracket and ends with the
/// close bracket. Foreign list forms are the one lexical exception, matched
/// by prefix alone, because generated sources may spell them with or without
/// a type parameter.
#[derive(Debug, Clone, Copy)]
pub struct TypeSyntax {
    /// Fully qualified collection wrapper, e.g. "scala.Seq"
    pub list_type: &'static str,
    /// Fully qualified optional wrapper, e.g. "scala.Option"
    pub optional_type: &'static str,
    /// Collection wrappers of other target languages, never restructured
    pub foreign_list_types: &'static [&'static str],
    /// Opening generic bracket
    pub generic_open: char,
    /// Closing generic bracket
    pub generic_close: char,
    /// Covariant bound prefix, e.g. "_ <: "
    pub super_bound_prefix: &'static str,
    /// Unboxed primitive type names
    pub primitives: &'static [&'static str],
}

impl TypeSyntax {
    /// Check if a name is one of the language's primitives.
    pub fn is_primitive(&self, name: &str) -> bool {
        self.primitives.contains(&name)
    }

    /// Check if a name is the language's own collection form.
    pub fn is_collection(&self, name: &str) -> bool {
        self.generic_parameter(name).is_some()
    }

    /// Check if a name is the language's own optional form.
    pub fn is_optional(&self, name: &str) -> bool {
        self.optional_parameter(name).is_some()
    }

    /// Check if a name spells another language's collection wrapper.
    pub fn is_foreign_collection(&self, name: &str) -> bool {
        self.foreign_list_types
            .iter()
            .any(|marker| name.starts_with(marker))
    }

    /// Extract the element type of the language's collection form.
    ///
    /// Returns `None` for anything that is not wrapped in the collection
    /// marker, rather than failing.
    pub fn generic_parameter<'a>(&self, name: &'a str) -> Option<&'a str> {
        self.wrapped_inner(name, self.list_type)
    }

    /// Extract the inner type of the language's optional form.
    pub fn optional_parameter<'a>(&self, name: &'a str) -> Option<&'a str> {
        self.wrapped_inner(name, self.optional_type)
    }

    /// Compose a generic type: `%s` templates substitute their first
    /// placeholder, plain names get bracket wrapping.
    ///
    /// Surplus placeholders are left verbatim; a template like that produces
    /// malformed generated source but never a crash.
    pub fn generics(&self, outer: &str, inner: &str) -> String {
        if outer.contains("%s") {
            outer.replacen("%s", inner, 1)
        } else {
            format!(
                "{}{}{}{}",
                outer, self.generic_open, inner, self.generic_close
            )
        }
    }

    fn wrapped_inner<'a>(&self, name: &'a str, marker: &str) -> Option<&'a str> {
        let rest = name.strip_prefix(marker)?;
        let rest = rest.strip_prefix(self.generic_open)?;
        rest.strip_suffix(self.generic_close)
    }
}

/// A parsed type name.
///
/// Wrappers nest, so a list of optional of T is `List(Optional(Named(T)))`
/// and renders back to the exact string it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// An unboxed primitive type name.
    Primitive(String),
    /// Any bare type name, foreign list forms included.
    Named(String),
    /// The language's optional wrapper applied to an inner type.
    Optional(Box<TypeRef>),
    /// The language's collection wrapper applied to an inner type.
    List(Box<TypeRef>),
    /// A covariant bound placeholder, e.g. `_ <: Node`.
    Bounded(Box<TypeRef>),
}

impl TypeRef {
    /// Create a primitive type reference.
    pub fn primitive(name: impl Into<String>) -> Self {
        Self::Primitive(name.into())
    }

    /// Create a named type reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Create an optional type reference.
    pub fn optional(inner: TypeRef) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Create a list type reference.
    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    /// Create a covariant bound placeholder.
    pub fn bounded(inner: TypeRef) -> Self {
        Self::Bounded(Box::new(inner))
    }

    /// Check if this type is the optional wrapper.
    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    /// Check if this type is the collection wrapper.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Get the inner type for wrapper variants (Optional, List, Bounded).
    ///
    /// Returns `None` for non-wrapper variants.
    pub fn inner_type(&self) -> Option<&TypeRef> {
        match self {
            Self::Optional(inner) | Self::List(inner) | Self::Bounded(inner) => Some(inner),
            _ => None,
        }
    }

    /// Parse a rendered type name into its structure.
    ///
    /// Recursive, so nested wrappers parse all the way down. Unrecognized
    /// spellings stay a plain [`TypeRef::Named`] holding the full string.
    pub fn parse(syntax: &TypeSyntax, name: &str) -> TypeRef {
        if let Some(inner) = syntax.generic_parameter(name) {
            return TypeRef::list(TypeRef::parse(syntax, inner));
        }
        if let Some(inner) = syntax.optional_parameter(name) {
            return TypeRef::optional(TypeRef::parse(syntax, inner));
        }
        if let Some(inner) = name.strip_prefix(syntax.super_bound_prefix) {
            return TypeRef::bounded(TypeRef::parse(syntax, inner));
        }
        if syntax.is_primitive(name) {
            return TypeRef::primitive(name);
        }
        TypeRef::named(name)
    }

    /// Render this type to its target-language spelling.
    pub fn render(&self, syntax: &TypeSyntax) -> String {
        match self {
            TypeRef::Primitive(name) | TypeRef::Named(name) => name.clone(),
            TypeRef::Optional(inner) => syntax.generics(syntax.optional_type, &inner.render(syntax)),
            TypeRef::List(inner) => syntax.generics(syntax.list_type, &inner.render(syntax)),
            TypeRef::Bounded(inner) => {
                format!("{}{}", syntax.super_bound_prefix, inner.render(syntax))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mappers::{JAVA_SYNTAX, SCALA_SYNTAX};

    #[test]
    fn test_generics_brackets() {
        assert_eq!(SCALA_SYNTAX.generics("scala.Seq", "User"), "scala.Seq[User]");
        assert_eq!(
            JAVA_SYNTAX.generics("java.util.List", "User"),
            "java.util.List<User>"
        );
    }

    #[test]
    fn test_generics_placeholder() {
        assert_eq!(SCALA_SYNTAX.generics("Mono[%s]", "User"), "Mono[User]");
        assert_eq!(
            JAVA_SYNTAX.generics("reactor.core.publisher.Mono<%s>", "User"),
            "reactor.core.publisher.Mono<User>"
        );
    }

    #[test]
    fn test_generics_surplus_placeholders_left_verbatim() {
        assert_eq!(
            SCALA_SYNTAX.generics("Either[%s, %s]", "User"),
            "Either[User, %s]"
        );
    }

    #[test]
    fn test_is_collection_requires_marker_and_brackets() {
        assert!(SCALA_SYNTAX.is_collection("scala.Seq[User]"));
        assert!(SCALA_SYNTAX.is_collection("scala.Seq[]"));
        assert!(!SCALA_SYNTAX.is_collection("scala.Seq"));
        assert!(!SCALA_SYNTAX.is_collection("scala.SeqWrapper[User]"));
        assert!(!SCALA_SYNTAX.is_collection("Seq[User]"));
        assert!(JAVA_SYNTAX.is_collection("java.util.List<User>"));
        assert!(!JAVA_SYNTAX.is_collection("java.util.List[User]"));
    }

    #[test]
    fn test_wrapping_is_detectable() {
        let wrapped = SCALA_SYNTAX.generics(SCALA_SYNTAX.list_type, "Foo");
        assert!(SCALA_SYNTAX.is_collection(&wrapped));
        assert_eq!(SCALA_SYNTAX.generic_parameter(&wrapped), Some("Foo"));

        let wrapped = JAVA_SYNTAX.generics(JAVA_SYNTAX.optional_type, "Foo");
        assert!(JAVA_SYNTAX.is_optional(&wrapped));
    }

    #[test]
    fn test_is_optional() {
        assert!(SCALA_SYNTAX.is_optional("scala.Option[User]"));
        assert!(!SCALA_SYNTAX.is_optional("scala.Optional[User]"));
        assert!(!SCALA_SYNTAX.is_optional("User"));
        assert!(JAVA_SYNTAX.is_optional("java.util.Optional<User>"));
    }

    #[test]
    fn test_is_foreign_collection() {
        assert!(SCALA_SYNTAX.is_foreign_collection("java.util.List[User]"));
        assert!(SCALA_SYNTAX.is_foreign_collection("java.util.List"));
        assert!(!SCALA_SYNTAX.is_foreign_collection("scala.Seq[User]"));
        // Java is the only JVM target with a foreign sibling configured
        assert!(!JAVA_SYNTAX.is_foreign_collection("scala.Seq[User]"));
    }

    #[test]
    fn test_generic_parameter() {
        assert_eq!(SCALA_SYNTAX.generic_parameter("scala.Seq[User]"), Some("User"));
        assert_eq!(
            SCALA_SYNTAX.generic_parameter("scala.Seq[scala.Option[User]]"),
            Some("scala.Option[User]")
        );
        assert_eq!(SCALA_SYNTAX.generic_parameter("User"), None);
        assert_eq!(SCALA_SYNTAX.generic_parameter("scala.Option[User]"), None);
        assert_eq!(
            JAVA_SYNTAX.generic_parameter("java.util.List<User>"),
            Some("User")
        );
    }

    #[test]
    fn test_parse_named_and_primitive() {
        assert_eq!(
            TypeRef::parse(&SCALA_SYNTAX, "User"),
            TypeRef::named("User")
        );
        assert_eq!(
            TypeRef::parse(&SCALA_SYNTAX, "Int"),
            TypeRef::primitive("Int")
        );
        // Scala spells primitives capitalized, so "int" is just a name there
        assert_eq!(TypeRef::parse(&SCALA_SYNTAX, "int"), TypeRef::named("int"));
        assert_eq!(
            TypeRef::parse(&JAVA_SYNTAX, "int"),
            TypeRef::primitive("int")
        );
    }

    #[test]
    fn test_parse_nested_wrappers() {
        let parsed = TypeRef::parse(&SCALA_SYNTAX, "scala.Seq[scala.Option[User]]");
        assert_eq!(
            parsed,
            TypeRef::list(TypeRef::optional(TypeRef::named("User")))
        );

        let bounded = TypeRef::parse(&SCALA_SYNTAX, "scala.Seq[_ <: Node]");
        assert_eq!(bounded, TypeRef::list(TypeRef::bounded(TypeRef::named("Node"))));
    }

    #[test]
    fn test_parse_keeps_foreign_forms_opaque() {
        assert_eq!(
            TypeRef::parse(&SCALA_SYNTAX, "java.util.List[User]"),
            TypeRef::named("java.util.List[User]")
        );
    }

    #[test]
    fn test_render_round_trip() {
        let names = [
            "User",
            "Int",
            "scala.Seq[User]",
            "scala.Option[User]",
            "scala.Seq[scala.Option[User]]",
            "scala.Option[scala.Seq[User]]",
            "scala.Seq[_ <: Node]",
            "java.util.List[User]",
            "Map[String, Int]",
        ];
        for name in names {
            let parsed = TypeRef::parse(&SCALA_SYNTAX, name);
            assert_eq!(parsed.render(&SCALA_SYNTAX), name, "round trip of {name}");
        }

        let java_names = [
            "java.util.List<User>",
            "java.util.Optional<java.util.List<User>>",
            "java.util.List<? extends Node>",
        ];
        for name in java_names {
            let parsed = TypeRef::parse(&JAVA_SYNTAX, name);
            assert_eq!(parsed.render(&JAVA_SYNTAX), name, "round trip of {name}");
        }
    }

    #[test]
    fn test_inner_type() {
        let list = TypeRef::list(TypeRef::named("User"));
        assert_eq!(list.inner_type(), Some(&TypeRef::named("User")));
        assert!(list.is_list());
        assert!(!list.is_optional());
        assert_eq!(TypeRef::named("User").inner_type(), None);
    }
}
