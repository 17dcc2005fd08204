/// One resolved type reference, as handed to a language type mapper.
///
/// `name` is the computed target-language spelling and may already carry
/// collection or optional wrapping (for example `scala.Seq[User]`).
/// `graphql_type_name` keeps the raw schema name so primitive lookups can
/// consult the mapping table with the original `Int` / `ID` / `User` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedDefinition {
    /// Computed target-language type name, possibly wrapped.
    pub name: String,
    /// Type name as it appears in the schema document.
    pub graphql_type_name: String,
    /// Declared non-null (`!`) in the schema.
    pub mandatory: bool,
    /// Whether this position tolerates an unboxed primitive spelling.
    pub primitive_can_be_used: bool,
}

impl NamedDefinition {
    pub fn new(name: impl Into<String>, mandatory: bool) -> Self {
        let name = name.into();
        Self {
            graphql_type_name: name.clone(),
            name,
            mandatory,
            primitive_can_be_used: true,
        }
    }

    /// Records the raw schema name when it differs from the computed one.
    pub fn with_graphql_type(mut self, graphql_type_name: impl Into<String>) -> Self {
        self.graphql_type_name = graphql_type_name.into();
        self
    }

    pub fn with_primitive_allowed(mut self, allowed: bool) -> Self {
        self.primitive_can_be_used = allowed;
        self
    }
}

/// Non-null spelling of a schema type name, e.g. `Int` becomes `Int!`.
///
/// Custom type mappings key mandatory entries this way, so lookups for a
/// non-null position must use this form.
pub fn mandatory_type(graphql_type_name: &str) -> String {
    format!("{graphql_type_name}!")
}

/// A literal from the schema document: a default value, an enum constant,
/// or a list of either.
///
/// Formatting literals into target-language source is the job of the
/// per-language value renderers; this type only carries the data.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Enum(String),
    List(Vec<LiteralValue>),
}
