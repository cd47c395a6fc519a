//! Property name to identifier resolution.
//!
//! The field-generating rules and the rules that later look those fields up
//! by name must share one resolver, or lookups silently miss.

use crate::model::FieldType;
use crate::schema::non_blank_str;
use heck::{ToLowerCamelCase, ToUpperCamelCase};
use serde_json::Value;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Schema keyword that overrides the property name used for identifiers.
pub const FIELD_NAME_OVERRIDE_KEYWORD: &str = "x-field-name";

/// Words that cannot be used as field identifiers as-is; resolved names
/// that collide get a `_` suffix.
static RESERVED_WORDS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
    [
        "abstract", "as", "assert", "async", "await", "boolean", "break", "byte", "case", "catch",
        "char", "class", "const", "continue", "default", "do", "double", "else", "enum", "extends",
        "false", "final", "finally", "float", "fn", "for", "goto", "if", "impl", "implements",
        "import", "in", "instanceof", "int", "interface", "let", "long", "match", "mod", "native",
        "new", "null", "package", "private", "protected", "pub", "public", "return", "self",
        "short", "static", "strictfp", "struct", "super", "switch", "synchronized", "this",
        "throw", "throws", "trait", "transient", "true", "try", "type", "use", "void", "volatile",
        "where", "while",
    ]
    .into_iter()
    .collect()
});

/// Accessor names already taken by every generated class.
static RESERVED_ACCESSORS: LazyLock<HashSet<&str>> =
    LazyLock::new(|| ["getClass", "hashCode", "toString"].into_iter().collect());

/// Maps schema property names to generated identifiers.
///
/// Implementations must be deterministic. `property_schema` is the
/// property's declaration from the sibling `properties` map, or `None`
/// when the schema does not declare it.
pub trait NameResolver: Send + Sync {
    fn field_name(&self, property_name: &str, property_schema: Option<&Value>) -> String;

    fn getter_name(
        &self,
        property_name: &str,
        field_type: &FieldType,
        property_schema: Option<&Value>,
    ) -> String;

    fn setter_name(&self, property_name: &str, property_schema: Option<&Value>) -> String;
}

/// Bean-style naming: `lowerCamel` fields, `getX`/`isX`/`setX` accessors.
///
/// - Property names are split into words on any non-alphanumeric character
///   and on case changes, then camel-cased (`foo-bar` -> `fooBar`).
/// - A field name starting with a digit gets a `_` prefix; one that is a
///   reserved word gets a `_` suffix.
/// - Boolean fields use the `is` getter prefix.
/// - A property declaring `x-field-name` is named after that value instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct BeanNameResolver;

impl BeanNameResolver {
    /// The name identifiers are derived from: the override keyword if the
    /// property declares one, otherwise the property name itself.
    fn source_name<'a>(property_name: &'a str, property_schema: Option<&'a Value>) -> &'a str {
        property_schema
            .and_then(|schema| non_blank_str(schema, FIELD_NAME_OVERRIDE_KEYWORD))
            .unwrap_or(property_name)
    }

    /// `UpperCamel` form used after an accessor prefix. Never empty.
    fn accessor_stem(property_name: &str, property_schema: Option<&Value>) -> String {
        let stem: String = Self::source_name(property_name, property_schema).to_upper_camel_case();
        if stem.is_empty() {
            "_".to_string()
        } else {
            stem
        }
    }

    fn accessor(prefix: &str, stem: &str) -> String {
        let name: String = format!("{prefix}{stem}");
        if RESERVED_ACCESSORS.contains(name.as_str()) {
            format!("{name}_")
        } else {
            name
        }
    }
}

impl NameResolver for BeanNameResolver {
    fn field_name(&self, property_name: &str, property_schema: Option<&Value>) -> String {
        let camel: String = Self::source_name(property_name, property_schema).to_lower_camel_case();
        if camel.is_empty() {
            return "_".to_string();
        }
        if camel.starts_with(|c: char| c.is_ascii_digit()) {
            return format!("_{camel}");
        }
        if RESERVED_WORDS.contains(camel.as_str()) {
            return format!("{camel}_");
        }
        camel
    }

    fn getter_name(
        &self,
        property_name: &str,
        field_type: &FieldType,
        property_schema: Option<&Value>,
    ) -> String {
        let prefix: &str = if field_type.is_boolean() { "is" } else { "get" };
        Self::accessor(prefix, &Self::accessor_stem(property_name, property_schema))
    }

    fn setter_name(&self, property_name: &str, property_schema: Option<&Value>) -> String {
        Self::accessor("set", &Self::accessor_stem(property_name, property_schema))
    }
}
