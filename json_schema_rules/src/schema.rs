use crate::error::RuleError;
use crate::json_pointer::JsonPointer;
use serde_json::{Map, Value};

/// An object schema as seen by the keyword rules.
///
/// Holds the raw JSON so rules can hand property subnodes to the name
/// resolver unchanged. Property order is the declaration order of the
/// document (`serde_json` is built with `preserve_order`).
#[derive(Debug, Clone)]
pub struct Schema {
    content: Value,
    pointer: JsonPointer,
}

impl Schema {
    /// Wraps a schema value located at the document root.
    #[must_use]
    pub fn new(content: Value) -> Self {
        Self {
            content,
            pointer: JsonPointer::root(),
        }
    }

    /// Wraps a schema value located at `pointer` within a larger document.
    #[must_use]
    pub fn at(content: Value, pointer: JsonPointer) -> Self {
        Self { content, pointer }
    }

    /// Parses a schema document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::Json` if the string is not valid JSON.
    pub fn from_json(schema_json: &str) -> Result<Self, RuleError> {
        let content: Value = serde_json::from_str(schema_json)?;
        Ok(Self::new(content))
    }

    #[must_use]
    pub fn content(&self) -> &Value {
        &self.content
    }

    #[must_use]
    pub fn pointer(&self) -> &JsonPointer {
        &self.pointer
    }

    /// The schema's keywords, or `None` if the schema is not an object.
    #[must_use]
    pub fn keywords(&self) -> Option<&Map<String, Value>> {
        self.content.as_object()
    }

    /// The sibling `properties` map, if present and an object.
    #[must_use]
    pub fn properties(&self) -> Option<&Map<String, Value>> {
        self.content.get("properties").and_then(Value::as_object)
    }

    /// The declaration of a single property, if the schema declares it.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties().and_then(|properties| properties.get(name))
    }

    /// Trimmed `description`, treating empty/whitespace as absent.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        non_blank_str(&self.content, "description")
    }
}

/// Returns the trimmed string value of `key`, or `None` when it is missing,
/// not a string, or blank.
pub(crate) fn non_blank_str<'a>(node: &'a Value, key: &str) -> Option<&'a str> {
    node.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// The property names listed by a `required` keyword, in declaration order.
///
/// Duplicates and names with no matching property are kept as-is; it is up
/// to the consumer to treat them as no-ops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredNames(Vec<String>);

impl RequiredNames {
    /// Reads the value of a `required` keyword located at `pointer`.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::MalformedSchema` if the node is not an array, or
    /// if any entry is not a string. The pointer names the offending value.
    pub fn from_node(node: &Value, pointer: &JsonPointer) -> Result<Self, RuleError> {
        let Some(entries) = node.as_array() else {
            return Err(RuleError::malformed(
                pointer.clone(),
                format!(
                    "\"required\" must be an array of strings, found {}",
                    json_type_name(node)
                ),
            ));
        };
        let mut names: Vec<String> = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let Some(name) = entry.as_str() else {
                return Err(RuleError::malformed(
                    pointer.index(index),
                    format!("expected a property name string, found {}", json_type_name(entry)),
                ));
            };
            names.push(name.to_string());
        }
        Ok(Self(names))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for RequiredNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// JSON type name of a value, as used in error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
