use crate::error::RuleError;
use crate::model::GeneratedClass;
use crate::rules::KeywordRule;
use crate::schema::{Schema, json_type_name};
use serde_json::{Map, Value};
use tracing::debug;

/// An ordered sequence of keyword rules.
///
/// Each rule runs only if its keyword is present in the schema, in the
/// order the rules were added (not the order of keywords in the document).
#[derive(Default)]
pub struct RulePipeline {
    rules: Vec<Box<dyn KeywordRule>>,
}

impl RulePipeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rule(mut self, rule: impl KeywordRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Keywords handled by this pipeline, in application order.
    pub fn keywords(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.keyword())
    }

    /// Runs every rule whose keyword `schema` declares against `class`.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::MalformedSchema` if `schema` is not an object, or
    /// the first error returned by a rule.
    pub fn apply(
        &self,
        node_name: &str,
        mut class: GeneratedClass,
        schema: &Schema,
    ) -> Result<GeneratedClass, RuleError> {
        let keywords: &Map<String, Value> = schema.keywords().ok_or_else(|| {
            RuleError::malformed(
                schema.pointer().clone(),
                format!(
                    "schema must be an object, found {}",
                    json_type_name(schema.content())
                ),
            )
        })?;
        for rule in &self.rules {
            let Some(node) = keywords.get(rule.keyword()) else {
                continue;
            };
            debug!(keyword = rule.keyword(), node = node_name, "applying rule");
            class = rule.apply(node_name, node, class, schema)?;
        }
        Ok(class)
    }

    /// Creates a class named `class_name`, documented with the schema's
    /// description, and runs the pipeline on it.
    ///
    /// # Errors
    ///
    /// See [`RulePipeline::apply`].
    pub fn generate(&self, class_name: &str, schema: &Schema) -> Result<GeneratedClass, RuleError> {
        let mut class: GeneratedClass = GeneratedClass::new(class_name);
        if let Some(description) = schema.description() {
            class.doc_mut().append(description);
        }
        self.apply(class_name, class, schema)
    }
}
