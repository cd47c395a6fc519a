//! Keyword rules and the factory that wires their shared collaborators.

mod pipeline;
mod properties;
mod required;

pub use pipeline::RulePipeline;
pub use properties::PropertiesRule;
pub use required::{REQUIRED_COMMENT_TEXT, RequiredArrayRule};

use crate::annotator::{AnnotationApplier, annotation_applier};
use crate::error::RuleError;
use crate::model::GeneratedClass;
use crate::naming::{BeanNameResolver, NameResolver};
use crate::schema::Schema;
use crate::settings::GenerateSettings;
use serde_json::Value;
use std::sync::Arc;

/// A rule applied to the value of one schema keyword.
///
/// The class is moved in and handed back so rules can be chained. `node` is
/// the keyword's value; `schema` is the object schema that contains it.
pub trait KeywordRule: Send + Sync {
    /// The schema keyword this rule handles.
    fn keyword(&self) -> &'static str;

    /// # Errors
    ///
    /// Returns `RuleError::MalformedSchema` if `node` does not have the shape
    /// the keyword requires.
    fn apply(
        &self,
        node_name: &str,
        node: &Value,
        class: GeneratedClass,
        schema: &Schema,
    ) -> Result<GeneratedClass, RuleError>;
}

/// Builds rules that share one settings value, one name resolver and one
/// annotation applier.
///
/// Sharing the resolver keeps the names used to create fields and accessors
/// identical to the names later used to look them up.
#[derive(Clone)]
pub struct RuleFactory {
    settings: Arc<GenerateSettings>,
    names: Arc<dyn NameResolver>,
    annotator: Arc<dyn AnnotationApplier>,
}

impl RuleFactory {
    /// Bean-style naming, and the annotation applier selected by `settings`.
    #[must_use]
    pub fn new(settings: GenerateSettings) -> Self {
        let annotator: Arc<dyn AnnotationApplier> = annotation_applier(&settings);
        Self {
            settings: Arc::new(settings),
            names: Arc::new(BeanNameResolver),
            annotator,
        }
    }

    #[must_use]
    pub fn with_name_resolver(mut self, names: Arc<dyn NameResolver>) -> Self {
        self.names = names;
        self
    }

    #[must_use]
    pub fn with_annotation_applier(mut self, annotator: Arc<dyn AnnotationApplier>) -> Self {
        self.annotator = annotator;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &GenerateSettings {
        &self.settings
    }

    #[must_use]
    pub fn properties_rule(&self) -> PropertiesRule {
        PropertiesRule::new(Arc::clone(&self.settings), Arc::clone(&self.names))
    }

    #[must_use]
    pub fn required_array_rule(&self) -> RequiredArrayRule {
        RequiredArrayRule::new(
            Arc::clone(&self.settings),
            Arc::clone(&self.names),
            Arc::clone(&self.annotator),
        )
    }

    /// `properties` then `required`.
    #[must_use]
    pub fn pipeline(&self) -> RulePipeline {
        RulePipeline::new()
            .with_rule(self.properties_rule())
            .with_rule(self.required_array_rule())
    }
}

impl Default for RuleFactory {
    fn default() -> Self {
        Self::new(GenerateSettings::default())
    }
}
