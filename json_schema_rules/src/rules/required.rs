//! The `required` keyword rule.
//!
//! See <http://tools.ietf.org/html/draft-fge-json-schema-validation-00#section-5.4.3>.

use crate::annotator::AnnotationApplier;
use crate::error::RuleError;
use crate::model::{Annotation, GeneratedClass};
use crate::naming::NameResolver;
use crate::rules::KeywordRule;
use crate::schema::{RequiredNames, Schema};
use crate::settings::GenerateSettings;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, trace};

/// Appended to the doc block of every required field and its accessors.
pub const REQUIRED_COMMENT_TEXT: &str = "\n(Required)";

/// Marks the fields named by a `required` array, and the accessors of those
/// fields, as required.
///
/// Names that do not resolve to an existing field are skipped. Accessors are
/// found by matching method names against the computed getter and setter
/// names, so overloads sharing a name are all marked.
pub struct RequiredArrayRule {
    settings: Arc<GenerateSettings>,
    names: Arc<dyn NameResolver>,
    annotator: Arc<dyn AnnotationApplier>,
}

impl RequiredArrayRule {
    #[must_use]
    pub fn new(
        settings: Arc<GenerateSettings>,
        names: Arc<dyn NameResolver>,
        annotator: Arc<dyn AnnotationApplier>,
    ) -> Self {
        Self {
            settings,
            names,
            annotator,
        }
    }

    /// Applies an already-validated required list to `class`.
    ///
    /// `node_name` names the enclosing property or class and is only used
    /// for diagnostics.
    #[must_use]
    pub fn enforce(
        &self,
        node_name: &str,
        required: &RequiredNames,
        mut class: GeneratedClass,
        schema: &Schema,
    ) -> GeneratedClass {
        let _span = tracing::debug_span!("required", node = node_name, class = class.name())
            .entered();
        let mut accessor_names: HashSet<String> = HashSet::new();
        let mut fields_marked: usize = 0;

        for name in required.names() {
            let property_schema: Option<&Value> = schema.property(name);
            let field_name: String = self.names.field_name(name, property_schema);
            let Some(field) = class.field_mut(&field_name) else {
                debug!(property = name, field = %field_name, "no generated field for required property");
                continue;
            };

            field.doc_mut().append(REQUIRED_COMMENT_TEXT);
            if self.settings.include_nullability_annotations
                && !field.has_annotation(&Annotation::NotNull)
            {
                field.annotate(Annotation::NotNull);
            }
            self.annotator.mark_required(field, true);
            fields_marked += 1;
            trace!(property = name, field = %field_name, "marked field required");

            accessor_names.insert(
                self.names
                    .getter_name(name, field.field_type(), property_schema),
            );
            accessor_names.insert(self.names.setter_name(name, property_schema));
        }

        let mut methods_marked: usize = 0;
        for method in class.methods_mut() {
            if accessor_names.contains(method.name()) {
                method.doc_mut().append(REQUIRED_COMMENT_TEXT);
                methods_marked += 1;
                trace!(method = method.name(), "marked accessor required");
            }
        }

        debug!(
            required = required.len(),
            fields_marked, methods_marked, "applied required rule"
        );
        class
    }
}

impl KeywordRule for RequiredArrayRule {
    fn keyword(&self) -> &'static str {
        "required"
    }

    fn apply(
        &self,
        node_name: &str,
        node: &Value,
        class: GeneratedClass,
        schema: &Schema,
    ) -> Result<GeneratedClass, RuleError> {
        let required: RequiredNames =
            RequiredNames::from_node(node, &schema.pointer().key(self.keyword()))?;
        Ok(self.enforce(node_name, &required, class, schema))
    }
}
