//! The `properties` keyword rule: one field plus a getter and a setter per
//! declared property.

use crate::error::RuleError;
use crate::model::{Annotation, DocComment, FieldType, GeneratedClass, GeneratedField, GeneratedMethod};
use crate::naming::NameResolver;
use crate::rules::KeywordRule;
use crate::schema::{Schema, json_type_name, non_blank_str};
use crate::settings::GenerateSettings;
use heck::ToUpperCamelCase;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, trace};

/// Generates fields and accessors for every declared property.
///
/// A property whose field identifier is already taken in the class is
/// skipped, so earlier rules win.
pub struct PropertiesRule {
    settings: Arc<GenerateSettings>,
    names: Arc<dyn NameResolver>,
}

impl PropertiesRule {
    #[must_use]
    pub fn new(settings: Arc<GenerateSettings>, names: Arc<dyn NameResolver>) -> Self {
        Self { settings, names }
    }

    fn add_property(&self, class: &mut GeneratedClass, name: &str, property_schema: &Value) {
        let field_name: String = self.names.field_name(name, Some(property_schema));
        if class.has_field(&field_name) {
            debug!(property = name, field = %field_name, "field already generated, skipping property");
            return;
        }

        let field_type: FieldType = field_type_for(name, property_schema);
        let doc: DocComment = property_doc(property_schema);
        let getter: String = self
            .names
            .getter_name(name, &field_type, Some(property_schema));
        let setter: String = self.names.setter_name(name, Some(property_schema));

        let mut field: GeneratedField =
            GeneratedField::new(field_name.clone(), field_type.clone()).with_doc(doc.clone());
        if self.settings.include_api_model_annotations {
            field.annotate(Annotation::ApiModelProperty {
                required: false,
                description: non_blank_str(property_schema, "description").map(str::to_string),
            });
        }
        class.add_field(field);
        class.add_method(
            GeneratedMethod::new(getter)
                .with_returns(field_type.clone())
                .with_doc(doc.clone()),
        );
        class.add_method(
            GeneratedMethod::new(setter)
                .with_param(field_name.clone(), field_type)
                .with_doc(doc),
        );
        trace!(property = name, field = %field_name, "generated field and accessors");
    }
}

impl KeywordRule for PropertiesRule {
    fn keyword(&self) -> &'static str {
        "properties"
    }

    fn apply(
        &self,
        node_name: &str,
        node: &Value,
        mut class: GeneratedClass,
        schema: &Schema,
    ) -> Result<GeneratedClass, RuleError> {
        let Some(properties) = node.as_object() else {
            return Err(RuleError::malformed(
                schema.pointer().key(self.keyword()),
                format!(
                    "\"properties\" must be an object, found {}",
                    json_type_name(node)
                ),
            ));
        };
        debug!(node = node_name, count = properties.len(), "generating properties");
        for (name, property_schema) in properties {
            self.add_property(&mut class, name, property_schema);
        }
        Ok(class)
    }
}

/// Title and description, separated by a blank line when both are present.
fn property_doc(property_schema: &Value) -> DocComment {
    let parts: Vec<&str> = [
        non_blank_str(property_schema, "title"),
        non_blank_str(property_schema, "description"),
    ]
    .into_iter()
    .flatten()
    .collect();
    DocComment::new(parts.join("\n\n"))
}

/// Class name for a nested object: its title if present, else the property
/// name, in `UpperCamel`.
fn class_name_for(property_name: &str, property_schema: &Value) -> String {
    let source: &str = non_blank_str(property_schema, "title").unwrap_or(property_name);
    let name: String = source.to_upper_camel_case();
    if name.is_empty() {
        "Anonymous".to_string()
    } else {
        name
    }
}

/// Maps a property declaration to a field type. Unknown or missing `type`
/// is `Any`; arrays take their element type from `items`.
fn field_type_for(property_name: &str, property_schema: &Value) -> FieldType {
    match property_schema.get("type").and_then(Value::as_str) {
        Some("string") => FieldType::String,
        Some("boolean") => FieldType::Boolean,
        Some("integer") => FieldType::Integer,
        Some("number") => FieldType::Number,
        Some("object") => FieldType::Object(class_name_for(property_name, property_schema)),
        Some("array") => {
            let element: FieldType = property_schema
                .get("items")
                .map_or(FieldType::Any, |items| field_type_for(property_name, items));
            FieldType::Array(Box::new(element))
        }
        _ => FieldType::Any,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::BeanNameResolver;
    use serde_json::json;

    fn rule(include_api_model_annotations: bool) -> PropertiesRule {
        PropertiesRule::new(
            Arc::new(GenerateSettings {
                include_api_model_annotations,
                ..GenerateSettings::default()
            }),
            Arc::new(BeanNameResolver),
        )
    }

    fn generate(rule: &PropertiesRule, schema: &Value) -> GeneratedClass {
        let schema: Schema = Schema::new(schema.clone());
        let node: &Value = schema.content().get("properties").expect("properties present");
        rule.apply("Widget", node, GeneratedClass::new("Widget"), &schema)
            .expect("properties is an object")
    }

    #[test]
    fn generates_field_getter_and_setter_in_declaration_order() {
        let class: GeneratedClass = generate(
            &rule(false),
            &json!({"properties": {
                "foo-bar": {"type": "string"},
                "active": {"type": "boolean"}
            }}),
        );
        let fields: Vec<&str> = class.fields().iter().map(GeneratedField::name).collect();
        assert_eq!(vec!["fooBar", "active"], fields);
        let methods: Vec<&str> = class.methods().iter().map(GeneratedMethod::name).collect();
        assert_eq!(vec!["getFooBar", "setFooBar", "isActive", "setActive"], methods);
        let setter: &GeneratedMethod = &class.methods()[1];
        assert_eq!("fooBar", setter.params()[0].name);
        assert_eq!(Some(&FieldType::Boolean), class.methods()[2].returns());
    }

    #[test]
    fn maps_json_types() {
        let class: GeneratedClass = generate(
            &rule(false),
            &json!({"properties": {
                "s": {"type": "string"},
                "i": {"type": "integer"},
                "n": {"type": "number"},
                "home-address": {"type": "object"},
                "owner": {"type": "object", "title": "person record"},
                "tags": {"type": "array", "items": {"type": "string"}},
                "rows": {"type": "array"},
                "anything": {}
            }}),
        );
        let types: Vec<&FieldType> = class.fields().iter().map(GeneratedField::field_type).collect();
        assert_eq!(
            vec![
                &FieldType::String,
                &FieldType::Integer,
                &FieldType::Number,
                &FieldType::Object("HomeAddress".to_string()),
                &FieldType::Object("PersonRecord".to_string()),
                &FieldType::Array(Box::new(FieldType::String)),
                &FieldType::Array(Box::new(FieldType::Any)),
                &FieldType::Any,
            ],
            types
        );
    }

    #[test]
    fn doc_joins_title_and_description() {
        let class: GeneratedClass = generate(
            &rule(false),
            &json!({"properties": {
                "both": {"title": "Both", "description": "Has both."},
                "title_only": {"title": "Title"},
                "neither": {"description": "   "}
            }}),
        );
        let docs: Vec<&str> = class.fields().iter().map(|f| f.doc().text()).collect();
        assert_eq!(vec!["Both\n\nHas both.", "Title", ""], docs);
        assert_eq!("Both\n\nHas both.", class.methods()[0].doc().text());
    }

    #[test]
    fn api_model_annotation_carries_description() {
        let class: GeneratedClass = generate(
            &rule(true),
            &json!({"properties": {"name": {"type": "string", "description": "The name."}}}),
        );
        assert_eq!(
            &[Annotation::ApiModelProperty {
                required: false,
                description: Some("The name.".to_string())
            }],
            class.field("name").expect("field exists").annotations()
        );
    }

    #[test]
    fn existing_field_is_not_regenerated() {
        let mut class: GeneratedClass = GeneratedClass::new("Widget");
        class.add_field(GeneratedField::new("name", FieldType::Any));
        let schema: Schema = Schema::new(json!({"properties": {"name": {"type": "string"}}}));
        let node: &Value = schema.content().get("properties").expect("properties present");
        let class: GeneratedClass = rule(false)
            .apply("Widget", node, class, &schema)
            .expect("properties is an object");
        assert_eq!(1, class.fields().len());
        assert_eq!(&FieldType::Any, class.fields()[0].field_type());
        assert!(class.methods().is_empty());
    }

    #[test]
    fn non_object_properties_is_malformed() {
        let schema: Schema = Schema::new(json!({"properties": ["a"]}));
        let error: RuleError = rule(false)
            .apply("Widget", &json!(["a"]), GeneratedClass::new("Widget"), &schema)
            .expect_err("array is not a properties map");
        assert!(matches!(
            error,
            RuleError::MalformedSchema { ref pointer, .. } if pointer == "/properties"
        ));
    }
}
