//! Apply JSON Schema keyword rules to generated class models.
//!
//! A [`RulePipeline`] runs keyword rules in order over a [`GeneratedClass`].
//! The `properties` rule creates fields and accessors; the `required` rule
//! then marks the required ones, documenting them with
//! [`REQUIRED_COMMENT_TEXT`] and attaching the annotations enabled in
//! [`GenerateSettings`].

mod annotator;
mod error;
mod json_pointer;
mod model;
mod naming;
mod rules;
mod schema;
mod settings;

pub use annotator::{
    AnnotationApplier, ApiModelAnnotationApplier, NoopAnnotationApplier, annotation_applier,
};
pub use error::RuleError;
pub use json_pointer::JsonPointer;
pub use model::{
    Annotation, DocComment, FieldType, GeneratedClass, GeneratedField, GeneratedMethod, Param,
};
pub use naming::{BeanNameResolver, FIELD_NAME_OVERRIDE_KEYWORD, NameResolver};
pub use rules::{
    KeywordRule, PropertiesRule, REQUIRED_COMMENT_TEXT, RequiredArrayRule, RuleFactory,
    RulePipeline,
};
pub use schema::{RequiredNames, Schema};
pub use settings::GenerateSettings;

use heck::ToUpperCamelCase;
use std::io::Write;
use std::path::Path;

/// Class name used when the root schema has no usable `title`.
pub const DEFAULT_CLASS_NAME: &str = "Root";

/// The root class name for a schema: its `title` in `UpperCamel`, or
/// [`DEFAULT_CLASS_NAME`].
#[must_use]
pub fn class_name_for_schema(schema: &Schema) -> String {
    schema
        .content()
        .get("title")
        .and_then(serde_json::Value::as_str)
        .map(str::to_upper_camel_case)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_CLASS_NAME.to_string())
}

/// Run the default pipeline over a JSON Schema string.
///
/// `class_name` overrides the name derived from the schema's `title`.
///
/// # Errors
///
/// Returns `RuleError` if the schema JSON is invalid, the root is not an
/// object, or a keyword has the wrong shape.
pub fn generate_class(
    schema_json: &str,
    class_name: Option<&str>,
    settings: &GenerateSettings,
) -> Result<GeneratedClass, RuleError> {
    let schema: Schema = Schema::from_json(schema_json)?;
    let class_name: String = class_name.map_or_else(|| class_name_for_schema(&schema), str::to_string);
    RuleFactory::new(settings.clone())
        .pipeline()
        .generate(&class_name, &schema)
}

/// Run the default pipeline over a JSON Schema string and write the class
/// model to `writer` as pretty-printed JSON.
///
/// The writer can be any type implementing `Write`, such as `File`,
/// `Vec<u8>`, or `Stdout`.
///
/// # Errors
///
/// Returns `RuleError` if generation fails or writing to the writer fails.
pub fn generate_to_writer<W: Write>(
    schema_json: &str,
    class_name: Option<&str>,
    writer: &mut W,
    settings: &GenerateSettings,
) -> Result<(), RuleError> {
    let class: GeneratedClass = generate_class(schema_json, class_name, settings)?;
    serde_json::to_writer_pretty(&mut *writer, &class)?;
    writeln!(writer)?;
    Ok(())
}

/// Run the default pipeline over a JSON Schema file and write the class
/// model to an output file.
///
/// # Errors
///
/// Returns `RuleError` if reading the input file fails, generation fails,
/// or writing the output file fails.
pub fn generate_from_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    settings: &GenerateSettings,
) -> Result<(), RuleError> {
    let schema_json: String = std::fs::read_to_string(input_path)?;
    let mut output_file: std::fs::File = std::fs::File::create(output_path)?;
    generate_to_writer(&schema_json, None, &mut output_file, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn class_name_from_title() {
        let schema: Schema = Schema::new(json!({"title": "the widget_settings schema"}));
        assert_eq!("TheWidgetSettingsSchema", class_name_for_schema(&schema));
    }

    #[test]
    fn class_name_defaults_to_root() {
        assert_eq!("Root", class_name_for_schema(&Schema::new(json!({}))));
        assert_eq!(
            "Root",
            class_name_for_schema(&Schema::new(json!({"title": " -- "})))
        );
    }

    #[test]
    fn generate_class_uses_explicit_name() {
        let class: GeneratedClass = generate_class(
            r#"{"type": "object", "title": "Ignored"}"#,
            Some("Explicit"),
            &GenerateSettings::default(),
        )
        .expect("valid schema");
        assert_eq!("Explicit", class.name());
    }

    #[test]
    fn generate_class_rejects_invalid_json() {
        let result: Result<GeneratedClass, RuleError> =
            generate_class("{", None, &GenerateSettings::default());
        assert!(matches!(result, Err(RuleError::Json(_))));
    }

    #[test]
    fn generate_to_writer_emits_class_model_json() {
        let schema_json: &str = r#"{
            "type": "object",
            "title": "Record",
            "required": ["id"],
            "properties": {
                "id": {"type": "string", "description": "Unique identifier."},
                "active": {"type": "boolean"}
            }
        }"#;
        let settings: GenerateSettings = GenerateSettings {
            include_nullability_annotations: true,
            ..GenerateSettings::default()
        };

        let mut output: Vec<u8> = Vec::new();
        generate_to_writer(schema_json, None, &mut output, &settings)
            .expect("generate_to_writer should succeed");

        let actual: serde_json::Value =
            serde_json::from_slice(&output).expect("output should be valid JSON");
        let expected: serde_json::Value = json!({
            "name": "Record",
            "doc": "",
            "fields": [
                {
                    "name": "id",
                    "field_type": {"kind": "string"},
                    "doc": "Unique identifier.\n(Required)",
                    "annotations": [{"annotation": "notNull"}]
                },
                {
                    "name": "active",
                    "field_type": {"kind": "boolean"},
                    "doc": "",
                    "annotations": []
                }
            ],
            "methods": [
                {
                    "name": "getId",
                    "params": [],
                    "returns": {"kind": "string"},
                    "doc": "Unique identifier.\n(Required)"
                },
                {
                    "name": "setId",
                    "params": [{"name": "id", "param_type": {"kind": "string"}}],
                    "doc": "Unique identifier.\n(Required)"
                },
                {
                    "name": "isActive",
                    "params": [],
                    "returns": {"kind": "boolean"},
                    "doc": ""
                },
                {
                    "name": "setActive",
                    "params": [{"name": "active", "param_type": {"kind": "boolean"}}],
                    "doc": ""
                }
            ]
        });
        assert_eq!(expected, actual);
        assert!(output.ends_with(b"}\n"));
    }

    #[test]
    fn generate_from_file_round_trip() {
        let dir: tempfile::TempDir = tempfile::tempdir().expect("temp dir");
        let input: std::path::PathBuf = dir.path().join("schema.json");
        let output: std::path::PathBuf = dir.path().join("class.json");
        std::fs::write(
            &input,
            r#"{"title": "Thing", "required": ["a"], "properties": {"a": {"type": "integer"}}}"#,
        )
        .expect("write schema");

        generate_from_file(&input, &output, &GenerateSettings::default())
            .expect("generation succeeds");

        let class: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).expect("read output"))
                .expect("valid JSON");
        assert_eq!("Thing", class["name"]);
        assert_eq!("\n(Required)", class["fields"][0]["doc"]);
    }
}
