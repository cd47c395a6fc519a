//! Cross-cutting annotation appliers.
//!
//! Rules call the injected applier unconditionally; whether anything is
//! recorded depends on which applier was injected, not on the rule.

use crate::model::{Annotation, GeneratedField};
use crate::settings::GenerateSettings;
use std::sync::Arc;

/// Records "required" in API-description metadata on a field.
pub trait AnnotationApplier: Send + Sync {
    fn mark_required(&self, field: &mut GeneratedField, required: bool);
}

/// Sets `required` on the field's `ApiModelProperty` annotation, adding the
/// annotation if the field does not carry one yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiModelAnnotationApplier;

impl AnnotationApplier for ApiModelAnnotationApplier {
    fn mark_required(&self, field: &mut GeneratedField, required: bool) {
        for annotation in field.annotations_mut() {
            if let Annotation::ApiModelProperty { required: flag, .. } = annotation {
                *flag = required;
                return;
            }
        }
        field.annotate(Annotation::ApiModelProperty {
            required,
            description: None,
        });
    }
}

/// Used when API-description metadata is not generated.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAnnotationApplier;

impl AnnotationApplier for NoopAnnotationApplier {
    fn mark_required(&self, _field: &mut GeneratedField, _required: bool) {}
}

/// Picks the applier matching `include_api_model_annotations`.
#[must_use]
pub fn annotation_applier(settings: &GenerateSettings) -> Arc<dyn AnnotationApplier> {
    if settings.include_api_model_annotations {
        Arc::new(ApiModelAnnotationApplier)
    } else {
        Arc::new(NoopAnnotationApplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldType;

    #[test]
    fn api_model_applier_adds_annotation() {
        let mut field: GeneratedField = GeneratedField::new("name", FieldType::String);
        ApiModelAnnotationApplier.mark_required(&mut field, true);
        assert_eq!(
            &[Annotation::ApiModelProperty {
                required: true,
                description: None
            }],
            field.annotations()
        );
    }

    #[test]
    fn api_model_applier_updates_existing_annotation_in_place() {
        let mut field: GeneratedField = GeneratedField::new("name", FieldType::String);
        field.annotate(Annotation::Named {
            name: "JsonProperty".to_string(),
        });
        field.annotate(Annotation::ApiModelProperty {
            required: false,
            description: Some("The name.".to_string()),
        });
        ApiModelAnnotationApplier.mark_required(&mut field, true);
        ApiModelAnnotationApplier.mark_required(&mut field, true);
        assert_eq!(
            &[
                Annotation::Named {
                    name: "JsonProperty".to_string()
                },
                Annotation::ApiModelProperty {
                    required: true,
                    description: Some("The name.".to_string()),
                },
            ],
            field.annotations()
        );
    }

    #[test]
    fn noop_applier_leaves_field_untouched() {
        let mut field: GeneratedField = GeneratedField::new("name", FieldType::String);
        let before: GeneratedField = field.clone();
        NoopAnnotationApplier.mark_required(&mut field, true);
        assert_eq!(before, field);
    }

    #[test]
    fn applier_follows_settings() {
        let mut field: GeneratedField = GeneratedField::new("name", FieldType::String);
        let disabled: GenerateSettings = GenerateSettings::default();
        annotation_applier(&disabled).mark_required(&mut field, true);
        assert!(field.annotations().is_empty());

        let enabled: GenerateSettings = GenerateSettings {
            include_api_model_annotations: true,
            ..GenerateSettings::default()
        };
        annotation_applier(&enabled).mark_required(&mut field, true);
        assert_eq!(1, field.annotations().len());
    }
}
