//! In-memory model of a generated class, prior to source emission.
//!
//! Fields and methods are kept in two independent ordered collections.
//! Nothing links a field to "its" accessors: rules that need that
//! correlation compute accessor names and match methods by name.

use serde::Serialize;

/// A documentation block attached to a generated member.
///
/// Text is appended verbatim; appending the same text twice produces it
/// twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DocComment {
    text: String,
}

impl DocComment {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn append(&mut self, text: &str) {
        self.text.push_str(text);
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of non-overlapping occurrences of `needle` in the text.
    #[must_use]
    pub fn occurrences(&self, needle: &str) -> usize {
        if needle.is_empty() {
            return 0;
        }
        self.text.matches(needle).count()
    }
}

/// The declared type of a generated field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "camelCase")]
pub enum FieldType {
    String,
    Boolean,
    Integer,
    Number,
    /// A nested generated class, by name.
    Object(String),
    Array(Box<FieldType>),
    /// Untyped JSON value.
    Any,
}

impl FieldType {
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean)
    }
}

/// Metadata attached to a generated field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "annotation", rename_all = "camelCase")]
pub enum Annotation {
    /// Nullability constraint: the value must be present.
    NotNull,
    /// API-description metadata for the field.
    ApiModelProperty {
        required: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    /// Any other annotation, by name.
    Named { name: String },
}

/// A field of a generated class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedField {
    name: String,
    field_type: FieldType,
    doc: DocComment,
    annotations: Vec<Annotation>,
}

impl GeneratedField {
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            doc: DocComment::default(),
            annotations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_doc(mut self, doc: DocComment) -> Self {
        self.doc = doc;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn field_type(&self) -> &FieldType {
        &self.field_type
    }

    #[must_use]
    pub fn doc(&self) -> &DocComment {
        &self.doc
    }

    pub fn doc_mut(&mut self) -> &mut DocComment {
        &mut self.doc
    }

    /// Annotations in the order they were attached.
    #[must_use]
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn annotations_mut(&mut self) -> &mut Vec<Annotation> {
        &mut self.annotations
    }

    pub fn annotate(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    #[must_use]
    pub fn has_annotation(&self, annotation: &Annotation) -> bool {
        self.annotations.contains(annotation)
    }
}

/// A parameter of a generated method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    pub name: String,
    pub param_type: FieldType,
}

/// A method of a generated class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedMethod {
    name: String,
    params: Vec<Param>,
    #[serde(skip_serializing_if = "Option::is_none")]
    returns: Option<FieldType>,
    doc: DocComment,
}

impl GeneratedMethod {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            returns: None,
            doc: DocComment::default(),
        }
    }

    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, param_type: FieldType) -> Self {
        self.params.push(Param {
            name: name.into(),
            param_type,
        });
        self
    }

    #[must_use]
    pub fn with_returns(mut self, returns: FieldType) -> Self {
        self.returns = Some(returns);
        self
    }

    #[must_use]
    pub fn with_doc(mut self, doc: DocComment) -> Self {
        self.doc = doc;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    #[must_use]
    pub fn returns(&self) -> Option<&FieldType> {
        self.returns.as_ref()
    }

    #[must_use]
    pub fn doc(&self) -> &DocComment {
        &self.doc
    }

    pub fn doc_mut(&mut self) -> &mut DocComment {
        &mut self.doc
    }
}

/// A generated class: a name, a doc block, and ordered fields and methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedClass {
    name: String,
    doc: DocComment,
    fields: Vec<GeneratedField>,
    methods: Vec<GeneratedMethod>,
}

impl GeneratedClass {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: DocComment::default(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn doc(&self) -> &DocComment {
        &self.doc
    }

    pub fn doc_mut(&mut self) -> &mut DocComment {
        &mut self.doc
    }

    #[must_use]
    pub fn fields(&self) -> &[GeneratedField] {
        &self.fields
    }

    #[must_use]
    pub fn methods(&self) -> &[GeneratedMethod] {
        &self.methods
    }

    pub fn methods_mut(&mut self) -> impl Iterator<Item = &mut GeneratedMethod> {
        self.methods.iter_mut()
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&GeneratedField> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut GeneratedField> {
        self.fields.iter_mut().find(|field| field.name == name)
    }

    /// All methods with the given name, in declaration order (overloads
    /// share a name).
    pub fn methods_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a GeneratedMethod> {
        self.methods.iter().filter(move |method| method.name == name)
    }

    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn add_field(&mut self, field: GeneratedField) {
        self.fields.push(field);
    }

    pub fn add_method(&mut self, method: GeneratedMethod) {
        self.methods.push(method);
    }
}
