//! Declarative settings-form model.
//!
//! A repository's settings screen is a [`SettingsForm`]: a list of titled
//! sections, each holding fields bound to dotted paths inside the
//! repository's attribute document. Extensions contribute sections as
//! values; the host renderer owns layout, the host save pipeline owns
//! persistence. [`SettingsForm::load`] and [`SettingsForm::submit`] are the
//! bind/unbind halves of that pipeline's contract.

use serde_json::{Map, Value};
use url::Url;

use crate::errors::{Error, Result};
use crate::records::RepositoryConfig;

/// Dotted path into a repository configuration's attribute document, eg
/// `cargo.allowedRegistries`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributePath(String);

impl AttributePath {
    pub fn new(path: &str) -> Self {
        Self(path.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Read the value at this path, if present.
    pub fn get<'a>(&self, attributes: &'a Value) -> Option<&'a Value> {
        let mut current = attributes;
        for segment in self.0.split('.') {
            current = current.get(segment)?;
        }
        Some(current)
    }

    /// Write a value at this path, creating intermediate objects as needed.
    /// Fails when a non-object value already occupies an intermediate
    /// segment.
    pub fn set(&self, attributes: &mut Value, value: Value) -> Result<()> {
        let mut segments = self.0.split('.').peekable();
        let mut current = attributes;
        while let Some(segment) = segments.next() {
            let object = match current.as_object_mut() {
                Some(object) => object,
                None => {
                    return Err(Error::AttributePathConflict {
                        path: self.0.clone(),
                        segment: segment.to_string(),
                    })
                }
            };
            if segments.peek().is_none() {
                object.insert(segment.to_string(), value);
                return Ok(());
            }
            current = object
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
        }
        Ok(())
    }
}

impl From<&str> for AttributePath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// The generic field types the host form engine offers. `Url` values are
/// checked for well-formedness at submit time; extensions add no
/// validation of their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Url,
    Checkbox,
    Select,
}

/// One input field, bound to an attribute path.
#[derive(Clone, Debug)]
pub struct FormField {
    pub kind: FieldKind,
    pub bind: AttributePath,
    pub item_id: String,
    pub label: String,
    pub help_text: Option<String>,
    pub empty_text: Option<String>,
    pub options: Vec<String>,
    pub value: Option<Value>,
    pub required: bool,
}

impl FormField {
    pub fn new(kind: FieldKind, bind: &str, item_id: &str, label: &str) -> Self {
        Self {
            kind,
            bind: AttributePath::new(bind),
            item_id: item_id.to_string(),
            label: label.to_string(),
            help_text: None,
            empty_text: None,
            options: Vec::new(),
            value: None,
            required: false,
        }
    }

    pub fn text(bind: &str, item_id: &str, label: &str) -> Self {
        Self::new(FieldKind::Text, bind, item_id, label)
    }

    pub fn url(bind: &str, item_id: &str, label: &str) -> Self {
        Self::new(FieldKind::Url, bind, item_id, label)
    }

    pub fn checkbox(bind: &str, item_id: &str, label: &str) -> Self {
        Self::new(FieldKind::Checkbox, bind, item_id, label)
    }

    pub fn select(bind: &str, item_id: &str, label: &str) -> Self {
        Self::new(FieldKind::Select, bind, item_id, label)
    }

    pub fn help_text(mut self, text: &str) -> Self {
        self.help_text = Some(text.to_string());
        self
    }

    pub fn empty_text(mut self, text: &str) -> Self {
        self.empty_text = Some(text.to_string());
        self
    }

    pub fn options(mut self, options: &[&str]) -> Self {
        self.options = options.iter().map(|o| o.to_string()).collect();
        self
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn validate(&self) -> Result<()> {
        let value = match &self.value {
            Some(value) => value,
            None if self.required => {
                return Err(Error::MissingFieldValue(self.item_id.clone()))
            }
            None => return Ok(()),
        };
        match self.kind {
            FieldKind::Url => {
                let s = value
                    .as_str()
                    .ok_or_else(|| Error::FieldValueType(self.item_id.clone()))?;
                Url::parse(s).map_err(|source| Error::InvalidFieldUrl {
                    field: self.item_id.clone(),
                    source,
                })?;
                Ok(())
            }
            FieldKind::Text | FieldKind::Select => value
                .as_str()
                .map(|_| ())
                .ok_or_else(|| Error::FieldValueType(self.item_id.clone())),
            FieldKind::Checkbox => value
                .as_bool()
                .map(|_| ())
                .ok_or_else(|| Error::FieldValueType(self.item_id.clone())),
        }
    }
}

/// A titled group of fields.
#[derive(Clone, Debug)]
pub struct FormSection {
    pub title: String,
    pub fields: Vec<FormField>,
}

impl FormSection {
    pub fn new(title: &str, fields: Vec<FormField>) -> Self {
        Self {
            title: title.to_string(),
            fields,
        }
    }
}

/// A complete repository settings form.
#[derive(Clone, Debug)]
pub struct SettingsForm {
    sections: Vec<FormSection>,
}

impl SettingsForm {
    pub fn new(sections: Vec<FormSection>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[FormSection] {
        &self.sections
    }

    pub fn fields(&self) -> impl Iterator<Item = &FormField> {
        self.sections.iter().flat_map(|s| s.fields.iter())
    }

    fn fields_mut(&mut self) -> impl Iterator<Item = &mut FormField> {
        self.sections.iter_mut().flat_map(|s| s.fields.iter_mut())
    }

    pub fn field(&self, item_id: &str) -> Option<&FormField> {
        self.fields().find(|f| f.item_id == item_id)
    }

    pub fn field_mut(&mut self, item_id: &str) -> Option<&mut FormField> {
        self.fields_mut().find(|f| f.item_id == item_id)
    }

    /// Populate field values from the bound attribute paths. Fields whose
    /// path is absent keep their declared default.
    pub fn load(&mut self, config: &RepositoryConfig) {
        for field in self.fields_mut() {
            if let Some(value) = field.bind.get(&config.attributes) {
                field.value = Some(value.clone());
            }
        }
    }

    /// Validate every field, then write every field value back to its
    /// bound attribute path. The document is untouched when validation
    /// fails.
    pub fn submit(&self, config: &mut RepositoryConfig) -> Result<()> {
        for field in self.fields() {
            field.validate()?;
        }
        for field in self.fields() {
            if let Some(value) = &field.value {
                field.bind.set(&mut config.attributes, value.clone())?;
            }
        }
        Ok(())
    }
}
