//! Form Schema
//!
//! Drafts are typed per entity, but expose their fields by name through a
//! static schema so one editor component can render and validate any of them.

use crate::error::ValidationError;

/// Input widget for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Number,
    Date,
    Time,
    Checkbox,
    /// Fixed options as (value, label)
    Select(&'static [(&'static str, &'static str)]),
    /// One of the health tracker's pet names
    PetName,
}

/// One field of a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key used by `Draft::get` / `Draft::set` (the persisted camelCase name)
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

/// Raw value as bound to an input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn text(raw: impl Into<String>) -> Self {
        FieldValue::Text(raw.into())
    }

    /// Text content; flags render as "true"/"false"
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Flag(b) => b.to_string(),
        }
    }

    pub fn as_flag(&self) -> bool {
        match self {
            FieldValue::Flag(b) => *b,
            FieldValue::Text(s) => s == "true",
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Flag(_) => false,
        }
    }
}

/// Editable, loosely-filled copy of a record
pub trait Draft: Clone + Default + PartialEq + Send + Sync + 'static {
    /// Entity name used in validation errors
    const ENTITY: &'static str;

    fn schema() -> &'static [FieldSpec];

    fn get(&self, field: &str) -> FieldValue;

    /// Unknown field names are ignored
    fn set(&mut self, field: &str, value: FieldValue);

    /// Presence check over the schema's required fields
    fn check_required(&self) -> Result<(), ValidationError> {
        let missing: Vec<&'static str> = Self::schema()
            .iter()
            .filter(|spec| spec.required && self.get(spec.name).is_blank())
            .map(|spec| spec.label)
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields {
                entity: Self::ENTITY,
                fields: missing,
            })
        }
    }
}

/// Look up a field by name in a schema
pub fn field<'a>(schema: &'a [FieldSpec], name: &str) -> Option<&'a FieldSpec> {
    schema.iter().find(|spec| spec.name == name)
}
