mod templates;

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    TextArea,
    Date,
}

/// Catalog card icon, serialized by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Icon {
    Mail,
    AlertCircle,
    Stethoscope,
    Clipboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub optional: bool,
}

impl FieldSpec {
    const fn required(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind, optional: false }
    }

    const fn optional(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind, optional: true }
    }
}

/// Values collected for one form, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues(HashMap<String, String>);

impl FieldValues {
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Value for `name`, or the empty string when absent.
    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }

    /// Like [`FieldValues::get`], but an empty value reads as `N/A`.
    pub fn or_na(&self, name: &str) -> &str {
        match self.get(name) {
            "" => NOT_AVAILABLE,
            value => value,
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Template {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub fields: &'static [FieldSpec],
    #[serde(skip)]
    prompt: fn(&FieldValues) -> String,
}

impl Template {
    /// Builds the prompt for `values`. Pure; unknown keys are ignored.
    pub fn render(&self, values: &FieldValues) -> String {
        (self.prompt)(values)
    }

    /// Checks that every required field has a non-blank value.
    pub fn validate(&self, values: &FieldValues) -> Result<(), CatalogError> {
        let missing: Vec<String> = self
            .fields
            .iter()
            .filter(|f| !f.optional && values.get(f.name).trim().is_empty())
            .map(|f| f.name.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::MissingFields(missing))
        }
    }

    pub fn render_validated(&self, values: &FieldValues) -> Result<String, CatalogError> {
        self.validate(values)?;
        Ok(self.render(values))
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    templates: Vec<Template>,
}

impl Catalog {
    pub fn new(templates: impl IntoIterator<Item = Template>) -> Self {
        Self { templates: templates.into_iter().collect() }
    }

    pub fn builtin() -> Self {
        Self::new(templates::BUILTIN.iter().copied())
    }

    pub fn list(&self) -> &[Template] {
        &self.templates
    }

    pub fn find(&self, id: &str) -> Result<&Template, CatalogError> {
        self.templates
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| CatalogError::TemplateNotFound(id.to_string()))
    }
}
