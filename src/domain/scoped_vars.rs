use crate::domain::model::{FieldValue, Labels};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SERIES_VAR: &str = "__series";
pub const FIELD_VAR: &str = "__field";
pub const VALUE_VAR: &str = "__value";

/// A named substitution variable: `text` is the human label, `value` what templates see.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScopedVar {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

impl ScopedVar {
    pub fn new(text: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            text: text.into(),
            value,
        }
    }
}

pub type ScopedVars = BTreeMap<String, ScopedVar>;

/// Key/value pairs decoded from an exemplar annotation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Exemplar(BTreeMap<String, String>);

impl Exemplar {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: String, value: String) {
        self.0.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesVars {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub labels: Labels,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FieldVars {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowValueVars {
    pub raw: FieldValue,
    pub numeric: f64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exemplar: Option<Exemplar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison_exemplar: Option<Exemplar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationValueVars {
    pub raw: f64,
    pub numeric: f64,
    pub text: String,
    pub calculation_name: String,
}

/// The `__value` entry: a single row's cell, or a reduced value over the whole series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ValueVars {
    Row(RowValueVars),
    Calculation(CalculationValueVars),
}

impl ValueVars {
    pub fn text(&self) -> &str {
        match self {
            ValueVars::Row(row) => &row.text,
            ValueVars::Calculation(calc) => &calc.text,
        }
    }
}

/// Typed substitution context for field links.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataLinkScopedVars {
    pub series: Option<SeriesVars>,
    pub field: Option<FieldVars>,
    pub value: Option<ValueVars>,
}

impl DataLinkScopedVars {
    pub fn is_empty(&self) -> bool {
        self.series.is_none() && self.field.is_none() && self.value.is_none()
    }

    /// Flattens the typed entries into the generic map handed to a renderer.
    pub fn to_scoped_vars(&self) -> Result<ScopedVars> {
        let mut vars = ScopedVars::new();

        if let Some(series) = &self.series {
            vars.insert(
                SERIES_VAR.to_string(),
                ScopedVar::new("Series", serde_json::to_value(series)?),
            );
        }
        if let Some(field) = &self.field {
            vars.insert(
                FIELD_VAR.to_string(),
                ScopedVar::new("Field", serde_json::to_value(field)?),
            );
        }
        if let Some(value) = &self.value {
            vars.insert(
                VALUE_VAR.to_string(),
                ScopedVar::new("Value", serde_json::to_value(value)?),
            );
        }

        Ok(vars)
    }
}
