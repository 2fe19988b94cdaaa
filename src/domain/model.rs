use crate::domain::scoped_vars::ScopedVars;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type Labels = BTreeMap<String, String>;

/// A single cell of a field. Time fields carry epoch milliseconds as `Number`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Time,
    Number,
    String,
    Boolean,
    #[default]
    Other,
}

/// A configured link template. Opaque to the suppliers, interpreted by the renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataLink {
    #[serde(default)]
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub target_blank: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldConfig {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub links: Vec<DataLink>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(default, rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub values: Vec<FieldValue>,
    #[serde(default)]
    pub config: FieldConfig,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: FieldType, values: Vec<FieldValue>) -> Self {
        Self {
            name: name.into(),
            field_type,
            values,
            config: FieldConfig::default(),
        }
    }

    pub fn value_at(&self, row: usize) -> Option<&FieldValue> {
        self.values.get(row)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataFrame {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub ref_id: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Per-row exemplar annotations, each formatted as `key:value;key:value`.
    #[serde(default)]
    pub exemplars: Option<Vec<Vec<String>>>,
}

impl DataFrame {
    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    /// The first field typed as time, if any.
    pub fn time_field(&self) -> Option<&Field> {
        self.fields.iter().find(|f| f.field_type == FieldType::Time)
    }
}

/// Read-only tabular view over a frame, as held by a displayed value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataFrameView {
    frame: DataFrame,
}

impl DataFrameView {
    pub fn new(frame: DataFrame) -> Self {
        Self { frame }
    }

    pub fn data_frame(&self) -> &DataFrame {
        &self.frame
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DisplayValue {
    pub numeric: f64,
    pub text: String,
}

/// A value as rendered by a panel, together with where it came from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldDisplay {
    /// Display name; for calculated values this is the reducer name ("Mean", "Max").
    pub name: String,
    pub field: FieldConfig,
    pub display: DisplayValue,
    pub view: Option<DataFrameView>,
    pub col_index: Option<usize>,
    /// Absent for calculated/summary values.
    pub row_index: Option<usize>,
}

impl FieldDisplay {
    pub fn has_links(&self) -> bool {
        !self.field.links.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PanelModel {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub links: Vec<DataLink>,
    #[serde(default)]
    pub scoped_vars: ScopedVars,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LinkTarget {
    #[serde(rename = "_blank")]
    Blank,
    #[default]
    #[serde(rename = "_self")]
    Current,
}

/// A resolved link, ready to be drawn by the UI.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LinkModel {
    pub href: String,
    pub title: String,
    pub target: LinkTarget,
}
