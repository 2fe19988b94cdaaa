use crate::adapters::template_renderer::TemplateLinkRenderer;
use crate::domain::model::{
    DataFrame, DataFrameView, DataLink, DisplayValue, FieldConfig, FieldDisplay, PanelModel,
};
use crate::utils::error::{LinkError, Result};
use crate::utils::validation::{
    validate_index, validate_non_empty_string, validate_required_field, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A self-contained document describing a panel, its frames and one displayed value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreviewConfig {
    #[serde(default)]
    pub renderer: RendererConfig,
    pub panel: Option<PanelModel>,
    #[serde(default)]
    pub frames: Vec<DataFrame>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RendererConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Index into `frames` of the frame the value was read from.
    pub frame: usize,
    pub compare_frame: Option<usize>,
    pub col: Option<usize>,
    pub row: Option<usize>,
    #[serde(default)]
    pub name: String,
    pub numeric: f64,
    #[serde(default)]
    pub text: String,
    /// Links for calculated values with no column; ignored when `col` is set.
    #[serde(default)]
    pub links: Vec<DataLink>,
}

impl PreviewConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LinkError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LinkError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${env:NAME}`; link placeholders like `${__value.raw}` are left alone.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{env:([A-Za-z_][A-Za-z0-9_]*)\}").map_err(|e| {
            LinkError::ConfigParseError {
                message: format!("Invalid env pattern: {}", e),
            }
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| caps[0].to_string())
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        if self.panel.is_none() && self.display.is_none() {
            return Err(LinkError::MissingConfigError {
                field: "panel or display".to_string(),
            });
        }

        if let Some(base_url) = &self.renderer.base_url {
            validate_url("renderer.base_url", base_url)?;
        }

        if let Some(panel) = &self.panel {
            validate_links("panel.links", &panel.links)?;
        }

        for (i, frame) in self.frames.iter().enumerate() {
            for (j, field) in frame.fields.iter().enumerate() {
                validate_links(&format!("frames[{}].fields[{}].links", i, j), &field.config.links)?;
            }
        }

        if let Some(display) = &self.display {
            validate_index("display.frame", display.frame, self.frames.len())?;
            if let Some(compare) = display.compare_frame {
                validate_index("display.compare_frame", compare, self.frames.len())?;
            }
            if let Some(col) = display.col {
                validate_index("display.col", col, self.frames[display.frame].fields.len())?;
            }
            validate_links("display.links", &display.links)?;
        }

        Ok(())
    }

    pub fn renderer(&self) -> Result<TemplateLinkRenderer> {
        match &self.renderer.base_url {
            Some(base_url) => TemplateLinkRenderer::with_base_url(base_url),
            None => Ok(TemplateLinkRenderer::new()),
        }
    }

    pub fn panel_model(&self) -> Result<&PanelModel> {
        validate_required_field("panel", &self.panel)
    }

    /// Builds the displayed value; its links come from the referenced column's config.
    pub fn field_display(&self) -> Result<FieldDisplay> {
        let display = validate_required_field("display", &self.display)?;
        let frame = self
            .frames
            .get(display.frame)
            .ok_or_else(|| LinkError::MissingConfigError {
                field: format!("frames[{}]", display.frame),
            })?;

        let field = match display.col.and_then(|col| frame.field(col)) {
            Some(column) => column.config.clone(),
            None => FieldConfig {
                display_name: None,
                links: display.links.clone(),
            },
        };

        Ok(FieldDisplay {
            name: display.name.clone(),
            field,
            display: DisplayValue {
                numeric: display.numeric,
                text: display.text.clone(),
            },
            view: Some(DataFrameView::new(frame.clone())),
            col_index: display.col,
            row_index: display.row,
        })
    }

    pub fn compare_view(&self) -> Option<DataFrameView> {
        let index = self.display.as_ref()?.compare_frame?;
        self.frames.get(index).cloned().map(DataFrameView::new)
    }
}

fn validate_links(field_name: &str, links: &[DataLink]) -> Result<()> {
    for (i, link) in links.iter().enumerate() {
        validate_non_empty_string(&format!("{}[{}].url", field_name, i), &link.url)?;
    }
    Ok(())
}

impl Validate for PreviewConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{FieldType, FieldValue};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC: &str = r#"
[renderer]
base_url = "https://grafana.example.com"

[panel]
id = 3
title = "Latency"

[[panel.links]]
title = "Host dashboard"
url = "/d/host?var-host=${host}"

[panel.scoped_vars.host]
text = "host"
value = "web-01"

[[frames]]
name = "latency"
ref_id = "A"
exemplars = [["traceId:abc"], ["traceId:def"]]

[frames.labels]
job = "api"

[[frames.fields]]
name = "time"
type = "time"
values = [1000, 2000]

[[frames.fields]]
name = "p99"
type = "number"
values = [12.5, 13.0]

[[frames.fields.config.links]]
title = "Trace"
url = "/explore?trace=${__value.exemplar.traceId}"
target_blank = true

[display]
frame = 0
col = 1
row = 1
name = "p99"
numeric = 13.0
text = "13 ms"
"#;

    #[test]
    fn test_parse_basic_preview_config() {
        let config = PreviewConfig::from_toml_str(BASIC).unwrap();
        assert!(config.validate().is_ok());

        let panel = config.panel_model().unwrap();
        assert_eq!(panel.id, 3);
        assert_eq!(panel.scoped_vars["host"].value, serde_json::json!("web-01"));

        let frame = &config.frames[0];
        assert_eq!(frame.labels["job"], "api");
        assert_eq!(frame.fields[0].field_type, FieldType::Time);
        assert_eq!(frame.fields[1].values[0], FieldValue::Number(12.5));
        assert_eq!(frame.fields[0].values[1], FieldValue::Number(2000.0));
    }

    #[test]
    fn test_field_display_takes_column_links() {
        let config = PreviewConfig::from_toml_str(BASIC).unwrap();
        let value = config.field_display().unwrap();

        assert_eq!(value.field.links.len(), 1);
        assert!(value.field.links[0].target_blank);
        assert_eq!(value.row_index, Some(1));
        assert_eq!(value.col_index, Some(1));
        assert!(value.view.is_some());
        assert!(config.compare_view().is_none());
    }

    #[test]
    fn test_env_var_substitution_keeps_link_placeholders() {
        std::env::set_var("PANEL_LINKS_TEST_BASE", "https://env.example.com");

        let toml_content = r#"
[renderer]
base_url = "${env:PANEL_LINKS_TEST_BASE}"

[panel]
id = 1

[[panel.links]]
url = "/d/x?v=${host}&missing=${env:PANEL_LINKS_TEST_UNSET}"
"#;

        let config = PreviewConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.renderer.base_url.as_deref(),
            Some("https://env.example.com")
        );
        assert_eq!(
            config.panel.unwrap().links[0].url,
            "/d/x?v=${host}&missing=${env:PANEL_LINKS_TEST_UNSET}"
        );

        std::env::remove_var("PANEL_LINKS_TEST_BASE");
    }

    #[test]
    fn test_validation_rejects_bad_indices() {
        let toml_content = r#"
[[frames]]
name = "a"

[display]
frame = 2
numeric = 1.0
"#;
        let config = PreviewConfig::from_toml_str(toml_content).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, LinkError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_validation_rejects_empty_link_url() {
        let toml_content = r#"
[panel]
id = 1

[[panel.links]]
title = "empty"
url = " "
"#;
        let config = PreviewConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_document_is_invalid() {
        let config = PreviewConfig::from_toml_str("").unwrap();
        assert!(matches!(
            config.validate().unwrap_err(),
            LinkError::MissingConfigError { .. }
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC.as_bytes()).unwrap();

        let config = PreviewConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.panel_model().unwrap().title, "Latency");
    }
}
