use crate::domain::model::{DataLink, LinkModel, LinkTarget};
use crate::domain::ports::{LinkOrigin, LinkRenderer};
use crate::domain::scoped_vars::ScopedVars;
use crate::utils::error::{LinkError, Result};
use chrono::{DateTime, SecondsFormat};
use regex::{Captures, Regex};
use std::sync::LazyLock;
use url::Url;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}:]+)(?::([A-Za-z]+))?\}").expect("placeholder pattern is valid")
});

/// Renders links by replacing `${path}` / `${path:format}` placeholders.
///
/// The first path segment names a scoped variable, the rest walk its value,
/// e.g. `${__value.exemplar.traceId}` or `${__series.labels.job}`. Placeholders
/// that do not resolve are left as written.
#[derive(Debug, Clone, Default)]
pub struct TemplateLinkRenderer {
    base_url: Option<Url>,
}

impl TemplateLinkRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relative hrefs (starting with `/`) are joined onto `base_url`.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let url = Url::parse(base_url).map_err(|e| LinkError::InvalidConfigValueError {
            field: "renderer.base_url".to_string(),
            value: base_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;
        Ok(Self {
            base_url: Some(url),
        })
    }

    pub fn interpolate(&self, template: &str, scoped_vars: &ScopedVars) -> String {
        PLACEHOLDER
            .replace_all(template, |caps: &Captures| {
                let path = &caps[1];
                let format = caps.get(2).map(|m| m.as_str()).unwrap_or("raw");

                match lookup(path, scoped_vars).and_then(|v| format_value(v, format)) {
                    Some(text) => text,
                    None => {
                        tracing::debug!("Unresolved link placeholder: {}", &caps[0]);
                        caps[0].to_string()
                    }
                }
            })
            .into_owned()
    }

    fn resolve_href(&self, href: String) -> Result<String> {
        match &self.base_url {
            Some(base) if href.starts_with('/') => base
                .join(&href)
                .map(String::from)
                .map_err(|e| LinkError::RenderError {
                    message: format!("Cannot join '{}' onto '{}': {}", href, base, e),
                }),
            _ => Ok(href),
        }
    }
}

impl LinkRenderer for TemplateLinkRenderer {
    fn data_link_model(
        &self,
        link: &DataLink,
        scoped_vars: &ScopedVars,
        origin: LinkOrigin<'_>,
    ) -> Result<LinkModel> {
        let href = self.resolve_href(self.interpolate(&link.url, scoped_vars))?;
        let title = self.interpolate(&link.title, scoped_vars);

        match origin {
            LinkOrigin::Field(value) => {
                tracing::debug!("🔗 {} -> {} (field '{}')", title, href, value.name)
            }
            LinkOrigin::Panel(panel) => {
                tracing::debug!("🔗 {} -> {} (panel {})", title, href, panel.id)
            }
        }

        Ok(LinkModel {
            href,
            title,
            target: if link.target_blank {
                LinkTarget::Blank
            } else {
                LinkTarget::Current
            },
        })
    }
}

fn lookup<'v>(path: &str, scoped_vars: &'v ScopedVars) -> Option<&'v serde_json::Value> {
    let mut segments = path.trim().split('.');
    let mut current = &scoped_vars.get(segments.next()?)?.value;

    for segment in segments {
        current = match current {
            serde_json::Value::Object(map) => map.get(segment)?,
            serde_json::Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

fn format_value(value: &serde_json::Value, format: &str) -> Option<String> {
    match format {
        "raw" => Some(value_to_text(value)),
        "percentencode" => Some(
            url::form_urlencoded::byte_serialize(value_to_text(value).as_bytes()).collect(),
        ),
        "iso" => {
            let millis = value.as_f64()?;
            DateTime::from_timestamp_millis(millis as i64)
                .map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true))
        }
        _ => None,
    }
}

fn value_to_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}
