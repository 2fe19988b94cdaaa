use crate::utils::error::{LinkError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(LinkError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(LinkError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(LinkError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LinkError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Checks that a positional reference points inside a collection of `len` items.
pub fn validate_index(field_name: &str, index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(LinkError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: index.to_string(),
            reason: format!("Index out of range (only {} available)", len),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| LinkError::MissingConfigError {
        field: field_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("renderer.base_url", "https://grafana.example.com").is_ok());
        assert!(validate_url("renderer.base_url", "http://localhost:3000").is_ok());
        assert!(validate_url("renderer.base_url", "").is_err());
        assert!(validate_url("renderer.base_url", "not a url").is_err());
        assert!(validate_url("renderer.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_index() {
        assert!(validate_index("display.frame", 0, 1).is_ok());
        assert!(validate_index("display.frame", 1, 1).is_err());
        assert!(validate_index("display.col", 0, 0).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(3usize);
        assert_eq!(*validate_required_field("display", &present).unwrap(), 3);

        let absent: Option<usize> = None;
        let err = validate_required_field("display", &absent).unwrap_err();
        assert!(matches!(err, LinkError::MissingConfigError { .. }));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("panel.links[0].url", "/d/abc").is_ok());
        assert!(validate_non_empty_string("panel.links[0].url", "   ").is_err());
    }
}
