use crate::utils::error::{CatalogError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => validate_web_url(field_name, &url),
        Err(e) => Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// 已解析的 URL 仍需是可以直接點擊的 http(s) 連結
pub fn validate_web_url(field_name: &str, url: &Url) -> Result<()> {
    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(()),
        "http" | "https" => Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url.to_string(),
            reason: "URL has no host".to_string(),
        }),
        scheme => Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url.to_string(),
            reason: format!("Unsupported URL scheme: {}", scheme),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| CatalogError::MissingConfigError {
        field: field_name.to_string(),
    })
}

/// 空字串視為缺少必填欄位
pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("repository.url", "https://example.com").is_ok());
        assert!(validate_url("repository.url", "http://example.com").is_ok());
        assert!(validate_url("repository.url", "").is_err());
        assert!(validate_url("repository.url", "invalid-url").is_err());
        assert!(validate_url("repository.url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("modules.id", 5, 1).is_ok());
        assert!(validate_positive_number("modules.id", 0, 1).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("modules.title", "Decorators").is_ok());
        let err = validate_non_empty_string("modules.title", "   ").unwrap_err();
        assert!(matches!(err, CatalogError::MissingConfigError { .. }));
    }

    #[test]
    fn test_validate_required_field() {
        let icon: Option<String> = None;
        assert!(validate_required_field("modules.icon", &icon).is_err());
        let icon = Some("wand".to_string());
        assert_eq!(validate_required_field("modules.icon", &icon).unwrap(), "wand");
    }
}
