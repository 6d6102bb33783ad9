use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::validate_web_url;
use url::Url;

pub const DEFAULT_BRANCH: &str = "master";
pub const DEFAULT_VIEWER_BASE: &str = "https://nbviewer.org/github";

/// Turns repository-relative paths into repository-browser and notebook-viewer URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkResolver {
    repository: Url,
    viewer_base: Url,
}

impl LinkResolver {
    pub fn new(repository_url: &str, viewer_base: &str) -> Result<Self> {
        let repository = parse_base("repository.url", repository_url)?;
        let viewer_base = parse_base("repository.viewer_base", viewer_base)?;
        Ok(Self {
            repository,
            viewer_base,
        })
    }

    pub fn with_default_viewer(repository_url: &str) -> Result<Self> {
        Self::new(repository_url, DEFAULT_VIEWER_BASE)
    }

    /// `<repository>/tree/<branch>/<path>`
    pub fn repo_path(&self, path: &str, branch: &str) -> Result<Url> {
        let path = normalize_path(path)?;
        let branch = normalize_branch(branch)?;

        let raw = format!(
            "{}/tree/{}/{}",
            self.repository.as_str().trim_end_matches('/'),
            branch,
            path
        );
        let url = Url::parse(&raw).map_err(|e| CatalogError::invalid_path(path, e.to_string()))?;
        tracing::debug!("Resolved repository link for {} on {}", path, branch);
        Ok(url)
    }

    pub fn repo_path_default(&self, path: &str) -> Result<Url> {
        self.repo_path(path, DEFAULT_BRANCH)
    }

    pub fn notebook_path(&self, path: &str, branch: &str) -> Result<Url> {
        let repo_url = self.repo_path(path, branch)?;
        self.to_viewer_url(&repo_url)
    }

    pub fn notebook_path_default(&self, path: &str) -> Result<Url> {
        self.notebook_path(path, DEFAULT_BRANCH)
    }

    /// 將儲存庫網址改寫為 notebook viewer 網址：
    /// `https://github.com/o/r/tree/b/p` -> `<viewer_base>/o/r/tree/b/p`
    pub fn to_viewer_url(&self, repo_url: &Url) -> Result<Url> {
        if repo_url.origin() != self.repository.origin() {
            return Err(CatalogError::invalid_path(
                repo_url.as_str(),
                format!(
                    "URL is not hosted on {}",
                    self.repository.host_str().unwrap_or_default()
                ),
            ));
        }

        let mut raw = format!(
            "{}{}",
            self.viewer_base.as_str().trim_end_matches('/'),
            repo_url.path()
        );
        if let Some(query) = repo_url.query() {
            raw.push('?');
            raw.push_str(query);
        }

        Url::parse(&raw).map_err(|e| CatalogError::invalid_path(repo_url.as_str(), e.to_string()))
    }
}

fn parse_base(field: &str, value: &str) -> Result<Url> {
    let url = Url::parse(value).map_err(|e| CatalogError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: format!("Invalid URL format: {}", e),
    })?;
    validate_web_url(field, &url)?;
    if url.query().is_some() || url.fragment().is_some() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field.to_string(),
            value: value.to_string(),
            reason: "Base URL cannot carry a query or fragment".to_string(),
        });
    }
    Ok(url)
}

fn normalize_path(path: &str) -> Result<&str> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return Err(CatalogError::invalid_path(path, "path cannot be empty"));
    }
    check_segments(path, trimmed)?;
    Ok(trimmed)
}

fn normalize_branch(branch: &str) -> Result<&str> {
    let trimmed = branch.trim_matches('/');
    if trimmed.is_empty() {
        return Err(CatalogError::invalid_path(branch, "branch cannot be empty"));
    }
    check_segments(branch, trimmed)?;
    Ok(trimmed)
}

fn check_segments(original: &str, trimmed: &str) -> Result<()> {
    for segment in trimmed.split('/') {
        match segment {
            "" => {
                return Err(CatalogError::invalid_path(
                    original,
                    "path contains an empty segment",
                ))
            }
            _ if is_dot_segment(segment) => {
                return Err(CatalogError::invalid_path(
                    original,
                    "relative segments are not allowed",
                ))
            }
            _ => check_segment_chars(original, segment)?,
        }
    }
    Ok(())
}

// `%2e` 也會被 URL 解析器當成 `.`
fn is_dot_segment(segment: &str) -> bool {
    let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
    decoded == "." || decoded == ".."
}

// RFC 3986 pchar
fn check_segment_chars(original: &str, segment: &str) -> Result<()> {
    let bytes = segment.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'%' {
            let escaped = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !escaped {
                return Err(CatalogError::invalid_path(
                    original,
                    "malformed percent escape",
                ));
            }
            i += 3;
            continue;
        }
        if !(b.is_ascii_alphanumeric() || b"-._~!$&'()*+,;=:@".contains(&b)) {
            return Err(CatalogError::invalid_path(
                original,
                format!("character {:?} is not allowed in a URL path", b as char),
            ));
        }
        i += 1;
    }
    Ok(())
}
