//! Page configuration loaded from JSON.
//!
//! # Invariants
//! - Missing fields fall back to `PageConfig::default()`.
//! - `page_url` and `pix_base_url` must not be blank after loading.

use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const DEFAULT_PAGE_URL: &str = "http://localhost/admin/tool/elementlibrary/index.php";
const DEFAULT_PIX_BASE_URL: &str = "http://localhost/theme/image.php";
const DEFAULT_THEME: &str = "boost";

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings the in-process page needs to resolve URLs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// URL of the page being rendered; actions in samples point here.
    pub page_url: String,
    /// Base URL that icon `src` attributes are built from.
    pub pix_base_url: String,
    /// Theme name inserted between base URL and component.
    pub theme: String,
    /// Log level for `init_logging`, when the caller wants logs.
    pub log_level: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page_url: DEFAULT_PAGE_URL.to_string(),
            pix_base_url: DEFAULT_PIX_BASE_URL.to_string(),
            theme: DEFAULT_THEME.to_string(),
            log_level: None,
        }
    }
}

impl PageConfig {
    /// Parses and validates a JSON document.
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.page_url.trim().is_empty() {
            return Err(ConfigError::Invalid("page_url must not be empty"));
        }
        if self.pix_base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("pix_base_url must not be empty"));
        }
        if self.theme.trim().is_empty() {
            return Err(ConfigError::Invalid("theme must not be empty"));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config JSON: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, PageConfig};

    #[test]
    fn empty_object_uses_defaults() {
        let config = PageConfig::from_json_str("{}").expect("defaults should load");
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn rejects_blank_page_url() {
        let err = PageConfig::from_json_str(r#"{"page_url": "  "}"#)
            .expect_err("blank url must fail");
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = PageConfig::from_json_str(r#"{"colour": "red"}"#)
            .expect_err("unknown field must fail");
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
