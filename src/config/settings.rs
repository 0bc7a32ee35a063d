use crate::config::toml_config::TomlConfig;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Effective settings handed to the loader and the submitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub backend_origin: String,
    pub timeout_seconds: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_origin: DEFAULT_BACKEND_URL.to_string(),
            timeout_seconds: None,
        }
    }
}

impl Settings {
    pub fn new(backend_origin: impl Into<String>) -> Self {
        Self {
            backend_origin: backend_origin.into(),
            timeout_seconds: None,
        }
    }

    /// Flag or environment first, then the TOML file, then the built-in default.
    pub fn resolve(
        backend_url: Option<&str>,
        timeout_seconds: Option<u64>,
        file: Option<&TomlConfig>,
    ) -> Self {
        let backend_origin = backend_url
            .map(str::to_string)
            .or_else(|| file.map(|f| f.backend_origin().to_string()))
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        let timeout_seconds = timeout_seconds.or_else(|| file.and_then(TomlConfig::timeout_seconds));

        Self {
            backend_origin,
            timeout_seconds,
        }
    }
}

impl ConfigProvider for Settings {
    fn backend_origin(&self) -> &str {
        &self.backend_origin
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("backend_origin", &self.backend_origin)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(origin: &str, timeout: Option<u64>) -> TomlConfig {
        let timeout_line = timeout.map(|t| format!("timeout_seconds = {}\n", t)).unwrap_or_default();
        TomlConfig::from_toml_str(&format!("[backend]\norigin = \"{}\"\n{}", origin, timeout_line)).unwrap()
    }

    #[test]
    fn test_defaults_when_nothing_is_given() {
        let settings = Settings::resolve(None, None, None);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.backend_origin(), "http://localhost:8000");
        assert!(settings.request_timeout().is_none());
    }

    #[test]
    fn test_file_overrides_default() {
        let toml = file("https://file.example.com", Some(7));
        let settings = Settings::resolve(None, None, Some(&toml));
        assert_eq!(settings.backend_origin(), "https://file.example.com");
        assert_eq!(settings.request_timeout(), Some(Duration::from_secs(7)));
    }

    #[test]
    fn test_flag_overrides_file() {
        let toml = file("https://file.example.com", Some(7));
        let settings = Settings::resolve(Some("https://flag.example.com"), Some(2), Some(&toml));
        assert_eq!(settings.backend_origin(), "https://flag.example.com");
        assert_eq!(settings.timeout_seconds, Some(2));
    }

    #[test]
    fn test_validation() {
        assert!(Settings::new("http://localhost:8000").validate().is_ok());
        assert!(Settings::new("localhost").validate().is_err());
        let zero = Settings {
            timeout_seconds: Some(0),
            ..Settings::default()
        };
        assert!(zero.validate().is_err());
    }
}
