use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern compiles"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub backend: BackendConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub origin: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: Option<LogFormat>,
    pub verbose: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content)
            .map_err(|e| PortfolioError::config(format!("TOML parsing error: {}", e)))
    }

    /// 替換環境變數 (例如 ${PORTFOLIO_BACKEND_URL})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn backend_origin(&self) -> &str {
        &self.backend.origin
    }

    pub fn timeout_seconds(&self) -> Option<u64> {
        self.backend.timeout_seconds
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging
            .as_ref()
            .and_then(|l| l.format)
            .unwrap_or(LogFormat::Compact)
    }

    pub fn verbose(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("backend.origin", &self.backend.origin)?;
        if let Some(timeout) = self.backend.timeout_seconds {
            validate_positive_number("backend.timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[backend]
origin = "https://api.example.com"
timeout_seconds = 5

[logging]
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.backend_origin(), "https://api.example.com");
        assert_eq!(config.timeout_seconds(), Some(5));
        assert_eq!(config.log_format(), LogFormat::Json);
        assert!(!config.verbose());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_logging_section_is_optional() {
        let config = TomlConfig::from_toml_str("[backend]\norigin = \"http://localhost:8000\"\n").unwrap();
        assert_eq!(config.log_format(), LogFormat::Compact);
        assert!(config.timeout_seconds().is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TOML_TEST_PORTFOLIO_ORIGIN", "https://test.api.com");

        let toml_content = r#"
[backend]
origin = "${TOML_TEST_PORTFOLIO_ORIGIN}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.backend.origin, "https://test.api.com");

        std::env::remove_var("TOML_TEST_PORTFOLIO_ORIGIN");
    }

    #[test]
    fn test_unset_placeholder_is_left_in_place_and_fails_validation() {
        let toml_content = r#"
[backend]
origin = "${TOML_TEST_DEFINITELY_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.backend.origin, "${TOML_TEST_DEFINITELY_UNSET_VAR}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let invalid_origin = TomlConfig::from_toml_str("[backend]\norigin = \"invalid-url\"\n").unwrap();
        assert!(invalid_origin.validate().is_err());

        let zero_timeout = TomlConfig::from_toml_str(
            "[backend]\norigin = \"http://localhost:8000\"\ntimeout_seconds = 0\n",
        )
        .unwrap();
        assert!(zero_timeout.validate().is_err());
    }

    #[test]
    fn test_missing_backend_section_is_a_config_error() {
        let err = TomlConfig::from_toml_str("[logging]\nverbose = true\n").unwrap_err();
        assert!(matches!(err, PortfolioError::Config { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[backend]\norigin = \"https://file.example.com\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.backend_origin(), "https://file.example.com");
    }
}
