//! # Configuration Loader / 配置加载器
//!
//! Pure data loading: read the TOML file and map it to [`AppConfig`].
//! No validation and no defaults here; wiring decides what empty values mean.
//! 仅纯数据加载，不做验证，不填默认值。

use anyhow::Context;
use mdrop_core::config::AppConfig;
use std::path::{Path, PathBuf};

/// `<config dir>/minidrop/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("minidrop").join("config.toml"))
}

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_load_config_reads_valid_toml() {
        let file = write_config(
            r#"
            [server]
            base_url = "https://drop.example.com"
            token = "abc"
            request_timeout_secs = 10

            [preview]
            debounce_ms = 200
        "#,
        );

        let config = load_config(file.path()).unwrap();

        assert_eq!(config.server_base_url, "https://drop.example.com");
        assert_eq!(config.api_token, "abc");
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.preview_debounce_ms, 200);
    }

    /// Missing values are facts, not errors
    /// 缺失的值是事实，不是错误
    #[test]
    fn test_load_config_returns_empty_values_when_missing() {
        let file = write_config(
            r#"
            [server]
            # everything missing
        "#,
        );

        let config = load_config(file.path()).unwrap();

        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_load_config_fails_on_invalid_toml() {
        let file = write_config("[server\nbase_url = ");

        let err = load_config(file.path()).unwrap_err();

        assert!(err.to_string().contains("TOML"), "{err:#}");
    }

    #[test]
    fn test_load_config_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = load_config(&path).unwrap_err();

        assert!(err.to_string().contains("absent.toml"), "{err:#}");
    }
}
