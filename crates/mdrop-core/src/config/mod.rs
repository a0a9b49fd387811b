//! # Pure Data Module / 纯数据模块 - Data Transfer Objects Only
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Define configuration data structures / 定义配置数据结构
//! - ✅ Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No default value calculation / 禁止默认值计算**
//!
//! Defaults (debounce interval, timeout) and environment overrides are
//! applied by the wiring layer, not here.

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the file service, e.g. `http://localhost:8080`
    /// (may be empty - this is a fact, not an error)
    pub server_base_url: String,

    /// Bearer credential attached to every request (may be empty)
    pub api_token: String,

    /// Per-request timeout in seconds, 0 when not set
    pub request_timeout_secs: u64,

    /// Hover debounce interval in milliseconds, 0 when not set
    pub preview_debounce_ms: u64,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// Missing keys map to empty values. Negative integers are facts too and
    /// are clamped to zero rather than rejected.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let server = toml_value.get("server");
        let preview = toml_value.get("preview");

        Ok(Self {
            server_base_url: server
                .and_then(|s| s.get("base_url"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            api_token: server
                .and_then(|s| s.get("token"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            request_timeout_secs: server
                .and_then(|s| s.get("request_timeout_secs"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as u64,
            preview_debounce_ms: preview
                .and_then(|p| p.get("debounce_ms"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as u64,
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig（所有字段为空/默认值）
    pub fn empty() -> Self {
        Self {
            server_base_url: String::new(),
            api_token: String::new(),
            request_timeout_secs: 0,
            preview_debounce_ms: 0,
        }
    }
}
