//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Turn the raw config DTO into client settings (defaults, env override)
//! - ✅ Create infra implementations (HTTP file service, preview store)
//! - ✅ Inject them into use cases through port traits
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//!
//! > **This is the only place allowed to depend on mdrop-infra + mdrop-app simultaneously.**
//! > **这是唯一允许同时依赖 mdrop-infra 和 mdrop-app 的地方。**

use std::sync::Arc;
use std::time::Duration;

use mdrop_app::{
    DownloadFileUseCase, ListFilesUseCase, PreviewCoordinator, PreviewHandle, DEFAULT_DEBOUNCE,
};
use mdrop_core::config::AppConfig;
use mdrop_core::ports::{FileCatalogPort, FileContentSourcePort, PreviewSinkPort};
use mdrop_infra::{HttpFileService, HttpFileServiceConfig, HttpFileServiceError, PreviewStore};
use tokio::task::JoinHandle;
use tracing::info;

/// Environment variable that overrides `[server] token`.
pub const TOKEN_ENV_VAR: &str = "MINIDROP_TOKEN";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误（基础设施初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("File service client initialization failed: {0}")]
    FileService(#[from] HttpFileServiceError),
}

/// Effective client settings after defaults and overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub base_url: String,
    pub token: Option<String>,
    pub request_timeout: Duration,
    pub debounce: Duration,
}

impl ClientSettings {
    /// Zero or empty config values fall back to defaults. A non-empty
    /// `env_token` replaces the configured token.
    pub fn resolve(config: &AppConfig, env_token: Option<String>) -> Self {
        let base_url = if config.server_base_url.trim().is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            config.server_base_url.trim().to_string()
        };

        let token = env_token
            .filter(|t| !t.is_empty())
            .or_else(|| Some(config.api_token.clone()).filter(|t| !t.is_empty()));

        let request_timeout = match config.request_timeout_secs {
            0 => DEFAULT_REQUEST_TIMEOUT,
            secs => Duration::from_secs(secs),
        };

        let debounce = match config.preview_debounce_ms {
            0 => DEFAULT_DEBOUNCE,
            ms => Duration::from_millis(ms),
        };

        Self {
            base_url,
            token,
            request_timeout,
            debounce,
        }
    }
}

/// Assembled dependencies, handed to the command handlers.
pub struct AppDeps {
    pub list_files: ListFilesUseCase,
    pub download_file: DownloadFileUseCase,
    pub preview_store: Arc<PreviewStore>,
    content_source: Arc<dyn FileContentSourcePort>,
    debounce: Duration,
}

impl AppDeps {
    /// Start a preview coordinator publishing into [`AppDeps::preview_store`].
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_preview(&self) -> (PreviewHandle, JoinHandle<()>) {
        let sink: Arc<dyn PreviewSinkPort> = self.preview_store.clone();
        PreviewCoordinator::spawn(self.content_source.clone(), sink, self.debounce)
    }
}

/// Build all adapters and use cases from the loaded configuration.
/// 根据配置组装所有依赖。
pub fn wire_dependencies(config: &AppConfig) -> WiringResult<AppDeps> {
    let settings = ClientSettings::resolve(config, std::env::var(TOKEN_ENV_VAR).ok());
    info!(
        base_url = %settings.base_url,
        authenticated = settings.token.is_some(),
        debounce_ms = settings.debounce.as_millis() as u64,
        "Wiring file service client"
    );

    let service = Arc::new(HttpFileService::new(HttpFileServiceConfig {
        base_url: settings.base_url,
        token: settings.token,
        timeout: settings.request_timeout,
    })?);

    let catalog: Arc<dyn FileCatalogPort> = service.clone();
    let content_source: Arc<dyn FileContentSourcePort> = service;

    Ok(AppDeps {
        list_files: ListFilesUseCase::new(catalog),
        download_file: DownloadFileUseCase::new(content_source.clone()),
        preview_store: Arc::new(PreviewStore::new()),
        content_source,
        debounce: settings.debounce,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_gets_defaults() {
        let settings = ClientSettings::resolve(&AppConfig::empty(), None);

        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.token, None);
        assert_eq!(settings.request_timeout, DEFAULT_REQUEST_TIMEOUT);
        assert_eq!(settings.debounce, Duration::from_millis(120));
    }

    #[test]
    fn test_configured_values_are_kept() {
        let config = AppConfig {
            server_base_url: " https://drop.example.com ".to_string(),
            api_token: "from-file".to_string(),
            request_timeout_secs: 5,
            preview_debounce_ms: 250,
        };

        let settings = ClientSettings::resolve(&config, None);

        assert_eq!(settings.base_url, "https://drop.example.com");
        assert_eq!(settings.token.as_deref(), Some("from-file"));
        assert_eq!(settings.request_timeout, Duration::from_secs(5));
        assert_eq!(settings.debounce, Duration::from_millis(250));
    }

    #[test]
    fn test_env_token_overrides_config_token() {
        let config = AppConfig {
            api_token: "from-file".to_string(),
            ..AppConfig::empty()
        };

        let settings = ClientSettings::resolve(&config, Some("from-env".to_string()));
        assert_eq!(settings.token.as_deref(), Some("from-env"));

        let settings = ClientSettings::resolve(&config, Some(String::new()));
        assert_eq!(settings.token.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_invalid_base_url_fails_wiring() {
        let config = AppConfig {
            server_base_url: "::not a url::".to_string(),
            ..AppConfig::empty()
        };

        let result = wire_dependencies(&config);

        assert!(matches!(result, Err(WiringError::FileService(_))));
    }

    #[test]
    fn test_preview_store_starts_pending() {
        let deps = wire_dependencies(&AppConfig::empty()).unwrap();
        assert_eq!(
            deps.preview_store.current(),
            mdrop_core::PreviewResult::Pending
        );
    }
}
