use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use mdrop_core::ports::{FetchError, FileCatalogPort, FileContentSourcePort};
use mdrop_core::{ContentHandle, FileName, MimeType};
use reqwest::header::CONTENT_TYPE;
use reqwest::{RequestBuilder, Response, Url};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct HttpFileServiceConfig {
    /// Service root, e.g. `http://localhost:8080`. A path prefix is kept.
    pub base_url: String,
    /// Bearer credential. `None` sends unauthenticated requests.
    pub token: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Error)]
pub enum HttpFileServiceError {
    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Client for the file service REST API.
///
/// Endpoints used:
/// - `GET /api/files` lists file names
/// - `GET /api/files/{name}` returns the content
/// - `GET /api/files/{name}/thumb` returns a thumbnail, when the server has one
pub struct HttpFileService {
    client: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpFileService {
    pub fn new(config: HttpFileServiceConfig) -> Result<Self, HttpFileServiceError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            HttpFileServiceError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: e.to_string(),
            }
        })?;
        if base_url.cannot_be_a_base() {
            return Err(HttpFileServiceError::InvalidBaseUrl {
                url: config.base_url,
                reason: "url cannot carry a path".to_string(),
            });
        }

        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url,
            token: config.token.filter(|t| !t.is_empty()),
        })
    }

    /// Join path segments onto the base url, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn get(&self, url: Url) -> RequestBuilder {
        let request = self.client.get(url);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn download(&self, url: Url) -> Result<ContentHandle, FetchError> {
        let response = self.get(url).send().await.map_err(transport_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        into_content(response).await
    }
}

fn declared_mime(response: &Response) -> Option<MimeType> {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(MimeType::parse)
}

async fn into_content(response: Response) -> Result<ContentHandle, FetchError> {
    let mime = declared_mime(&response);
    let bytes = response.bytes().await.map_err(transport_error)?;
    Ok(ContentHandle::new(bytes, mime))
}

fn transport_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Transport("request timed out".to_string())
    } else {
        FetchError::Transport(err.to_string())
    }
}

#[async_trait]
impl FileContentSourcePort for HttpFileService {
    async fn fetch(
        &self,
        name: &FileName,
        cancel: CancellationToken,
    ) -> Result<ContentHandle, FetchError> {
        let url = self.endpoint(&["api", "files", name.as_str()]);

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!(file = %name, "Content request aborted");
                Err(FetchError::Cancelled)
            }
            result = self.download(url) => result,
        }
    }

    async fn fetch_thumbnail(&self, name: &FileName) -> Option<ContentHandle> {
        let url = self.endpoint(&["api", "files", name.as_str(), "thumb"]);

        match self.download(url).await {
            Ok(content) => Some(content),
            Err(err) => {
                debug!(file = %name, error = %err, "No thumbnail");
                None
            }
        }
    }
}

#[async_trait]
impl FileCatalogPort for HttpFileService {
    async fn list_files(&self) -> anyhow::Result<Vec<FileName>> {
        let url = self.endpoint(&["api", "files"]);
        let response = self
            .get(url)
            .send()
            .await
            .context("file listing request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("file listing failed with status {status}: {body}");
        }

        response
            .json::<Vec<FileName>>()
            .await
            .context("file listing is not a list of names")
    }
}
