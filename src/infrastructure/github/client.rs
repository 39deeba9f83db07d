//! GitHub REST API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::GithubConfig;
use crate::domain::error::HostError;
use crate::domain::host::RepositoryHost;
use crate::domain::metadata::RepositoryMetadata;
use crate::domain::slug::RepositorySlug;

const ACCEPT_HEADER: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";

/// Client for the GitHub REST API
pub struct GitHubClient {
    client: Client,
    api_url: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Create a new client with the given API base URL and optional token
    pub fn new(
        api_url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, HostError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(HostError::Network)?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            token,
        })
    }

    /// Create a client from the application configuration
    pub fn from_config(config: &GithubConfig) -> Result<Self, HostError> {
        Self::new(
            config.api_url.clone(),
            config.token.clone(),
            config.request_timeout(),
            &config.user_agent,
        )
    }

    /// Override the API base URL (for testing or proxies)
    pub fn with_base_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, HostError>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        let url = format!("{}{}", self.api_url.trim_end_matches('/'), path);
        debug!(url = %url, "GitHub API request");

        let mut request = self
            .client
            .get(&url)
            .header("Accept", ACCEPT_HEADER)
            .header("X-GitHub-Api-Version", API_VERSION);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(HostError::Http { status, message });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| HostError::Decode(e.to_string()))
    }
}

#[async_trait]
impl RepositoryHost for GitHubClient {
    async fn repository_info(
        &self,
        slug: &RepositorySlug,
    ) -> Result<RepositoryMetadata, HostError> {
        self.get_json(&format!("/repos/{}/{}", slug.owner, slug.repo))
            .await
    }

    async fn repository_languages(
        &self,
        slug: &RepositorySlug,
    ) -> Result<Vec<(String, u64)>, HostError> {
        // serde_json is built with preserve_order, so the service's own
        // ordering (largest first by its convention) survives the decode
        let raw: Map<String, Value> = self
            .get_json(&format!("/repos/{}/{}/languages", slug.owner, slug.repo))
            .await?;

        raw.into_iter()
            .map(|(name, bytes)| {
                bytes
                    .as_u64()
                    .map(|bytes| (name.clone(), bytes))
                    .ok_or_else(|| {
                        HostError::Decode(format!("non-integer byte count for language {name}"))
                    })
            })
            .collect()
    }
}
