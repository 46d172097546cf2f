use crate::config::ProviderConfig;
use crate::provider::{ProviderError, RepositoryProvider, Result};
use crate::types::{FileBody, TreeEntry};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use url::Url;

/// 仓库地址 -> contents API 根地址
///
/// 支持 `https://github.com/owner/repo[.git]` 和 `owner/repo` 两种写法。
pub fn repo_contents_url(repository: &str, api_base: &str) -> Result<String> {
    let trimmed = repository.trim().trim_end_matches('/');
    let api_base = api_base.trim_end_matches('/');

    if trimmed.starts_with(api_base) {
        return Ok(trimmed.to_string());
    }

    let segments: Vec<String> = if trimmed.contains("://") {
        let url = Url::parse(trimmed).map_err(|e| ProviderError::InvalidUrl(format!("{}: {}", repository, e)))?;
        url.path_segments()
            .map(|s| s.filter(|p| !p.is_empty()).map(str::to_string).collect())
            .unwrap_or_default()
    } else {
        trimmed.split('/').filter(|p| !p.is_empty()).map(str::to_string).collect()
    };

    match segments.as_slice() {
        [owner, repo, ..] => {
            let repo = repo.strip_suffix(".git").unwrap_or(repo);
            Ok(format!("{}/repos/{}/{}/contents", api_base, owner, repo))
        }
        _ => Err(ProviderError::InvalidUrl(repository.to_string())),
    }
}

/// GitHub contents API 数据源
pub struct GitHubProvider {
    client: Client,
    config: ProviderConfig,
}

impl GitHubProvider {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client, config })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ProviderConfig::from_env())
    }

    /// 仓库地址 -> 根目录 location
    pub fn root_location(&self, repository: &str) -> Result<String> {
        repo_contents_url(repository, &self.config.api_base)
    }

    fn request(&self, url: &str) -> RequestBuilder {
        let builder = self
            .client
            .get(url)
            .header(ACCEPT, "application/vnd.github+json");
        match &self.config.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        tracing::debug!("GET {}", url);
        let response = self.request(url).send().await?;

        if !response.status().is_success() {
            return Err(ProviderError::Api(format!(
                "GitHub returned status {} for {}",
                response.status(),
                url
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl RepositoryProvider for GitHubProvider {
    async fn fetch_tree(&self, location: &str) -> Result<Vec<TreeEntry>> {
        let value = self.get_json(location).await?;

        let Value::Array(items) = value else {
            return Err(ProviderError::Api(format!(
                "Expected a directory listing from {}",
                location
            )));
        };

        // 非对象条目保留为空条目，由遍历器记录并跳过
        Ok(items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect())
    }

    async fn fetch_file(&self, content_ref: &str) -> Result<FileBody> {
        let value = self.get_json(content_ref).await?;
        serde_json::from_value(value)
            .map_err(|e| ProviderError::Api(format!("Unexpected file payload from {}: {}", content_ref, e)))
    }
}
