//! 数据源配置

/// 数据源配置
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Bearer token, 未设置时匿名访问 (受限流)
    pub token: Option<String>,
    pub api_base: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_base: "https://api.github.com".to_string(),
            timeout_secs: 30,
            user_agent: concat!("classmap/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ProviderConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("GITHUB_TOKEN") {
            if !v.trim().is_empty() {
                config.token = Some(v.trim().to_string());
            }
        }

        if let Ok(v) = std::env::var("CLASSMAP_API_BASE") {
            config.api_base = v.trim_end_matches('/').to_string();
        }

        if let Ok(v) = std::env::var("CLASSMAP_TIMEOUT_SECS") {
            if let Ok(t) = v.parse() {
                config.timeout_secs = t;
            }
        }

        config
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_config_default() {
        let config = ProviderConfig::default();
        assert!(config.token.is_none());
        assert_eq!(config.api_base, "https://api.github.com");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("classmap/"));
    }

    #[test]
    fn test_provider_config_builder() {
        let config = ProviderConfig::default()
            .with_token("secret")
            .with_api_base("http://localhost:8080/");
        assert_eq!(config.token.as_deref(), Some("secret"));
        assert_eq!(config.api_base, "http://localhost:8080");
    }
}
