use crate::types::{FileBody, TreeEntry};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error: {0}")]
    Api(String),
    #[error("Invalid repository location: {0}")]
    InvalidUrl(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProviderError>;

/// 仓库数据源 trait
///
/// 错误向上传播，整个生成请求失败; 重试/超时策略由实现自行决定。
#[async_trait]
pub trait RepositoryProvider: Send + Sync {
    /// 列出目录的直接子项 (保持数据源顺序)
    async fn fetch_tree(&self, location: &str) -> Result<Vec<TreeEntry>>;

    /// 获取文件内容
    async fn fetch_file(&self, content_ref: &str) -> Result<FileBody>;
}
