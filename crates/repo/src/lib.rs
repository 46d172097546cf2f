//! repo - 远程仓库文件树
//!
//! 排除策略、文件树模型、仓库数据源 (GitHub / 本地目录) 与文件树遍历

mod config;
mod exclude;
mod github;
mod local;
mod provider;
mod types;
mod walker;

pub use config::ProviderConfig;
pub use exclude::{is_excluded_name, EXCLUDED_NAMES};
pub use github::{repo_contents_url, GitHubProvider};
pub use local::LocalProvider;
pub use provider::{ProviderError, RepositoryProvider, Result};
pub use types::{ArchiveEntry, FileBody, FileNode, MalformedEntry, NodeKind, TreeEntry};
pub use walker::TreeWalker;
