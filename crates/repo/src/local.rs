use crate::provider::{ProviderError, RepositoryProvider, Result};
use crate::types::{FileBody, TreeEntry};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// 本地目录数据源
///
/// location / content_ref 都是绝对路径; 子项按名称排序保证输出稳定。
pub struct LocalProvider {
    root: PathBuf,
}

impl LocalProvider {
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().canonicalize()?;
        if !root.is_dir() {
            return Err(ProviderError::InvalidUrl(format!(
                "{} is not a directory",
                root.display()
            )));
        }
        Ok(Self { root })
    }

    /// 根目录 location
    pub fn root_location(&self) -> String {
        self.root.to_string_lossy().to_string()
    }

    fn relative(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string()
    }
}

#[async_trait]
impl RepositoryProvider for LocalProvider {
    async fn fetch_tree(&self, location: &str) -> Result<Vec<TreeEntry>> {
        let mut dir = tokio::fs::read_dir(location).await?;
        let mut entries = Vec::new();

        while let Some(entry) = dir.next_entry().await? {
            let path = entry.path();
            let file_type = entry.file_type().await?;
            let kind = if file_type.is_dir() {
                "dir"
            } else if file_type.is_file() {
                "file"
            } else {
                "symlink"
            };

            entries.push(TreeEntry {
                name: Some(entry.file_name().to_string_lossy().to_string()),
                path: Some(self.relative(&path)),
                kind: Some(kind.to_string()),
                url: Some(path.to_string_lossy().to_string()),
                html_url: None,
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    async fn fetch_file(&self, content_ref: &str) -> Result<FileBody> {
        let bytes = tokio::fs::read(content_ref).await?;
        Ok(match String::from_utf8(bytes) {
            Ok(text) => FileBody::utf8(text),
            Err(_) => FileBody {
                encoding: "binary".to_string(),
                content: String::new(),
            },
        })
    }
}
