use crate::exclude::is_excluded_name;
use crate::provider::{RepositoryProvider, Result};
use crate::types::{ArchiveEntry, NodeKind, TreeEntry};
use lang::LanguageRegistry;

/// 文件树遍历器
///
/// 显式栈代替递归，深度不受调用栈限制; 输出为先序，
/// 与数据源列出顺序一致 (决定图中类框的纵向顺序)。
pub struct TreeWalker<'a, P: RepositoryProvider + ?Sized> {
    provider: &'a P,
    registry: &'a LanguageRegistry,
}

impl<'a, P: RepositoryProvider + ?Sized> TreeWalker<'a, P> {
    pub fn new(provider: &'a P, registry: &'a LanguageRegistry) -> Self {
        Self { provider, registry }
    }

    /// 从根 location 开始遍历
    pub async fn list<S: AsRef<str>>(&self, root: &str, languages: &[S]) -> Result<Vec<ArchiveEntry>> {
        let listing = self.provider.fetch_tree(root).await?;
        self.collect(listing, languages).await
    }

    /// 遍历已获取的目录列表
    pub async fn collect<S: AsRef<str>>(
        &self,
        listing: Vec<TreeEntry>,
        languages: &[S],
    ) -> Result<Vec<ArchiveEntry>> {
        let mut archives = Vec::new();
        let mut stack = vec![listing.into_iter()];

        while let Some(level) = stack.last_mut() {
            let Some(entry) = level.next() else {
                stack.pop();
                continue;
            };

            let label = entry
                .path
                .clone()
                .or_else(|| entry.name.clone())
                .unwrap_or_else(|| "<unnamed>".to_string());
            let node = match entry.into_node() {
                Ok(node) => node,
                Err(reason) => {
                    tracing::warn!("Skipping tree entry {}: {}", label, reason);
                    continue;
                }
            };

            match node.kind {
                NodeKind::File => {
                    if !node.name.starts_with('.') && self.registry.matches_file(&node.name, languages) {
                        archives.push(ArchiveEntry::included(node));
                    }
                }
                NodeKind::Directory => {
                    if is_excluded_name(&node.name) {
                        tracing::debug!("Excluded folder: {}", node.path);
                        archives.push(ArchiveEntry::excluded(node));
                    } else {
                        let children = self.provider.fetch_tree(&node.content_ref).await?;
                        stack.push(children.into_iter());
                    }
                }
            }
        }

        tracing::info!(
            "Collected {} archives ({} excluded)",
            archives.len(),
            archives.iter().filter(|a| a.excluded).count()
        );

        Ok(archives)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderError;
    use crate::types::FileBody;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// 内存数据源，记录被列出的目录
    #[derive(Default)]
    struct MemoryProvider {
        dirs: HashMap<String, Vec<TreeEntry>>,
        listed: Mutex<Vec<String>>,
    }

    impl MemoryProvider {
        fn with_dir(mut self, location: &str, entries: Vec<TreeEntry>) -> Self {
            self.dirs.insert(location.to_string(), entries);
            self
        }

        fn listed(&self) -> Vec<String> {
            self.listed.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RepositoryProvider for MemoryProvider {
        async fn fetch_tree(&self, location: &str) -> Result<Vec<TreeEntry>> {
            self.listed.lock().unwrap().push(location.to_string());
            self.dirs
                .get(location)
                .cloned()
                .ok_or_else(|| ProviderError::Api(format!("no such dir {}", location)))
        }

        async fn fetch_file(&self, _content_ref: &str) -> Result<FileBody> {
            Ok(FileBody::default())
        }
    }

    fn names(archives: &[ArchiveEntry]) -> Vec<&str> {
        archives.iter().map(|a| a.node.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_filters_by_extension_and_hidden() {
        let provider = MemoryProvider::default().with_dir(
            "root",
            vec![
                TreeEntry::file("Foo.py", "f1"),
                TreeEntry::file("README.md", "f2"),
                TreeEntry::file(".hidden.py", "f3"),
                TreeEntry::file("Bar.java", "f4"),
            ],
        );
        let registry = LanguageRegistry::builtin();
        let archives = TreeWalker::new(&provider, &registry)
            .list("root", &["py"])
            .await
            .unwrap();

        assert_eq!(names(&archives), vec!["Foo.py"]);
        assert!(!archives[0].excluded);
    }

    #[tokio::test]
    async fn test_excluded_folder_not_descended() {
        let provider = MemoryProvider::default()
            .with_dir("root", vec![TreeEntry::dir("node_modules", "nm")])
            .with_dir("nm", vec![TreeEntry::file("index.js", "f")]);
        let registry = LanguageRegistry::builtin();
        let archives = TreeWalker::new(&provider, &registry)
            .list("root", &["js"])
            .await
            .unwrap();

        assert_eq!(archives.len(), 1);
        assert!(archives[0].excluded);
        assert_eq!(archives[0].node.name, "node_modules");
        assert_eq!(provider.listed(), vec!["root"]);
    }

    #[tokio::test]
    async fn test_preorder_follows_listing_order() {
        let provider = MemoryProvider::default()
            .with_dir(
                "root",
                vec![
                    TreeEntry::file("a.py", "a"),
                    TreeEntry::dir("pkg", "pkg"),
                    TreeEntry::file("z.py", "z"),
                    TreeEntry::dir("docs", "docs"),
                ],
            )
            .with_dir(
                "pkg",
                vec![TreeEntry::dir("inner", "inner"), TreeEntry::file("m.py", "m")],
            )
            .with_dir("inner", vec![TreeEntry::file("deep.py", "deep")]);
        let registry = LanguageRegistry::builtin();
        let archives = TreeWalker::new(&provider, &registry)
            .list("root", &["py"])
            .await
            .unwrap();

        assert_eq!(names(&archives), vec!["a.py", "deep.py", "m.py", "z.py", "docs"]);
        assert!(archives[4].excluded);
    }

    #[tokio::test]
    async fn test_malformed_entries_skipped() {
        let mut no_name = TreeEntry::file("x.py", "x");
        no_name.name = None;
        let mut submodule = TreeEntry::file("sub", "sub");
        submodule.kind = Some("submodule".to_string());

        let provider = MemoryProvider::default().with_dir(
            "root",
            vec![
                TreeEntry::default(),
                no_name,
                submodule,
                TreeEntry::file("ok.py", "ok"),
            ],
        );
        let registry = LanguageRegistry::builtin();
        let archives = TreeWalker::new(&provider, &registry)
            .list("root", &["py"])
            .await
            .unwrap();

        assert_eq!(names(&archives), vec!["ok.py"]);
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let provider =
            MemoryProvider::default().with_dir("root", vec![TreeEntry::dir("src", "missing")]);
        let registry = LanguageRegistry::builtin();
        let result = TreeWalker::new(&provider, &registry).list("root", &["py"]).await;
        assert!(matches!(result, Err(ProviderError::Api(_))));
    }

    #[tokio::test]
    async fn test_deep_tree_does_not_recurse() {
        let depth = 2_000;
        let mut provider = MemoryProvider::default();
        for i in 0..depth {
            provider = provider.with_dir(&format!("d{}", i), vec![TreeEntry::dir("x", &format!("d{}", i + 1))]);
        }
        provider = provider.with_dir(&format!("d{}", depth), vec![TreeEntry::file("leaf.rs", "leaf")]);

        let registry = LanguageRegistry::builtin();
        let archives = TreeWalker::new(&provider, &registry).list("d0", &["rs"]).await.unwrap();
        assert_eq!(names(&archives), vec!["leaf.rs"]);
    }
}
