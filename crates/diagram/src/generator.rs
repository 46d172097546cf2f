use crate::layout::{DiagramDocument, DiagramLayout, LayoutConfig};
use crate::mxgraph::MxGraphWriter;
use lang::{Extractor, LanguageRegistry};
use repo::{ArchiveEntry, ProviderError, RepositoryProvider, TreeEntry, TreeWalker};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

pub type Result<T> = std::result::Result<T, DiagramError>;

/// 根目录条目 (名称 + 浏览器地址)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseArchive {
    pub name: String,
    pub url: String,
}

impl BaseArchive {
    fn from_entry(entry: &TreeEntry) -> Option<Self> {
        let name = entry.name.clone()?;
        let url = entry.html_url.clone().or_else(|| entry.url.clone())?;
        Some(Self { name, url })
    }
}

/// 一次完整生成的结果
#[derive(Debug, Clone)]
pub struct Generation {
    pub base_archives: Vec<BaseArchive>,
    pub archives: Vec<ArchiveEntry>,
    pub document: DiagramDocument,
}

/// 响应信封
#[derive(Debug, Serialize)]
pub struct Envelope<'a> {
    pub base_archives: &'a [BaseArchive],
    pub archives: &'a [ArchiveEntry],
    pub xml: String,
}

impl Generation {
    pub fn envelope(&self) -> Envelope<'_> {
        Envelope {
            base_archives: &self.base_archives,
            archives: &self.archives,
            xml: MxGraphWriter::render(&self.document),
        }
    }
}

/// 类图生成器
///
/// 单请求、顺序执行: 遍历文件树，逐个获取文件并提取成员，按遍历顺序堆叠类框。
pub struct DiagramGenerator<'a, P: RepositoryProvider + ?Sized> {
    provider: &'a P,
    registry: &'a LanguageRegistry,
    config: LayoutConfig,
}

impl<'a, P: RepositoryProvider + ?Sized> DiagramGenerator<'a, P> {
    pub fn new(provider: &'a P, registry: &'a LanguageRegistry) -> Self {
        Self {
            provider,
            registry,
            config: LayoutConfig::default(),
        }
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// 只遍历，不布局 (清单视图)
    pub async fn list_archives<S: AsRef<str>>(
        &self,
        root: &str,
        languages: &[S],
    ) -> Result<Vec<ArchiveEntry>> {
        Ok(TreeWalker::new(self.provider, self.registry)
            .list(root, languages)
            .await?)
    }

    /// 遍历 + 布局
    pub async fn generate_diagram<S: AsRef<str>>(
        &self,
        root: &str,
        languages: &[S],
    ) -> Result<DiagramDocument> {
        let archives = self.list_archives(root, languages).await?;
        self.layout(&archives, languages).await
    }

    /// 遍历 + 布局，同时保留根目录列表和遍历结果
    pub async fn run<S: AsRef<str>>(&self, root: &str, languages: &[S]) -> Result<Generation> {
        let listing = self.provider.fetch_tree(root).await?;
        let base_archives = listing.iter().filter_map(BaseArchive::from_entry).collect();

        let archives = TreeWalker::new(self.provider, self.registry)
            .collect(listing, languages)
            .await?;
        let document = self.layout(&archives, languages).await?;

        Ok(Generation {
            base_archives,
            archives,
            document,
        })
    }

    /// 为每个未排除的文件生成类框
    ///
    /// 内容无法按文本解码的文件记录后跳过; 数据源错误直接返回。
    pub async fn layout<S: AsRef<str>>(
        &self,
        archives: &[ArchiveEntry],
        languages: &[S],
    ) -> Result<DiagramDocument> {
        let extractor = Extractor::new(self.registry);
        let mut layout = DiagramLayout::new(self.config.clone());

        for archive in archives.iter().filter(|a| !a.excluded) {
            let node = &archive.node;
            let body = self.provider.fetch_file(&node.content_ref).await?;

            let Some(text) = body.text() else {
                tracing::warn!(
                    "Skipping {}: body is not plain text (encoding '{}')",
                    node.path,
                    body.encoding
                );
                continue;
            };

            let methods = extractor.methods(&text, languages);
            let attributes = extractor.attributes(&text, languages);
            tracing::debug!(
                "{}: {} methods, {} attributes",
                node.path,
                methods.len(),
                attributes.len()
            );

            layout.push(&node.name, methods, attributes);
        }

        let document = layout.finish();
        tracing::info!("Laid out {} class boxes", document.len());
        Ok(document)
    }
}
