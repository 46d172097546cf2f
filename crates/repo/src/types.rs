use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 文件树原始条目 - 宽松反序列化，字段都可能缺失
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    /// "file" / "dir" / "symlink" / "submodule"
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// API 地址: 目录用于列出子项，文件用于获取内容
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// 条目不符合预期结构的原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedEntry {
    MissingName,
    MissingKind,
    MissingUrl,
    UnsupportedKind(String),
}

impl fmt::Display for MalformedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedEntry::MissingName => write!(f, "missing name"),
            MalformedEntry::MissingKind => write!(f, "missing type"),
            MalformedEntry::MissingUrl => write!(f, "missing url"),
            MalformedEntry::UnsupportedKind(kind) => write!(f, "unsupported type '{}'", kind),
        }
    }
}

impl TreeEntry {
    pub fn file(name: &str, url: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            path: Some(name.to_string()),
            kind: Some("file".to_string()),
            url: Some(url.to_string()),
            html_url: None,
        }
    }

    pub fn dir(name: &str, url: &str) -> Self {
        Self {
            kind: Some("dir".to_string()),
            ..Self::file(name, url)
        }
    }

    /// 转换为类型化节点
    pub fn into_node(self) -> Result<FileNode, MalformedEntry> {
        let name = self.name.ok_or(MalformedEntry::MissingName)?;
        let kind = match self.kind.as_deref() {
            Some("file") => NodeKind::File,
            Some("dir") => NodeKind::Directory,
            Some(other) => return Err(MalformedEntry::UnsupportedKind(other.to_string())),
            None => return Err(MalformedEntry::MissingKind),
        };
        let content_ref = self.url.ok_or(MalformedEntry::MissingUrl)?;

        Ok(FileNode {
            path: self.path.unwrap_or_else(|| name.clone()),
            name,
            kind,
            content_ref,
            html_url: self.html_url,
        })
    }
}

/// 序列化为 GitHub 的 `file` / `dir`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NodeKind {
    #[serde(rename = "file")]
    File,
    #[serde(rename = "dir")]
    Directory,
}

/// 文件树节点
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileNode {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// 数据源用于获取子项/内容的句柄
    #[serde(rename = "url")]
    pub content_ref: String,
    pub html_url: Option<String>,
}

impl FileNode {
    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    /// 浏览器地址，没有时退回 content_ref
    pub fn link(&self) -> &str {
        self.html_url.as_deref().unwrap_or(&self.content_ref)
    }
}

/// 遍历结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveEntry {
    #[serde(rename = "element")]
    pub node: FileNode,
    /// true: 被跳过的目录，不参与绘图
    pub excluded: bool,
}

impl ArchiveEntry {
    pub fn included(node: FileNode) -> Self {
        Self {
            node,
            excluded: false,
        }
    }

    pub fn excluded(node: FileNode) -> Self {
        Self {
            node,
            excluded: true,
        }
    }
}

/// 文件内容 (传输编码 + 原始内容)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileBody {
    #[serde(default)]
    pub encoding: String,
    #[serde(default)]
    pub content: String,
}

impl FileBody {
    pub fn utf8(content: impl Into<String>) -> Self {
        Self {
            encoding: "utf-8".to_string(),
            content: content.into(),
        }
    }

    pub fn base64(raw: &[u8]) -> Self {
        Self {
            encoding: "base64".to_string(),
            content: STANDARD.encode(raw),
        }
    }

    /// 解码为文本; 非文本编码或非 UTF-8 内容返回 None
    pub fn text(&self) -> Option<String> {
        match self.encoding.to_ascii_lowercase().as_str() {
            "base64" => {
                // GitHub 每 60 字符插入换行
                let cleaned: String = self.content.split_whitespace().collect();
                let bytes = STANDARD.decode(cleaned).ok()?;
                String::from_utf8(bytes).ok()
            }
            "utf-8" | "utf8" => Some(self.content.clone()),
            _ => None,
        }
    }
}
