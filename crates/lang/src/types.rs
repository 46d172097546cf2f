use serde::Serialize;

/// 方法 - 名称 + 原始参数文本
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Method {
    pub name: String,
    /// 按顶层逗号切分后的参数，仅 trim，不做进一步解析
    pub params: Vec<String>,
}

impl Method {
    pub fn new(name: impl Into<String>, params: Vec<String>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// 图中显示的标签: "name(a, b)"
    pub fn label(&self) -> String {
        format!("{}({})", self.name, self.params.join(", "))
    }
}

/// 属性 - 只有名称
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Attribute {
    pub name: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn label(&self) -> &str {
        &self.name
    }
}
