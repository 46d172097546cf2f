//! lang - 语言模式注册表与结构提取
//!
//! 基于正则的启发式提取，不是真正的解析器：不构建 AST，允许误报和漏报。

mod extract;
mod registry;
mod types;

pub use extract::{extract_attributes, extract_methods, is_reserved, split_params, Extractor};
pub use registry::{LanguageDef, LanguageRegistry, LanguageSpec};
pub use types::{Attribute, Method};
