//! diagram - 类图布局与 draw.io 文档生成
//!
//! 每个源文件对应一个类框，方法和属性逐行排列，类框自上而下堆叠

mod generator;
mod layout;
mod mxgraph;

pub use generator::{BaseArchive, DiagramError, DiagramGenerator, Envelope, Generation, Result};
pub use layout::{ClassBox, DiagramDocument, DiagramLayout, LayoutConfig, Row, RowKind};
pub use mxgraph::MxGraphWriter;
