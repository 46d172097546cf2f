//! draw.io (mxGraph) XML 输出

use crate::layout::{ClassBox, DiagramDocument, RowKind};
use std::collections::HashMap;
use std::path::Path;

const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<mxGraphModel dx="3312" dy="1989" grid="1" gridSize="10" guides="1" tooltips="1" connect="1" arrows="1" fold="1" page="1" pageScale="1" pageWidth="827" pageHeight="1169" math="0" shadow="0">
  <root>
    <mxCell id="0" />
    <mxCell id="1" parent="0" />"#;

const FOOTER: &str = "  </root>\n</mxGraphModel>\n";

const CLASS_STYLE: &str = "swimlane;fontStyle=0;childLayout=stackLayout;horizontal=1;startSize=26;fillColor=none;horizontalStack=0;resizeParent=1;resizeParentMax=0;resizeLast=0;collapsible=1;marginBottom=0;";
const MEMBER_STYLE: &str = "text;html=1;strokeColor=none;fillColor=none;align=left;verticalAlign=middle;whiteSpace=wrap;rounded=0;";
const SEPARATOR_STYLE: &str = "line;strokeColor=none;fillColor=#000000;strokeWidth=3;";

/// 备用折叠框比类框窄 40px
const ALTERNATE_INSET: u32 = 40;

/// mxGraph 文档生成器
pub struct MxGraphWriter;

impl MxGraphWriter {
    /// 写入文件 (仅用于显式要求的调试输出)
    pub fn write(doc: &DiagramDocument, path: impl AsRef<Path>) -> std::io::Result<()> {
        std::fs::write(path, Self::render(doc))
    }

    /// 渲染完整文档
    pub fn render(doc: &DiagramDocument) -> String {
        let mut ids = IdAllocator::new();
        let mut lines = vec![HEADER.to_string()];

        for class_box in &doc.boxes {
            Self::render_box(class_box, &mut ids, &mut lines);
        }

        let mut xml = lines.join("\n");
        xml.push('\n');
        xml.push_str(FOOTER);
        xml
    }

    fn render_box(class_box: &ClassBox, ids: &mut IdAllocator, lines: &mut Vec<String>) {
        let class_id = ids.allocate(&class_box.title);
        let parent = Self::escape(&class_id);
        let width = class_box.width;

        lines.push(format!(
            r#"    <mxCell id="{}" value="{}" style="{}" parent="1" vertex="1">"#,
            parent,
            Self::escape(&class_box.title),
            CLASS_STYLE
        ));
        lines.push(format!(
            r#"      <mxGeometry x="0" y="{}" width="{}" height="{}" as="geometry">"#,
            class_box.y, width, class_box.height
        ));
        lines.push(format!(
            r#"        <mxRectangle x="0" y="{}" width="{}" height="30" as="alternateBounds" />"#,
            class_box.y,
            width.saturating_sub(ALTERNATE_INSET)
        ));
        lines.push("      </mxGeometry>".to_string());
        lines.push("    </mxCell>".to_string());

        for row in &class_box.rows {
            let (id, style, height) = match row.kind {
                RowKind::Separator => (
                    ids.allocate(&format!("{}_separador", class_id)),
                    SEPARATOR_STYLE,
                    1,
                ),
                RowKind::Method | RowKind::Attribute => (
                    ids.allocate(&format!("{}_{}", row.label, class_id)),
                    MEMBER_STYLE,
                    30,
                ),
            };

            lines.push(format!(
                r#"    <mxCell id="{}" value="{}" style="{}" parent="{}" vertex="1">"#,
                Self::escape(&id),
                Self::escape(&row.label),
                style,
                parent
            ));
            lines.push(format!(
                r#"      <mxGeometry x="0" y="{}" width="{}" height="{}" as="geometry" />"#,
                row.offset, width, height
            ));
            lines.push("    </mxCell>".to_string());
        }
    }

    #[doc(hidden)]
    pub fn escape(value: &str) -> String {
        let mut out = String::with_capacity(value.len());
        for c in value.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\n' => out.push_str("&#10;"),
                _ => out.push(c),
            }
        }
        out
    }
}

/// 单个文档内的唯一 id 分配; 重复时追加 `_2`, `_3` ...
struct IdAllocator {
    seen: HashMap<String, usize>,
}

impl IdAllocator {
    fn new() -> Self {
        let mut seen = HashMap::new();
        // 结构单元
        seen.insert("0".to_string(), 1);
        seen.insert("1".to_string(), 1);
        Self { seen }
    }

    fn allocate(&mut self, base: &str) -> String {
        let mut count = self.seen.get(base).copied().unwrap_or(0);
        loop {
            count += 1;
            let candidate = if count == 1 {
                base.to_string()
            } else {
                format!("{}_{}", base, count)
            };
            if !self.seen.contains_key(&candidate) {
                self.seen.insert(base.to_string(), count);
                self.seen.insert(candidate.clone(), 1);
                return candidate;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{DiagramLayout, LayoutConfig};
    use lang::{Attribute, Method};

    fn sample() -> DiagramDocument {
        let mut layout = DiagramLayout::new(LayoutConfig::default());
        layout.push(
            "Foo.py",
            vec![Method::new("bar", vec!["x".into(), "y".into()])],
            vec![],
        );
        layout.push("Consts.py", vec![], vec![Attribute::new("LIMIT")]);
        layout.finish()
    }

    #[test]
    fn test_render_structure() {
        let xml = MxGraphWriter::render(&sample());
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains(r#"<mxCell id="0" />"#));
        assert!(xml.contains(r#"<mxCell id="1" parent="0" />"#));
        assert!(xml.trim_end().ends_with("</mxGraphModel>"));
    }

    #[test]
    fn test_render_class_and_member_cells() {
        let xml = MxGraphWriter::render(&sample());
        assert!(xml.contains(r#"<mxCell id="Foo.py" value="Foo.py" style="swimlane;"#));
        assert!(xml.contains(r#"<mxGeometry x="0" y="0" width="63" height="60" as="geometry">"#));
        assert!(xml.contains(r#"<mxRectangle x="0" y="0" width="23" height="30" as="alternateBounds" />"#));
        assert!(xml.contains(r#"<mxCell id="bar(x, y)_Foo.py" value="bar(x, y)""#));
        assert!(xml.contains(r#"parent="Foo.py" vertex="1">"#));
        assert!(xml.contains(r#"<mxGeometry x="0" y="30" width="63" height="30" as="geometry" />"#));
    }

    #[test]
    fn test_render_separator_for_attribute_only_box() {
        let xml = MxGraphWriter::render(&sample());
        assert!(xml.contains(r#"<mxCell id="Consts.py_separador" value="""#));
        assert!(xml.contains(r#"height="1" as="geometry" />"#));
        assert!(xml.contains(r#"<mxCell id="LIMIT_Consts.py" value="LIMIT""#));
        // 第二个类框: 0 + 60 + 100
        assert!(xml.contains(r#"<mxGeometry x="0" y="160" width="63" height="60" as="geometry">"#));
    }

    #[test]
    fn test_render_empty_document() {
        let xml = MxGraphWriter::render(&DiagramDocument::default());
        assert_eq!(xml.matches("<mxCell").count(), 2);
    }

    #[test]
    fn test_duplicate_member_ids_disambiguated() {
        let mut layout = DiagramLayout::default();
        layout.push(
            "A.java",
            vec![Method::new("run", vec![]), Method::new("run", vec![])],
            vec![],
        );
        let xml = MxGraphWriter::render(&layout.finish());
        assert!(xml.contains(r#"id="run()_A.java""#));
        assert!(xml.contains(r#"id="run()_A.java_2""#));
    }

    #[test]
    fn test_duplicate_class_titles_disambiguated() {
        let mut layout = DiagramLayout::default();
        layout.push("__init__.py", vec![Method::new("f", vec![])], vec![]);
        layout.push("__init__.py", vec![Method::new("f", vec![])], vec![]);
        let xml = MxGraphWriter::render(&layout.finish());
        assert!(xml.contains(r#"<mxCell id="__init__.py_2" value="__init__.py""#));
        assert!(xml.contains(r#"id="f()___init__.py_2" value="f()" style="text;"#));
        assert!(xml.contains(r#"parent="__init__.py_2""#));
    }

    #[test]
    fn test_escape_special_chars() {
        assert_eq!(
            MxGraphWriter::escape(r#"map(m: Map<K, V>, s = "x" & y)"#),
            "map(m: Map&lt;K, V&gt;, s = &quot;x&quot; &amp; y)"
        );
    }

    #[test]
    fn test_id_allocator() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.allocate("a"), "a");
        assert_eq!(ids.allocate("a"), "a_2");
        assert_eq!(ids.allocate("a_2"), "a_2_2");
        assert_eq!(ids.allocate("a"), "a_3");
        assert_eq!(ids.allocate("1"), "1_2");
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diagram.xml");
        MxGraphWriter::write(&sample(), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Foo.py"));
    }
}
