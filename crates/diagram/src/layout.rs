use lang::{Attribute, Method};

/// 布局常量
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// 每字符像素宽度
    pub char_width: u32,
    pub row_height: u32,
    /// 标题栏高度
    pub header_height: u32,
    /// 类框之间的纵向间距
    pub box_gap: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            char_width: 7,
            row_height: 30,
            header_height: 30,
            box_gap: 100,
        }
    }
}

impl LayoutConfig {
    pub fn with_char_width(mut self, width: u32) -> Self {
        self.char_width = width;
        self
    }

    pub fn with_row_height(mut self, height: u32) -> Self {
        self.row_height = height;
        self
    }

    pub fn with_header_height(mut self, height: u32) -> Self {
        self.header_height = height;
        self
    }

    pub fn with_box_gap(mut self, gap: u32) -> Self {
        self.box_gap = gap;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Method,
    /// 无方法但有属性时插入的分隔线，不占行高
    Separator,
    Attribute,
}

/// 类框内的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub kind: RowKind,
    pub label: String,
    /// 相对类框顶部的偏移
    pub offset: u32,
}

/// 类框 - 每个被检查的文件一个
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassBox {
    pub title: String,
    pub methods: Vec<Method>,
    pub attributes: Vec<Attribute>,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub rows: Vec<Row>,
}

impl ClassBox {
    pub fn new(
        title: &str,
        methods: Vec<Method>,
        attributes: Vec<Attribute>,
        y: u32,
        config: &LayoutConfig,
    ) -> Self {
        let method_labels: Vec<String> = methods.iter().map(Method::label).collect();

        let longest = method_labels
            .iter()
            .map(|l| l.chars().count())
            .chain(attributes.iter().map(|a| a.label().chars().count()))
            .chain(std::iter::once(title.chars().count()))
            .max()
            .unwrap_or(0);
        let width = longest as u32 * config.char_width;

        let members = (methods.len() + attributes.len()) as u32;
        let height = config.row_height * members + config.header_height;

        let mut rows = Vec::with_capacity(methods.len() + attributes.len() + 1);
        let mut offset = config.header_height;

        for label in method_labels {
            rows.push(Row {
                kind: RowKind::Method,
                label,
                offset,
            });
            offset += config.row_height;
        }

        if methods.is_empty() && !attributes.is_empty() {
            rows.push(Row {
                kind: RowKind::Separator,
                label: String::new(),
                offset,
            });
        }

        for attribute in &attributes {
            rows.push(Row {
                kind: RowKind::Attribute,
                label: attribute.label().to_string(),
                offset,
            });
            offset += config.row_height;
        }

        Self {
            title: title.to_string(),
            methods,
            attributes,
            y,
            width,
            height,
            rows,
        }
    }
}

/// 完整类图
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagramDocument {
    pub boxes: Vec<ClassBox>,
}

impl DiagramDocument {
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }
}

/// 类框累加器 - 按顺序自上而下堆叠
#[derive(Debug, Clone)]
pub struct DiagramLayout {
    config: LayoutConfig,
    next_y: u32,
    boxes: Vec<ClassBox>,
}

impl DiagramLayout {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            next_y: 0,
            boxes: Vec::new(),
        }
    }

    pub fn push(&mut self, title: &str, methods: Vec<Method>, attributes: Vec<Attribute>) -> &ClassBox {
        let class_box = ClassBox::new(title, methods, attributes, self.next_y, &self.config);
        self.next_y += class_box.height + self.config.box_gap;
        self.boxes.push(class_box);
        &self.boxes[self.boxes.len() - 1]
    }

    pub fn finish(self) -> DiagramDocument {
        DiagramDocument { boxes: self.boxes }
    }
}

impl Default for DiagramLayout {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}
