use crate::registry::LanguageRegistry;
use crate::types::{Attribute, Method};
use regex::Captures;
use std::collections::HashSet;

/// 保留字 - 属性候选中任一 token 命中即丢弃
const RESERVED_WORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "if", "implements", "import", "instanceof", "int", "interface", "long", "native", "new",
    "package", "private", "protected", "public", "return", "short", "static", "strictfp", "super",
    "switch", "synchronized", "this", "throw", "throws", "transient", "try", "void", "volatile",
    "while", "true", "false", "null",
];

/// 候选是否包含保留字 (按空白切分后逐个比较)
pub fn is_reserved(candidate: &str) -> bool {
    candidate
        .split_whitespace()
        .any(|token| RESERVED_WORDS.contains(&token))
}

/// 按顶层逗号切分参数文本
///
/// `()`, `[]`, `{}` 内的逗号不切分; `<` 紧跟标识符且后面不是数字时按泛型括号处理,
/// 泛型括号最终未闭合则退回为比较运算符重新切分。空 token 丢弃。
pub fn split_params(raw: &str) -> Vec<String> {
    split_top_level(raw, true)
        .or_else(|| split_top_level(raw, false))
        .unwrap_or_default()
}

/// `generics` 为 true 且尖括号未闭合时返回 None
fn split_top_level(raw: &str, generics: bool) -> Option<Vec<String>> {
    let mut params = Vec::new();
    let mut depth: usize = 0;
    let mut angle: usize = 0;
    let mut current = String::new();
    let mut prev: Option<char> = None;
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            '<' if generics && opens_generic(prev, chars.peek().copied()) => angle += 1,
            '>' if angle > 0 && !matches!(prev, Some('-' | '=')) => angle -= 1,
            ',' if depth == 0 && angle == 0 => {
                push_param(&mut params, &current);
                current.clear();
                prev = Some(c);
                continue;
            }
            _ => {}
        }
        current.push(c);
        prev = Some(c);
    }

    if angle > 0 {
        return None;
    }
    push_param(&mut params, &current);
    Some(params)
}

fn opens_generic(prev: Option<char>, next: Option<char>) -> bool {
    let after_ident = matches!(prev, Some(p) if p.is_alphanumeric() || p == '_' || p == ':');
    let before_type = !matches!(next, Some(n) if n.is_ascii_digit() || n.is_whitespace() || n == '=');
    after_ident && before_type
}

fn push_param(params: &mut Vec<String>, raw: &str) {
    let token = raw.trim();
    if !token.is_empty() {
        params.push(token.to_string());
    }
}

/// `name` 捕获组，没有则取整个匹配
fn member_name<'t>(caps: &Captures<'t>) -> &'t str {
    caps.name("name")
        .or_else(|| caps.get(0))
        .map(|m| m.as_str().trim())
        .unwrap_or_default()
}

/// 参数文本: 优先取 `params` 捕获组; 模式以 `(` 结尾时向后找配对的 `)`
fn method_params(text: &str, caps: &Captures<'_>) -> Vec<String> {
    if let Some(params) = caps.name("params") {
        return split_params(params.as_str());
    }
    match caps.get(0) {
        Some(m) if m.as_str().ends_with('(') => enclosed(text, m.end())
            .map(split_params)
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// `start` 位于 `(` 之后; 返回到配对 `)` 之前的文本，未闭合返回 None
///
/// 双引号字符串内的括号不计数。
fn enclosed(text: &str, start: usize) -> Option<&str> {
    let rest = text.get(start..)?;
    let mut depth: usize = 1;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in rest.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&rest[..i]);
                }
            }
            _ => {}
        }
    }
    None
}

/// 提取方法签名
///
/// 按注册表顺序遍历请求语言，结果直接拼接，不跨语言去重。
pub fn extract_methods<S: AsRef<str>>(
    registry: &LanguageRegistry,
    text: &str,
    languages: &[S],
) -> Vec<Method> {
    let mut methods = Vec::new();

    for spec in registry.selected(languages) {
        let Some(pattern) = &spec.method_pattern else {
            continue;
        };

        for caps in pattern.captures_iter(text) {
            let name = member_name(&caps);
            if name.is_empty() {
                continue;
            }
            methods.push(Method::new(name, method_params(text, &caps)));
        }
    }

    methods
}

/// 提取属性名
///
/// 结果无重复，保持首次出现顺序；含保留字的候选被过滤。
pub fn extract_attributes<S: AsRef<str>>(
    registry: &LanguageRegistry,
    text: &str,
    languages: &[S],
) -> Vec<Attribute> {
    let mut seen = HashSet::new();
    let mut attributes = Vec::new();

    for spec in registry.selected(languages) {
        let Some(pattern) = &spec.attribute_pattern else {
            continue;
        };

        for caps in pattern.captures_iter(text) {
            let name = member_name(&caps)
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ");
            if name.is_empty() || is_reserved(&name) {
                continue;
            }
            if seen.insert(name.clone()) {
                attributes.push(Attribute::new(name));
            }
        }
    }

    attributes
}

/// 绑定注册表的提取器
#[derive(Debug, Clone, Copy)]
pub struct Extractor<'r> {
    registry: &'r LanguageRegistry,
}

impl<'r> Extractor<'r> {
    pub fn new(registry: &'r LanguageRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r LanguageRegistry {
        self.registry
    }

    pub fn methods<S: AsRef<str>>(&self, text: &str, languages: &[S]) -> Vec<Method> {
        extract_methods(self.registry, text, languages)
    }

    pub fn attributes<S: AsRef<str>>(&self, text: &str, languages: &[S]) -> Vec<Attribute> {
        extract_attributes(self.registry, text, languages)
    }
}
