use regex::Regex;

/// 参数捕获: 允许两层嵌套括号, 例如 `f(x=g(h(1)), y)`
///
/// 只用于签名后必须跟 `{` 等上下文的模式; 以 `(` 结尾的模式由提取器向后找配对括号。
macro_rules! params {
    () => {
        r"(?P<params>(?:[^()]|\((?:[^()]|\([^()]*\))*\))*)"
    };
}

/// 通用赋值: `name = ...`, 排除 `==` 和 `=>`
macro_rules! assign {
    () => {
        r"\b(?P<name>[A-Za-z_]\w*)\s*=(?:[^=>]|$)"
    };
}

/// 标记语言属性: `name="..."`
macro_rules! markup_attr {
    () => {
        r#"\b(?P<name>[A-Za-z_][\w:-]*)\s*=\s*["']"#
    };
}

/// 静态语言定义 (未编译的模式)
#[derive(Debug, Clone, Copy)]
pub struct LanguageDef {
    pub id: &'static str,
    pub name: &'static str,
    pub extensions: &'static [&'static str],
    pub method: Option<&'static str>,
    pub attribute: Option<&'static str>,
}

/// 内置语言表, 顺序即注册表迭代顺序
const BUILTIN: &[LanguageDef] = &[
    LanguageDef {
        id: "js",
        name: "JavaScript",
        extensions: &[".js", ".mjs", ".cjs"],
        method: Some(r"\b(?:async\s+)?function(?:\s*\*\s*|\s+)(?P<name>[A-Za-z_$][\w$]*)\s*\("),
        attribute: Some(r"\b(?:const|let|var)\s+(?P<name>[A-Za-z_][\w$]*)\s*="),
    },
    LanguageDef {
        id: "jsx",
        name: "JSX",
        extensions: &[".jsx"],
        method: Some(r"\b(?:async\s+)?function(?:\s*\*\s*|\s+)(?P<name>[A-Za-z_$][\w$]*)\s*\("),
        attribute: Some(r"\b(?P<name>[A-Za-z_]\w*)\s*=\s*\{"),
    },
    LanguageDef {
        id: "ts",
        name: "TypeScript",
        extensions: &[".ts", ".tsx"],
        method: Some(r"\b(?:(?:async\s+)?function\s+|(?:const|let|var)\s+)(?P<name>[A-Za-z_$][\w$]*)\s*(?:<[^>]*>)?\s*(?:=\s*(?:async\s*)?)?\("),
        attribute: Some(r"\b(?P<name>[A-Za-z_][\w$]*)\??\s*:(?:[^:]|$)"),
    },
    LanguageDef {
        id: "java",
        name: "Java",
        extensions: &[".java"],
        method: Some(r"\b(?:public|private|protected)\s+(?:(?:static|final|abstract|synchronized)\s+)*(?:<[^>]*>\s+)?[\w<>\[\],.?]+\s+(?P<name>[A-Za-z_]\w*)\s*\("),
        attribute: Some(r"\b(?P<name>[A-Za-z_][\w<>\[\]]*\s+[A-Za-z_]\w*)\s*;"),
    },
    LanguageDef {
        id: "c",
        name: "C",
        extensions: &[".c", ".h"],
        method: Some(concat!(
            r"\b[A-Za-z_]\w*[\s\*]+(?P<name>[A-Za-z_]\w*)\s*\(",
            params!(),
            r"\)\s*\{"
        )),
        attribute: Some(assign!()),
    },
    LanguageDef {
        id: "cpp",
        name: "C++",
        extensions: &[".cpp", ".cc", ".cxx", ".hpp", ".hh"],
        method: Some(r"\b[\w:<>]+[\s\*&]+(?P<name>[A-Za-z_]\w*::~?[A-Za-z_]\w*)\s*\("),
        attribute: Some(assign!()),
    },
    LanguageDef {
        id: "cs",
        name: "C#",
        extensions: &[".cs"],
        method: Some(r"\b(?:public|private|protected|internal)\s+(?:(?:static|virtual|override|abstract|sealed|async|new)\s+)*[\w<>\[\],.?]+\s+(?P<name>[A-Za-z_]\w*)\s*\("),
        attribute: Some(assign!()),
    },
    LanguageDef {
        id: "py",
        name: "Python",
        extensions: &[".py"],
        method: Some(r"\bdef\s+(?P<name>[A-Za-z_]\w*)\s*\("),
        attribute: Some(assign!()),
    },
    LanguageDef {
        id: "rb",
        name: "Ruby",
        extensions: &[".rb"],
        method: Some(r"\bdef\s+(?:self\.)?(?P<name>[A-Za-z_]\w*[?!=]?)(?:\s*\()?"),
        attribute: Some(assign!()),
    },
    LanguageDef {
        id: "go",
        name: "Go",
        extensions: &[".go"],
        method: Some(r"\bfunc\s+(?:\([^)]*\)\s*)?(?P<name>[A-Za-z_]\w*)\s*(?:\[[^\]]*\])?\("),
        attribute: Some(r"\b(?P<name>[A-Za-z_]\w*)\s*:?=(?:[^=]|$)"),
    },
    LanguageDef {
        id: "swift",
        name: "Swift",
        extensions: &[".swift"],
        method: Some(r"\bfunc\s+(?P<name>[A-Za-z_]\w*)\s*(?:<[^>]*>)?\s*\("),
        attribute: Some(r"\b(?:var|let)\s+(?P<name>[A-Za-z_]\w*)"),
    },
    LanguageDef {
        id: "kt",
        name: "Kotlin",
        extensions: &[".kt", ".kts"],
        method: Some(r"\bfun\s+(?:<[^>]*>\s*)?(?:[\w.]+\.)?(?P<name>[A-Za-z_]\w*)\s*\("),
        attribute: Some(r"\b(?:val|var)\s+(?P<name>[A-Za-z_]\w*)"),
    },
    LanguageDef {
        id: "php",
        name: "PHP",
        extensions: &[".php"],
        method: Some(r"\b(?:(?:public|private|protected|static|final|abstract)\s+)*function\s+(?P<name>[A-Za-z_]\w*)\s*\("),
        attribute: Some(r"\$(?P<name>[A-Za-z_]\w*)\s*=(?:[^=>]|$)"),
    },
    LanguageDef {
        id: "rs",
        name: "Rust",
        extensions: &[".rs"],
        method: Some(r"\bfn\s+(?P<name>[A-Za-z_]\w*)\s*(?:<[^>]*>)?\s*\("),
        attribute: Some(r"\blet\s+(?:mut\s+)?(?P<name>[A-Za-z_]\w*)"),
    },
    LanguageDef {
        id: "scala",
        name: "Scala",
        extensions: &[".scala"],
        method: Some(r"\bdef\s+(?P<name>[A-Za-z_]\w*)\s*(?:\[[^\]]*\])?\s*\("),
        attribute: Some(r"\b(?:val|var)\s+(?P<name>[A-Za-z_]\w*)"),
    },
    LanguageDef {
        id: "dart",
        name: "Dart",
        extensions: &[".dart"],
        method: Some(concat!(
            r"\b[A-Za-z_][\w<>?]*\s+(?P<name>[A-Za-z_]\w*)\s*\(",
            params!(),
            r"\)\s*(?:async\s*)?\{"
        )),
        attribute: Some(assign!()),
    },
    LanguageDef {
        id: "lua",
        name: "Lua",
        extensions: &[".lua"],
        method: Some(r"\bfunction\s+(?:[\w.]+[.:])?(?P<name>[A-Za-z_]\w*)\s*\("),
        attribute: Some(assign!()),
    },
    LanguageDef {
        id: "sh",
        name: "Shell",
        extensions: &[".sh", ".bash"],
        method: Some(r"(?m)^[ \t]*(?:function\s+)?(?P<name>[A-Za-z_][\w-]*)\s*\(\s*\)"),
        attribute: Some(r"(?m)^[ \t]*(?:export\s+|local\s+)?(?P<name>[A-Za-z_]\w*)="),
    },
    LanguageDef {
        id: "ex",
        name: "Elixir",
        extensions: &[".ex", ".exs"],
        method: Some(r"\bdefp?\s+(?P<name>[a-z_]\w*[?!]?)\s*\("),
        attribute: Some(assign!()),
    },
    LanguageDef {
        id: "pl",
        name: "Perl",
        extensions: &[".pl", ".pm"],
        method: Some(r"\bsub\s+(?P<name>[A-Za-z_]\w*)\s*\{"),
        attribute: Some(r"\b(?:my|our|local)\s+[$@%](?P<name>[A-Za-z_]\w*)"),
    },
    LanguageDef {
        id: "r",
        name: "R",
        extensions: &[".r", ".R"],
        method: Some(r"(?P<name>[A-Za-z_.][\w.]*)\s*(?:<-|=)\s*function\s*\("),
        attribute: Some(r"(?P<name>[A-Za-z_.][\w.]*)\s*<-"),
    },
    LanguageDef {
        id: "hs",
        name: "Haskell",
        extensions: &[".hs"],
        method: Some(r"(?m)^(?P<name>[a-z_][\w']*)\s*::"),
        attribute: None,
    },
    LanguageDef {
        id: "m",
        name: "Objective-C",
        extensions: &[".m", ".mm"],
        method: Some(r"(?m)^[ \t]*[-+]\s*\([^)]*\)\s*(?P<name>[A-Za-z_]\w*)"),
        attribute: Some(r"@property\s*(?:\([^)]*\)\s*)?[\w<>]+\s*\*?\s*(?P<name>[A-Za-z_]\w*)\s*;"),
    },
    LanguageDef {
        id: "css",
        name: "CSS",
        extensions: &[".css"],
        method: Some(r"\.(?P<name>-?[A-Za-z_][\w-]*)\s*\{"),
        attribute: Some(r"(?P<name>[a-z-]+)\s*:\s*[^;{}]+;"),
    },
    LanguageDef {
        id: "scss",
        name: "SCSS",
        extensions: &[".scss"],
        method: Some(r"\.(?P<name>-?[A-Za-z_][\w-]*)\s*\{"),
        attribute: Some(r"(?P<name>[a-z-]+)\s*:\s*[^;{}]+;"),
    },
    LanguageDef {
        id: "less",
        name: "Less",
        extensions: &[".less"],
        method: Some(r"\.(?P<name>-?[A-Za-z_][\w-]*)\s*\{"),
        attribute: Some(r"(?P<name>[a-z-]+)\s*:\s*[^;{}]+;"),
    },
    LanguageDef {
        id: "sql",
        name: "SQL",
        extensions: &[".sql"],
        method: Some(r"(?i)\bcreate\s+(?:or\s+replace\s+)?(?:function|procedure)\s+(?P<name>[\w.]+)\s*\("),
        attribute: None,
    },
    LanguageDef {
        id: "coffee",
        name: "CoffeeScript",
        extensions: &[".coffee"],
        method: Some(concat!(
            r"(?:[A-Za-z_$][\w$]*\.)*(?P<name>[A-Za-z_$][\w$]*)\s*[=:]\s*\(",
            params!(),
            r"\)\s*[-=]>"
        )),
        attribute: Some(assign!()),
    },
    LanguageDef {
        id: "erl",
        name: "Erlang",
        extensions: &[".erl", ".hrl"],
        method: Some(concat!(
            r"(?m)^(?P<name>[a-z]\w*)\s*\(",
            params!(),
            r"\)\s*(?:when\b[^\n]*?)?->"
        )),
        attribute: Some(r"\b(?P<name>[A-Z_]\w*)\s*=(?:[^=:<]|$)"),
    },
    LanguageDef {
        id: "cr",
        name: "Crystal",
        extensions: &[".cr"],
        method: Some(r"\bdef\s+(?:self\.)?(?P<name>[A-Za-z_]\w*[?!=]?)(?:\s*\()?"),
        attribute: Some(assign!()),
    },
    LanguageDef {
        id: "lisp",
        name: "Lisp",
        extensions: &[".lisp", ".lsp", ".cl", ".el"],
        method: Some(r"\((?:defun|defmacro|defmethod|defgeneric)\s+(?P<name>[^\s()]+)\s*\("),
        attribute: Some(r"\((?:defvar|defparameter|defconstant)\s+(?P<name>[^\s()]+)"),
    },
    LanguageDef {
        id: "vim",
        name: "Vim script",
        extensions: &[".vim"],
        method: Some(r"\bfu(?:nction)?!?\s+(?:[sgbl]:)?(?P<name>[A-Za-z_][\w#.]*)\s*\("),
        attribute: Some(r"\blet\s+(?:[gsbwtlav]:)?(?P<name>[A-Za-z_]\w*)\s*[-+.]?="),
    },
    LanguageDef {
        id: "nim",
        name: "Nim",
        extensions: &[".nim", ".nims"],
        method: Some(r"\b(?:proc|func|method|iterator)\s+(?P<name>[A-Za-z_]\w*)\*?\s*(?:\[[^\]]*\])?\s*\("),
        attribute: Some(assign!()),
    },
    LanguageDef {
        id: "pas",
        name: "Pascal",
        extensions: &[".pas", ".pp", ".dpr"],
        method: Some(r"(?i)\b(?:procedure|function)\s+(?:[A-Za-z_]\w*\.)?(?P<name>[A-Za-z_]\w*)\s*(?:\((?P<params>[^)]*)\))?\s*[:;]"),
        attribute: Some(r"\b(?P<name>[A-Za-z_]\w*)\s*:="),
    },
    LanguageDef {
        id: "forth",
        name: "Forth",
        extensions: &[".fth", ".4th", ".forth"],
        method: Some(r"(?m)^[ \t]*:[ \t]+(?P<name>\S+)"),
        attribute: Some(r"(?i)\b(?:2?variable|2?constant|value)\s+(?P<name>\S+)"),
    },
    LanguageDef {
        id: "ml",
        name: "OCaml",
        extensions: &[".ml", ".mli"],
        method: Some(r"\blet\s+(?:rec\s+)?(?P<name>[a-z_][\w']*)\s*=\s*fun(?:ction)?\b"),
        attribute: Some(r"\blet\s+(?:rec\s+)?(?P<name>[a-z_][\w']*)\s*="),
    },
    LanguageDef {
        id: "fs",
        name: "F#",
        extensions: &[".fs", ".fsx", ".fsi"],
        method: Some(r"\b(?:let|member|static\s+member)\s+(?:[A-Za-z_]\w*\.)?(?P<name>[A-Za-z_]\w*)\s*(?:=\s*fun\b|\()"),
        attribute: Some(r"\b(?:let|val)\s+(?:mutable\s+)?(?P<name>[A-Za-z_]\w*)\s*(?::[^=\n]*)?="),
    },
    LanguageDef {
        id: "md",
        name: "Markdown",
        extensions: &[".md", ".markdown"],
        method: Some(r"(?m)^[ \t]*#{1,6}[ \t]+(?P<name>[^\n]*?)[ \t#]*$"),
        attribute: Some(r"(?m)^(?P<name>[A-Za-z_][\w-]*):(?:[ \t]|$)"),
    },
    LanguageDef {
        id: "html",
        name: "HTML",
        extensions: &[".html", ".htm"],
        method: Some(r"<\s*(?P<name>[A-Za-z][\w-]*)[^>]*>"),
        attribute: Some(markup_attr!()),
    },
    LanguageDef {
        id: "xml",
        name: "XML",
        extensions: &[".xml"],
        method: Some(r"<\s*(?P<name>[A-Za-z_][\w:.-]*)[^>]*>"),
        attribute: Some(markup_attr!()),
    },
    LanguageDef {
        id: "json",
        name: "JSON",
        extensions: &[".json"],
        method: Some(r#""(?P<name>[^"\\\n]+)"\s*:\s*\{"#),
        attribute: Some(r#""(?P<name>[^"\\\n]+)"\s*:\s*[^\s{]"#),
    },
    LanguageDef {
        id: "yaml",
        name: "YAML",
        extensions: &[".yaml", ".yml"],
        method: Some(r"(?m)^[ \t-]*(?P<name>[A-Za-z_][\w.-]*)[ \t]*:[ \t]*$"),
        attribute: Some(r"(?m)^[ \t-]*(?P<name>[A-Za-z_][\w.-]*)[ \t]*:[ \t]+[^\s#]"),
    },
    LanguageDef {
        id: "toml",
        name: "TOML",
        extensions: &[".toml"],
        method: Some(r"(?m)^[ \t]*\[\[?[ \t]*(?P<name>[^\]\s]+)[ \t]*\]"),
        attribute: Some(r"(?m)^[ \t]*(?P<name>[A-Za-z0-9_.-]+)[ \t]*="),
    },
    LanguageDef {
        id: "haml",
        name: "Haml",
        extensions: &[".haml"],
        method: Some(r"%(?P<name>[A-Za-z][\w-]*)"),
        attribute: Some(markup_attr!()),
    },
    LanguageDef {
        id: "hbs",
        name: "Handlebars",
        extensions: &[".hbs", ".handlebars"],
        method: Some(r"\{\{\{?\s*(?P<name>[A-Za-z_][\w.]*)\s*\}?\}\}"),
        attribute: Some(markup_attr!()),
    },
    LanguageDef {
        id: "jade",
        name: "Jade",
        extensions: &[".jade", ".pug"],
        method: Some(r"(?m)^[ \t]*(?:mixin\s+)?(?P<name>[A-Za-z][\w-]*)(?:[.#][\w-]+)*\("),
        attribute: Some(markup_attr!()),
    },
    LanguageDef {
        id: "slim",
        name: "Slim",
        extensions: &[".slim"],
        method: Some(r"(?m)^[ \t]*(?P<name>[A-Za-z][\w-]*)(?:[.#][\w-]+)*\("),
        attribute: Some(markup_attr!()),
    },
    LanguageDef {
        id: "ejs",
        name: "EJS",
        extensions: &[".ejs"],
        method: Some(r"<%[=-]?\s*(?P<name>[A-Za-z_]\w*)\s*-?%>"),
        attribute: Some(markup_attr!()),
    },
    LanguageDef {
        id: "cshtml",
        name: "Razor",
        extensions: &[".cshtml"],
        method: Some(concat!(
            r"\b[\w<>\[\].?]+\s+(?P<name>[A-Za-z_]\w*)\s*\(",
            params!(),
            r"\)\s*\{"
        )),
        attribute: Some(assign!()),
    },
];

/// 编译后的语言规格
#[derive(Debug, Clone)]
pub struct LanguageSpec {
    /// 短标识: "py", "java"
    pub id: &'static str,
    pub name: &'static str,
    /// 带点后缀: ".py"
    pub extensions: &'static [&'static str],
    /// None 表示不尝试提取方法
    pub method_pattern: Option<Regex>,
    /// None 表示不尝试提取属性
    pub attribute_pattern: Option<Regex>,
}

impl LanguageSpec {
    /// 编译定义; 非法模式记录警告并视为缺失
    pub fn compile(def: &LanguageDef) -> Self {
        Self {
            id: def.id,
            name: def.name,
            extensions: def.extensions,
            method_pattern: def.method.and_then(|p| compile_pattern(def.id, "method", p)),
            attribute_pattern: def
                .attribute
                .and_then(|p| compile_pattern(def.id, "attribute", p)),
        }
    }

    pub fn matches_file(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| file_name.ends_with(ext))
    }
}

fn compile_pattern(id: &str, kind: &str, pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!("Invalid {} pattern for {}: {}", kind, id, e);
            None
        }
    }
}

/// 语言模式注册表
///
/// 启动时构建一次，之后只读，以引用传给提取器和遍历器。
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    specs: Vec<LanguageSpec>,
}

impl LanguageRegistry {
    /// 内置语言表
    pub fn builtin() -> Self {
        Self::from_defs(BUILTIN)
    }

    pub fn from_defs(defs: &[LanguageDef]) -> Self {
        Self {
            specs: defs.iter().map(LanguageSpec::compile).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// 按标识查找 (不区分大小写)
    pub fn get(&self, id: &str) -> Option<&LanguageSpec> {
        self.specs.iter().find(|s| s.id.eq_ignore_ascii_case(id))
    }

    /// 按标识或显示名查找: "py" / "PY" / "python"
    pub fn resolve(&self, name: &str) -> Option<&LanguageSpec> {
        self.get(name)
            .or_else(|| self.specs.iter().find(|s| s.name.eq_ignore_ascii_case(name)))
    }

    /// 请求的语言，按注册表顺序; 未知标识被忽略
    pub fn selected<'a, S: AsRef<str>>(
        &'a self,
        languages: &'a [S],
    ) -> impl Iterator<Item = &'a LanguageSpec> + 'a {
        self.specs.iter().filter(move |spec| {
            languages
                .iter()
                .any(|l| spec.id.eq_ignore_ascii_case(l.as_ref()))
        })
    }

    /// 文件名是否属于任一请求语言
    pub fn matches_file<S: AsRef<str>>(&self, file_name: &str, languages: &[S]) -> bool {
        self.selected(languages).any(|spec| spec.matches_file(file_name))
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_patterns_all_compile() {
        for def in BUILTIN {
            let spec = LanguageSpec::compile(def);
            assert_eq!(spec.method_pattern.is_some(), def.method.is_some(), "{}", def.id);
            assert_eq!(spec.attribute_pattern.is_some(), def.attribute.is_some(), "{}", def.id);
        }

        let registry = LanguageRegistry::builtin();
        let ids: Vec<_> = registry.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec![
                "js", "jsx", "ts", "java", "c", "cpp", "cs", "py", "rb", "go", "swift", "kt",
                "php", "rs", "scala", "dart", "lua", "sh", "ex", "pl", "r", "hs", "m", "css",
                "scss", "less", "sql", "coffee", "erl", "cr", "lisp", "vim", "nim", "pas",
                "forth", "ml", "fs", "md", "html", "xml", "json", "yaml", "toml", "haml", "hbs",
                "jade", "slim", "ejs", "cshtml",
            ]
        );
    }

    #[test]
    fn test_extensions_do_not_overlap() {
        let registry = LanguageRegistry::builtin();
        for file in ["page.html", "view.cshtml", "lib.fs", "words.fth", "main.ml", "app.cr"] {
            let owners: Vec<_> = registry
                .iter()
                .filter(|s| s.matches_file(file))
                .map(|s| s.id)
                .collect();
            assert_eq!(owners.len(), 1, "{} -> {:?}", file, owners);
        }
    }

    #[test]
    fn test_builtin_ids_unique() {
        let registry = LanguageRegistry::builtin();
        let mut ids: Vec<_> = registry.iter().map(|s| s.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), registry.len());
    }

    #[test]
    fn test_get_case_insensitive() {
        let registry = LanguageRegistry::builtin();
        assert_eq!(registry.get("PY").map(|s| s.id), Some("py"));
        assert_eq!(registry.get("java").map(|s| s.name), Some("Java"));
        assert!(registry.get("cobol").is_none());
    }

    #[test]
    fn test_resolve_by_display_name() {
        let registry = LanguageRegistry::builtin();
        assert_eq!(registry.resolve("python").map(|s| s.id), Some("py"));
        assert_eq!(registry.resolve("TypeScript").map(|s| s.id), Some("ts"));
        assert_eq!(registry.resolve("rs").map(|s| s.id), Some("rs"));
        assert_eq!(registry.resolve("yaml").map(|s| s.id), Some("yaml"));
        assert_eq!(registry.resolve("CoffeeScript").map(|s| s.id), Some("coffee"));
    }

    #[test]
    fn test_selected_follows_registry_order() {
        let registry = LanguageRegistry::builtin();
        let requested = ["py", "js", "unknown"];
        let ids: Vec<_> = registry.selected(&requested).map(|s| s.id).collect();
        assert_eq!(ids, vec!["js", "py"]);
    }

    #[test]
    fn test_matches_file_uses_dotted_suffix() {
        let registry = LanguageRegistry::builtin();
        assert!(registry.matches_file("Foo.py", &["py"]));
        assert!(!registry.matches_file("happy", &["py"]));
        assert!(!registry.matches_file("Foo.py", &["java"]));
        assert!(registry.matches_file("App.tsx", &["ts"]));
    }

    #[test]
    fn test_invalid_pattern_treated_as_absent() {
        let defs = [LanguageDef {
            id: "bad",
            name: "Bad",
            extensions: &[".bad"],
            method: Some(r"(unclosed"),
            attribute: Some(r"\b(?P<name>\w+)\s*="),
        }];
        let registry = LanguageRegistry::from_defs(&defs);
        let spec = registry.get("bad").unwrap();
        assert!(spec.method_pattern.is_none());
        assert!(spec.attribute_pattern.is_some());
    }

    #[test]
    fn test_haskell_has_no_attribute_pattern() {
        let registry = LanguageRegistry::builtin();
        assert!(registry.get("hs").unwrap().attribute_pattern.is_none());
    }
}
