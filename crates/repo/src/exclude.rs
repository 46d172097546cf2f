//! 排除策略

/// 约定俗成的非源码目录/文件名 (依赖、构建产物、测试、文档、VCS 与工具配置)
pub const EXCLUDED_NAMES: &[&str] = &[
    "node_modules",
    "build",
    "dist",
    "coverage",
    "lib",
    "test",
    "tests",
    "demo",
    "docs",
    "doc",
    "tmp",
    "temp",
    "vendor",
    "assets",
    "images",
    "img",
    "font",
    "lock",
    "log",
    "gitignore",
    "editorconfig",
    "eslintrc",
    "eslintignore",
    "prettierrc",
    "prettierignore",
    "babelrc",
    "babelignore",
    "tsconfig",
    "tsconfigignore",
    "dockerignore",
    "dockerfile",
    "gitattributes",
    "gitkeep",
    "gitmodules",
    "gitpod",
    "gitpodignore",
    "gitpod.yml",
    "gitpod.dockerfile",
    "gitpod.Dockerfile",
    "gitpod.dockerignore",
    ".idea",
    ".vscode",
    ".github",
    ".gradle",
];

/// 名称是否在排除集中 (大小写敏感, 精确匹配)
pub fn is_excluded_name(name: &str) -> bool {
    EXCLUDED_NAMES.contains(&name)
}
