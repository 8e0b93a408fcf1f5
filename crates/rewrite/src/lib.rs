pub mod collector;
pub mod jsx;

use indexmap::IndexMap;

// Re-exports
pub use collector::{GroupCollector, Replacement};

/// 支持的源文件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Js,
    Jsx,
    Ts,
    Tsx,
}

impl FileKind {
    /// 从文件名扩展名判断文件类型
    pub fn from_filename(filename: &str) -> Option<FileKind> {
        let (_, ext) = filename.rsplit_once('.')?;
        match ext {
            "js" => Some(FileKind::Js),
            "jsx" => Some(FileKind::Jsx),
            "ts" => Some(FileKind::Ts),
            "tsx" => Some(FileKind::Tsx),
            _ => None,
        }
    }
}

/// 改写错误类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteError {
    /// 文件类型不受支持。返回此错误时不产出任何改写结果，
    /// 调用方的文档保持原样。
    UnsupportedFile { filename: String },
}

impl std::fmt::Display for RewriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RewriteError::UnsupportedFile { filename } => write!(
                f,
                "Unsupported file type: {} (expected .js, .jsx, .ts or .tsx)",
                filename
            ),
        }
    }
}

impl std::error::Error for RewriteError {}

/// 改写选项
pub struct RewriteOptions {
    /// 分组结果多于一组时使用的合并函数名（默认 "clsx"）
    pub merge_helper: String,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            merge_helper: "clsx".to_string(),
        }
    }
}

/// 改写结果
#[derive(Debug)]
pub struct RewriteOutcome {
    /// 改写后的源码
    pub code: String,
    /// class 值映射（原始值 -> 替换后的值或表达式）
    pub rewrites: IndexMap<String, String>,
}

/// 改写 JS/TS/JSX/TSX 源码
///
/// 对传入文本做一次完整扫描，把每个 `className="..."` / `class="..."`
/// 的类列表替换为分组后的形式：恰好一组时沿用原属性语法，
/// 多组时改写为合并函数调用。选区还是整个文档由调用方决定，
/// 这里只处理传进来的文本。
///
/// # 示例
///
/// ```
/// use classwind_rewrite::{rewrite_source, RewriteOptions};
///
/// let source = r#"<div className="flex p-2 bg-red-500">x</div>"#;
/// let result = rewrite_source(source, "App.tsx", RewriteOptions::default()).unwrap();
///
/// assert_eq!(
///     result.code,
///     r#"<div className={clsx("p-2", "flex", "bg-red-500")}>x</div>"#
/// );
/// ```
pub fn rewrite_source(
    source: &str,
    filename: &str,
    options: RewriteOptions,
) -> Result<RewriteOutcome, RewriteError> {
    if FileKind::from_filename(filename).is_none() {
        return Err(RewriteError::UnsupportedFile {
            filename: filename.to_string(),
        });
    }

    let mut collector = GroupCollector::new(options.merge_helper);
    let code = jsx::rewrite_class_attributes(source, &mut collector);

    Ok(RewriteOutcome {
        code,
        rewrites: collector.into_rewrites(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_detection() {
        assert_eq!(FileKind::from_filename("App.js"), Some(FileKind::Js));
        assert_eq!(FileKind::from_filename("App.jsx"), Some(FileKind::Jsx));
        assert_eq!(FileKind::from_filename("App.ts"), Some(FileKind::Ts));
        assert_eq!(FileKind::from_filename("src/App.tsx"), Some(FileKind::Tsx));
        assert_eq!(FileKind::from_filename("style.css"), None);
        assert_eq!(FileKind::from_filename("Makefile"), None);
    }

    #[test]
    fn test_unsupported_file_is_recoverable() {
        let source = r#"<div className="flex p-2">x</div>"#;
        let result = rewrite_source(source, "style.css", RewriteOptions::default());

        assert_eq!(
            result.unwrap_err(),
            RewriteError::UnsupportedFile {
                filename: "style.css".to_string()
            }
        );
    }

    #[test]
    fn test_error_message() {
        let err = RewriteError::UnsupportedFile {
            filename: "notes.md".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unsupported file type: notes.md (expected .js, .jsx, .ts or .tsx)"
        );
    }

    #[test]
    fn test_rewrite_basic() {
        let source = r#"export default function App() {
    return <div className="flex p-2 bg-red-500">Hello</div>;
}"#;

        let result = rewrite_source(source, "App.tsx", RewriteOptions::default()).unwrap();

        assert!(result
            .code
            .contains(r#"className={clsx("p-2", "flex", "bg-red-500")}"#));
        assert_eq!(result.rewrites.len(), 1);
        assert_eq!(
            result.rewrites["flex p-2 bg-red-500"],
            r#"clsx("p-2", "flex", "bg-red-500")"#
        );
    }

    #[test]
    fn test_rewrite_single_group_keeps_syntax() {
        let source = r#"<span className="text-sm font-bold">x</span>"#;
        let result = rewrite_source(source, "App.jsx", RewriteOptions::default()).unwrap();

        assert_eq!(result.code, source);
        assert_eq!(result.rewrites["text-sm font-bold"], "text-sm font-bold");
    }

    #[test]
    fn test_rewrite_custom_merge_helper() {
        let source = r#"<div className="flex p-2">x</div>"#;
        let options = RewriteOptions {
            merge_helper: "cn".to_string(),
        };
        let result = rewrite_source(source, "App.tsx", options).unwrap();

        assert!(result.code.contains(r#"className={cn("p-2", "flex")}"#));
    }

    #[test]
    fn test_rewrite_repeated_values_grouped_once() {
        let source = r#"
            <p className="flex p-2">A</p>
            <p className="flex p-2">B</p>
        "#;
        let result = rewrite_source(source, "App.tsx", RewriteOptions::default()).unwrap();

        assert_eq!(result.rewrites.len(), 1);
        assert_eq!(result.code.matches("clsx(").count(), 2);
    }

    #[test]
    fn test_rewrite_no_class_attributes() {
        let source = r#"const x = 1;"#;
        let result = rewrite_source(source, "util.ts", RewriteOptions::default()).unwrap();

        assert_eq!(result.code, source);
        assert!(result.rewrites.is_empty());
    }
}
