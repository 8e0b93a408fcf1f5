use serde::{Deserialize, Serialize};

/// 分类类别 —— 声明顺序即输出顺序契约
///
/// 规则表按这个顺序求值，输出分组也按这个顺序排列。
/// `Other` 永远排在最后，接住所有未被前面规则认领的类。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// 尺寸（w-4, h-full, min-w-0）
    Sizing,

    /// 间距（p-2, m-4, gap-2, space-x-1）
    Spacing,

    /// 排版（text-sm, font-bold, leading-6）
    Typography,

    /// 布局（flex, grid, hidden, items-center）
    Layout,

    /// 定位（absolute, top-0, z-10, translate-x-2）
    Positioning,

    /// 边框（border, rounded-lg, ring-2）
    Borders,

    /// 背景（bg-red-500, shadow-md, opacity-50）
    Background,

    /// 动画（transition, duration-150, animate-spin）
    Animation,

    /// 可访问性（sr-only, aria-hidden）
    Accessibility,

    /// 伪类/状态（带状态变体但工具根未被认领的类，以及 group/peer 标记）
    Pseudo,

    /// 兜底类别
    Other,
}

impl Category {
    /// 全部类别，按声明顺序
    pub const ALL: [Category; 11] = [
        Category::Sizing,
        Category::Spacing,
        Category::Typography,
        Category::Layout,
        Category::Positioning,
        Category::Borders,
        Category::Background,
        Category::Animation,
        Category::Accessibility,
        Category::Pseudo,
        Category::Other,
    ];

    /// 类别的规范名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sizing => "sizing",
            Category::Spacing => "spacing",
            Category::Typography => "typography",
            Category::Layout => "layout",
            Category::Positioning => "positioning",
            Category::Borders => "borders",
            Category::Background => "background",
            Category::Animation => "animation",
            Category::Accessibility => "accessibility",
            Category::Pseudo => "pseudo",
            Category::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 变体前缀类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant<'a> {
    /// 响应式断点（sm, md, lg, xl, 2xl, max-md 等）
    Responsive(&'a str),

    /// 状态/伪类（hover, focus, group-hover, peer-checked 等）
    State(&'a str),

    /// 其他自定义变体
    Custom(&'a str),
}

impl<'a> Variant<'a> {
    /// 从字符串推断变体类型
    pub fn from_str(s: &'a str) -> Self {
        // 响应式断点: sm, md, lg, xl, 2xl, max-sm, max-md, etc.
        if matches!(s, "sm" | "md" | "lg" | "xl" | "2xl")
            || matches!(s, "max-sm" | "max-md" | "max-lg" | "max-xl" | "max-2xl")
        {
            return Variant::Responsive(s);
        }

        // 状态修饰符（group-hover, peer-checked 等）
        if s.starts_with("group-") || s.starts_with("peer-") {
            return Variant::State(s);
        }

        // 伪类
        if matches!(
            s,
            "hover"
                | "focus"
                | "focus-within"
                | "focus-visible"
                | "active"
                | "visited"
                | "target"
                | "disabled"
                | "enabled"
                | "checked"
                | "required"
                | "valid"
                | "invalid"
                | "first"
                | "last"
                | "only"
                | "odd"
                | "even"
                | "empty"
                | "open"
                | "dark"
        ) {
            return Variant::State(s);
        }

        // 默认为自定义变体
        Variant::Custom(s)
    }

    /// 判断是否为响应式变体
    pub fn is_responsive(&self) -> bool {
        matches!(self, Variant::Responsive(_))
    }

    /// 判断是否为状态变体
    pub fn is_state(&self) -> bool {
        matches!(self, Variant::State(_))
    }
}

impl std::fmt::Display for Variant<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Responsive(s) | Variant::State(s) | Variant::Custom(s) => write!(f, "{}", s),
        }
    }
}

/// 单个 class token 的借用分解视图
///
/// token 本身永远不被改写，分解只服务于匹配；
/// 进入分组结果的始终是原始字符串 `raw`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassToken<'a> {
    /// 原始字符串
    pub raw: &'a str,

    /// 变体前缀（如 "md:hover:bg-blue-500" 的 md 和 hover 两段）
    pub variants: Vec<Variant<'a>>,

    /// 重要性标记（前置 !，兼容后置 ! 写法）
    pub important: bool,

    /// 负值标记（如 -m-4）
    pub negative: bool,

    /// 工具根：插件名 + 值（如 "bg-blue-500"）
    pub root: &'a str,
}

impl<'a> ClassToken<'a> {
    /// 分解一个 token
    pub fn decompose(raw: &'a str) -> Self {
        let mut rest = raw;

        // 1. 前置重要性标记
        let mut important = false;
        if let Some(stripped) = rest.strip_prefix('!') {
            important = true;
            rest = stripped;
        }

        // 2. 变体链：按方括号外的冒号切分，最后一段是工具根
        let mut variants = Vec::new();
        while let Some((head, tail)) = split_variant(rest) {
            variants.push(Variant::from_str(head));
            rest = tail;
        }

        // 3. 变体之后的重要性标记（sm:!-mx-2 这种写法），以及后置写法
        if let Some(stripped) = rest.strip_prefix('!') {
            important = true;
            rest = stripped;
        }
        if let Some(stripped) = rest.strip_suffix('!') {
            important = true;
            rest = stripped;
        }

        // 4. 负值标记
        let mut negative = false;
        if let Some(stripped) = rest.strip_prefix('-') {
            negative = true;
            rest = stripped;
        }

        ClassToken {
            raw,
            variants,
            important,
            negative,
            root: rest,
        }
    }

    /// 是否携带状态变体（hover: / focus: / group-hover: …）
    pub fn has_state_variant(&self) -> bool {
        self.variants.iter().any(Variant::is_state)
    }

    /// 是否携带响应式变体（sm: / md: …）
    pub fn has_responsive_variant(&self) -> bool {
        self.variants.iter().any(Variant::is_responsive)
    }
}

/// 在方括号外的第一个冒号处切分出一个变体段
///
/// `[...]` 内的冒号不参与切分（如 `bg-[url(http://x)]`）。
/// 冒号前后都必须有内容，否则不视为变体。
fn split_variant(s: &str) -> Option<(&str, &str)> {
    let mut depth = 0usize;

    for (i, ch) in s.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                let head = &s[..i];
                let tail = &s[i + 1..];
                if head.is_empty() || tail.is_empty() {
                    return None;
                }
                return Some((head, tail));
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_classification() {
        assert!(Variant::from_str("md").is_responsive());
        assert!(Variant::from_str("max-lg").is_responsive());
        assert!(Variant::from_str("hover").is_state());
        assert!(Variant::from_str("group-hover").is_state());
        assert!(Variant::from_str("peer-checked").is_state());
        assert_eq!(Variant::from_str("dark"), Variant::State("dark"));
        assert_eq!(Variant::from_str("print"), Variant::Custom("print"));
    }

    #[test]
    fn test_decompose_simple() {
        let token = ClassToken::decompose("p-4");
        assert_eq!(token.root, "p-4");
        assert!(token.variants.is_empty());
        assert!(!token.important);
        assert!(!token.negative);
    }

    #[test]
    fn test_decompose_variants() {
        let token = ClassToken::decompose("md:hover:bg-blue-500");
        assert_eq!(token.variants.len(), 2);
        assert!(token.variants[0].is_responsive());
        assert!(token.variants[1].is_state());
        assert_eq!(token.root, "bg-blue-500");
    }

    #[test]
    fn test_decompose_negative() {
        let token = ClassToken::decompose("-m-4");
        assert!(token.negative);
        assert_eq!(token.root, "m-4");
    }

    #[test]
    fn test_decompose_negative_with_variant() {
        let token = ClassToken::decompose("md:-top-1");
        assert_eq!(token.variants.len(), 1);
        assert!(token.negative);
        assert_eq!(token.root, "top-1");
    }

    #[test]
    fn test_decompose_important_leading() {
        let token = ClassToken::decompose("!p-4");
        assert!(token.important);
        assert_eq!(token.root, "p-4");
    }

    #[test]
    fn test_decompose_important_trailing() {
        let token = ClassToken::decompose("md:p-4!");
        assert!(token.important);
        assert_eq!(token.variants.len(), 1);
        assert_eq!(token.root, "p-4");
    }

    #[test]
    fn test_decompose_colon_inside_brackets() {
        // 方括号内的冒号不是变体分隔符
        let token = ClassToken::decompose("bg-[url(http://example.com/a.png)]");
        assert!(token.variants.is_empty());
        assert_eq!(token.root, "bg-[url(http://example.com/a.png)]");
    }

    #[test]
    fn test_decompose_variant_before_brackets() {
        let token = ClassToken::decompose("hover:bg-[#ff0000]");
        assert_eq!(token.variants.len(), 1);
        assert!(token.variants[0].is_state());
        assert_eq!(token.root, "bg-[#ff0000]");
    }

    #[test]
    fn test_decompose_important_after_variants() {
        let token = ClassToken::decompose("sm:!-mx-2");
        assert_eq!(token.raw, "sm:!-mx-2");
        assert!(token.important);
        assert!(token.negative);
        assert_eq!(token.root, "mx-2");
    }

    #[test]
    fn test_category_order() {
        assert_eq!(Category::ALL.len(), 11);
        assert_eq!(Category::ALL[0], Category::Sizing);
        assert_eq!(Category::ALL[10], Category::Other);
    }

    #[test]
    fn test_category_serialization() {
        assert_eq!(
            serde_json::to_string(&Category::Sizing).unwrap(),
            "\"sizing\""
        );
        assert_eq!(
            serde_json::to_string(&Category::Pseudo).unwrap(),
            "\"pseudo\""
        );
        assert_eq!(Category::Background.to_string(), "background");
    }
}
