use classwind_core::group_classes;
use indexmap::IndexMap;

/// 一个属性值的替换方案
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    /// 值里没有任何 token，属性保持原样
    Untouched,

    /// 恰好一组：沿用原属性语法，值替换为该组
    Single(String),

    /// 多组：改写为合并函数调用表达式（如 `clsx("p-2", "flex")`）
    Expression(String),
}

/// 分组收集器 —— 为源码中出现的每个 Tailwind class 值计算替换方案，
/// 相同的类组合只分组一次，并记录所有发生过的改写。
pub struct GroupCollector {
    merge_helper: String,
    /// 原始 class 值 -> 替换方案
    cache: IndexMap<String, Replacement>,
}

impl GroupCollector {
    pub fn new(merge_helper: impl Into<String>) -> Self {
        Self {
            merge_helper: merge_helper.into(),
            cache: IndexMap::new(),
        }
    }

    /// 处理一个属性值，返回替换方案。命中缓存时直接复用。
    pub fn process_value(&mut self, value: &str) -> Replacement {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Replacement::Untouched;
        }

        // 缓存命中
        if let Some(hit) = self.cache.get(trimmed) {
            return hit.clone();
        }

        let groups = group_classes(trimmed);
        let replacement = match groups.as_slice() {
            [] => Replacement::Untouched,
            [single] => Replacement::Single(single.clone()),
            many => {
                let args: Vec<String> = many.iter().map(|g| format!("\"{}\"", g)).collect();
                Replacement::Expression(format!("{}({})", self.merge_helper, args.join(", ")))
            }
        };

        self.cache.insert(trimmed.to_string(), replacement.clone());
        replacement
    }

    /// 已记录的改写数量
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// 消费 self，返回改写映射表（原始值 -> 替换后的值或表达式）。
    /// 保持原样的值不计入。
    pub fn into_rewrites(self) -> IndexMap<String, String> {
        self.cache
            .into_iter()
            .filter_map(|(value, replacement)| match replacement {
                Replacement::Untouched => None,
                Replacement::Single(group) => Some((value, group)),
                Replacement::Expression(expr) => Some((value, expr)),
            })
            .collect()
    }
}
