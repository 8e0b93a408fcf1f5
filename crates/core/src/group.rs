use crate::rules::classify_token;
use crate::types::{Category, ClassToken};
use indexmap::IndexMap;

/// 把 Tailwind class 串按类别分桶
///
/// 桶按 `Category` 声明顺序预先建好（空桶也保留），
/// 桶内 token 保持输入中的相对顺序。
/// 每次调用都重建全部桶，不保留任何跨调用状态。
pub fn group_buckets(classes: &str) -> IndexMap<Category, Vec<String>> {
    let mut buckets: IndexMap<Category, Vec<String>> =
        Category::ALL.iter().map(|c| (*c, Vec::new())).collect();

    for raw in classes.split_whitespace() {
        let token = ClassToken::decompose(raw);
        let category = classify_token(&token);
        buckets.entry(category).or_default().push(raw.to_string());
    }

    buckets
}

/// 分组入口：非空桶按类别顺序输出，每桶内部用单个空格连接
///
/// 零 token 的输入得到空序列。纯函数，对任意输入都有定义，
/// 每个输入 token 恰好落入一个输出分组。
///
/// # 示例
///
/// ```
/// use classwind_core::group_classes;
///
/// let groups = group_classes("flex bg-red-500 p-2 text-sm");
/// assert_eq!(groups, vec!["p-2", "text-sm", "flex", "bg-red-500"]);
/// ```
pub fn group_classes(classes: &str) -> Vec<String> {
    group_buckets(classes)
        .into_iter()
        .filter(|(_, bucket)| !bucket.is_empty())
        .map(|(_, bucket)| bucket.join(" "))
        .collect()
}
