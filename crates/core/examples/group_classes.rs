/// 演示 class 分组
///
/// 展示 group_classes / group_buckets 如何把一串工具类
/// 按类别整理成有序分组

use classwind_core::{classify_token, group_buckets, group_classes, ClassToken};

fn main() {
    println!("=== Classwind 分组示例 ===\n");

    // 示例 1: 基本分组
    let input = "flex bg-red-500 p-2 text-sm w-full hover:bg-blue-500";
    println!("1. 输入: {}", input);

    let groups = group_classes(input);
    println!("   分成 {} 组:", groups.len());
    for (i, group) in groups.iter().enumerate() {
        println!("   [{}] {}", i + 1, group);
    }
    println!();

    // 示例 2: 逐 token 归类
    println!("2. 逐 token 归类:");
    for raw in input.split_whitespace() {
        let token = ClassToken::decompose(raw);
        let category = classify_token(&token);
        let mut notes = Vec::new();
        if token.has_responsive_variant() {
            notes.push("断点");
        }
        if token.has_state_variant() {
            notes.push("状态");
        }
        println!("   {:30} -> {:12} {}", raw, category.as_str(), notes.join(" "));
    }
    println!();

    // 示例 3: 完整分桶（含空桶）
    println!("3. 全部桶:");
    for (category, bucket) in group_buckets(input) {
        if bucket.is_empty() {
            println!("   {:15} (空)", category.as_str());
        } else {
            println!("   {:15} {}", category.as_str(), bucket.join(" "));
        }
    }
}
