/// 演示源码改写
///
/// 对一段 JSX 做一次完整扫描，把 className 的类列表分组改写

use classwind_rewrite::{rewrite_source, RewriteOptions};

fn main() {
    let source = r#"export default function Card() {
    return (
        <div className="rounded-lg border p-4 bg-white shadow flex flex-col">
            <h3 className="text-lg font-bold">Title</h3>
            <p className="text-gray-600 mt-2">Body</p>
        </div>
    );
}"#;

    println!("=== 原始源码 ===\n{}\n", source);

    let result = rewrite_source(source, "Card.tsx", RewriteOptions::default())
        .expect("Card.tsx should be a supported file kind");

    println!("=== 改写后 ===\n{}\n", result.code);

    println!("=== 改写映射 ===");
    for (value, replacement) in &result.rewrites {
        println!("  {:45} -> {}", value, replacement);
    }
}
