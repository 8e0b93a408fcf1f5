use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use classwind_core::group_classes as rs_group_classes;
use classwind_rewrite::{rewrite_source as rs_rewrite_source, RewriteOptions};

// ── JS 侧 serde 镜像类型 ──────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsRewriteOptions {
    #[serde(default = "default_merge_helper")]
    merge_helper: String,
}

impl Default for JsRewriteOptions {
    fn default() -> Self {
        Self {
            merge_helper: default_merge_helper(),
        }
    }
}

fn default_merge_helper() -> String {
    "clsx".to_string()
}

impl From<JsRewriteOptions> for RewriteOptions {
    fn from(opts: JsRewriteOptions) -> Self {
        RewriteOptions {
            merge_helper: opts.merge_helper,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsRewriteResult {
    code: String,
    rewrites: IndexMap<String, String>,
}

fn parse_options(options: JsValue) -> Result<JsRewriteOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        Ok(JsRewriteOptions::default())
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
    }
}

// ── WASM 导出函数 ─────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 把 class 列表分组
///
/// @param classes - 空白分隔的 class 字符串
/// @returns string[]，每个元素是一个非空类别的拼接结果，按类别顺序排列
#[wasm_bindgen(js_name = "groupClasses")]
pub fn group_classes(classes: &str) -> Result<JsValue, JsError> {
    let groups = rs_group_classes(classes);
    serde_wasm_bindgen::to_value(&groups)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// 改写 JS/TS/JSX/TSX 源码
///
/// @param source   - 源码字符串（编辑器选区或整个文档）
/// @param filename - 文件名（如 "App.tsx"），用于判断文件类型
/// @param options  - 改写选项，可选
/// @returns `{ code, rewrites }`
#[wasm_bindgen(js_name = "rewriteSource")]
pub fn rewrite_source(source: &str, filename: &str, options: JsValue) -> Result<JsValue, JsError> {
    let opts = parse_options(options)?;
    let result = rs_rewrite_source(source, filename, opts.into())
        .map_err(|e| JsError::new(&e.to_string()))?;

    let js_result = JsRewriteResult {
        code: result.code,
        rewrites: result.rewrites,
    };
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    js_result
        .serialize(&serializer)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
