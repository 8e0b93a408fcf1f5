use crate::collector::{GroupCollector, Replacement};

/// 属性扫描器 —— 扫描源码中的 className="..." / class="..." 属性，
/// 把 Tailwind 类列表替换为分组后的形式。
///
/// 使用简单的状态机解析，避免引入正则依赖。
/// 支持双引号和单引号；一次调用对传入文本做一次完整扫描。
pub fn rewrite_class_attributes(source: &str, collector: &mut GroupCollector) -> String {
    let bytes = source.as_bytes();
    let len = bytes.len();
    let mut result = String::with_capacity(len);
    let mut i = 0;

    while i < len {
        // 查找属性名
        if let Some(name_len) = match_attr_name(bytes, i) {
            let attr_start = i;
            let attr_name = &source[i..i + name_len];
            i += name_len;

            // 跳过可选空白
            while i < len && bytes[i].is_ascii_whitespace() {
                i += 1;
            }

            // 期望 '='
            if i < len && bytes[i] == b'=' {
                i += 1;

                // 跳过可选空白
                while i < len && bytes[i].is_ascii_whitespace() {
                    i += 1;
                }

                // 期望引号
                if i < len && (bytes[i] == b'"' || bytes[i] == b'\'') {
                    let quote = bytes[i];
                    i += 1;
                    let value_start = i;

                    // 查找匹配的闭合引号
                    while i < len && bytes[i] != quote {
                        i += 1;
                    }

                    if i < len {
                        let value = &source[value_start..i];
                        i += 1; // 跳过闭合引号

                        match collector.process_value(value) {
                            Replacement::Single(group) => {
                                result.push_str(attr_name);
                                result.push('=');
                                result.push(quote as char);
                                result.push_str(&group);
                                result.push(quote as char);
                            }
                            Replacement::Expression(expr) => {
                                result.push_str(attr_name);
                                result.push_str("={");
                                result.push_str(&expr);
                                result.push('}');
                            }
                            Replacement::Untouched => {
                                result.push_str(&source[attr_start..i]);
                            }
                        }
                        continue;
                    }
                }
            }

            // 未匹配完整的 attr="..." 模式，回退
            result.push_str(&source[attr_start..i]);
            continue;
        }

        result.push(source[i..].chars().next().unwrap());
        i += source[i..].chars().next().unwrap().len_utf8();
    }

    result
}

/// 检查位置 i 是否为 className / class 属性名开头，返回属性名长度
///
/// 属性名前必须是空白或 '<'，后面必须是 '=' 或空白，
/// 这样 "class" 不会命中 className 的前缀，
/// 也不会命中 data-className 之类的其他标识符。
fn match_attr_name(bytes: &[u8], i: usize) -> Option<usize> {
    let len = bytes.len();

    // 检查前面的字符确保是属性开始位置（空白或 <）
    if i > 0 && !bytes[i - 1].is_ascii_whitespace() && bytes[i - 1] != b'<' {
        return None;
    }

    // 先试更长的 className，再试 class
    for name in [&b"className"[..], &b"class"[..]] {
        let end = i + name.len();
        if end < len && &bytes[i..end] == name {
            // 属性名后必须是 '=' 或空白
            let next = bytes[end];
            if next == b'=' || next.is_ascii_whitespace() {
                return Some(name.len());
            }
        }
    }

    None
}
