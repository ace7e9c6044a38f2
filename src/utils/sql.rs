/// 转义 LIKE 模式中的通配符（`%`、`_`）与转义符本身，配合 `ESCAPE '\'` 使用
pub fn escape_like_pattern(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
