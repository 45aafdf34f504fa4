use dioxus::document::eval;

/// Read the first file picked in `<input type="file" id=element_id>` as text,
/// then clear the input so the same file can be picked again.
///
/// Returns `None` when nothing is picked or the webview refuses the read.
pub async fn read_picked_file(element_id: &str) -> Option<String> {
    let script = read_picked_file_script(element_id);
    eval(&script)
        .join::<Option<String>>()
        .await
        .ok()
        .flatten()
}

fn read_picked_file_script(element_id: &str) -> String {
    let id_literal = js_string_literal(element_id);
    format!(
        r#"
        const el = document.getElementById({id_literal});
        if (!el || !el.files || el.files.length === 0) {{ return null; }}
        try {{
            const text = await el.files[0].text();
            el.value = "";
            return text;
        }} catch (_) {{
            return null;
        }}
        "#
    )
}

pub(crate) fn js_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}
