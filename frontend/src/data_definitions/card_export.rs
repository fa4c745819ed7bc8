//! Card identity and the in-page script that rasterizes a card for download.

/// DOM id of the card at `index` in the rendered grid.
pub fn card_element_id(index: usize) -> String {
    format!("university-card-{}", index)
}

/// Script handed to `document::eval`. Resolves to `true` once the download is
/// triggered and `false` when no element has `element_id`.
pub fn export_card_script(element_id: &str, file_name: &str) -> String {
    let element_id = js_string(element_id);
    let file_name = js_string(file_name);
    format!(
        r#"
        const element = document.getElementById({element_id});
        if (!element) {{
            return false;
        }}
        const canvas = await html2canvas(element);
        const link = document.createElement("a");
        link.download = {file_name};
        link.href = canvas.toDataURL("image/png");
        link.click();
        return true;
        "#
    )
}

fn js_string(value: &str) -> String {
    // a JSON string literal is a valid JS string literal
    serde_json::Value::String(value.to_string()).to_string()
}
