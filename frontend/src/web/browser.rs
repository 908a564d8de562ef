//! 零散的浏览器能力：剪贴板、整页跳转、新标签页、文档主题

use wasm_bindgen_futures::JsFuture;

/// 写入剪贴板
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("window is not available")?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}

/// 离开本应用，整页跳转到外部地址
pub fn assign_location(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("window is not available")?;
    window.location().assign(url).map_err(|e| format!("{:?}", e))
}

pub fn open_in_new_tab(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("window is not available")?;
    window
        .open_with_url_and_target(url, "_blank")
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}

/// 设置根元素的 `data-theme`
pub fn apply_document_theme(theme: &str) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.set_attribute("data-theme", theme);
    }
}
