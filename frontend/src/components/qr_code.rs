use leptos::prelude::*;
use log::warn;
use shortdash::qr::qr_svg;

/// 短地址二维码，SVG 由核心库生成
#[component]
pub fn QrCodeImage(value: String, size: u32) -> impl IntoView {
    match qr_svg(&value, size) {
        Ok(svg) => view! { <div class="bg-white p-2 rounded-box inline-block" inner_html=svg></div> }
            .into_any(),
        Err(e) => {
            warn!("[qr] cannot encode '{}': {}", value, e);
            view! { <p class="text-error text-sm">"QR code unavailable"</p> }.into_any()
        }
    }
}
