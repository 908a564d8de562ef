//! fetch 传输实现
//!
//! 直接使用 `web_sys::fetch`，实现核心库的 `HttpClient` trait。
//! 只负责把请求发出去、把状态码和响应体带回来，错误归一化由核心库完成。

use shortdash::request::{HttpClient, HttpRequest, HttpResponse, TransportError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// 基于 fetch 的 HTTP 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchHttpClient;

impl FetchHttpClient {
    /// 构建 fetch 请求对象
    fn build(req: &HttpRequest) -> Result<Request, TransportError> {
        let headers = Headers::new()
            .map_err(|e| TransportError::Build(format!("failed to create headers: {:?}", e)))?;

        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| TransportError::Build(format!("invalid header {}: {:?}", key, e)))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());

        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| TransportError::Build(format!("{:?}", e)))
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let request = Self::build(&req)?;

        let window = web_sys::window()
            .ok_or_else(|| TransportError::Build("window is not available".to_string()))?;

        // fetch 只有在网络层失败时才会 reject，非 2xx 仍然是正常的 Response
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| TransportError::NoResponse(format!("{:?}", e)))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| TransportError::NoResponse(format!("unexpected fetch result: {:?}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| TransportError::NoResponse(format!("{:?}", e)))?;
        let body = JsFuture::from(text)
            .await
            .map_err(|e| TransportError::NoResponse(format!("{:?}", e)))?
            .as_string()
            .unwrap_or_default();

        Ok(HttpResponse { status, body })
    }
}
