//! Browser transport built on `window.fetch`.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::api::{ApiRequest, ApiResponse, Backend};
use crate::config::AppConfig;
use crate::error::TransportError;

#[derive(Debug, Clone)]
pub struct FetchBackend {
    config: AppConfig,
}

impl FetchBackend {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    fn build_request(&self, request: &ApiRequest) -> Result<Request, TransportError> {
        let url = self.config.endpoint(request.path);

        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        init.set_mode(RequestMode::Cors);
        if let Some(body) = &request.body {
            init.set_body(&JsValue::from_str(body));
        }

        let req = Request::new_with_str_and_init(&url, &init)
            .map_err(|e| TransportError::Setup(js_error_message(&e)))?;

        let headers = req.headers();
        headers
            .set("Accept", "application/json")
            .map_err(|e| TransportError::Setup(js_error_message(&e)))?;
        if request.body.is_some() {
            headers
                .set("Content-Type", "application/json")
                .map_err(|e| TransportError::Setup(js_error_message(&e)))?;
        }

        Ok(req)
    }
}

impl Backend for FetchBackend {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let req = self.build_request(&request)?;
        let window =
            web_sys::window().ok_or_else(|| TransportError::Setup("no window available".to_string()))?;

        tracing::debug!("{} {}", request.method.as_str(), req.url());

        // fetch only rejects when no HTTP response was received at all
        let value = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(|e| TransportError::NoResponse(js_error_message(&e)))?;
        let response: Response = value
            .dyn_into()
            .map_err(|_| TransportError::NoResponse("fetch did not yield a Response".to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| TransportError::NoResponse(js_error_message(&e)))?;
        let body = JsFuture::from(text)
            .await
            .map_err(|e| TransportError::NoResponse(js_error_message(&e)))?
            .as_string()
            .unwrap_or_default();

        Ok(ApiResponse { status, body })
    }
}

fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| "Unknown error".to_string())
}
