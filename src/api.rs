use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::TransportError;

// -- Transport seam --

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// A request relative to the configured API base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: &'static str,
    /// JSON body, already serialized.
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn get(path: &'static str) -> Self {
        Self {
            method: Method::Get,
            path,
            body: None,
        }
    }

    pub fn post_json<T: Serialize>(path: &'static str, body: &T) -> Result<Self, TransportError> {
        let body = serde_json::to_string(body).map_err(|e| TransportError::Setup(e.to_string()))?;
        Ok(Self {
            method: Method::Post,
            path,
            body: Some(body),
        })
    }
}

/// Whatever the server answered, 2xx or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// An HTTP collaborator. The browser build talks to it through `fetch`,
/// tests plug in a scripted backend.
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

impl<B: Backend> Backend for Rc<B> {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.as_ref().send(request).await
    }
}

// -- Endpoints --

pub const LOGIN_PATH: &str = "/auth/login";
pub const DASHBOARD_PATH: &str = "/dashboard/";

// -- Wire types matching the backend --

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub login: &'a str,
    pub password: &'a str,
}

/// Successful `/auth/login` body. `full_name` is the canonical display name,
/// `login` is only read when it is missing.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Error body the backend sends with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Extract a usable `detail` string from a raw error body, if any.
    pub fn detail_from(body: &str) -> Option<String> {
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        match parsed.detail? {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DashboardStats {
    pub total_properties: u64,
    pub total_clients: u64,
    pub active_deals: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RecentDeal {
    pub client: String,
    pub property: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct NewProperty {
    pub address: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DashboardData {
    pub stats: DashboardStats,
    #[serde(default)]
    pub recent_deals: Vec<RecentDeal>,
    #[serde(default)]
    pub new_properties: Vec<NewProperty>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_field_names() {
        let req = ApiRequest::post_json(
            LOGIN_PATH,
            &LoginRequest {
                login: "ivanov",
                password: "secret",
            },
        )
        .unwrap();
        assert_eq!(req.method, Method::Post);
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["login"], "ivanov");
        assert_eq!(body["password"], "secret");
    }

    #[test]
    fn test_error_detail_extraction() {
        assert_eq!(
            ErrorBody::detail_from(r#"{"detail": "bad credentials"}"#),
            Some("bad credentials".to_string())
        );
        assert_eq!(ErrorBody::detail_from(r#"{"detail": ""}"#), None);
        assert_eq!(ErrorBody::detail_from(r#"{"other": 1}"#), None);
        assert_eq!(ErrorBody::detail_from("<html>Internal Server Error</html>"), None);
        // FastAPI validation errors carry a list, not a string
        assert_eq!(ErrorBody::detail_from(r#"{"detail": [{"loc": ["body"]}]}"#), None);
    }

    #[test]
    fn test_dashboard_data_parses_backend_shape() {
        let json = r#"{
            "stats": {"total_properties": 247, "total_clients": 1823, "active_deals": 34},
            "recent_deals": [{"client": "Петров А.И.", "property": "ул. Ленина, 45", "amount": 8500000.0}],
            "new_properties": [{"address": "пр. Победы, 12", "type": "Дом", "price": 25000000}]
        }"#;
        let data: DashboardData = serde_json::from_str(json).unwrap();
        assert_eq!(data.stats.total_properties, 247);
        assert_eq!(data.stats.total_clients, 1823);
        assert_eq!(data.recent_deals[0].amount, 8_500_000.0);
        assert_eq!(data.new_properties[0].kind, "Дом");
        assert_eq!(data.new_properties[0].price, 25_000_000.0);
    }

    #[test]
    fn test_response_success_range() {
        let ok = ApiResponse { status: 204, body: String::new() };
        let redirect = ApiResponse { status: 302, body: String::new() };
        let denied = ApiResponse { status: 401, body: String::new() };
        assert!(ok.is_success());
        assert!(!redirect.is_success());
        assert!(!denied.is_success());
    }
}
