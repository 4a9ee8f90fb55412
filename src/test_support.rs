use std::cell::RefCell;
use std::collections::VecDeque;

use crate::api::{ApiRequest, ApiResponse, Backend};
use crate::error::TransportError;

/// Backend that replays canned replies and records what was sent.
#[derive(Default)]
pub struct ScriptedBackend {
    replies: RefCell<VecDeque<Result<ApiResponse, TransportError>>>,
    sent: RefCell<Vec<ApiRequest>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: &str) -> Self {
        self.replies.borrow_mut().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(self, err: TransportError) -> Self {
        self.replies.borrow_mut().push_back(Err(err));
        self
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }
}

impl Backend for ScriptedBackend {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.sent.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::NoResponse("script exhausted".to_string())))
    }
}

pub const DASHBOARD_JSON: &str = r#"{
    "stats": {"total_properties": 247, "total_clients": 1823, "active_deals": 34},
    "recent_deals": [
        {"client": "Петров А.И.", "property": "ул. Ленина, 45", "amount": 8500000.0},
        {"client": "Сидорова М.П.", "property": "пр. Победы, 12", "amount": 25000000.0}
    ],
    "new_properties": [
        {"address": "ул. Гагарина, 7", "type": "Офис", "price": 15000000.0}
    ]
}"#;
