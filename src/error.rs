use thiserror::Error;

/// Failure of the transport itself, before any HTTP status is known.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request could not be built or handed to the browser.
    #[error("request setup failed: {0}")]
    Setup(String),

    /// The request went out but nothing came back.
    #[error("no response: {0}")]
    NoResponse(String),
}

/// Login failure. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Ошибка: {}", .detail.as_deref().unwrap_or("Ошибка сервера"))]
    RemoteRejected { status: u16, detail: Option<String> },

    #[error("Нет ответа от сервера. Проверьте подключение.")]
    NoResponse,

    #[error("Ошибка при отправке запроса")]
    RequestSetupFailed,

    #[error("Некорректный ответ сервера")]
    InvalidResponse(String),
}

impl From<TransportError> for AuthError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Setup(_) => AuthError::RequestSetupFailed,
            TransportError::NoResponse(_) => AuthError::NoResponse,
        }
    }
}

impl From<AuthError> for String {
    fn from(err: AuthError) -> Self {
        err.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Сервер вернул ошибку {0}")]
    Status(u16),

    #[error("Нет ответа от сервера ({0}). Проверьте подключение.")]
    NoResponse(String),

    #[error("Ошибка при отправке запроса: {0}")]
    RequestSetupFailed(String),

    #[error("Некорректный ответ сервера: {0}")]
    Decode(String),
}

impl From<TransportError> for FetchError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Setup(msg) => FetchError::RequestSetupFailed(msg),
            TransportError::NoResponse(msg) => FetchError::NoResponse(msg),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid log filter '{directive}': {reason}")]
    LogFilter { directive: String, reason: String },

    #[error("failed to install log subscriber: {0}")]
    Subscriber(String),
}
