use tracing::{info, warn};

use crate::api::{ApiRequest, Backend, ErrorBody, LoginRequest, LoginResponse, LOGIN_PATH};
use crate::error::AuthError;
use crate::session::{Credentials, Role, Session, SessionState};
use crate::store::{Outcome, StateCell};

/// Talks to `/auth/login` and turns the reply into a `Session`.
pub struct Authenticator<'a, B> {
    backend: &'a B,
}

impl<'a, B: Backend> Authenticator<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let request = ApiRequest::post_json(
            LOGIN_PATH,
            &LoginRequest {
                login: credentials.identifier(),
                password: credentials.secret(),
            },
        )?;

        info!("Login attempt for '{}'", credentials.identifier());
        let response = self.backend.send(request).await.map_err(|e| {
            warn!("Login request for '{}' failed: {}", credentials.identifier(), e);
            AuthError::from(e)
        })?;

        if !response.is_success() {
            let detail = ErrorBody::detail_from(&response.body);
            warn!(
                "Login for '{}' rejected with status {}",
                credentials.identifier(),
                response.status
            );
            return Err(AuthError::RemoteRejected {
                status: response.status,
                detail,
            });
        }

        let body: LoginResponse = serde_json::from_str(&response.body)
            .map_err(|e| AuthError::InvalidResponse(format!("login body: {}", e)))?;
        let session = session_from_response(body, credentials.identifier())?;
        info!(
            "Logged in as '{}' (id {:?}, {:?})",
            session.login, session.user_id, session.role
        );
        Ok(session)
    }
}

fn session_from_response(body: LoginResponse, typed_login: &str) -> Result<Session, AuthError> {
    let role = body
        .role
        .as_deref()
        .and_then(Role::parse)
        .ok_or_else(|| AuthError::InvalidResponse(format!("unsupported role {:?}", body.role)))?;

    let login = non_blank(body.login).unwrap_or_else(|| typed_login.to_string());
    let display_name = non_blank(body.full_name).unwrap_or_else(|| login.clone());

    Ok(Session {
        user_id: body.user_id,
        login,
        display_name,
        role,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// One press of the login button: validate, dispatch at most once, apply.
pub async fn submit_login<B, S>(backend: &B, state: &S, identifier: &str, secret: &str) -> Outcome
where
    B: Backend,
    S: StateCell<SessionState>,
{
    let Some(ticket) = state.update_with(|s| s.begin_login(identifier, secret)).flatten() else {
        return Outcome::Ignored;
    };

    let generation = ticket.generation();
    let result = Authenticator::new(backend).login(ticket.credentials()).await;
    if let Err(AuthError::InvalidResponse(reason)) = &result {
        warn!("Unexpected login response: {}", reason);
    }

    match state.update_with(|s| s.finish_login(ticket, result)) {
        Some(true) => Outcome::Applied,
        _ => {
            warn!("Discarding login result from session generation {}", generation);
            Outcome::Discarded
        }
    }
}
