//! Session lifecycle: `Unauthenticated -> Authenticated -> Unauthenticated`.
//!
//! `SessionState` is owned by the top-level view and handed down as a signal.
//! Every logout bumps `generation`; async work captures the generation when it
//! starts and drops its result if the generation moved on in the meantime.

use crate::error::AuthError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Manager,
}

impl Role {
    /// Parse the backend's role string. Unknown roles are rejected rather than
    /// guessed.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "manager" => Some(Role::Manager),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Администратор",
            Role::Manager => "Менеджер",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: Option<i64>,
    pub login: String,
    pub display_name: String,
    pub role: Role,
}

/// Login form input, only constructible when both fields are filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    identifier: String,
    secret: String,
}

impl Credentials {
    pub fn new(identifier: &str, secret: &str) -> Option<Self> {
        if identifier.trim().is_empty() || secret.trim().is_empty() {
            return None;
        }
        Some(Self {
            identifier: identifier.to_string(),
            secret: secret.to_string(),
        })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthPhase {
    #[default]
    Unauthenticated,
    Authenticated(Session),
}

/// A granted login attempt. Must be handed back to `finish_login`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginTicket {
    credentials: Credentials,
    generation: u64,
}

impl LoginTicket {
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    phase: AuthPhase,
    error: Option<String>,
    pending: bool,
    generation: u64,
}

impl SessionState {
    pub fn phase(&self) -> &AuthPhase {
        &self.phase
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.phase {
            AuthPhase::Authenticated(session) => Some(session),
            AuthPhase::Unauthenticated => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True while no logout happened since `generation` was captured.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Start a login attempt. Returns `None`, leaving the state untouched, when
    /// a field is empty, an attempt is already in flight, or a session exists.
    pub fn begin_login(&mut self, identifier: &str, secret: &str) -> Option<LoginTicket> {
        if self.pending || self.is_authenticated() {
            return None;
        }
        let credentials = Credentials::new(identifier, secret)?;
        self.pending = true;
        self.error = None;
        Some(LoginTicket {
            credentials,
            generation: self.generation,
        })
    }

    /// Apply the outcome of a login attempt. Returns `false` when the ticket is
    /// stale and the outcome was discarded.
    pub fn finish_login(&mut self, ticket: LoginTicket, result: Result<Session, AuthError>) -> bool {
        if !self.is_current(ticket.generation) {
            return false;
        }
        self.pending = false;
        match result {
            Ok(session) => {
                self.phase = AuthPhase::Authenticated(session);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.into());
            }
        }
        true
    }

    pub fn logout(&mut self) {
        self.phase = AuthPhase::Unauthenticated;
        self.error = None;
        self.pending = false;
        self.generation = self.generation.wrapping_add(1);
    }
}
