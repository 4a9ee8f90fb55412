//! Dashboard snapshot: one atomic read of counters and recent activity.

use tracing::{error, info, warn};

use crate::api::{ApiRequest, Backend, DashboardData, NewProperty, RecentDeal, DASHBOARD_PATH};
use crate::error::FetchError;
use crate::session::SessionState;
use crate::store::{Outcome, StateCell};

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub total_properties: u64,
    pub total_clients: u64,
    pub active_deals: u64,
    pub recent_deals: Vec<RecentDeal>,
    pub new_properties: Vec<NewProperty>,
}

impl From<DashboardData> for DashboardSnapshot {
    fn from(data: DashboardData) -> Self {
        Self {
            total_properties: data.stats.total_properties,
            total_clients: data.stats.total_clients,
            active_deals: data.stats.active_deals,
            recent_deals: data.recent_deals,
            new_properties: data.new_properties,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashboardState {
    #[default]
    Loading,
    Loaded(DashboardSnapshot),
    Failed(String),
}

pub struct DashboardLoader<'a, B> {
    backend: &'a B,
}

impl<'a, B: Backend> DashboardLoader<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    pub async fn load_snapshot(&self) -> Result<DashboardSnapshot, FetchError> {
        let response = self.backend.send(ApiRequest::get(DASHBOARD_PATH)).await?;
        if !response.is_success() {
            return Err(FetchError::Status(response.status));
        }
        let data: DashboardData =
            serde_json::from_str(&response.body).map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(data.into())
    }
}

/// Fetch the snapshot into `dashboard` on behalf of the session generation
/// that mounted the view. Results for an ended session are dropped.
pub async fn refresh<B, S, D>(backend: &B, session: &S, dashboard: &D, generation: u64) -> Outcome
where
    B: Backend,
    S: StateCell<SessionState>,
    D: StateCell<DashboardState>,
{
    if dashboard.update_with(|d| *d = DashboardState::Loading).is_none() {
        return Outcome::Ignored;
    }

    let result = DashboardLoader::new(backend).load_snapshot().await;

    let still_current = session
        .read_with(|s| s.is_authenticated() && s.is_current(generation))
        .unwrap_or(false);
    if !still_current {
        warn!("Discarding dashboard response from an ended session");
        return Outcome::Discarded;
    }

    let next = match result {
        Ok(snapshot) => {
            info!(
                "Dashboard loaded: {} properties, {} clients, {} active deals",
                snapshot.total_properties, snapshot.total_clients, snapshot.active_deals
            );
            DashboardState::Loaded(snapshot)
        }
        Err(e) => {
            error!("Failed to load dashboard data: {:?}", e);
            DashboardState::Failed(e.to_string())
        }
    };

    match dashboard.update_with(|d| *d = next) {
        Some(()) => Outcome::Applied,
        None => Outcome::Discarded,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::api::Method;
    use crate::error::{AuthError, TransportError};
    use crate::session::{Role, Session};
    use crate::test_support::{ScriptedBackend, DASHBOARD_JSON};

    fn signed_in() -> RefCell<SessionState> {
        let mut state = SessionState::default();
        let ticket = state.begin_login("ivanov", "secret").unwrap();
        state.finish_login(
            ticket,
            Ok::<_, AuthError>(Session {
                user_id: Some(1),
                login: "ivanov".to_string(),
                display_name: "Иванов И.И.".to_string(),
                role: Role::Admin,
            }),
        );
        RefCell::new(state)
    }

    #[tokio::test]
    async fn test_load_snapshot_flattens_stats() {
        let backend = ScriptedBackend::new().reply(200, DASHBOARD_JSON);
        let snapshot = DashboardLoader::new(&backend).load_snapshot().await.unwrap();

        assert_eq!(snapshot.total_properties, 247);
        assert_eq!(snapshot.total_clients, 1823);
        assert_eq!(snapshot.active_deals, 34);
        assert_eq!(snapshot.recent_deals.len(), 2);
        assert_eq!(snapshot.new_properties[0].address, "ул. Гагарина, 7");

        let sent = backend.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(sent[0].path, "/dashboard/");
        assert_eq!(sent[0].body, None);
    }

    #[tokio::test]
    async fn test_load_snapshot_error_kinds() {
        let backend = ScriptedBackend::new()
            .reply(503, "")
            .reply(200, r#"{"stats": {}}"#)
            .fail(TransportError::NoResponse("Failed to fetch".into()));
        let loader = DashboardLoader::new(&backend);

        assert_eq!(loader.load_snapshot().await, Err(FetchError::Status(503)));
        assert!(matches!(loader.load_snapshot().await, Err(FetchError::Decode(_))));
        assert!(matches!(loader.load_snapshot().await, Err(FetchError::NoResponse(_))));
    }

    #[tokio::test]
    async fn test_refresh_applies_snapshot() {
        let backend = ScriptedBackend::new().reply(200, DASHBOARD_JSON);
        let session = signed_in();
        let dashboard = RefCell::new(DashboardState::Loading);
        let generation = session.borrow().generation();

        let outcome = refresh(&backend, &session, &dashboard, generation).await;

        assert_eq!(outcome, Outcome::Applied);
        let state = dashboard.borrow();
        match &*state {
            DashboardState::Loaded(snapshot) => assert_eq!(snapshot.total_properties, 247),
            other => panic!("expected Loaded, got {:?}", other),
        };
    }

    #[tokio::test]
    async fn test_refresh_failure_is_surfaced() {
        let backend = ScriptedBackend::new().fail(TransportError::NoResponse("offline".into()));
        let session = signed_in();
        let dashboard = RefCell::new(DashboardState::Loading);
        let generation = session.borrow().generation();

        refresh(&backend, &session, &dashboard, generation).await;

        let state = dashboard.borrow();
        match &*state {
            DashboardState::Failed(message) => assert!(message.contains("Нет ответа"), "got: {}", message),
            other => panic!("expected Failed, got {:?}", other),
        };
    }

    #[tokio::test]
    async fn test_retry_after_failure_resets_to_loading_then_loads() {
        let backend = ScriptedBackend::new().reply(500, "").reply(200, DASHBOARD_JSON);
        let session = signed_in();
        let dashboard = RefCell::new(DashboardState::Loading);
        let generation = session.borrow().generation();

        refresh(&backend, &session, &dashboard, generation).await;
        assert!(matches!(*dashboard.borrow(), DashboardState::Failed(_)));

        refresh(&backend, &session, &dashboard, generation).await;
        assert!(matches!(*dashboard.borrow(), DashboardState::Loaded(_)));
        assert_eq!(backend.sent().len(), 2);
    }

    #[tokio::test]
    async fn test_response_after_logout_is_discarded() {
        let backend = ScriptedBackend::new().reply(200, DASHBOARD_JSON);
        let session = signed_in();
        let dashboard = RefCell::new(DashboardState::Loading);
        let generation = session.borrow().generation();
        session.borrow_mut().logout();

        let outcome = refresh(&backend, &session, &dashboard, generation).await;

        assert_eq!(outcome, Outcome::Discarded);
        assert_eq!(*dashboard.borrow(), DashboardState::Loading);
    }
}
