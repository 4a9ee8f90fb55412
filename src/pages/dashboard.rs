use std::future::Future;
use std::pin::Pin;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::Backend;
use crate::components::activity_list::{ActivityList, ActivityRow};
use crate::components::stat_card::StatCard;
use crate::dashboard::{self, DashboardSnapshot, DashboardState};
use crate::format;
use crate::http::FetchBackend;
use crate::session::SessionState;

pub(crate) type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

#[component]
pub fn DashboardPage(session: RwSignal<SessionState>, backend: FetchBackend) -> impl IntoView {
    let state = RwSignal::new(DashboardState::Loading);
    let retry = start_dashboard(session, state, backend, |task| spawn_local(task));

    view! {
        <div class="page dashboard-page">
            <h2>"Панель управления"</h2>
            {move || match state.get() {
                DashboardState::Loading => {
                    view! { <p class="dashboard-loading">"Загрузка..."</p> }.into_any()
                }
                DashboardState::Failed(message) => {
                    let retry = retry.clone();
                    view! {
                        <div class="dashboard-error">
                            <span class="status-text status-error">{message}</span>
                            <button class="btn btn-secondary" on:click=move |_| retry()>
                                "Повторить"
                            </button>
                        </div>
                    }
                    .into_any()
                }
                DashboardState::Loaded(snapshot) => {
                    view! { <DashboardHome snapshot=snapshot /> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn DashboardHome(snapshot: DashboardSnapshot) -> impl IntoView {
    let cards = counters(&snapshot)
        .into_iter()
        .map(|(label, value, accent)| view! { <StatCard label=label value=value accent=accent /> })
        .collect::<Vec<_>>();

    view! {
        <div class="card-grid stat-grid">{cards}</div>
        <div class="card-grid activity-grid">
            <ActivityList
                title="Последние сделки"
                rows=deal_rows(&snapshot)
                empty_text="Сделок пока нет"
            />
            <ActivityList
                title="Новые объекты"
                rows=property_rows(&snapshot)
                empty_text="Новых объектов нет"
            />
        </div>
    }
}

/// Spawn the one fetch for this mount and return the retry action. Nothing
/// here subscribes to signals, so later state changes never re-fetch.
pub(crate) fn start_dashboard<B, F>(
    session: RwSignal<SessionState>,
    state: RwSignal<DashboardState>,
    backend: B,
    spawn: F,
) -> impl Fn() + Clone + 'static
where
    B: Backend + Clone + 'static,
    F: Fn(LocalTask) + Clone + 'static,
{
    let generation = session.with_untracked(|s| s.generation());
    let load = move || {
        let backend = backend.clone();
        spawn(Box::pin(async move {
            dashboard::refresh(&backend, &session, &state, generation).await;
        }));
    };
    load();
    load
}

fn counters(snapshot: &DashboardSnapshot) -> [(&'static str, String, &'static str); 3] {
    [
        ("Объекты недвижимости", snapshot.total_properties.to_string(), "accent-blue"),
        ("Клиенты", snapshot.total_clients.to_string(), "accent-green"),
        ("Активные сделки", snapshot.active_deals.to_string(), "accent-orange"),
    ]
}

fn deal_rows(snapshot: &DashboardSnapshot) -> Vec<ActivityRow> {
    snapshot
        .recent_deals
        .iter()
        .map(|deal| ActivityRow {
            title: deal.client.clone(),
            subtitle: deal.property.clone(),
            value: format::money(deal.amount),
        })
        .collect()
}

fn property_rows(snapshot: &DashboardSnapshot) -> Vec<ActivityRow> {
    snapshot
        .new_properties
        .iter()
        .map(|property| ActivityRow {
            title: property.address.clone(),
            subtitle: property.kind.clone(),
            value: format::money(property.price),
        })
        .collect()
}
