use leptos::prelude::*;

use crate::components::sidebar::{Section, Sidebar};
use crate::components::top_bar::TopBar;
use crate::config::AppConfig;
use crate::http::FetchBackend;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::session::{Session, SessionState};

/// The signed-in user. Changes only on login and logout, so the pending flag
/// and error message never remount the current page.
pub(crate) fn current_user(session: RwSignal<SessionState>) -> Memo<Option<Session>> {
    Memo::new(move |_| session.with(|s| s.session().cloned()))
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let backend = FetchBackend::new(config);
    let session = RwSignal::new(SessionState::default());
    let current_user = current_user(session);

    move || match current_user.get() {
        Some(user) => view! { <Shell user=user session=session backend=backend.clone() /> }.into_any(),
        None => view! { <LoginPage session=session backend=backend.clone() /> }.into_any(),
    }
}

#[component]
fn Shell(user: Session, session: RwSignal<SessionState>, backend: FetchBackend) -> impl IntoView {
    let (section, set_section) = signal(Section::default());
    let on_logout = Callback::new(move |_: ()| {
        tracing::info!("Logging out");
        session.update(|s| s.logout());
    });
    let on_select = Callback::new(move |next: Section| set_section.set(next));

    view! {
        <div class="app-layout">
            <Sidebar active=section on_select=on_select />
            <div class="app-main">
                <TopBar user=user on_logout=on_logout />
                <main class="content">
                    {move || match section.get() {
                        Section::Home => {
                            view! { <DashboardPage session=session backend=backend.clone() /> }
                        }
                    }}
                </main>
            </div>
        </div>
    }
}
