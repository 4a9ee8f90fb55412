use leptos::prelude::*;

use crate::session::Session;

#[component]
pub fn TopBar(
    user: Session,
    #[prop(into)] on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="top-bar">
            <div class="user-badge">
                <span class="user-avatar"></span>
                <div class="user-info">
                    <div class="user-name">{user.display_name}</div>
                    <div class="user-role">{user.role.label()}</div>
                </div>
            </div>
            <button
                class="btn btn-ghost"
                title="Выйти"
                on:click=move |_| on_logout.run(())
            >
                "Выйти"
            </button>
        </header>
    }
}
