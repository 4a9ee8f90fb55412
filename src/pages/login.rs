use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::auth;
use crate::http::FetchBackend;
use crate::session::SessionState;

#[component]
pub fn LoginPage(session: RwSignal<SessionState>, backend: FetchBackend) -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let pending = Memo::new(move |_| session.with(|s| s.is_pending()));
    let error = Memo::new(move |_| session.with(|s| s.error().map(str::to_string)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let backend = backend.clone();
        let identifier = username.get_untracked();
        let secret = password.get_untracked();
        spawn_local(async move {
            auth::submit_login(&backend, &session, &identifier, &secret).await;
        });
    };

    view! {
        <div class="login-screen">
            <div class="card login-card">
                <div class="login-header">
                    <span class="brand-mark"></span>
                    <h2>"Агентство недвижимости"</h2>
                    <p class="page-description">"Войдите в систему"</p>
                </div>

                {move || {
                    error.get().map(|e| {
                        view! {
                            <div class="login-error">
                                <span class="status-text status-error">{e}</span>
                            </div>
                        }
                    })
                }}

                <form class="login-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Логин"</label>
                        <input
                            id="username"
                            type="text"
                            class="input"
                            placeholder="Введите логин"
                            autocomplete="username"
                            required=true
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            disabled=move || pending.get()
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Пароль"</label>
                        <input
                            id="password"
                            type="password"
                            class="input input-password"
                            placeholder="Введите пароль"
                            autocomplete="current-password"
                            required=true
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || pending.get()
                        />
                    </div>
                    <button
                        type="submit"
                        class="btn btn-primary btn-block"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Вход..." } else { "Войти" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
