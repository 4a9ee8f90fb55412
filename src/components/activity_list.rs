use leptos::prelude::*;

/// One line of a recent-activity card.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRow {
    pub title: String,
    pub subtitle: String,
    pub value: String,
}

#[component]
pub fn ActivityList(
    #[prop(into)] title: String,
    rows: Vec<ActivityRow>,
    /// Shown instead of the list when `rows` is empty
    #[prop(into)]
    empty_text: String,
) -> impl IntoView {
    let body = if rows.is_empty() {
        view! { <p class="activity-empty">{empty_text}</p> }.into_any()
    } else {
        view! {
            <ul class="activity-list">
                {rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <li class="activity-item">
                                <div class="activity-text">
                                    <p class="activity-title">{row.title}</p>
                                    <p class="activity-subtitle">{row.subtitle}</p>
                                </div>
                                <div class="activity-value">{row.value}</div>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        }
        .into_any()
    };

    view! {
        <div class="card activity-card">
            <h3>{title}</h3>
            {body}
        </div>
    }
}
