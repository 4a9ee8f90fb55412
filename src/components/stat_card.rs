use leptos::prelude::*;

#[component]
pub fn StatCard(
    /// Counter caption, e.g. "Клиенты"
    #[prop(into)]
    label: String,
    /// Already formatted value
    #[prop(into)]
    value: String,
    /// Accent class for the icon chip
    #[prop(optional, into)]
    accent: Option<String>,
) -> impl IntoView {
    let chip_class = format!("stat-chip {}", accent.unwrap_or_else(|| "accent-blue".to_string()));

    view! {
        <div class="card stat-card">
            <div class="stat-card-header">
                <span class="stat-label">{label}</span>
                <span class=chip_class></span>
            </div>
            <div class="stat-value">{value}</div>
        </div>
    }
}
