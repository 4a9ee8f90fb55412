use leptos::prelude::*;

/// Sections reachable from the sidebar. Switching is in-app state; a real
/// navigation would reload the app and drop the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
}

impl Section {
    pub const ALL: &'static [Section] = &[Section::Home];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Главная",
        }
    }
}

fn nav_class(section: Section, active: Section) -> &'static str {
    if section == active {
        "nav-link nav-link-active"
    } else {
        "nav-link"
    }
}

#[component]
pub fn Sidebar(
    active: ReadSignal<Section>,
    #[prop(into)] on_select: Callback<Section>,
) -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">"EstatePanel"</h1>
                <p class="sidebar-subtitle">"Управление"</p>
            </div>
            <ul class="nav-list">
                {Section::ALL
                    .iter()
                    .map(|&section| {
                        view! {
                            <li class="nav-item">
                                <button
                                    type="button"
                                    class=move || nav_class(section, active.get())
                                    on:click=move |_| on_select.run(section)
                                >
                                    {section.label()}
                                </button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </nav>
    }
}
