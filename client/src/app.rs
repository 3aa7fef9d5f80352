//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::student_logs::StudentLogsPage;
use crate::state::{logs::LogsState, ui::UiState};

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="light" data-bs-theme="light">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, resolves the theme, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let logs = RwSignal::new(LogsState::default());

    provide_context(ui);
    provide_context(logs);

    // Created before any page effect so the theme lands before courses load.
    Effect::new(move || {
        let theme = crate::util::theme::resolve_initial_theme();
        ui.update(|u| u.theme = theme);
    });

    view! {
        <Stylesheet id="bootstrap" href=BOOTSTRAP_CSS/>
        <Title text="Student Logs"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=StudentLogsPage/>
            </Routes>
        </Router>
    }
}
