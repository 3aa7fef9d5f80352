//! Light/dark toggle button.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_click = move |_| {
        let next = theme::toggle(ui.get_untracked().theme);
        ui.update(|u| u.theme = next);
    };

    view! {
        <button
            id="themeToggle"
            class="btn btn-outline-secondary"
            type="button"
            aria-label="Toggle dark mode and light mode"
            on:click=on_click
        >
            <span class="theme-icon">{move || ui.get().toggle_icon()}</span>
        </button>
    }
}
