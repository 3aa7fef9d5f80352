//! Fetched log entries, newest first. Clicking an entry hides or shows its text.

use leptos::prelude::*;

use crate::state::logs::LogsState;
use crate::state::logs_view::{LogItemView, LogsView, PlaceholderKind};

#[component]
pub fn LogList() -> impl IntoView {
    let logs = expect_context::<RwSignal<LogsState>>();
    let view_model = expect_context::<Memo<LogsView>>();

    let section_class = move || if view_model.get().show_logs { "mb-3" } else { "mb-3 d-none" };

    view! {
        <div id="logsSection" class=section_class>
            <h2 id="uvuIdDisplay" class="h5">{move || view_model.get().heading}</h2>
            <ul id="logsList" class="list-group" data-cy="logs">
                {move || {
                    view_model.get().placeholder.map(|placeholder| {
                        let class = match placeholder.kind {
                            PlaceholderKind::Empty => "list-group-item text-muted no-logs",
                            PlaceholderKind::Error => "list-group-item text-muted",
                        };
                        view! { <li class=class>{placeholder.text}</li> }
                    })
                }}
                {move || {
                    view_model
                        .get()
                        .entries
                        .into_iter()
                        .map(|item| view! { <LogItem item=item logs=logs/> })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

#[component]
fn LogItem(item: LogItemView, logs: RwSignal<LogsState>) -> impl IntoView {
    let index = item.index;
    let body_class = if item.body_visible { "mb-0 mt-2" } else { "mb-0 mt-2 d-none" };

    view! {
        <li
            class="list-group-item list-group-item-action"
            on:click=move |_| logs.update(|s| s.toggle_entry(index))
        >
            <div>
                <small class="text-muted">{item.date}</small>
            </div>
            <pre class=body_class>
                <p class="mb-0">{item.text}</p>
            </pre>
        </li>
    }
}
