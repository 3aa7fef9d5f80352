//! Eight-digit student identifier input.
//!
//! Input is sanitized on every keystroke and written back to the field; a
//! complete identifier triggers the logs fetch.

use leptos::prelude::*;

use crate::state::logs::LogsState;
use crate::state::logs_view::LogsView;

#[component]
pub fn StudentIdInput() -> impl IntoView {
    let logs = expect_context::<RwSignal<LogsState>>();
    let view_model = expect_context::<Memo<LogsView>>();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let focus_seq = Memo::new(move |_| logs.with(|s| s.focus_student_id_seq));
    Effect::new(move || {
        let seq = focus_seq.get();
        #[cfg(feature = "hydrate")]
        {
            // Wait a frame so the section is no longer `d-none`.
            if seq > 0 {
                leptos::leptos_dom::helpers::request_animation_frame(move || {
                    if let Some(input) = input_ref.get_untracked() {
                        let _ = input.focus();
                    }
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = seq;
        }
    });

    let on_input = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        let request = logs.try_update(|s| s.input_student_id(&raw)).flatten();
        #[cfg(feature = "hydrate")]
        {
            let sanitized = logs.with_untracked(|s| s.student_id.clone());
            event_target::<web_sys::HtmlInputElement>(&ev).set_value(&sanitized);
        }
        if let Some(request) = request {
            crate::pages::student_logs::fetch_logs(logs, request);
        }
    };

    let section_class = move || {
        if view_model.get().show_student_id { "mb-3" } else { "mb-3 d-none" }
    };

    view! {
        <div id="uvuIdSection" class=section_class>
            <label for="uvuId" class="form-label">"UVU ID"</label>
            <input
                id="uvuId"
                class="form-control"
                type="text"
                inputmode="numeric"
                autocomplete="off"
                placeholder="8-digit UVU ID"
                data-cy="uvuId_input"
                node_ref=input_ref
                prop:value=move || view_model.get().student_id
                on:input=on_input
            />
        </div>
    }
}
