//! Form wrapper holding the log textarea and the add-log button.

use leptos::prelude::*;

use crate::state::logs::LogsState;
use crate::state::logs_view::LogsView;

#[component]
pub fn LogForm(children: Children) -> impl IntoView {
    let logs = expect_context::<RwSignal<LogsState>>();
    let view_model = expect_context::<Memo<LogsView>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        crate::pages::student_logs::submit_log(logs);
    };

    view! {
        <form id="logForm" on:submit=on_submit>
            {children()}
            <div class="mb-3">
                <label for="logTextarea" class="form-label">"New Log"</label>
                <textarea
                    id="logTextarea"
                    class="form-control"
                    rows="3"
                    data-cy="log_textarea"
                    prop:value=move || view_model.get().draft
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        logs.update(|s| s.set_draft(&text));
                    }
                ></textarea>
            </div>
            <button
                id="addLogBtn"
                class="btn btn-primary"
                type="submit"
                data-cy="add_log_btn"
                disabled=move || !view_model.get().add_log_enabled
            >
                "Add Log"
            </button>
        </form>
    }
}
