//! Course picker with a leading "Choose Courses" sentinel.

use leptos::prelude::*;

use crate::state::logs::LogsState;
use crate::state::logs_view::LogsView;

#[component]
pub fn CourseSelect() -> impl IntoView {
    let logs = expect_context::<RwSignal<LogsState>>();
    let view_model = expect_context::<Memo<LogsView>>();

    let on_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        logs.update(|s| s.select_course(&value));
    };

    view! {
        <div class="mb-3">
            <label for="course" class="form-label">"Select Course"</label>
            <select id="course" class="form-select" data-cy="course_select" on:change=on_change>
                {move || {
                    view_model
                        .get()
                        .course_options
                        .into_iter()
                        .map(|opt| view! { <option value=opt.value selected=opt.selected>{opt.label}</option> })
                        .collect_view()
                }}
            </select>
        </div>
    }
}
