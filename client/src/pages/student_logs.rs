//! Student logs page: course picker, identifier input, log list and form.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It loads the course list once, provides a
//! memoized `LogsView` projection to its components, and runs the network
//! requests that `LogsState` transitions hand back.

use leptos::prelude::*;

use crate::components::course_select::CourseSelect;
use crate::components::log_form::LogForm;
use crate::components::log_list::LogList;
use crate::components::student_id_input::StudentIdInput;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::logs::{FetchRequest, LogsState};
use crate::state::logs_view::{LogsView, project};

#[component]
pub fn StudentLogsPage() -> impl IntoView {
    let logs = expect_context::<RwSignal<LogsState>>();
    let view_model = Memo::new(move |_| logs.with(project));
    provide_context::<Memo<LogsView>>(view_model);

    Effect::new(move || load_courses(logs));

    view! {
        <div class="student-logs-page">
            <header class="d-flex justify-content-between align-items-center p-3">
                <h1 class="h3 mb-0">"Student Logs"</h1>
                <ThemeToggle/>
            </header>
            <main class="container card p-4">
                <LogForm>
                    <CourseSelect/>
                    <StudentIdInput/>
                    <LogList/>
                </LogForm>
            </main>
        </div>
    }
}

/// Fetch the course list into `logs`. Failures are logged and leave the list empty.
pub(crate) fn load_courses(logs: RwSignal<LogsState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_courses().await {
            Ok(courses) => logs.update(|s| s.set_courses(courses)),
            Err(e) => log::error!("Error loading courses: {e}"),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = logs;
    }
}

/// Run a logs fetch and feed the response back, dropping it if stale.
pub(crate) fn fetch_logs(logs: RwSignal<LogsState>, request: FetchRequest) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_logs(&request.course_id, &request.student_id).await;
        if let Err(e) = &result {
            log::error!("Error fetching logs: {e}");
        }
        match logs.try_update(|s| s.apply_fetch(&request, result)) {
            Some(true) => {}
            Some(false) => log::debug!("dropped stale logs response (generation {})", request.generation),
            None => log::debug!("logs state disposed before response arrived"),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (logs, request);
    }
}

/// Post the current draft, stamped with the local time. No-op when the
/// add-log action is disabled.
pub(crate) fn submit_log(logs: RwSignal<LogsState>) {
    let stamp = crate::util::log_date::now_display();
    let Some(request) = logs.with_untracked(|s| s.begin_submit(stamp)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::logs::SubmitOutcome;
        use crate::state::logs_view::SUBMIT_FAILED_ALERT;

        let result = crate::net::api::create_log(&request.entry).await;
        match logs.try_update(|s| s.apply_submit(&request, result)) {
            Some(SubmitOutcome::Failed(e)) => {
                log::error!("Error saving log: {e}");
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(SUBMIT_FAILED_ALERT);
                }
            }
            Some(SubmitOutcome::Stale) => log::debug!("saved log belongs to a previous selection"),
            Some(SubmitOutcome::Added) | None => {}
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
    }
}
