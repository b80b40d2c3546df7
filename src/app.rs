//! Task Board App
//!
//! Root component: wires the tab bar, create form, task list, edit modal,
//! and notification surface around one guarded load path.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{self, Ordering};
use crate::components::{EditTaskModal, NewTaskForm, Notification, TabBar, TaskList};
use crate::context::{AppContext, RequestGuard};
use crate::models::{TaskId, TaskStatus};
use crate::store::{store_notify, store_set_list_failed, store_set_tasks, AppState, NoticeKind};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (active_tab, set_active_tab) = signal(TaskStatus::default());
    let (editing_task, set_editing_task) = signal::<Option<TaskId>>(None);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let store = Store::new(AppState::default());
    provide_context(store);

    // Provide context to all children
    provide_context(AppContext::new((reload_trigger, set_reload_trigger), active_tab));

    // Overlapping fetches on rapid tab switches: only the latest token's
    // response may touch the store.
    let fetch_guard = RequestGuard::new();

    // Load tasks on mount, on tab change, and after every mutation
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let tab = active_tab.get();
        let guard = fetch_guard.clone();
        let token = guard.begin();

        spawn_local(async move {
            match api::list_tasks(tab, Ordering::default()).await {
                Ok(tasks) => {
                    if guard.is_current(token) {
                        tracing::debug!(count = tasks.len(), tab = tab.as_str(), "loaded tasks");
                        store_set_tasks(&store, tasks);
                    }
                }
                Err(err) => {
                    if guard.is_current(token) {
                        tracing::error!(%err, tab = tab.as_str(), "failed to load tasks");
                        store_set_list_failed(&store);
                        store_notify(
                            &store,
                            NoticeKind::Error,
                            format!("Error loading tasks: {err}"),
                        );
                    }
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Task Board"</h1>
            </header>

            <Notification />

            <NewTaskForm />

            <TabBar active_tab=active_tab set_active_tab=set_active_tab />

            <TaskList set_editing_task=set_editing_task />

            <EditTaskModal editing_task=editing_task set_editing_task=set_editing_task />
        </div>
    }
}
