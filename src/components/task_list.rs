//! Task List Component
//!
//! Renders the fetched tasks as cards, or an empty/error state.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::TaskId;
use crate::store::{use_app_store, AppStateStoreFields, ListState};
use crate::components::TaskCard;

/// Task list area: cards, empty state, or load error
#[component]
pub fn TaskList(set_editing_task: WriteSignal<Option<TaskId>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    view! {
        <div class="task-list" id="task-list">
            {move || match store.list_state().get() {
                ListState::Loading => {
                    view! { <div class="loading">"Loading tasks..."</div> }.into_any()
                }
                ListState::Failed => {
                    view! {
                        <div class="error-message">
                            "Error loading tasks. Please try again."
                        </div>
                    }
                        .into_any()
                }
                ListState::Ready if store.tasks().read().is_empty() => {
                    let tab = ctx.active_tab.get();
                    view! {
                        <div class="empty-state">
                            <h3>{format!("No {} tasks", tab.as_str())}</h3>
                            <p>"You're all caught up! 🎉"</p>
                        </div>
                    }
                        .into_any()
                }
                ListState::Ready => {
                    view! {
                        <For
                            each=move || store.tasks().get()
                            key=|task| {
                                // Use a tuple of all mutable fields to ensure changes cause re-render
                                // This is verbose but guaranteed to work
                                (
                                    task.id,
                                    task.title.clone(),
                                    task.description.clone(),
                                    task.deadline,
                                    task.priority,
                                    task.completed,
                                    task.subtask_progress(),
                                )
                            }
                            children=move |task| {
                                view! { <TaskCard task=task set_editing_task=set_editing_task /> }
                            }
                        />
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
