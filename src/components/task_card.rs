//! Task Card Component
//!
//! A single task card with priority badge, deadline, tags, subtasks,
//! and actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::datetime::format_deadline;
use crate::models::{Task, TaskId};
use crate::store::{store_notify, use_app_store, NoticeKind};
use crate::components::{DeleteConfirmButton, SubtaskList};

/// A single task card
#[component]
pub fn TaskCard(task: Task, set_editing_task: WriteSignal<Option<TaskId>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let id = task.id;
    let completed = task.completed;
    let card_class = format!("task-card {}", task.priority.as_str());
    let badge_class = format!("priority-badge priority-{}", task.priority.as_str());
    let deadline_text = format_deadline(task.deadline.as_ref());

    let complete_task = move |_| {
        spawn_local(async move {
            match api::complete_task(id).await {
                Ok(_) => ctx.reload(),
                Err(err) => {
                    tracing::error!(%err, id, "failed to complete task");
                    store_notify(
                        &store,
                        NoticeKind::Error,
                        format!("Error completing task: {err}"),
                    );
                }
            }
        });
    };

    let delete_task = move |_: ()| {
        spawn_local(async move {
            match api::delete_task(id).await {
                Ok(()) => ctx.reload(),
                Err(err) => {
                    tracing::error!(%err, id, "failed to delete task");
                    store_notify(
                        &store,
                        NoticeKind::Error,
                        format!("Error deleting task: {err}"),
                    );
                }
            }
        });
    };

    view! {
        <div class=card_class>
            <div class="task-header">
                <div>
                    <h3 class="task-title">{task.title.clone()}</h3>
                    {task
                        .description
                        .clone()
                        .map(|text| view! { <p class="task-description">{text}</p> })}
                    {(!task.tags.is_empty())
                        .then(|| view! {
                            <div class="task-tags">
                                {task
                                    .tags
                                    .iter()
                                    .map(|tag| view! { <span class="tag">{tag.name.clone()}</span> })
                                    .collect_view()}
                            </div>
                        })}
                </div>
                <span class=badge_class>{task.priority.as_str()}</span>
            </div>

            <div class="task-meta">
                <span class="task-deadline">{deadline_text}</span>
            </div>

            <SubtaskList task=task.clone() />

            <div class="task-actions">
                {(!completed)
                    .then(|| view! {
                        <button class="btn btn-success btn-small" on:click=complete_task>
                            "Complete"
                        </button>
                        <button
                            class="btn btn-warning btn-small"
                            on:click=move |_| set_editing_task.set(Some(id))
                        >
                            "Edit"
                        </button>
                    })}
                <DeleteConfirmButton
                    button_class="btn btn-danger btn-small"
                    on_confirm=Callback::new(delete_task)
                />
            </div>
        </div>
    }
}
