//! Subtask List Component
//!
//! Checklist of a task's subtasks with a completed/total header, plus the
//! server-side generation trigger for tasks that have none yet.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::Task;
use crate::store::{store_notify, use_app_store, NoticeKind};

/// Subtask checklist for one task
#[component]
pub fn SubtaskList(task: Task) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let id = task.id;
    let (generating, set_generating) = signal(false);

    if task.subtasks.is_empty() {
        // Nothing to break down once the task is done
        if task.completed {
            return view! { <div></div> }.into_any();
        }

        let generate = move |_| {
            set_generating.set(true);
            spawn_local(async move {
                match api::generate_subtasks(id).await {
                    Ok(()) => {
                        store_notify(&store, NoticeKind::Info, "Subtasks generated");
                        ctx.reload();
                    }
                    Err(err) => {
                        tracing::error!(%err, id, "failed to generate subtasks");
                        store_notify(
                            &store,
                            NoticeKind::Error,
                            format!("Error generating subtasks: {err}"),
                        );
                    }
                }
                set_generating.set(false);
            });
        };

        return view! {
            <div class="subtask-section">
                <button
                    class="btn btn-small generate-btn"
                    prop:disabled=move || generating.get()
                    on:click=generate
                >
                    {move || if generating.get() { "Generating..." } else { "Generate subtasks" }}
                </button>
            </div>
        }
        .into_any();
    }

    let (done, total) = task.subtask_progress();

    view! {
        <div class="subtask-section">
            <h4 class="subtask-header">{format!("Subtasks ({done}/{total})")}</h4>
            <ul class="subtask-list">
                {task
                    .subtasks
                    .iter()
                    .map(|subtask| {
                        let subtask_id = subtask.id;
                        let checked = subtask.completed;
                        let row_class = if checked { "subtask completed" } else { "subtask" };

                        view! {
                            <li class=row_class>
                                <input
                                    type="checkbox"
                                    checked=checked
                                    // Toggling is one-directional: done stays done
                                    prop:disabled=checked
                                    on:change=move |_| {
                                        if checked {
                                            return;
                                        }
                                        spawn_local(async move {
                                            match api::complete_subtask(subtask_id).await {
                                                Ok(()) => ctx.reload(),
                                                Err(err) => {
                                                    tracing::error!(
                                                        %err, subtask_id, "failed to complete subtask"
                                                    );
                                                    store_notify(
                                                        &store,
                                                        NoticeKind::Error,
                                                        format!("Error updating subtask: {err}"),
                                                    );
                                                }
                                            }
                                        });
                                    }
                                />
                                <span class="subtask-title">{subtask.title.clone()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
    .into_any()
}
