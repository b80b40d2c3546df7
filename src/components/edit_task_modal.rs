//! Edit Task Modal Component
//!
//! Modal editor pre-populated from a fresh fetch of the task being edited.
//! Closes on save, cancel, overlay click, and Escape.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, TaskPatch};
use crate::context::AppContext;
use crate::datetime::{datetime_local_value, parse_datetime_local};
use crate::models::{TaskId, TaskPriority};
use crate::store::{store_notify, use_app_store, NoticeKind};

/// Modal for editing an existing task
#[component]
pub fn EditTaskModal(
    editing_task: ReadSignal<Option<TaskId>>,
    set_editing_task: WriteSignal<Option<TaskId>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (deadline_value, set_deadline_value) = signal(String::new());
    let (priority, set_priority) = signal(TaskPriority::default());
    let (saving, set_saving) = signal(false);

    // Populate the form from a fresh fetch whenever editing starts
    Effect::new(move |_| {
        if let Some(id) = editing_task.get() {
            spawn_local(async move {
                match api::get_task(id).await {
                    Ok(task) => {
                        set_title.set(task.title);
                        set_description.set(task.description.unwrap_or_default());
                        set_deadline_value.set(
                            task.deadline
                                .as_ref()
                                .map(datetime_local_value)
                                .unwrap_or_default(),
                        );
                        set_priority.set(task.priority);
                    }
                    Err(err) => {
                        tracing::error!(%err, id, "failed to load task for editing");
                        store_notify(
                            &store,
                            NoticeKind::Error,
                            format!("Error loading task details: {err}"),
                        );
                        set_editing_task.set(None);
                    }
                }
            });
        }
    });

    // Escape closes the modal
    let escape_handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && editing_task.get_untracked().is_some() {
            set_editing_task.set(None);
        }
    });
    on_cleanup(move || escape_handle.remove());

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = editing_task.get_untracked() else {
            return;
        };
        let new_title = title.get();
        if new_title.trim().is_empty() {
            return;
        }

        let patch = TaskPatch {
            title: Some(new_title.trim().to_string()),
            description: Some(description.get().trim().to_string()),
            deadline: Some(parse_datetime_local(&deadline_value.get())),
            priority: Some(priority.get()),
            ..TaskPatch::default()
        };

        set_saving.set(true);
        spawn_local(async move {
            match api::update_task(id, &patch).await {
                Ok(_) => {
                    set_editing_task.set(None);
                    ctx.reload();
                }
                Err(err) => {
                    tracing::error!(%err, id, "failed to update task");
                    store_notify(
                        &store,
                        NoticeKind::Error,
                        format!("Error updating task: {err}"),
                    );
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <Show when=move || editing_task.get().is_some()>
            <div class="modal-overlay active" on:click=move |_| set_editing_task.set(None)>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>"Edit Task"</h2>
                        <button class="modal-close" on:click=move |_| set_editing_task.set(None)>
                            "×"
                        </button>
                    </div>
                    <form id="edit-form" on:submit=save>
                        <label for="edit-title">"Title"</label>
                        <input
                            id="edit-title"
                            type="text"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />

                        <label for="edit-description">"Description"</label>
                        <textarea
                            id="edit-description"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>

                        <label for="edit-deadline">"Deadline"</label>
                        <input
                            id="edit-deadline"
                            type="datetime-local"
                            prop:value=move || deadline_value.get()
                            on:input=move |ev| set_deadline_value.set(event_target_value(&ev))
                        />

                        <label for="edit-priority">"Priority"</label>
                        <select
                            id="edit-priority"
                            prop:value=move || priority.get().as_str().to_string()
                            on:change=move |ev| {
                                if let Some(parsed) = TaskPriority::parse(&event_target_value(&ev)) {
                                    set_priority.set(parsed);
                                }
                            }
                        >
                            {TaskPriority::ALL
                                .iter()
                                .map(|p| {
                                    view! { <option value=p.as_str()>{p.as_str()}</option> }
                                })
                                .collect_view()}
                        </select>

                        <div class="modal-actions">
                            <button
                                type="button"
                                class="btn"
                                on:click=move |_| set_editing_task.set(None)
                            >
                                "Cancel"
                            </button>
                            <button
                                id="save-btn"
                                type="submit"
                                class="btn btn-primary"
                                prop:disabled=move || saving.get()
                            >
                                {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
