//! New Task Form Component
//!
//! Form for creating tasks with title, description, and deadline.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, NewTask};
use crate::context::AppContext;
use crate::datetime::parse_datetime_local;
use crate::store::{store_notify, use_app_store, NoticeKind};

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (deadline_value, set_deadline_value) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title.get();
        if title.trim().is_empty() {
            return;
        }
        let description = description.get();
        let deadline = parse_datetime_local(&deadline_value.get());

        set_submitting.set(true);
        spawn_local(async move {
            let description = description.trim();
            let args = NewTask {
                title: title.trim(),
                description: (!description.is_empty()).then_some(description),
                deadline,
            };
            match api::create_task(&args).await {
                Ok(task) => {
                    tracing::info!(id = task.id, "created task");
                    set_title.set(String::new());
                    set_description.set(String::new());
                    set_deadline_value.set(String::new());
                    ctx.reload();
                }
                Err(err) => {
                    tracing::error!(%err, "failed to create task");
                    store_notify(
                        &store,
                        NoticeKind::Error,
                        format!("Error creating task: {err}"),
                    );
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="task-form" id="task-form" on:submit=create_task>
            <div class="form-row">
                <input
                    id="title"
                    type="text"
                    placeholder="What needs doing?"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </div>
            <div class="form-row">
                <textarea
                    id="description"
                    placeholder="Details (optional)"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
            </div>
            <div class="form-row">
                <input
                    id="deadline"
                    type="datetime-local"
                    prop:value=move || deadline_value.get()
                    on:input=move |ev| set_deadline_value.set(event_target_value(&ev))
                />
                <button type="submit" prop:disabled=move || submitting.get()>
                    {move || if submitting.get() { "Adding..." } else { "Add Task" }}
                </button>
            </div>
        </form>
    }
}
