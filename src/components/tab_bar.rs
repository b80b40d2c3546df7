//! Tab Bar Component
//!
//! Status tabs constraining which tasks are fetched.

use leptos::prelude::*;

use crate::models::TaskStatus;

/// Tab bar for switching between status views
#[component]
pub fn TabBar(
    active_tab: ReadSignal<TaskStatus>,
    set_active_tab: WriteSignal<TaskStatus>,
) -> impl IntoView {
    view! {
        <div class="tab-bar">
            {TaskStatus::ALL
                .iter()
                .map(|status| {
                    let status = *status;
                    let is_active = move || active_tab.get() == status;
                    let tab_class = move || {
                        if is_active() { "tab-button active" } else { "tab-button" }
                    };

                    view! {
                        <button
                            class=tab_class
                            data-status=status.as_str()
                            on:click=move |_| set_active_tab.set(status)
                        >
                            {status.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
