//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Task;

/// Rendering state of the task list area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListState {
    /// Initial fetch still in flight
    #[default]
    Loading,
    Ready,
    /// Last fetch failed; prior content is gone, not rolled back
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Info,
}

/// A message for the notification surface. `seq` identifies the notice so
/// a delayed auto-dismiss cannot clear a newer message.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub seq: u32,
    pub kind: NoticeKind,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Tasks in the active tab, as last fetched
    pub tasks: Vec<Task>,
    /// Whether the list area shows content, a spinner, or an error
    pub list_state: ListState,
    /// Currently visible notice, if any
    pub notice: Option<Notice>,
    /// Monotonic notice counter
    pub notice_seq: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the rendered list with a fresh API response
pub fn store_set_tasks(store: &AppStore, tasks: Vec<Task>) {
    store.tasks().set(tasks);
    store.list_state().set(ListState::Ready);
}

/// Discard the list after a failed fetch; there is no rollback
pub fn store_set_list_failed(store: &AppStore) {
    store.tasks().write().clear();
    store.list_state().set(ListState::Failed);
}

/// Show a notice, superseding whatever is currently visible
pub fn store_notify(store: &AppStore, kind: NoticeKind, message: impl Into<String>) {
    let seq = store.notice_seq().get_untracked() + 1;
    store.notice_seq().set(seq);
    store.notice().set(Some(Notice {
        seq,
        kind,
        message: message.into(),
    }));
}

/// Dismiss whatever notice is showing
pub fn store_clear_notice(store: &AppStore) {
    store.notice().set(None);
}

/// Clear the notice only if it is still the one identified by `seq`
pub fn store_expire_notice(store: &AppStore, seq: u32) {
    let current = store.notice().get_untracked();
    if current.map(|n| n.seq) == Some(seq) {
        store.notice().set(None);
    }
}
