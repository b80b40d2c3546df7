//! Application Context
//!
//! Shared state provided via Leptos Context API, plus the request guard
//! that keeps overlapping list fetches from racing each other.

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::models::TaskStatus;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload tasks from the API - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload tasks from the API - write
    set_reload_trigger: WriteSignal<u32>,
    /// Currently active status tab - read
    pub active_tab: ReadSignal<TaskStatus>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        active_tab: ReadSignal<TaskStatus>,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            active_tab,
        }
    }

    /// Trigger a reload of the task list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

/// Monotonic token for in-flight list fetches. A response is only applied
/// when its token is still the latest, so a slow response from a superseded
/// tab switch cannot overwrite a newer one.
#[derive(Clone, Default)]
pub struct RequestGuard(Rc<Cell<u64>>);

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, invalidating all earlier tokens.
    pub fn begin(&self) -> u64 {
        let token = self.0.get() + 1;
        self.0.set(token);
        token
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.0.get() == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_token_wins() {
        let guard = RequestGuard::new();
        let first = guard.begin();
        let second = guard.begin();

        // The superseded request must be dropped, whatever order the
        // responses arrive in.
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn test_clones_share_state() {
        let guard = RequestGuard::new();
        let token = guard.clone().begin();
        assert!(guard.is_current(token));
        guard.clone().begin();
        assert!(!guard.is_current(token));
    }
}
