//! Notification Component
//!
//! Single surface for user-visible messages. Every operation reports
//! through here instead of ad-hoc alerts or silent console logging.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{
    store_clear_notice, store_expire_notice, use_app_store, AppStateStoreFields, NoticeKind,
};

/// How long a notice stays up before auto-dismissing, in milliseconds.
const NOTICE_TIMEOUT_MS: u32 = 6_000;

/// Notification banner, auto-dismissing and manually dismissable
#[component]
pub fn Notification() -> impl IntoView {
    let store = use_app_store();

    // Auto-dismiss. The expiry is keyed by seq so a slow timer for an old
    // notice cannot clear a newer one.
    Effect::new(move |_| {
        if let Some(notice) = store.notice().get() {
            let seq = notice.seq;
            spawn_local(async move {
                TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
                store_expire_notice(&store, seq);
            });
        }
    });

    view! {
        {move || {
            store
                .notice()
                .get()
                .map(|notice| {
                    let notice_class = match notice.kind {
                        NoticeKind::Error => "notice notice-error",
                        NoticeKind::Info => "notice notice-info",
                    };

                    view! {
                        <div class=notice_class role="status">
                            <span class="notice-text">{notice.message.clone()}</span>
                            <button
                                class="notice-dismiss"
                                on:click=move |_| store_clear_notice(&store)
                            >
                                "×"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
