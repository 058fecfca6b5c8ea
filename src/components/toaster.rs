//! Toaster Component
//!
//! Renders the notification queue and dismisses each notice after the
//! configured delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use catalog_sync::NoticeKind;

use crate::context::use_app_context;

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_app_context();
    let notices = ctx.notices;
    // Highest notice id that already has a dismiss timer
    let scheduled = StoredValue::new(0u64);

    Effect::new(move |_| {
        let fresh: Vec<u64> = notices.with(|n| {
            n.iter()
                .map(|notice| notice.id)
                .filter(|id| *id > scheduled.get_value())
                .collect()
        });
        for id in fresh {
            scheduled.set_value(id);
            let ttl = ctx.notice_ttl_ms();
            spawn_local(async move {
                TimeoutFuture::new(ttl).await;
                notices.try_update(|n| n.dismiss(id));
            });
        }
    });

    let items = move || {
        notices.with(|n| n.iter().cloned().collect::<Vec<_>>()).into_iter().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "toast toast-success",
                NoticeKind::Error => "toast toast-error",
            };
            let id = notice.id;
            view! {
                <div class=class role="status">
                    <span class="toast-message">{notice.message}</span>
                    <button
                        type="button"
                        class="toast-close"
                        on:click=move |_| { notices.update(|n| { n.dismiss(id); }); }
                    >
                        "×"
                    </button>
                </div>
            }
        }).collect_view()
    };

    view! {
        <div class="toaster">{items}</div>
    }
}
