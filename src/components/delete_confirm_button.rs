//! Delete Confirm Button Component
//!
//! Row-level delete guarded by an inline confirmation step.

use leptos::prelude::*;

/// "Delete" that flips into a "Delete?" ✓/✗ prompt.
///
/// Buttons are `type="button"` because rows sit next to create forms, and
/// the prompt folds back after confirming so a failed delete can be retried.
#[component]
pub fn DeleteConfirmButton(#[prop(into)] on_confirm: Callback<()>) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    let ask = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        set_confirming.set(true);
    };
    let confirm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        set_confirming.set(false);
        on_confirm.run(());
    };
    let cancel = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        set_confirming.set(false);
    };

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || view! {
                <button type="button" class="delete-btn" on:click=ask>"Delete"</button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button type="button" class="confirm-btn" on:click=confirm>"✓"</button>
                <button type="button" class="cancel-btn" on:click=cancel>"✗"</button>
            </span>
        </Show>
    }
}
