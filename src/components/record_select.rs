//! Record Select Component
//!
//! Dropdown picking a category or supplier for a product.

use leptos::prelude::*;

use catalog_sync::{RecordId, SelectOption};

/// Select bound to an optional record id. The empty entry means "none".
#[component]
pub fn RecordSelect(
    #[prop(into)] label: String,
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    #[prop(into)] selected: Signal<Option<RecordId>>,
    #[prop(into)] on_change: Callback<Option<RecordId>>,
) -> impl IntoView {
    let on_select = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        let picked = options.with(|opts| {
            opts.iter()
                .find(|opt| opt.value.to_string() == value)
                .map(|opt| opt.value.clone())
        });
        on_change.run(picked);
    };

    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <select
                prop:value=move || selected.get().map(|id| id.to_string()).unwrap_or_default()
                on:change=on_select
            >
                <option value="">"-"</option>
                {move || options.get().into_iter().map(|opt| {
                    let value = opt.value.to_string();
                    let is_selected = {
                        let id = opt.value.clone();
                        move || selected.with(|s| s.as_ref() == Some(&id))
                    };
                    view! {
                        <option value=value selected=is_selected>{opt.label}</option>
                    }
                }).collect_view()}
            </select>
        </label>
    }
}
