//! Edit Modal Component
//!
//! Modal editing the selected product.

use leptos::prelude::*;

use catalog_sync::{EditSession, FormBinding, Product, ProductFields, SelectOption};

use super::ProductFormFields;

#[component]
pub fn EditModal(
    session: RwSignal<EditSession<Product>>,
    form: RwSignal<FormBinding<ProductFields>>,
    #[prop(into)] categories: Signal<Vec<SelectOption>>,
    #[prop(into)] suppliers: Signal<Vec<SelectOption>>,
    #[prop(into)] on_save: Callback<()>,
) -> impl IntoView {
    let close = move |_| {
        session.update(|s| form.update(|f| s.close(f)));
    };
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_save.run(());
    };
    let title = move || {
        session.with(|s| {
            s.selection()
                .map(|p| format!("Edit {}", p.name))
                .unwrap_or_default()
        })
    };

    view! {
        <Show when=move || session.with(|s| s.is_visible())>
            <div class="modal-backdrop" on:click=close>
                <form
                    class="modal"
                    on:submit=on_submit
                    on:click=|ev| ev.stop_propagation()
                >
                    <h2>{title}</h2>
                    <ProductFormFields form=form categories=categories suppliers=suppliers />
                    <div class="modal-actions">
                        <button type="button" on:click=close>"Close"</button>
                        <button
                            type="submit"
                            class="primary"
                            disabled=move || form.with(|f| f.is_submitting())
                        >
                            "Save"
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
