//! Product Form Component
//!
//! Product fields shared by the create form and the edit modal.

use leptos::prelude::*;

use catalog_sync::{FormBinding, ProductFields, RecordId, SelectOption};

use super::{FieldInput, RecordSelect};

/// Signal reading one product field
fn field(
    form: RwSignal<FormBinding<ProductFields>>,
    get: fn(&ProductFields) -> &String,
) -> Signal<String> {
    Signal::derive(move || form.with(|f| get(f.values()).clone()))
}

/// Callback writing one product field
fn setter(
    form: RwSignal<FormBinding<ProductFields>>,
    set: fn(&mut ProductFields, String),
) -> Callback<String> {
    Callback::new(move |value: String| form.update(|f| set(f.values_mut(), value)))
}

#[component]
pub fn ProductFormFields(
    form: RwSignal<FormBinding<ProductFields>>,
    #[prop(into)] categories: Signal<Vec<SelectOption>>,
    #[prop(into)] suppliers: Signal<Vec<SelectOption>>,
) -> impl IntoView {
    view! {
        <div class="form-grid">
            <RecordSelect
                label="Category"
                options=categories
                selected=Signal::derive(move || form.with(|f| f.values().category_id.clone()))
                on_change={move |id: Option<RecordId>| form.update(|f| f.values_mut().category_id = id)}
            />
            <RecordSelect
                label="Supplier"
                options=suppliers
                selected=Signal::derive(move || form.with(|f| f.values().supplier_id.clone()))
                on_change={move |id: Option<RecordId>| form.update(|f| f.values_mut().supplier_id = id)}
            />
            <FieldInput
                label="Name"
                placeholder="Product name"
                value=field(form, |v| &v.name)
                on_input=setter(form, |v, s| v.name = s)
            />
            <FieldInput
                label="Price"
                input_type="number"
                value=field(form, |v| &v.price)
                on_input=setter(form, |v, s| v.price = s)
            />
            <FieldInput
                label="Discount %"
                input_type="number"
                value=field(form, |v| &v.discount)
                on_input=setter(form, |v, s| v.discount = s)
            />
            <FieldInput
                label="Stock"
                input_type="number"
                value=field(form, |v| &v.stock)
                on_input=setter(form, |v, s| v.stock = s)
            />
            <FieldInput
                label="Description"
                value=field(form, |v| &v.description)
                on_input=setter(form, |v, s| v.description = s)
            />
        </div>
    }
}
