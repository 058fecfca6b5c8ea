//! Suppliers Page
//!
//! Create form and supplier table.

use leptos::prelude::*;

use catalog_sync::{FormBinding, Supplier, SupplierFields};

use super::{DeleteConfirmButton, FieldInput};
use crate::context::use_app_context;
use crate::store::{delete_record, submit_form, use_resource_list};

fn field(form: RwSignal<FormBinding<SupplierFields>>, get: fn(&SupplierFields) -> &String) -> Signal<String> {
    Signal::derive(move || form.with(|f| get(f.values()).clone()))
}

fn setter(
    form: RwSignal<FormBinding<SupplierFields>>,
    set: fn(&mut SupplierFields, String),
) -> Callback<String> {
    Callback::new(move |value: String| form.update(|f| set(f.values_mut(), value)))
}

#[component]
pub fn SuppliersPage() -> impl IntoView {
    let ctx = use_app_context();
    let suppliers = use_resource_list::<Supplier>(ctx);
    let form = RwSignal::new(FormBinding::<SupplierFields>::new());

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        submit_form(ctx, form, suppliers, |_| {});
    };

    let rows = move || {
        suppliers.with(|l| l.items().to_vec()).into_iter().enumerate().map(|(index, supplier)| {
            let id = supplier.id.clone();
            view! {
                <tr>
                    <td>{index + 1}</td>
                    <td>{supplier.name}</td>
                    <td>{supplier.email.unwrap_or_default()}</td>
                    <td>{supplier.phone_number.unwrap_or_default()}</td>
                    <td>{supplier.address.unwrap_or_default()}</td>
                    <td class="actions">
                        <DeleteConfirmButton
                            on_confirm=move |_: ()| delete_record(ctx, suppliers, id.clone())
                        />
                    </td>
                </tr>
            }
        }).collect_view()
    };

    view! {
        <section class="resource-page">
            <h2>"Suppliers"</h2>
            <form class="create-form" on:submit=on_create>
                <div class="form-grid">
                    <FieldInput
                        label="Name"
                        placeholder="Supplier name"
                        value=field(form, |v| &v.name)
                        on_input=setter(form, |v, s| v.name = s)
                    />
                    <FieldInput
                        label="Email"
                        input_type="email"
                        value=field(form, |v| &v.email)
                        on_input=setter(form, |v, s| v.email = s)
                    />
                    <FieldInput
                        label="Phone number"
                        value=field(form, |v| &v.phone_number)
                        on_input=setter(form, |v, s| v.phone_number = s)
                    />
                    <FieldInput
                        label="Address"
                        value=field(form, |v| &v.address)
                        on_input=setter(form, |v, s| v.address = s)
                    />
                </div>
                <button
                    type="submit"
                    class="primary"
                    disabled=move || form.with(|f| f.is_submitting())
                >
                    "Create"
                </button>
                <button type="button" on:click=move |_| form.update(|f| f.bind_draft())>
                    "Reset"
                </button>
            </form>
            <table class="record-table">
                <thead>
                    <tr>
                        <th>"No"</th>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Phone number"</th>
                        <th>"Address"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}
