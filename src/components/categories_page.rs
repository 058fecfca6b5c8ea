//! Categories Page
//!
//! Create form and category table.

use leptos::prelude::*;

use catalog_sync::{Category, CategoryFields, FormBinding};

use super::{DeleteConfirmButton, FieldInput};
use crate::context::use_app_context;
use crate::store::{delete_record, submit_form, use_resource_list};

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let ctx = use_app_context();
    let categories = use_resource_list::<Category>(ctx);
    let form = RwSignal::new(FormBinding::<CategoryFields>::new());

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        submit_form(ctx, form, categories, |_| {});
    };

    let rows = move || {
        categories.with(|l| l.items().to_vec()).into_iter().enumerate().map(|(index, category)| {
            let id = category.id.clone();
            view! {
                <tr>
                    <td>{index + 1}</td>
                    <td>{category.name}</td>
                    <td>{category.description.unwrap_or_default()}</td>
                    <td class="actions">
                        <DeleteConfirmButton
                            on_confirm=move |_: ()| delete_record(ctx, categories, id.clone())
                        />
                    </td>
                </tr>
            }
        }).collect_view()
    };

    view! {
        <section class="resource-page">
            <h2>"Categories"</h2>
            <form class="create-form" on:submit=on_create>
                <div class="form-grid">
                    <FieldInput
                        label="Name"
                        placeholder="Category name"
                        value=Signal::derive(move || form.with(|f| f.values().name.clone()))
                        on_input=move |v: String| form.update(|f| f.values_mut().name = v)
                    />
                    <FieldInput
                        label="Description"
                        value=Signal::derive(move || form.with(|f| f.values().description.clone()))
                        on_input=move |v: String| form.update(|f| f.values_mut().description = v)
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
                        <th>"Description"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}
