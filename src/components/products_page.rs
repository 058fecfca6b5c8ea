//! Products Page
//!
//! Create form, product table and edit modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use catalog_sync::{
    select_options, Category, EditSession, FormBinding, NotificationSink, Product, ProductFields,
    RecordId, Supplier,
};

use super::{EditModal, ProductFormFields, ProductTable};
use crate::context::use_app_context;
use crate::store::{submit_form, use_resource_list};

#[component]
pub fn ProductsPage() -> impl IntoView {
    let ctx = use_app_context();
    let products = use_resource_list::<Product>(ctx);
    let categories = use_resource_list::<Category>(ctx);
    let suppliers = use_resource_list::<Supplier>(ctx);

    let create_form = RwSignal::new(FormBinding::<ProductFields>::new());
    let edit_form = RwSignal::new(FormBinding::<ProductFields>::new());
    let session = RwSignal::new(EditSession::<Product>::new());

    let category_options = Signal::derive(move || categories.with(|l| select_options(l.items())));
    let supplier_options = Signal::derive(move || suppliers.with(|l| select_options(l.items())));

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        submit_form(ctx, create_form, products, |_| {});
    };

    let on_save = move |_: ()| {
        submit_form(ctx, edit_form, products, move |outcome| {
            session.try_update(|s| edit_form.try_update(|f| s.finish_save(&outcome, f)));
        });
    };

    // Open with the row we have, then swap in the server's current copy
    let on_edit = move |product: Product| {
        let id = product.id.clone();
        session.update(|s| edit_form.update(|f| s.open(product, f)));
        let client = ctx.client::<Product>();
        spawn_local(async move {
            match client.get(&id).await {
                Ok(fresh) => {
                    session.try_update(|s| edit_form.try_update(|f| s.refresh_selection(fresh, f)));
                }
                Err(err) => {
                    log::warn!("[PRODUCTS] could not reload {}: {}", id, err);
                    ctx.notify(|n| n.show_errors(&err.messages()));
                }
            }
        });
    };

    let on_delete = move |id: RecordId| {
        let client = ctx.client::<Product>();
        spawn_local(async move {
            let result = client.delete(&id).await;
            ctx.notify(|notices| {
                session.try_update(|s| {
                    edit_form.try_update(|f| {
                        products.try_update(|l| s.finish_delete(&id, result, l, notices, f))
                    })
                })
            });
        });
    };

    view! {
        <section class="resource-page">
            <h2>"Products"</h2>
            <form class="create-form" on:submit=on_create>
                <ProductFormFields
                    form=create_form
                    categories=category_options
                    suppliers=supplier_options
                />
                <button
                    type="submit"
                    class="primary"
                    disabled=move || create_form.with(|f| f.is_submitting())
                >
                    "Create"
                </button>
                <button type="button" on:click=move |_| create_form.update(|f| f.bind_draft())>
                    "Reset"
                </button>
            </form>
            <ProductTable
                products=products
                categories=categories
                suppliers=suppliers
                on_edit=on_edit
                on_delete=on_delete
            />
            <EditModal
                session=session
                form=edit_form
                categories=category_options
                suppliers=supplier_options
                on_save=on_save
            />
        </section>
    }
}
