//! Product Table Component
//!
//! Product rows with derived discounted price and row actions.

use leptos::prelude::*;

use catalog_sync::{format_amount, Category, ListController, Product, RecordId, RecordRef, Resource, Supplier};

use super::DeleteConfirmButton;

/// Name of the referenced record: embedded first, then looked up by id.
fn ref_name<R: Resource>(embedded: Option<&RecordRef>, id: Option<&RecordId>, records: &[R]) -> String {
    if let Some(r) = embedded {
        return r.name.clone();
    }
    id.and_then(|id| records.iter().find(|r| r.id() == id))
        .map(|r| r.label().to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn ProductTable(
    products: RwSignal<ListController<Product>>,
    categories: RwSignal<ListController<Category>>,
    suppliers: RwSignal<ListController<Supplier>>,
    #[prop(into)] on_edit: Callback<Product>,
    #[prop(into)] on_delete: Callback<RecordId>,
) -> impl IntoView {
    let rows = move || {
        let items = products.with(|l| l.items().to_vec());
        items.into_iter().enumerate().map(|(index, product)| {
            let supplier = suppliers.with(|l| {
                ref_name(product.supplier.as_ref(), product.supplier_ref_id(), l.items())
            });
            let category = categories.with(|l| {
                ref_name(product.category.as_ref(), product.category_ref_id(), l.items())
            });
            let id = product.id.clone();
            let discounted = format_amount(product.discounted_price());
            let stock = product.stock.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string());
            let row = product.clone();

            view! {
                <tr>
                    <td>{index + 1}</td>
                    <td>{product.name}</td>
                    <td>{supplier}</td>
                    <td>{category}</td>
                    <td class="num">{format_amount(product.price)}</td>
                    <td class="num">{format_amount(product.discount)}</td>
                    <td class="num">{stock}</td>
                    <td class="num">{discounted}</td>
                    <td>{product.description.unwrap_or_default()}</td>
                    <td class="actions">
                        <button type="button" class="edit-btn" on:click=move |_| on_edit.run(row.clone())>
                            "Edit"
                        </button>
                        <DeleteConfirmButton on_confirm=move |_: ()| on_delete.run(id.clone()) />
                    </td>
                </tr>
            }
        }).collect_view()
    };

    view! {
        <table class="record-table">
            <thead>
                <tr>
                    <th>"No"</th>
                    <th>"Name"</th>
                    <th>"Supplier"</th>
                    <th>"Category"</th>
                    <th>"Price"</th>
                    <th>"Discount %"</th>
                    <th>"Stock"</th>
                    <th>"Discounted price"</th>
                    <th>"Description"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
        <Show when=move || products.with(|l| l.is_empty() && !l.is_loading())>
            <p class="empty-note">"No products yet"</p>
        </Show>
    }
}
