//! UI Components
//!
//! Reusable Leptos components.

mod categories_page;
mod delete_confirm_button;
mod edit_modal;
mod field_input;
mod product_form;
mod product_table;
mod products_page;
mod record_select;
mod resource_tab_bar;
mod suppliers_page;
mod toaster;

pub use categories_page::CategoriesPage;
pub use delete_confirm_button::DeleteConfirmButton;
pub use edit_modal::EditModal;
pub use field_input::FieldInput;
pub use product_form::ProductFormFields;
pub use product_table::ProductTable;
pub use products_page::ProductsPage;
pub use record_select::RecordSelect;
pub use resource_tab_bar::ResourceTabBar;
pub use suppliers_page::SuppliersPage;
pub use toaster::Toaster;
