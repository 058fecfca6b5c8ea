//! Catalog Admin Frontend App
//!
//! Tab bar over the three resource pages plus the toast area.

use leptos::prelude::*;

use catalog_sync::ApiConfig;

use crate::components::{CategoriesPage, ProductsPage, ResourceTabBar, SuppliersPage, Toaster};
use crate::context::AppContext;
use crate::models::ResourceTab;

#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    let (current_tab, set_current_tab) = signal(ResourceTab::Products);

    // Provide context to all children
    provide_context(AppContext::new(config));

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Catalog Admin"</h1>
                <ResourceTabBar current_tab=current_tab set_current_tab=set_current_tab />
            </header>

            // Pages remount on switch, so each tab reloads its collections
            <main class="main-content">
                {move || match current_tab.get() {
                    ResourceTab::Products => view! { <ProductsPage /> }.into_any(),
                    ResourceTab::Categories => view! { <CategoriesPage /> }.into_any(),
                    ResourceTab::Suppliers => view! { <SuppliersPage /> }.into_any(),
                }}
            </main>

            <Toaster />
        </div>
    }
}
