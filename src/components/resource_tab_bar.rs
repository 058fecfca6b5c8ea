//! Resource Tab Bar Component
//!
//! Tab bar for switching between the resource pages.

use leptos::prelude::*;

use crate::models::ResourceTab;

/// Resource Tab Bar component
#[component]
pub fn ResourceTabBar(
    current_tab: ReadSignal<ResourceTab>,
    set_current_tab: WriteSignal<ResourceTab>,
) -> impl IntoView {
    view! {
        <nav class="resource-tab-bar">
            {ResourceTab::ALL.into_iter().map(|tab| {
                let tab_class = move || {
                    if current_tab.get() == tab { "resource-tab active" } else { "resource-tab" }
                };
                view! {
                    <button
                        class=tab_class
                        on:click=move |_| set_current_tab.set(tab)
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
