use crate::domain::a004_bom::ui::details::BomDetails;
use crate::domain::a004_bom::ui::list::BomList;
use crate::layout::center::tabs::tab::Tab as TabComponent;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::usecases::u601_bom_from_template::view::BomFromTemplateWizard;
use leptos::logging::log;
use leptos::prelude::*;

// Helper component for rendering individual tab content
#[component]
fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let tab_key_for_active_check = tab_key.clone();

    // Check if this tab is active - this closure will be reactive
    let is_active = move || tabs_store.active.get().as_ref() == Some(&tab_key_for_active_check);

    // Render content based on tab key
    let tab_key_for_content = tab_key.clone();
    let content = {
        let key_ref = tab_key_for_content.as_str();
        let key_for_close = tab_key_for_content.clone();

        match key_ref {
            "a004_bom" => view! { <BomList /> }.into_any(),
            "u601_bom_from_template" => view! { <BomFromTemplateWizard /> }.into_any(),
            k if k.starts_with("a004_bom_detail_") => {
                let id = k.strip_prefix("a004_bom_detail_").unwrap().to_string();
                let on_close = Callback::new(move |_: ()| {
                    tabs_store.close_tab(&key_for_close);
                });
                view! { <BomDetails id=id on_close=on_close /> }.into_any()
            }
            _ => {
                log!("Unknown tab type: {}", key_ref);
                view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
            }
        }
    };

    view! {
        <div
            class="tab-page"
            class:hidden=move || !is_active()
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}

#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| {
                        view! { <TabComponent tab=tab /> }
                    }
                />
            </div>
            <div class="tab-content">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| {
                        view! {
                            <TabPage tab=tab tabs_store=tabs_store />
                        }
                    }
                />
            </div>
        </div>
    }
}
