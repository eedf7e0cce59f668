//! Sidebar component with grouped menu items

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (key, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "production",
            label: "Производство",
            items: vec![
                ("a004_bom", "Спецификации", "layers"),
                ("u601_bom_from_template", "Создание из шаблона", "wand"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <nav class="sidebar">
            {get_menu_groups()
                .into_iter()
                .map(|group| {
                    view! {
                        <div class="sidebar__group">
                            <div class="sidebar__group-label">{group.label}</div>
                            {group
                                .items
                                .into_iter()
                                .map(|(key, label, icon_name)| {
                                    let on_click = move |_| {
                                        tabs_store.open_tab(key, label);
                                    };
                                    view! {
                                        <button class="sidebar__item" on:click=on_click>
                                            <span class="sidebar__item-icon">{icon(icon_name)}</span>
                                            <span class="sidebar__item-label">{label}</span>
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
