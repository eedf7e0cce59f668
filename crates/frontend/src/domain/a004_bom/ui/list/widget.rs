use crate::domain::a004_bom::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::number_format::format_money;
use crate::shared::page_frame::PageFrame;
use contracts::domain::a004_bom::aggregate::Bom;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Форматирует ISO 8601 дату в dd.mm.yyyy
fn format_date(iso_date: &str) -> String {
    if let Some(date_part) = iso_date.split('T').next() {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                return format!("{}.{}.{}", day, month, year);
            }
        }
    }
    iso_date.to_string()
}

#[component]
pub fn BomList() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let (items, set_items) = signal(Vec::<Bom>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (search_query, set_search_query) = signal(String::new());

    let load_items = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let query = search_query.get_untracked();
            match api::list_boms(&query).await {
                Ok(list) => {
                    let _ = set_items.try_set(list);
                    let _ = set_loading.try_set(false);
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(format!("Ошибка загрузки: {}", e)));
                    let _ = set_loading.try_set(false);
                }
            }
        });
    };

    Effect::new(move || {
        load_items();
    });

    let open_detail = move |id: String, code: String| {
        tabs_store.open_tab(
            &format!("a004_bom_detail_{}", id),
            &format!("Спецификация {}", code),
        );
    };

    let open_wizard = move |_| {
        tabs_store.open_tab("u601_bom_from_template", "Создание из шаблона");
    };

    view! {
        <PageFrame page_id="a004_bom--list" category="list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Спецификации"</h1>
                    <span class="badge badge--primary">
                        {move || items.get().len().to_string()}
                    </span>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=open_wizard>
                        "Создать из шаблона"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Код или название..."
                        prop:value=move || search_query.get()
                        on:input=move |ev| set_search_query.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                load_items();
                            }
                        }
                    />
                    <Button
                        on_click=move |_| load_items()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "Загрузка..." } else { "Обновить" }}
                    </Button>
                </Flex>

                {move || {
                    error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })
                }}

                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Код"</th>
                            <th>"Название"</th>
                            <th class="num">"Выпуск"</th>
                            <th class="num">"Строк"</th>
                            <th class="num">"Себестоимость"</th>
                            <th>"Вариант"</th>
                            <th>"Изменена"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || items.get()
                            key=|bom| bom.to_string_id()
                            children=move |bom| {
                                let id = bom.to_string_id();
                                let code = bom.base.code.clone();
                                let code_text = code.clone();
                                let total = bom.total_cost();
                                let updated = format_date(
                                    &bom.base.metadata.updated_at.to_rfc3339(),
                                );
                                let is_variant = bom.parent_bom_ref.is_some();
                                view! {
                                    <tr>
                                        <td>
                                            <a
                                                href="#"
                                                class="table__link"
                                                on:click=move |ev| {
                                                    ev.prevent_default();
                                                    open_detail(id.clone(), code.clone());
                                                }
                                            >
                                                {code_text}
                                            </a>
                                        </td>
                                        <td>{bom.base.description.clone()}</td>
                                        <td class="num">{bom.output_quantity}</td>
                                        <td class="num">{bom.items.len()}</td>
                                        <td class="num">{format_money(total)}</td>
                                        <td>
                                            {if is_variant {
                                                view! {
                                                    <span class="badge badge--success">"Вариант"</span>
                                                }
                                                    .into_any()
                                            } else {
                                                view! { <span class="muted">"—"</span> }.into_any()
                                            }}
                                        </td>
                                        <td>{updated}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>

                <Show when=move || { !loading.get() && items.get().is_empty() }>
                    <div class="info-box">
                        "Спецификаций пока нет. Создайте первую из шаблона."
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}
