use crate::domain::a004_bom::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::number_format::format_money;
use crate::shared::page_frame::PageFrame;
use crate::usecases::u602_brand_swap::view::BrandSwapModal;
use crate::usecases::u603_cost_optimization::view::CostOptimizationModal;
use contracts::domain::a004_bom::aggregate::Bom;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Страница спецификации: состав, себестоимость и операции над ней
#[component]
pub fn BomDetails(id: String, on_close: Callback<()>) -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let bom_id = StoredValue::new(id);

    let (bom, set_bom) = signal(None::<Bom>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_brand_swap, set_show_brand_swap) = signal(false);
    let (show_optimization, set_show_optimization) = signal(false);

    let load_bom = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let id = bom_id.get_value();
            match api::get_bom(&id).await {
                Ok(data) => {
                    // Заголовок таба получает бизнес-код после загрузки
                    tabs_store.update_tab_title(
                        &format!("a004_bom_detail_{}", id),
                        &format!("Спецификация {}", data.base.code),
                    );
                    let _ = set_bom.try_set(Some(data));
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
        load_bom();
    });

    // Результат u602/u603 открывается отдельным табом; заголовок
    // уточнится после загрузки деталей
    let on_variant_created = Callback::new(move |new_bom_id: String| {
        tabs_store.open_tab(
            &format!("a004_bom_detail_{}", new_bom_id),
            "Спецификация",
        );
    });

    view! {
        <PageFrame page_id="a004_bom--detail" category="detail">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || {
                            bom.get()
                                .map(|b| format!("Спецификация {}", b.base.code))
                                .unwrap_or_else(|| "Спецификация".to_string())
                        }}
                    </h1>
                </div>
                <div class="page__header-right">
                    <Button
                        on_click=move |_| set_show_brand_swap.set(true)
                        disabled=Signal::derive(move || bom.get().is_none())
                    >
                        "Замена бренда"
                    </Button>
                    <Button
                        on_click=move |_| set_show_optimization.set(true)
                        disabled=Signal::derive(move || bom.get().is_none())
                    >
                        "Оптимизация стоимости"
                    </Button>
                    <Button on_click=move |_| load_bom()>"Обновить"</Button>
                    <Button on_click=move |_| on_close.run(())>"Закрыть"</Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })
                }}

                <Show when=move || { loading.get() && bom.get().is_none() }>
                    <div class="info-box">"Загрузка..."</div>
                </Show>

                {move || {
                    bom.get()
                        .map(|data| {
                            let total = data.total_cost();
                            view! {
                                <div class="form-section-group">
                                    <div class="card">
                                        <div class="card__body">
                                            <div class="form__group">
                                                <label class="form__label">"Название:"</label>
                                                <span>{data.base.description.clone()}</span>
                                            </div>
                                            <div class="form__group">
                                                <label class="form__label">"Количество выпуска:"</label>
                                                <span>{data.output_quantity}</span>
                                            </div>
                                            {data
                                                .parent_bom_ref
                                                .clone()
                                                .map(|parent_id| {
                                                    let parent_for_click = parent_id.clone();
                                                    view! {
                                                        <div class="form__group">
                                                            <label class="form__label">"Вариант от:"</label>
                                                            <a
                                                                href="#"
                                                                class="table__link"
                                                                on:click=move |ev| {
                                                                    ev.prevent_default();
                                                                    tabs_store
                                                                        .open_tab(
                                                                            &format!("a004_bom_detail_{}", parent_for_click),
                                                                            "Спецификация",
                                                                        );
                                                                }
                                                            >
                                                                "исходная спецификация"
                                                            </a>
                                                        </div>
                                                    }
                                                })}
                                            {data
                                                .base
                                                .comment
                                                .clone()
                                                .filter(|c| !c.is_empty())
                                                .map(|comment| {
                                                    view! {
                                                        <div class="form__group">
                                                            <label class="form__label">"Примечания:"</label>
                                                            <span>{comment}</span>
                                                        </div>
                                                    }
                                                })}
                                        </div>
                                    </div>

                                    <h2 class="section-title">"Состав"</h2>
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Компонент"</th>
                                                <th class="num">"Кол-во"</th>
                                                <th class="num">"Цена"</th>
                                                <th class="num">"Сумма"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {data
                                                .items
                                                .iter()
                                                .map(|item| {
                                                    view! {
                                                        <tr>
                                                            <td>{item.description.clone()}</td>
                                                            <td class="num">{item.quantity}</td>
                                                            <td class="num">{format_money(item.unit_cost)}</td>
                                                            <td class="num">
                                                                {format_money(item.quantity * item.unit_cost)}
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect_view()}
                                        </tbody>
                                    </table>

                                    <div class="summary-row">
                                        <span>
                                            "Плановая себестоимость: " <b>{format_money(total)}</b>
                                        </span>
                                    </div>
                                </div>
                            }
                        })
                }}
            </div>

            <Show when=move || show_brand_swap.get()>
                <BrandSwapModal
                    bom_id=bom_id.get_value()
                    on_close=Callback::new(move |_: ()| {
                        set_show_brand_swap.set(false);
                        load_bom();
                    })
                    on_applied=on_variant_created
                />
            </Show>

            <Show when=move || show_optimization.get()>
                <CostOptimizationModal
                    bom_id=bom_id.get_value()
                    on_close=Callback::new(move |_: ()| set_show_optimization.set(false))
                    on_applied=on_variant_created
                />
            </Show>
        </PageFrame>
    }
}
