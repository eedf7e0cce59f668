use super::api;
use super::model::OptimizationSelection;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::number_format::format_money;
use contracts::usecases::u603_cost_optimization::{
    ApplyCostOptimizationRequest, ApplyCostOptimizationResponse, CostOptimizationPreview,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Модальное окно оптимизации стоимости для открытой спецификации
#[component]
pub fn CostOptimizationModal(
    bom_id: String,
    on_close: Callback<()>,
    /// Вызывается после применения с id созданного варианта
    on_applied: Callback<String>,
) -> impl IntoView {
    let bom_id = StoredValue::new(bom_id);

    let (preview, set_preview) = signal(None::<CostOptimizationPreview>);
    let (load_error, set_load_error) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);
    let selection = RwSignal::new(OptimizationSelection::default());
    let (is_applying, set_is_applying) = signal(false);
    let (apply_error, set_apply_error) = signal(String::new());
    let (result, set_result) = signal(None::<ApplyCostOptimizationResponse>);

    let load_preview = move || {
        set_is_loading.set(true);
        set_load_error.set(String::new());
        spawn_local(async move {
            let id = bom_id.get_value();
            match api::get_preview(&id).await {
                Ok(data) => {
                    let _ = set_preview.try_set(Some(data));
                    let _ = set_is_loading.try_set(false);
                }
                Err(e) => {
                    let _ = set_preview.try_set(None);
                    let _ = set_load_error.try_set(format!("Ошибка загрузки: {}", e));
                    let _ = set_is_loading.try_set(false);
                }
            }
        });
    };

    Effect::new(move || {
        load_preview();
    });

    // Каждый новый предпросмотр пересчитывает выбор по умолчанию;
    // ручные снятия галочек при этом не сохраняются
    Effect::new(move || {
        if let Some(data) = preview.get() {
            selection.set(OptimizationSelection::default_selection(&data.items));
        }
    });

    let on_apply = move |_| {
        if selection.with_untracked(|s| s.is_empty()) || is_applying.get_untracked() {
            return;
        }
        set_is_applying.set(true);
        set_apply_error.set(String::new());

        let request = ApplyCostOptimizationRequest {
            bom_id: bom_id.get_value(),
            selected_item_ids: selection.with_untracked(|s| s.ids()),
        };

        spawn_local(async move {
            match api::apply(request).await {
                Ok(response) => {
                    let _ = set_result.try_set(Some(response));
                    let _ = set_is_applying.try_set(false);
                }
                Err(e) => {
                    let _ = set_apply_error.try_set(format!("Ошибка применения: {}", e));
                    let _ = set_is_applying.try_set(false);
                }
            }
        });
    };

    let apply_disabled =
        Signal::derive(move || selection.with(|s| s.is_empty()) || is_applying.get());

    view! {
        <ModalFrame on_close=on_close modal_style="width: 760px; max-width: 90vw;".to_string()>
            <div class="modal__body">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <h3 class="section-title">"u603: Оптимизация стоимости"</h3>
                    <Flex align=FlexAlign::Center>
                        <Button on_click=move |_| load_preview()>"Обновить"</Button>
                        <Button on_click=move |_| on_close.run(())>"×"</Button>
                    </Flex>
                </Flex>

                <Show
                    when=move || result.get().is_some()
                    fallback=move || {
                        view! {
                            <div class="form-section-group">
                                <Show when=move || !load_error.get().is_empty()>
                                    <div class="warning-box">{move || load_error.get()}</div>
                                </Show>

                                <Show when=move || {
                                    is_loading.get() && preview.get().is_none()
                                }>
                                    <div class="info-box">"Загрузка предпросмотра..."</div>
                                </Show>

                                <Show when=move || preview.get().is_some()>
                                    <OptimizationTable
                                        preview=preview
                                        selection=selection
                                    />
                                </Show>

                                <Show when=move || !apply_error.get().is_empty()>
                                    <div class="warning-box">{move || apply_error.get()}</div>
                                </Show>

                                <div class="modal__footer">
                                    <Button on_click=move |_| on_close.run(())>"Отмена"</Button>
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        on_click=on_apply
                                        disabled=apply_disabled
                                    >
                                        {move || {
                                            if is_applying.get() {
                                                "Применение...".to_string()
                                            } else {
                                                format!(
                                                    "Заменить выбранные ({})",
                                                    selection.with(|s| s.len()),
                                                )
                                            }
                                        }}
                                    </Button>
                                </div>
                            </div>
                        }
                    }
                >
                    <OptimizationReportView
                        result=result
                        on_close=on_close
                        on_applied=on_applied
                    />
                </Show>
            </div>
        </ModalFrame>
    }
}

#[component]
fn OptimizationTable(
    preview: ReadSignal<Option<CostOptimizationPreview>>,
    selection: RwSignal<OptimizationSelection>,
) -> impl IntoView {
    let items = move || {
        preview
            .get()
            .map(|p| p.items)
            .unwrap_or_default()
    };

    view! {
        <div>
            <Flex align=FlexAlign::Center>
                <Button on_click=move |_| {
                    let current = items();
                    selection.update(|s| s.select_all(&current));
                }>"Выбрать все"</Button>
                <Button on_click=move |_| {
                    selection.update(|s| s.deselect_all());
                }>"Снять все"</Button>
            </Flex>

            <table class="data-table">
                <thead>
                    <tr>
                        <th></th>
                        <th>"Компонент"</th>
                        <th class="num">"Текущая цена"</th>
                        <th class="num">"Лучшая цена"</th>
                        <th>"Бренд"</th>
                        <th class="num">"Экономия"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        items()
                            .into_iter()
                            .map(|item| {
                                let id = item.bom_item_id.clone();
                                let toggle_id = id.clone();
                                let eligible = item.can_optimize && !item.is_already_cheapest;
                                let row_class = if eligible { "" } else { "row--muted" };
                                let note = if item.is_already_cheapest {
                                    Some("уже самый дешёвый")
                                } else if !item.can_optimize {
                                    Some("нет аналогов")
                                } else {
                                    None
                                };
                                view! {
                                    <tr class=row_class>
                                        <td>
                                            <input
                                                class="form__checkbox"
                                                type="checkbox"
                                                prop:checked=move || {
                                                    selection.with(|s| s.is_selected(&id))
                                                }
                                                prop:disabled=!eligible
                                                on:change=move |_| {
                                                    let current = items();
                                                    selection
                                                        .update(|s| s.toggle(&current, &toggle_id));
                                                }
                                            />
                                        </td>
                                        <td>
                                            {item.description.clone()}
                                            {note
                                                .map(|n| {
                                                    view! {
                                                        <span class="muted">{format!(" ({})", n)}</span>
                                                    }
                                                })}
                                        </td>
                                        <td class="num">{format_money(item.current_cost)}</td>
                                        <td class="num">{format_money(item.best_cost)}</td>
                                        <td>{item.best_brand.clone().unwrap_or_default()}</td>
                                        <td class="num">{format_money(item.saving())}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            {move || {
                preview
                    .get()
                    .map(|p| {
                        let selected_saving = selection
                            .with(|s| s.selected_saving(&p.items));
                        view! {
                            <div class="summary-row">
                                <span>
                                    "Себестоимость: " {format_money(p.total_current_cost)}
                                </span>
                                <span>
                                    "Экономия по выбранным: "
                                    <b>{format_money(selected_saving)}</b>
                                    " (потенциал: " {format_money(p.total_potential_saving)} ")"
                                </span>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn OptimizationReportView(
    result: ReadSignal<Option<ApplyCostOptimizationResponse>>,
    on_close: Callback<()>,
    on_applied: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-section-group">
            {move || {
                result
                    .get()
                    .map(|resp| {
                        let new_bom_id = resp.new_bom_id.clone();
                        view! {
                            <div>
                                <div class="success-box">
                                    {format!(
                                        "Оптимизация выполнена: {} строк заменено, экономия {}. Вариант: {}.",
                                        resp.report.applied,
                                        format_money(resp.report.total_saving),
                                        resp.new_bom_number,
                                    )}
                                </div>
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Компонент"</th>
                                            <th class="num">"Было"</th>
                                            <th class="num">"Стало"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {resp
                                            .report
                                            .items
                                            .iter()
                                            .map(|item| {
                                                view! {
                                                    <tr>
                                                        <td>{item.description.clone()}</td>
                                                        <td class="num">{format_money(item.cost_before)}</td>
                                                        <td class="num">{format_money(item.cost_after)}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                                <div class="modal__footer">
                                    <Button on_click=move |_| on_close.run(())>"Закрыть"</Button>
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        on_click=move |_| {
                                            on_applied.run(new_bom_id.clone());
                                            on_close.run(());
                                        }
                                    >
                                        "Перейти к варианту"
                                    </Button>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
