use super::api;
use super::model::SwapState;
use crate::shared::debounce::{DebounceChannel, SeqGate};
use crate::shared::modal_frame::ModalFrame;
use crate::shared::number_format::format_money;
use contracts::usecases::u602_brand_swap::{ApplyBrandSwapRequest, ApplyBrandSwapResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const PREVIEW_DEBOUNCE_MS: i32 = 500;

/// Модальное окно замены бренда для открытой спецификации
#[component]
pub fn BrandSwapModal(
    bom_id: String,
    on_close: Callback<()>,
    /// Вызывается после применения с id спецификации-результата
    on_applied: Callback<String>,
) -> impl IntoView {
    let bom_id = StoredValue::new(bom_id);

    let state = RwSignal::new(SwapState::new());
    let (brands, set_brands) = signal(Vec::new());
    let (is_previewing, set_is_previewing) = signal(false);
    let (is_applying, set_is_applying) = signal(false);
    let (apply_error, set_apply_error) = signal(String::new());
    let (result, set_result) = signal(None::<ApplyBrandSwapResponse>);

    let preview_gate = StoredValue::new(SeqGate::new());
    let preview_debounce = DebounceChannel::new(PREVIEW_DEBOUNCE_MS);

    Effect::new(move || {
        spawn_local(async move {
            if let Ok(list) = api::list_brands().await {
                let _ = set_brands.try_set(list);
            }
        });
    });

    on_cleanup(move || {
        preview_debounce.cancel();
    });

    let run_preview = move || {
        let request = bom_id.with_value(|id| state.try_update(|s| s.take_preview_request(id)));
        let Some(Some(request)) = request else {
            return;
        };
        let seq = preview_gate
            .try_update_value(|g| g.begin())
            .unwrap_or_default();
        set_is_previewing.set(true);
        spawn_local(async move {
            let response = api::get_preview(request).await;
            let current = preview_gate
                .try_with_value(|g| g.is_current(seq))
                .unwrap_or(false);
            if !current {
                return;
            }
            let _ = set_is_previewing.try_set(false);
            match response {
                Ok(preview) => {
                    let _ = state.try_update(|s| s.apply_preview(preview));
                }
                Err(e) => {
                    let _ = state.try_update(|s| s.fail_preview(e));
                }
            }
        });
    };

    let on_brand_change = move |value: String| {
        state.update(|s| s.set_target_brand(if value.is_empty() { None } else { Some(value) }));
        preview_debounce.schedule(run_preview);
    };

    let on_apply = move |_| {
        if !state.with_untracked(|s| s.can_apply()) || is_applying.get_untracked() {
            return;
        }
        let Some(target_brand) = state.with_untracked(|s| s.target_brand.clone()) else {
            return;
        };
        set_is_applying.set(true);
        set_apply_error.set(String::new());

        let request = ApplyBrandSwapRequest {
            bom_id: bom_id.get_value(),
            target_brand,
            create_variant: state.with_untracked(|s| s.create_variant),
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
        Signal::derive(move || state.with(|s| !s.can_apply()) || is_applying.get());

    view! {
        <ModalFrame on_close=on_close modal_style="width: 720px; max-width: 90vw;".to_string()>
            <div class="modal__body">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <h3 class="section-title">"u602: Замена бренда"</h3>
                    <Button on_click=move |_| on_close.run(())>"×"</Button>
                </Flex>

                // После применения показываем только отчёт
                <Show
                    when=move || result.get().is_some()
                    fallback=move || {
                        view! {
                            <div class="form-section-group">
                                <div class="form__group">
                                    <label class="form__label">"Целевой бренд:"</label>
                                    <select
                                        class="form__select"
                                        prop:value=move || {
                                            state
                                                .with(|s| s.target_brand.clone().unwrap_or_default())
                                        }
                                        on:change=move |ev| on_brand_change(event_target_value(&ev))
                                    >
                                        <option value="">"— выберите бренд —"</option>
                                        {move || {
                                            brands
                                                .get()
                                                .into_iter()
                                                .map(|brand: contracts::domain::a002_brand::aggregate::Brand| {
                                                    let id = brand.to_string_id();
                                                    let desc = brand.base.description.clone();
                                                    view! { <option value={id}>{desc}</option> }
                                                })
                                                .collect_view()
                                        }}
                                    </select>
                                </div>

                                {move || {
                                    if let Some(error) = state.with(|s| s.preview_error.clone()) {
                                        view! {
                                            <div class="warning-box">
                                                "Не удалось получить предпросмотр: " {error}
                                            </div>
                                        }
                                            .into_any()
                                    } else if is_previewing.get()
                                        && state.with(|s| s.preview.is_none())
                                    {
                                        view! {
                                            <div class="info-box">"Загрузка предпросмотра..."</div>
                                        }
                                            .into_any()
                                    } else if state.with(|s| s.preview.is_some()) {
                                        view! { <SwapPreviewTable state=state is_previewing=is_previewing /> }
                                            .into_any()
                                    } else {
                                        view! {
                                            <div class="info-box">
                                                "Выберите целевой бренд, чтобы увидеть покрытие замены."
                                            </div>
                                        }
                                            .into_any()
                                    }
                                }}

                                <div class="form__checkbox-wrapper">
                                    <input
                                        class="form__checkbox"
                                        type="checkbox"
                                        prop:checked=move || state.with(|s| s.create_variant)
                                        on:change=move |ev| {
                                            state
                                                .update(|s| {
                                                    s.create_variant = event_target_checked(&ev);
                                                });
                                        }
                                    />
                                    <label class="form__checkbox-label">
                                        "Создать вариант (исходная спецификация не изменится)"
                                    </label>
                                </div>

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
                                            if is_applying.get() { "Применение..." } else { "Применить" }
                                        }}
                                    </Button>
                                </div>
                            </div>
                        }
                    }
                >
                    <SwapReportView result=result on_close=on_close on_applied=on_applied />
                </Show>
            </div>
        </ModalFrame>
    }
}

#[component]
fn SwapPreviewTable(state: RwSignal<SwapState>, is_previewing: ReadSignal<bool>) -> impl IntoView {
    view! {
        <div>
            <Show when=move || is_previewing.get()>
                <span class="muted">"Обновление..."</span>
            </Show>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Компонент"</th>
                        <th>"Текущий бренд"</th>
                        <th class="num">"Цена"</th>
                        <th class="num">"Цена аналога"</th>
                        <th>"Замена"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let items = state
                            .with(|s| {
                                s.preview.as_ref().map(|p| p.items.clone()).unwrap_or_default()
                            });
                        items
                            .into_iter()
                            .map(|item| {
                                let row_class = if item.swappable { "" } else { "row--muted" };
                                view! {
                                    <tr class=row_class>
                                        <td>{item.description.clone()}</td>
                                        <td>{item.current_brand.clone().unwrap_or_default()}</td>
                                        <td class="num">{format_money(item.current_cost)}</td>
                                        <td class="num">
                                            {item
                                                .new_cost
                                                .map(format_money)
                                                .unwrap_or_else(|| "—".to_string())}
                                        </td>
                                        <td>
                                            {if item.swappable {
                                                "Да".to_string()
                                            } else {
                                                item.reason
                                                    .clone()
                                                    .unwrap_or_else(|| "Нет аналога".to_string())
                                            }}
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            {move || {
                state
                    .with(|s| {
                        s.preview
                            .as_ref()
                            .map(|p| {
                                let delta = s.cost_delta().unwrap_or(0.0);
                                view! {
                                    <div class="summary-row">
                                        <span>
                                            "Покрытие: "
                                            {format!(
                                                "{} из {} строк",
                                                p.coverage.swappable,
                                                p.coverage.total,
                                            )}
                                        </span>
                                        <span>
                                            "Себестоимость: " {format_money(p.total_current_cost)}
                                            " → " {format_money(p.total_after_cost)} " ("
                                            {if delta > 0.0 {
                                                format!("+{}", format_money(delta))
                                            } else {
                                                format_money(delta)
                                            }} ")"
                                        </span>
                                    </div>
                                }
                            })
                    })
            }}
        </div>
    }
}

#[component]
fn SwapReportView(
    result: ReadSignal<Option<ApplyBrandSwapResponse>>,
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
                                        "Замена выполнена: {} строк заменено, {} пропущено. Результат: {}.",
                                        resp.report.swapped,
                                        resp.report.skipped,
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
                                        "Перейти к результату"
                                    </Button>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
