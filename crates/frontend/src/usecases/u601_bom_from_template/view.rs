use super::api;
use super::draft;
use super::model::{
    self, WizardState, MAX_QUANTITY, MIN_NAME_LEN, MIN_QUANTITY, STEP_DONE, STEP_LABELS,
    STEP_OUTPUT, STEP_PREVIEW, STEP_TEMPLATE, TOTAL_STEPS,
};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::debounce::{DebounceChannel, SeqGate};
use crate::shared::modal_frame::ModalFrame;
use crate::shared::number_format::format_money;
use crate::shared::page_frame::PageFrame;
use crate::shared::storage::LocalStore;
use chrono::Utc;
use contracts::usecases::u601_bom_from_template::{CreateBomRequest, CreateBomResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Задержка повторного предпросмотра после правки количества
const PREVIEW_DEBOUNCE_MS: i32 = 500;
/// Задержка автосохранения черновика
const DRAFT_DEBOUNCE_MS: i32 = 2000;

#[component]
pub fn BomFromTemplateWizard() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let state = RwSignal::new(WizardState::new());

    let (templates, set_templates) = signal(Vec::new());
    let (brands, set_brands) = signal(Vec::new());
    let (products, set_products) = signal(Vec::new());
    let (lists_error, set_lists_error) = signal(String::new());

    let (is_previewing, set_is_previewing) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);
    let (submit_error, set_submit_error) = signal(String::new());
    let (created, set_created) = signal(None::<CreateBomResponse>);
    let (confirm_unmapped, set_confirm_unmapped) = signal(false);
    let (keep_template, set_keep_template) = signal(true);

    let (draft_restored, set_draft_restored) = signal(false);
    let (is_saving_draft, set_is_saving_draft) = signal(false);

    let preview_gate = StoredValue::new(SeqGate::new());
    let preview_debounce = DebounceChannel::new(PREVIEW_DEBOUNCE_MS);
    let draft_debounce = DebounceChannel::new(DRAFT_DEBOUNCE_MS);

    // Восстановление при монтировании: свежий черновик целиком,
    // иначе только последний использованный шаблон
    if let Some(selection) = draft::load_draft(&LocalStore, Utc::now()) {
        state.update(|s| s.selection = selection);
        set_draft_restored.set(true);
    } else if let Some(template_id) = draft::last_template(&LocalStore) {
        state.update(|s| s.selection.template_id = Some(template_id));
    }

    // Справочники при монтировании
    Effect::new(move || {
        spawn_local(async move {
            match api::get_templates().await {
                Ok(list) => {
                    // Восстановленный шаблон мог быть удалён
                    let known = state.with_untracked(|s| {
                        s.selection
                            .template_id
                            .as_ref()
                            .map(|id| list.iter().any(|t: &contracts::domain::a003_bom_template::aggregate::BomTemplate| &t.to_string_id() == id))
                            .unwrap_or(true)
                    });
                    if !known {
                        let _ = state.try_update(|s| s.set_template(None));
                    }
                    let _ = set_templates.try_set(list);
                }
                Err(e) => {
                    let _ = set_lists_error.try_set(format!("Ошибка загрузки шаблонов: {}", e));
                }
            }
        });
        spawn_local(async move {
            match api::get_brands().await {
                Ok(list) => {
                    let _ = set_brands.try_set(list);
                }
                Err(e) => {
                    let _ = set_lists_error.try_set(format!("Ошибка загрузки брендов: {}", e));
                }
            }
        });
        spawn_local(async move {
            match api::get_producible_products().await {
                Ok(list) => {
                    let _ = set_products.try_set(list);
                }
                Err(e) => {
                    let _ = set_lists_error.try_set(format!("Ошибка загрузки товаров: {}", e));
                }
            }
        });
    });

    // Забрать накопленный запрос и отправить его; ответы с устаревшим
    // номером отбрасываются
    let run_preview = move || {
        let request = state.try_update(|s| s.take_preview_request()).flatten();
        let Some(request) = request else {
            return;
        };
        let seq = preview_gate
            .try_update_value(|g| g.begin())
            .unwrap_or_default();
        set_is_previewing.set(true);
        spawn_local(async move {
            let result = api::get_preview(request).await;
            let current = preview_gate
                .try_with_value(|g| g.is_current(seq))
                .unwrap_or(false);
            if !current {
                return;
            }
            let _ = set_is_previewing.try_set(false);
            match result {
                Ok(preview) => {
                    let _ = state.try_update(|s| s.apply_preview(preview));
                }
                Err(e) => {
                    let _ = state.try_update(|s| s.fail_preview(e));
                }
            }
        });
    };

    let schedule_draft_save = move || {
        set_is_saving_draft.set(true);
        draft_debounce.schedule(move || {
            let selection = state.with_untracked(|s| s.selection.clone());
            draft::save_draft(&LocalStore, &selection, Utc::now());
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(400).await;
                let _ = set_is_saving_draft.try_set(false);
            });
        });
    };

    on_cleanup(move || {
        preview_debounce.cancel();
        draft_debounce.cancel();
    });

    let go_to = move |step: usize| {
        let moved = state.try_update(|s| s.go_to_step(step)).unwrap_or(false);
        if moved && step == STEP_PREVIEW {
            run_preview();
        }
    };

    let on_next = move |_| {
        let moved = state.try_update(|s| s.next_step()).unwrap_or(false);
        if moved && state.with_untracked(|s| s.current_step) == STEP_PREVIEW {
            run_preview();
        }
    };

    let on_prev = move |_| {
        state.update(|s| s.prev_step());
    };

    let on_refresh_preview = move |_| {
        state.update(|s| s.mark_preview_dirty());
        run_preview();
    };

    let do_submit = move || {
        let selection = state.with_untracked(|s| s.selection.clone());
        let (Some(template_id), Some(output_product_id)) =
            (selection.template_id, selection.output_product_id)
        else {
            return;
        };
        set_is_submitting.set(true);
        set_submit_error.set(String::new());

        let request = CreateBomRequest {
            template_id: template_id.clone(),
            target_brand: selection.target_brand,
            quantity_overrides: selection.quantity_overrides,
            output_product_id,
            output_quantity: selection.output_quantity,
            name: selection.name.trim().to_string(),
            notes: selection.notes,
        };

        spawn_local(async move {
            match api::create_bom(request).await {
                Ok(response) => {
                    draft_debounce.cancel();
                    draft::clear_draft(&LocalStore);
                    draft::remember_last_template(&LocalStore, &template_id);
                    let _ = state.try_update(|s| s.complete_submission());
                    let _ = set_created.try_set(Some(response));
                    let _ = set_is_submitting.try_set(false);
                }
                Err(e) => {
                    let _ = set_submit_error.try_set(format!("Ошибка создания: {}", e));
                    let _ = set_is_submitting.try_set(false);
                }
            }
        });
    };

    let on_submit = move |_| {
        if !state.with_untracked(|s| s.can_proceed_step3()) || is_submitting.get_untracked() {
            return;
        }
        if state.with_untracked(|s| s.has_unmapped()) {
            set_confirm_unmapped.set(true);
        } else {
            do_submit();
        }
    };

    let on_create_another = move |_| {
        draft_debounce.cancel();
        draft::clear_draft(&LocalStore);
        state.update(|s| s.reset_for_another(keep_template.get_untracked()));
        set_created.set(None);
        set_submit_error.set(String::new());
        set_draft_restored.set(false);
        set_is_saving_draft.set(false);
    };

    let current_step = Memo::new(move |_| state.with(|s| s.current_step));

    let next_disabled = Signal::derive(move || {
        state.with(|s| !s.can_proceed(s.current_step)) || is_previewing.get()
    });
    let submit_disabled =
        Signal::derive(move || state.with(|s| !s.can_proceed_step3()) || is_submitting.get());

    view! {
        <PageFrame page_id="u601_bom_from_template--usecase" category="usecase" class="page--wide">
            <div class="card">
                <div class="card__body">
                    <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                        <h2 class="section-title">"u601: Создание спецификации из шаблона"</h2>
                        <Show when=move || is_saving_draft.get()>
                            <span class="muted">"Черновик: сохранение..."</span>
                        </Show>
                    </Flex>

                    <Show when=move || !lists_error.get().is_empty()>
                        <div class="warning-box">{move || lists_error.get()}</div>
                    </Show>

                    // Индикатор шагов: назад свободно, вперёд только на следующий
                    <div class="wizard-steps">
                        {(1..=TOTAL_STEPS)
                            .map(|n| {
                                let label = STEP_LABELS[n - 1];
                                let disabled = move || {
                                    state.with(|s| {
                                        s.current_step == STEP_DONE
                                            || n > s.current_step + 1
                                            || (n == s.current_step + 1
                                                && !s.can_proceed(s.current_step))
                                    })
                                };
                                view! {
                                    <button
                                        class="wizard-step"
                                        class=("active", move || current_step.get() == n)
                                        class=("done", move || current_step.get() > n)
                                        prop:disabled=disabled
                                        on:click=move |_| go_to(n)
                                    >
                                        {format!("{}. {}", n, label)}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <Show when=move || current_step.get() == STEP_TEMPLATE>
                        <StepTemplate
                            state=state
                            templates=templates
                            brands=brands
                            draft_restored=draft_restored
                            schedule_draft_save=Callback::new(move |_: ()| schedule_draft_save())
                        />
                    </Show>

                    <Show when=move || current_step.get() == STEP_PREVIEW>
                        <StepPreview
                            state=state
                            is_previewing=is_previewing
                            on_refresh=Callback::new(move |_: ()| on_refresh_preview(()))
                            on_back=Callback::new(move |_: ()| state.update(|s| s.prev_step()))
                            on_quantity_edit=Callback::new(move |_: ()| {
                                preview_debounce.schedule(run_preview);
                                schedule_draft_save();
                            })
                        />
                    </Show>

                    <Show when=move || current_step.get() == STEP_OUTPUT>
                        <StepOutput
                            state=state
                            products=products
                            submit_error=submit_error
                            schedule_draft_save=Callback::new(move |_: ()| schedule_draft_save())
                        />
                    </Show>

                    <Show when=move || current_step.get() == STEP_DONE>
                        <StepDone
                            created=created
                            keep_template=keep_template
                            set_keep_template=set_keep_template
                            tabs_store=tabs_store
                            on_create_another=Callback::new(move |_: ()| on_create_another(()))
                        />
                    </Show>

                    // Кнопки навигации (на терминальном шаге их нет)
                    <Show when=move || current_step.get() != STEP_DONE>
                        <div class="wizard-footer">
                            <Button
                                on_click=on_prev
                                disabled=Signal::derive(move || {
                                    current_step.get() == STEP_TEMPLATE
                                })
                            >
                                "← Назад"
                            </Button>
                            <Show
                                when=move || current_step.get() == STEP_OUTPUT
                                fallback=move || {
                                    view! {
                                        <Button
                                            appearance=ButtonAppearance::Primary
                                            on_click=on_next
                                            disabled=next_disabled
                                        >
                                            "Далее →"
                                        </Button>
                                    }
                                }
                            >
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=on_submit
                                    disabled=submit_disabled
                                >
                                    {move || {
                                        if is_submitting.get() {
                                            "Создание..."
                                        } else {
                                            "Создать спецификацию"
                                        }
                                    }}
                                </Button>
                            </Show>
                        </div>
                    </Show>
                </div>
            </div>

            // Подтверждение создания при строках без соответствия
            <Show when=move || confirm_unmapped.get()>
                <ModalFrame on_close=Callback::new(move |_: ()| set_confirm_unmapped.set(false))>
                    <div class="modal__body">
                        <h3 class="section-title">"Строки без соответствия"</h3>
                        <p>
                            {move || {
                                let count = state
                                    .with(|s| {
                                        s.preview.as_ref().map(|p| p.report.no_mapping).unwrap_or(0)
                                    });
                                format!(
                                    "Строк без соответствия в каталоге: {}. Они не попадут в создаваемую спецификацию. Продолжить?",
                                    count,
                                )
                            }}
                        </p>
                        <div class="modal__footer">
                            <Button on_click=move |_| set_confirm_unmapped.set(false)>
                                "Отмена"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| {
                                    set_confirm_unmapped.set(false);
                                    do_submit();
                                }
                            >
                                "Создать без этих строк"
                            </Button>
                        </div>
                    </div>
                </ModalFrame>
            </Show>
        </PageFrame>
    }
}

/// Шаг 1: выбор шаблона и целевого бренда
#[component]
fn StepTemplate(
    state: RwSignal<WizardState>,
    templates: ReadSignal<Vec<contracts::domain::a003_bom_template::aggregate::BomTemplate>>,
    brands: ReadSignal<Vec<contracts::domain::a002_brand::aggregate::Brand>>,
    draft_restored: ReadSignal<bool>,
    schedule_draft_save: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="form-section-group">
            <Show when=move || draft_restored.get()>
                <div class="info-box">
                    "Восстановлен незавершённый черновик. Продолжите заполнение или выберите другой шаблон."
                </div>
            </Show>

            <div>
                <h2 class="section-title">"Шаблон спецификации"</h2>
                <div class="form__group">
                    <label class="form__label">"Выберите шаблон:"</label>
                    <select
                        class="form__select"
                        prop:value=move || {
                            state.with(|s| s.selection.template_id.clone().unwrap_or_default())
                        }
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            state
                                .update(|s| {
                                    s.set_template(
                                        if value.is_empty() { None } else { Some(value) },
                                    )
                                });
                            schedule_draft_save.run(());
                        }
                    >
                        <option value="">"— выберите шаблон —"</option>
                        {move || {
                            templates
                                .get()
                                .into_iter()
                                .map(|tpl| {
                                    let id = tpl.to_string_id();
                                    let desc = tpl.base.description.clone();
                                    let count = tpl.items.len();
                                    view! {
                                        <option value={id}>
                                            {desc} " (строк: " {count} ")"
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>
            </div>

            <div>
                <h2 class="section-title">"Целевой бренд"</h2>
                <div class="form__group">
                    <label class="form__label">
                        "Подбирать аналоги компонентов под бренд:"
                    </label>
                    <select
                        class="form__select"
                        prop:value=move || {
                            state.with(|s| s.selection.target_brand.clone().unwrap_or_default())
                        }
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            state
                                .update(|s| {
                                    s.set_target_brand(
                                        if value.is_empty() { None } else { Some(value) },
                                    )
                                });
                            schedule_draft_save.run(());
                        }
                    >
                        <option value="">"— без подбора бренда —"</option>
                        {move || {
                            brands
                                .get()
                                .into_iter()
                                .map(|brand| {
                                    let id = brand.to_string_id();
                                    let desc = brand.base.description.clone();
                                    view! { <option value={id}>{desc}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>
                <div class="info-box">
                    "Без целевого бренда компоненты берутся из шаблона как есть."
                </div>
            </div>
        </div>
    }
}

/// Шаг 2: предпросмотр строк с правкой количества
#[component]
fn StepPreview(
    state: RwSignal<WizardState>,
    is_previewing: ReadSignal<bool>,
    on_refresh: Callback<()>,
    on_back: Callback<()>,
    on_quantity_edit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="form-section-group">
            {move || {
                if let Some(error) = state.with(|s| s.preview_error.clone()) {
                    view! {
                        <div>
                            <div class="warning-box">
                                "Не удалось получить предпросмотр: " {error}
                            </div>
                            <div class="wizard-footer">
                                <Button on_click=move |_| on_back.run(())>"← Назад"</Button>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| on_refresh.run(())
                                >
                                    "Повторить"
                                </Button>
                            </div>
                        </div>
                    }
                        .into_any()
                } else if state.with(|s| s.preview.is_none()) {
                    view! {
                        <div class="info-box">
                            {move || {
                                if is_previewing.get() {
                                    "Загрузка предпросмотра..."
                                } else {
                                    "Нет данных предпросмотра"
                                }
                            }}
                        </div>
                    }
                        .into_any()
                } else {
                    view! { <PreviewTable state=state is_previewing=is_previewing on_refresh=on_refresh on_quantity_edit=on_quantity_edit /> }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn PreviewTable(
    state: RwSignal<WizardState>,
    is_previewing: ReadSignal<bool>,
    on_refresh: Callback<()>,
    on_quantity_edit: Callback<()>,
) -> impl IntoView {
    view! {
        <div>
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h2 class="section-title">"Состав спецификации"</h2>
                <Flex align=FlexAlign::Center>
                    <Show when=move || is_previewing.get()>
                        <span class="muted">"Обновление..."</span>
                    </Show>
                    <Button on_click=move |_| on_refresh.run(())>"Обновить"</Button>
                </Flex>
            </Flex>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Компонент"</th>
                        <th>"Статус"</th>
                        <th class="num">"Цена"</th>
                        <th class="num">"Кол-во"</th>
                        <th>"Ед."</th>
                        <th class="num">"Сумма"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let preview = state.with(|s| s.preview.clone());
                        let Some(preview) = preview else {
                            return ().into_any();
                        };
                        preview
                            .items
                            .into_iter()
                            .map(|item| {
                                let item_id = item.template_item_id.clone();
                                let effective = state
                                    .with(|s| s.effective_quantity(&item_id, item.quantity));
                                let line_total = item.unit_cost * effective;
                                let status = item.status;
                                let edit_id = item_id.clone();
                                let row_class = if status
                                    == contracts::usecases::u601_bom_from_template::ResolutionStatus::NoMapping
                                {
                                    "row--warning"
                                } else {
                                    ""
                                };
                                view! {
                                    <tr class=row_class>
                                        <td>{item.description.clone()}</td>
                                        <td>
                                            <span class="status-badge">
                                                {model::status_label(status)}
                                            </span>
                                        </td>
                                        <td class="num">{format_money(item.unit_cost)}</td>
                                        <td class="num">
                                            <input
                                                class="form__input form__input--narrow"
                                                type="number"
                                                step="0.01"
                                                min=MIN_QUANTITY
                                                max=MAX_QUANTITY
                                                prop:value=effective
                                                prop:disabled=!item.is_quantity_variable
                                                on:change=move |ev| {
                                                    if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                                                        state.update(|s| s.set_override(&edit_id, v));
                                                        on_quantity_edit.run(());
                                                    }
                                                }
                                            />
                                        </td>
                                        <td>{item.unit.clone()}</td>
                                        <td class="num">{format_money(line_total)}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>

            {move || {
                state
                    .with(|s| {
                        s.preview
                            .as_ref()
                            .map(|p| {
                                let total = model::estimated_total_cost(
                                    p,
                                    &s.selection.quantity_overrides,
                                );
                                let rate = model::resolution_success_rate(&p.report) * 100.0;
                                let report = p.report.clone();
                                view! {
                                    <div class="summary-row">
                                        <span>
                                            "Оценка себестоимости: "
                                            <b>{format_money(total)}</b>
                                        </span>
                                        <span>
                                            "Подобрано: "
                                            {format!(
                                                "{:.0}% ({} из {})",
                                                rate,
                                                report.resolved + report.using_product,
                                                report.total_items,
                                            )}
                                        </span>
                                    </div>
                                }
                            })
                    })
            }}

            <Show when=move || state.with(|s| s.has_unmapped())>
                <div class="warning-box">
                    {move || {
                        let count = state
                            .with(|s| {
                                s.preview.as_ref().map(|p| p.report.no_mapping).unwrap_or(0)
                            });
                        format!(
                            "Строк без соответствия: {}. Они будут пропущены при создании.",
                            count,
                        )
                    }}
                </div>
            </Show>
        </div>
    }
}

/// Шаг 3: параметры выпуска и создание
#[component]
fn StepOutput(
    state: RwSignal<WizardState>,
    products: ReadSignal<Vec<contracts::domain::a001_product::aggregate::Product>>,
    submit_error: ReadSignal<String>,
    schedule_draft_save: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="form-section-group">
            <div>
                <h2 class="section-title">"Выпускаемый товар"</h2>
                <div class="form__group">
                    <label class="form__label">"Товар:"</label>
                    <select
                        class="form__select"
                        prop:value=move || {
                            state
                                .with(|s| {
                                    s.selection.output_product_id.clone().unwrap_or_default()
                                })
                        }
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            state
                                .update(|s| {
                                    s.selection.output_product_id = if value.is_empty() {
                                        None
                                    } else {
                                        Some(value)
                                    };
                                });
                            schedule_draft_save.run(());
                        }
                    >
                        <option value="">"— выберите товар —"</option>
                        {move || {
                            products
                                .get()
                                .into_iter()
                                .map(|p| {
                                    let id = p.to_string_id();
                                    let desc = p.base.description.clone();
                                    view! { <option value={id}>{desc}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>

                <div class="form__group">
                    <label class="form__label">"Количество выпуска:"</label>
                    <input
                        class="form__input form__input--narrow"
                        type="number"
                        step="0.01"
                        min=MIN_QUANTITY
                        max=MAX_QUANTITY
                        prop:value=move || state.with(|s| s.selection.output_quantity)
                        on:change=move |ev| {
                            if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                                state
                                    .update(|s| {
                                        s.selection.output_quantity = model::clamp_quantity(v);
                                    });
                                schedule_draft_save.run(());
                            }
                        }
                    />
                </div>
            </div>

            <div>
                <h2 class="section-title">"Новая спецификация"</h2>
                <div class="form__group">
                    <label class="form__label">"Название:"</label>
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || state.with(|s| s.selection.name.clone())
                        on:input=move |ev| {
                            state.update(|s| s.selection.name = event_target_value(&ev));
                            schedule_draft_save.run(());
                        }
                    />
                    <Show when=move || {
                        state
                            .with(|s| {
                                !s.selection.name.trim().is_empty()
                                    && s.selection.name.trim().chars().count() < MIN_NAME_LEN
                            })
                    }>
                        <span class="form__hint form__hint--error">
                            "Название должно быть не короче 3 символов"
                        </span>
                    </Show>
                </div>

                <div class="form__group">
                    <label class="form__label">"Примечания:"</label>
                    <textarea
                        class="form__input"
                        prop:value=move || state.with(|s| s.selection.notes.clone())
                        on:input=move |ev| {
                            state.update(|s| s.selection.notes = event_target_value(&ev));
                            schedule_draft_save.run(());
                        }
                    />
                </div>
            </div>

            {move || {
                state
                    .with(|s| {
                        s.preview
                            .as_ref()
                            .map(|p| {
                                let total = model::estimated_total_cost(
                                    p,
                                    &s.selection.quantity_overrides,
                                );
                                view! {
                                    <div class="info-box">
                                        "Оценка себестоимости по предпросмотру: "
                                        <b>{format_money(total)}</b>
                                    </div>
                                }
                            })
                    })
            }}

            <Show when=move || !submit_error.get().is_empty()>
                <div class="warning-box">{move || submit_error.get()}</div>
            </Show>
        </div>
    }
}

/// Шаг 4: терминальный экран
#[component]
fn StepDone(
    created: ReadSignal<Option<CreateBomResponse>>,
    keep_template: ReadSignal<bool>,
    set_keep_template: WriteSignal<bool>,
    tabs_store: AppGlobalContext,
    on_create_another: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="form-section-group">
            <div class="success-box">
                {move || {
                    created
                        .get()
                        .map(|resp| {
                            format!("Спецификация {} создана.", resp.bom_number)
                        })
                        .unwrap_or_else(|| "Спецификация создана.".to_string())
                }}
            </div>

            <div class="form__checkbox-wrapper">
                <input
                    class="form__checkbox"
                    type="checkbox"
                    prop:checked=move || keep_template.get()
                    on:change=move |ev| {
                        set_keep_template.set(event_target_checked(&ev));
                    }
                />
                <label class="form__checkbox-label">
                    "Оставить выбранный шаблон для следующей спецификации"
                </label>
            </div>

            <div class="wizard-footer">
                <Button on_click=move |_| {
                    if let Some(resp) = created.get_untracked() {
                        tabs_store
                            .open_tab(
                                &format!("a004_bom_detail_{}", resp.bom_id),
                                &format!("Спецификация {}", resp.bom_number),
                            );
                    }
                }>"Открыть спецификацию"</Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_create_another.run(())
                >
                    "Создать ещё"
                </Button>
            </div>
        </div>
    }
}
