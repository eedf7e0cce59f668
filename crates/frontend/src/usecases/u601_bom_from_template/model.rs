//! Модель мастера создания спецификации из шаблона.
//!
//! Чистая машина состояний без wasm-зависимостей: шаги, guard-предикаты,
//! переопределения количества и коалесцирование запросов предпросмотра.
//! Сетевые эффекты и таймеры живут в view.rs; модель только решает,
//! когда и с какими данными предпросмотр нужно запросить.

use contracts::usecases::u601_bom_from_template::{
    ResolutionReport, ResolutionStatus, TemplatePreview, TemplatePreviewRequest,
};
use std::collections::BTreeMap;

/// Границы количества в строке спецификации
pub const MIN_QUANTITY: f64 = 0.01;
pub const MAX_QUANTITY: f64 = 99999.0;

/// Минимальная длина названия новой спецификации
pub const MIN_NAME_LEN: usize = 3;

pub const STEP_TEMPLATE: usize = 1;
pub const STEP_PREVIEW: usize = 2;
pub const STEP_OUTPUT: usize = 3;
pub const STEP_DONE: usize = 4;
pub const TOTAL_STEPS: usize = 4;

pub const STEP_LABELS: [&str; TOTAL_STEPS] = [
    "Шаблон",
    "Предпросмотр",
    "Параметры выпуска",
    "Готово",
];

/// Округление до 2 знаков (количества и суммы в строках)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Привести введённое количество к допустимому: clamp в границы, затем round2
pub fn clamp_quantity(q: f64) -> f64 {
    round2(q.clamp(MIN_QUANTITY, MAX_QUANTITY))
}

/// Ввод пользователя, собираемый мастером (шаги 1 и 3)
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    /// UUID выбранного шаблона (a003_bom_template)
    pub template_id: Option<String>,
    /// UUID целевого бренда для подбора аналогов
    pub target_brand: Option<String>,
    /// Переопределения количества: id строки шаблона → количество
    pub quantity_overrides: BTreeMap<String, f64>,
    /// UUID производимого товара
    pub output_product_id: Option<String>,
    /// Количество выпуска
    pub output_quantity: f64,
    /// Название новой спецификации
    pub name: String,
    /// Примечания
    pub notes: String,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            template_id: None,
            target_brand: None,
            quantity_overrides: BTreeMap::new(),
            output_product_id: None,
            output_quantity: 1.0,
            name: String::new(),
            notes: String::new(),
        }
    }
}

/// Состояние мастера: текущий шаг, ввод пользователя, последний предпросмотр
#[derive(Debug, Clone, Default)]
pub struct WizardState {
    pub current_step: usize,
    pub selection: SelectionState,
    /// Последний успешный предпросмотр; заменяется целиком
    pub preview: Option<TemplatePreview>,
    /// Ошибка последнего запроса предпросмотра (предыдущие данные сброшены)
    pub preview_error: Option<String>,
    /// Накоплены изменения, требующие нового предпросмотра
    preview_dirty: bool,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            current_step: STEP_TEMPLATE,
            ..Default::default()
        }
    }

    // --- guard-предикаты (чистые, никогда не паникуют) ---

    /// Шаг 1: выбран шаблон
    pub fn can_proceed_step1(&self) -> bool {
        self.selection.template_id.is_some()
    }

    /// Шаг 2: есть непустой предпросмотр без ошибки
    pub fn can_proceed_step2(&self) -> bool {
        self.preview_error.is_none()
            && self
                .preview
                .as_ref()
                .map(|p| !p.items.is_empty())
                .unwrap_or(false)
    }

    /// Шаг 3: выбран выпускаемый товар, название от 3 символов,
    /// количество выпуска в границах
    pub fn can_proceed_step3(&self) -> bool {
        self.selection.output_product_id.is_some()
            && self.selection.name.trim().chars().count() >= MIN_NAME_LEN
            && self.selection.output_quantity >= MIN_QUANTITY
            && self.selection.output_quantity <= MAX_QUANTITY
    }

    pub fn can_proceed(&self, step: usize) -> bool {
        match step {
            STEP_TEMPLATE => self.can_proceed_step1(),
            STEP_PREVIEW => self.can_proceed_step2(),
            STEP_OUTPUT => self.can_proceed_step3(),
            _ => false,
        }
    }

    // --- навигация ---

    /// Вперёд, если guard текущего шага выполнен. Блокировка — не ошибка:
    /// кнопка "Далее" задизейблена тем же предикатом.
    ///
    /// Переход 1→2 помечает предпросмотр устаревшим (первый запрос).
    pub fn next_step(&mut self) -> bool {
        if self.current_step >= TOTAL_STEPS || !self.can_proceed(self.current_step) {
            return false;
        }
        if self.current_step == STEP_TEMPLATE {
            self.preview_dirty = true;
        }
        self.current_step += 1;
        true
    }

    /// Назад разрешено с любого шага кроме терминального;
    /// ошибка предпросмотра покидаемого шага сбрасывается
    pub fn prev_step(&mut self) {
        if self.current_step <= STEP_TEMPLATE || self.current_step == STEP_DONE {
            return;
        }
        if self.current_step == STEP_PREVIEW {
            self.preview_error = None;
        }
        self.current_step -= 1;
    }

    /// Переход на произвольный шаг: назад свободно, вперёд только на
    /// следующий шаг при выполненном guard текущего.
    pub fn go_to_step(&mut self, step: usize) -> bool {
        if step < STEP_TEMPLATE || step > TOTAL_STEPS || self.current_step == STEP_DONE {
            return false;
        }
        if step <= self.current_step {
            if step < self.current_step {
                self.preview_error = None;
            }
            self.current_step = step;
            return true;
        }
        if step == self.current_step + 1 && self.can_proceed(self.current_step) {
            if self.current_step == STEP_TEMPLATE {
                self.preview_dirty = true;
            }
            self.current_step = step;
            return true;
        }
        false
    }

    // --- предпросмотр ---

    /// Смена шаблона обнуляет переопределения и данные предпросмотра
    pub fn set_template(&mut self, template_id: Option<String>) {
        if self.selection.template_id == template_id {
            return;
        }
        self.selection.template_id = template_id;
        self.selection.quantity_overrides.clear();
        self.preview = None;
        self.preview_error = None;
        self.preview_dirty = true;
    }

    /// Смена целевого бренда делает предпросмотр устаревшим
    pub fn set_target_brand(&mut self, target_brand: Option<String>) {
        if self.selection.target_brand == target_brand {
            return;
        }
        self.selection.target_brand = target_brand;
        self.preview_dirty = true;
    }

    /// Записать переопределение количества (clamp + round2).
    /// На шаге предпросмотра помечает данные устаревшими.
    pub fn set_override(&mut self, item_id: &str, quantity: f64) {
        self.selection
            .quantity_overrides
            .insert(item_id.to_string(), clamp_quantity(quantity));
        self.preview_dirty = true;
    }

    /// Убрать переопределение (вернуться к номинальному количеству)
    pub fn clear_override(&mut self, item_id: &str) {
        if self.selection.quantity_overrides.remove(item_id).is_some() {
            self.preview_dirty = true;
        }
    }

    /// Явно запросить новый предпросмотр (кнопка "Обновить" / "Повторить")
    pub fn mark_preview_dirty(&mut self) {
        self.preview_dirty = true;
    }

    /// Забрать накопленный запрос предпросмотра.
    ///
    /// Возвращает Some только на шаге предпросмотра: проверка шага делается
    /// в момент срабатывания таймера, не в момент планирования. Сколько бы
    /// правок ни накопилось, запрос один и несёт последние значения.
    pub fn take_preview_request(&mut self) -> Option<TemplatePreviewRequest> {
        if !self.preview_dirty || self.current_step != STEP_PREVIEW {
            return None;
        }
        let template_id = self.selection.template_id.clone()?;
        self.preview_dirty = false;
        Some(TemplatePreviewRequest {
            template_id,
            target_brand: self.selection.target_brand.clone(),
            quantity_overrides: self.selection.quantity_overrides.clone(),
        })
    }

    /// Успешный предпросмотр заменяет прежний целиком и снимает ошибку
    pub fn apply_preview(&mut self, preview: TemplatePreview) {
        self.preview = Some(preview);
        self.preview_error = None;
    }

    /// Ошибка предпросмотра: прежние данные сбрасываются, показывается
    /// только ошибка (повтор — по явной кнопке)
    pub fn fail_preview(&mut self, error: String) {
        self.preview = None;
        self.preview_error = Some(error);
    }

    /// Действующее количество строки: переопределение либо номинал
    pub fn effective_quantity(&self, item_id: &str, nominal: f64) -> f64 {
        self.selection
            .quantity_overrides
            .get(item_id)
            .copied()
            .unwrap_or(nominal)
    }

    /// В предпросмотре есть строки без соответствия в каталоге
    pub fn has_unmapped(&self) -> bool {
        self.preview
            .as_ref()
            .map(|p| p.report.no_mapping > 0)
            .unwrap_or(false)
    }

    /// Успешное создание: терминальный шаг
    pub fn complete_submission(&mut self) {
        self.current_step = STEP_DONE;
    }

    /// "Создать ещё": сброс мастера, опционально оставив выбранный шаблон
    pub fn reset_for_another(&mut self, preserve_template: bool) {
        let template_id = if preserve_template {
            self.selection.template_id.take()
        } else {
            None
        };
        *self = Self::new();
        self.selection.template_id = template_id;
    }
}

// --- производные агрегаты (чистые функции, пересчитываются на каждый рендер) ---

/// Оценка себестоимости: Σ(unit_cost × действующее количество)
pub fn estimated_total_cost(
    preview: &TemplatePreview,
    overrides: &BTreeMap<String, f64>,
) -> f64 {
    preview
        .items
        .iter()
        .map(|item| {
            let qty = overrides
                .get(&item.template_item_id)
                .copied()
                .unwrap_or(item.quantity);
            item.unit_cost * qty
        })
        .sum()
}

/// Доля разрешённых строк: (resolved + using_product) / total, 0 при пустом отчёте
pub fn resolution_success_rate(report: &ResolutionReport) -> f64 {
    if report.total_items == 0 {
        return 0.0;
    }
    (report.resolved + report.using_product) as f64 / report.total_items as f64
}

/// Человекочитаемый статус строки предпросмотра
pub fn status_label(status: ResolutionStatus) -> &'static str {
    match status {
        ResolutionStatus::Resolved => "Подобран аналог",
        ResolutionStatus::UsingProduct => "Товар из шаблона",
        ResolutionStatus::NoMapping => "Нет соответствия",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u601_bom_from_template::PreviewItem;

    fn make_item(id: &str, status: ResolutionStatus, unit_cost: f64, quantity: f64) -> PreviewItem {
        PreviewItem {
            template_item_id: id.to_string(),
            description: format!("Компонент {}", id),
            product_ref: match status {
                ResolutionStatus::NoMapping => None,
                _ => Some(format!("product-{}", id)),
            },
            unit_cost,
            quantity,
            unit: "шт".to_string(),
            status,
            is_quantity_variable: true,
            is_required: false,
        }
    }

    fn make_preview(items: Vec<PreviewItem>) -> TemplatePreview {
        let report = ResolutionReport {
            total_items: items.len(),
            resolved: items
                .iter()
                .filter(|i| i.status == ResolutionStatus::Resolved)
                .count(),
            using_product: items
                .iter()
                .filter(|i| i.status == ResolutionStatus::UsingProduct)
                .count(),
            no_mapping: items
                .iter()
                .filter(|i| i.status == ResolutionStatus::NoMapping)
                .count(),
        };
        TemplatePreview { items, report }
    }

    fn state_on_preview_step() -> WizardState {
        let mut st = WizardState::new();
        st.selection.template_id = Some("tpl-1".to_string());
        assert!(st.next_step());
        st
    }

    #[test]
    fn test_step1_guard_depends_only_on_template() {
        let mut st = WizardState::new();
        assert!(!st.can_proceed_step1());

        // Несвязанные поля не влияют на guard шага 1
        st.selection.name = "Стол обеденный".to_string();
        st.selection.output_quantity = 5.0;
        st.selection.notes = "примечание".to_string();
        assert!(!st.can_proceed_step1());

        st.selection.template_id = Some("tpl-1".to_string());
        assert!(st.can_proceed_step1());
    }

    #[test]
    fn test_clamp_quantity() {
        assert_eq!(clamp_quantity(-5.0), 0.01);
        assert_eq!(clamp_quantity(123456.789), 99999.0);
        assert_eq!(clamp_quantity(1.005), 1.0);
        assert_eq!(clamp_quantity(2.339), 2.34);
        assert_eq!(clamp_quantity(0.0), 0.01);
    }

    #[test]
    fn test_next_blocked_without_template() {
        let mut st = WizardState::new();
        assert!(!st.next_step());
        assert_eq!(st.current_step, STEP_TEMPLATE);
    }

    #[test]
    fn test_first_preview_requested_on_leaving_step1() {
        let mut st = state_on_preview_step();
        assert_eq!(st.current_step, STEP_PREVIEW);
        let req = st.take_preview_request().expect("request expected");
        assert_eq!(req.template_id, "tpl-1");
        // Запрос забирается ровно один раз
        assert!(st.take_preview_request().is_none());
    }

    #[test]
    fn test_override_burst_coalesces_to_single_request() {
        let mut st = state_on_preview_step();
        st.take_preview_request();

        // Серия быстрых правок одного поля
        st.set_override("item-1", 5.0);
        st.set_override("item-1", 6.0);
        st.set_override("item-2", 1.0);
        st.set_override("item-1", 7.5);

        let req = st.take_preview_request().expect("request expected");
        assert_eq!(req.quantity_overrides.get("item-1"), Some(&7.5));
        assert_eq!(req.quantity_overrides.get("item-2"), Some(&1.0));
        assert!(st.take_preview_request().is_none());
    }

    #[test]
    fn test_no_request_when_not_on_preview_step() {
        let mut st = state_on_preview_step();
        st.take_preview_request();
        st.set_override("item-1", 2.0);

        // Уход с шага до срабатывания таймера: запрос не отдаётся
        st.prev_step();
        assert!(st.take_preview_request().is_none());

        // Возврат на шаг предпросмотра: накопленная правка всё ещё требует запроса
        assert!(st.next_step());
        assert!(st.take_preview_request().is_some());
    }

    #[test]
    fn test_prev_step_clears_preview_error() {
        let mut st = state_on_preview_step();
        st.fail_preview("HTTP error: 500".to_string());
        assert!(st.preview_error.is_some());
        st.prev_step();
        assert_eq!(st.current_step, STEP_TEMPLATE);
        assert!(st.preview_error.is_none());
    }

    #[test]
    fn test_failure_drops_previous_preview() {
        let mut st = state_on_preview_step();
        st.apply_preview(make_preview(vec![make_item(
            "1",
            ResolutionStatus::Resolved,
            10.0,
            1.0,
        )]));
        st.fail_preview("HTTP error: 502".to_string());
        assert!(st.preview.is_none());
        assert!(!st.can_proceed_step2());
    }

    #[test]
    fn test_go_to_step_rules() {
        let mut st = state_on_preview_step();
        st.apply_preview(make_preview(vec![make_item(
            "1",
            ResolutionStatus::Resolved,
            10.0,
            1.0,
        )]));

        // Вперёд через шаг — нельзя
        assert!(!st.go_to_step(STEP_DONE));
        // На следующий при выполненном guard — можно
        assert!(st.go_to_step(STEP_OUTPUT));
        // Назад свободно
        assert!(st.go_to_step(STEP_TEMPLATE));
        assert_eq!(st.current_step, STEP_TEMPLATE);
    }

    #[test]
    fn test_step3_guard() {
        let mut st = WizardState::new();
        st.current_step = STEP_OUTPUT;
        assert!(!st.can_proceed_step3());

        st.selection.output_product_id = Some("prod-1".to_string());
        st.selection.name = "Ст".to_string(); // короче 3 символов
        assert!(!st.can_proceed_step3());

        st.selection.name = "Стол".to_string();
        st.selection.output_quantity = 0.0;
        assert!(!st.can_proceed_step3());

        st.selection.output_quantity = 2.0;
        assert!(st.can_proceed_step3());
    }

    #[test]
    fn test_estimated_total_cost_pure() {
        let preview = make_preview(vec![
            make_item("1", ResolutionStatus::Resolved, 100.0, 2.0),
            make_item("2", ResolutionStatus::UsingProduct, 10.0, 5.0),
        ]);
        let mut overrides = BTreeMap::new();
        overrides.insert("2".to_string(), 8.0);

        let first = estimated_total_cost(&preview, &overrides);
        let second = estimated_total_cost(&preview, &overrides);
        assert_eq!(first, 280.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolution_success_rate() {
        let report = ResolutionReport {
            total_items: 4,
            resolved: 2,
            using_product: 1,
            no_mapping: 1,
        };
        assert_eq!(resolution_success_rate(&report), 0.75);
        assert_eq!(resolution_success_rate(&ResolutionReport::default()), 0.0);
    }

    #[test]
    fn test_round_trip_scenario() {
        use crate::shared::storage::{KeyValueStore, MemoryStore};
        use crate::usecases::u601_bom_from_template::draft;

        let store = MemoryStore::new();
        let mut st = WizardState::new();

        // Шаг 1: выбор шаблона T, черновик сохраняется
        st.selection.template_id = Some("tpl-T".to_string());
        draft::save_draft(&store, &st.selection, chrono::Utc::now());
        assert!(store.get(draft::DRAFT_KEY).is_some());

        // Шаг 2: предпросмотр с одной строкой без соответствия
        assert!(st.next_step());
        let req = st.take_preview_request().expect("preview request");
        assert_eq!(req.template_id, "tpl-T");
        st.apply_preview(make_preview(vec![
            make_item("1", ResolutionStatus::Resolved, 50.0, 1.0),
            make_item("2", ResolutionStatus::NoMapping, 0.0, 1.0),
        ]));
        assert_eq!(st.preview.as_ref().unwrap().report.no_mapping, 1);

        // Попытка создать: требуется подтверждение из-за no_mapping
        assert!(st.has_unmapped());

        // Шаг 3 и создание после подтверждения
        assert!(st.next_step());
        st.selection.output_product_id = Some("prod-1".to_string());
        st.selection.name = "Стол из шаблона".to_string();
        assert!(st.can_proceed_step3());

        st.complete_submission();
        draft::clear_draft(&store);
        draft::remember_last_template(&store, "tpl-T");

        assert_eq!(st.current_step, STEP_DONE);
        assert!(store.get(draft::DRAFT_KEY).is_none());
        assert_eq!(draft::last_template(&store).as_deref(), Some("tpl-T"));
    }

    #[test]
    fn test_terminal_step_blocks_navigation() {
        let mut st = state_on_preview_step();
        st.complete_submission();
        st.prev_step();
        assert_eq!(st.current_step, STEP_DONE);
        assert!(!st.go_to_step(STEP_TEMPLATE));
    }

    #[test]
    fn test_template_change_resets_overrides_and_preview() {
        let mut st = state_on_preview_step();
        st.set_override("item-1", 3.0);
        st.apply_preview(make_preview(vec![make_item(
            "1",
            ResolutionStatus::Resolved,
            10.0,
            1.0,
        )]));

        st.set_template(Some("tpl-2".to_string()));
        assert!(st.selection.quantity_overrides.is_empty());
        assert!(st.preview.is_none());
        let req = st.take_preview_request().expect("request expected");
        assert_eq!(req.template_id, "tpl-2");
    }

    #[test]
    fn test_reset_for_another() {
        let mut st = state_on_preview_step();
        st.apply_preview(make_preview(vec![make_item(
            "1",
            ResolutionStatus::Resolved,
            10.0,
            1.0,
        )]));
        st.complete_submission();

        st.reset_for_another(true);
        assert_eq!(st.current_step, STEP_TEMPLATE);
        assert_eq!(st.selection.template_id.as_deref(), Some("tpl-1"));
        assert!(st.preview.is_none());

        st.reset_for_another(false);
        assert!(st.selection.template_id.is_none());
    }
}
