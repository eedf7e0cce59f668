use serde::{Deserialize, Serialize};

/// Результат разрешения одной строки шаблона
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStatus {
    /// Подобран товар целевого бренда по компонентному стандарту
    Resolved,
    /// Взят товар, указанный в шаблоне напрямую (без подбора по бренду)
    UsingProduct,
    /// Соответствие в каталоге не найдено
    NoMapping,
}

/// Разрешённая строка предпросмотра
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreviewItem {
    /// Идентификатор строки шаблона-источника
    pub template_item_id: String,
    /// Описание компонента
    pub description: String,
    /// UUID подобранного товара (нет для no_mapping)
    pub product_ref: Option<String>,
    /// Стоимость за единицу подобранного товара
    pub unit_cost: f64,
    /// Номинальное количество из шаблона
    pub quantity: f64,
    /// Единица измерения
    pub unit: String,
    /// Статус разрешения строки
    pub status: ResolutionStatus,
    /// Количество можно переопределить в мастере
    pub is_quantity_variable: bool,
    /// Обязательная строка
    pub is_required: bool,
}

/// Сводка разрешения по всем строкам
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResolutionReport {
    pub total_items: usize,
    pub resolved: usize,
    pub using_product: usize,
    pub no_mapping: usize,
}

/// Предпросмотр создания спецификации из шаблона.
///
/// Считается сервером по текущему состоянию каталога; клиент только отображает.
/// Каждый успешный запрос заменяет предпросмотр целиком.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemplatePreview {
    pub items: Vec<PreviewItem>,
    pub report: ResolutionReport,
}
