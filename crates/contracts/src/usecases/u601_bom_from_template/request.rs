use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Запрос предпросмотра разрешения шаблона
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplatePreviewRequest {
    /// UUID шаблона (a003_bom_template)
    pub template_id: String,

    /// Целевой бренд для подбора аналогов (опционально)
    pub target_brand: Option<String>,

    /// Переопределения количества: id строки шаблона → количество
    #[serde(default)]
    pub quantity_overrides: BTreeMap<String, f64>,
}

/// Запрос на создание спецификации из шаблона
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBomRequest {
    /// UUID шаблона (a003_bom_template)
    pub template_id: String,

    /// Целевой бренд для подбора аналогов (опционально)
    pub target_brand: Option<String>,

    /// Переопределения количества: id строки шаблона → количество
    #[serde(default)]
    pub quantity_overrides: BTreeMap<String, f64>,

    /// UUID производимого товара (a001_product)
    pub output_product_id: String,

    /// Количество выпуска
    pub output_quantity: f64,

    /// Название новой спецификации
    pub name: String,

    /// Примечания
    #[serde(default)]
    pub notes: String,
}
