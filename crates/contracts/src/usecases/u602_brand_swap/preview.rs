use serde::{Deserialize, Serialize};

/// Строка предпросмотра замены бренда
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwapItem {
    /// Идентификатор строки спецификации
    pub bom_item_id: String,
    /// Описание компонента
    pub description: String,
    /// Текущий бренд компонента
    pub current_brand: Option<String>,
    /// Текущая стоимость за единицу
    pub current_cost: f64,
    /// Стоимость аналога целевого бренда (нет, если замена невозможна)
    pub new_cost: Option<f64>,
    /// Есть аналог целевого бренда
    pub swappable: bool,
    /// Причина, по которой замена невозможна
    pub reason: Option<String>,
}

/// Покрытие: сколько строк имеют аналог целевого бренда
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SwapCoverage {
    pub total: usize,
    pub swappable: usize,
    pub unswappable: usize,
}

/// Предпросмотр замены бренда (считается сервером)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrandSwapPreview {
    pub items: Vec<SwapItem>,
    pub coverage: SwapCoverage,
    /// Себестоимость до замены
    pub total_current_cost: f64,
    /// Себестоимость после замены (по заменяемым строкам)
    pub total_after_cost: f64,
}
