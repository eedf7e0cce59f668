use serde::{Deserialize, Serialize};

/// Строка отчёта: стоимость до и после замены
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwapReportItem {
    pub description: String,
    pub cost_before: f64,
    pub cost_after: f64,
}

/// Отчёт о выполненной замене бренда
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwapReport {
    /// Заменено строк
    pub swapped: usize,
    /// Пропущено строк (нет аналога)
    pub skipped: usize,
    pub items: Vec<SwapReportItem>,
}

/// Результат применения замены бренда
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyBrandSwapResponse {
    /// UUID спецификации-результата (вариант либо обновлённая исходная)
    pub new_bom_id: String,

    /// Бизнес-код спецификации-результата
    pub new_bom_number: String,

    pub report: SwapReport,
}
