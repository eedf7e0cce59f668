use serde::{Deserialize, Serialize};

/// Строка отчёта: стоимость до и после оптимизации
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptimizationReportItem {
    pub description: String,
    pub cost_before: f64,
    pub cost_after: f64,
}

/// Отчёт о выполненной оптимизации
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptimizationReport {
    /// Заменено строк
    pub applied: usize,
    /// Суммарная экономия
    pub total_saving: f64,
    pub items: Vec<OptimizationReportItem>,
}

/// Результат применения оптимизации стоимости
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyCostOptimizationResponse {
    /// UUID созданного варианта спецификации
    pub new_bom_id: String,

    /// Бизнес-код созданного варианта
    pub new_bom_number: String,

    pub report: OptimizationReport,
}
