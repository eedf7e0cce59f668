use serde::{Deserialize, Serialize};

/// Запрос на применение оптимизации стоимости
///
/// Операция атомарна с точки зрения клиента: либо создан вариант со всеми
/// выбранными заменами, либо ничего не изменилось.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyCostOptimizationRequest {
    /// UUID спецификации (a004_bom)
    pub bom_id: String,

    /// Идентификаторы строк, выбранных для замены
    pub selected_item_ids: Vec<String>,
}
