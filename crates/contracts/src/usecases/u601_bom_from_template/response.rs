use serde::{Deserialize, Serialize};

/// Результат создания спецификации
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBomResponse {
    /// UUID созданной спецификации (a004_bom)
    pub bom_id: String,

    /// Бизнес-код созданной спецификации (например, "BOM-2026-014")
    pub bom_number: String,
}
