use serde::{Deserialize, Serialize};

/// Запрос предпросмотра замены бренда
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandSwapPreviewRequest {
    /// UUID спецификации (a004_bom)
    pub bom_id: String,

    /// UUID целевого бренда (a002_brand)
    pub target_brand: String,
}

/// Запрос на применение замены бренда
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyBrandSwapRequest {
    /// UUID спецификации (a004_bom)
    pub bom_id: String,

    /// UUID целевого бренда (a002_brand)
    pub target_brand: String,

    /// Создавать вариант (новую спецификацию с parent_bom_ref),
    /// а не менять исходную
    #[serde(default)]
    pub create_variant: bool,
}
