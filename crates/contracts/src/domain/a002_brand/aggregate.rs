use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID типа для агрегата Бренд
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrandId(pub Uuid);

impl BrandId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for BrandId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(BrandId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Бренд/производитель (агрегат a002)
///
/// Используется подбором аналогов: у каждого компонентного стандарта может быть
/// соответствие в нескольких брендах.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    #[serde(flatten)]
    pub base: BaseAggregate<BrandId>,

    /// Страна производителя
    pub country: Option<String>,
}

impl Brand {
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }
}

impl AggregateRoot for Brand {
    type Id = BrandId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "brand"
    }

    fn element_name() -> &'static str {
        "Бренд"
    }

    fn list_name() -> &'static str {
        "Бренды"
    }
}
