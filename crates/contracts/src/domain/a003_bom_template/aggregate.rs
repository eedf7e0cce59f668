use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID типа для агрегата Шаблон спецификации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BomTemplateId(pub Uuid);

impl BomTemplateId {
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

impl AggregateId for BomTemplateId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(BomTemplateId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Строка шаблона спецификации
///
/// Ссылается не на конкретный товар, а на компонентный стандарт: конкретный
/// товар подбирается сервером при разрешении шаблона (см. u601).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemplateItem {
    /// Идентификатор строки внутри шаблона
    pub id: String,
    /// Описание компонента
    pub description: String,
    /// UUID компонентного стандарта (для подбора по бренду)
    pub standard_ref: Option<String>,
    /// Номинальное количество на единицу выпуска
    pub quantity: f64,
    /// Единица измерения
    pub unit: String,
    /// Количество можно менять при создании спецификации
    pub is_quantity_variable: bool,
    /// Обязательная строка (нельзя исключить из спецификации)
    pub is_required: bool,
}

/// Шаблон спецификации (агрегат a003)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BomTemplate {
    #[serde(flatten)]
    pub base: BaseAggregate<BomTemplateId>,

    /// Категория шаблона ("мебель", "электрика", ...)
    pub category: Option<String>,

    /// Единица измерения выпуска по умолчанию
    pub output_unit: String,

    /// Строки шаблона
    #[serde(default)]
    pub items: Vec<TemplateItem>,
}

impl BomTemplate {
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }
}

impl AggregateRoot for BomTemplate {
    type Id = BomTemplateId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "bom_template"
    }

    fn element_name() -> &'static str {
        "Шаблон спецификации"
    }

    fn list_name() -> &'static str {
        "Шаблоны спецификаций"
    }
}
