use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID типа для агрегата Спецификация
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BomId(pub Uuid);

impl BomId {
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

impl AggregateId for BomId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(BomId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Строка спецификации (конкретный товар с количеством и ценой)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BomItem {
    /// Идентификатор строки внутри спецификации
    pub id: String,
    /// UUID товара (a001_product)
    pub product_ref: String,
    /// Описание компонента
    pub description: String,
    /// Количество на единицу выпуска
    pub quantity: f64,
    /// Стоимость за единицу на момент создания
    pub unit_cost: f64,
}

/// Спецификация / Bill of Materials (агрегат a004)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bom {
    #[serde(flatten)]
    pub base: BaseAggregate<BomId>,

    /// UUID производимого товара (a001_product)
    pub output_product_ref: Option<String>,

    /// Количество выпуска
    pub output_quantity: f64,

    /// Строки спецификации
    #[serde(default)]
    pub items: Vec<BomItem>,

    /// UUID шаблона-источника (a003_bom_template), если создана из шаблона
    pub source_template_ref: Option<String>,

    /// UUID родительской спецификации, если это вариант
    /// (результат замены бренда или оптимизации стоимости)
    pub parent_bom_ref: Option<String>,
}

impl Bom {
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Плановая себестоимость: сумма по строкам quantity × unit_cost
    pub fn total_cost(&self) -> f64 {
        self.items.iter().map(|i| i.quantity * i.unit_cost).sum()
    }
}

impl AggregateRoot for Bom {
    type Id = BomId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "bom"
    }

    fn element_name() -> &'static str {
        "Спецификация"
    }

    fn list_name() -> &'static str {
        "Спецификации"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_bom(items: Vec<BomItem>) -> Bom {
        Bom {
            base: BaseAggregate::new(
                BomId::new_v4(),
                "BOM-001".to_string(),
                "Тестовая спецификация".to_string(),
            ),
            output_product_ref: None,
            output_quantity: 1.0,
            items,
            source_template_ref: None,
            parent_bom_ref: None,
        }
    }

    #[test]
    fn test_total_cost() {
        let bom = make_bom(vec![
            BomItem {
                id: "1".to_string(),
                product_ref: "p1".to_string(),
                description: "Доска".to_string(),
                quantity: 2.0,
                unit_cost: 150.0,
            },
            BomItem {
                id: "2".to_string(),
                product_ref: "p2".to_string(),
                description: "Саморез".to_string(),
                quantity: 10.0,
                unit_cost: 1.5,
            },
        ]);
        assert_eq!(bom.total_cost(), 315.0);
    }

    #[test]
    fn test_total_cost_empty() {
        assert_eq!(make_bom(vec![]).total_cost(), 0.0);
    }
}
