use serde::{Deserialize, Serialize};

/// Строка предпросмотра оптимизации: самый дешёвый аналог для компонента
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptimizableItem {
    /// Идентификатор строки спецификации
    pub bom_item_id: String,
    /// Описание компонента
    pub description: String,
    /// Текущая стоимость за единицу
    pub current_cost: f64,
    /// Стоимость самого дешёвого аналога
    pub best_cost: f64,
    /// Бренд самого дешёвого аналога
    pub best_brand: Option<String>,
    /// Для строки есть аналоги (компонентный стандарт известен)
    pub can_optimize: bool,
    /// Текущий товар уже самый дешёвый
    pub is_already_cheapest: bool,
}

impl OptimizableItem {
    /// Экономия за единицу при замене на самый дешёвый аналог
    pub fn saving(&self) -> f64 {
        if self.can_optimize && !self.is_already_cheapest {
            self.current_cost - self.best_cost
        } else {
            0.0
        }
    }
}

/// Предпросмотр оптимизации стоимости (считается сервером)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostOptimizationPreview {
    pub items: Vec<OptimizableItem>,
    /// Текущая себестоимость спецификации
    pub total_current_cost: f64,
    /// Потенциальная экономия при замене всех оптимизируемых строк
    pub total_potential_saving: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saving_only_for_optimizable() {
        let base = OptimizableItem {
            bom_item_id: "1".to_string(),
            description: "Петля".to_string(),
            current_cost: 100.0,
            best_cost: 80.0,
            best_brand: Some("b1".to_string()),
            can_optimize: true,
            is_already_cheapest: false,
        };
        assert_eq!(base.saving(), 20.0);

        let cheapest = OptimizableItem {
            is_already_cheapest: true,
            ..base.clone()
        };
        assert_eq!(cheapest.saving(), 0.0);

        let no_alternatives = OptimizableItem {
            can_optimize: false,
            ..base
        };
        assert_eq!(no_alternatives.saving(), 0.0);
    }
}
