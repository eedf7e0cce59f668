//! Модель оптимизации стоимости: выбор строк для замены.
//!
//! Выбор хранится отдельно от данных предпросмотра; при каждом новом
//! предпросмотре выбор по умолчанию пересчитывается заново (ручные
//! снятия галочек при этом теряются).

use contracts::usecases::u603_cost_optimization::OptimizableItem;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptimizationSelection {
    selected: BTreeSet<String>,
}

/// Строка доступна для выбора: есть аналоги и текущий товар не самый дешёвый
fn is_eligible(item: &OptimizableItem) -> bool {
    item.can_optimize && !item.is_already_cheapest
}

impl OptimizationSelection {
    /// Выбор по умолчанию: все строки с положительной экономией
    pub fn default_selection(items: &[OptimizableItem]) -> Self {
        Self {
            selected: items
                .iter()
                .filter(|i| is_eligible(i))
                .map(|i| i.bom_item_id.clone())
                .collect(),
        }
    }

    /// Переключить строку; недоступные строки игнорируются
    pub fn toggle(&mut self, items: &[OptimizableItem], item_id: &str) {
        let eligible = items
            .iter()
            .any(|i| i.bom_item_id == item_id && is_eligible(i));
        if !eligible {
            return;
        }
        if !self.selected.remove(item_id) {
            self.selected.insert(item_id.to_string());
        }
    }

    pub fn select_all(&mut self, items: &[OptimizableItem]) {
        *self = Self::default_selection(items);
    }

    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, item_id: &str) -> bool {
        self.selected.contains(item_id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn ids(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }

    /// Экономия по выбранным строкам
    pub fn selected_saving(&self, items: &[OptimizableItem]) -> f64 {
        items
            .iter()
            .filter(|i| self.selected.contains(&i.bom_item_id))
            .map(|i| i.saving())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, can_optimize: bool, is_already_cheapest: bool) -> OptimizableItem {
        OptimizableItem {
            bom_item_id: id.to_string(),
            description: format!("Компонент {}", id),
            current_cost: 100.0,
            best_cost: 80.0,
            best_brand: Some("brand-b".to_string()),
            can_optimize,
            is_already_cheapest,
        }
    }

    #[test]
    fn test_default_selection_only_optimizable() {
        let items = vec![
            item("1", true, false),
            item("2", true, true),
            item("3", false, false),
        ];
        let sel = OptimizationSelection::default_selection(&items);
        assert!(sel.is_selected("1"));
        assert!(!sel.is_selected("2"));
        assert!(!sel.is_selected("3"));
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn test_toggle_ignores_ineligible() {
        let items = vec![item("1", true, false), item("2", false, false)];
        let mut sel = OptimizationSelection::default_selection(&items);

        sel.toggle(&items, "2");
        assert!(!sel.is_selected("2"));

        sel.toggle(&items, "1");
        assert!(!sel.is_selected("1"));
        sel.toggle(&items, "1");
        assert!(sel.is_selected("1"));
    }

    #[test]
    fn test_refetch_discards_manual_deselection() {
        let items = vec![item("1", true, false), item("2", true, false)];
        let mut sel = OptimizationSelection::default_selection(&items);
        sel.toggle(&items, "2");
        assert_eq!(sel.len(), 1);

        // Новый предпросмотр: выбор по умолчанию пересчитывается
        sel = OptimizationSelection::default_selection(&items);
        assert_eq!(sel.len(), 2);
    }

    #[test]
    fn test_selected_saving() {
        let items = vec![item("1", true, false), item("2", true, false)];
        let mut sel = OptimizationSelection::default_selection(&items);
        assert_eq!(sel.selected_saving(&items), 40.0);

        sel.toggle(&items, "2");
        assert_eq!(sel.selected_saving(&items), 20.0);

        sel.deselect_all();
        assert!(sel.is_empty());
        assert_eq!(sel.selected_saving(&items), 0.0);
    }
}
