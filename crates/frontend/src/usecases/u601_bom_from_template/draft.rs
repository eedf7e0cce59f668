//! Черновик мастера в localStorage.
//!
//! Снимок содержит только ввод пользователя (без шага и без данных
//! предпросмотра) плюс момент сохранения. Черновик старше часа считается
//! протухшим и молча удаляется при загрузке.

use super::model::SelectionState;
use crate::shared::storage::KeyValueStore;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DRAFT_KEY: &str = "u601_wizard_draft_v1";
pub const LAST_TEMPLATE_KEY: &str = "u601_last_template";
pub const DRAFT_TTL_MINUTES: i64 = 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftSnapshot {
    pub template_id: Option<String>,
    pub target_brand: Option<String>,
    #[serde(default)]
    pub quantity_overrides: BTreeMap<String, f64>,
    pub output_product_id: Option<String>,
    pub output_quantity: f64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub notes: String,
    pub saved_at: DateTime<Utc>,
}

impl DraftSnapshot {
    pub fn capture(selection: &SelectionState, now: DateTime<Utc>) -> Self {
        Self {
            template_id: selection.template_id.clone(),
            target_brand: selection.target_brand.clone(),
            quantity_overrides: selection.quantity_overrides.clone(),
            output_product_id: selection.output_product_id.clone(),
            output_quantity: selection.output_quantity,
            name: selection.name.clone(),
            notes: selection.notes.clone(),
            saved_at: now,
        }
    }

    pub fn into_selection(self) -> SelectionState {
        SelectionState {
            template_id: self.template_id,
            target_brand: self.target_brand,
            quantity_overrides: self.quantity_overrides,
            output_product_id: self.output_product_id,
            output_quantity: self.output_quantity,
            name: self.name,
            notes: self.notes,
        }
    }
}

pub fn is_stale(saved_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now - saved_at > Duration::minutes(DRAFT_TTL_MINUTES)
}

pub fn save_draft(store: &impl KeyValueStore, selection: &SelectionState, now: DateTime<Utc>) {
    store.set_json(DRAFT_KEY, &DraftSnapshot::capture(selection, now));
}

/// Загрузить черновик. Отсутствующий, битый или протухший снимок
/// возвращается как None; протухший при этом удаляется.
pub fn load_draft(store: &impl KeyValueStore, now: DateTime<Utc>) -> Option<SelectionState> {
    let snapshot: DraftSnapshot = store.get_json(DRAFT_KEY)?;
    if is_stale(snapshot.saved_at, now) {
        store.remove(DRAFT_KEY);
        return None;
    }
    Some(snapshot.into_selection())
}

pub fn clear_draft(store: &impl KeyValueStore) {
    store.remove(DRAFT_KEY);
}

/// Единственный слот "последний использованный шаблон"
pub fn remember_last_template(store: &impl KeyValueStore, template_id: &str) {
    store.set(LAST_TEMPLATE_KEY, template_id);
}

pub fn last_template(store: &impl KeyValueStore) -> Option<String> {
    store.get(LAST_TEMPLATE_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStore;

    fn selection() -> SelectionState {
        let mut sel = SelectionState::default();
        sel.template_id = Some("tpl-1".to_string());
        sel.name = "Стол обеденный".to_string();
        sel.quantity_overrides.insert("item-1".to_string(), 4.5);
        sel
    }

    #[test]
    fn test_draft_roundtrip() {
        let store = MemoryStore::new();
        let now = Utc::now();
        save_draft(&store, &selection(), now);
        let restored = load_draft(&store, now).expect("draft expected");
        assert_eq!(restored, selection());
    }

    #[test]
    fn test_fresh_draft_survives_59_minutes() {
        let store = MemoryStore::new();
        let saved = Utc::now();
        save_draft(&store, &selection(), saved);
        let later = saved + Duration::minutes(59);
        assert!(load_draft(&store, later).is_some());
    }

    #[test]
    fn test_stale_draft_discarded_and_removed() {
        let store = MemoryStore::new();
        let saved = Utc::now();
        save_draft(&store, &selection(), saved);
        let later = saved + Duration::minutes(61);
        assert!(load_draft(&store, later).is_none());
        // Протухший снимок удалён из хранилища
        assert!(store.get(DRAFT_KEY).is_none());
    }

    #[test]
    fn test_corrupt_draft_is_none() {
        let store = MemoryStore::new();
        store.set(DRAFT_KEY, "{broken");
        assert!(load_draft(&store, Utc::now()).is_none());
    }

    #[test]
    fn test_last_template_single_slot() {
        let store = MemoryStore::new();
        remember_last_template(&store, "tpl-1");
        remember_last_template(&store, "tpl-2");
        assert_eq!(last_template(&store).as_deref(), Some("tpl-2"));
    }
}
