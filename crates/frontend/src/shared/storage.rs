//! Абстракция key-value хранилища поверх localStorage.
//!
//! Хранилище — best-effort: ошибки чтения/записи (квота, приватный режим,
//! битый JSON) молча превращаются в "значения нет" и никогда не доходят до
//! вызывающего кода. Для тестов есть in-memory реализация.

use serde::{de::DeserializeOwned, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;

/// Интерфейс key-value хранилища (инжектится в компоненты и модели)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    /// Прочитать и десериализовать JSON; битые данные — как отсутствующие
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get(key)?;
        serde_json::from_str(&raw).ok()
    }

    /// Сериализовать и записать JSON; ошибка сериализации игнорируется
    fn set_json<T: Serialize>(&self, key: &str, value: &T) {
        if let Ok(raw) = serde_json::to_string(value) {
            self.set(key, &raw);
        }
    }
}

/// localStorage браузера
#[derive(Clone, Copy, Default)]
pub struct LocalStore;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(s) = storage() {
            let _ = s.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(s) = storage() {
            let _ = s.remove_item(key);
        }
    }
}

/// In-memory хранилище для тестов
#[derive(Default)]
pub struct MemoryStore {
    map: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.map.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.map.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Snapshot {
        name: String,
        qty: f64,
    }

    #[test]
    fn test_json_roundtrip() {
        let store = MemoryStore::new();
        let snap = Snapshot {
            name: "Стол".to_string(),
            qty: 2.0,
        };
        store.set_json("k", &snap);
        assert_eq!(store.get_json::<Snapshot>("k"), Some(snap));
    }

    #[test]
    fn test_corrupt_json_is_none() {
        let store = MemoryStore::new();
        store.set("k", "{not json");
        assert_eq!(store.get_json::<Snapshot>("k"), None);
    }

    #[test]
    fn test_remove() {
        let store = MemoryStore::new();
        store.set("k", "v");
        store.remove("k");
        assert_eq!(store.get("k"), None);
    }
}
