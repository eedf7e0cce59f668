//! Debounce-каналы и защита от устаревших ответов.
//!
//! Каждая отложенная операция (повторный предпросмотр, автосохранение
//! черновика) владеет ровно одним каналом: повторный вызов `schedule`
//! отменяет предыдущий таймер и ставит новый (trailing-edge debounce).
//! Наблюдаемые поля передаются в замыкание явно — никакой неявной
//! реактивной зависимости канал не создаёт.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Канал trailing-edge debounce поверх window.setTimeout.
///
/// Хендл активного таймера хранится в StoredValue рядом с остальным
/// состоянием канала; при teardown компонента вызвать `cancel`.
#[derive(Clone, Copy)]
pub struct DebounceChannel {
    delay_ms: i32,
    timeout_id: StoredValue<Option<i32>>,
}

impl DebounceChannel {
    pub fn new(delay_ms: i32) -> Self {
        Self {
            delay_ms,
            timeout_id: StoredValue::new(None),
        }
    }

    /// Запланировать вызов `f` через delay_ms, отменив ранее запланированный.
    ///
    /// В пределах одного канала срабатывает только последний `schedule`.
    pub fn schedule(&self, f: impl Fn() + 'static) {
        self.cancel();

        let window = match web_sys::window() {
            Some(w) => w,
            None => return,
        };

        let timeout_store = self.timeout_id;
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            timeout_store.set_value(None);
            f();
        }) as Box<dyn Fn()>);

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            self.delay_ms,
        ) {
            Ok(id) => {
                closure.forget();
                self.timeout_id.set_value(Some(id));
            }
            Err(_) => {
                drop(closure);
            }
        }
    }

    /// Отменить ожидающий таймер, если он есть.
    pub fn cancel(&self) {
        if let Some(id) = self.timeout_id.get_value() {
            if let Some(w) = web_sys::window() {
                w.clear_timeout_with_handle(id);
            }
            self.timeout_id.set_value(None);
        }
    }

    /// Есть ли ожидающий таймер (для индикатора "сохранение...").
    pub fn is_pending(&self) -> bool {
        self.timeout_id.get_value().is_some()
    }
}

/// Монотонный счётчик запросов: ответ принимается, только если его номер
/// совпадает с последним выданным.
///
/// Закрывает гонку "медленный устаревший ответ перезаписывает свежие данные":
/// сам HTTP-запрос не отменяется, но его эффект отбрасывается на приёме.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeqGate {
    issued: u64,
}

impl SeqGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Выдать номер новому запросу; все ранее выданные становятся устаревшими.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Актуален ли ответ с данным номером.
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_gate_rejects_stale() {
        let mut gate = SeqGate::new();
        let first = gate.begin();
        let second = gate.begin();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }

    #[test]
    fn test_seq_gate_single_request() {
        let mut gate = SeqGate::new();
        let seq = gate.begin();
        assert!(gate.is_current(seq));
    }
}
