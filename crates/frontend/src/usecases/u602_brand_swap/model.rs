//! Модель замены бренда: выбор целевого бренда и коалесцирование
//! запросов предпросмотра. Без wasm-зависимостей.

use contracts::usecases::u602_brand_swap::{BrandSwapPreview, BrandSwapPreviewRequest};

#[derive(Debug, Clone, Default)]
pub struct SwapState {
    pub target_brand: Option<String>,
    /// Последний успешный предпросмотр; заменяется целиком
    pub preview: Option<BrandSwapPreview>,
    pub preview_error: Option<String>,
    /// Включать вариант (новая спецификация), а не менять исходную
    pub create_variant: bool,
    preview_dirty: bool,
}

impl SwapState {
    pub fn new() -> Self {
        Self {
            create_variant: true,
            ..Default::default()
        }
    }

    /// Смена целевого бренда сбрасывает предпросмотр и требует нового запроса
    pub fn set_target_brand(&mut self, target_brand: Option<String>) {
        if self.target_brand == target_brand {
            return;
        }
        self.target_brand = target_brand;
        self.preview = None;
        self.preview_error = None;
        self.preview_dirty = self.target_brand.is_some();
    }

    /// Явно запросить новый предпросмотр
    pub fn mark_preview_dirty(&mut self) {
        if self.target_brand.is_some() {
            self.preview_dirty = true;
        }
    }

    /// Забрать накопленный запрос; сколько бы смен бренда ни произошло,
    /// запрос один и несёт последнее значение
    pub fn take_preview_request(&mut self, bom_id: &str) -> Option<BrandSwapPreviewRequest> {
        if !self.preview_dirty {
            return None;
        }
        let target_brand = self.target_brand.clone()?;
        self.preview_dirty = false;
        Some(BrandSwapPreviewRequest {
            bom_id: bom_id.to_string(),
            target_brand,
        })
    }

    pub fn apply_preview(&mut self, preview: BrandSwapPreview) {
        self.preview = Some(preview);
        self.preview_error = None;
    }

    pub fn fail_preview(&mut self, error: String) {
        self.preview = None;
        self.preview_error = Some(error);
    }

    /// Применять есть что: предпросмотр без ошибки и хотя бы одна заменяемая строка
    pub fn can_apply(&self) -> bool {
        self.preview_error.is_none()
            && self
                .preview
                .as_ref()
                .map(|p| p.coverage.swappable > 0)
                .unwrap_or(false)
    }

    /// Изменение себестоимости: после минус до (отрицательное значение - экономия)
    pub fn cost_delta(&self) -> Option<f64> {
        self.preview
            .as_ref()
            .map(|p| p.total_after_cost - p.total_current_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u602_brand_swap::{SwapCoverage, SwapItem};

    fn preview(swappable: usize, total: usize) -> BrandSwapPreview {
        let items = (0..total)
            .map(|i| SwapItem {
                bom_item_id: format!("item-{}", i),
                description: format!("Компонент {}", i),
                current_brand: Some("brand-a".to_string()),
                current_cost: 100.0,
                new_cost: if i < swappable { Some(90.0) } else { None },
                swappable: i < swappable,
                reason: if i < swappable {
                    None
                } else {
                    Some("Нет аналога".to_string())
                },
            })
            .collect();
        BrandSwapPreview {
            items,
            coverage: SwapCoverage {
                total,
                swappable,
                unswappable: total - swappable,
            },
            total_current_cost: 100.0 * total as f64,
            total_after_cost: 100.0 * total as f64 - 10.0 * swappable as f64,
        }
    }

    #[test]
    fn test_brand_burst_coalesces_to_single_request() {
        let mut st = SwapState::new();
        st.set_target_brand(Some("b1".to_string()));
        st.set_target_brand(Some("b2".to_string()));
        st.set_target_brand(Some("b3".to_string()));

        let req = st.take_preview_request("bom-1").expect("request expected");
        assert_eq!(req.target_brand, "b3");
        assert_eq!(req.bom_id, "bom-1");
        assert!(st.take_preview_request("bom-1").is_none());
    }

    #[test]
    fn test_no_request_without_brand() {
        let mut st = SwapState::new();
        st.mark_preview_dirty();
        assert!(st.take_preview_request("bom-1").is_none());

        st.set_target_brand(Some("b1".to_string()));
        st.take_preview_request("bom-1");
        st.set_target_brand(None);
        assert!(st.take_preview_request("bom-1").is_none());
    }

    #[test]
    fn test_can_apply_requires_swappable_rows() {
        let mut st = SwapState::new();
        assert!(!st.can_apply());

        st.apply_preview(preview(0, 3));
        assert!(!st.can_apply());

        st.apply_preview(preview(2, 3));
        assert!(st.can_apply());

        st.fail_preview("HTTP error: 500".to_string());
        assert!(!st.can_apply());
    }

    #[test]
    fn test_cost_delta() {
        let mut st = SwapState::new();
        assert!(st.cost_delta().is_none());
        st.apply_preview(preview(2, 3));
        assert_eq!(st.cost_delta(), Some(-20.0));
    }
}
