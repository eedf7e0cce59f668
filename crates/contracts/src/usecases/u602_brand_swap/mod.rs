pub mod preview;
pub mod request;
pub mod response;

pub use preview::{BrandSwapPreview, SwapCoverage, SwapItem};
pub use request::{ApplyBrandSwapRequest, BrandSwapPreviewRequest};
pub use response::{ApplyBrandSwapResponse, SwapReport, SwapReportItem};

use crate::usecases::common::UseCaseMetadata;

pub struct BrandSwap;

impl UseCaseMetadata for BrandSwap {
    fn usecase_index() -> &'static str {
        "u602"
    }

    fn usecase_name() -> &'static str {
        "brand_swap"
    }

    fn display_name() -> &'static str {
        "Замена бренда"
    }

    fn description() -> &'static str {
        "Замена компонентов спецификации аналогами целевого бренда с созданием варианта"
    }
}
