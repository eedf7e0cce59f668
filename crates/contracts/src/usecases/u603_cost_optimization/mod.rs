pub mod preview;
pub mod request;
pub mod response;

pub use preview::{CostOptimizationPreview, OptimizableItem};
pub use request::ApplyCostOptimizationRequest;
pub use response::{ApplyCostOptimizationResponse, OptimizationReport, OptimizationReportItem};

use crate::usecases::common::UseCaseMetadata;

pub struct CostOptimization;

impl UseCaseMetadata for CostOptimization {
    fn usecase_index() -> &'static str {
        "u603"
    }

    fn usecase_name() -> &'static str {
        "cost_optimization"
    }

    fn display_name() -> &'static str {
        "Оптимизация стоимости"
    }

    fn description() -> &'static str {
        "Замена выбранных компонентов спецификации самыми дешёвыми аналогами с созданием варианта"
    }
}
