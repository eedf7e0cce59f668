pub mod preview;
pub mod request;
pub mod response;

pub use preview::{PreviewItem, ResolutionReport, ResolutionStatus, TemplatePreview};
pub use request::{CreateBomRequest, TemplatePreviewRequest};
pub use response::CreateBomResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct BomFromTemplate;

impl UseCaseMetadata for BomFromTemplate {
    fn usecase_index() -> &'static str {
        "u601"
    }

    fn usecase_name() -> &'static str {
        "bom_from_template"
    }

    fn display_name() -> &'static str {
        "Создание спецификации из шаблона"
    }

    fn description() -> &'static str {
        "Мастер: выбор шаблона, предпросмотр разрешения строк, параметры выпуска, создание спецификации"
    }
}
