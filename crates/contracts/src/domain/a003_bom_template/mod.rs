pub mod aggregate;

pub use aggregate::{BomTemplate, BomTemplateId, TemplateItem};
