mod page;

pub use page::BomDetails;
