pub mod aggregate;

pub use aggregate::{Bom, BomId, BomItem};
