pub mod common;

pub mod a001_product;
pub mod a002_brand;
pub mod a003_bom_template;
pub mod a004_bom;
