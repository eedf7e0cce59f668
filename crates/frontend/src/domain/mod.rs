pub mod a004_bom;
