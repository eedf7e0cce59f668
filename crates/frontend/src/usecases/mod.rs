pub mod u601_bom_from_template;
pub mod u602_brand_swap;
pub mod u603_cost_optimization;
