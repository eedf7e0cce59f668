pub mod api;
pub mod draft;
pub mod model;
pub mod view;
