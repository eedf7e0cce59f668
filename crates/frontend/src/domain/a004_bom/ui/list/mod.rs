mod widget;

pub use widget::BomList;
