pub mod api_utils;
pub mod debounce;
pub mod icons;
pub mod modal_frame;
pub mod number_format;
pub mod page_frame;
pub mod page_standard;
pub mod storage;
