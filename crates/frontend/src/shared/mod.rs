pub mod api_utils;
pub mod clipboard;
pub mod effects;
pub mod number_format;
