pub mod event;
pub mod resolution;
pub mod ui_util;
