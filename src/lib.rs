pub mod clipboard;
pub mod error_handling;
pub mod logging;
pub mod presenter;
pub mod timing;
pub mod toast;
pub mod ui;
