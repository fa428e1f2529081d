//! `log` backend writing to the browser console.

use log::{Level, LevelFilter, Log};
use wasm_bindgen::JsValue;
use web_sys::console;

struct Logger;

impl Logger {
    fn prefix(level: Level) -> &'static str {
        match level {
            Level::Trace => ".",
            Level::Debug => "?",
            Level::Info => ">",
            Level::Warn => "!",
            Level::Error => "X",
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = JsValue::from_str(&format!(
            "{} {}",
            Self::prefix(record.level()),
            record.args()
        ));
        match record.level() {
            Level::Error => console::error_1(&message),
            Level::Warn => console::warn_1(&message),
            Level::Info => console::info_1(&message),
            Level::Debug | Level::Trace => console::debug_1(&message),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Calling this more than once has no effect.
pub fn init() {
    if log::set_logger(&Logger).is_ok() {
        let level = if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        log::set_max_level(level);
    }
}
