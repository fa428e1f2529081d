use std::{error::Error, fmt};

use wasm_bindgen::JsValue;
use web_sys::js_sys::JsString;

/// Show a blocking message to the user and mirror it to the log.
#[macro_export]
macro_rules! print_error {
    ($($arg: expr),*) => {{
        let message = format!($($arg),*);
        log::warn!("{message}");
        gloo_dialogs::alert(&message);
    }}
}

/// A value thrown by a JavaScript API.
#[derive(Debug)]
pub struct JsException(JsValue);

impl JsException {
    /// Message of a thrown `Error`, or the thrown value itself when it is a string.
    fn message(&self) -> Option<String> {
        if let Some(text) = self.0.as_string() {
            return Some(text);
        }

        web_sys::js_sys::Reflect::get(&self.0, &JsValue::from_str("message"))
            .ok()
            .and_then(|message| message.as_string())
    }
}

impl fmt::Display for JsException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "JavaScript exception: {message}"),
            None => write!(
                f,
                "JavaScript exception: {}",
                JsString::from(self.0.clone())
            ),
        }
    }
}

impl Error for JsException {}

impl From<JsValue> for JsException {
    fn from(value: JsValue) -> Self {
        Self(value)
    }
}
