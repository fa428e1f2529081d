use std::fmt::{self, Display};

use common::{EncodedResult, Encoding, encode};
use log::debug;
use thiserror::Error;

use crate::clipboard::{Clipboard, CopyMechanism};

/// Feedback shown after a copy attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Copied(Encoding),
    CopyFailed,
}

impl Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copied(encoding) => write!(f, "Copied: {}. {encoding}", encoding.ordinal()),
            Self::CopyFailed => write!(f, "Copy failed, please copy manually"),
        }
    }
}

/// Receiver of conversion results and copy feedback.
pub trait Presenter {
    /// Show `results`, replacing whatever was shown before.
    fn render(&self, results: Vec<EncodedResult>);

    /// Show a transient message, replacing the current one.
    fn notify(&self, notice: Notice);
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a string to convert")]
    Empty,
}

/// Whitespace and line terminators as stripped by `String.prototype.trim`.
///
/// Unlike [`char::is_whitespace`], this includes U+FEFF and excludes U+0085.
fn is_trimmed(c: char) -> bool {
    matches!(
        c,
        '\t'
            | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Encode the trimmed `input` and hand the results to `presenter`.
pub fn convert(input: &str, presenter: &impl Presenter) -> Result<(), InputError> {
    let input = input.trim_matches(is_trimmed);
    if input.is_empty() {
        return Err(InputError::Empty);
    }

    debug!("Converting {} code units", input.encode_utf16().count());
    presenter.render(encode(input));
    Ok(())
}

/// Copy the raw value of `result` and report the outcome through `presenter`.
pub async fn copy_result(
    result: &EncodedResult,
    clipboard: &Clipboard<impl CopyMechanism, impl CopyMechanism>,
    presenter: &impl Presenter,
) -> bool {
    let copied = clipboard.copy(&result.value).await;
    presenter.notify(if copied {
        Notice::Copied(result.encoding)
    } else {
        Notice::CopyFailed
    });
    copied
}
