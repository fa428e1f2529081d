//! Fixed delays of the popup's transient feedback.

use std::time::Duration;

/// How long a copy confirmation or failure message stays visible.
pub const TOAST_DURATION: Duration = Duration::from_millis(1500);

/// How long a copied value stays highlighted.
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(300);
