use leptos::prelude::*;

use crate::ui::SignalPresenter;

/// The single copy confirmation or failure message, if one is shown.
#[component]
#[must_use]
pub fn TransientMessage() -> impl IntoView {
    let presenter = expect_context::<SignalPresenter>();

    move || {
        presenter.toast.with(|slot| {
            slot.current().map(|toast| {
                let message = toast.message().to_owned();
                view! { <div class="copy-success-tip">{message}</div> }
            })
        })
    }
}
