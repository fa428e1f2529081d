use leptos::prelude::*;

use crate::ui::{
    SignalPresenter, input::ConvertForm, results::ResultList, toast::TransientMessage,
};

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    SignalPresenter::install_as_context();

    view! {
        <div class="popup">
            <h3>"Character Encoder"</h3>
            <ConvertForm />
            <ResultList />
            <TransientMessage />
        </div>
    }
}
