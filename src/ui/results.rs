use common::EncodedResult;
use leptos::{prelude::*, task::spawn_local};

use crate::{
    clipboard::DomClipboard, presenter::copy_result, timing::HIGHLIGHT_DURATION,
    ui::SignalPresenter,
};

/// One encoding: its label and the value, copied on click.
///
/// The value is a text node, so entity-like output is shown verbatim rather than
/// interpreted as markup. `data-content` keeps the raw value for copying.
#[component]
fn ResultItem(result: EncodedResult) -> impl IntoView {
    let presenter = expect_context::<SignalPresenter>();
    let highlighted = RwSignal::new(false);

    let label = result.label();
    let value = result.value.clone();
    let content = value.clone();
    let raw = StoredValue::new(result);

    let on_click = move |_| {
        let result = raw.get_value();
        spawn_local(async move {
            if copy_result(&result, &DomClipboard::default(), &presenter).await {
                highlighted.set(true);
                set_timeout(move || highlighted.set(false), HIGHLIGHT_DURATION);
            }
        });
    };

    view! {
        <div class="result-item">
            <h4>{label}</h4>
            <pre
                class="copyable"
                class:copied=move || highlighted.get()
                data-content=content
                title="Click to copy"
                on:click=on_click
            >
                {value}
            </pre>
        </div>
    }
}

/// All results of the latest conversion. Each conversion replaces the previous list.
#[component]
#[must_use]
pub fn ResultList() -> impl IntoView {
    let presenter = expect_context::<SignalPresenter>();

    let items = move || {
        presenter
            .results
            .get()
            .into_iter()
            .map(|result| view! { <ResultItem result=result /> })
            .collect_view()
    };

    view! { <div id="resultContainer" class="results">{items}</div> }
}
