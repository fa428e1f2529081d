use leptos::{html, prelude::*};

use crate::{presenter::convert, print_error, ui::SignalPresenter};

#[component]
#[must_use]
pub fn ConvertForm() -> impl IntoView {
    let presenter = expect_context::<SignalPresenter>();
    let input_ref = NodeRef::<html::Input>::new();

    let on_convert = move |_| {
        let input = input_ref.get().map(|input| input.value()).unwrap_or_default();
        if let Err(err) = convert(&input, &presenter) {
            print_error!("{err}");
        }
    };

    view! {
        <div class="input-row">
            <input
                type="text"
                id="inputStr"
                placeholder="Text to encode"
                node_ref=input_ref
            />
            <button id="convertBtn" on:click=on_convert>"Convert"</button>
        </div>
    }
}
