use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// File picker styled like the other form controls. Reports the first picked
/// file; the browser input keeps no other state the form cares about.
#[component]
pub fn FileInput(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Called with the picked file
    #[prop(optional)]
    on_select: Option<Callback<web_sys::File>>,
    /// Accept attribute, e.g. ".py,.js"
    #[prop(optional, into)]
    accept: MaybeProp<String>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_accept = move || accept.get().unwrap_or_default();

    let handle_change = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        if let Some(input) = input {
            if let Some(files) = input.files() {
                if let Some(file) = files.get(0) {
                    if let Some(handler) = on_select {
                        handler.run(file);
                    }
                }
            }
        }
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class="form__file"
                type="file"
                accept=input_accept
                disabled=disabled
                on:change=handle_change
            />
        </div>
    }
}
