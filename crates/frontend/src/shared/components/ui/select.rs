use leptos::prelude::*;

/// Select component with label support. Options are plain strings: the
/// rendered label is also the value reported to `on_change`.
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options, in display order
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class="form__select"
                disabled=disabled
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <For
                    each=move || options.get()
                    key=|opt| opt.clone()
                    children=move |opt| {
                        let opt_value = opt.clone();
                        let is_selected = move || value.get() == opt_value;
                        view! {
                            <option value=opt.clone() selected=is_selected>
                                {opt.clone()}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
