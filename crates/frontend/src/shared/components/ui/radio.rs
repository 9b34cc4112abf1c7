use leptos::prelude::*;

/// Radio button component
#[component]
pub fn Radio(
    /// Label text
    #[prop(into)]
    label: String,
    /// Radio value
    #[prop(into)]
    value: String,
    /// Current selected value
    #[prop(into)]
    checked_value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Name attribute (for grouping)
    #[prop(into)]
    name: String,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
) -> impl IntoView {
    let radio_id = format!("radio-{}-{}", name, value);
    let value_for_check = value.clone();
    let value_for_change = value.clone();
    let is_checked = move || checked_value.get() == value_for_check;

    view! {
        <div class="form__radio-wrapper">
            <input
                id=radio_id.clone()
                type="radio"
                class="form__radio"
                name=name
                value=value
                checked=is_checked
                disabled=disabled
                on:change=move |_| {
                    if let Some(handler) = on_change {
                        handler.run(value_for_change.clone());
                    }
                }
            />
            <label class="form__radio-label" for=radio_id>
                {label}
            </label>
        </div>
    }
}

/// Radio group component: one labeled row of radio buttons
#[component]
pub fn RadioGroup(
    /// Label for the group
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current selected value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Name attribute shared by the radios
    #[prop(into)]
    name: String,
    /// (value, label) pairs, in display order
    options: Vec<(String, String)>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
) -> impl IntoView {
    let relay = Callback::new(move |picked: String| {
        if let Some(handler) = on_change {
            handler.run(picked);
        }
    });

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <span class="form__label">{l}</span>
            })}
            <div class="form__radio-group">
                {options
                    .into_iter()
                    .map(|(opt_value, opt_label)| {
                        view! {
                            <Radio
                                label=opt_label
                                value=opt_value
                                checked_value=value
                                on_change=relay
                                name=name.clone()
                                disabled=disabled
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
