use crate::generator::session::Phase;
use crate::generator::view_model::GeneratorViewModel;
use crate::shared::components::ui::{Button, FileInput, RadioGroup, Select, Textarea};
use contracts::enums::{DocstringFormat, InputMode, TargetLanguage};
use leptos::prelude::*;

/// The submission form: language, docstring style, and the code payload as
/// pasted text or an uploaded file.
///
/// With `upload_only` the code/file toggle disappears and the form accepts
/// files only.
#[component]
pub fn GeneratorForm(
    vm: GeneratorViewModel,
    /// Fix the form to file uploads, hiding the mode toggle
    #[prop(optional)]
    upload_only: bool,
) -> impl IntoView {
    let session = vm.session;

    if upload_only {
        vm.set_mode(InputMode::File);
    }

    let mode = Signal::derive(move || session.with(|s| s.draft.mode));
    let language_value =
        Signal::derive(move || session.with(|s| s.draft.language.name().to_string()));
    let format_value = Signal::derive(move || session.with(|s| s.draft.format.name().to_string()));
    let code_value = Signal::derive(move || session.with(|s| s.draft.code.clone()));
    let submitting = Signal::derive(move || session.with(|s| s.phase == Phase::Submitting));

    let language_options: Vec<String> = TargetLanguage::all()
        .iter()
        .map(|l| l.name().to_string())
        .collect();
    let format_options: Vec<String> = DocstringFormat::all()
        .iter()
        .map(|f| f.name().to_string())
        .collect();

    let on_language = Callback::new(move |name: String| {
        if let Some(language) = TargetLanguage::from_name(&name) {
            vm.set_language(language);
        }
    });
    let on_format = Callback::new(move |name: String| {
        if let Some(format) = DocstringFormat::from_name(&name) {
            vm.set_format(format);
        }
    });
    let on_mode = Callback::new(move |name: String| {
        if let Some(mode) = InputMode::from_name(&name) {
            vm.set_mode(mode);
        }
    });
    let on_code = Callback::new(move |code: String| vm.set_code(code));
    let on_file = Callback::new(move |file: web_sys::File| vm.set_file(file));

    view! {
        <section class="generator-form">
            <div class="generator-form__selectors">
                <Select
                    label="Language"
                    value=language_value
                    on_change=on_language
                    options=language_options
                    id="language"
                />
                <Select
                    label="Docstring format"
                    value=format_value
                    on_change=on_format
                    options=format_options
                    id="format"
                />
            </div>

            <Show when=move || !upload_only>
                <RadioGroup
                    label="Input"
                    value=Signal::derive(move || mode.get().name().to_string())
                    on_change=on_mode
                    name="input-mode"
                    options=vec![
                        ("code".to_string(), "Paste code".to_string()),
                        ("file".to_string(), "Upload file".to_string()),
                    ]
                />
            </Show>

            <Show when=move || mode.get() == InputMode::Code>
                <Textarea
                    label="Code"
                    value=code_value
                    on_input=on_code
                    placeholder="Paste the code to document..."
                    rows=10
                    id="code"
                />
            </Show>

            <Show when=move || mode.get() == InputMode::File>
                <FileInput
                    label="File"
                    on_select=on_file
                    id="file-upload"
                />
                {move || {
                    match session.with(|s| s.draft.file.clone()) {
                        Some(file) => view! {
                            <p class="form__hint">
                                {format!("{} ({:.1} KB)", file.name, file.size_bytes as f64 / 1024.0)}
                            </p>
                        }
                        .into_any(),
                        None => view! {
                            <p class="form__hint">"Up to 10 MB."</p>
                        }
                        .into_any(),
                    }
                }}
            </Show>

            <div class="generator-form__actions">
                <Button
                    disabled=submitting
                    on_click=Callback::new(move |_| vm.submit_command())
                >
                    {move || if submitting.get() { "Generating..." } else { "Generate Docstring" }}
                </Button>
            </div>
        </section>
    }
}
