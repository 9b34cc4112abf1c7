use crate::generator::session::Phase;
use crate::generator::view_model::GeneratorViewModel;
use crate::shared::components::ui::{Button, Textarea};
use contracts::generation::FunctionDoc;
use leptos::prelude::*;

/// Shows the annotated code once a generation has finished. The text stays
/// editable; download and copy act on the edited text.
#[component]
pub fn ResultPanel(vm: GeneratorViewModel) -> impl IntoView {
    let session = vm.session;

    let result_code = Signal::derive(move || session.with(|s| s.result_code.clone()));
    let docs = Signal::derive(move || session.with(|s| s.docs.clone()));
    let on_edit = Callback::new(move |code: String| vm.set_result_code(code));

    view! {
        <Show when=move || session.with(|s| s.phase == Phase::Ready)>
            <section class="result-panel">
                <h3 class="result-panel__title">"Generated Code with Docstrings"</h3>

                <Textarea
                    value=result_code
                    on_input=on_edit
                    rows=20
                    class="result-panel__editor"
                    id="result-code"
                />

                <Show when=move || !docs.get().is_empty()>
                    <ul class="docs-summary">
                        {move || docs.get().iter().map(doc_line).collect_view()}
                    </ul>
                </Show>

                <div class="result-panel__actions">
                    <Button on_click=Callback::new(move |_| vm.download_command())>
                        "Download File"
                    </Button>
                    <Button
                        variant="secondary"
                        on_click=Callback::new(move |_| vm.copy_command())
                    >
                        "Copy to Clipboard"
                    </Button>
                    <Button
                        variant="ghost"
                        on_click=Callback::new(move |_| vm.reset_command())
                    >
                        "Try Again"
                    </Button>
                </div>
            </section>
        </Show>
    }
}

fn doc_line(doc: &FunctionDoc) -> impl IntoView {
    let lines = match doc.end_lineno {
        Some(end) => format!("lines {}-{}", doc.start_lineno, end),
        None => format!("line {}", doc.start_lineno),
    };
    let status = if doc.generated_docstring.is_some() {
        "documented"
    } else if doc.existing_docstring.is_some() {
        "already documented"
    } else {
        "skipped"
    };

    view! {
        <li class="docs-summary__item">
            <span class="docs-summary__name">{doc.name.clone()}</span>
            <span class="docs-summary__lines">{lines}</span>
            <span class="docs-summary__status">{status}</span>
        </li>
    }
}
