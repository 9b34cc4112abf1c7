use crate::generator::ui::GeneratorPage;
use crate::shared::components::PageHeader;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app-shell">
            <PageHeader
                title="AI Docstring Generator"
                subtitle="Upload a file or paste code, pick a language and a docstring style."
            >
                {()}
            </PageHeader>
            <main class="app-shell__content">
                <GeneratorPage />
            </main>
        </div>
    }
}
