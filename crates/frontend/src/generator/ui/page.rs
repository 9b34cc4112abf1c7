use super::form::GeneratorForm;
use super::result::ResultPanel;
use crate::generator::view_model::GeneratorViewModel;
use leptos::prelude::*;

/// The single generator page: form on top, result panel below once a
/// generation has finished.
#[component]
pub fn GeneratorPage() -> impl IntoView {
    let vm = GeneratorViewModel::new();

    view! {
        <div class="generator">
            <GeneratorForm vm=vm />
            <ResultPanel vm=vm />
        </div>
    }
}
