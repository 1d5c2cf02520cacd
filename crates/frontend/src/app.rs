use crate::usecases::u101_extract_financials::ExtractWidget;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="page">
            <h2 class="page__title">"Financial Data Extractor"</h2>
            <ExtractWidget />
        </main>
    }
}
