use crate::layout::{Footer, Hero};
use crate::shared::api_utils::client_config;
use crate::usecases::u501_predict::{PredictPage, PredictViewModel};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One view model for the whole page, shared via context.
    provide_context(PredictViewModel::new(client_config()));

    view! {
        <div class="app-root colorful">
            <Hero />
            <PredictPage />
            <Footer />
        </div>
    }
}
