use crate::usecases::u501_predict::PredictViewModel;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let vm = leptos::context::use_context::<PredictViewModel>()
        .expect("PredictViewModel context not found");
    let status = vm.backend;
    let api_base = vm.api_base();

    // Запускаем проверку при монтировании
    Effect::new(move |_| {
        vm.check_backend();
    });

    view! {
        <footer data-zone="footer" class="site-footer status-bar">
            <small>"API: " {api_base} " • Local demo"</small>
            <span
                class=move || status.get().css_class()
                title="Click to re-check"
                on:click=move |_| vm.check_backend()
            >
                {move || status.get().display_text()}
            </span>
        </footer>
    }
}
