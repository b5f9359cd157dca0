use super::inputs::{FeatureInput, FORM_FIELDS};
use super::result_card::ResultCard;
use super::view_model::PredictViewModel;
use contracts::domain::a001_feature_set::presets;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PredictPage() -> impl IntoView {
    let vm = leptos::context::use_context::<PredictViewModel>()
        .expect("PredictViewModel context not found");
    let state = vm.state;
    let is_busy = vm.is_busy();

    view! {
        <main>
            <section class="left-panel">
                <div class="card">
                    <div class="card-head">
                        <h3>"Inputs"</h3>
                        <div class="preset-row">
                            {presets()
                                .iter()
                                .map(|preset| view! {
                                    <Button
                                        size=ButtonSize::Small
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| vm.apply_preset(preset)
                                    >
                                        {preset.label}
                                    </Button>
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="grid">
                        {FORM_FIELDS
                            .iter()
                            .map(|&field| view! { <FeatureInput vm=vm field=field /> })
                            .collect_view()}
                    </div>

                    <div class="actions-row">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| vm.predict_command()
                            disabled=Signal::derive(is_busy)
                            loading=Signal::derive(is_busy)
                        >
                            {move || if is_busy() { "Predicting..." } else { "Predict" }}
                        </Button>
                        <div class="muted small">
                            {move || match state.with(|s| s.error().map(str::to_string)) {
                                Some(e) => view! { <span class="error">"Error: " {e}</span> }.into_any(),
                                None => view! { <span>"Fill inputs and predict"</span> }.into_any(),
                            }}
                        </div>
                    </div>
                </div>
            </section>

            <section class="right-panel">
                <ResultCard vm=vm />
            </section>
        </main>
    }
}
