use super::view_model::PredictViewModel;
use crate::shared::number_format::format_number;
use contracts::shared::form_state::RequestState;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ResultCard(vm: PredictViewModel) -> impl IntoView {
    let state = vm.state;
    let copied = vm.copied;
    let request = move || state.with(|s| s.request().clone());

    view! {
        <div class=move || {
            if state.with(|s| s.result().is_some()) { "result-card pop" } else { "result-card" }
        }>
            {move || match request() {
                RequestState::Succeeded(result) => {
                    let sales = format_number(result.predicted_sales(), 2);
                    let price = format_number(result.dynamic_price(), 2);
                    let json = result.to_pretty_json();
                    view! {
                        <div class="result-top">
                            <div>
                                <div class="label-muted">"Predicted Sales"</div>
                                <div class="metric sales">{sales}</div>
                            </div>
                            <div>
                                <div class="label-muted">"Dynamic Price"</div>
                                <div class="metric price">"₹ " {price}</div>
                            </div>
                        </div>

                        <pre class="json">{json}</pre>

                        <div class="result-actions">
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| vm.copy_result()
                            >
                                {move || if copied.get() { "Copied!" } else { "Copy JSON" }}
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| vm.clear()
                            >
                                "Clear"
                            </Button>
                        </div>
                    }
                    .into_any()
                }
                RequestState::Loading => view! {
                    <div class="placeholder">
                        <Spinner />
                        <p class="muted">"Waiting for the model..."</p>
                    </div>
                }
                .into_any(),
                RequestState::Idle | RequestState::Failed(_) => view! {
                    <div class="placeholder">
                        <h4>"No result yet"</h4>
                        <p class="muted">"Use presets or fill the left form, then press Predict."</p>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
