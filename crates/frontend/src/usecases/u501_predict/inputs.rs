use super::view_model::PredictViewModel;
use contracts::domain::a001_feature_set::FeatureField;
use leptos::prelude::*;

/// Fields shown in the input grid, in display order
pub const FORM_FIELDS: [FeatureField; 12] = [
    FeatureField::ItemIdentifier,
    FeatureField::ItemWeight,
    FeatureField::ItemFatContent,
    FeatureField::ItemVisibility,
    FeatureField::ItemType,
    FeatureField::ItemMrp,
    FeatureField::OutletEstablishmentYear,
    FeatureField::OutletSize,
    FeatureField::OutletLocationType,
    FeatureField::OutletType,
    FeatureField::OutletAge,
    FeatureField::IsPerishable,
];

/// Labeled input or select for one feature field
#[component]
pub fn FeatureInput(vm: PredictViewModel, field: FeatureField) -> impl IntoView {
    let state = vm.state;
    let id = field.name();
    let value = move || state.with(|s| s.features().field_value(field));

    let control = match field.choices() {
        Some(choices) => view! {
            <select
                id=id
                name=id
                prop:value=value
                on:change=move |ev| vm.set_field(field, event_target_value(&ev))
            >
                {choices
                    .into_iter()
                    .map(|choice| view! { <option value=choice>{choice}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        None => view! {
            <input
                type="text"
                id=id
                name=id
                inputmode=if field.is_numeric() { "decimal" } else { "text" }
                prop:value=value
                on:input=move |ev| vm.set_field(field, event_target_value(&ev))
            />
        }
        .into_any(),
    };

    view! {
        <div class="field">
            <label for=id>{field.label()}</label>
            {control}
        </div>
    }
}
