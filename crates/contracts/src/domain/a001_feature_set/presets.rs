//! Predefined feature sets used to prefill the form.

use super::aggregate::FeatureSet;
use crate::enums::{FatContent, ItemType, OutletLocationType, OutletSize, OutletType};
use once_cell::sync::Lazy;

#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub id: &'static str,
    pub label: &'static str,
    pub features: FeatureSet,
}

static PRESETS: Lazy<Vec<Preset>> = Lazy::new(|| {
    vec![
        Preset {
            id: "preset_1",
            label: "Baking (FDW12)",
            features: FeatureSet {
                item_identifier: "FDW12".to_string(),
                item_weight: None,
                item_fat_content: FatContent::Regular,
                item_visibility: Some(0.035399923),
                item_type: ItemType::BakingGoods,
                item_mrp: Some(144.5444),
                outlet_establishment_year: Some(1985.0),
                outlet_size: OutletSize::Medium,
                outlet_location_type: OutletLocationType::Tier3,
                outlet_type: OutletType::SupermarketType3,
                outlet_age: Some(40.0),
                avg_sales_by_item: Some(0.0),
                avg_sales_by_outlet_item: Some(0.0),
                item_category_aggregates: Some(0.0),
                is_perishable: Some(0.0),
            },
        },
        Preset {
            id: "preset_2",
            label: "Grocery Small",
            features: FeatureSet {
                item_identifier: "GR01".to_string(),
                item_weight: Some(0.75),
                item_fat_content: FatContent::LowFat,
                item_visibility: Some(0.02),
                item_type: ItemType::Household,
                item_mrp: Some(45.0),
                outlet_establishment_year: Some(2005.0),
                outlet_size: OutletSize::Small,
                outlet_location_type: OutletLocationType::Tier2,
                outlet_type: OutletType::GroceryStore,
                outlet_age: Some(20.0),
                avg_sales_by_item: Some(1.0),
                avg_sales_by_outlet_item: Some(0.5),
                item_category_aggregates: Some(0.2),
                is_perishable: Some(0.0),
            },
        },
        Preset {
            id: "preset_3",
            label: "Fresh Veg",
            features: FeatureSet {
                item_identifier: "FV02".to_string(),
                item_weight: Some(1.2),
                item_fat_content: FatContent::NonEdible,
                item_visibility: Some(0.08),
                item_type: ItemType::FruitsAndVegetables,
                item_mrp: Some(60.0),
                outlet_establishment_year: Some(1998.0),
                outlet_size: OutletSize::High,
                outlet_location_type: OutletLocationType::Tier1,
                outlet_type: OutletType::SupermarketType1,
                outlet_age: Some(27.0),
                avg_sales_by_item: Some(3.5),
                avg_sales_by_outlet_item: Some(2.2),
                item_category_aggregates: Some(1.1),
                is_perishable: Some(1.0),
            },
        },
    ]
});

pub fn presets() -> &'static [Preset] {
    &PRESETS
}

/// Пресет, которым заполняется форма при старте
pub fn default_preset() -> &'static Preset {
    &PRESETS[0]
}

pub fn find_preset(id: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_feature_set::validation::validate;

    #[test]
    fn test_presets_order_and_lookup() {
        let ids: Vec<_> = presets().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["preset_1", "preset_2", "preset_3"]);
        assert_eq!(default_preset().label, "Baking (FDW12)");
        assert_eq!(find_preset("preset_3").map(|p| p.label), Some("Fresh Veg"));
        assert!(find_preset("preset_9").is_none());
    }

    #[test]
    fn test_all_presets_pass_validation() {
        for preset in presets() {
            assert_eq!(validate(&preset.features), None, "{}", preset.id);
        }
    }

    #[test]
    fn test_preset_serializes_wire_values() {
        let json = serde_json::to_value(&find_preset("preset_2").unwrap().features).unwrap();
        assert_eq!(json["Item_Identifier"], "GR01");
        assert_eq!(json["Item_Fat_Content"], "Low Fat");
        assert_eq!(json["Outlet_Location_Type"], "Tier 2");
        assert_eq!(json["Outlet_Type"], "Grocery Store");
        assert_eq!(json["Item_MRP"], 45.0);
    }
}
