use crate::enums::{FatContent, ItemType, OutletLocationType, OutletSize, OutletType};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Набор признаков товара и торговой точки, отправляемый на прогноз.
///
/// Ключи сериализации совпадают с колонками модели на стороне сервиса.
/// Числовые поля остаются `None`, если пользователь очистил ввод, и
/// сериализуются как `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    #[serde(rename = "Item_Identifier")]
    pub item_identifier: String,
    #[serde(rename = "Item_Weight")]
    pub item_weight: Option<f64>,
    #[serde(rename = "Item_Fat_Content")]
    pub item_fat_content: FatContent,
    #[serde(rename = "Item_Visibility")]
    pub item_visibility: Option<f64>,
    #[serde(rename = "Item_Type")]
    pub item_type: ItemType,
    #[serde(rename = "Item_MRP")]
    pub item_mrp: Option<f64>,
    #[serde(rename = "Outlet_Establishment_Year")]
    pub outlet_establishment_year: Option<f64>,
    #[serde(rename = "Outlet_Size")]
    pub outlet_size: OutletSize,
    #[serde(rename = "Outlet_Location_Type")]
    pub outlet_location_type: OutletLocationType,
    #[serde(rename = "Outlet_Type")]
    pub outlet_type: OutletType,
    #[serde(rename = "Outlet_Age")]
    pub outlet_age: Option<f64>,

    // Агрегаты, рассчитанные заранее
    pub avg_sales_by_item: Option<f64>,
    pub avg_sales_by_outlet_item: Option<f64>,
    pub item_category_aggregates: Option<f64>,

    /// 0 или 1
    pub is_perishable: Option<f64>,
}

impl FeatureSet {
    /// Update one field from raw input text.
    ///
    /// Numeric fields go through [`parse_numeric`]. Text is stored verbatim.
    /// Enum fields only accept one of their fixed choices; anything else
    /// leaves the current value in place.
    pub fn set_field(&mut self, field: FeatureField, raw: &str) {
        match field {
            FeatureField::ItemIdentifier => self.item_identifier = raw.to_string(),
            FeatureField::ItemFatContent => {
                set_choice(&mut self.item_fat_content, FatContent::from_label(raw), field, raw)
            }
            FeatureField::ItemType => {
                set_choice(&mut self.item_type, ItemType::from_label(raw), field, raw)
            }
            FeatureField::OutletSize => {
                set_choice(&mut self.outlet_size, OutletSize::from_label(raw), field, raw)
            }
            FeatureField::OutletLocationType => set_choice(
                &mut self.outlet_location_type,
                OutletLocationType::from_label(raw),
                field,
                raw,
            ),
            FeatureField::OutletType => {
                set_choice(&mut self.outlet_type, OutletType::from_label(raw), field, raw)
            }
            numeric => {
                if let Some(slot) = self.numeric_slot(numeric) {
                    *slot = parse_numeric(raw);
                }
            }
        }
    }

    /// Render a field back into input text. Null numbers become "".
    pub fn field_value(&self, field: FeatureField) -> String {
        match field {
            FeatureField::ItemIdentifier => self.item_identifier.clone(),
            FeatureField::ItemFatContent => self.item_fat_content.as_str().to_string(),
            FeatureField::ItemType => self.item_type.as_str().to_string(),
            FeatureField::OutletSize => self.outlet_size.as_str().to_string(),
            FeatureField::OutletLocationType => self.outlet_location_type.as_str().to_string(),
            FeatureField::OutletType => self.outlet_type.as_str().to_string(),
            numeric => self
                .numeric_value(numeric)
                .map(|v| v.to_string())
                .unwrap_or_default(),
        }
    }

    /// Current value of a numeric field; `None` for null or non-numeric fields.
    pub fn numeric_value(&self, field: FeatureField) -> Option<f64> {
        match field {
            FeatureField::ItemWeight => self.item_weight,
            FeatureField::ItemVisibility => self.item_visibility,
            FeatureField::ItemMrp => self.item_mrp,
            FeatureField::OutletEstablishmentYear => self.outlet_establishment_year,
            FeatureField::OutletAge => self.outlet_age,
            FeatureField::AvgSalesByItem => self.avg_sales_by_item,
            FeatureField::AvgSalesByOutletItem => self.avg_sales_by_outlet_item,
            FeatureField::ItemCategoryAggregates => self.item_category_aggregates,
            FeatureField::IsPerishable => self.is_perishable,
            _ => None,
        }
    }

    fn numeric_slot(&mut self, field: FeatureField) -> Option<&mut Option<f64>> {
        match field {
            FeatureField::ItemWeight => Some(&mut self.item_weight),
            FeatureField::ItemVisibility => Some(&mut self.item_visibility),
            FeatureField::ItemMrp => Some(&mut self.item_mrp),
            FeatureField::OutletEstablishmentYear => Some(&mut self.outlet_establishment_year),
            FeatureField::OutletAge => Some(&mut self.outlet_age),
            FeatureField::AvgSalesByItem => Some(&mut self.avg_sales_by_item),
            FeatureField::AvgSalesByOutletItem => Some(&mut self.avg_sales_by_outlet_item),
            FeatureField::ItemCategoryAggregates => Some(&mut self.item_category_aggregates),
            FeatureField::IsPerishable => Some(&mut self.is_perishable),
            _ => None,
        }
    }
}

fn set_choice<T>(slot: &mut T, parsed: Option<T>, field: FeatureField, raw: &str) {
    match parsed {
        Some(value) => *slot = value,
        None => log::warn!("ignoring unknown choice {:?} for {}", raw, field.name()),
    }
}

/// Coerce raw input into a numeric field value.
///
/// Empty input clears the field. Whitespace-only input counts as zero.
/// Accepts decimal and exponent notation, the `0x`/`0o`/`0b` prefixes and
/// the literal `Infinity`. Anything else (including `inf` and `NaN`
/// spellings) becomes NaN so validation can reject it later.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    Some(parse_number_literal(trimmed).unwrap_or(f64::NAN))
}

fn parse_number_literal(s: &str) -> Option<f64> {
    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        return Some(
            digits
                .chars()
                .filter_map(|c| c.to_digit(radix))
                .fold(0.0, |acc, d| acc * radix as f64 + d as f64),
        );
    }

    // f64::from_str also takes "inf"/"nan" spellings; only plain digits pass here
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
    {
        return None;
    }
    s.parse::<f64>().ok()
}

// ============================================================================
// Fields
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureField {
    ItemIdentifier,
    ItemWeight,
    ItemFatContent,
    ItemVisibility,
    ItemType,
    ItemMrp,
    OutletEstablishmentYear,
    OutletSize,
    OutletLocationType,
    OutletType,
    OutletAge,
    AvgSalesByItem,
    AvgSalesByOutletItem,
    ItemCategoryAggregates,
    IsPerishable,
}

impl FeatureField {
    pub fn all() -> Vec<FeatureField> {
        vec![
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
            FeatureField::AvgSalesByItem,
            FeatureField::AvgSalesByOutletItem,
            FeatureField::ItemCategoryAggregates,
            FeatureField::IsPerishable,
        ]
    }

    /// Ключ поля в JSON
    pub fn name(&self) -> &'static str {
        match self {
            FeatureField::ItemIdentifier => "Item_Identifier",
            FeatureField::ItemWeight => "Item_Weight",
            FeatureField::ItemFatContent => "Item_Fat_Content",
            FeatureField::ItemVisibility => "Item_Visibility",
            FeatureField::ItemType => "Item_Type",
            FeatureField::ItemMrp => "Item_MRP",
            FeatureField::OutletEstablishmentYear => "Outlet_Establishment_Year",
            FeatureField::OutletSize => "Outlet_Size",
            FeatureField::OutletLocationType => "Outlet_Location_Type",
            FeatureField::OutletType => "Outlet_Type",
            FeatureField::OutletAge => "Outlet_Age",
            FeatureField::AvgSalesByItem => "avg_sales_by_item",
            FeatureField::AvgSalesByOutletItem => "avg_sales_by_outlet_item",
            FeatureField::ItemCategoryAggregates => "item_category_aggregates",
            FeatureField::IsPerishable => "is_perishable",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FeatureField::ItemIdentifier => "Item Identifier",
            FeatureField::ItemWeight => "Item Weight",
            FeatureField::ItemFatContent => "Item Fat Content",
            FeatureField::ItemVisibility => "Item Visibility",
            FeatureField::ItemType => "Item Type",
            FeatureField::ItemMrp => "Item MRP",
            FeatureField::OutletEstablishmentYear => "Outlet Year",
            FeatureField::OutletSize => "Outlet Size",
            FeatureField::OutletLocationType => "Outlet Location",
            FeatureField::OutletType => "Outlet Type",
            FeatureField::OutletAge => "Outlet Age",
            FeatureField::AvgSalesByItem => "Avg Sales by Item",
            FeatureField::AvgSalesByOutletItem => "Avg Sales by Outlet/Item",
            FeatureField::ItemCategoryAggregates => "Item Category Aggregates",
            FeatureField::IsPerishable => "Is Perishable (0/1)",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|f| f.name() == name)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            FeatureField::ItemWeight
                | FeatureField::ItemVisibility
                | FeatureField::ItemMrp
                | FeatureField::OutletEstablishmentYear
                | FeatureField::OutletAge
                | FeatureField::AvgSalesByItem
                | FeatureField::AvgSalesByOutletItem
                | FeatureField::ItemCategoryAggregates
                | FeatureField::IsPerishable
        )
    }

    /// Fixed choices for enum-backed fields, `None` for free inputs.
    pub fn choices(&self) -> Option<Vec<&'static str>> {
        match self {
            FeatureField::ItemFatContent => {
                Some(FatContent::all().iter().map(|v| v.as_str()).collect())
            }
            FeatureField::ItemType => Some(ItemType::all().iter().map(|v| v.as_str()).collect()),
            FeatureField::OutletSize => {
                Some(OutletSize::all().iter().map(|v| v.as_str()).collect())
            }
            FeatureField::OutletLocationType => {
                Some(OutletLocationType::all().iter().map(|v| v.as_str()).collect())
            }
            FeatureField::OutletType => {
                Some(OutletType::all().iter().map(|v| v.as_str()).collect())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_feature_set::presets::default_preset;

    #[test]
    fn test_parse_numeric() {
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("3.5"), Some(3.5));
        assert_eq!(parse_numeric(" 42 "), Some(42.0));
        assert_eq!(parse_numeric("   "), Some(0.0));
        assert!(parse_numeric("abc").unwrap().is_nan());
    }

    #[test]
    fn test_parse_numeric_special_literals() {
        for raw in ["inf", "INF", "infinity", "-inf", "NaN", "nan", "+infinity"] {
            assert!(parse_numeric(raw).unwrap().is_nan(), "{}", raw);
        }
        assert_eq!(parse_numeric("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_numeric("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_numeric("0x10"), Some(16.0));
        assert_eq!(parse_numeric("0b101"), Some(5.0));
        assert_eq!(parse_numeric("0o17"), Some(15.0));
        assert!(parse_numeric("0x").unwrap().is_nan());
        assert!(parse_numeric("-0x10").unwrap().is_nan());
        assert_eq!(parse_numeric("-1.5e2"), Some(-150.0));
        assert_eq!(parse_numeric(".5"), Some(0.5));
    }

    #[test]
    fn test_numeric_field_coercion() {
        let mut f = default_preset().features.clone();
        f.set_field(FeatureField::ItemWeight, "3.5");
        assert_eq!(f.item_weight, Some(3.5));
        f.set_field(FeatureField::ItemWeight, "");
        assert_eq!(f.item_weight, None);
        f.set_field(FeatureField::ItemMrp, "12e1");
        assert_eq!(f.item_mrp, Some(120.0));
    }

    #[test]
    fn test_text_field_is_not_coerced() {
        let mut f = default_preset().features.clone();
        f.set_field(FeatureField::ItemIdentifier, "3.5");
        assert_eq!(f.item_identifier, "3.5");
        f.set_field(FeatureField::ItemIdentifier, "");
        assert_eq!(f.item_identifier, "");
    }

    #[test]
    fn test_enum_field_accepts_only_known_choices() {
        let mut f = default_preset().features.clone();
        f.set_field(FeatureField::OutletType, "Grocery Store");
        assert_eq!(f.outlet_type, OutletType::GroceryStore);
        f.set_field(FeatureField::OutletType, "Kiosk");
        assert_eq!(f.outlet_type, OutletType::GroceryStore);
    }

    #[test]
    fn test_field_value_renders_inputs() {
        let mut f = default_preset().features.clone();
        assert_eq!(f.field_value(FeatureField::ItemIdentifier), "FDW12");
        assert_eq!(f.field_value(FeatureField::ItemWeight), "");
        assert_eq!(f.field_value(FeatureField::ItemMrp), "144.5444");
        assert_eq!(f.field_value(FeatureField::OutletSize), "Medium");
        f.set_field(FeatureField::OutletAge, "40");
        assert_eq!(f.field_value(FeatureField::OutletAge), "40");
    }

    #[test]
    fn test_field_names_match_serialized_keys() {
        let json = serde_json::to_value(&default_preset().features).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), FeatureField::all().len());
        for field in FeatureField::all() {
            assert!(obj.contains_key(field.name()), "missing {}", field.name());
            assert_eq!(FeatureField::from_name(field.name()), Some(field));
        }
        assert!(obj["Item_Weight"].is_null());
    }

    #[test]
    fn test_numeric_classification() {
        let numeric: Vec<_> = FeatureField::all()
            .into_iter()
            .filter(|f| f.is_numeric())
            .collect();
        assert_eq!(numeric.len(), 9);
        for field in FeatureField::all() {
            assert_eq!(field.choices().is_some(), !field.is_numeric() && field != FeatureField::ItemIdentifier);
        }
    }
}
