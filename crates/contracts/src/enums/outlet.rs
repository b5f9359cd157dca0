//! Характеристики торговой точки

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutletSize {
    Small,
    Medium,
    High,
}

impl OutletSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutletSize::Small => "Small",
            OutletSize::Medium => "Medium",
            OutletSize::High => "High",
        }
    }

    pub fn all() -> Vec<OutletSize> {
        vec![OutletSize::Small, OutletSize::Medium, OutletSize::High]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|v| v.as_str() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutletLocationType {
    #[serde(rename = "Tier 1")]
    Tier1,
    #[serde(rename = "Tier 2")]
    Tier2,
    #[serde(rename = "Tier 3")]
    Tier3,
}

impl OutletLocationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutletLocationType::Tier1 => "Tier 1",
            OutletLocationType::Tier2 => "Tier 2",
            OutletLocationType::Tier3 => "Tier 3",
        }
    }

    pub fn all() -> Vec<OutletLocationType> {
        vec![
            OutletLocationType::Tier1,
            OutletLocationType::Tier2,
            OutletLocationType::Tier3,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|v| v.as_str() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutletType {
    #[serde(rename = "Grocery Store")]
    GroceryStore,
    #[serde(rename = "Supermarket Type1")]
    SupermarketType1,
    #[serde(rename = "Supermarket Type2")]
    SupermarketType2,
    #[serde(rename = "Supermarket Type3")]
    SupermarketType3,
}

impl OutletType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutletType::GroceryStore => "Grocery Store",
            OutletType::SupermarketType1 => "Supermarket Type1",
            OutletType::SupermarketType2 => "Supermarket Type2",
            OutletType::SupermarketType3 => "Supermarket Type3",
        }
    }

    pub fn all() -> Vec<OutletType> {
        vec![
            OutletType::GroceryStore,
            OutletType::SupermarketType1,
            OutletType::SupermarketType2,
            OutletType::SupermarketType3,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|v| v.as_str() == label)
    }
}
