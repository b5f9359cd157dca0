use serde::{Deserialize, Serialize};

/// Жирность товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FatContent {
    Regular,
    #[serde(rename = "Low Fat")]
    LowFat,
    #[serde(rename = "Non-Edible")]
    NonEdible,
}

impl FatContent {
    pub fn as_str(&self) -> &'static str {
        match self {
            FatContent::Regular => "Regular",
            FatContent::LowFat => "Low Fat",
            FatContent::NonEdible => "Non-Edible",
        }
    }

    pub fn all() -> Vec<FatContent> {
        vec![FatContent::Regular, FatContent::LowFat, FatContent::NonEdible]
    }

    /// Парсинг из строки
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|v| v.as_str() == label)
    }
}

impl std::fmt::Display for FatContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
