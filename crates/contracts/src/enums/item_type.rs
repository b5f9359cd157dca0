use serde::{Deserialize, Serialize};

/// Категория товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    #[serde(rename = "Baking Goods")]
    BakingGoods,
    Breads,
    Breakfast,
    Dairy,
    #[serde(rename = "Soft Drinks")]
    SoftDrinks,
    Meat,
    #[serde(rename = "Fruits and Vegetables")]
    FruitsAndVegetables,
    #[serde(rename = "Snack Foods")]
    SnackFoods,
    Household,
    #[serde(rename = "Health and Hygiene")]
    HealthAndHygiene,
    Others,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::BakingGoods => "Baking Goods",
            ItemType::Breads => "Breads",
            ItemType::Breakfast => "Breakfast",
            ItemType::Dairy => "Dairy",
            ItemType::SoftDrinks => "Soft Drinks",
            ItemType::Meat => "Meat",
            ItemType::FruitsAndVegetables => "Fruits and Vegetables",
            ItemType::SnackFoods => "Snack Foods",
            ItemType::Household => "Household",
            ItemType::HealthAndHygiene => "Health and Hygiene",
            ItemType::Others => "Others",
        }
    }

    /// Все категории в порядке отображения
    pub fn all() -> Vec<ItemType> {
        vec![
            ItemType::BakingGoods,
            ItemType::Breads,
            ItemType::Breakfast,
            ItemType::Dairy,
            ItemType::SoftDrinks,
            ItemType::Meat,
            ItemType::FruitsAndVegetables,
            ItemType::SnackFoods,
            ItemType::Household,
            ItemType::HealthAndHygiene,
            ItemType::Others,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|v| v.as_str() == label)
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eleven_choices_with_matching_serde_names() {
        let all = ItemType::all();
        assert_eq!(all.len(), 11);
        for item in all {
            let json = serde_json::to_string(&item).unwrap();
            assert_eq!(json, format!("\"{}\"", item.as_str()));
        }
    }

    #[test]
    fn test_from_label() {
        assert_eq!(
            ItemType::from_label("Fruits and Vegetables"),
            Some(ItemType::FruitsAndVegetables)
        );
        assert_eq!(ItemType::from_label("Vegetables"), None);
    }
}
