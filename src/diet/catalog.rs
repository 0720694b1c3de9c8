//! Food catalog
//!
//! The reference catalog lists foods with mental health benefits; costs are per
//! serving in INR. Callers may swap in their own catalog as long as the shape is
//! preserved.

use crate::diet::types::FoodItem;
use crate::error::WellnessError;

/// (id, name, kcal, benefit, cost)
const REFERENCE_FOODS: [(&str, &str, u32, &str, f64); 21] = [
    ("1", "Almonds", 200, "Reduces stress", 20.0),
    ("2", "Salmon", 250, "Boosts mood with omega-3s", 200.0),
    ("3", "Dark Chocolate", 150, "Improves mood", 50.0),
    ("4", "Blueberries", 80, "Supports brain health", 30.0),
    ("5", "Green Tea", 0, "Calms the mind", 15.0),
    ("6", "Peanut Butter", 180, "Reduces anxiety", 10.0),
    ("7", "Bananas", 90, "Improves mood with potassium", 5.0),
    ("8", "Oatmeal", 150, "Good for stress relief", 10.0),
    ("9", "Greek Yogurt", 100, "Helps digestion, boosts mood", 30.0),
    ("10", "Avocado", 160, "High in healthy fats", 50.0),
    ("11", "Chickpeas", 120, "Rich in protein, boosts mood", 8.0),
    ("12", "Spinach", 20, "Reduces anxiety", 5.0),
    ("13", "Sweet Potatoes", 100, "High in fiber", 15.0),
    ("14", "Eggs", 70, "High in protein", 5.0),
    ("15", "Brown Rice", 110, "Promotes mental clarity", 12.0),
    ("16", "Oranges", 50, "Vitamin C for stress reduction", 10.0),
    ("17", "Walnuts", 200, "High in omega-3s", 50.0),
    ("18", "Chia Seeds", 120, "Reduces anxiety", 30.0),
    ("19", "Turkey", 200, "High in tryptophan", 150.0),
    ("20", "Quinoa", 110, "High in protein", 20.0),
    ("21", "Broccoli", 30, "Boosts mental clarity", 10.0),
];

/// The reference catalog in its declared order
pub fn reference_catalog() -> Vec<FoodItem> {
    REFERENCE_FOODS
        .iter()
        .map(|&(id, name, calories, benefit, cost)| {
            FoodItem::new(id, name, calories, benefit, cost)
        })
        .collect()
}

/// Load a catalog from a JSON array of food items.
///
/// Order is preserved. Negative or non-finite costs are rejected.
pub fn catalog_from_json(json: &str) -> Result<Vec<FoodItem>, WellnessError> {
    let items: Vec<FoodItem> = serde_json::from_str(json)
        .map_err(|e| WellnessError::ParseError(format!("Failed to parse food catalog: {}", e)))?;

    if let Some(item) = items
        .iter()
        .find(|f| !f.cost_per_serving.is_finite() || f.cost_per_serving < 0.0)
    {
        return Err(WellnessError::invalid(format!(
            "cost per serving for {} must be a non-negative number, got {}",
            item.name, item.cost_per_serving
        )));
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_catalog_shape() {
        let catalog = reference_catalog();
        assert_eq!(catalog.len(), 21);
        assert_eq!(catalog[0].name, "Almonds");
        assert_eq!(catalog[20].name, "Broccoli");
        assert!(catalog.iter().all(|f| f.cost_per_serving > 0.0));

        let ids: Vec<_> = catalog.iter().map(|f| f.id.as_str()).collect();
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_catalog_from_json_with_short_field_names() {
        let json = r#"[
            { "id": "a", "name": "Lentils", "calories": 230, "benefit": "Steady energy", "cost": 12 },
            { "id": "b", "name": "Kiwi", "calories_per_serving": 42,
              "benefit_description": "Vitamin C", "cost_per_serving": 18.5 }
        ]"#;
        let catalog = catalog_from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].calories_per_serving, 230);
        assert_eq!(catalog[0].cost_per_serving, 12.0);
        assert_eq!(catalog[1].benefit_description, "Vitamin C");
    }

    #[test]
    fn test_catalog_rejects_negative_cost() {
        let json = r#"[{ "id": "x", "name": "Free lunch", "calories": 10, "benefit": "", "cost": -1 }]"#;
        let err = catalog_from_json(json).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_catalog_rejects_bad_json() {
        let err = catalog_from_json("{").unwrap_err();
        assert!(matches!(err, WellnessError::ParseError(_)));
    }
}
