//! Diet planning data types

use serde::{Deserialize, Serialize};

/// A food in the catalog, with its per-serving calories and cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Calories per serving (kcal)
    #[serde(alias = "calories")]
    pub calories_per_serving: u32,
    /// Mental health benefit shown next to the food
    #[serde(alias = "benefit")]
    pub benefit_description: String,
    /// Cost per serving in the catalog's currency
    #[serde(alias = "cost")]
    pub cost_per_serving: f64,
}

impl FoodItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        calories_per_serving: u32,
        benefit_description: impl Into<String>,
        cost_per_serving: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            calories_per_serving,
            benefit_description: benefit_description.into(),
            cost_per_serving,
        }
    }
}

/// Input to the diet planner.
///
/// Numeric fields are already parsed; reading free-text input is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DietPlanRequest {
    /// Body weight in kilograms (must be positive)
    #[serde(alias = "weight")]
    pub body_weight_kg: f64,
    /// Spend available for the whole day; negative means nothing is affordable
    #[serde(alias = "budget")]
    pub daily_budget: f64,
}

impl DietPlanRequest {
    pub fn new(body_weight_kg: f64, daily_budget: f64) -> Self {
        Self {
            body_weight_kg,
            daily_budget,
        }
    }
}

/// Calorie target and the foods picked for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietPlanResult {
    /// Recommended daily intake (kcal)
    pub calorie_target: u32,
    /// Selected foods in catalog order
    pub selected_items: Vec<FoodItem>,
}

impl DietPlanResult {
    /// Calories across the selection
    pub fn total_calories(&self) -> u32 {
        self.selected_items
            .iter()
            .map(|f| f.calories_per_serving)
            .sum()
    }

    /// Cost across the selection
    pub fn total_cost(&self) -> f64 {
        self.selected_items.iter().map(|f| f.cost_per_serving).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.selected_items.is_empty()
    }
}
