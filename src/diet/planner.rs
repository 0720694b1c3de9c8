//! Diet plan selection
//!
//! Estimates a daily calorie target from body weight and greedily picks foods
//! from a catalog until calories or budget run out.

use tracing::debug;

use crate::diet::types::{DietPlanRequest, DietPlanResult, FoodItem};
use crate::error::WellnessError;

/// Calories per kilogram of body weight. An activity-independent estimate, not
/// a medical calculation.
pub const CALORIES_PER_KG: f64 = 25.0;

/// Daily calorie target for a body weight, rounded to the nearest kcal
pub fn calorie_target(body_weight_kg: f64) -> Result<u32, WellnessError> {
    if !body_weight_kg.is_finite() || body_weight_kg <= 0.0 {
        return Err(WellnessError::invalid(format!(
            "body weight must be a positive number of kilograms, got {}",
            body_weight_kg
        )));
    }

    let target = (CALORIES_PER_KG * body_weight_kg).round();
    if target > f64::from(u32::MAX) {
        return Err(WellnessError::invalid(format!(
            "body weight {} kg gives a calorie target above {} kcal",
            body_weight_kg,
            u32::MAX
        )));
    }
    Ok(target as u32)
}

/// Build a diet plan by a single greedy pass over `catalog` in its given order.
///
/// An item is taken when it fits both the remaining calories and the remaining
/// budget; taking it reduces both. Items are never reordered or reconsidered, so
/// a different catalog order can give a different plan.
pub fn generate_diet_plan(
    request: &DietPlanRequest,
    catalog: &[FoodItem],
) -> Result<DietPlanResult, WellnessError> {
    let calorie_target = calorie_target(request.body_weight_kg)?;

    if request.daily_budget < 0.0 {
        debug!(
            daily_budget = request.daily_budget,
            "negative budget, no item is affordable"
        );
    }

    let mut remaining_calories = calorie_target;
    let mut remaining_budget = request.daily_budget;
    let mut selected_items = Vec::new();

    for item in catalog {
        if item.calories_per_serving <= remaining_calories
            && item.cost_per_serving <= remaining_budget
        {
            remaining_calories -= item.calories_per_serving;
            remaining_budget -= item.cost_per_serving;
            selected_items.push(item.clone());
        }
    }

    debug!(
        calorie_target,
        selected = selected_items.len(),
        remaining_calories,
        remaining_budget,
        "generated diet plan"
    );

    Ok(DietPlanResult {
        calorie_target,
        selected_items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diet::catalog::reference_catalog;

    fn names(result: &DietPlanResult) -> Vec<&str> {
        result.selected_items.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_calorie_target_rounding() {
        assert_eq!(calorie_target(8.0).unwrap(), 200);
        assert_eq!(calorie_target(70.3).unwrap(), 1758);
        assert_eq!(calorie_target(70.0).unwrap(), 1750);
        assert_eq!(calorie_target(0.01).unwrap(), 0);
    }

    #[test]
    fn test_invalid_weight() {
        assert!(calorie_target(0.0).unwrap_err().is_invalid_input());
        assert!(calorie_target(-70.0).unwrap_err().is_invalid_input());
        assert!(calorie_target(f64::NAN).unwrap_err().is_invalid_input());
        assert!(calorie_target(f64::INFINITY).unwrap_err().is_invalid_input());

        let err = generate_diet_plan(&DietPlanRequest::new(0.0, 100.0), &reference_catalog())
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_target_beyond_u32_rejected() {
        assert_eq!(calorie_target(1.0e8).unwrap(), 2_500_000_000);
        assert!(calorie_target(2.0e8).unwrap_err().is_invalid_input());

        let err = generate_diet_plan(&DietPlanRequest::new(2.0e8, 100.0), &reference_catalog())
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_reference_catalog_plan() {
        let result =
            generate_diet_plan(&DietPlanRequest::new(70.0, 100.0), &reference_catalog()).unwrap();
        assert_eq!(result.calorie_target, 1750);
        assert_eq!(names(&result), vec!["Almonds", "Dark Chocolate", "Blueberries"]);
        assert_eq!(result.total_cost(), 100.0);
        assert_eq!(result.total_calories(), 430);
    }

    #[test]
    fn test_small_target_and_budget() {
        // 8 kg -> 200 kcal; only Green Tea (0 kcal, 15) fits a budget of 15 before it runs out
        let result =
            generate_diet_plan(&DietPlanRequest::new(8.0, 15.0), &reference_catalog()).unwrap();
        assert_eq!(result.calorie_target, 200);
        assert_eq!(names(&result), vec!["Green Tea"]);
    }

    #[test]
    fn test_empty_selection_is_not_an_error() {
        let result =
            generate_diet_plan(&DietPlanRequest::new(1.0, 0.0), &reference_catalog()).unwrap();
        assert_eq!(result.calorie_target, 25);
        assert!(result.is_empty());
    }

    #[test]
    fn test_negative_budget_selects_nothing_costly() {
        let result =
            generate_diet_plan(&DietPlanRequest::new(70.0, -10.0), &reference_catalog()).unwrap();
        assert!(result.is_empty());

        let free = vec![FoodItem::new("w", "Water", 0, "Hydration", 0.0)];
        let result = generate_diet_plan(&DietPlanRequest::new(70.0, -10.0), &free).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_nan_budget_selects_nothing() {
        let result =
            generate_diet_plan(&DietPlanRequest::new(70.0, f64::NAN), &reference_catalog())
                .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_order_dependence() {
        let a = FoodItem::new("a", "A", 150, "", 5.0);
        let b = FoodItem::new("b", "B", 100, "", 5.0);
        let c = FoodItem::new("c", "C", 50, "", 5.0);
        let request = DietPlanRequest::new(8.0, 15.0);

        let forward = generate_diet_plan(&request, &[a.clone(), b.clone(), c.clone()]).unwrap();
        assert_eq!(names(&forward), vec!["A", "C"]);

        let reordered = generate_diet_plan(&request, &[b, c, a]).unwrap();
        assert_eq!(names(&reordered), vec!["B", "C"]);
    }

    #[test]
    fn test_greedy_skips_expensive_then_takes_later() {
        let catalog = vec![
            FoodItem::new("a", "A", 200, "", 20.0),
            FoodItem::new("b", "B", 50, "", 1000.0),
            FoodItem::new("c", "C", 100, "", 10.0),
        ];
        let result = generate_diet_plan(&DietPlanRequest::new(8.0, 15.0), &catalog).unwrap();
        assert_eq!(names(&result), vec!["C"]);
    }

    #[test]
    fn test_idempotent() {
        let request = DietPlanRequest::new(60.0, 500.0);
        let catalog = reference_catalog();
        let first = generate_diet_plan(&request, &catalog).unwrap();
        let second = generate_diet_plan(&request, &catalog).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.selected_items.len(), 12);
    }
}
