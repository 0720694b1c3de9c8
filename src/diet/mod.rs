//! Diet planning
//!
//! Converts body weight and a daily budget into a calorie target and a food
//! selection from a fixed catalog.

pub mod catalog;
pub mod planner;
pub mod types;

pub use catalog::{catalog_from_json, reference_catalog};
pub use planner::{calorie_target, generate_diet_plan};
pub use types::{DietPlanRequest, DietPlanResult, FoodItem};
