//! JSON pipeline
//!
//! String-in, string-out entry points for hosts that talk JSON (FFI, CLI).

use serde::Deserialize;

use crate::diet::catalog::reference_catalog;
use crate::diet::planner::generate_diet_plan;
use crate::diet::types::{DietPlanRequest, FoodItem};
use crate::error::WellnessError;
use crate::questionnaire::score_responses;
use crate::report::ReportEncoder;
use crate::usage::adapter::parse_usage_metrics;
use crate::usage::burnout::compute_burnout;

/// Questionnaire answers payload
#[derive(Debug, Deserialize)]
struct QuestionnairePayload {
    responses: Vec<u8>,
}

/// Convert usage report JSON into a burnout report JSON.
///
/// # Example
/// ```
/// let json = r#"{ "screen_time": "6h 45m", "unlocks": 90, "app_usage": [] }"#;
/// let report = wellness_core::burnout_from_json(json).unwrap();
/// assert!(report.contains("\"tier\""));
/// ```
pub fn burnout_from_json(usage_json: &str) -> Result<String, WellnessError> {
    // Stage 1: Parse report and convert to metrics
    let metrics = parse_usage_metrics(usage_json)?;

    // Stage 2: Score
    let result = compute_burnout(&metrics)?;

    // Stage 3: Encode
    let encoder = ReportEncoder::new();
    encoder.to_json(&encoder.burnout(&result, metrics.observed_on))
}

/// Convert a diet plan request JSON into a diet report JSON.
///
/// Uses the reference catalog when `catalog` is `None`.
pub fn diet_plan_from_json(
    request_json: &str,
    catalog: Option<&[FoodItem]>,
) -> Result<String, WellnessError> {
    let request: DietPlanRequest = serde_json::from_str(request_json)
        .map_err(|e| WellnessError::ParseError(format!("Failed to parse diet request: {}", e)))?;

    let result = match catalog {
        Some(items) => generate_diet_plan(&request, items)?,
        None => generate_diet_plan(&request, &reference_catalog())?,
    };

    let encoder = ReportEncoder::new();
    encoder.to_json(&encoder.diet(&result))
}

/// Score questionnaire answers given as `{ "responses": [..] }`
pub fn questionnaire_from_json(answers_json: &str) -> Result<String, WellnessError> {
    let payload: QuestionnairePayload = serde_json::from_str(answers_json).map_err(|e| {
        WellnessError::ParseError(format!("Failed to parse questionnaire answers: {}", e))
    })?;

    let result = score_responses(&payload.responses)?;

    let encoder = ReportEncoder::new();
    encoder.to_json(&encoder.questionnaire(&result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_burnout_from_json() {
        let json = r#"{
            "screen_time": "6h 0m",
            "unlocks": 0,
            "app_usage": [{ "name": "MyCustomApp", "time": "3h 0m" }]
        }"#;
        let out: Value = serde_json::from_str(&burnout_from_json(json).unwrap()).unwrap();

        assert_eq!(out["score"], 0.4);
        assert_eq!(out["tier"], "Moderate");
        assert_eq!(out["percent"], 40);
        assert_eq!(out["categories"][0]["category"], "Other");
        assert_eq!(out["categories"][0]["label"], "3h 0m");
    }

    #[test]
    fn test_burnout_rejects_negative_unlocks() {
        let json = r#"{ "screen_time": 10, "unlocks": -1 }"#;
        assert!(burnout_from_json(json).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_diet_plan_from_json_reference_catalog() {
        let out: Value = serde_json::from_str(
            &diet_plan_from_json(r#"{ "weight": 70, "budget": 100 }"#, None).unwrap(),
        )
        .unwrap();
        assert_eq!(out["calorie_target"], 1750);
        assert_eq!(out["items"][0]["name"], "Almonds");
        assert_eq!(out["items"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_diet_plan_from_json_custom_catalog() {
        let catalog = vec![FoodItem::new("x", "Rice", 300, "Energy", 4.0)];
        let request = r#"{ "body_weight_kg": 60.0, "daily_budget": 10.0 }"#;
        let json = diet_plan_from_json(request, Some(catalog.as_slice())).unwrap();
        let out: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(out["items"][0]["name"], "Rice");
        assert_eq!(out["total_cost"], 4.0);
    }

    #[test]
    fn test_diet_plan_from_json_errors() {
        let err = diet_plan_from_json("nope", None).unwrap_err();
        assert!(matches!(err, WellnessError::ParseError(_)));

        let err = diet_plan_from_json(r#"{ "weight": 0, "budget": 10 }"#, None).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_questionnaire_from_json() {
        let out: Value = serde_json::from_str(
            &questionnaire_from_json(r#"{ "responses": [4,4,4,4,4,4,4,4,4,4] }"#).unwrap(),
        )
        .unwrap();
        assert_eq!(out["total"], 40);
        assert_eq!(out["state"], "Happy");
    }
}
