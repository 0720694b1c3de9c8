//! Report encoder
//!
//! Wraps burnout, diet and questionnaire results into versioned JSON reports for
//! the host application. Reports carry no timestamps or random identifiers, so
//! identical inputs encode to identical bytes.

use chrono::NaiveDate;
use serde::Serialize;

use crate::diet::types::{DietPlanResult, FoodItem};
use crate::error::WellnessError;
use crate::questionnaire::{EmotionalState, QuestionnaireResult};
use crate::usage::breakdown::{category_breakdown, CategorySlice};
use crate::usage::burnout::burnout_tips;
use crate::usage::types::{BurnoutComponents, BurnoutResult, BurnoutTier};
use crate::{CRATE_VERSION, PRODUCER_NAME};

/// Current report schema version
pub const REPORT_VERSION: &str = "1.0.0";

/// Producer metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportProducer {
    pub name: String,
    pub version: String,
}

/// Burnout monitor report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BurnoutReport {
    pub report_version: String,
    pub producer: ReportProducer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_on: Option<NaiveDate>,
    pub score: f64,
    /// Score as a whole percentage
    pub percent: u8,
    pub tier: BurnoutTier,
    pub components: BurnoutComponents,
    pub categories: Vec<CategorySlice>,
    pub tips: Vec<String>,
}

/// Diet plan report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DietReport {
    pub report_version: String,
    pub producer: ReportProducer,
    pub calorie_target: u32,
    pub total_calories: u32,
    pub total_cost: f64,
    pub items: Vec<FoodItem>,
}

/// Questionnaire report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionnaireReport {
    pub report_version: String,
    pub producer: ReportProducer,
    pub total: u32,
    pub state: EmotionalState,
    pub label: String,
}

/// Report encoder
#[derive(Debug, Clone, Default)]
pub struct ReportEncoder {
    pretty: bool,
}

impl ReportEncoder {
    /// Create an encoder producing compact JSON
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Create an encoder producing pretty-printed JSON
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    fn producer(&self) -> ReportProducer {
        ReportProducer {
            name: PRODUCER_NAME.to_string(),
            version: CRATE_VERSION.to_string(),
        }
    }

    /// Build a burnout report
    pub fn burnout(&self, result: &BurnoutResult, observed_on: Option<NaiveDate>) -> BurnoutReport {
        BurnoutReport {
            report_version: REPORT_VERSION.to_string(),
            producer: self.producer(),
            observed_on,
            score: result.score,
            percent: result.percent(),
            tier: result.tier,
            components: result.components,
            categories: category_breakdown(&result.category_totals),
            tips: burnout_tips(result.tier)
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }

    /// Build a diet plan report
    pub fn diet(&self, result: &DietPlanResult) -> DietReport {
        DietReport {
            report_version: REPORT_VERSION.to_string(),
            producer: self.producer(),
            calorie_target: result.calorie_target,
            total_calories: result.total_calories(),
            total_cost: result.total_cost(),
            items: result.selected_items.clone(),
        }
    }

    /// Build a questionnaire report
    pub fn questionnaire(&self, result: &QuestionnaireResult) -> QuestionnaireReport {
        QuestionnaireReport {
            report_version: REPORT_VERSION.to_string(),
            producer: self.producer(),
            total: result.total,
            state: result.state,
            label: result.state.label().to_string(),
        }
    }

    /// Serialize any report with this encoder's formatting
    pub fn to_json<T: Serialize>(&self, report: &T) -> Result<String, WellnessError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}
