//! Device usage and burnout scoring
//!
//! Turns screen time, unlock counts and per-app usage into a burnout score and
//! risk tier.
//!
//! Pipeline: Usage report JSON → Adapter → Category totals → Burnout score → Report

pub mod adapter;
pub mod breakdown;
pub mod burnout;
pub mod category;
pub mod duration;
pub mod types;

pub use adapter::{parse_usage_metrics, parse_usage_report, report_to_metrics};
pub use breakdown::{category_breakdown, CategorySlice};
pub use burnout::{burnout_tips, compute_burnout};
pub use category::{categorize_app, category_totals};
pub use duration::{format_duration, parse_duration_minutes};
pub use types::{
    AppCategory, AppUsage, AppUsageEntry, BurnoutComponents, BurnoutResult, BurnoutTier,
    CategoryTotals, DurationValue, UsageMetrics, UsageReport,
};
