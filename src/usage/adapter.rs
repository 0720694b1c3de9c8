//! Usage report adapter
//!
//! Parses usage report JSON from a device-usage provider and converts it into
//! `UsageMetrics`.

use tracing::debug;

use crate::error::WellnessError;
use crate::usage::duration::parse_duration_minutes;
use crate::usage::types::{AppUsage, DurationValue, UsageMetrics, UsageReport};

/// Parse a usage report JSON string into a UsageReport
pub fn parse_usage_report(json: &str) -> Result<UsageReport, WellnessError> {
    serde_json::from_str(json)
        .map_err(|e| WellnessError::ParseError(format!("Failed to parse usage report: {}", e)))
}

/// Convert a UsageReport into UsageMetrics.
///
/// Duration strings that cannot be read count as zero minutes. Integer minutes
/// are passed through as-is so negative values are still rejected downstream.
pub fn report_to_metrics(report: &UsageReport) -> UsageMetrics {
    let app_usage = report
        .app_usage
        .iter()
        .map(|entry| AppUsage {
            app_name: entry.name.clone(),
            minutes: duration_to_minutes(&entry.time),
        })
        .collect::<Vec<_>>();

    let metrics = UsageMetrics {
        screen_time_minutes: duration_to_minutes(&report.screen_time),
        unlock_count: report.unlocks,
        app_usage,
        observed_on: report.observed_on,
    };

    debug!(
        screen_time_minutes = metrics.screen_time_minutes,
        unlock_count = metrics.unlock_count,
        apps = metrics.app_usage.len(),
        "converted usage report"
    );

    metrics
}

/// Parse usage report JSON straight into UsageMetrics
pub fn parse_usage_metrics(json: &str) -> Result<UsageMetrics, WellnessError> {
    let report = parse_usage_report(json)?;
    Ok(report_to_metrics(&report))
}

fn duration_to_minutes(value: &DurationValue) -> i64 {
    match value {
        DurationValue::Minutes(m) => *m,
        DurationValue::Text(text) => i64::from(parse_duration_minutes(text)),
    }
}
