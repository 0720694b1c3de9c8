//! Device usage data types
//!
//! This module defines the usage metrics consumed by the burnout engine and the
//! results it produces.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// App category used to bucket per-app usage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppCategory {
    Social,
    Entertainment,
    News,
    Other,
}

impl AppCategory {
    /// All categories in display order
    pub const ALL: [AppCategory; 4] = [
        AppCategory::Social,
        AppCategory::Entertainment,
        AppCategory::News,
        AppCategory::Other,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            AppCategory::Social => "Social",
            AppCategory::Entertainment => "Entertainment",
            AppCategory::News => "News",
            AppCategory::Other => "Other",
        }
    }
}

/// Minutes spent in a single app during the observed period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppUsage {
    /// App name as reported by the device (matched case-sensitively)
    pub app_name: String,
    /// Minutes of usage
    pub minutes: i64,
}

impl AppUsage {
    pub fn new(app_name: impl Into<String>, minutes: i64) -> Self {
        Self {
            app_name: app_name.into(),
            minutes,
        }
    }
}

/// Raw usage metrics for one observed period (normally a day).
///
/// Counters are signed so that negative values from a caller can be rejected
/// instead of silently wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageMetrics {
    /// Total minutes of device usage
    pub screen_time_minutes: i64,
    /// Number of device unlocks
    pub unlock_count: i64,
    /// Per-app usage, in reported order
    #[serde(default)]
    pub app_usage: Vec<AppUsage>,
    /// Day the metrics describe, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_on: Option<NaiveDate>,
}

/// Summed minutes per category, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotals {
    entries: Vec<(AppCategory, i64)>,
}

impl CategoryTotals {
    /// Add minutes to a category, inserting it at the end if not yet present.
    ///
    /// Totals saturate at `i64::MAX`.
    pub fn add(&mut self, category: AppCategory, minutes: i64) {
        match self.entries.iter_mut().find(|(c, _)| *c == category) {
            Some((_, total)) => *total = total.saturating_add(minutes),
            None => self.entries.push((category, minutes)),
        }
    }

    /// Minutes for a category (0 when the category never appeared)
    pub fn get(&self, category: AppCategory) -> i64 {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, m)| *m)
            .unwrap_or(0)
    }

    /// Whether the category received at least one entry
    pub fn contains(&self, category: AppCategory) -> bool {
        self.entries.iter().any(|(c, _)| *c == category)
    }

    /// Iterate `(category, minutes)` in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (AppCategory, i64)> + '_ {
        self.entries.iter().copied()
    }

    /// Sum across all categories, saturating at `i64::MAX`
    pub fn total_minutes(&self) -> i64 {
        self.entries
            .iter()
            .fold(0i64, |acc, (_, m)| acc.saturating_add(*m))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Coarse burnout risk label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BurnoutTier {
    Low,
    Moderate,
    High,
}

/// The four usage ratios feeding the burnout score, before weighting.
///
/// Each ratio is usage relative to its healthy ceiling and may exceed 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BurnoutComponents {
    pub screen_time_ratio: f64,
    pub unlock_ratio: f64,
    pub social_ratio: f64,
    pub entertainment_ratio: f64,
}

/// Burnout score and tier derived from one set of usage metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurnoutResult {
    /// Weighted score clamped to [0, 1]
    pub score: f64,
    /// Risk tier
    pub tier: BurnoutTier,
    /// Unweighted ratios
    pub components: BurnoutComponents,
    /// Category totals the ratios were computed from
    pub category_totals: CategoryTotals,
}

impl BurnoutResult {
    /// Score as a whole percentage, as shown on the burnout monitor
    pub fn percent(&self) -> u8 {
        (self.score * 100.0).round() as u8
    }
}

/// Duration as reported by the device: integer minutes or a `"6h 45m"` string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Minutes(i64),
    Text(String),
}

/// One app entry in a raw usage report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppUsageEntry {
    /// App name
    #[serde(alias = "app_name")]
    pub name: String,
    /// Time spent in the app
    #[serde(alias = "minutes")]
    pub time: DurationValue,
}

/// Raw usage report as produced by a device-usage provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageReport {
    /// Total screen time
    #[serde(alias = "screen_time_minutes")]
    pub screen_time: DurationValue,
    /// Number of unlocks
    #[serde(alias = "unlock_count")]
    pub unlocks: i64,
    /// Per-app usage
    #[serde(default)]
    pub app_usage: Vec<AppUsageEntry>,
    /// Day the report covers
    #[serde(default)]
    pub observed_on: Option<NaiveDate>,
}
