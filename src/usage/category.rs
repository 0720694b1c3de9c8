//! App categorization
//!
//! Maps app names onto usage categories through a fixed lookup table.

use crate::usage::types::{AppCategory, AppUsage, CategoryTotals};

/// Apps counted as social media
const SOCIAL_APPS: &[&str] = &["Instagram", "Facebook", "TikTok"];

/// Apps counted as entertainment
const ENTERTAINMENT_APPS: &[&str] = &["YouTube", "Netflix", "Spotify"];

/// Apps counted as news
const NEWS_APPS: &[&str] = &["Google News", "CNN", "BBC"];

/// Classify an app by exact (case-sensitive) name; unknown apps are `Other`
pub fn categorize_app(app_name: &str) -> AppCategory {
    if SOCIAL_APPS.contains(&app_name) {
        AppCategory::Social
    } else if ENTERTAINMENT_APPS.contains(&app_name) {
        AppCategory::Entertainment
    } else if NEWS_APPS.contains(&app_name) {
        AppCategory::News
    } else {
        AppCategory::Other
    }
}

/// Sum per-app minutes into category totals.
///
/// Repeated app names accumulate. Categories appear in the order their first
/// app was seen.
pub fn category_totals(app_usage: &[AppUsage]) -> CategoryTotals {
    let mut totals = CategoryTotals::default();
    for usage in app_usage {
        totals.add(categorize_app(&usage.app_name), usage.minutes);
    }
    totals
}
