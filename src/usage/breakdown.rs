//! Per-category usage breakdown for charts

use serde::Serialize;

use crate::usage::duration::format_duration;
use crate::usage::types::{AppCategory, CategoryTotals};

/// One slice of the category usage chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySlice {
    pub category: AppCategory,
    pub minutes: i64,
    /// Human-readable duration, e.g. `"1h 45m"`
    pub label: String,
    /// Fraction of all categorized minutes (0 when there is no usage)
    pub share: f64,
    /// Hex color for the slice
    pub color: &'static str,
}

/// Chart color for a category; fixed so repeated renders match
pub fn category_color(category: AppCategory) -> &'static str {
    match category {
        AppCategory::Social => "#E4572E",
        AppCategory::Entertainment => "#4C6EF5",
        AppCategory::News => "#F4A261",
        AppCategory::Other => "#7F7F7F",
    }
}

/// Build chart slices from category totals, keeping their order
pub fn category_breakdown(totals: &CategoryTotals) -> Vec<CategorySlice> {
    let total = totals.total_minutes();

    totals
        .iter()
        .map(|(category, minutes)| CategorySlice {
            category,
            minutes,
            label: format_duration(minutes),
            share: if total > 0 {
                minutes as f64 / total as f64
            } else {
                0.0
            },
            color: category_color(category),
        })
        .collect()
}
