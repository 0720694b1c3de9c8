//! Burnout score derivation
//!
//! Computes a weighted burnout score from device usage relative to fixed healthy
//! ceilings, then buckets it into a risk tier.

use tracing::debug;

use crate::error::WellnessError;
use crate::usage::category::category_totals;
use crate::usage::types::{
    AppCategory, BurnoutComponents, BurnoutResult, BurnoutTier, UsageMetrics,
};

/// Healthy daily screen time ceiling (6 hours)
pub const SCREEN_TIME_CEILING_MIN: f64 = 360.0;

/// Healthy daily unlock ceiling
pub const UNLOCK_CEILING: f64 = 80.0;

/// Healthy daily social media ceiling (2 hours)
pub const SOCIAL_CEILING_MIN: f64 = 120.0;

/// Healthy daily entertainment ceiling (1.5 hours)
pub const ENTERTAINMENT_CEILING_MIN: f64 = 90.0;

pub const SCREEN_TIME_WEIGHT: f64 = 0.4;
pub const UNLOCK_WEIGHT: f64 = 0.3;
pub const SOCIAL_WEIGHT: f64 = 0.2;
pub const ENTERTAINMENT_WEIGHT: f64 = 0.1;

/// Scores at or above this are `High`
pub const HIGH_THRESHOLD: f64 = 0.7;

/// Scores at or above this (and below `HIGH_THRESHOLD`) are `Moderate`
pub const MODERATE_THRESHOLD: f64 = 0.4;

const HIGH_BURNOUT_TIPS: [&str; 5] = [
    "Take regular short breaks while working.",
    "Limit screen time, especially before bedtime.",
    "Engage in physical activities like a short walk.",
    "Disconnect from social media for a few hours daily.",
    "Practice mindfulness or meditation to reduce stress.",
];

impl BurnoutTier {
    /// Tier for a clamped score. Boundaries resolve to the higher tier.
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_THRESHOLD {
            BurnoutTier::High
        } else if score >= MODERATE_THRESHOLD {
            BurnoutTier::Moderate
        } else {
            BurnoutTier::Low
        }
    }
}

impl BurnoutComponents {
    /// Weighted sum of the ratios, unclamped.
    ///
    /// Terms are added smallest weight first so that all-ones ratios sum to
    /// exactly 1.0.
    pub fn weighted_sum(&self) -> f64 {
        ENTERTAINMENT_WEIGHT * self.entertainment_ratio
            + SOCIAL_WEIGHT * self.social_ratio
            + UNLOCK_WEIGHT * self.unlock_ratio
            + SCREEN_TIME_WEIGHT * self.screen_time_ratio
    }
}

/// Compute the burnout score and tier for a set of usage metrics.
///
/// Fails with `InvalidInput` when screen time, unlock count or any app's minutes
/// are negative.
pub fn compute_burnout(metrics: &UsageMetrics) -> Result<BurnoutResult, WellnessError> {
    validate_metrics(metrics)?;

    let totals = category_totals(&metrics.app_usage);

    let components = BurnoutComponents {
        screen_time_ratio: metrics.screen_time_minutes as f64 / SCREEN_TIME_CEILING_MIN,
        unlock_ratio: metrics.unlock_count as f64 / UNLOCK_CEILING,
        social_ratio: totals.get(AppCategory::Social) as f64 / SOCIAL_CEILING_MIN,
        entertainment_ratio: totals.get(AppCategory::Entertainment) as f64
            / ENTERTAINMENT_CEILING_MIN,
    };

    let score = components.weighted_sum().clamp(0.0, 1.0);
    let tier = BurnoutTier::from_score(score);

    debug!(score, ?tier, ?components, "computed burnout score");

    Ok(BurnoutResult {
        score,
        tier,
        components,
        category_totals: totals,
    })
}

/// Tips shown to reduce burnout; only `High` gets any
pub fn burnout_tips(tier: BurnoutTier) -> &'static [&'static str] {
    match tier {
        BurnoutTier::High => &HIGH_BURNOUT_TIPS,
        BurnoutTier::Moderate | BurnoutTier::Low => &[],
    }
}

fn validate_metrics(metrics: &UsageMetrics) -> Result<(), WellnessError> {
    if metrics.screen_time_minutes < 0 {
        return Err(WellnessError::invalid(format!(
            "screen time must be non-negative, got {}",
            metrics.screen_time_minutes
        )));
    }
    if metrics.unlock_count < 0 {
        return Err(WellnessError::invalid(format!(
            "unlock count must be non-negative, got {}",
            metrics.unlock_count
        )));
    }
    if let Some(app) = metrics.app_usage.iter().find(|a| a.minutes < 0) {
        return Err(WellnessError::invalid(format!(
            "usage minutes for {} must be non-negative, got {}",
            app.app_name, app.minutes
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usage::types::AppUsage;

    fn metrics(screen: i64, unlocks: i64, apps: Vec<AppUsage>) -> UsageMetrics {
        UsageMetrics {
            screen_time_minutes: screen,
            unlock_count: unlocks,
            app_usage: apps,
            observed_on: None,
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        assert_eq!(
            ENTERTAINMENT_WEIGHT + SOCIAL_WEIGHT + UNLOCK_WEIGHT + SCREEN_TIME_WEIGHT,
            1.0
        );

        let ones = BurnoutComponents {
            screen_time_ratio: 1.0,
            unlock_ratio: 1.0,
            social_ratio: 1.0,
            entertainment_ratio: 1.0,
        };
        assert_eq!(ones.weighted_sum(), 1.0);
    }

    #[test]
    fn test_all_ceilings_hit_scores_one() {
        let m = metrics(
            360,
            80,
            vec![AppUsage::new("Instagram", 120), AppUsage::new("Netflix", 90)],
        );
        let result = compute_burnout(&m).unwrap();
        assert_eq!(result.score, 1.0);
        assert_eq!(result.tier, BurnoutTier::High);
    }

    #[test]
    fn test_sample_dashboard_values() {
        // 6h 45m screen time, 90 unlocks, Instagram 1h 45m, WhatsApp 2h 15m, YouTube 1h 30m
        let m = metrics(
            405,
            90,
            vec![
                AppUsage::new("Instagram", 105),
                AppUsage::new("WhatsApp", 135),
                AppUsage::new("YouTube", 90),
            ],
        );
        let result = compute_burnout(&m).unwrap();

        assert!((result.components.screen_time_ratio - 1.125).abs() < 1e-12);
        assert!((result.components.unlock_ratio - 1.125).abs() < 1e-12);
        assert!((result.components.social_ratio - 0.875).abs() < 1e-12);
        assert!((result.components.entertainment_ratio - 1.0).abs() < 1e-12);
        // 0.45 + 0.3375 + 0.175 + 0.1 = 1.0625 -> clamped
        assert_eq!(result.score, 1.0);
        assert_eq!(result.percent(), 100);
    }

    #[test]
    fn test_clamp_large_values() {
        let m = metrics(10_000, 5_000, vec![AppUsage::new("TikTok", 10_000)]);
        let result = compute_burnout(&m).unwrap();
        assert_eq!(result.score, 1.0);
        assert!(result.components.screen_time_ratio > 1.0);
    }

    #[test]
    fn test_zero_usage() {
        let result = compute_burnout(&metrics(0, 0, vec![])).unwrap();
        assert_eq!(result.score, 0.0);
        assert_eq!(result.tier, BurnoutTier::Low);
        assert!(result.category_totals.is_empty());
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(BurnoutTier::from_score(0.7), BurnoutTier::High);
        assert_eq!(BurnoutTier::from_score(0.699_999_999), BurnoutTier::Moderate);
        assert_eq!(BurnoutTier::from_score(0.4), BurnoutTier::Moderate);
        assert_eq!(BurnoutTier::from_score(0.399_999_9), BurnoutTier::Low);
        assert_eq!(BurnoutTier::from_score(0.0), BurnoutTier::Low);
        assert_eq!(BurnoutTier::from_score(1.0), BurnoutTier::High);
    }

    #[test]
    fn test_exact_boundary_scores_from_metrics() {
        // Screen time at ceiling only: 0.4 * 1.0
        let moderate = compute_burnout(&metrics(360, 0, vec![])).unwrap();
        assert_eq!(moderate.score, 0.4);
        assert_eq!(moderate.tier, BurnoutTier::Moderate);

        // Screen time and unlocks at ceiling: 0.3 + 0.4
        let high = compute_burnout(&metrics(360, 80, vec![])).unwrap();
        assert_eq!(high.score, 0.7);
        assert_eq!(high.tier, BurnoutTier::High);
    }

    #[test]
    fn test_huge_app_minutes_clamp_without_overflow() {
        let m = metrics(
            0,
            0,
            vec![AppUsage::new("Instagram", i64::MAX), AppUsage::new("Instagram", 1)],
        );
        let result = compute_burnout(&m).unwrap();
        assert_eq!(result.score, 1.0);
        assert_eq!(result.tier, BurnoutTier::High);
        assert!(result.components.social_ratio > 0.0);
    }

    #[test]
    fn test_unknown_apps_do_not_contribute() {
        let m = metrics(0, 0, vec![AppUsage::new("MyCustomApp", 500)]);
        let result = compute_burnout(&m).unwrap();
        assert_eq!(result.components.social_ratio, 0.0);
        assert_eq!(result.components.entertainment_ratio, 0.0);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.category_totals.get(AppCategory::Other), 500);
    }

    #[test]
    fn test_negative_inputs_rejected() {
        assert!(compute_burnout(&metrics(-1, 0, vec![]))
            .unwrap_err()
            .is_invalid_input());
        assert!(compute_burnout(&metrics(0, -1, vec![]))
            .unwrap_err()
            .is_invalid_input());
        assert!(
            compute_burnout(&metrics(0, 0, vec![AppUsage::new("YouTube", -3)]))
                .unwrap_err()
                .is_invalid_input()
        );
    }

    #[test]
    fn test_input_not_mutated_and_idempotent() {
        let m = metrics(200, 40, vec![AppUsage::new("Facebook", 30)]);
        let before = m.clone();
        let a = compute_burnout(&m).unwrap();
        let b = compute_burnout(&m).unwrap();
        assert_eq!(m, before);
        assert_eq!(a.score.to_bits(), b.score.to_bits());
        assert_eq!(a, b);
    }

    #[test]
    fn test_tips_only_for_high() {
        assert_eq!(burnout_tips(BurnoutTier::High).len(), 5);
        assert!(burnout_tips(BurnoutTier::Moderate).is_empty());
        assert!(burnout_tips(BurnoutTier::Low).is_empty());
    }
}
