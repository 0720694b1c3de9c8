//! wellness-core - Portable logic for a mobile wellness app
//!
//! The UI-independent calculations behind the app's screens, as pure functions a
//! mobile shell can call directly or through the C ABI.
//!
//! ## Modules
//!
//! - **Usage**: screen time, unlocks and per-app usage → burnout score and tier
//! - **Diet**: body weight and budget → calorie target and greedy food selection
//! - **Questionnaire**: ten 1-5 answers → emotional state
//! - **Session**: Pomodoro and meditation countdowns

pub mod config;
pub mod diet;
pub mod error;
pub mod pipeline;
pub mod questionnaire;
pub mod report;
pub mod session;
pub mod usage;

// FFI bindings for C interop (always available for cdylib/staticlib builds)
pub mod ffi;

pub use config::WellnessConfig;
pub use diet::{generate_diet_plan, DietPlanRequest, DietPlanResult, FoodItem};
pub use error::WellnessError;
pub use pipeline::{burnout_from_json, diet_plan_from_json, questionnaire_from_json};
pub use usage::{compute_burnout, BurnoutResult, BurnoutTier, UsageMetrics};

/// Crate version embedded in all reports
pub const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for reports
pub const PRODUCER_NAME: &str = "wellness-core";
