//! Mood questionnaire scoring
//!
//! Ten self-assessment questions answered on a 1-5 scale. The answers are summed
//! and the total mapped to an emotional state.

use serde::{Deserialize, Serialize};

use crate::error::WellnessError;

/// Questions in the order they are asked
pub const QUESTIONS: [&str; 10] = [
    "How often do you feel happy?",
    "Do you often feel sad?",
    "How is your sleep quality?",
    "Do you feel anxious frequently?",
    "Do you find yourself easily irritated?",
    "How often do you socialize?",
    "Do you enjoy your daily activities?",
    "Do you feel hopeful about the future?",
    "Do you feel mentally exhausted?",
    "How often do you feel stressed?",
];

pub const MIN_ANSWER: u8 = 1;
pub const MAX_ANSWER: u8 = 5;

/// Answer preselected for every question
pub const DEFAULT_ANSWER: u8 = 3;

/// Emotional state derived from the questionnaire total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmotionalState {
    Happy,
    Content,
    Anxious,
    Sad,
    Depressed,
}

impl EmotionalState {
    /// Map a summed score onto a state; thresholds are inclusive lower bounds
    pub fn from_total(total: u32) -> Self {
        match total {
            t if t >= 40 => EmotionalState::Happy,
            t if t >= 30 => EmotionalState::Content,
            t if t >= 20 => EmotionalState::Anxious,
            t if t >= 10 => EmotionalState::Sad,
            _ => EmotionalState::Depressed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmotionalState::Happy => "Happy",
            EmotionalState::Content => "Content",
            EmotionalState::Anxious => "Anxious",
            EmotionalState::Sad => "Sad",
            EmotionalState::Depressed => "Depressed",
        }
    }
}

/// Scored questionnaire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireResult {
    pub total: u32,
    pub state: EmotionalState,
}

/// Answers for a fresh questionnaire
pub fn default_responses() -> [u8; 10] {
    [DEFAULT_ANSWER; 10]
}

/// Score a complete set of answers.
///
/// Requires one answer per question, each within `MIN_ANSWER..=MAX_ANSWER`.
pub fn score_responses(responses: &[u8]) -> Result<QuestionnaireResult, WellnessError> {
    if responses.len() != QUESTIONS.len() {
        return Err(WellnessError::invalid(format!(
            "expected {} answers, got {}",
            QUESTIONS.len(),
            responses.len()
        )));
    }
    if let Some((index, answer)) = responses
        .iter()
        .enumerate()
        .find(|(_, a)| !(MIN_ANSWER..=MAX_ANSWER).contains(*a))
    {
        return Err(WellnessError::invalid(format!(
            "answer {} must be between {} and {}, got {}",
            index + 1,
            MIN_ANSWER,
            MAX_ANSWER,
            answer
        )));
    }

    let total: u32 = responses.iter().map(|&a| u32::from(a)).sum();
    Ok(QuestionnaireResult {
        total,
        state: EmotionalState::from_total(total),
    })
}
