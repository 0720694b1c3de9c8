//! Countdown sessions for Pomodoro and guided meditation
//!
//! `Countdown` is a caller-driven state machine: the host owns the one-second
//! interval and calls `tick` on each firing. No threads or clocks live here.

use serde::{Deserialize, Serialize};

/// Length of a Pomodoro focus block (25 minutes)
pub const POMODORO_SECS: u32 = 25 * 60;

/// Countdown lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountdownState {
    Idle,
    Running,
    Paused,
    Finished,
}

/// Result of advancing a countdown by one second
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Countdown is not running; nothing changed
    Ignored,
    /// One second elapsed, time remains
    Counting,
    /// This tick reached zero
    Finished,
}

/// A resettable countdown timer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    duration_secs: u32,
    remaining_secs: u32,
    state: CountdownState,
}

impl Countdown {
    pub fn new(duration_secs: u32) -> Self {
        Self {
            duration_secs,
            remaining_secs: duration_secs,
            state: CountdownState::Idle,
        }
    }

    /// A 25 minute focus block
    pub fn pomodoro() -> Self {
        Self::new(POMODORO_SECS)
    }

    /// A countdown for the length of a guided meditation
    pub fn for_meditation(meditation: &Meditation) -> Self {
        Self::new(meditation.duration_minutes * 60)
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn is_running(&self) -> bool {
        self.state == CountdownState::Running
    }

    /// Start when idle or paused, pause when running. A finished countdown
    /// stays finished until reset.
    pub fn toggle(&mut self) -> CountdownState {
        self.state = match self.state {
            CountdownState::Idle | CountdownState::Paused if self.remaining_secs > 0 => {
                CountdownState::Running
            }
            CountdownState::Idle | CountdownState::Paused => CountdownState::Finished,
            CountdownState::Running => CountdownState::Paused,
            CountdownState::Finished => CountdownState::Finished,
        };
        self.state
    }

    /// Advance by one second
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != CountdownState::Running {
            return TickOutcome::Ignored;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.state = CountdownState::Finished;
            TickOutcome::Finished
        } else {
            TickOutcome::Counting
        }
    }

    /// Back to the full duration, stopped
    pub fn reset(&mut self) {
        self.remaining_secs = self.duration_secs;
        self.state = CountdownState::Idle;
    }

    /// Remaining time as `m:ss`
    pub fn display(&self) -> String {
        format_clock(self.remaining_secs)
    }
}

/// Format seconds as `m:ss`
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// A guided meditation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meditation {
    pub id: u32,
    pub title: String,
    pub duration_minutes: u32,
    pub steps: Vec<String>,
}

const MEDITATIONS: [(u32, &str, u32, &[&str]); 6] = [
    (
        1,
        "Morning Meditation",
        10,
        &["Sit comfortably", "Close your eyes", "Take deep breaths"],
    ),
    (
        2,
        "Relaxing Evening",
        15,
        &["Find a quiet place", "Close your eyes", "Breathe slowly"],
    ),
    (
        3,
        "Mindfulness Exercise",
        5,
        &[
            "Focus on your breath",
            "Observe your thoughts",
            "Return to breathing",
        ],
    ),
    (
        4,
        "Sleep Meditation",
        20,
        &[
            "Lie down comfortably",
            "Close your eyes",
            "Focus on each body part",
        ],
    ),
    (
        5,
        "Anxiety Soother",
        8,
        &[
            "Find a comfortable seat",
            "Place your hands on your lap",
            "Breathe in slowly for 4 seconds, hold for 4, then exhale for 4",
            "Focus on releasing tension with each exhale",
            "Continue this cycle for the session",
        ],
    ),
    (
        6,
        "Stress Relief Visualization",
        12,
        &[
            "Sit back in a comfortable position",
            "Close your eyes and take a deep breath",
            "Visualize a calming scene, like a beach or forest",
            "Imagine the sounds, smells, and feel of the environment",
            "Continue visualizing and breathing deeply",
        ],
    ),
];

/// Guided meditations in display order
pub fn meditation_catalog() -> Vec<Meditation> {
    MEDITATIONS
        .iter()
        .map(|&(id, title, duration_minutes, steps)| Meditation {
            id,
            title: title.to_string(),
            duration_minutes,
            steps: steps.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}
