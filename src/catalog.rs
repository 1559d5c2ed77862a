use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::workout_log::WorkoutRecord;

/// Exercises offered by the logging form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Exercise {
    Squats,
    Deadlifts,
    BenchPress,
    Running,
    Cycling,
    Yoga,
    Swimming,
    Other,
}

pub const EXERCISE_OPTIONS: [Exercise; 8] = [
    Exercise::Squats,
    Exercise::Deadlifts,
    Exercise::BenchPress,
    Exercise::Running,
    Exercise::Cycling,
    Exercise::Yoga,
    Exercise::Swimming,
    Exercise::Other,
];

/// Duration choices in minutes.
pub const DURATION_OPTIONS: [u32; 5] = [15, 30, 45, 60, 90];

/// Repetition choices.
pub const REP_OPTIONS: [u32; 4] = [5, 10, 15, 20];

/// Weight choices in pounds.
pub const WEIGHT_OPTIONS: [u32; 11] = [0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100];

impl Exercise {
    /// Display name, also used as the grouping key in summaries.
    pub fn name(self) -> &'static str {
        match self {
            Exercise::Squats => "Squats",
            Exercise::Deadlifts => "Deadlifts",
            Exercise::BenchPress => "Bench Press",
            Exercise::Running => "Running",
            Exercise::Cycling => "Cycling",
            Exercise::Yoga => "Yoga",
            Exercise::Swimming => "Swimming",
            Exercise::Other => "Other",
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current values of the logging form dropdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutSelection {
    pub exercise: Exercise,
    pub duration_minutes: u32,
    pub reps: u32,
    pub weight_lbs: u32,
}

impl Default for WorkoutSelection {
    /// Each dropdown starts on its first option.
    fn default() -> Self {
        Self {
            exercise: EXERCISE_OPTIONS[0],
            duration_minutes: DURATION_OPTIONS[0],
            reps: REP_OPTIONS[0],
            weight_lbs: WEIGHT_OPTIONS[0],
        }
    }
}

impl WorkoutSelection {
    pub fn to_record(self, date: NaiveDate) -> WorkoutRecord {
        WorkoutRecord {
            date,
            exercise: self.exercise,
            duration_minutes: self.duration_minutes,
            reps: self.reps,
            weight_lbs: self.weight_lbs,
        }
    }
}
