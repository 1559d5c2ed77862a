use chrono::{Local, NaiveDate};

use crate::analysis::{distinct_exercises, format_logged_message, format_plan};
use crate::catalog::WorkoutSelection;
use crate::workout_log::WorkoutLog;

/// User facing outcome of an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Warning(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Success(msg) | Notice::Warning(msg) => msg,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// None of the selected exercises is present in the log.
    EmptySelection,
}

impl std::fmt::Display for PlanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanError::EmptySelection => write!(f, "Please select at least one workout."),
        }
    }
}

impl std::error::Error for PlanError {}

impl From<PlanError> for Notice {
    fn from(err: PlanError) -> Self {
        Notice::Warning(err.to_string())
    }
}

/// Everything the user entered during this run of the program.
///
/// Nothing here outlives the process.
#[derive(Debug)]
pub struct Session {
    workouts: WorkoutLog,
    goal: Option<String>,
    weekly_plan: Option<Vec<String>>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            workouts: WorkoutLog::new(),
            goal: None,
            weekly_plan: None,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn workouts(&self) -> &WorkoutLog {
        &self.workouts
    }

    pub fn goal(&self) -> Option<&str> {
        self.goal.as_deref()
    }

    pub fn weekly_plan(&self) -> Option<&[String]> {
        self.weekly_plan.as_deref()
    }

    /// Append one workout dated `date`.
    pub fn log_workout(&mut self, selection: WorkoutSelection, date: NaiveDate) -> Notice {
        let record = selection.to_record(date);
        self.workouts.append(record);
        let msg = format_logged_message(
            record.exercise.name(),
            record.duration_minutes,
            record.reps,
            record.weight_lbs,
        );
        log::info!("{msg}");
        Notice::Success(msg)
    }

    /// Append one workout dated today in local time.
    pub fn log_workout_today(&mut self, selection: WorkoutSelection) -> Notice {
        self.log_workout(selection, Local::now().date_naive())
    }

    /// Overwrite the goal. An empty string is ignored and yields no notice.
    pub fn set_goal(&mut self, goal: &str) -> Option<Notice> {
        if goal.is_empty() {
            return None;
        }
        self.goal = Some(goal.to_string());
        log::info!("Goal set: {goal}");
        Some(Notice::Success(format!("Goal set: {goal}")))
    }

    /// Overwrite the weekly plan with the selected exercise names.
    ///
    /// Names that are not present in the log are dropped. If nothing is left
    /// the current plan is kept and [`PlanError::EmptySelection`] is returned.
    pub fn save_weekly_plan(&mut self, selection: &[String]) -> Result<Notice, PlanError> {
        let available = distinct_exercises(&self.workouts);
        let plan: Vec<String> = selection
            .iter()
            .filter(|name| available.contains(*name))
            .cloned()
            .collect();
        if plan.len() != selection.len() {
            log::warn!(
                "Ignoring {} planned exercises not present in the log",
                selection.len() - plan.len()
            );
        }
        if plan.is_empty() {
            log::warn!("Weekly plan not saved: empty selection");
            return Err(PlanError::EmptySelection);
        }

        let msg = format!("Weekly plan saved: {}", format_plan(&plan));
        log::info!("{msg}");
        self.weekly_plan = Some(plan);
        Ok(Notice::Success(msg))
    }
}
