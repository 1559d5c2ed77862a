// Module for summarizing logged workouts
use crate::workout_log::WorkoutLog;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Numeric fields of every record sharing one exercise name, summed.
///
/// Reps and weight are summed alongside duration even though only the
/// duration is charted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseTotals {
    pub duration_minutes: u32,
    pub reps: u32,
    pub weight_lbs: u32,
}

/// Group the log by exercise name and sum every numeric field per group.
///
/// Returns `None` for an empty log so callers can skip rendering. Groups are
/// keyed and ordered by exercise name.
pub fn aggregate(log: &WorkoutLog) -> Option<BTreeMap<String, ExerciseTotals>> {
    if log.is_empty() {
        return None;
    }

    let summary = log
        .iter()
        .fold(BTreeMap::new(), |mut map: BTreeMap<String, ExerciseTotals>, r| {
            let totals = map.entry(r.exercise.name().to_string()).or_default();
            totals.duration_minutes += r.duration_minutes;
            totals.reps += r.reps;
            totals.weight_lbs += r.weight_lbs;
            map
        });

    log::debug!(
        "Aggregated {} records into {} exercises",
        log.len(),
        summary.len()
    );
    Some(summary)
}

/// Return each exercise name present in the log once, in order of first
/// appearance.
pub fn distinct_exercises(log: &WorkoutLog) -> Vec<String> {
    let mut seen = HashSet::new();
    log.iter()
        .map(|r| r.exercise.name())
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}

/// Message shown after a workout has been appended.
pub fn format_logged_message(
    exercise: &str,
    duration_minutes: u32,
    reps: u32,
    weight_lbs: u32,
) -> String {
    format!(
        "Workout logged: {} for {} minutes, {} reps at {} lbs.",
        exercise, duration_minutes, reps, weight_lbs
    )
}

/// Comma-joined list of planned exercises.
pub fn format_plan(plan: &[String]) -> String {
    plan.join(", ")
}
