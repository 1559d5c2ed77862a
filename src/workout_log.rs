use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::Exercise;

/// A single logged workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    pub date: NaiveDate,
    pub exercise: Exercise,
    pub duration_minutes: u32,
    pub reps: u32,
    pub weight_lbs: u32,
}

/// Append-only, insertion-ordered list of workouts for the running session.
///
/// There is intentionally no way to remove or edit a record once it has been
/// appended.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WorkoutLog {
    records: Vec<WorkoutRecord>,
}

impl WorkoutLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: WorkoutRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[WorkoutRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WorkoutRecord> {
        self.records.iter()
    }
}

impl FromIterator<WorkoutRecord> for WorkoutLog {
    fn from_iter<I: IntoIterator<Item = WorkoutRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(exercise: Exercise, duration: u32) -> WorkoutRecord {
        WorkoutRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            exercise,
            duration_minutes: duration,
            reps: 10,
            weight_lbs: 0,
        }
    }

    #[test]
    fn new_log_is_empty() {
        let log = WorkoutLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.records().is_empty());
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut log = WorkoutLog::new();
        log.append(record(Exercise::Yoga, 60));
        log.append(record(Exercise::Running, 30));
        log.append(record(Exercise::Yoga, 15));

        assert_eq!(log.len(), 3);
        let order: Vec<Exercise> = log.iter().map(|r| r.exercise).collect();
        assert_eq!(
            order,
            vec![Exercise::Yoga, Exercise::Running, Exercise::Yoga]
        );
        assert_eq!(log.records()[2].duration_minutes, 15);
    }

    #[test]
    fn collect_into_log() {
        let log: WorkoutLog = vec![record(Exercise::Swimming, 45)].into_iter().collect();
        assert_eq!(log.records(), &[record(Exercise::Swimming, 45)]);
    }
}
