use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::paging::{FieldSet, Record};

/// One exercise performed within a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSet {
    pub exercise_id: i64,
    pub sets: u32,
    pub reps: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// A logged training session
///
/// `sets` is a nested collection and cannot be sorted or filtered on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub sets: Vec<WorkoutSet>,
}

impl Workout {
    pub fn new(id: i64, user_id: impl Into<String>, name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id,
            user_id: user_id.into(),
            name: name.into(),
            date,
            duration_minutes: None,
            notes: None,
            sets: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    #[must_use]
    pub fn with_set(mut self, set: WorkoutSet) -> Self {
        self.sets.push(set);
        self
    }
}

impl Record for Workout {
    const RECORD_TYPE: &'static str = "Workout";

    fn fields() -> FieldSet<Self> {
        FieldSet::new()
            .integer("id", |w: &Workout| Some(w.id))
            .text("userId", |w: &Workout| Some(w.user_id.as_str()))
            .text("name", |w: &Workout| Some(w.name.as_str()))
            .date("date", |w: &Workout| Some(w.date))
            .integer("durationMinutes", |w: &Workout| w.duration_minutes.map(i64::from))
            .text("notes", |w: &Workout| w.notes.as_deref())
    }
}
