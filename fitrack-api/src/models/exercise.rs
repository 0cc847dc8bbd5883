use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::paging::{FieldEnum, FieldSet, Record};

/// How hard an exercise is to perform correctly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl FieldEnum for Difficulty {
    fn variant_name(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    fn ordinal(&self) -> usize {
        *self as usize
    }
}

/// An exercise from the shared catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub difficulty: Difficulty,
    /// Works more than one joint
    pub is_compound: bool,
    pub created_at: DateTime<Utc>,
}

impl Record for Exercise {
    const RECORD_TYPE: &'static str = "Exercise";

    fn fields() -> FieldSet<Self> {
        FieldSet::new()
            .integer("id", |e: &Exercise| Some(e.id))
            .text("name", |e: &Exercise| Some(e.name.as_str()))
            .text("description", |e: &Exercise| e.description.as_deref())
            .enumeration("difficulty", |e: &Exercise| Some(e.difficulty))
            .boolean("isCompound", |e: &Exercise| Some(e.is_compound))
            .datetime("createdAt", |e: &Exercise| Some(e.created_at))
    }
}
