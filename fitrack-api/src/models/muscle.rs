use serde::{Deserialize, Serialize};

use crate::paging::{FieldEnum, FieldSet, Record};

/// Body region a muscle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Arms,
    Legs,
    Core,
}

impl FieldEnum for MuscleGroup {
    fn variant_name(&self) -> &'static str {
        match self {
            Self::Chest => "Chest",
            Self::Back => "Back",
            Self::Shoulders => "Shoulders",
            Self::Arms => "Arms",
            Self::Legs => "Legs",
            Self::Core => "Core",
        }
    }

    fn ordinal(&self) -> usize {
        *self as usize
    }
}

/// A muscle exercises can target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Muscle {
    pub id: i64,
    pub name: String,
    pub muscle_group: MuscleGroup,
}

impl Muscle {
    pub fn new(id: i64, name: impl Into<String>, muscle_group: MuscleGroup) -> Self {
        Self {
            id,
            name: name.into(),
            muscle_group,
        }
    }
}

impl Record for Muscle {
    const RECORD_TYPE: &'static str = "Muscle";

    fn fields() -> FieldSet<Self> {
        FieldSet::new()
            .integer("id", |m: &Muscle| Some(m.id))
            .text("name", |m: &Muscle| Some(m.name.as_str()))
            .enumeration("muscleGroup", |m: &Muscle| Some(m.muscle_group))
    }
}
