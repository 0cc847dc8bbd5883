use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::paging::{FieldEnum, FieldSet, Record};

/// Unit a body weight was recorded in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightUnit {
    Kilograms,
    Pounds,
}

impl FieldEnum for WeightUnit {
    fn variant_name(&self) -> &'static str {
        match self {
            Self::Kilograms => "Kilograms",
            Self::Pounds => "Pounds",
        }
    }

    fn ordinal(&self) -> usize {
        *self as usize
    }
}

/// One body weight measurement of a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyWeight {
    pub id: i64,
    pub user_id: String,
    pub weight: f64,
    pub unit: WeightUnit,
    pub recorded_on: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl BodyWeight {
    pub fn new(
        id: i64,
        user_id: impl Into<String>,
        weight: f64,
        unit: WeightUnit,
        recorded_on: NaiveDate,
    ) -> Self {
        Self {
            id,
            user_id: user_id.into(),
            weight,
            unit,
            recorded_on,
            note: None,
        }
    }
}

impl Record for BodyWeight {
    const RECORD_TYPE: &'static str = "BodyWeight";

    fn fields() -> FieldSet<Self> {
        FieldSet::new()
            .integer("id", |b: &BodyWeight| Some(b.id))
            .text("userId", |b: &BodyWeight| Some(b.user_id.as_str()))
            .float("weight", |b: &BodyWeight| Some(b.weight))
            .enumeration("unit", |b: &BodyWeight| Some(b.unit))
            .date("recordedOn", |b: &BodyWeight| Some(b.recorded_on))
            .text("note", |b: &BodyWeight| b.note.as_deref())
    }
}
