use serde::{Deserialize, Serialize};

use crate::paging::{FieldSet, Record};

/// A piece of gym equipment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Equipment {
    /// Create equipment without a description
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
        }
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Record for Equipment {
    const RECORD_TYPE: &'static str = "Equipment";

    fn fields() -> FieldSet<Self> {
        FieldSet::new()
            .integer("id", |e: &Equipment| Some(e.id))
            .text("name", |e: &Equipment| Some(e.name.as_str()))
            .text("description", |e: &Equipment| e.description.as_deref())
    }
}
