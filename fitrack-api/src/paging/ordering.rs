//! Sort comparator construction
//!
//! Sorting is best-effort: an unknown sort column leaves records in source
//! order rather than failing the request. Values compare by their natural
//! order (ordinal for text, numeric, chronological, declaration order for
//! enumerations). Null values sort after every non-null value in both
//! directions, and equal keys keep their relative source order.

use std::cmp::Ordering as CmpOrdering;
use std::fmt;
use std::sync::Arc;

use super::field::{FieldDescriptor, FieldValue, Record};
use super::request::SortDirection;
use super::resolver;

/// Ordering over records of type `T`
pub enum Ordering<T> {
    /// Keep source order
    Unordered,
    /// Order by one field
    Field {
        /// Sort key
        field: Arc<FieldDescriptor<T>>,
        /// Sort direction
        direction: SortDirection,
    },
}

impl<T: Record> Ordering<T> {
    /// Build the ordering for a caller-supplied sort column and order
    ///
    /// # Example
    ///
    /// ```rust
    /// use fitrack_api::models::Exercise;
    /// use fitrack_api::paging::{Ordering, SortDirection};
    ///
    /// let ordering = Ordering::<Exercise>::build(Some("Name"), Some("DESC"));
    /// assert_eq!(ordering.direction(), Some(SortDirection::Desc));
    ///
    /// let ignored = Ordering::<Exercise>::build(Some("bogus"), Some("desc"));
    /// assert!(ignored.is_unordered());
    /// ```
    #[must_use]
    pub fn build(column: Option<&str>, order: Option<&str>) -> Self {
        let Some(column) = column.map(str::trim).filter(|c| !c.is_empty()) else {
            return Self::Unordered;
        };

        match resolver::resolve::<T>(column) {
            Some(field) => Self::Field {
                field,
                direction: SortDirection::parse(order),
            },
            None => {
                tracing::debug!(
                    record = T::RECORD_TYPE,
                    sort_column = column,
                    "Sort column not found; keeping source order"
                );
                Self::Unordered
            }
        }
    }
}

impl<T> Ordering<T> {
    /// Compare two records under this ordering
    pub fn compare(&self, a: &T, b: &T) -> CmpOrdering {
        match self {
            Self::Unordered => CmpOrdering::Equal,
            Self::Field { field, direction } => {
                compare_values(field.read(a), field.read(b), *direction)
            }
        }
    }

    /// Stable-sort `records` in place
    pub fn sort(&self, records: &mut [T]) {
        if !self.is_unordered() {
            records.sort_by(|a, b| self.compare(a, b));
        }
    }

    /// Stable-sort references to records in place
    pub fn sort_refs(&self, records: &mut [&T]) {
        if !self.is_unordered() {
            records.sort_by(|a, b| self.compare(a, b));
        }
    }

    /// Whether source order is kept
    #[must_use]
    pub fn is_unordered(&self) -> bool {
        matches!(self, Self::Unordered)
    }

    /// The sort key, when ordering applies
    #[must_use]
    pub fn field(&self) -> Option<&FieldDescriptor<T>> {
        match self {
            Self::Field { field, .. } => Some(&**field),
            Self::Unordered => None,
        }
    }

    /// The sort direction, when ordering applies
    #[must_use]
    pub fn direction(&self) -> Option<SortDirection> {
        match self {
            Self::Field { direction, .. } => Some(*direction),
            Self::Unordered => None,
        }
    }
}

fn compare_values(a: FieldValue<'_>, b: FieldValue<'_>, direction: SortDirection) -> CmpOrdering {
    match (a.is_null(), b.is_null()) {
        (true, true) => CmpOrdering::Equal,
        (true, false) => CmpOrdering::Greater,
        (false, true) => CmpOrdering::Less,
        (false, false) => {
            let order = natural_order(a, b);
            match direction {
                SortDirection::Asc => order,
                SortDirection::Desc => order.reverse(),
            }
        }
    }
}

fn natural_order(a: FieldValue<'_>, b: FieldValue<'_>) -> CmpOrdering {
    match (a, b) {
        (FieldValue::Text(x), FieldValue::Text(y)) => x.cmp(y),
        (FieldValue::Integer(x), FieldValue::Integer(y)) => x.cmp(&y),
        (FieldValue::Float(x), FieldValue::Float(y)) => x.total_cmp(&y),
        (FieldValue::Integer(x), FieldValue::Float(y)) => (x as f64).total_cmp(&y),
        (FieldValue::Float(x), FieldValue::Integer(y)) => x.total_cmp(&(y as f64)),
        (FieldValue::Boolean(x), FieldValue::Boolean(y)) => x.cmp(&y),
        (FieldValue::Date(x), FieldValue::Date(y)) => x.cmp(&y),
        (FieldValue::DateTime(x), FieldValue::DateTime(y)) => x.cmp(&y),
        (FieldValue::Enum { ordinal: x, .. }, FieldValue::Enum { ordinal: y, .. }) => x.cmp(&y),
        // One accessor only ever yields one kind
        _ => CmpOrdering::Equal,
    }
}

impl<T> Clone for Ordering<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Unordered => Self::Unordered,
            Self::Field { field, direction } => Self::Field {
                field: Arc::clone(field),
                direction: *direction,
            },
        }
    }
}

impl<T> fmt::Debug for Ordering<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unordered => write!(f, "Unordered"),
            Self::Field { field, direction } => f
                .debug_struct("Field")
                .field("field", &field.name())
                .field("direction", direction)
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BodyWeight, Difficulty, Exercise, WeightUnit};
    use chrono::NaiveDate;

    fn exercise(id: i64, name: &str, difficulty: Difficulty, description: Option<&str>) -> Exercise {
        Exercise {
            id,
            name: name.to_string(),
            description: description.map(str::to_string),
            difficulty,
            is_compound: false,
            created_at: "2024-01-05T08:30:00Z".parse().unwrap(),
        }
    }

    fn weights(values: &[f64]) -> Vec<BodyWeight> {
        values
            .iter()
            .enumerate()
            .map(|(i, weight)| BodyWeight {
                id: i as i64 + 1,
                user_id: "usr_1".to_string(),
                weight: *weight,
                unit: WeightUnit::Kilograms,
                recorded_on: NaiveDate::from_ymd_opt(2024, 1, 1 + i as u32).unwrap(),
                note: None,
            })
            .collect()
    }

    #[test]
    fn test_absent_column_is_unordered() {
        assert!(Ordering::<Exercise>::build(None, Some("desc")).is_unordered());
        assert!(Ordering::<Exercise>::build(Some(" "), None).is_unordered());
    }

    #[test]
    fn test_unknown_column_keeps_source_order() {
        let ordering = Ordering::<Exercise>::build(Some("nonexistent"), Some("desc"));
        assert!(ordering.is_unordered());
        assert_eq!(ordering.direction(), None);

        let mut records = vec![
            exercise(3, "Squat", Difficulty::Beginner, None),
            exercise(1, "Lunge", Difficulty::Beginner, None),
            exercise(2, "Plank", Difficulty::Beginner, None),
        ];
        ordering.sort(&mut records);
        let ids: Vec<_> = records.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_boolean_sort_puts_false_first_ascending() {
        let mut records: Vec<_> = [(1, true), (2, false), (3, true), (4, false)]
            .into_iter()
            .map(|(id, compound)| {
                let mut e = exercise(id, "Row", Difficulty::Beginner, None);
                e.is_compound = compound;
                e
            })
            .collect();

        Ordering::<Exercise>::build(Some("is_compound"), Some("asc")).sort(&mut records);
        let ids: Vec<_> = records.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);

        Ordering::<Exercise>::build(Some("isCompound"), Some("desc")).sort(&mut records);
        let ids: Vec<_> = records.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_timestamp_sort_is_chronological() {
        let mut records: Vec<_> = [
            (1, "2024-03-01T09:00:00Z"),
            (2, "2023-12-31T23:59:59Z"),
            (3, "2024-03-01T08:59:59Z"),
        ]
        .into_iter()
        .map(|(id, at)| {
            let mut e = exercise(id, "Row", Difficulty::Beginner, None);
            e.created_at = at.parse().unwrap();
            e
        })
        .collect();

        Ordering::<Exercise>::build(Some("createdAt"), Some("asc")).sort(&mut records);
        let ids: Vec<_> = records.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);

        Ordering::<Exercise>::build(Some("CREATEDAT"), Some("desc")).sort(&mut records);
        let ids: Vec<_> = records.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[test]
    fn test_numeric_descending() {
        let ordering = Ordering::<BodyWeight>::build(Some("weight"), Some("desc"));
        let mut records = weights(&[70.0, 62.0, 85.0]);
        ordering.sort(&mut records);
        let sorted: Vec<_> = records.iter().map(|w| w.weight).collect();
        assert_eq!(sorted, vec![85.0, 70.0, 62.0]);
    }

    #[test]
    fn test_text_ascending() {
        let ordering = Ordering::<Exercise>::build(Some("NAME"), None);
        assert_eq!(ordering.direction(), Some(SortDirection::Asc));
        let mut records = vec![
            exercise(1, "Push Up", Difficulty::Beginner, None),
            exercise(2, "Pull Up", Difficulty::Beginner, None),
            exercise(3, "Lunge", Difficulty::Beginner, None),
        ];
        ordering.sort(&mut records);
        let names: Vec<_> = records.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Lunge", "Pull Up", "Push Up"]);
    }

    #[test]
    fn test_enum_sorts_by_declaration_order() {
        let ordering = Ordering::<Exercise>::build(Some("difficulty"), Some("asc"));
        let mut records = vec![
            exercise(1, "Muscle Up", Difficulty::Advanced, None),
            exercise(2, "Plank", Difficulty::Beginner, None),
            exercise(3, "Pistol Squat", Difficulty::Intermediate, None),
        ];
        ordering.sort(&mut records);
        let ids: Vec<_> = records.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_nulls_sort_last_in_both_directions() {
        let records = vec![
            exercise(1, "A", Difficulty::Beginner, None),
            exercise(2, "B", Difficulty::Beginner, Some("beta")),
            exercise(3, "C", Difficulty::Beginner, Some("alpha")),
        ];

        let mut asc = records.clone();
        Ordering::<Exercise>::build(Some("description"), Some("asc")).sort(&mut asc);
        let ids: Vec<_> = asc.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);

        let mut desc = records;
        Ordering::<Exercise>::build(Some("description"), Some("desc")).sort(&mut desc);
        let ids: Vec<_> = desc.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_ties_keep_source_order() {
        let ordering = Ordering::<Exercise>::build(Some("difficulty"), Some("desc"));
        let mut records = vec![
            exercise(1, "A", Difficulty::Beginner, None),
            exercise(2, "B", Difficulty::Advanced, None),
            exercise(3, "C", Difficulty::Beginner, None),
            exercise(4, "D", Difficulty::Advanced, None),
        ];
        ordering.sort(&mut records);
        let ids: Vec<_> = records.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_sort_refs_matches_sort() {
        let ordering = Ordering::<BodyWeight>::build(Some("weight"), None);
        let records = weights(&[3.0, 1.0, 2.0]);
        let mut refs: Vec<&BodyWeight> = records.iter().collect();
        ordering.sort_refs(&mut refs);
        let sorted: Vec<_> = refs.iter().map(|w| w.weight).collect();
        assert_eq!(sorted, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_natural_order_mixed_numbers() {
        assert_eq!(
            natural_order(FieldValue::Integer(2), FieldValue::Float(2.5)),
            CmpOrdering::Less
        );
        assert_eq!(
            natural_order(FieldValue::Float(3.0), FieldValue::Integer(3)),
            CmpOrdering::Equal
        );
    }

    #[test]
    fn test_ordering_debug() {
        let ordering = Ordering::<Exercise>::build(Some("name"), Some("desc"));
        let debug = format!("{:?}", ordering.clone());
        assert!(debug.contains("\"name\""));
        assert!(debug.contains("Desc"));
    }
}
