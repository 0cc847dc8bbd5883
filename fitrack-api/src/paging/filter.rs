//! Filter predicate construction
//!
//! Turns a (filter column, filter query) pair into a [`Filter`] over a record
//! type. Comparison rules depend on the field's [`ValueKind`]:
//!
//! | Kind | Query form | Match rule |
//! |---|---|---|
//! | String | any text | case-insensitive substring |
//! | Number | decimal number | equality |
//! | Date | `YYYY-MM-DD` or RFC 3339 | equality |
//! | Boolean | `true` / `false` | equality, case-insensitive |
//! | Enum | variant name | case-insensitive name equality |
//!
//! A column that does not resolve, or a query that does not parse for the
//! column's kind, yields [`Filter::Nothing`]: no record matches. It is never
//! an error.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use super::field::{FieldDescriptor, FieldValue, Record, ValueKind};
use super::resolver;

/// A parsed date query
///
/// Calendar-date fields compare against `date`; timestamp fields compare
/// against `instant`. A date-only query stands for midnight UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateQuery {
    /// Calendar date of the query
    pub date: NaiveDate,
    /// Exact instant of the query
    pub instant: DateTime<Utc>,
}

impl DateQuery {
    fn parse(query: &str) -> Option<Self> {
        let query = query.trim();
        if let Ok(date) = NaiveDate::parse_from_str(query, "%Y-%m-%d") {
            let instant = date.and_hms_opt(0, 0, 0)?.and_utc();
            return Some(Self { date, instant });
        }
        let instant = DateTime::parse_from_rfc3339(query).ok()?.with_timezone(&Utc);
        Some(Self {
            date: instant.date_naive(),
            instant,
        })
    }
}

/// Filter query parsed for one field kind
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOperand {
    /// Lowercased substring to look for
    Contains(String),
    /// Number to compare for equality
    ///
    /// `int` is set when the query is a whole number that fits an `i64`;
    /// integer fields compare against it exactly and never match otherwise.
    Number {
        /// Exact integer value of the query
        int: Option<i64>,
        /// Floating-point value of the query
        float: f64,
    },
    /// Boolean to compare for equality
    Boolean(bool),
    /// Date or instant to compare for equality
    Date(DateQuery),
    /// Variant name to compare, ignoring case
    Variant(String),
}

impl FilterOperand {
    /// Parse `query` for a field of `kind`; `None` when it cannot match anything
    #[must_use]
    pub fn parse(kind: ValueKind, query: &str) -> Option<Self> {
        match kind {
            ValueKind::String => Some(Self::Contains(query.to_lowercase())),
            ValueKind::Number => {
                let query = query.trim();
                let float = query.parse::<f64>().ok().filter(|n| n.is_finite())?;
                Some(Self::Number {
                    int: query.parse::<i64>().ok().or_else(|| whole_number(float)),
                    float,
                })
            }
            ValueKind::Boolean => {
                if query.eq_ignore_ascii_case("true") {
                    Some(Self::Boolean(true))
                } else if query.eq_ignore_ascii_case("false") {
                    Some(Self::Boolean(false))
                } else {
                    None
                }
            }
            ValueKind::Date => DateQuery::parse(query).map(Self::Date),
            ValueKind::Enum => Some(Self::Variant(query.to_string())),
        }
    }

    /// Whether a field value satisfies this operand
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn matches(&self, value: FieldValue<'_>) -> bool {
        match (self, value) {
            (Self::Contains(needle), FieldValue::Text(text)) => {
                text.to_lowercase().contains(needle.as_str())
            }
            (Self::Number { int, .. }, FieldValue::Integer(v)) => *int == Some(v),
            (Self::Number { float, .. }, FieldValue::Float(v)) => v == *float,
            (Self::Boolean(b), FieldValue::Boolean(v)) => v == *b,
            (Self::Date(q), FieldValue::Date(d)) => d == q.date,
            (Self::Date(q), FieldValue::DateTime(t)) => t == q.instant,
            (Self::Variant(wanted), FieldValue::Enum { name, .. }) => {
                name.eq_ignore_ascii_case(wanted)
            }
            _ => false,
        }
    }
}

/// `n` as an `i64` when it is integral and exactly representable (`70.0`, `1e3`)
#[allow(clippy::cast_possible_truncation)]
fn whole_number(n: f64) -> Option<i64> {
    const EXACT: f64 = 9_007_199_254_740_992.0;
    (n.fract() == 0.0 && n.abs() <= EXACT).then_some(n as i64)
}

/// Filter predicate over records of type `T`
///
/// The variants are inspectable so that a remote [`RecordSource`] can
/// translate them into its own query language.
///
/// [`RecordSource`]: super::RecordSource
pub enum Filter<T> {
    /// No filter was requested; every record matches
    All,
    /// The filter could not be applied; no record matches
    Nothing,
    /// Records whose `field` satisfies `operand`
    Field {
        /// Field being filtered
        field: Arc<FieldDescriptor<T>>,
        /// Parsed query
        operand: FilterOperand,
        /// Query text as the caller sent it
        query: String,
    },
}

impl<T: Record> Filter<T> {
    /// Build the filter for a caller-supplied column and query
    ///
    /// Either value missing or empty means no filtering.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fitrack_api::models::Exercise;
    /// use fitrack_api::paging::Filter;
    ///
    /// assert!(Filter::<Exercise>::build(None, Some("pu")).is_unfiltered());
    /// assert!(Filter::<Exercise>::build(Some("name"), Some("pu")).field().is_some());
    /// assert!(Filter::<Exercise>::build(Some("bogus"), Some("pu")).matches_nothing());
    /// ```
    #[must_use]
    pub fn build(column: Option<&str>, query: Option<&str>) -> Self {
        let column = column.map(str::trim).filter(|c| !c.is_empty());
        let query = query.filter(|q| !q.is_empty());
        let (Some(column), Some(query)) = (column, query) else {
            return Self::All;
        };

        let Some(field) = resolver::resolve::<T>(column) else {
            tracing::debug!(
                record = T::RECORD_TYPE,
                filter_column = column,
                "Filter column not found; no records will match"
            );
            return Self::Nothing;
        };

        match FilterOperand::parse(field.kind(), query) {
            Some(operand) => Self::Field {
                field,
                operand,
                query: query.to_string(),
            },
            None => {
                tracing::debug!(
                    record = T::RECORD_TYPE,
                    filter_column = field.name(),
                    kind = %field.kind(),
                    "Filter query does not parse for field kind; no records will match"
                );
                Self::Nothing
            }
        }
    }
}

impl<T> Filter<T> {
    /// Whether `record` passes the filter
    pub fn matches(&self, record: &T) -> bool {
        match self {
            Self::All => true,
            Self::Nothing => false,
            Self::Field { field, operand, .. } => operand.matches(field.read(record)),
        }
    }

    /// Whether no filtering was requested
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether the filter rejects every record
    #[must_use]
    pub fn matches_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// The filtered field, when a filter applies
    #[must_use]
    pub fn field(&self) -> Option<&FieldDescriptor<T>> {
        match self {
            Self::Field { field, .. } => Some(&**field),
            _ => None,
        }
    }

    /// The caller's query text, when a filter applies
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        match self {
            Self::Field { query, .. } => Some(query.as_str()),
            _ => None,
        }
    }
}

impl<T> Clone for Filter<T> {
    fn clone(&self) -> Self {
        match self {
            Self::All => Self::All,
            Self::Nothing => Self::Nothing,
            Self::Field {
                field,
                operand,
                query,
            } => Self::Field {
                field: Arc::clone(field),
                operand: operand.clone(),
                query: query.clone(),
            },
        }
    }
}

impl<T> fmt::Debug for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Nothing => write!(f, "Nothing"),
            Self::Field {
                field,
                operand,
                query,
            } => f
                .debug_struct("Field")
                .field("field", &field.name())
                .field("operand", operand)
                .field("query", query)
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BodyWeight, Difficulty, Exercise, WeightUnit};

    fn exercise(name: &str) -> Exercise {
        Exercise {
            id: 1,
            name: name.to_string(),
            description: None,
            difficulty: Difficulty::Beginner,
            is_compound: true,
            created_at: "2024-01-05T08:30:00Z".parse().unwrap(),
        }
    }

    fn body_weight(weight: f64) -> BodyWeight {
        BodyWeight {
            id: 1,
            user_id: "usr_1".to_string(),
            weight,
            unit: WeightUnit::Kilograms,
            recorded_on: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            note: None,
        }
    }

    #[test]
    fn test_absent_column_or_query_is_unfiltered() {
        assert!(Filter::<Exercise>::build(None, None).is_unfiltered());
        assert!(Filter::<Exercise>::build(Some("name"), None).is_unfiltered());
        assert!(Filter::<Exercise>::build(None, Some("x")).is_unfiltered());
        assert!(Filter::<Exercise>::build(Some(""), Some("x")).is_unfiltered());
        assert!(Filter::<Exercise>::build(Some("  "), Some("x")).is_unfiltered());
        assert!(Filter::<Exercise>::build(Some("name"), Some("")).is_unfiltered());
    }

    #[test]
    fn test_unknown_column_matches_nothing() {
        let filter = Filter::<Exercise>::build(Some("nonexistentField"), Some("x"));
        assert!(filter.matches_nothing());
        assert!(!filter.matches(&exercise("Plank")));
    }

    #[test]
    fn test_string_filter_is_case_insensitive_substring() {
        let filter = Filter::<Exercise>::build(Some("Name"), Some("PU"));
        assert!(filter.matches(&exercise("Pull Up")));
        assert!(filter.matches(&exercise("Push Up")));
        assert!(!filter.matches(&exercise("Plank")));
        assert_eq!(filter.query(), Some("PU"));
        assert_eq!(filter.field().map(|f| f.name()), Some("name"));
    }

    #[test]
    fn test_string_filter_never_matches_null() {
        let filter = Filter::<Exercise>::build(Some("description"), Some("a"));
        assert!(!filter.matches(&exercise("Plank")));
    }

    #[test]
    fn test_number_filter_equality() {
        let filter = Filter::<BodyWeight>::build(Some("weight"), Some(" 70 "));
        assert!(filter.matches(&body_weight(70.0)));
        assert!(!filter.matches(&body_weight(70.5)));
    }

    #[test]
    fn test_number_filter_on_integer_field() {
        let filter = Filter::<Exercise>::build(Some("id"), Some("1"));
        assert!(filter.matches(&exercise("Plank")));
        let filter = Filter::<Exercise>::build(Some("id"), Some("1.5"));
        assert!(!filter.matches(&exercise("Plank")));
    }

    #[test]
    fn test_integer_filter_is_exact_beyond_float_precision() {
        let mut record = exercise("Rack");
        record.id = 9_007_199_254_740_993;
        let filter = Filter::<Exercise>::build(Some("id"), Some("9007199254740992"));
        assert!(!filter.matches(&record));
        let filter = Filter::<Exercise>::build(Some("id"), Some("9007199254740993"));
        assert!(filter.matches(&record));
    }

    #[test]
    fn test_integral_decimal_query_matches_integer_field() {
        let filter = Filter::<Exercise>::build(Some("id"), Some("1.0"));
        assert!(filter.matches(&exercise("Plank")));
        let filter = Filter::<Exercise>::build(Some("id"), Some("0.999999"));
        assert!(!filter.matches(&exercise("Plank")));
    }

    #[test]
    fn test_unparseable_number_matches_nothing() {
        let filter = Filter::<BodyWeight>::build(Some("weight"), Some("heavy"));
        assert!(filter.matches_nothing());
        let filter = Filter::<BodyWeight>::build(Some("weight"), Some("NaN"));
        assert!(filter.matches_nothing());
    }

    #[test]
    fn test_boolean_filter() {
        let filter = Filter::<Exercise>::build(Some("isCompound"), Some("TRUE"));
        assert!(filter.matches(&exercise("Squat")));
        let filter = Filter::<Exercise>::build(Some("isCompound"), Some("false"));
        assert!(!filter.matches(&exercise("Squat")));
        let filter = Filter::<Exercise>::build(Some("isCompound"), Some("yes"));
        assert!(filter.matches_nothing());
    }

    #[test]
    fn test_enum_filter_matches_variant_name() {
        let filter = Filter::<Exercise>::build(Some("difficulty"), Some("beginner"));
        assert!(filter.matches(&exercise("Plank")));
        let filter = Filter::<Exercise>::build(Some("difficulty"), Some("begin"));
        assert!(!filter.matches(&exercise("Plank")));
    }

    #[test]
    fn test_date_filter_on_calendar_date() {
        let filter = Filter::<BodyWeight>::build(Some("recordedOn"), Some("2024-02-01"));
        assert!(filter.matches(&body_weight(70.0)));
        let filter = Filter::<BodyWeight>::build(Some("recordedOn"), Some("2024-02-01T23:00:00Z"));
        assert!(filter.matches(&body_weight(70.0)));
        let filter = Filter::<BodyWeight>::build(Some("recordedOn"), Some("2024-02-02"));
        assert!(!filter.matches(&body_weight(70.0)));
    }

    #[test]
    fn test_date_filter_on_timestamp_is_exact() {
        let filter = Filter::<Exercise>::build(Some("createdAt"), Some("2024-01-05T08:30:00Z"));
        assert!(filter.matches(&exercise("Plank")));
        let filter = Filter::<Exercise>::build(Some("createdAt"), Some("2024-01-05"));
        assert!(!filter.matches(&exercise("Plank")));
        let filter = Filter::<Exercise>::build(Some("created_at"), Some("last tuesday"));
        assert!(filter.matches_nothing());
    }

    #[test]
    fn test_operand_kind_mismatch_never_matches() {
        let operand = FilterOperand::Number {
            int: Some(1),
            float: 1.0,
        };
        assert!(!operand.matches(FieldValue::Text("1")));
        assert!(!operand.matches(FieldValue::Null));
    }

    #[test]
    fn test_filter_debug_and_clone() {
        let filter = Filter::<Exercise>::build(Some("name"), Some("pu"));
        let cloned = filter.clone();
        assert_eq!(format!("{:?}", filter), format!("{:?}", cloned));
        assert!(format!("{:?}", filter).contains("\"name\""));
    }
}
