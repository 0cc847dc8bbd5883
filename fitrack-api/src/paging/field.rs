//! Field descriptors and per-type field tables
//!
//! Every record type that can be paged declares a small table of its scalar
//! members: a name, a [`ValueKind`] and a typed getter. The table is the only
//! place where a record's shape meets the string-typed column names supplied
//! by API callers.
//!
//! # Example
//!
//! ```rust
//! use fitrack_api::paging::{FieldSet, Record, ValueKind};
//!
//! struct Set {
//!     reps: i32,
//!     note: Option<String>,
//! }
//!
//! impl Record for Set {
//!     const RECORD_TYPE: &'static str = "Set";
//!
//!     fn fields() -> FieldSet<Self> {
//!         FieldSet::new()
//!             .integer("reps", |s: &Set| Some(i64::from(s.reps)))
//!             .text("note", |s: &Set| s.note.as_deref())
//!     }
//! }
//!
//! let fields = Set::fields();
//! assert_eq!(fields.len(), 2);
//! assert_eq!(fields.get("reps").map(|f| f.kind()), Some(ValueKind::Number));
//! ```

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

/// Coarse semantic category of a field
///
/// The kind decides how filter text is parsed and how two values compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Free text
    String,
    /// Integer or floating point number
    Number,
    /// `true` / `false`
    Boolean,
    /// Calendar date or UTC timestamp
    Date,
    /// Enumeration with named variants in declaration order
    Enum,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Number => write!(f, "number"),
            Self::Boolean => write!(f, "boolean"),
            Self::Date => write!(f, "date"),
            Self::Enum => write!(f, "enum"),
        }
    }
}

/// A single value read from a record through a [`FieldDescriptor`]
///
/// Text is borrowed from the record, so reading a field never allocates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// The member holds no value
    Null,
    /// Text value
    Text(&'a str),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Boolean(bool),
    /// Calendar date
    Date(NaiveDate),
    /// UTC timestamp
    DateTime(DateTime<Utc>),
    /// Enumeration variant with its declaration ordinal
    Enum {
        /// Variant name
        name: &'static str,
        /// Position of the variant in declaration order
        ordinal: usize,
    },
}

impl FieldValue<'_> {
    /// Whether the member holds no value
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The value kind, or `None` for [`FieldValue::Null`]
    #[must_use]
    pub const fn kind(&self) -> Option<ValueKind> {
        match self {
            Self::Null => None,
            Self::Text(_) => Some(ValueKind::String),
            Self::Integer(_) | Self::Float(_) => Some(ValueKind::Number),
            Self::Boolean(_) => Some(ValueKind::Boolean),
            Self::Date(_) | Self::DateTime(_) => Some(ValueKind::Date),
            Self::Enum { .. } => Some(ValueKind::Enum),
        }
    }
}

/// Enumerations that can be exposed as record fields
///
/// Filtering matches on [`variant_name`](FieldEnum::variant_name), sorting
/// follows [`ordinal`](FieldEnum::ordinal).
pub trait FieldEnum: Copy + Send + Sync + 'static {
    /// Name of the variant as clients spell it
    fn variant_name(&self) -> &'static str;

    /// Zero-based position of the variant in declaration order
    fn ordinal(&self) -> usize;
}

/// Type-erased getter stored in a [`FieldDescriptor`]
pub type Accessor<T> = Box<dyn for<'a> Fn(&'a T) -> FieldValue<'a> + Send + Sync>;

/// Wrap a getter closure, pinning its higher-ranked signature
fn accessor<T, F>(read: F) -> Accessor<T>
where
    F: for<'a> Fn(&'a T) -> FieldValue<'a> + Send + Sync + 'static,
{
    Box::new(read)
}

/// A named, typed, readable member of a record type
///
/// Descriptors are immutable once built.
pub struct FieldDescriptor<T> {
    record_type: &'static str,
    name: &'static str,
    kind: ValueKind,
    accessor: Accessor<T>,
}

impl<T> FieldDescriptor<T> {
    /// Display name of the record type declaring this field
    #[must_use]
    pub fn record_type(&self) -> &'static str {
        self.record_type
    }

    /// Canonical field name, as serialized in responses
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The field's value kind
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Read this field from a record
    pub fn read<'a>(&self, record: &'a T) -> FieldValue<'a> {
        (self.accessor)(record)
    }
}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("record_type", &self.record_type)
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Builder for a record type's field table
///
/// Only scalar members are registered. Nested records and collections are
/// left out, which makes them unresolvable by name.
pub struct FieldSet<T> {
    fields: Vec<Arc<FieldDescriptor<T>>>,
}

impl<T: Record> FieldSet<T> {
    /// Start an empty field table for `T`
    #[must_use]
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Register a text field
    #[must_use]
    pub fn text<F>(self, name: &'static str, get: F) -> Self
    where
        F: for<'a> Fn(&'a T) -> Option<&'a str> + Send + Sync + 'static,
    {
        self.push(
            name,
            ValueKind::String,
            accessor::<T, _>(move |record| get(record).map_or(FieldValue::Null, FieldValue::Text)),
        )
    }

    /// Register an integer field
    #[must_use]
    pub fn integer<F>(self, name: &'static str, get: F) -> Self
    where
        F: Fn(&T) -> Option<i64> + Send + Sync + 'static,
    {
        self.push(
            name,
            ValueKind::Number,
            accessor::<T, _>(move |record| get(record).map_or(FieldValue::Null, FieldValue::Integer)),
        )
    }

    /// Register a floating point field
    #[must_use]
    pub fn float<F>(self, name: &'static str, get: F) -> Self
    where
        F: Fn(&T) -> Option<f64> + Send + Sync + 'static,
    {
        self.push(
            name,
            ValueKind::Number,
            accessor::<T, _>(move |record| get(record).map_or(FieldValue::Null, FieldValue::Float)),
        )
    }

    /// Register a boolean field
    #[must_use]
    pub fn boolean<F>(self, name: &'static str, get: F) -> Self
    where
        F: Fn(&T) -> Option<bool> + Send + Sync + 'static,
    {
        self.push(
            name,
            ValueKind::Boolean,
            accessor::<T, _>(move |record| get(record).map_or(FieldValue::Null, FieldValue::Boolean)),
        )
    }

    /// Register a calendar date field
    #[must_use]
    pub fn date<F>(self, name: &'static str, get: F) -> Self
    where
        F: Fn(&T) -> Option<NaiveDate> + Send + Sync + 'static,
    {
        self.push(
            name,
            ValueKind::Date,
            accessor::<T, _>(move |record| get(record).map_or(FieldValue::Null, FieldValue::Date)),
        )
    }

    /// Register a UTC timestamp field
    #[must_use]
    pub fn datetime<F>(self, name: &'static str, get: F) -> Self
    where
        F: Fn(&T) -> Option<DateTime<Utc>> + Send + Sync + 'static,
    {
        self.push(
            name,
            ValueKind::Date,
            accessor::<T, _>(move |record| get(record).map_or(FieldValue::Null, FieldValue::DateTime)),
        )
    }

    /// Register an enumeration field
    #[must_use]
    pub fn enumeration<E, F>(self, name: &'static str, get: F) -> Self
    where
        E: FieldEnum,
        F: Fn(&T) -> Option<E> + Send + Sync + 'static,
    {
        self.push(
            name,
            ValueKind::Enum,
            accessor::<T, _>(move |record| {
                get(record).map_or(FieldValue::Null, |variant| FieldValue::Enum {
                    name: variant.variant_name(),
                    ordinal: variant.ordinal(),
                })
            }),
        )
    }

    fn push(mut self, name: &'static str, kind: ValueKind, accessor: Accessor<T>) -> Self {
        self.fields.push(Arc::new(FieldDescriptor {
            record_type: T::RECORD_TYPE,
            name,
            kind,
            accessor,
        }));
        self
    }

    /// Number of registered fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no fields are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Canonical names of the registered fields, in registration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|field| field.name)
    }

    /// Look up a field by name, ignoring ASCII case and `_` separators
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldDescriptor<T>> {
        self.find(&normalize_field_name(name)).map(|field| &**field)
    }

    /// Shared handle to the descriptor whose normalized name is `normalized`
    pub(crate) fn find(&self, normalized: &str) -> Option<&Arc<FieldDescriptor<T>>> {
        self.fields
            .iter()
            .find(|field| normalize_field_name(field.name) == normalized)
    }
}

impl<T: Record> Default for FieldSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A record type whose scalar fields can be sorted and filtered by name
pub trait Record: Send + Sync + 'static {
    /// Display name used in logs and error bodies (e.g. `"Exercise"`)
    const RECORD_TYPE: &'static str;

    /// Build this type's field table
    fn fields() -> FieldSet<Self>
    where
        Self: Sized;
}

/// Lookup key form of a field name: ASCII-lowercased, `_` removed
pub(crate) fn normalize_field_name(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
