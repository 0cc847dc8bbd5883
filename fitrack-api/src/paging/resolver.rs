//! Field accessor resolution by name
//!
//! Resolves an untrusted, arbitrary-case column name to a [`FieldDescriptor`]
//! of a given record type. Two process-wide caches back the lookup:
//!
//! - each record type's [`FieldSet`] is built once, on first use, so unknown
//!   names never rebuild the table;
//! - each successful (record type, field name) resolution is remembered, so
//!   later requests skip the field-table scan entirely.
//!
//! Both are keyed by the record's [`TypeId`]: `"name"` on two unrelated
//! record types resolves to two distinct descriptors. Entries are never
//! evicted; the key space is bounded by the record types compiled into the
//! program and the names they declare. Failed lookups are not remembered.

use std::any::{Any, TypeId};
use std::sync::{Arc, LazyLock};

use dashmap::DashMap;

use super::field::{normalize_field_name, FieldDescriptor, FieldSet, Record};

type CachedField = Arc<dyn Any + Send + Sync>;
type CachedTable = Arc<dyn Any + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct FieldKey {
    record: TypeId,
    name: String,
}

static FIELD_TABLES: LazyLock<DashMap<TypeId, CachedTable>> = LazyLock::new(DashMap::new);
static RESOLVED_FIELDS: LazyLock<DashMap<FieldKey, CachedField>> = LazyLock::new(DashMap::new);

/// Resolve `field_name` to a descriptor of `T`
///
/// Matching ignores ASCII case, surrounding whitespace and `_` separators.
/// Returns `None` when `T` declares no scalar field of that name.
///
/// # Example
///
/// ```rust
/// use fitrack_api::models::Exercise;
/// use fitrack_api::paging::resolve;
///
/// let field = resolve::<Exercise>("NAME").expect("exercises have a name");
/// assert_eq!(field.name(), "name");
/// assert!(resolve::<Exercise>("nonexistentField").is_none());
/// ```
pub fn resolve<T: Record>(field_name: &str) -> Option<Arc<FieldDescriptor<T>>> {
    let name = normalize_field_name(field_name);
    if name.is_empty() {
        return None;
    }

    let key = FieldKey {
        record: TypeId::of::<T>(),
        name,
    };

    if let Some(cached) = lookup::<T>(&key) {
        return Some(cached);
    }

    let table = field_table::<T>()?;
    let descriptor = Arc::clone(table.find(&key.name)?);
    tracing::trace!(
        record = T::RECORD_TYPE,
        field = descriptor.name(),
        "Caching field accessor"
    );

    RESOLVED_FIELDS.insert(key, Arc::clone(&descriptor) as CachedField);
    Some(descriptor)
}

/// Whether `field_name` resolves on `T`
#[must_use]
pub fn is_resolvable<T: Record>(field_name: &str) -> bool {
    resolve::<T>(field_name).is_some()
}

/// The field table of `T`, built on first use
fn field_table<T: Record>() -> Option<Arc<FieldSet<T>>> {
    let entry = FIELD_TABLES
        .entry(TypeId::of::<T>())
        .or_insert_with(|| Arc::new(T::fields()) as CachedTable);
    Arc::clone(entry.value()).downcast::<FieldSet<T>>().ok()
}

fn lookup<T: Record>(key: &FieldKey) -> Option<Arc<FieldDescriptor<T>>> {
    let cached = RESOLVED_FIELDS.get(key)?;
    Arc::clone(cached.value())
        .downcast::<FieldDescriptor<T>>()
        .ok()
}
