//! Tri-state input fields.
//!
//! Batch update payloads distinguish a key that was not supplied at all from
//! a key supplied with an explicit `null`. Both drive different
//! reconciliation branches, so the distinction must never collapse into a
//! plain `Option<T>`.

use serde::{Deserialize, Deserializer};

/// A field of a sparse update entry.
///
/// - `Absent`: the key was not supplied.
/// - `Null`: the key was supplied with an explicit `null`.
/// - `Value`: the key was supplied with a concrete value.
///
/// Deserialization only ever produces `Null` or `Value`; `Absent` comes from
/// `#[serde(default)]` on the containing struct field.
///
/// # Example
///
/// ```
/// use fibu_core::Patch;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, Default)]
/// struct Entry {
///     #[serde(default)]
///     name: Patch<String>,
/// }
///
/// let absent: Entry = serde_json::from_str("{}").unwrap();
/// assert!(absent.name.is_absent());
///
/// let null: Entry = serde_json::from_str(r#"{"name": null}"#).unwrap();
/// assert!(null.name.is_present());
/// assert!(null.name.value().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Patch<T> {
    /// The key was not supplied at all.
    #[default]
    Absent,
    /// The key was supplied as an explicit `null`.
    Null,
    /// The key was supplied with a value.
    Value(T),
}

impl<T> Patch<T> {
    /// Whether the key was supplied, including as an explicit `null`.
    #[must_use]
    pub fn is_present(&self) -> bool {
        !matches!(self, Patch::Absent)
    }

    /// Whether the key was not supplied at all.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    /// The supplied value, if any. `Absent` and `Null` both yield `None`.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Consumes the patch, returning the supplied value if any.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Default)]
    struct Entry {
        #[serde(default)]
        number: Patch<i64>,
        #[serde(default)]
        name: Patch<String>,
    }

    #[test]
    fn missing_key_is_absent() {
        let entry: Entry = serde_json::from_str("{}").unwrap();
        assert!(entry.number.is_absent());
        assert!(entry.name.is_absent());
        assert!(!entry.name.is_present());
    }

    #[test]
    fn explicit_null_is_present_without_value() {
        let entry: Entry = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert!(entry.name.is_present());
        assert_eq!(entry.name.value(), None);
        assert!(entry.number.is_absent());
    }

    #[test]
    fn supplied_value_is_present_with_value() {
        let entry: Entry = serde_json::from_str(r#"{"number": 100, "name": "Cash"}"#).unwrap();
        assert_eq!(entry.number.value(), Some(&100));
        assert_eq!(entry.name.into_value().as_deref(), Some("Cash"));
    }

    #[test]
    fn null_and_absent_stay_distinct() {
        let null: Entry = serde_json::from_str(r#"{"number": null}"#).unwrap();
        let absent: Entry = serde_json::from_str("{}").unwrap();
        assert_ne!(null.number, absent.number);
        assert_eq!(null.number, Patch::Null);
    }
}
