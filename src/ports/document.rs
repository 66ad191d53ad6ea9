//! Document Ports - The two capability sets a document offers.
//!
//! `DocumentContent` is the ordered key/value capability. `Document` adds
//! identity, version and JSON rendering on top. Collaborators such as the
//! object-document mapping layer depend on these traits; `MapDocument` is
//! the implementation.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::map::{Iter, IterMut, Keys, Values, ValuesMut};
use serde_json::{Map, Value};

use crate::domain::foundation::{json_type_name, DocumentError};

/// Ordered key/value access backed by a JSON map.
///
/// Implementors only expose their backing map; every operation is provided
/// and delegates to it. Iteration follows insertion order. Overwriting a
/// key keeps its position and removing one keeps the order of the rest.
pub trait DocumentContent {
    /// The backing map.
    fn content(&self) -> &Map<String, Value>;

    /// The backing map, mutably.
    fn content_mut(&mut self) -> &mut Map<String, Value>;

    /// Number of entries.
    fn size(&self) -> usize {
        self.content().len()
    }

    fn is_empty(&self) -> bool {
        self.content().is_empty()
    }

    fn contains_key(&self, key: &str) -> bool {
        self.content().contains_key(key)
    }

    fn contains_value(&self, value: &Value) -> bool {
        self.content().values().any(|candidate| candidate == value)
    }

    fn get(&self, key: &str) -> Option<&Value> {
        self.content().get(key)
    }

    /// Returns the value for `key`, or `default` when the key is absent.
    ///
    /// A key mapped to `null` is present and yields `null`.
    fn get_or_default<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.content().get(key).unwrap_or(default)
    }

    /// Inserts or overwrites an entry, returning the previous value.
    fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value>
    where
        Self: Sized,
    {
        self.content_mut().insert(key.into(), value.into())
    }

    /// Removes an entry, returning its value.
    fn remove(&mut self, key: &str) -> Option<Value> {
        self.content_mut().shift_remove(key)
    }

    /// Merges entries, overwriting on key collision.
    fn put_all<I>(&mut self, entries: I)
    where
        Self: Sized,
        I: IntoIterator<Item = (String, Value)>,
    {
        let content = self.content_mut();
        for (key, value) in entries {
            content.insert(key, value);
        }
    }

    /// Removes all entries.
    fn clear(&mut self) {
        self.content_mut().clear();
    }

    fn keys(&self) -> Keys<'_> {
        self.content().keys()
    }

    fn values(&self) -> Values<'_> {
        self.content().values()
    }

    fn entries(&self) -> Iter<'_> {
        self.content().iter()
    }

    fn values_mut(&mut self) -> ValuesMut<'_> {
        self.content_mut().values_mut()
    }

    fn entries_mut(&mut self) -> IterMut<'_> {
        self.content_mut().iter_mut()
    }

    /// Keeps only the entries for which `keep` returns true.
    fn retain<F>(&mut self, keep: F)
    where
        Self: Sized,
        F: FnMut(&String, &mut Value) -> bool,
    {
        self.content_mut().retain(keep);
    }

    /// Calls `action` once per entry, in iteration order.
    fn for_each<F>(&self, mut action: F)
    where
        Self: Sized,
        F: FnMut(&str, &Value),
    {
        for (key, value) in self.content() {
            action(key, value);
        }
    }
}

/// A document with optional identity and version that renders to JSON.
///
/// # Contract
///
/// - `id()` and `version()` fail with an illegal-state error until the
///   matching setter has been called; check `has_id()` / `has_version()`
///   first
/// - Setters overwrite unconditionally and never validate
/// - `to_json()` includes the id and version alongside the content
///
/// The typed getters treat a key mapped to `null` like an absent key and
/// report a present value of the wrong JSON type as
/// `DocumentError::TypeMismatch`.
pub trait Document: DocumentContent {
    fn has_id(&self) -> bool;

    /// Returns the id, or `DocumentError::MissingId` when none was set.
    fn id(&self) -> Result<&str, DocumentError>;

    fn set_id(&mut self, id: impl Into<String>)
    where
        Self: Sized;

    fn has_version(&self) -> bool;

    /// Returns the version, or `DocumentError::MissingVersion` when none was set.
    fn version(&self) -> Result<i64, DocumentError>;

    fn set_version(&mut self, version: i64);

    /// Renders the document, including id and version, as JSON text.
    fn to_json(&self) -> Result<String, DocumentError>;

    /// Inserts an entry and returns the document, for chained construction.
    fn append(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self
    where
        Self: Sized,
    {
        self.put(key, value);
        self
    }

    /// Serializes `value` into the document under `key`.
    fn put_serialized<T>(&mut self, key: &str, value: &T) -> Result<Option<Value>, DocumentError>
    where
        Self: Sized,
        T: Serialize + ?Sized,
    {
        let value =
            serde_json::to_value(value).map_err(|e| DocumentError::conversion(key, e))?;
        Ok(self.put(key, value))
    }

    /// Deserializes the value under `key` into `T`.
    fn get_as<T>(&self, key: &str) -> Result<Option<T>, DocumentError>
    where
        Self: Sized,
        T: DeserializeOwned,
    {
        match present(self.get(key)) {
            None => Ok(None),
            Some(value) => <T as Deserialize>::deserialize(value)
                .map(Some)
                .map_err(|e| DocumentError::conversion(key, e)),
        }
    }

    fn get_str(&self, key: &str) -> Result<Option<&str>, DocumentError> {
        match present(self.get(key)) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(DocumentError::type_mismatch(
                key,
                "string",
                json_type_name(other),
            )),
        }
    }

    fn get_str_or<'a>(&'a self, key: &str, default: &'a str) -> Result<&'a str, DocumentError> {
        Ok(self.get_str(key)?.unwrap_or(default))
    }

    fn get_bool(&self, key: &str) -> Result<Option<bool>, DocumentError> {
        match present(self.get(key)) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(DocumentError::type_mismatch(
                key,
                "boolean",
                json_type_name(other),
            )),
        }
    }

    fn get_bool_or(&self, key: &str, default: bool) -> Result<bool, DocumentError> {
        Ok(self.get_bool(key)?.unwrap_or(default))
    }

    fn get_i64(&self, key: &str) -> Result<Option<i64>, DocumentError> {
        match present(self.get(key)) {
            None => Ok(None),
            Some(value) => value
                .as_i64()
                .map(Some)
                .ok_or_else(|| DocumentError::type_mismatch(key, "integer", json_type_name(value))),
        }
    }

    fn get_i64_or(&self, key: &str, default: i64) -> Result<i64, DocumentError> {
        Ok(self.get_i64(key)?.unwrap_or(default))
    }

    fn get_i32(&self, key: &str) -> Result<Option<i32>, DocumentError> {
        match present(self.get(key)) {
            None => Ok(None),
            Some(value) => value
                .as_i64()
                .and_then(|n| i32::try_from(n).ok())
                .map(Some)
                .ok_or_else(|| {
                    DocumentError::type_mismatch(key, "32-bit integer", json_type_name(value))
                }),
        }
    }

    fn get_i32_or(&self, key: &str, default: i32) -> Result<i32, DocumentError> {
        Ok(self.get_i32(key)?.unwrap_or(default))
    }

    /// Applies `f` to the document and returns its result.
    fn transform<R, F>(&self, f: F) -> R
    where
        Self: Sized,
        F: FnOnce(&Self) -> R,
    {
        f(self)
    }
}

/// `null` reads as absent for the typed getters.
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}
