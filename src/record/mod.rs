// src/record/mod.rs
//! Ordered, freezable key/value container used as the shape of every
//! extracted result, at every nesting level.
//!
//! A `Record` is filled field by field while a page is parsed, then frozen
//! exactly once. Freezing cascades into every nested record and cannot be
//! undone; afterwards `set`/`remove` fail with `Error::ReadOnly`.
//!
//! Some records stand in for a scalar (a flag's country name, a favorite
//! arena's name) while carrying companion fields such as `image`. That text
//! lives under the reserved `LABEL_KEY` and is what `Display` prints.

pub mod value;
pub mod view;

use std::fmt;
use std::ops::Index;
use std::slice;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
pub use value::Value;

/// Reserved key holding a record's string representation.
pub const LABEL_KEY: &str = "__label";

#[derive(Clone, Debug, Default)]
pub struct Record {
    entries: Vec<(String, Value)>,
    /// Keys whose value is a nested record; walked by `freeze`.
    freezable: Vec<String>,
    frozen: bool,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// A record that reads as `label` in string contexts.
    pub fn labelled(label: impl Into<String>) -> Self {
        let mut r = Self::new();
        r.entries.push((s!(LABEL_KEY), Value::Str(label.into())));
        r
    }

    pub fn label(&self) -> Option<&str> {
        self.position(LABEL_KEY).and_then(|i| match &self.entries[i].1 {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        })
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    pub fn get(&self, key: &str) -> Result<&Value> {
        self.position(key)
            .map(|i| &self.entries[i].1)
            .ok_or_else(|| Error::NotFound(s!(key)))
    }

    pub fn get_str(&self, key: &str) -> Result<&str> {
        self.get(key)?.as_str().ok_or_else(|| Error::NotFound(s!(key)))
    }

    pub fn get_int(&self, key: &str) -> Result<i64> {
        self.get(key)?.as_int().ok_or_else(|| Error::NotFound(s!(key)))
    }

    pub fn get_float(&self, key: &str) -> Result<f64> {
        self.get(key)?.as_float().ok_or_else(|| Error::NotFound(s!(key)))
    }

    pub fn get_record(&self, key: &str) -> Result<&Record> {
        self.get(key)?.as_record().ok_or_else(|| Error::NotFound(s!(key)))
    }

    /// Mutable access to a nested record. A frozen parent only ever holds
    /// frozen children, so this cannot be used to write through a freeze.
    pub fn record_mut(&mut self, key: &str) -> Result<&mut Record> {
        match self.position(key).map(|i| &mut self.entries[i].1) {
            Some(Value::Record(r)) => Ok(r),
            _ => Err(Error::NotFound(s!(key))),
        }
    }

    pub fn has(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Insert or overwrite `key`, keeping its original position on overwrite.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        let key = key.into();
        if self.frozen {
            return Err(Error::ReadOnly(key));
        }
        let value = value.into();
        let nested = matches!(value, Value::Record(_));
        self.freezable.retain(|k| *k != key);
        if nested {
            self.freezable.push(key.clone());
        }
        match self.position(&key) {
            Some(i) => self.entries[i].1 = value,
            None => self.entries.push((key, value)),
        }
        Ok(())
    }

    pub fn remove(&mut self, key: &str) -> Result<Option<Value>> {
        if self.frozen {
            return Err(Error::ReadOnly(s!(key)));
        }
        self.freezable.retain(|k| k != key);
        Ok(self.position(key).map(|i| self.entries.remove(i).1))
    }

    /// One-way. Cascades through every nested record.
    pub fn freeze(&mut self) {
        self.frozen = true;
        for key in &self.freezable {
            if let Some(Value::Record(r)) = self
                .entries
                .iter_mut()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v)
            {
                r.freeze();
            }
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Insertion order. Each call starts from the first entry again.
    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.entries.iter() }
    }

    /// Opaque, order-preserving text form. Restored records are not frozen.
    pub fn persist(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn restore(persisted: &str) -> Result<Record> {
        Ok(serde_json::from_str(persisted)?)
    }

    /// Replace the contents with a persisted record.
    pub fn restore_into(&mut self, persisted: &str) -> Result<()> {
        if self.frozen {
            return Err(Error::ReadOnly(s!("*")));
        }
        *self = Record::restore(persisted)?;
        Ok(())
    }

    /// Plain JSON for display/export. The label is emitted as `name`.
    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::with_capacity(self.entries.len());
        for (k, v) in &self.entries {
            let key = if k == LABEL_KEY { "name" } else { k.as_str() };
            map.insert(s!(key), v.to_json());
        }
        serde_json::Value::Object(map)
    }
}

/// Equal when keys, order and values match; the frozen flag is not compared.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().unwrap_or(""))
    }
}

impl Index<&str> for Record {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        match self.get(key) {
            Ok(v) => v,
            Err(_) => panic!("no key '{key}' in record"),
        }
    }
}

pub struct Iter<'a> {
    inner: slice::Iter<'a, (String, Value)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = Record;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of record entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Record, A::Error> {
                let mut record = Record::new();
                while let Some((key, value)) = access.next_entry::<String, Value>()? {
                    record.set(key, value).map_err(de::Error::custom)?;
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}
