// src/record/view.rs
//
// Read-only faces over a frozen record.
//
// - Summary: identity, vitals, favorites, clan.
// - Statistics: weapons, records table, skills.
//
// Both are built only from an extracted record and freeze it on the way in;
// nothing can write through them afterwards.

use std::ops::Deref;

use super::{Record, Value};
use crate::error::{Error, Result};

pub trait RecordView: Deref<Target = Record> + Sized {
    /// Wrap an extracted record, freezing it.
    fn from_record(record: Record) -> Self;

    fn record(&self) -> &Record {
        self
    }

    /// Rebuild a view from `Record::persist` output.
    fn restore(persisted: &str) -> Result<Self> {
        Ok(Self::from_record(Record::restore(persisted)?))
    }

    /// Views are read only; every write is refused.
    fn set(&self, key: &str, _value: impl Into<Value>) -> Result<()> {
        Err(Error::ReadOnly(s!(key)))
    }

    fn remove(&self, key: &str) -> Result<Option<Value>> {
        Err(Error::ReadOnly(s!(key)))
    }
}

macro_rules! record_view {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name(Record);

        impl RecordView for $name {
            fn from_record(mut record: Record) -> Self {
                record.freeze();
                Self(record)
            }
        }

        impl Deref for $name {
            type Target = Record;

            fn deref(&self) -> &Record {
                &self.0
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = (&'a str, &'a Value);
            type IntoIter = super::Iter<'a>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }
    };
}

record_view! {
    /// Profile summary: `nickname`, `flag`, `accountType`, `model`, `avatar`,
    /// `registered`, `timePlayed`, `lastGame`, the vital counters, `accuracy`,
    /// `favorites`, `bio` and `clan`.
    Summary
}

record_view! {
    /// Profile statistics: `weapons`, `records` (unless disabled) and `skills`.
    Statistics
}

impl Summary {
    pub fn nickname(&self) -> Option<&str> {
        self.0.get("nickname").ok().and_then(Value::as_str)
    }
}
