// src/specs/records.rs
//! Per-gametype records table.
//!
//! The table is one flat run of column `div`s. A row has no element of its
//! own: it starts at a `col_st_gametype` column (which carries the gametype
//! icon) and ends at a `col_st_view` column. A gametype column without an
//! icon is the end of the table.
//!
//! `completeperc` and `winperc` are computed from fields already collected
//! for the row, so they must come after `played`, `finished` and `wins`.

use once_cell::sync::Lazy;
use regex::Regex;

use super::percent;
use crate::config::consts::{RECORD_CLASS_PREFIX, RECORD_GAMETYPE, RECORD_VIEW};
use crate::core::Cell;
use crate::core::sanitize::parse_count;
use crate::error::{Error, Result};
use crate::record::Record;

static RECORD_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"/xsm/(.+?)_").unwrap());

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum State {
    Idle,
    /// Filling the row stored under this key.
    InRecord(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    End,
}

pub struct RecordsTable {
    records: Record,
    state: State,
}

impl Default for RecordsTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordsTable {
    pub fn new() -> Self {
        Self { records: Record::new(), state: State::Idle }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn feed(&mut self, col: &Cell) -> Result<Step> {
        let text = col.text.trim();
        let Some(class) = col.class() else {
            return Ok(Step::Continue);
        };

        if class == RECORD_GAMETYPE {
            let Some(src) = col.image.as_deref() else {
                return Ok(Step::End);
            };
            let key = RECORD_KEY
                .captures(src)
                .map(|c| c[1].to_string())
                .ok_or_else(|| Error::structure(format!("gametype icon '{src}'")))?;
            let mut row = Record::new();
            row.set("image", src)?;
            row.set("name", text)?;
            self.records.set(key.clone(), row)?;
            self.state = State::InRecord(key);
            return Ok(Step::Continue);
        }

        if class == RECORD_VIEW {
            self.state = State::Idle;
            return Ok(Step::Continue);
        }

        let State::InRecord(key) = &self.state else {
            return Ok(Step::Continue);
        };
        let field = class
            .strip_prefix(RECORD_CLASS_PREFIX)
            .ok_or_else(|| Error::structure(format!("record column class '{class}'")))?;
        let row = self.records.record_mut(key)?;
        match field {
            "gametype" => {}
            "completeperc" => {
                let v = percent(row.get_int("finished")?, row.get_int("played")?);
                row.set(field, v)?;
            }
            "winperc" => {
                let v = percent(row.get_int("wins")?, row.get_int("played")?);
                row.set(field, v)?;
            }
            _ => row.set(field, parse_count(text))?,
        }
        Ok(Step::Continue)
    }

    pub fn finish(self) -> Record {
        self.records
    }
}

/// Walk the column run; rows keyed by the gametype slug from the icon URL.
pub fn parse_records_table(columns: &[Cell]) -> Result<Record> {
    let mut table = RecordsTable::new();
    for col in columns {
        if table.feed(col)? == Step::End {
            break;
        }
    }
    let records = table.finish();
    logd!(rows = records.len(), "records table parsed");
    Ok(records)
}
