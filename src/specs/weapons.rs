// src/specs/weapons.rs
//! Weapon table.
//!
//! The page prints four columns (name, frags, accuracy, usage) as four
//! independent runs of `div`s with no row element around them. Each run has
//! its own filler cells, so every run is walked with its own cursor and the
//! values are joined by position against the weapon keys collected from the
//! name run.

use once_cell::sync::Lazy;
use regex::Regex;

use super::percent;
use crate::config::consts::*;
use crate::core::sanitize::{is_numeric, leading_int, parse_count, weapon_key};
use crate::core::{Cell, Document};
use crate::error::{Error, Result};
use crate::record::Record;

static HITS_SHOTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Hits: (.+?) Shots: (.+?)$").unwrap());

#[derive(Clone, Debug, Default)]
pub struct WeaponColumns {
    pub names: Vec<Cell>,
    pub frags: Vec<Cell>,
    pub accuracy: Vec<Cell>,
    pub usage: Vec<Cell>,
}

impl WeaponColumns {
    pub fn from_document(doc: &Document) -> Result<Self> {
        Ok(Self {
            names: doc.cells(SEL_COL_WEAPON)?,
            frags: doc.cells(SEL_COL_FRAGS)?,
            accuracy: doc.cells(SEL_COL_ACCURACY)?,
            usage: doc.cells(SEL_COL_USAGE)?,
        })
    }
}

/// Weapons keyed by normalized name, each `{name, frags, hits, shots,
/// accuracy, use}` (the first weapon has no accuracy fields).
pub fn parse_weapon_columns(cols: &WeaponColumns) -> Result<Record> {
    let mut weapons = Record::new();
    let mut offsets: Vec<String> = Vec::new();

    for cell in &cols.names {
        let name = cell.text.trim();
        if name.is_empty() {
            continue;
        }
        let key = weapon_key(name);
        let mut weapon = Record::new();
        weapon.set("name", name)?;
        weapons.set(key.clone(), weapon)?;
        offsets.push(key);
    }

    let mut wid = 0usize;
    for cell in &cols.frags {
        if !is_numeric(&cell.text) {
            continue;
        }
        weapon_at(&mut weapons, &offsets, wid, "frags")?.set("frags", parse_count(&cell.text))?;
        wid += 1;
    }

    let mut wid = ACCURACY_FIRST_WEAPON;
    for cell in &cols.accuracy {
        let text = cell.text.trim();
        if text == ACCURACY_HEADER || text == NOT_APPLICABLE {
            continue;
        }
        let title = cell.require("title")?;
        let caps = HITS_SHOTS
            .captures(title)
            .ok_or_else(|| Error::structure(format!("accuracy title '{title}'")))?;
        let hits = parse_count(&caps[1]);
        let shots = parse_count(&caps[2]);

        let weapon = weapon_at(&mut weapons, &offsets, wid, "accuracy")?;
        weapon.set("hits", hits)?;
        weapon.set("shots", shots)?;
        weapon.set("accuracy", percent(hits, shots))?;
        wid += 1;
    }

    let mut wid = 0usize;
    for cell in &cols.usage {
        if cell.text.trim() == USAGE_HEADER {
            continue;
        }
        let usage = leading_int(&cell.text.replace('%', ""));
        weapon_at(&mut weapons, &offsets, wid, "usage")?.set("use", usage)?;
        wid += 1;
    }

    logd!(count = offsets.len(), "weapons parsed");
    Ok(weapons)
}

fn weapon_at<'r>(weapons: &'r mut Record, offsets: &[String], wid: usize, column: &str) -> Result<&'r mut Record> {
    let key = offsets
        .get(wid)
        .ok_or_else(|| Error::structure(format!("more {column} cells than weapons ({})", offsets.len())))?;
    weapons.record_mut(key)
}
