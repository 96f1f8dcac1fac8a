// src/specs/mod.rs
//! # Page specs
//!
//! One module per remote page. Each spec knows *where the ground truth lives
//! in the HTML* and how to turn it into a `Record` tree.
//!
//! ## What lives here
//! - **Pure extraction** from an already parsed `Document`; no network.
//! - **Column walkers** for the statistics page (`weapons`, `records`,
//!   `skills`). These take owned `Cell` lists, so they can be fed by hand.
//!
//! ## What does **not** live here
//! - Fetching, memoization, and the choice to reuse one document for two
//!   specs. That belongs to `profile::Profile`.
//! - Freezing. Specs return mutable records; the views freeze them.
//!
//! ## Conventions & invariants
//! - Every selector, sentinel and offset comes from `config::consts`.
//! - Both pages are checked for the unknown-player sentinel before anything
//!   else is read.
//! - A node the layout promises but the page lacks is `Error::Structure`,
//!   never a panic and never a silently partial record.

pub mod records;
pub mod skills;
pub mod statistics;
pub mod summary;
pub mod weapons;

use crate::config::Config;
use crate::config::consts::{SEL_PLAYER_NAME, UNKNOWN_PLAYER};
use crate::core::Document;
use crate::core::html::text_of;
use crate::error::{Error, Result};
use crate::record::Record;
use crate::record::view::RecordView;

/// A profile page: where it lives and how to read it.
pub trait PageSpec {
    type View: RecordView;

    fn url(&self, config: &Config, nickname: &str) -> String;

    fn extract(&self, doc: &Document) -> Result<Record>;
}

/// Player name as printed on the page, or `no such player`.
pub fn ensure_known_player(doc: &Document) -> Result<String> {
    let name = text_of(doc.first(SEL_PLAYER_NAME)?).trim().to_string();
    if name == UNKNOWN_PLAYER {
        return Err(Error::no_such_player());
    }
    Ok(name)
}

/// `part / whole * 100`, or 0 when `whole` is 0.
pub fn percent(part: i64, whole: i64) -> f64 {
    if whole > 0 {
        part as f64 * 100.0 / whole as f64
    } else {
        0.0
    }
}
