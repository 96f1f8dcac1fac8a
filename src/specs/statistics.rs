// src/specs/statistics.rs
// Statistics page: weapons, then (full variant) the records table and skills.

use super::records::parse_records_table;
use super::skills::parse_skills;
use super::weapons::{WeaponColumns, parse_weapon_columns};
use super::{PageSpec, ensure_known_player};
use crate::config::Config;
use crate::config::consts::{SEL_RECORD_COLUMNS, SEL_SKILL_BARS, SEL_SKILL_KEYS};
use crate::core::Document;
use crate::error::Result;
use crate::record::Record;
use crate::record::view::Statistics;

#[derive(Clone, Copy, Debug)]
pub struct StatisticsSpec {
    /// Off: weapons only.
    pub include_records_table: bool,
}

impl StatisticsSpec {
    pub fn from_config(config: &Config) -> Self {
        Self { include_records_table: config.include_records_table }
    }
}

impl Default for StatisticsSpec {
    fn default() -> Self {
        Self { include_records_table: true }
    }
}

impl PageSpec for StatisticsSpec {
    type View = Statistics;

    fn url(&self, config: &Config, nickname: &str) -> String {
        config.statistics_url_for(nickname)
    }

    fn extract(&self, doc: &Document) -> Result<Record> {
        let nickname = ensure_known_player(doc)?;
        logd!(%nickname, records = self.include_records_table, "parsing statistics");

        let mut stats = Record::new();
        stats.set("weapons", parse_weapon_columns(&WeaponColumns::from_document(doc)?)?)?;

        if self.include_records_table {
            stats.set("records", parse_records_table(&doc.cells(SEL_RECORD_COLUMNS)?)?)?;
            let keys = doc.cells(SEL_SKILL_KEYS)?;
            let bars = doc.cells(SEL_SKILL_BARS)?;
            stats.set("skills", parse_skills(&keys, &bars)?)?;
        }
        Ok(stats)
    }
}
