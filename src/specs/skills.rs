// src/specs/skills.rs
// Skill bars: key icons and bar divs are two parallel lists joined by index.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::consts::{SKILL_CLASS_PREFIX_LEN, SKILL_LEVEL_STEP};
use crate::core::Cell;
use crate::core::sanitize::skip_chars;
use crate::error::{Error, Result};
use crate::record::{Record, Value};

static BAR_HEIGHT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^height: (\d+?)%").unwrap());

pub fn parse_skills(keys: &[Cell], bars: &[Cell]) -> Result<Record> {
    let mut skills = Record::new();
    for (index, key) in keys.iter().enumerate() {
        let offset = skip_chars(key.require("class")?, SKILL_CLASS_PREFIX_LEN);
        let bar = bars
            .get(index)
            .ok_or_else(|| Error::structure(format!("no bar for skill '{offset}'")))?;
        let style = bar.require("style")?;
        let pct: u32 = BAR_HEIGHT
            .captures(style)
            .and_then(|c| c[1].parse().ok())
            .ok_or_else(|| Error::structure(format!("skill bar style '{style}'")))?;

        let mut skill = Record::new();
        skill.set("name", key.require("title")?)?;
        skill.set("image", key.require("src")?)?;
        skill.set("level", level(pct))?;
        skills.set(offset, skill)?;
    }
    logd!(count = skills.len(), "skills parsed");
    Ok(skills)
}

/// 0/25/50/75/100 % → 0..=4; off-step heights keep their fraction.
fn level(pct: u32) -> Value {
    if pct % SKILL_LEVEL_STEP == 0 {
        Value::Int((pct / SKILL_LEVEL_STEP) as i64)
    } else {
        Value::Float(pct as f64 / SKILL_LEVEL_STEP as f64)
    }
}
