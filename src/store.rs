// src/store.rs
// Extracted records on disk, one JSON file per player and kind.
// Not a page cache: nothing here is consulted before a fetch.

use std::{fs, path::{Path, PathBuf}};

use crate::config::consts::STORE_DIR;
use crate::error::Result;
use crate::record::Record;

pub fn default_dir() -> PathBuf {
    PathBuf::from(STORE_DIR)
}

/// `<dir>/<nickname>.<kind>.json`, nickname lower-cased.
pub fn record_path(dir: &Path, nickname: &str, kind: &str) -> PathBuf {
    dir.join(format!("{}.{kind}.json", nickname.to_lowercase()))
}

pub fn save_record(dir: &Path, nickname: &str, kind: &str, record: &Record) -> Result<PathBuf> {
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir)?;
    }
    let path = record_path(dir, nickname, kind);
    fs::write(&path, record.persist()?)?;
    logd!(path = %path.display(), "record saved");
    Ok(path)
}

/// Restored records come back writable.
pub fn load_record(dir: &Path, nickname: &str, kind: &str) -> Result<Record> {
    let text = fs::read_to_string(record_path(dir, nickname, kind))?;
    Record::restore(&text)
}
