// src/cli.rs
use std::{fs, path::PathBuf, time::Duration};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, bail};

use crate::{
    config::Config,
    error::Error,
    progress::Progress,
    scrape::{self, Client, Collected, Sections},
    store,
};

#[derive(Parser, Debug)]
#[command(name = "ql_scrape", version)]
#[command(about = "Scrape Quake Live player profiles into JSON", long_about = None)]
pub struct Args {
    /// Player nicknames (2-15 letters, digits or underscores)
    #[arg(required = true)]
    pub nicknames: Vec<String>,

    /// Summary page only
    #[arg(long, conflicts_with = "statistics")]
    pub summary: bool,

    /// Statistics page only
    #[arg(long)]
    pub statistics: bool,

    /// Weapons only; skip the records table and skills
    #[arg(long)]
    pub no_records: bool,

    /// Site root the profile URLs are built on
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Per-request timeout
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Write JSON here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Also save each record under DIR (default `.store`)
    #[arg(long, value_name = "DIR", num_args = 0..=1)]
    pub store: Option<Option<PathBuf>>,

    /// Append log lines to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    pub log: Option<PathBuf>,
}

impl Args {
    fn sections(&self) -> Sections {
        match (self.summary, self.statistics) {
            (true, _) => Sections::Summary,
            (_, true) => Sections::Statistics,
            _ => Sections::Both,
        }
    }

    fn config(&self) -> Config {
        let mut cfg = Config::default().with_records_table(!self.no_records);
        if let Some(url) = &self.base_url {
            cfg = cfg.with_base_url(url.as_str());
        }
        if let Some(secs) = self.timeout {
            cfg.timeout = Duration::from_secs(secs);
        }
        cfg
    }
}

/// Prints one line per player on stderr.
struct Console {
    done: usize,
    total: usize,
}

impl Progress for Console {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, nickname: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {nickname}", self.done, self.total);
    }

    fn item_failed(&mut self, nickname: &str, error: &Error) {
        self.done += 1;
        eprintln!("[{}/{}] {nickname}: {error}", self.done, self.total);
    }
}

pub fn run() -> Result<()> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> Result<()> {
    crate::log::init(args.log.as_deref()).wrap_err("cannot open log file")?;

    let client = Client::new(args.config());
    let mut console = Console { done: 0, total: 0 };
    let collected = scrape::collect_profiles(&client, &args.nicknames, args.sections(), Some(&mut console));
    if collected.is_empty() {
        bail!("no profile could be scraped");
    }

    if let Some(dir) = &args.store {
        let dir = dir.clone().unwrap_or_else(store::default_dir);
        save_all(&dir, &collected)?;
    }

    let json = to_json(&collected);
    let text = serde_json::to_string_pretty(&json)?;
    match &args.out {
        Some(path) => fs::write(path, text).wrap_err_with(|| format!("writing {}", path.display()))?,
        None => println!("{text}"),
    }
    Ok(())
}

fn save_all(dir: &std::path::Path, collected: &[Collected]) -> Result<()> {
    for c in collected {
        if let Some(r) = &c.summary {
            store::save_record(dir, &c.nickname, "summary", r)?;
        }
        if let Some(r) = &c.statistics {
            store::save_record(dir, &c.nickname, "statistics", r)?;
        }
    }
    Ok(())
}

/// `{ "<nickname>": { "summary": ..., "statistics": ... }, ... }`
fn to_json(collected: &[Collected]) -> serde_json::Value {
    let map = collected
        .iter()
        .map(|c| (c.nickname.clone(), c.to_json()))
        .collect::<serde_json::Map<_, _>>();
    serde_json::Value::Object(map)
}
