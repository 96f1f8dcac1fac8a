// src/lib.rs
//! Quake Live profile scraper.
//!
//! ```no_run
//! use ql_scrape::{Client, Config};
//!
//! let client = Client::new(Config::default());
//! let profile = client.profile("rat")?;
//! let stats = profile.statistics()?;
//! println!("{}", stats.get_record("weapons")?.len());
//! println!("{}", profile.summary()?.get_int("wins")?); // no second request
//! # Ok::<(), ql_scrape::Error>(())
//! ```

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod profile;
pub mod progress;
pub mod record;
pub mod scrape;
pub mod specs;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use error::{Error, Result};
pub use profile::Profile;
pub use record::view::{RecordView, Statistics, Summary};
pub use record::{Record, Value};
pub use scrape::{Client, Sections, collect_profiles};
