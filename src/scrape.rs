// src/scrape.rs
use std::{thread, time::Duration};

use crate::{
    config::{Config, consts::JITTER_MS},
    core::{Document, Fetch, HttpFetcher},
    error::Result,
    profile::Profile,
    progress::Progress,
    record::{Record, view::RecordView},
};

/// Shared by every profile it creates: settings plus the page fetcher.
pub struct Client {
    config: Config,
    fetcher: Box<dyn Fetch>,
}

impl Client {
    pub fn new(config: Config) -> Self {
        let fetcher = HttpFetcher::new(&config);
        Self { config, fetcher: Box::new(fetcher) }
    }

    /// Swap the network for anything else that yields HTML (fixtures, caches).
    pub fn with_fetcher(config: Config, fetcher: impl Fetch + 'static) -> Self {
        Self { config, fetcher: Box::new(fetcher) }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn profile(&self, nickname: &str) -> Result<Profile<'_>> {
        Profile::new(self, nickname)
    }

    /// Fetch and parse one page. A body without a DOCTYPE counts as a failed fetch.
    pub fn document(&self, url: &str) -> Result<Document> {
        let body = self.fetcher.fetch(url).inspect_err(|e| loge!(url, error = %e, "fetch failed"))?;
        Document::parse(&body).inspect_err(|_| loge!(url, "response is not an HTML document"))
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Which views a batch pulls for each nickname.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Sections {
    Summary,
    Statistics,
    /// Statistics first, so the summary comes from the same page.
    #[default]
    Both,
}

/// One nickname's outcome in a batch.
#[derive(Debug)]
pub struct Collected {
    /// As spelled by the server when known.
    pub nickname: String,
    pub summary: Option<Record>,
    pub statistics: Option<Record>,
}

/// Scrape several players one after another with a polite pause in between.
/// A failing nickname is reported and skipped; it never aborts the batch.
pub fn collect_profiles(
    client: &Client,
    nicknames: &[String],
    sections: Sections,
    mut progress: Option<&mut dyn Progress>,
) -> Vec<Collected> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(nicknames.len());
        p.log("Fetching profiles…");
    }

    let mut out = Vec::with_capacity(nicknames.len());
    for (i, nick) in nicknames.iter().enumerate() {
        if i > 0 {
            thread::sleep(pause(client.config(), i));
        }
        match collect_one(client, nick, sections) {
            Ok(c) => {
                logf!(nickname = %c.nickname, "collected");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&c.nickname);
                }
                out.push(c);
            }
            Err(e) => {
                loge!(nickname = %nick, error = %e, "skipped");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(nick, &e);
                }
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    out
}

fn collect_one(client: &Client, nickname: &str, sections: Sections) -> Result<Collected> {
    let profile = client.profile(nickname)?;
    let statistics = match sections {
        Sections::Statistics | Sections::Both => Some(profile.statistics()?.record().clone()),
        Sections::Summary => None,
    };
    let summary = match sections {
        Sections::Summary | Sections::Both => Some(profile.summary()?.record().clone()),
        Sections::Statistics => None,
    };
    Ok(Collected { nickname: profile.nickname().to_string(), summary, statistics })
}

/// Base pause plus a jitter derived from the batch position.
fn pause(config: &Config, index: usize) -> Duration {
    let jitter = (index as u64).wrapping_mul(37) % (JITTER_MS + 1);
    config.request_pause + Duration::from_millis(jitter)
}

impl Collected {
    /// `{"summary": {...}, "statistics": {...}}` with absent parts left out.
    pub fn to_json(&self) -> serde_json::Value {
        let mut obj = serde_json::Map::new();
        if let Some(s) = &self.summary {
            obj.insert(s!("summary"), s.to_json());
        }
        if let Some(s) = &self.statistics {
            obj.insert(s!("statistics"), s.to_json());
        }
        serde_json::Value::Object(obj)
    }
}
