// src/profile.rs
//! One player: a validated nickname plus lazily fetched, memoized views.
//!
//! The statistics page also carries the summary blocks. When statistics are
//! fetched first, the summary is read from that same document instead of
//! issuing a second request.

use once_cell::sync::Lazy;
use once_cell::unsync::OnceCell;
use regex::Regex;

use crate::core::Document;
use crate::error::{Error, Result};
use crate::record::view::{RecordView, Statistics, Summary};
use crate::scrape::Client;
use crate::specs::statistics::StatisticsSpec;
use crate::specs::summary::{self, SummarySpec};
use crate::specs::PageSpec;

static NICKNAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^[a-z0-9_]{2,15}$").unwrap());

pub struct Profile<'c> {
    client: &'c Client,
    nickname: String,
    summary: OnceCell<Summary>,
    statistics: OnceCell<Statistics>,
}

impl<'c> Profile<'c> {
    pub fn new(client: &'c Client, nickname: impl Into<String>) -> Result<Self> {
        let nickname = nickname.into();
        if !NICKNAME.is_match(&nickname) {
            return Err(Error::Validation(nickname));
        }
        Ok(Self {
            client,
            nickname,
            summary: OnceCell::new(),
            statistics: OnceCell::new(),
        })
    }

    /// The server's spelling once a summary is known, otherwise as given.
    pub fn nickname(&self) -> &str {
        self.summary
            .get()
            .and_then(Summary::nickname)
            .unwrap_or(&self.nickname)
    }

    pub fn summary(&self) -> Result<&Summary> {
        self.summary.get_or_try_init(|| {
            let doc = self.document(&SummarySpec)?;
            self.summary_from(&doc)
        })
    }

    pub fn statistics(&self) -> Result<&Statistics> {
        self.statistics.get_or_try_init(|| {
            let spec = StatisticsSpec::from_config(self.client.config());
            let doc = self.document(&spec)?;
            let stats = spec.extract(&doc)?;

            if self.summary.get().is_none() {
                let summary = self.summary_from(&doc)?;
                // Cell was empty a moment ago and nothing else can fill it.
                let _ = self.summary.set(summary);
            }
            Ok(Statistics::from_record(stats))
        })
    }

    /// Parse an already fetched page into a summary view without caching it.
    pub fn summary_from(&self, doc: &Document) -> Result<Summary> {
        Ok(Summary::from_record(summary::extract(doc)?))
    }

    pub fn is_summary_loaded(&self) -> bool {
        self.summary.get().is_some()
    }

    pub fn is_statistics_loaded(&self) -> bool {
        self.statistics.get().is_some()
    }

    fn document<S: PageSpec>(&self, spec: &S) -> Result<Document> {
        let url = spec.url(self.client.config(), &self.nickname);
        self.client.document(&url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn offline() -> Client {
        Client::with_fetcher(Config::default(), |url: &str| -> Result<String> {
            Err(Error::Request(format!("offline: {url}")))
        })
    }

    #[test]
    fn nickname_shape_is_checked_up_front() {
        let client = offline();
        for bad in ["a", "sixteen_chars_xx", "rat!", "", "two words"] {
            assert!(matches!(Profile::new(&client, bad), Err(Error::Validation(_))), "{bad}");
        }
        for good in ["ab", "RAT", "x_15_characters", "cooller"] {
            assert!(Profile::new(&client, good).is_ok(), "{good}");
        }
    }

    #[test]
    fn failed_fetch_caches_nothing() {
        let client = offline();
        let p = Profile::new(&client, "rat").unwrap();
        assert!(matches!(p.summary(), Err(Error::Request(_))));
        assert!(!p.is_summary_loaded());
        assert!(matches!(p.statistics(), Err(Error::Request(_))));
        assert!(!p.is_statistics_loaded());
        assert_eq!(p.nickname(), "rat");
    }
}
