// src/config/options.rs
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    /// `{base}` and `{nickname}` are substituted.
    pub summary_url: String,
    pub statistics_url: String,
    /// The reduced page revision carries no records table.
    pub include_records_table: bool,
    pub timeout: Duration,
    pub user_agent: String,
    pub request_pause: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            summary_url: s!(SUMMARY_URL),
            statistics_url: s!(STATISTICS_URL),
            include_records_table: true,
            timeout: Duration::from_secs(TIMEOUT_SECS),
            user_agent: format!("ql_scrape/{}", env!("CARGO_PKG_VERSION")),
            request_pause: Duration::from_millis(REQUEST_PAUSE_MS),
        }
    }
}

impl Config {
    pub fn with_base_url(mut self, base: impl Into<String>) -> Self {
        self.base_url = base.into();
        self
    }

    pub fn with_records_table(mut self, include: bool) -> Self {
        self.include_records_table = include;
        self
    }

    pub fn summary_url_for(&self, nickname: &str) -> String {
        self.expand(&self.summary_url, nickname)
    }

    pub fn statistics_url_for(&self, nickname: &str) -> String {
        self.expand(&self.statistics_url, nickname)
    }

    fn expand(&self, template: &str, nickname: &str) -> String {
        template
            .replace("{base}", self.base_url.trim_end_matches('/'))
            .replace("{nickname}", nickname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_urls() {
        let c = Config::default();
        assert_eq!(c.summary_url_for("rapha"), "http://www.quakelive.com/profile/summary/rapha");
        assert_eq!(c.statistics_url_for("rapha"), "http://www.quakelive.com/profile/statistics/rapha");
    }

    #[test]
    fn base_url_override_drops_trailing_slash() {
        let c = Config::default().with_base_url("http://127.0.0.1:8080/");
        assert_eq!(c.summary_url_for("cypher"), "http://127.0.0.1:8080/profile/summary/cypher");
    }

    #[test]
    fn templates_are_overridable() {
        let mut c = Config::default();
        c.statistics_url = s!("{base}/stats?name={nickname}");
        assert_eq!(c.statistics_url_for("toxjq"), "http://www.quakelive.com/stats?name=toxjq");
    }
}
