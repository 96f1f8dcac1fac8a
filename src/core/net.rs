// src/core/net.rs
// Page retrieval. Blocking; one request per call.

use crate::config::Config;
use crate::error::{Error, Result};

/// Anything that turns a URL into an HTML body.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String>;
}

impl<F> Fetch for F
where
    F: Fn(&str) -> Result<String>,
{
    fn fetch(&self, url: &str) -> Result<String> {
        self(url)
    }
}

pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build();
        Self { agent }
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        logd!(url, "GET");
        let resp = self.agent.get(url).call().map_err(|e| match e {
            ureq::Error::Status(code, _) => Error::Request(format!("HTTP {code} from {url}")),
            ureq::Error::Transport(t) => Error::Request(format!("{url}: {t}")),
        })?;
        resp.into_string()
            .map_err(|e| Error::Request(format!("{url}: {e}")))
    }
}
