// tests/common/mod.rs
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use ql_scrape::{Client, Config, Error, Result};

pub const SUMMARY: &str = include_str!("../fixtures/summary.html");
pub const STATISTICS: &str = include_str!("../fixtures/statistics.html");
pub const UNKNOWN: &str = include_str!("../fixtures/unknown.html");
pub const NEVER_PLAYED: &str = include_str!("../fixtures/never_played.html");

pub type Requests = Rc<RefCell<Vec<String>>>;

/// Serves the fixtures by URL and records every request made.
pub fn offline_client(config: Config) -> (Client, Requests) {
    let requests: Requests = Rc::default();
    let seen = Rc::clone(&requests);
    let client = Client::with_fetcher(config, move |url: &str| -> Result<String> {
        seen.borrow_mut().push(url.to_string());
        page_for(url)
    });
    (client, requests)
}

fn page_for(url: &str) -> Result<String> {
    let nick = url.rsplit('/').next().unwrap_or_default().to_lowercase();
    let body = match nick.as_str() {
        "nobody" => UNKNOWN,
        "newguy" => NEVER_PLAYED,
        "garbage" => "<html><body>502 Bad Gateway</body></html>",
        "offline" => return Err(Error::Request(format!("connection refused: {url}"))),
        _ if url.contains("/statistics/") => STATISTICS,
        _ => SUMMARY,
    };
    Ok(body.to_string())
}
