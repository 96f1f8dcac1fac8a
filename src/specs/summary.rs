// src/specs/summary.rs
//! Summary page: identity, vitals, favorites, bio, clan.
//!
//! Output fields, in order: `nickname`, `flag` (labelled, + `image`),
//! `accountType`, `model` (labelled, + `image`), `avatar`, `registered`,
//! `timePlayed` {`ranked`, `unranked`}, `lastGame`, `wins`, `losses`,
//! `quits`, `frags`, `deaths`, `hits`, `shots`, `accuracy`, `favorites`
//! {`arena`, `gametype`, `weapon`} (each labelled, + `image`), `bio`,
//! `clan` ({`name`, `id`} or null).
//!
//! The statistics page carries the same blocks, so `extract` also runs
//! against a statistics document when the profile wants both from one fetch.

use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use scraper::ElementRef;

use super::{PageSpec, ensure_known_player, percent};
use crate::config::Config;
use crate::config::consts::*;
use crate::core::Document;
use crate::core::html::{attr, children_named, text_of};
use crate::core::sanitize::{alnum_lower, parse_count, skip_chars, split_pair};
use crate::error::{Error, Result};
use crate::record::view::Summary;
use crate::record::{Record, Value};

static MODEL_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"url\(([^)]+?)\)").unwrap());

static TIME_PLAYED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^Ranked Time: (?:(\d+?)\.)?(?:(\d+?):)?(\d+?):(\d+)",
        r" Unranked Time: (?:(\d+?)\.)?(?:(\d+?):)?(\d+?):(\d+)$",
    ))
    .unwrap()
});

pub struct SummarySpec;

impl PageSpec for SummarySpec {
    type View = Summary;

    fn url(&self, config: &Config, nickname: &str) -> String {
        config.summary_url_for(nickname)
    }

    fn extract(&self, doc: &Document) -> Result<Record> {
        extract(doc)
    }
}

pub fn extract(doc: &Document) -> Result<Record> {
    let nickname = ensure_known_player(doc)?;
    logd!(%nickname, "parsing summary");

    let mut data = Record::new();
    data.set("nickname", nickname)?;
    data.set("flag", flag(doc)?)?;
    data.set("accountType", account_type(doc)?)?;

    let (model, avatar) = model(doc)?;
    data.set("model", model)?;
    data.set("avatar", avatar)?;

    let vitals = doc.select(SEL_VITALS_P)?;
    data.set("registered", registered(doc, &vitals)?)?;

    let (time_played, last_game) = time_played(&vitals)?;
    data.set("timePlayed", time_played)?;
    data.set("lastGame", last_game)?;

    counters(doc, &vitals, &mut data)?;

    data.set("favorites", favorites(doc)?)?;
    data.set("bio", bio(doc)?)?;
    data.set("clan", clan(doc)?)?;

    Ok(data)
}

fn flag(doc: &Document) -> Result<Record> {
    let img = doc.first(SEL_FLAG)?;
    let mut flag = Record::labelled(attr(img, "title")?);
    flag.set("image", attr(img, "src")?)?;
    Ok(flag)
}

fn account_type(doc: &Document) -> Result<String> {
    let div = doc.first(SEL_ACCOUNT)?;
    Ok(s!(skip_chars(attr(div, "class")?, ACCOUNT_CLASS_PREFIX_LEN)))
}

fn model(doc: &Document) -> Result<(Record, String)> {
    let imagery = doc.first(SEL_IMAGERY)?;
    let div = children_named(imagery, "div")
        .next()
        .ok_or_else(|| Error::structure("model block has no <div>"))?;
    let style = attr(div, "style")?;
    let url = MODEL_URL
        .captures(style)
        .map(|c| c[1].to_string())
        .ok_or_else(|| Error::structure(format!("model style '{style}'")))?;

    let avatar = url.replace(MODEL_PATH_SEGMENT, AVATAR_PATH_SEGMENT);
    let mut model = Record::labelled(attr(div, "title")?);
    model.set("image", url)?;
    Ok((model, avatar))
}

fn registered(doc: &Document, vitals: &[ElementRef<'_>]) -> Result<NaiveDateTime> {
    let first = vitals
        .first()
        .ok_or_else(|| Error::structure("vitals block has no <p>"))?;
    let texts = doc.texts_followed_by(std::slice::from_ref(first), SEL_BR)?;
    let text = texts
        .get(VITALS_REGISTERED)
        .map(|t| t.trim())
        .ok_or_else(|| Error::structure("registration date text"))?;

    REGISTERED_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| Error::structure(format!("registration date '{text}'")))
}

/// `n`-th tooltip span inside a vitals paragraph (first paragraph that has one).
fn tooltip<'a>(vitals: &[ElementRef<'a>], n: usize) -> Result<ElementRef<'a>> {
    vitals
        .iter()
        .find_map(|p| {
            children_named(*p, "span")
                .filter(|s| s.value().attr("class") == Some(TOOLTIP_CLASS))
                .nth(n)
        })
        .ok_or_else(|| Error::structure(format!("vitals tooltip #{}", n + 1)))
}

fn time_played(vitals: &[ElementRef<'_>]) -> Result<(Record, Value)> {
    let label = vitals
        .iter()
        .find_map(|p| children_named(*p, "b").nth(1))
        .map(text_of);

    let mut played = Record::new();
    if label.as_deref() != Some(TIME_PLAYED_LABEL) {
        // never played online
        played.set("ranked", Duration::ZERO)?;
        played.set("unranked", Duration::ZERO)?;
        return Ok((played, Value::Null));
    }

    let title = attr(tooltip(vitals, 0)?, "title")?;
    let caps = TIME_PLAYED
        .captures(title)
        .ok_or_else(|| Error::structure(format!("time played '{title}'")))?;
    played.set("ranked", duration(&caps, 1))?;
    played.set("unranked", duration(&caps, 5))?;

    let title = attr(tooltip(vitals, 1)?, "title")?;
    let last = NaiveDateTime::parse_from_str(title.trim(), LAST_GAME_FORMAT)
        .map_err(|e| Error::structure(format!("last game '{title}': {e}")))?;
    Ok((played, Value::Instant(last)))
}

/// Days, hours, minutes, seconds from four capture groups starting at `first`.
fn duration(caps: &Captures<'_>, first: usize) -> Duration {
    let part = |i: usize| -> u64 {
        caps.get(first + i).and_then(|m| m.as_str().parse().ok()).unwrap_or(0)
    };
    Duration::from_secs(part(0) * 86_400 + part(1) * 3_600 + part(2) * 60 + part(3))
}

fn counters(doc: &Document, vitals: &[ElementRef<'_>], data: &mut Record) -> Result<()> {
    let texts = doc.texts_followed_by(vitals, SEL_BR)?;
    let at = |i: usize| -> Result<&str> {
        texts
            .get(i)
            .map(String::as_str)
            .ok_or_else(|| Error::structure(format!("vitals text #{i}")))
    };

    data.set("wins", parse_count(at(VITALS_WINS)?))?;

    let (losses, quits) = split_pair(at(VITALS_LOSSES_QUITS)?)?;
    data.set("losses", losses)?;
    data.set("quits", quits)?;

    let (frags, deaths) = split_pair(at(VITALS_FRAGS_DEATHS)?)?;
    data.set("frags", frags)?;
    data.set("deaths", deaths)?;

    let (hits, shots) = split_pair(at(VITALS_HITS_SHOTS)?)?;
    data.set("hits", hits)?;
    data.set("shots", shots)?;
    data.set("accuracy", percent(hits, shots))?;
    Ok(())
}

fn favorites(doc: &Document) -> Result<Record> {
    let mut faves = Record::new();

    let arena_ps = doc.select(SEL_FAVE_ARENA)?;
    let texts = doc.texts_followed_by(&arena_ps, SEL_CLEAR)?;
    let name = texts
        .get(FAVE_ARENA_TEXT)
        .map(|t| t.trim())
        .ok_or_else(|| Error::structure("favorite arena text"))?;
    let mut arena = Record::labelled(name);
    let image = (name != NONE).then(|| ARENA_IMAGE_URL.replace("{arena}", &alnum_lower(name)));
    arena.set("image", image)?;
    faves.set("arena", arena)?;

    let blocks = doc.select(SEL_FAVES)?;
    faves.set("gametype", favorite(doc, blocks.first(), "gametype", &GAMETYPE_IMAGE_REPLACE)?)?;
    faves.set("weapon", favorite(doc, blocks.get(1), "weapon", &WEAPON_IMAGE_REPLACE)?)?;
    Ok(faves)
}

fn favorite(
    doc: &Document,
    block: Option<&ElementRef<'_>>,
    what: &str,
    replace: &[(&str, &str)],
) -> Result<Record> {
    let block = block.ok_or_else(|| Error::structure(format!("favorite {what} block")))?;
    let texts = doc.texts_followed_by(std::slice::from_ref(block), SEL_CLEAR)?;
    let name = texts
        .get(FAVE_TEXT)
        .map(|t| t.trim())
        .ok_or_else(|| Error::structure(format!("favorite {what} text")))?;

    let mut fave = Record::labelled(name);
    if name == NONE {
        fave.set("image", Value::Null)?;
        return Ok(fave);
    }
    let img = children_named(*block, "img")
        .next()
        .ok_or_else(|| Error::structure(format!("favorite {what} has no <img>")))?;
    let image = replace
        .iter()
        .fold(s!(attr(img, "src")?), |acc, (from, to)| acc.replace(from, to));
    fave.set("image", image)?;
    Ok(fave)
}

fn bio(doc: &Document) -> Result<String> {
    Ok(doc.find(SEL_BIO)?.map(|p| text_of(p).trim().to_string()).unwrap_or_default())
}

fn clan(doc: &Document) -> Result<Value> {
    let Some(a) = doc.find(SEL_CLAN)? else {
        return Ok(Value::Null);
    };
    let href = attr(a, "href")?;
    let id = skip_chars(href, CLAN_HREF_PREFIX_LEN);
    let id: i64 = id
        .parse()
        .map_err(|_| Error::structure(format!("clan link '{href}'")))?;

    let mut clan = Record::new();
    clan.set("name", text_of(a).trim())?;
    clan.set("id", id)?;
    Ok(Value::Record(clan))
}
