// tests/profile.rs
mod common;

use std::time::Duration;

use common::{offline_client, SUMMARY};
use ql_scrape::config::consts::{ACCOUNT_PREMIUM, ACCOUNT_STANDARD, ARENA_IMAGE_URL};
use ql_scrape::core::Document;
use ql_scrape::{Config, Error, Record, RecordView, Statistics, Summary, Value, rec};

const CDN: &str = "http://cdn.quakelive.com/web/2012121800/images";

#[test]
fn summary_page_is_fully_extracted() {
    let (client, requests) = offline_client(Config::default());
    let profile = client.profile("rat").unwrap();
    let s = profile.summary().unwrap();

    assert_eq!(requests.borrow().as_slice(), ["http://www.quakelive.com/profile/summary/rat"]);
    assert_eq!(
        s.keys().collect::<Vec<_>>(),
        [
            "nickname", "flag", "accountType", "model", "avatar", "registered", "timePlayed", "lastGame",
            "wins", "losses", "quits", "frags", "deaths", "hits", "shots", "accuracy", "favorites", "bio",
            "clan",
        ]
    );

    assert_eq!(s.get_str("nickname").unwrap(), "rat");
    assert_eq!(s.get_str("flag").unwrap(), "Sweden");
    assert_eq!(
        s.get_record("flag").unwrap().get_str("image").unwrap(),
        format!("{CDN}/flags/se_v2012121800.0.gif")
    );
    assert_eq!(s.get_str("accountType").unwrap(), ACCOUNT_PREMIUM);

    let model = s.get_record("model").unwrap();
    assert_eq!(model.label(), Some("Sarge"));
    assert_eq!(model.get_str("image").unwrap(), format!("{CDN}/players/body_md/sarge_default.png"));
    assert_eq!(s.get_str("avatar").unwrap(), format!("{CDN}/players/icon_xl/sarge_default.png"));

    assert_eq!(s["registered"].to_string(), "2010-03-02 00:00:00");
    assert_eq!(s["lastGame"].to_string(), "2012-10-19 21:15:00");
    let played = s.get_record("timePlayed").unwrap();
    assert_eq!(played["ranked"].as_duration(), Some(Duration::from_secs(93_784)));
    assert_eq!(played["unranked"].as_duration(), Some(Duration::from_secs(306)));

    assert_eq!(s.get_int("wins").unwrap(), 1_234);
    assert_eq!(s.get_int("losses").unwrap(), 500);
    assert_eq!(s.get_int("quits").unwrap(), 12);
    assert_eq!(s.get_int("frags").unwrap(), 20_000);
    assert_eq!(s.get_int("deaths").unwrap(), 18_000);
    assert_eq!(s.get_int("hits").unwrap(), 100_000);
    assert_eq!(s.get_int("shots").unwrap(), 400_000);
    assert_eq!(s["accuracy"], Value::Float(25.0));

    let faves = s.get_record("favorites").unwrap();
    let arena = faves.get_record("arena").unwrap();
    assert_eq!(arena.label(), Some("Campgrounds"));
    assert_eq!(arena.get_str("image").unwrap(), ARENA_IMAGE_URL.replace("{arena}", "campgrounds"));
    let gametype = faves.get_record("gametype").unwrap();
    assert_eq!(gametype.label(), Some("Clan Arena"));
    assert_eq!(gametype.get_str("image").unwrap(), format!("{CDN}/gametypes/sm/ca_v2012121800.0.png"));
    let weapon = faves.get_record("weapon").unwrap();
    assert_eq!(weapon.label(), Some("Rocket Launcher"));
    assert_eq!(weapon.get_str("image").unwrap(), format!("{CDN}/weapons/md/rl_v2012121800.0.png"));

    assert_eq!(s.get_str("bio").unwrap(), "frag or be fragged");
    let clan = s.get_record("clan").unwrap();
    assert_eq!(clan.get_str("name").unwrap(), "Team Fnatic");
    assert_eq!(clan.get_int("id").unwrap(), 4521);
}

#[test]
fn never_played_online_has_zero_time_and_no_last_game() {
    let (client, _) = offline_client(Config::default());
    let profile = client.profile("newguy").unwrap();
    let s = profile.summary().unwrap();

    let played = s.get_record("timePlayed").unwrap();
    assert_eq!(played["ranked"].as_duration(), Some(Duration::ZERO));
    assert_eq!(played["unranked"].as_duration(), Some(Duration::ZERO));
    assert!(s["lastGame"].is_null());
    assert_eq!(s["accuracy"], Value::Float(0.0));
    assert_eq!(s.get_str("accountType").unwrap(), ACCOUNT_STANDARD);

    let weapon = s.get_record("favorites").unwrap().get_record("weapon").unwrap();
    assert_eq!(weapon.label(), Some("None"));
    assert!(weapon["image"].is_null());
    assert_eq!(s.get_str("bio").unwrap(), "");
    assert!(s["clan"].is_null());
    assert_eq!(profile.nickname(), "NewGuy");
}

#[test]
fn statistics_page_is_fully_extracted() {
    let (client, _) = offline_client(Config::default());
    let profile = client.profile("rat").unwrap();
    let stats = profile.statistics().unwrap();
    assert_eq!(stats.keys().collect::<Vec<_>>(), ["weapons", "records", "skills"]);

    let weapons = stats.get_record("weapons").unwrap();
    assert_eq!(weapons.keys().collect::<Vec<_>>(), ["gauntlet", "machinegun", "rocketlauncher", "chaingun"]);
    let gauntlet = weapons.get_record("gauntlet").unwrap();
    assert_eq!(gauntlet.keys().collect::<Vec<_>>(), ["name", "frags", "use"]);
    let mg = weapons.get_record("machinegun").unwrap();
    assert_eq!(mg.get_str("name").unwrap(), "Machine Gun");
    assert_eq!(mg.get_int("frags").unwrap(), 3_210);
    assert_eq!(mg.get_int("hits").unwrap(), 40_000);
    assert_eq!(mg.get_int("shots").unwrap(), 160_000);
    assert_eq!(mg["accuracy"], Value::Float(25.0));
    assert_eq!(mg.get_int("use").unwrap(), 39);
    let rl = weapons.get_record("rocketlauncher").unwrap();
    assert_eq!(rl["accuracy"], Value::Float(40.0));
    assert!(!weapons.get_record("chaingun").unwrap().has("accuracy"));

    let records = stats.get_record("records").unwrap();
    assert_eq!(records.keys().collect::<Vec<_>>(), ["duel", "ca"]);
    let expected = rec! {
        "image" => format!("{CDN}/gametypes/xsm/duel_v2012121800.0.png"),
        "name" => "Duel",
        "played" => 10,
        "finished" => 8,
        "completeperc" => 80.0,
        "wins" => 6,
        "winperc" => 60.0,
    };
    assert_eq!(records.get_record("duel").unwrap(), &expected);
    let ca = records.get_record("ca").unwrap();
    assert_eq!(ca.get_int("played").unwrap(), 1_200);
    assert_eq!(ca["winperc"], Value::Float(0.0));

    let skills = stats.get_record("skills").unwrap();
    assert_eq!(skills.get_record("aim").unwrap()["level"], Value::Int(3));
    assert_eq!(skills.get_record("movement").unwrap()["level"], Value::Float(1.2));
}

#[test]
fn statistics_first_reuses_the_page_for_the_summary() {
    let (client, requests) = offline_client(Config::default());
    let profile = client.profile("RAT").unwrap();
    assert_eq!(profile.nickname(), "RAT");

    profile.statistics().unwrap();
    assert!(profile.is_summary_loaded());
    assert_eq!(profile.summary().unwrap().get_int("wins").unwrap(), 1_234);
    assert_eq!(profile.nickname(), "rat");

    profile.statistics().unwrap();
    assert_eq!(requests.borrow().as_slice(), ["http://www.quakelive.com/profile/statistics/RAT"]);
}

#[test]
fn views_are_memoized() {
    let (client, requests) = offline_client(Config::default());
    let profile = client.profile("rat").unwrap();
    let first = profile.summary().unwrap() as *const Summary;
    let second = profile.summary().unwrap() as *const Summary;
    assert_eq!(first, second);

    profile.statistics().unwrap();
    assert_eq!(
        requests.borrow().as_slice(),
        [
            "http://www.quakelive.com/profile/summary/rat",
            "http://www.quakelive.com/profile/statistics/rat",
        ]
    );
}

#[test]
fn unknown_player_is_a_request_error_for_both_pages() {
    let (client, _) = offline_client(Config::default());
    let profile = client.profile("nobody").unwrap();

    let err = profile.statistics().unwrap_err();
    assert!(matches!(err, Error::Request(ref m) if m == "no such player"), "{err}");
    let err = profile.summary().unwrap_err();
    assert!(matches!(err, Error::Request(ref m) if m == "no such player"), "{err}");
    assert!(!profile.is_summary_loaded());
    assert!(!profile.is_statistics_loaded());
}

#[test]
fn reused_document_still_checks_the_player() {
    let (client, _) = offline_client(Config::default());
    let profile = client.profile("rat").unwrap();
    let doc = Document::parse(common::UNKNOWN).unwrap();
    assert!(matches!(profile.summary_from(&doc), Err(Error::Request(_))));
}

#[test]
fn body_without_doctype_is_unable_to_fetch() {
    let (client, _) = offline_client(Config::default());
    let profile = client.profile("garbage").unwrap();
    let err = profile.summary().unwrap_err();
    assert!(matches!(err, Error::Request(ref m) if m == "unable to fetch data from server"));

    let profile = client.profile("offline").unwrap();
    assert!(matches!(profile.statistics(), Err(Error::Request(_))));
}

#[test]
fn reduced_variant_fetches_weapons_only() {
    let (client, requests) = offline_client(Config::default().with_records_table(false));
    let profile = client.profile("rat").unwrap();
    let stats = profile.statistics().unwrap();
    assert_eq!(stats.keys().collect::<Vec<_>>(), ["weapons"]);
    assert_eq!(profile.summary().unwrap().get_int("wins").unwrap(), 1_234);
    assert_eq!(requests.borrow().len(), 1);
}

#[test]
fn custom_base_url_is_used() {
    let (client, requests) = offline_client(Config::default().with_base_url("http://mirror.local/"));
    client.profile("rat").unwrap().summary().unwrap();
    assert_eq!(requests.borrow().as_slice(), ["http://mirror.local/profile/summary/rat"]);
}

#[test]
fn views_are_deeply_read_only() {
    let (client, _) = offline_client(Config::default());
    let profile = client.profile("rat").unwrap();
    let stats = profile.statistics().unwrap();

    assert!(matches!(stats.set("weapons", 1), Err(Error::ReadOnly(_))));
    assert!(matches!(stats.remove("records"), Err(Error::ReadOnly(_))));
    let mut weapons = stats.get_record("weapons").unwrap().clone();
    assert!(weapons.is_frozen());
    assert!(matches!(weapons.set("bfg", 1), Err(Error::ReadOnly(_))));
    assert!(matches!(stats.get("bfg"), Err(Error::NotFound(_))));
}

#[test]
fn views_survive_persist_and_restore() {
    let (client, _) = offline_client(Config::default());
    let profile = client.profile("rat").unwrap();

    let stats = profile.statistics().unwrap();
    let back = Statistics::restore(&stats.persist().unwrap()).unwrap();
    assert_eq!(&back, stats);
    assert!(back.is_frozen());

    let summary = profile.summary().unwrap();
    let plain = Record::restore(&summary.persist().unwrap()).unwrap();
    assert_eq!(&plain, summary.record());
    assert!(!plain.is_frozen());
    assert_eq!(
        plain.iter().map(|(k, _)| k).collect::<Vec<_>>(),
        summary.keys().collect::<Vec<_>>()
    );
}

#[test]
fn json_export_uses_plain_values() {
    let doc = Document::parse(SUMMARY).unwrap();
    let record = ql_scrape::specs::summary::extract(&doc).unwrap();
    let json = record.to_json();
    assert_eq!(json["flag"]["name"], "Sweden");
    assert_eq!(json["timePlayed"]["ranked"], 93_784);
    assert_eq!(json["registered"], "2010-03-02 00:00:00");
    assert_eq!(json["clan"]["id"], 4521);
    assert_eq!(json["favorites"]["weapon"]["name"], "Rocket Launcher");
}
