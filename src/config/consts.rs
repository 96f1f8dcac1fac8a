// src/config/consts.rs
//
// Everything the extractors compare against or slice by lives here, so a
// markup change on the site is a one-line update.

// Net config
pub const BASE_URL: &str = "http://www.quakelive.com";
pub const SUMMARY_URL: &str = "{base}/profile/summary/{nickname}";
pub const STATISTICS_URL: &str = "{base}/profile/statistics/{nickname}";
pub const TIMEOUT_SECS: u64 = 15;

// Batch scraping
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms

// Sentinels (compared verbatim)
pub const UNKNOWN_PLAYER: &str = "Unknown Player";
pub const NONE: &str = "None";
pub const TIME_PLAYED_LABEL: &str = "Time Played:";

// Account types (class suffix on the profile container)
pub const ACCOUNT_STANDARD: &str = "premium_status_0";
pub const ACCOUNT_PREMIUM: &str = "premium_status_1";
pub const ACCOUNT_PRO: &str = "premium_status_2";

// Summary page
pub const SEL_PLAYER_NAME: &str = "div#prf_player_name";
pub const SEL_FLAG: &str = r#"img[class="playerflag"]"#;
pub const SEL_ACCOUNT: &str = "div#qlv_profileTopLeft";
pub const ACCOUNT_CLASS_PREFIX_LEN: usize = 8;
pub const SEL_IMAGERY: &str = r#"div[class="prf_imagery"]"#;
pub const MODEL_PATH_SEGMENT: &str = "/body_md/";
pub const AVATAR_PATH_SEGMENT: &str = "/icon_xl/";
pub const SEL_VITALS_P: &str = r#"div[class="prf_vitals"] > p"#;
pub const TOOLTIP_CLASS: &str = "text_tooltip";
pub const SEL_BR: &str = "br";
pub const REGISTERED_FORMATS: [&str; 2] = ["%b. %d, %Y", "%b %d, %Y"];
pub const LAST_GAME_FORMAT: &str = "%m/%d/%Y %I:%M %p";

/// Position of the registration date among the first paragraph's text nodes.
pub const VITALS_REGISTERED: usize = 1;
/// Positions of the counters among all vitals text nodes.
pub const VITALS_WINS: usize = 5;
pub const VITALS_LOSSES_QUITS: usize = 6;
pub const VITALS_FRAGS_DEATHS: usize = 7;
pub const VITALS_HITS_SHOTS: usize = 8;

pub const SEL_FAVE_ARENA: &str = r#"p[class="prf_faves"]"#;
pub const SEL_FAVES: &str = r#"p[class="fivepxv prf_faves"]"#;
pub const SEL_CLEAR: &str = r#"div[class="cl"]"#;
pub const FAVE_ARENA_TEXT: usize = 1;
pub const FAVE_TEXT: usize = 1;
pub const ARENA_IMAGE_URL: &str =
    "http://cdn.quakelive.com/web/2012121800/images/levelshots/lg/{arena}_v2012121800.0.jpg";
pub const GAMETYPE_IMAGE_REPLACE: [(&str, &str); 2] = [("/xsm/", "/sm/"), (".gif", ".png")];
pub const WEAPON_IMAGE_REPLACE: [(&str, &str); 2] = [("/sm/", "/md/"), (".gif", ".png")];

pub const SEL_BIO: &str = r#"div[class="prf_bio"] > p"#;
pub const SEL_CLAN: &str = r#"a[class="clan"]"#;
pub const CLAN_HREF_PREFIX_LEN: usize = 16;

// Statistics page: weapon columns
pub const SEL_COL_WEAPON: &str = r#"div[class="col_weapon"]"#;
pub const SEL_COL_FRAGS: &str = r#"div[class="col_frags"]"#;
pub const SEL_COL_ACCURACY: &str = r#"div[class="col_accuracy"]"#;
pub const SEL_COL_USAGE: &str = r#"div[class="col_usage"]"#;
pub const ACCURACY_HEADER: &str = "Accuracy";
pub const NOT_APPLICABLE: &str = "N/A";
pub const USAGE_HEADER: &str = "Use";
/// The first weapon has no accuracy column.
pub const ACCURACY_FIRST_WEAPON: usize = 1;

// Statistics page: records table
pub const SEL_RECORD_COLUMNS: &str = r#"div[class="prf_record"] > div > div"#;
pub const RECORD_CLASS_PREFIX: &str = "col_st_";
pub const RECORD_GAMETYPE: &str = "col_st_gametype";
pub const RECORD_VIEW: &str = "col_st_view";

// Statistics page: skills
pub const SEL_SKILL_KEYS: &str = r#"div[class="keys"] > img"#;
pub const SEL_SKILL_BARS: &str = r#"div[class="bars"] > div"#;
pub const SKILL_CLASS_PREFIX_LEN: usize = 8;
pub const SKILL_LEVEL_STEP: u32 = 25;

// Store
pub const STORE_DIR: &str = ".store";
