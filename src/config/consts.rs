// src/config/consts.rs

// Net config
pub const DEX_BASE_URL: &str = "https://www.smogon.com";
pub const DEFAULT_DEX_GEN: &str = "sm";
pub const USER_AGENT: &str = concat!("pkm_autofill/", env!("CARGO_PKG_VERSION"));
pub const FETCH_TIMEOUT_SECS: u64 = 20;
pub const CONTRIBUTIONS_FORUM: &str =
    "https://www.smogon.com/forums/forums/contributions-corrections.388/";

// Local files
pub const LOG_FILE: &str = ".store/debug.log";
pub const STRUCTURED_SIDECAR: &str = "trainerdata.json";
pub const LINE_SIDECAR: &str = "trainerdata.txt";

// Fallback trainer when no sidecar exists
pub const DEFAULT_TID: u16 = 23456;
pub const DEFAULT_SID: u16 = 34567;
pub const DEFAULT_OT: &str = "Archit";
pub const DEFAULT_COUNTRY: &str = "Canada";
pub const DEFAULT_SUBREGION: &str = "Alberta";
pub const DEFAULT_CONSOLE_REGION: &str = "Americas (NA/SA)";

// Sun/Moon/Ultra Sun/Ultra Moon: the 6+4 digit ID display is native there
pub const WIDE_ID_GAMES: [u32; 4] = [30, 31, 32, 33];

// Shiny when (tid ^ sid ^ pid_hi ^ pid_lo) < this (Gen 6+)
pub const SHINY_XOR_THRESHOLD: u16 = 16;
