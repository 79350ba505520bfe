// src/params.rs
use std::path::PathBuf;
use std::time::Duration;

// Net config
pub const BASE_URL: &str = "https://labs.bible.org/api/";
pub const USER_AGENT: &str = "bible_fetch/0.3";
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// One request every REQUEST_PAUSE_SECS, no exceptions.
// The passage API has no published rate limit; stay well clear of it.
pub const REQUEST_PAUSE_SECS: u64 = 2; // be polite

// Export
pub const DEFAULT_OUT_FILE: &str = "net_bible.json";

#[derive(Clone, Debug)]
pub struct Params {
    pub out: PathBuf,        // output file path
    pub pause: Duration,     // delay between chapter requests
    pub list_books: bool,    // print the catalog then exit
}

impl Params {
    pub fn new() -> Self {
        Self {
            out: PathBuf::from(DEFAULT_OUT_FILE),
            pause: Duration::from_secs(REQUEST_PAUSE_SECS),
            list_books: false,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
