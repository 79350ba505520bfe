// src/verse.rs
use serde::{Deserialize, Serialize};

/// One verse as returned by the passage API.
///
/// The live service sends `chapter` and `verse` as strings; older dumps of
/// the same data use plain integers. Accept either and write back whichever
/// came in, so a refetch against unchanged data is byte-identical.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Verse {
    pub bookname: String,
    pub chapter: NumOrStr,
    pub verse: NumOrStr,
    pub text: String,

    /// Anything else the API sends (e.g. the `title` heading on some psalm
    /// verses) rides along untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumOrStr {
    Num(u64),
    Str(String),
}

impl From<&str> for NumOrStr {
    fn from(v: &str) -> Self {
        NumOrStr::Str(s!(v))
    }
}

impl From<u64> for NumOrStr {
    fn from(v: u64) -> Self {
        NumOrStr::Num(v)
    }
}
