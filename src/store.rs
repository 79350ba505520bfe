// src/store.rs

use std::{error::Error, fs, path::Path};

use crate::verse::Verse;

/// Serialize the full verse list and write it in one shot, overwriting any
/// existing file. Pretty-printed, two-space indent; non-ASCII stays literal.
///
/// Nothing is persisted before this point: the whole run accumulates in
/// memory and lands here or not at all.
// TODO: flush per book as the run goes; a crash at chapter 900 of 1189
// currently loses everything fetched so far.
pub fn write_verses(path: &Path, verses: &[Verse]) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(verses)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
