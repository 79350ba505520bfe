// src/fetch.rs
//
// The sequential fetch-and-aggregate loop. One request in flight at any
// time, fixed pause between requests, per-chapter errors collected instead
// of raised. The loop itself never fails; only writing the output can.

use std::{thread, time::Duration};

use tracing::error;

use crate::catalog::total_chapters;
use crate::net::FetchError;
use crate::progress::Progress;
use crate::verse::Verse;

/// Where chapter data comes from. The live implementation talks HTTP
/// (net::HttpSource); tests substitute scripted sources.
pub trait ChapterSource {
    fn get_chapter(&self, passage: &str) -> Result<Vec<Verse>, FetchError>;
}

/// One chapter that produced no verses, and why.
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorRecord {
    pub passage: String,
    pub cause: String,
}

/// Everything one run produced, in traversal order.
pub struct FetchSummary {
    pub verses: Vec<Verse>,
    pub errors: Vec<ErrorRecord>,
    pub chapters_fetched: usize,
    pub chapters_total: usize,
}

/// Walk the catalog book by book, chapter by chapter, and accumulate
/// whatever the source returns. Verse order within a chapter is whatever
/// the source sent; across chapters it is catalog traversal order.
///
/// The pause is skipped after the final chapter — the upstream behavior of
/// sleeping once more before exiting bought nothing.
pub fn collect_verses(
    source: &dyn ChapterSource,
    books: &[(&str, u32)],
    pause: Duration,
    mut progress: Option<&mut dyn Progress>,
) -> FetchSummary {
    let total = total_chapters(books) as usize;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
    }

    let mut verses: Vec<Verse> = Vec::new();
    let mut errors: Vec<ErrorRecord> = Vec::new();
    let mut fetched = 0usize;
    let mut remaining = total;

    for &(book, chapters) in books {
        for chapter in 1..=chapters {
            let passage = format!("{book} {chapter}");

            // An empty array is a 2xx with no usable content; fold it into
            // the same shape-error path the source uses for undecodable
            // bodies, so stub sources get the check too.
            let outcome = match source.get_chapter(&passage) {
                Ok(vs) if vs.is_empty() => Err(FetchError::Shape(s!("[]"))),
                other => other,
            };

            match outcome {
                Ok(vs) => {
                    fetched += 1;
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(&passage, vs.len());
                    }
                    verses.extend(vs);
                }
                Err(e) => {
                    let cause = e.to_string();
                    error!(passage = %passage, cause = %cause, "chapter fetch failed");
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(&passage, &cause);
                    }
                    errors.push(ErrorRecord { passage, cause });
                }
            }

            remaining -= 1;
            if remaining > 0 && !pause.is_zero() {
                thread::sleep(pause); // be polite
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    FetchSummary {
        verses,
        errors,
        chapters_fetched: fetched,
        chapters_total: total,
    }
}
