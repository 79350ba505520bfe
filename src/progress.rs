// src/progress.rs
/// Lightweight progress reporting for the long-running fetch loop.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of chapters to request.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one chapter was fetched and parsed.
    fn item_done(&mut self, _passage: &str, _verses: usize) {}

    /// Called when one chapter failed. The run continues regardless.
    fn item_failed(&mut self, _passage: &str, _cause: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
