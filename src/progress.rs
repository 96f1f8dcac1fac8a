// src/progress.rs
/// Lightweight progress reporting for batch scrapes.
/// Frontends (the CLI today) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of nicknames.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One profile was fetched and parsed.
    fn item_done(&mut self, _nickname: &str) {}

    /// One profile failed; the batch carries on.
    fn item_failed(&mut self, _nickname: &str, _error: &crate::error::Error) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
