pub mod implementations;
pub use implementations::*;

/// Sink for the lines a run shows to its user.
///
/// Diagnostics go through `log`; only user-facing output goes here.
pub trait Console: Send + Sync {
    fn log(&self, line: &str);
}
