//! Logging capability handed to the splitting code, so it does not
//! have to know where its messages end up.
use log::Level;
use std::fmt::Arguments;

pub trait Reporter {
    fn report(&self, level: Level, message: Arguments<'_>);
}

/// Forwards everything to the `log` facade, which is set up once
/// in `main`.
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, level: Level, message: Arguments<'_>) {
        log::log!(level, "{}", message)
    }
}

#[cfg(test)]
pub use recording::RecordingReporter;
