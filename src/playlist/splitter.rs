//! Splits a playlist with hour headers into one playlist per hour.
//!
//! Every entry below a `##` header ends up in the playlist of that
//! header's hour, named after the original playlist and the hour,
//! e.g. `morning01.m3u` for entries below `##Hour 01` in
//! `morning.m3u`. The headers themselves are dropped.
use std::ffi::OsString;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::Level;

use super::hours::HourFiles;
use super::lines::{Line, Lines};
use crate::hour::HourLabel;
use crate::paths::{hour_file_name, playlist_stem};
use crate::playlist::{Error, Result};
use crate::report::Reporter;

/// What a splitting pass produced.
#[derive(Debug, Default, PartialEq)]
pub struct SplitSummary {
    /// Hours in the order they were first seen, with the number
    /// of entries written for them.
    hours: Vec<(HourLabel, usize)>,
}

impl SplitSummary {
    pub fn hours(&self) -> &[(HourLabel, usize)] {
        &self.hours
    }

    pub fn total_lines(&self) -> usize {
        self.hours.iter().map(|(_, lines)| lines).sum()
    }

    fn hour_index(&mut self, hour: &HourLabel) -> usize {
        match self.hours.iter().position(|(seen, _)| seen == hour) {
            Some(idx) => idx,
            None => {
                self.hours.push((hour.clone(), 0));
                self.hours.len() - 1
            }
        }
    }
}

/// Hour that entries currently go to.
struct CurrentHour {
    file_name: OsString,
    summary_idx: usize,
}

/// Reads the playlist at the given path and distributes its entries
/// over hourly playlists in the given output directory.
///
/// Entries before the first hour header are an error. In that case
/// no hourly playlists are created for this playlist.
pub fn split_playlist(
    playlist: &Path,
    output_directory: &Path,
    reporter: &dyn Reporter,
) -> Result<SplitSummary> {
    let stem = playlist_stem(playlist).map_err(|err| Error::reading(playlist, err))?;
    let file = File::open(playlist).map_err(|err| Error::reading(playlist, err))?;

    let mut hour_files = HourFiles::new(output_directory);
    let mut summary = SplitSummary::default();
    let mut current: Option<CurrentHour> = None;

    for line in Lines::new(BufReader::new(file)) {
        let line = line.map_err(|err| Error::reading(playlist, err))?;
        match Line::classify(&line) {
            Line::Marker(hour) => {
                reporter.report(Level::Info, format_args!("processing hour: {}", hour));
                let file_name = hour_file_name(stem, hour.as_str());
                reporter.report(
                    Level::Debug,
                    format_args!("writing to: {}", file_name.to_string_lossy()),
                );
                current = Some(CurrentHour {
                    file_name,
                    summary_idx: summary.hour_index(&hour),
                });
            }
            Line::Content(entry) => {
                let hour = current
                    .as_ref()
                    .ok_or_else(|| Error::MissingMarker(playlist.into()))?;
                hour_files.append(&hour.file_name, entry)?;
                summary.hours[hour.summary_idx].1 += 1;
            }
        }
    }

    hour_files.finish()?;
    Ok(summary)
}
