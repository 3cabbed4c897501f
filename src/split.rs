use std::path::{Path, PathBuf};

use crate::args::Split;
use crate::find::collect_playlists;
use crate::outdir::{self, recreate_directory};
use crate::paths::playlist_stem;
use crate::playlist::{self, split_playlist};
use crate::report::Reporter;

use log::Level;
use thiserror::Error;

type Result<T> = std::result::Result<T, Error>;

/// Splits every playlist in the input directory into hourly playlists.
///
/// Finding no playlists at all is not an error, only worth a warning.
pub fn split(opts: &Split, reporter: &dyn Reporter) -> Result<()> {
    reporter.report(
        Level::Info,
        format_args!("searching .m3u playlists in {}", opts.directory.display()),
    );
    let playlists = collect_playlists(&opts.directory).map_err(|source| Error::Discover {
        directory: opts.directory.clone(),
        source,
    })?;
    if playlists.is_empty() {
        reporter.report(
            Level::Warn,
            format_args!("no .m3u playlists found in {}", opts.directory.display()),
        );
        return Ok(());
    }

    // unlike per-playlist directories, a shared output directory is
    // cleared once only, clearing it per playlist would leave just the
    // hours of the last one
    if let Some(shared) = &opts.output {
        recreate_directory(shared, reporter)?;
    }

    for playlist in &playlists {
        reporter.report(
            Level::Info,
            format_args!("processing playlist {}", playlist.display()),
        );
        let output_dir = match &opts.output {
            Some(shared) => shared.clone(),
            None => {
                let dir = own_output_directory(playlist)?;
                recreate_directory(&dir, reporter)?;
                dir
            }
        };

        let summary = split_playlist(playlist, &output_dir, reporter)?;
        for (hour, lines) in summary.hours() {
            reporter.report(
                Level::Debug,
                format_args!("hour {}: {} entries", hour, lines),
            );
        }
        reporter.report(
            Level::Info,
            format_args!(
                "playlist {} processed, {} entries in {} hours",
                playlist.display(),
                summary.total_lines(),
                summary.hours().len()
            ),
        );
    }

    reporter.report(Level::Info, format_args!("all playlists processed"));
    Ok(())
}

/// Directory named after the playlist, relative to the working directory,
/// e.g. `morning` for `lists/morning.m3u`.
fn own_output_directory(playlist: &Path) -> playlist::Result<PathBuf> {
    let stem = playlist_stem(playlist).map_err(|err| playlist::Error::reading(playlist, err))?;
    Ok(PathBuf::from(stem))
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("could not search {directory} for playlists: {source}")]
    Discover {
        directory: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    OutputDirectory(#[from] outdir::Error),
    #[error(transparent)]
    Playlist(#[from] playlist::Error),
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::report::RecordingReporter;
    use std::fs::{create_dir, read_dir, read_to_string, write};
    use tempfile::TempDir;

    fn opts(directory: &Path, output: Option<&Path>) -> Split {
        Split {
            directory: directory.into(),
            output: output.map(Into::into),
            verbose: false,
        }
    }

    #[test]
    fn own_output_directory_is_relative_stem() {
        assert_eq!(
            own_output_directory(Path::new("lists/morning.m3u")).unwrap(),
            PathBuf::from("morning")
        );
    }

    #[test]
    fn no_playlists_is_only_a_warning() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("in");
        create_dir(&input).unwrap();
        write(input.join("notes.txt"), "##Hour 01\n").unwrap();
        let output = tmp.path().join("out");
        let reporter = RecordingReporter::default();

        split(&opts(&input, Some(&output)), &reporter).unwrap();

        assert!(!output.exists());
        assert_eq!(
            reporter.messages_at(Level::Warn),
            vec![format!("no .m3u playlists found in {}", input.display())]
        );
    }

    #[test]
    fn missing_input_directory_fails() {
        let tmp = TempDir::new().unwrap();
        let err = split(
            &opts(&tmp.path().join("missing"), None),
            &RecordingReporter::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Discover { .. }));
    }

    #[test]
    fn shared_output_collects_all_playlists() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("in");
        create_dir(&input).unwrap();
        write(input.join("morning.m3u"), "##Hour 01\ntrackA.mp3\n").unwrap();
        write(input.join("evening.m3u"), "##Hour 20\ntrackZ.mp3\n").unwrap();
        let output = tmp.path().join("out");
        create_dir(&output).unwrap();
        write(output.join("stale.m3u"), "old.mp3\n").unwrap();

        split(&opts(&input, Some(&output)), &RecordingReporter::default()).unwrap();

        let mut names: Vec<String> = read_dir(&output)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        assert_eq!(names, vec!["evening20.m3u", "morning01.m3u"]);
        assert_eq!(
            read_to_string(output.join("morning01.m3u")).unwrap(),
            "trackA.mp3\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_playlist_names_are_split() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("in");
        create_dir(&input).unwrap();
        write(
            input.join(OsStr::from_bytes(b"d\xffy.m3u")),
            "##Hour 05\ntrackA.mp3\n",
        )
        .unwrap();
        let output = tmp.path().join("out");

        split(&opts(&input, Some(&output)), &RecordingReporter::default()).unwrap();

        assert_eq!(
            read_to_string(output.join(OsStr::from_bytes(b"d\xffy05.m3u"))).unwrap(),
            "trackA.mp3\n"
        );
    }

    #[test]
    fn rerun_gives_identical_output() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("in");
        create_dir(&input).unwrap();
        write(
            input.join("morning.m3u"),
            "##Hour 01\ntrackA.mp3\n##Hour 02\ntrackB.mp3\ntrackC.mp3\n",
        )
        .unwrap();
        let output = tmp.path().join("out");
        let run = || {
            split(&opts(&input, Some(&output)), &RecordingReporter::default()).unwrap();
            (
                read_to_string(output.join("morning01.m3u")).unwrap(),
                read_to_string(output.join("morning02.m3u")).unwrap(),
            )
        };

        let first = run();
        let second = run();

        assert_eq!(first, second);
        assert_eq!(second.1, "trackB.mp3\ntrackC.mp3\n");
    }

    #[test]
    fn entry_before_header_aborts_run() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("in");
        create_dir(&input).unwrap();
        write(input.join("broken.m3u"), "trackA.mp3\n##Hour 01\n").unwrap();
        let output = tmp.path().join("out");

        let err = split(&opts(&input, Some(&output)), &RecordingReporter::default())
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Playlist(playlist::Error::MissingMarker(_))
        ));
        assert_eq!(read_dir(&output).unwrap().count(), 0);
    }
}
