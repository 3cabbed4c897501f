use argh::FromArgs;
use std::path::PathBuf;

/// Split .m3u playlists with hour headers into one playlist per hour.
#[derive(FromArgs)]
pub struct Split {
    /// directory to search for .m3u playlists, defaults to the
    /// current directory
    #[argh(option, short = 'd', default = "PathBuf::from(\".\")")]
    pub directory: PathBuf,

    /// directory to write the hourly playlists to, by default every
    /// playlist gets its own directory named after the playlist
    #[argh(option, short = 'o')]
    pub output: Option<PathBuf>,

    /// log details about every processed hour
    #[argh(switch, short = 'v')]
    pub verbose: bool,
}
