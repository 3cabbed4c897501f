use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

/// Lines starting with this token announce a new hour.
const MARKER_PREFIX: &str = "##";

/// The hour label is taken from this many characters at the end of
/// a marker line, line terminator included and counted as one
/// character no matter if it is `\n`, `\r\n` or `\r`.
const LABEL_LEN: usize = 3;

/// Label of an hour as announced by a marker line, e.g. `14` for
/// `##Show 14`.
///
/// The label is not checked to be a number, any characters at the
/// end of the marker line are taken as they are.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HourLabel(String);

impl HourLabel {
    /// Checks if the line is a marker line that starts a new hour.
    pub fn is_marker(line: &str) -> bool {
        line.starts_with(MARKER_PREFIX)
    }

    /// Takes the last three characters of the line as it was read,
    /// including its terminator, and strips surrounding whitespace
    /// and any line terminator characters from them.
    ///
    /// Returns `None` if the line is not a marker line.
    pub fn from_marker(line: &str) -> Option<HourLabel> {
        if !Self::is_marker(line) {
            return None;
        }

        let line = unify_terminator(line);
        let tail_start = line
            .char_indices()
            .rev()
            .nth(LABEL_LEN - 1)
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        let label = line[tail_start..]
            .trim()
            .chars()
            .filter(|c| *c != '\r' && *c != '\n')
            .collect();
        Some(HourLabel(label))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Replaces a trailing `\r\n` or `\r` with a single `\n`.
fn unify_terminator(line: &str) -> Cow<'_, str> {
    match line.strip_suffix("\r\n").or_else(|| line.strip_suffix('\r')) {
        Some(body) => Cow::Owned(format!("{}\n", body)),
        None => Cow::Borrowed(line),
    }
}

impl Display for HourLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
