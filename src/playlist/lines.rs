//! Reads a playlist line by line and tells hour headers apart
//! from the entries below them.
use std::io::{BufRead, Result};

use crate::hour::HourLabel;

/// Iterates over the lines of a playlist, keeping the line
/// terminators so that entries can be copied byte for byte.
pub struct Lines<R>(R);

impl<R: BufRead> Lines<R> {
    pub fn new(source: R) -> Lines<R> {
        Lines(source)
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        match self.0.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(Ok(line)),
            Err(err) => Some(Err(err)),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Line<'a> {
    /// Header that starts a new hour, never copied.
    Marker(HourLabel),
    /// Anything else, including blank lines and `#EXTINF` comments.
    Content(&'a str),
}

impl<'a> Line<'a> {
    pub fn classify(line: &'a str) -> Line<'a> {
        match HourLabel::from_marker(line) {
            Some(hour) => Line::Marker(hour),
            None => Line::Content(line),
        }
    }
}
