mod err;
mod hours;
mod lines;
mod splitter;

pub use err::*;
pub use splitter::*;
