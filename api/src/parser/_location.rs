// this module is transparently re-exported by its parent `parser`
use std::fmt;

/// A position in a parsed stream.
///
/// Lines and columns start at 1 (columns are counted in characters),
/// the byte offset starts at 0.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Location {
    /// Line number (starting at 1)
    pub line: usize,
    /// Column number, in characters (starting at 1)
    pub col: usize,
    /// Byte offset (starting at 0)
    pub offset: usize,
}

impl Location {
    /// The location of the first character of a stream.
    pub const START: Location = Location {
        line: 1,
        col: 1,
        offset: 0,
    };

    /// Build a location from its line-column position and byte offset.
    pub fn new(line: usize, col: usize, offset: usize) -> Self {
        Location { line, col, offset }
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::START
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// This trait is meant to be implemented by errors raised by parsers.
pub trait WithLocation {
    /// Where in the stream this error occurred.
    fn location(&self) -> Location;
}
