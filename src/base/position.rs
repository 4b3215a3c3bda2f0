/// Line/column positions handed to consumers of the token stream.
///
/// Lines are 1-based, columns are 0-based and counted in chars. Tokens,
/// trivia and diagnostics all use this convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

/// A line/column range, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Start of a file: line 1, column 0
impl Default for Position {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a span from line/column coordinates
    pub fn from_coords(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start: Position::new(start_line, start_col),
            end: Position::new(end_line, end_col),
        }
    }

    /// Check if a position falls within this span
    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position < self.end
    }

    /// Number of lines touched by this span
    pub fn line_count(&self) -> u32 {
        self.end.line - self.start.line + 1
    }
}
