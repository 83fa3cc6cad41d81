//! Source location spans.
//!
//! This module provides types for tracking source locations
//! in template files, enabling precise error reporting.

use std::path::PathBuf;

use crate::template::SourceLocation;

/// A source location span representing a range in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// File path.
    pub file: PathBuf,
    /// Starting line (1-indexed).
    pub start_line: usize,
    /// Starting column (1-indexed).
    pub start_col: usize,
    /// Ending line (1-indexed).
    pub end_line: usize,
    /// Ending column (1-indexed).
    pub end_col: usize,
}

impl Span {
    /// Create a span with precise positions.
    pub fn new(
        file: impl Into<PathBuf>,
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
    ) -> Self {
        Self {
            file: file.into(),
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// Create a span from a parser location.
    ///
    /// Parser columns are 0-based; span columns are 1-based. Columns at
    /// `usize::MAX` stay there.
    pub fn from_location(file: impl Into<PathBuf>, loc: &SourceLocation) -> Self {
        Self::new(
            file,
            loc.start.line,
            loc.start.column.saturating_add(1),
            loc.end.line,
            loc.end.column.saturating_add(1),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_new_constructor() {
        let span = Span::new("App.vue", 10, 5, 10, 20);

        assert_eq!(span.start_line, 10);
        assert_eq!(span.start_col, 5);
        assert_eq!(span.end_col, 20);
    }

    #[test]
    fn span_from_location_shifts_columns() {
        let loc = SourceLocation::new((4, 0), (4, 12));
        let span = Span::from_location("App.vue", &loc);

        assert_eq!(span.start_line, 4);
        assert_eq!(span.start_col, 1);
        assert_eq!(span.end_line, 4);
        assert_eq!(span.end_col, 13);
    }

    #[test]
    fn span_from_location_saturates_huge_columns() {
        let loc = SourceLocation::new((1, usize::MAX), (2, usize::MAX));
        let span = Span::from_location("App.vue", &loc);

        assert_eq!(span.start_col, usize::MAX);
        assert_eq!(span.end_line, 2);
        assert_eq!(span.end_col, usize::MAX);
    }

    #[test]
    fn span_file_path() {
        let span = Span::new("src/components/App.vue", 1, 1, 1, 1);

        assert_eq!(span.file, PathBuf::from("src/components/App.vue"));
    }
}
