//! Source spans and line/column mapping.

use serde::{Deserialize, Serialize};

/// Half-open byte range `[start, end)` into a source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Build a span from a `usize` byte range, saturating at `u32::MAX`.
    #[must_use]
    pub fn from_range(range: std::ops::Range<usize>) -> Self {
        let clamp = |value: usize| u32::try_from(value).unwrap_or(u32::MAX);
        Self::new(clamp(range.start), clamp(range.end))
    }

    #[must_use]
    pub const fn len(self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Whether `other` lies entirely inside this span.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Slice the source text covered by this span. Out-of-range or
    /// non-boundary spans yield an empty string.
    #[must_use]
    pub fn source_text(self, source: &str) -> &str {
        source
            .get(self.start as usize..self.end as usize)
            .unwrap_or_default()
    }
}

/// 1-based line and column. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

/// Precomputed line starts for mapping byte offsets to [`Position`]s.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<u32>,
}

impl LineIndex {
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .match_indices('\n')
                .map(|(offset, _)| u32::try_from(offset + 1).unwrap_or(u32::MAX)),
        );
        Self { line_starts }
    }

    /// Map a byte offset to a position. Offsets past the end clamp to the
    /// last line.
    #[must_use]
    pub fn position(&self, source: &str, offset: u32) -> Position {
        let line_index = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        let line_start = self.line_starts[line_index] as usize;
        let end = (offset as usize).min(source.len());
        let column = source
            .get(line_start..end)
            .map_or(0, |prefix| prefix.chars().count());

        Position {
            line: u32::try_from(line_index + 1).unwrap_or(u32::MAX),
            column: u32::try_from(column + 1).unwrap_or(u32::MAX),
        }
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn maps_offsets_to_positions() {
        let source = "const a = 1;\nconst b = 2;\n";
        let index = LineIndex::new(source);

        assert_eq!(index.position(source, 0), Position { line: 1, column: 1 });
        assert_eq!(index.position(source, 6), Position { line: 1, column: 7 });
        assert_eq!(index.position(source, 13), Position { line: 2, column: 1 });
        assert_eq!(index.position(source, 19), Position { line: 2, column: 7 });
        assert_eq!(index.line_count(), 3);
    }

    #[test]
    fn columns_count_characters() {
        let source = "const é = <div />;";
        let index = LineIndex::new(source);
        let offset = u32::try_from(source.find('=').unwrap()).unwrap();
        assert_eq!(index.position(source, offset), Position { line: 1, column: 9 });
    }

    #[test]
    fn span_helpers() {
        let span = Span::new(2, 6);
        assert_eq!(span.len(), 4);
        assert!(span.contains(Span::new(3, 5)));
        assert!(!span.contains(Span::new(1, 5)));
        assert_eq!(span.source_text("abcdefgh"), "cdef");
        assert_eq!(Span::new(4, 40).source_text("abc"), "");
    }
}
