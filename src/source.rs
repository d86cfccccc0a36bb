//! Source buffers, the parse cursor and the location resolver.
//!
//! A [`SourceData`] owns the text of one parse session, the single cursor
//! every parser reads and advances, and a one-line cache that keeps
//! offset-to-line resolution close to O(distance moved) for the usual pattern
//! of reporting errors at growing offsets.

use std::sync::Arc;

use miette::NamedSource;
use serde::{Deserialize, Serialize};

// ============================================================================
// SOURCE BUFFER
// ============================================================================

/// Immutable name and content of one parse input.
///
/// The content is reference counted so several sessions (for example one per
/// thread) can parse the same text without copying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBuffer {
    pub name: String,
    pub content: Arc<str>,
}

impl SourceBuffer {
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Convert to a `NamedSource` for use with miette error reporting.
    pub fn to_named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.name.clone(), self.content.to_string())
    }
}

// ============================================================================
// LOCATIONS
// ============================================================================

/// Human readable description of a byte offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// 1-based line number.
    pub line: usize,
    /// 1-based byte column inside the line.
    pub column: usize,
    /// The line's content without its terminators.
    pub line_text: String,
}

/// Start offset and number of the most recently resolved line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineCache {
    start: usize,
    number: usize,
}

impl Default for LineCache {
    fn default() -> Self {
        Self {
            start: 0,
            number: 1,
        }
    }
}

// ============================================================================
// SOURCE DATA
// ============================================================================

/// The buffer of a parse session together with its cursor and line cache.
#[derive(Debug, Clone)]
pub struct SourceData {
    buffer: SourceBuffer,
    pub(crate) pos: usize,
    cache: LineCache,
}

impl SourceData {
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        Self::from_buffer(SourceBuffer::new(name, content))
    }

    pub fn from_buffer(buffer: SourceBuffer) -> Self {
        Self {
            buffer,
            pos: 0,
            cache: LineCache::default(),
        }
    }

    pub fn buffer(&self) -> &SourceBuffer {
        &self.buffer
    }

    pub fn content(&self) -> &str {
        &self.buffer.content
    }

    /// The current cursor offset.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The unparsed rest of the content, starting at the cursor.
    pub fn remaining(&self) -> &str {
        self.buffer.content.get(self.pos..).unwrap_or_default()
    }

    /// Resolves a byte offset to its line, column and line text.
    ///
    /// Offsets past the end of the content resolve to the end. Any call order
    /// gives the same answer for the same offset; the cache only decides
    /// where the search starts.
    pub fn resolve(&mut self, offset: usize) -> Location {
        let content = Arc::clone(&self.buffer.content);
        if content.is_empty() {
            return Location {
                line: 1,
                column: 1,
                line_text: String::new(),
            };
        }
        let offset = offset.min(content.len());

        if offset >= self.cache.start {
            return self.resolve_forward(&content, offset);
        }
        // `offset` lies before the cached line, so `cache.start >= 1` and the
        // newline ending the previous line sits at `cache.start - 1`.
        let boundary = self.cache.start - 1;
        if offset <= boundary - offset {
            self.cache = LineCache::default();
            self.resolve_forward(&content, offset)
        } else {
            self.resolve_backward(&content, offset)
        }
    }

    fn resolve_forward(&mut self, content: &str, offset: usize) -> Location {
        let LineCache {
            mut start,
            mut number,
        } = self.cache;
        loop {
            let end = content[start..]
                .find('\n')
                .map_or(content.len(), |i| start + i);
            if offset <= end {
                return self.hit(content, start, end, number, offset);
            }
            start = end + 1;
            number += 1;
        }
    }

    fn resolve_backward(&mut self, content: &str, offset: usize) -> Location {
        let LineCache {
            start: cached_start,
            mut number,
        } = self.cache;
        let mut end = cached_start - 1;
        loop {
            let start = content[..end].rfind('\n').map_or(0, |i| i + 1);
            number -= 1;
            if start <= offset {
                return self.hit(content, start, end, number, offset);
            }
            end = start - 1;
        }
    }

    fn hit(
        &mut self,
        content: &str,
        start: usize,
        end: usize,
        number: usize,
        offset: usize,
    ) -> Location {
        self.cache = LineCache { start, number };
        Location {
            line: number,
            column: offset - start + 1,
            line_text: content[start..end].to_string(),
        }
    }

    /// Renders the location prefix used by every feedback message.
    pub fn describe(&mut self, offset: usize) -> String {
        let location = self.resolve(offset);
        format!(
            "File '{}', line {}, column {}:\n{}\n",
            self.buffer.name, location.line, location.column, location.line_text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "content\nline2\nline3\nand4\n";

    fn primed() -> SourceData {
        let mut src = SourceData::new("file1", TEXT);
        src.pos = 15;
        src.cache = LineCache {
            start: 14,
            number: 3,
        };
        src
    }

    #[test]
    fn test_resolve_on_cached_line() {
        let mut src = primed();
        let loc = src.resolve(14);
        assert_eq!((loc.line, loc.column), (3, 1));
        assert_eq!(loc.line_text, "line3");
    }

    #[test]
    fn test_resolve_resets_when_closer_to_start() {
        let mut src = primed();
        let loc = src.resolve(0);
        assert_eq!((loc.line, loc.column), (1, 1));
        assert_eq!(loc.line_text, "content");
        assert_eq!(src.cache, LineCache::default());
    }

    #[test]
    fn test_resolve_backward_from_cache() {
        let mut src = primed();
        // the newline ending "line2" belongs to line 2
        let loc = src.resolve(13);
        assert_eq!((loc.line, loc.column), (2, 6));
        assert_eq!(loc.line_text, "line2");
        assert_eq!(
            src.cache,
            LineCache {
                start: 8,
                number: 2
            }
        );
    }

    #[test]
    fn test_resolve_last_character() {
        let mut src = primed();
        let loc = src.resolve(TEXT.len() - 1);
        assert_eq!((loc.line, loc.column), (4, 5));
        assert_eq!(loc.line_text, "and4");
    }

    #[test]
    fn test_resolve_past_end_is_clamped() {
        let mut src = SourceData::new("file1", "ab");
        let loc = src.resolve(99);
        assert_eq!((loc.line, loc.column), (1, 3));
    }

    #[test]
    fn test_resolve_empty_content() {
        let mut src = SourceData::new("empty", "");
        let loc = src.resolve(0);
        assert_eq!((loc.line, loc.column), (1, 1));
        assert!(loc.line_text.is_empty());
        assert_eq!(src.describe(0), "File 'empty', line 1, column 1:\n\n");
    }

    #[test]
    fn test_describe_format() {
        let mut src = primed();
        assert_eq!(
            src.describe(14),
            "File 'file1', line 3, column 1:\nline3\n"
        );
    }
}
