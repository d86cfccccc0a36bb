//! Mutable state of one parse session.
//!
//! [`ParseData`] is threaded by exclusive borrow through every parser call.
//! It owns the source and its cursor, the "current result" slot that each
//! parser overwrites, and a stack of scratch frames, one per active
//! combinator invocation.

use std::error::Error;
use std::sync::Arc;

use miette::SourceSpan;

use crate::errors::FeedbackError;
use crate::feedback::{split_feedback, FeedbackItem, FeedbackKind};
use crate::result::{ParseResult, Value};
use crate::source::{SourceBuffer, SourceData};

/// Per-combinator-invocation record.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<T> {
    /// Cursor offset at which the combinator began.
    pub org_pos: usize,
    /// Child results collected so far.
    pub results: Vec<ParseResult<T>>,
}

/// All data needed during parsing.
///
/// Not meant to be shared between threads: parse the same text concurrently
/// by creating one session per thread from a shared [`SourceBuffer`].
#[derive(Debug, Clone)]
pub struct ParseData<T = ()> {
    pub source: SourceData,
    /// Result of the most recent parser call.
    pub result: ParseResult<T>,
    /// Child results of the combinator whose semantic hook is running.
    /// Cleared after every hook invocation.
    pub sub_results: Vec<ParseResult<T>>,
    frames: Vec<Frame<T>>,
}

impl<T> ParseData<T> {
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        Self::from_buffer(SourceBuffer::new(name, content))
    }

    pub fn from_buffer(buffer: SourceBuffer) -> Self {
        Self {
            source: SourceData::from_buffer(buffer),
            result: ParseResult::default(),
            sub_results: Vec::new(),
            frames: Vec::new(),
        }
    }

    // =====================
    // Cursor
    // =====================

    pub fn pos(&self) -> usize {
        self.source.pos
    }

    /// Moves the cursor, clamped to the end of the content.
    pub fn set_pos(&mut self, pos: usize) {
        self.source.pos = pos.min(self.source.content().len());
    }

    /// The unparsed rest of the content.
    pub fn remaining(&self) -> &str {
        self.source.remaining()
    }

    /// Resets the cursor to an earlier offset, usually after a semantic
    /// error. `None` means the start of the current result.
    pub fn reset_source_pos(&mut self, pos: Option<usize>) {
        let pos = pos.unwrap_or(self.result.pos);
        self.set_pos(pos);
    }

    /// The location prefix for an offset, as used in feedback messages.
    pub fn where_(&mut self, pos: usize) -> String {
        self.source.describe(pos)
    }

    // =====================
    // Result construction
    // =====================

    /// Records a match of `n` bytes at the cursor and advances past it.
    pub fn create_matched_result(&mut self, n: usize) {
        let start = self.source.pos;
        let end = (start + n).min(self.source.content().len());
        let text = self
            .source
            .content()
            .get(start..end)
            .unwrap_or_default()
            .to_string();
        self.result = ParseResult {
            pos: start,
            text,
            value: Value::None,
            err_pos: None,
            feedback: Vec::new(),
        };
        self.source.pos = end;
    }

    /// Records a failure `delta` bytes after the cursor without moving it.
    pub fn create_unmatched_result(&mut self, delta: usize, msg: &str, base: Option<&dyn Error>) {
        let pos = self.source.pos;
        let err_pos = pos + delta;
        self.result = ParseResult {
            pos,
            text: String::new(),
            value: Value::None,
            err_pos: Some(err_pos),
            feedback: Vec::new(),
        };
        self.add_error(err_pos, msg, base);
    }

    /// Takes the current result out of its slot.
    pub fn take_result(&mut self) -> ParseResult<T> {
        std::mem::take(&mut self.result)
    }

    // =====================
    // Feedback
    // =====================

    pub fn add_info(&mut self, pos: usize, msg: &str) {
        let message = format!("{}{}.", self.where_(pos), msg);
        self.push_feedback(FeedbackKind::Info, pos, message);
    }

    pub fn add_warning(&mut self, pos: usize, msg: &str) {
        let message = format!("{}{}.", self.where_(pos), msg);
        self.push_feedback(FeedbackKind::Warning, pos, message);
    }

    /// Adds an error item; `base` is a lower level error that caused it.
    pub fn add_error(&mut self, pos: usize, msg: &str, base: Option<&dyn Error>) {
        let message = match base {
            Some(base) => format!("{}{}: {}.", self.where_(pos), msg, base),
            None => format!("{}{}.", self.where_(pos), msg),
        };
        self.push_feedback(FeedbackKind::Error, pos, message);
    }

    fn push_feedback(&mut self, kind: FeedbackKind, pos: usize, message: String) {
        self.result
            .feedback
            .push(FeedbackItem::new(kind, pos, message));
    }

    /// Turns the current (successful) result into a semantic failure at its
    /// start and moves the cursor back there.
    pub fn reject(&mut self, msg: &str) {
        let pos = self.result.pos;
        self.result.err_pos = Some(pos);
        self.result.text.clear();
        self.result.value = Value::None;
        self.add_error(pos, msg, None);
        self.reset_source_pos(Some(pos));
    }

    /// Combined info/warning text and, if the parse failed or produced error
    /// items, a diagnostic carrying all error messages.
    ///
    /// A failed result without error items (a hook may set `err_pos`
    /// directly) still yields a diagnostic at the error position.
    pub fn feedback(&self) -> (String, Option<FeedbackError>) {
        let (info, errors) = split_feedback(&self.result.feedback);
        let errors = errors.or_else(|| {
            self.result.err_pos.map(|pos| {
                let mut source = self.source.clone();
                format!("{}: {}parsing failed.", FeedbackKind::Error, source.describe(pos))
            })
        });
        let error = errors.map(|message| {
            let len = self.source.content().len();
            let span = self
                .result
                .err_pos
                .map(|pos| SourceSpan::from((pos.min(len), usize::from(pos < len))));
            FeedbackError {
                message,
                source_code: self.source.buffer().to_named_source(),
                span,
            }
        });
        (info, error)
    }

    // =====================
    // Scratch frames
    // =====================

    /// Opens a frame at the cursor and returns the cursor.
    pub(crate) fn push_frame(&mut self) -> usize {
        let org_pos = self.source.pos;
        self.frames.push(Frame {
            org_pos,
            results: Vec::new(),
        });
        org_pos
    }

    /// Moves the current result into the innermost frame.
    pub(crate) fn collect_result(&mut self) {
        let result = self.take_result();
        if let Some(frame) = self.frames.last_mut() {
            frame.results.push(result);
        }
    }

    pub(crate) fn pop_frame(&mut self) -> Frame<T> {
        let pos = self.source.pos;
        self.frames.pop().unwrap_or(Frame {
            org_pos: pos,
            results: Vec::new(),
        })
    }

    /// Number of combinator invocations currently active.
    pub fn frame_depth(&self) -> usize {
        self.frames.len()
    }
}
