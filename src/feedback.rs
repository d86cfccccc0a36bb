//! Feedback items attached to parse results.
//!
//! Every item carries an already rendered, location-prefixed message, so a
//! result can outlive the session that produced it. Only [`FeedbackKind::Error`]
//! items count as errors when feedback is split for the caller.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a feedback item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackKind {
    Info,
    Warning,
    Error,
}

impl FeedbackKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackKind::Info => "INFO",
            FeedbackKind::Warning => "WARNING",
            FeedbackKind::Error => "ERROR",
        }
    }
}

impl fmt::Display for FeedbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub kind: FeedbackKind,
    /// Byte offset the message refers to.
    pub offset: usize,
    /// Location prefix plus message, terminated by a period.
    pub message: String,
}

impl FeedbackItem {
    pub fn new(kind: FeedbackKind, offset: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            offset,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == FeedbackKind::Error
    }
}

impl fmt::Display for FeedbackItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Splits feedback into the combined info/warning text and the combined
/// error text (`None` if there are no errors). Both are newline-joined.
pub fn split_feedback(items: &[FeedbackItem]) -> (String, Option<String>) {
    let join = |errors: bool| {
        items
            .iter()
            .filter(|item| item.is_error() == errors)
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    };
    let errors = join(true);
    (join(false), (!errors.is_empty()).then_some(errors))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_feedback_separates_kinds() {
        let items = vec![
            FeedbackItem::new(FeedbackKind::Info, 0, "a."),
            FeedbackItem::new(FeedbackKind::Error, 1, "b."),
            FeedbackItem::new(FeedbackKind::Warning, 2, "c."),
            FeedbackItem::new(FeedbackKind::Error, 3, "d."),
        ];
        let (info, errors) = split_feedback(&items);
        assert_eq!(info, "INFO: a.\nWARNING: c.");
        assert_eq!(errors.as_deref(), Some("ERROR: b.\nERROR: d."));
    }

    #[test]
    fn test_split_feedback_without_errors() {
        let items = vec![FeedbackItem::new(FeedbackKind::Warning, 0, "w.")];
        let (info, errors) = split_feedback(&items);
        assert_eq!(info, "WARNING: w.");
        assert!(errors.is_none());
        assert_eq!(split_feedback(&[]), (String::new(), None));
    }
}
