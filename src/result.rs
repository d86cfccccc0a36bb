//! The value produced by every parser invocation.

use serde::{Deserialize, Serialize};

use crate::feedback::{FeedbackItem, FeedbackKind};

/// Semantic value of a parse result.
///
/// The engine itself only produces `None`, `Text`, `Natural` and `List`;
/// `Custom` carries whatever an embedding application's semantic hooks build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value<T> {
    None,
    Text(String),
    Natural(u64),
    List(Vec<Value<T>>),
    Custom(T),
}

impl<T> Default for Value<T> {
    fn default() -> Self {
        Value::None
    }
}

impl<T> Value<T> {
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_natural(&self) -> Option<u64> {
        match self {
            Value::Natural(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value<T>]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_custom(&self) -> Option<&T> {
        match self {
            Value::Custom(value) => Some(value),
            _ => None,
        }
    }
}

/// Outcome of one parser invocation.
///
/// `err_pos` is the single source of truth for pass/fail: `None` means the
/// parser matched, `Some(offset)` is where it failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult<T> {
    /// Offset at which the attempt began.
    pub pos: usize,
    /// Matched text; empty on failure.
    pub text: String,
    pub value: Value<T>,
    pub err_pos: Option<usize>,
    pub feedback: Vec<FeedbackItem>,
}

impl<T> Default for ParseResult<T> {
    fn default() -> Self {
        Self {
            pos: 0,
            text: String::new(),
            value: Value::None,
            err_pos: None,
            feedback: Vec::new(),
        }
    }
}

impl<T> ParseResult<T> {
    pub fn has_error(&self) -> bool {
        self.err_pos.is_some()
    }

    pub fn errors(&self) -> impl Iterator<Item = &FeedbackItem> {
        self.feedback.iter().filter(|item| item.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Number of feedback items of the given kind.
    pub fn count(&self, kind: FeedbackKind) -> usize {
        self.feedback.iter().filter(|item| item.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_error_ignores_feedback() {
        let mut result = ParseResult::<()> {
            feedback: vec![FeedbackItem::new(FeedbackKind::Error, 0, "x.")],
            ..Default::default()
        };
        assert!(!result.has_error());
        assert_eq!(result.error_count(), 1);

        result.err_pos = Some(0);
        result.feedback.clear();
        assert!(result.has_error());
    }

    #[test]
    fn test_value_accessors() {
        let value: Value<u8> = Value::List(vec![Value::Natural(3), Value::Custom(7)]);
        let items = value.as_list().unwrap();
        assert_eq!(items[0].as_natural(), Some(3));
        assert_eq!(items[1].as_custom(), Some(&7));
        assert!(Value::<u8>::default().is_none());
        assert_eq!(Value::<u8>::Text("a".into()).as_text(), Some("a"));
    }
}
