use crate::errors::ConfigError;
use crate::parser::{handle_semantics, impl_with_semantics, Parser, SemanticHook};
use crate::result::Value;
use crate::session::ParseData;

/// Matches a comment from its start marker up to (not including) the end
/// of the line. The value is an empty [`Value::Text`].
pub struct LineComment<T, C> {
    start: String,
    semantics: Option<SemanticHook<T, C>>,
}

impl<T, C> LineComment<T, C> {
    pub fn new(start: impl Into<String>) -> Result<Self, ConfigError> {
        let start = start.into();
        if start.is_empty() {
            return Err(ConfigError::EmptyDelimiter {
                what: "start of line comment",
            });
        }
        Ok(Self {
            start,
            semantics: None,
        })
    }
}

impl_with_semantics!(LineComment);

impl<T, C> Parser<T, C> for LineComment<T, C> {
    fn parse(&self, pd: &mut ParseData<T>, ctx: &mut C) {
        let rest = pd.remaining();
        if rest.starts_with(&self.start) {
            let n = rest[self.start.len()..]
                .find('\n')
                .map_or(rest.len(), |i| self.start.len() + i);
            pd.create_matched_result(n);
            pd.result.value = Value::Text(String::new());
        } else {
            pd.create_unmatched_result(0, "expecting line comment", None);
        }
        handle_semantics(self.semantics.as_ref(), pd, ctx);
    }
}

/// Matches a comment between a start and an end marker. End markers inside
/// `'…'`, `"…"` or `` `…` `` strings do not close the comment. The value is
/// an empty [`Value::Text`].
pub struct BlockComment<T, C> {
    start: String,
    end: String,
    semantics: Option<SemanticHook<T, C>>,
}

impl<T, C> BlockComment<T, C> {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self, ConfigError> {
        let (start, end) = (start.into(), end.into());
        if start.is_empty() {
            return Err(ConfigError::EmptyDelimiter {
                what: "start of block comment",
            });
        }
        if end.is_empty() {
            return Err(ConfigError::EmptyDelimiter {
                what: "end of block comment",
            });
        }
        Ok(Self {
            start,
            end,
            semantics: None,
        })
    }

    /// Length of the comment body including the end marker, if it is closed.
    fn body_len(&self, body: &str) -> Option<usize> {
        let mut after_backslash = false;
        let mut quote: Option<char> = None;

        for (i, c) in body.char_indices() {
            if after_backslash {
                after_backslash = false;
                continue;
            }
            match quote {
                Some('`') => {
                    if c == '`' {
                        quote = None;
                    }
                }
                Some(q) => {
                    if c == '\\' {
                        after_backslash = true;
                    } else if c == q {
                        quote = None;
                    }
                }
                None => match c {
                    '\'' | '"' | '`' => quote = Some(c),
                    _ if body[i..].starts_with(&self.end) => return Some(i + self.end.len()),
                    _ => {}
                },
            }
        }
        None
    }
}

impl_with_semantics!(BlockComment);

impl<T, C> Parser<T, C> for BlockComment<T, C> {
    fn parse(&self, pd: &mut ParseData<T>, ctx: &mut C) {
        let rest = pd.remaining();
        if rest.starts_with(&self.start) {
            match self.body_len(&rest[self.start.len()..]) {
                Some(n) => {
                    pd.create_matched_result(self.start.len() + n);
                    pd.result.value = Value::Text(String::new());
                }
                None => pd.create_unmatched_result(
                    self.start.len(),
                    &format!("block comment isn't closed with '{}'", self.end),
                    None,
                ),
            }
        } else {
            let got: String = rest.chars().take(self.start.chars().count()).collect();
            pd.create_unmatched_result(
                0,
                &format!(
                    "expecting block comment starting with '{}', got '{}'",
                    self.start, got
                ),
                None,
            );
        }
        handle_semantics(self.semantics.as_ref(), pd, ctx);
    }
}
