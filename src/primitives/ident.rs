use crate::parser::{handle_semantics, impl_with_semantics, Parser, SemanticHook};
use crate::session::ParseData;

/// Matches an identifier: a letter or one of `first_chars`, followed by
/// letters, numbers or any of `following_chars`.
pub struct Ident<T, C> {
    first_chars: String,
    following_chars: String,
    semantics: Option<SemanticHook<T, C>>,
}

impl<T, C> Ident<T, C> {
    pub fn new(first_chars: impl Into<String>, following_chars: impl Into<String>) -> Self {
        Self {
            first_chars: first_chars.into(),
            following_chars: following_chars.into(),
            semantics: None,
        }
    }

    fn accepts(&self, first: bool, c: char) -> bool {
        if c.is_alphabetic() {
            return true;
        }
        if first {
            self.first_chars.contains(c)
        } else {
            c.is_numeric() || self.following_chars.contains(c)
        }
    }
}

impl_with_semantics!(Ident);

impl<T, C> Parser<T, C> for Ident<T, C> {
    fn parse(&self, pd: &mut ParseData<T>, ctx: &mut C) {
        let n = pd
            .remaining()
            .char_indices()
            .take_while(|&(i, c)| self.accepts(i == 0, c))
            .last()
            .map_or(0, |(i, c)| i + c.len_utf8());
        if n > 0 {
            pd.create_matched_result(n);
        } else {
            pd.create_unmatched_result(0, "identifier expected", None);
        }
        handle_semantics(self.semantics.as_ref(), pd, ctx);
    }
}
