use crate::parser::{handle_semantics, impl_with_semantics, Parser, SemanticHook};
use crate::session::ParseData;

/// Matches one or more whitespace characters. With `eol_ok` unset a newline
/// ends the match.
pub struct Space<T, C> {
    eol_ok: bool,
    semantics: Option<SemanticHook<T, C>>,
}

impl<T, C> Space<T, C> {
    pub fn new(eol_ok: bool) -> Self {
        Self {
            eol_ok,
            semantics: None,
        }
    }
}

impl_with_semantics!(Space);

impl<T, C> Parser<T, C> for Space<T, C> {
    fn parse(&self, pd: &mut ParseData<T>, ctx: &mut C) {
        let n: usize = pd
            .remaining()
            .chars()
            .take_while(|&c| c.is_whitespace() && (self.eol_ok || c != '\n'))
            .map(char::len_utf8)
            .sum();
        if n > 0 {
            pd.create_matched_result(n);
        } else {
            pd.create_unmatched_result(0, "expecting white space", None);
        }
        handle_semantics(self.semantics.as_ref(), pd, ctx);
    }
}
