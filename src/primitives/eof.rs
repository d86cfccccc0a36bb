use crate::parser::{handle_semantics, impl_with_semantics, Parser, SemanticHook};
use crate::session::ParseData;

/// Matches only at the end of the input.
pub struct Eof<T, C> {
    semantics: Option<SemanticHook<T, C>>,
}

impl<T, C> Eof<T, C> {
    pub fn new() -> Self {
        Self { semantics: None }
    }
}

impl<T, C> Default for Eof<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl_with_semantics!(Eof);

impl<T, C> Parser<T, C> for Eof<T, C> {
    fn parse(&self, pd: &mut ParseData<T>, ctx: &mut C) {
        let left = pd.remaining().len();
        if left > 0 {
            pd.create_unmatched_result(
                0,
                &format!("expecting end of input but still got {} bytes", left),
                None,
            );
        } else {
            pd.create_matched_result(0);
        }
        handle_semantics(self.semantics.as_ref(), pd, ctx);
    }
}
