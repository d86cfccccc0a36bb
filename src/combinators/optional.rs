use tracing::trace;

use crate::parser::{handle_semantics, impl_with_semantics, Parser, SemanticHook, SubParser};
use crate::result::Value;
use crate::session::ParseData;

/// Runs one child once; a failure is swallowed and reported as an empty
/// success.
pub struct Optional<T, C> {
    sub: SubParser<T, C>,
    semantics: Option<SemanticHook<T, C>>,
}

impl<T, C> Optional<T, C> {
    pub fn new(sub: SubParser<T, C>) -> Self {
        Self {
            sub,
            semantics: None,
        }
    }
}

impl_with_semantics!(Optional);

pub fn optional<T, C>(sub: SubParser<T, C>) -> Optional<T, C> {
    Optional::new(sub)
}

impl<T, C> Parser<T, C> for Optional<T, C> {
    fn parse(&self, pd: &mut ParseData<T>, ctx: &mut C) {
        let org_pos = pd.push_frame();
        self.sub.parse(pd, ctx);
        pd.pop_frame();

        if pd.result.has_error() {
            trace!(org_pos, "optional ignored a failure");
            pd.result.pos = org_pos;
            pd.result.text.clear();
            pd.result.value = Value::None;
            pd.result.err_pos = None;
            pd.result.feedback.clear();
            pd.set_pos(org_pos);
        }

        handle_semantics(self.semantics.as_ref(), pd, ctx);
    }
}
