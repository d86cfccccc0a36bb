use tracing::trace;

use crate::parser::{handle_semantics, impl_with_semantics, Parser, SemanticHook, SubParser};
use crate::session::ParseData;

/// First match: tries the children in order and passes through the first
/// success unchanged.
pub struct Any<T, C> {
    subs: Vec<SubParser<T, C>>,
    semantics: Option<SemanticHook<T, C>>,
}

impl<T, C> Any<T, C> {
    pub fn new(subs: Vec<SubParser<T, C>>) -> Self {
        Self {
            subs,
            semantics: None,
        }
    }
}

impl_with_semantics!(Any);

pub fn any<T, C>(subs: Vec<SubParser<T, C>>) -> Any<T, C> {
    Any::new(subs)
}

impl<T, C> Parser<T, C> for Any<T, C> {
    fn parse(&self, pd: &mut ParseData<T>, ctx: &mut C) {
        let org_pos = pd.push_frame();

        for (i, sub) in self.subs.iter().enumerate() {
            pd.set_pos(org_pos);
            sub.parse(pd, ctx);
            if !pd.result.has_error() {
                trace!(org_pos, matched_child = i, "any matched");
                pd.pop_frame();
                handle_semantics(self.semantics.as_ref(), pd, ctx);
                return;
            }
            pd.collect_result();
        }

        trace!(org_pos, children = self.subs.len(), "any failed");
        pd.set_pos(org_pos);
        let frame = pd.pop_frame();
        // all failures are reported at the shared start offset
        pd.create_unmatched_result(
            0,
            &format!(
                "any subparser should match; all {} failed",
                self.subs.len()
            ),
            None,
        );
        for failure in frame.results {
            pd.result.feedback.extend(failure.feedback);
        }
        handle_semantics(self.semantics.as_ref(), pd, ctx);
    }
}
