use tracing::trace;

use super::save_all_values_feedback;
use crate::parser::{handle_semantics, impl_with_semantics, Parser, SemanticHook, SubParser};
use crate::session::ParseData;

/// Sequence: every child has to match, one after the other.
///
/// The first failing child's result becomes the sequence's result (moved to
/// the sequence's start); results of the children before it are dropped.
pub struct All<T, C> {
    subs: Vec<SubParser<T, C>>,
    semantics: Option<SemanticHook<T, C>>,
}

impl<T, C> All<T, C> {
    pub fn new(subs: Vec<SubParser<T, C>>) -> Self {
        Self {
            subs,
            semantics: None,
        }
    }
}

impl_with_semantics!(All);

pub fn all<T, C>(subs: Vec<SubParser<T, C>>) -> All<T, C> {
    All::new(subs)
}

impl<T: Clone, C> Parser<T, C> for All<T, C> {
    fn parse(&self, pd: &mut ParseData<T>, ctx: &mut C) {
        let org_pos = pd.push_frame();

        for (i, sub) in self.subs.iter().enumerate() {
            sub.parse(pd, ctx);
            if pd.result.has_error() {
                trace!(org_pos, failed_child = i, "all failed");
                pd.pop_frame();
                pd.set_pos(org_pos);
                pd.result.pos = org_pos;
                handle_semantics(self.semantics.as_ref(), pd, ctx);
                return;
            }
            pd.collect_result();
        }

        let rel_pos = pd.pos().saturating_sub(org_pos);
        pd.set_pos(org_pos);
        let frame = pd.pop_frame();
        trace!(org_pos, rel_pos, "all matched");
        pd.create_matched_result(rel_pos);
        save_all_values_feedback(pd, &frame.results);
        pd.sub_results = frame.results;
        handle_semantics(self.semantics.as_ref(), pd, ctx);
    }
}
