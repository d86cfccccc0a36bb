use tracing::trace;

use crate::parser::{handle_semantics, impl_with_semantics, Parser, SemanticHook, SubParser};
use crate::result::ParseResult;
use crate::session::ParseData;

/// Longest match: tries every child from the same start and keeps the
/// success that ends furthest. On a tie the earlier child wins.
pub struct Best<T, C> {
    subs: Vec<SubParser<T, C>>,
    semantics: Option<SemanticHook<T, C>>,
}

impl<T, C> Best<T, C> {
    pub fn new(subs: Vec<SubParser<T, C>>) -> Self {
        Self {
            subs,
            semantics: None,
        }
    }
}

impl_with_semantics!(Best);

pub fn best<T, C>(subs: Vec<SubParser<T, C>>) -> Best<T, C> {
    Best::new(subs)
}

impl<T, C> Parser<T, C> for Best<T, C> {
    fn parse(&self, pd: &mut ParseData<T>, ctx: &mut C) {
        let org_pos = pd.push_frame();
        let mut best: Option<(usize, ParseResult<T>)> = None;

        for sub in &self.subs {
            pd.set_pos(org_pos);
            sub.parse(pd, ctx);
            if pd.result.has_error() {
                pd.collect_result();
                continue;
            }
            let end = pd.pos();
            let result = pd.take_result();
            if best.as_ref().map_or(true, |(best_end, _)| end > *best_end) {
                best = Some((end, result));
            }
        }

        let frame = pd.pop_frame();
        match best {
            Some((end, result)) => {
                trace!(org_pos, end, "best matched");
                pd.set_pos(end);
                pd.result = result;
            }
            None => {
                trace!(org_pos, children = self.subs.len(), "best failed");
                pd.set_pos(org_pos);
                pd.create_unmatched_result(
                    0,
                    &format!(
                        "best subparser should match; all {} failed",
                        self.subs.len()
                    ),
                    None,
                );
                for failure in frame.results {
                    pd.result.feedback.extend(failure.feedback);
                }
            }
        }
        handle_semantics(self.semantics.as_ref(), pd, ctx);
    }
}
