use tracing::trace;

use super::save_all_values_feedback;
use crate::parser::{handle_semantics, impl_with_semantics, Parser, SemanticHook, SubParser};
use crate::session::ParseData;

/// Runs one child between `min` and `max` times.
///
/// The value is the list of child values, or the single child value when
/// `max <= 1`. On failure only the last child's feedback is kept next to the
/// synthesized error.
pub struct Repeat<T, C> {
    sub: SubParser<T, C>,
    min: usize,
    max: usize,
    semantics: Option<SemanticHook<T, C>>,
}

impl<T, C> Repeat<T, C> {
    pub fn new(sub: SubParser<T, C>, min: usize, max: usize) -> Self {
        Self {
            sub,
            min,
            max,
            semantics: None,
        }
    }
}

impl_with_semantics!(Repeat);

pub fn repeat<T, C>(sub: SubParser<T, C>, min: usize, max: usize) -> Repeat<T, C> {
    Repeat::new(sub, min, max)
}

/// Zero or more repetitions.
pub fn many0<T, C>(sub: SubParser<T, C>) -> Repeat<T, C> {
    Repeat::new(sub, 0, usize::MAX)
}

/// One or more repetitions.
pub fn many1<T, C>(sub: SubParser<T, C>) -> Repeat<T, C> {
    Repeat::new(sub, 1, usize::MAX)
}

impl<T: Clone, C> Parser<T, C> for Repeat<T, C> {
    fn parse(&self, pd: &mut ParseData<T>, ctx: &mut C) {
        let org_pos = pd.push_frame();
        let mut count = 0;
        let mut last_failure = None;

        while count < self.max {
            let before = pd.pos();
            self.sub.parse(pd, ctx);
            if pd.result.has_error() {
                last_failure = Some(pd.take_result());
                break;
            }
            pd.collect_result();
            count += 1;
            // a zero-width match would repeat forever
            if pd.pos() == before && count >= self.min {
                break;
            }
        }

        let rel_pos = pd.pos().saturating_sub(org_pos);
        pd.set_pos(org_pos);
        let frame = pd.pop_frame();

        if count >= self.min {
            trace!(org_pos, count, rel_pos, "repeat matched");
            pd.create_matched_result(rel_pos);
            if self.max <= 1 {
                if let Some(first) = frame.results.first() {
                    pd.result.value = first.value.clone();
                    pd.result.feedback.extend(first.feedback.iter().cloned());
                }
            } else {
                save_all_values_feedback(pd, &frame.results);
            }
        } else {
            trace!(org_pos, count, min = self.min, "repeat failed");
            pd.create_unmatched_result(
                rel_pos,
                &format!(
                    "at least {} matches expected but got only {}",
                    self.min, count
                ),
                None,
            );
            if let Some(failure) = last_failure {
                pd.result.feedback.extend(failure.feedback);
            }
        }

        pd.sub_results = frame.results;
        handle_semantics(self.semantics.as_ref(), pd, ctx);
    }
}
