//! Control-flow combinators.
//!
//! Every combinator follows the same protocol: remember the cursor and open
//! a scratch frame, run its children, decide, close the frame, then either
//! build its own result or restore the cursor and report failure. The
//! semantic hook runs last and only on success.

mod all;
mod any;
mod best;
mod optional;
mod repeat;

pub use all::{all, All};
pub use any::{any, Any};
pub use best::{best, Best};
pub use optional::{optional, Optional};
pub use repeat::{many0, many1, repeat, Repeat};

use crate::result::{ParseResult, Value};
use crate::session::ParseData;

/// Sets the current result's value to the list of child values and appends
/// the children's feedback in call order.
fn save_all_values_feedback<T: Clone>(pd: &mut ParseData<T>, sub_results: &[ParseResult<T>]) {
    let mut values = Vec::with_capacity(sub_results.len());
    for sub in sub_results {
        values.push(sub.value.clone());
        pd.result.feedback.extend(sub.feedback.iter().cloned());
    }
    pd.result.value = Value::List(values);
}
