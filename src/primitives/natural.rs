use crate::errors::ConfigError;
use crate::parser::{handle_semantics, impl_with_semantics, Parser, SemanticHook};
use crate::result::Value;
use crate::session::ParseData;

/// Matches a natural number in the configured radix; the value is the
/// number as [`Value::Natural`]. Digits above 9 may be upper or lower case.
pub struct Natural<T, C> {
    radix: u32,
    semantics: Option<SemanticHook<T, C>>,
}

impl<T, C> Natural<T, C> {
    pub fn new(radix: u32) -> Result<Self, ConfigError> {
        if !(2..=36).contains(&radix) {
            return Err(ConfigError::InvalidRadix(radix));
        }
        Ok(Self {
            radix,
            semantics: None,
        })
    }
}

impl_with_semantics!(Natural);

impl<T, C> Parser<T, C> for Natural<T, C> {
    fn parse(&self, pd: &mut ParseData<T>, ctx: &mut C) {
        let rest = pd.remaining();
        let n = rest
            .find(|c: char| !c.is_digit(self.radix))
            .unwrap_or(rest.len());
        let parsed = (n > 0).then(|| u64::from_str_radix(&rest[..n], self.radix));

        match parsed {
            Some(Ok(value)) => {
                pd.create_matched_result(n);
                pd.result.value = Value::Natural(value);
            }
            Some(Err(err)) => pd.create_unmatched_result(0, "natural number expected", Some(&err)),
            None => pd.create_unmatched_result(0, "natural number expected", None),
        }
        handle_semantics(self.semantics.as_ref(), pd, ctx);
    }
}
