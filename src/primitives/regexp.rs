use regex::Regex;

use crate::errors::ConfigError;
use crate::parser::{handle_semantics, impl_with_semantics, Parser, SemanticHook};
use crate::result::Value;
use crate::session::ParseData;

/// Matches a regular expression anchored at the cursor; the value is the
/// matched text as [`Value::Text`].
pub struct Regexp<T, C> {
    pattern: String,
    regex: Regex,
    semantics: Option<SemanticHook<T, C>>,
}

impl<T, C> Regexp<T, C> {
    /// Compiles `pattern`. A leading `^` is optional; the match always has
    /// to start at the cursor.
    pub fn new(pattern: impl Into<String>) -> Result<Self, ConfigError> {
        let pattern = pattern.into();
        let unanchored = pattern.strip_prefix('^').unwrap_or(&pattern);
        if unanchored.is_empty() {
            return Err(ConfigError::EmptyRegexp);
        }
        let regex = Regex::new(&format!("^(?:{})", unanchored)).map_err(|source| {
            ConfigError::InvalidRegexp {
                pattern: pattern.clone(),
                source,
            }
        })?;
        Ok(Self {
            pattern: unanchored.to_string(),
            regex,
            semantics: None,
        })
    }
}

impl_with_semantics!(Regexp);

impl<T, C> Parser<T, C> for Regexp<T, C> {
    fn parse(&self, pd: &mut ParseData<T>, ctx: &mut C) {
        match self.regex.find(pd.remaining()).map(|m| m.end()) {
            Some(n) => {
                pd.create_matched_result(n);
                pd.result.value = Value::Text(pd.result.text.clone());
            }
            None => pd.create_unmatched_result(
                0,
                &format!("expecting match for regexp `{}`", self.pattern),
                None,
            ),
        }
        handle_semantics(self.semantics.as_ref(), pd, ctx);
    }
}
