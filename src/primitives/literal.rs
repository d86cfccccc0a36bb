use crate::errors::ConfigError;
use crate::parser::{handle_semantics, impl_with_semantics, Parser, SemanticHook};
use crate::session::ParseData;

/// Matches a fixed string.
pub struct Literal<T, C> {
    literal: String,
    semantics: Option<SemanticHook<T, C>>,
}

impl<T, C> Literal<T, C> {
    pub fn new(literal: impl Into<String>) -> Result<Self, ConfigError> {
        let literal = literal.into();
        if literal.is_empty() {
            return Err(ConfigError::EmptyLiteral);
        }
        Ok(Self {
            literal,
            semantics: None,
        })
    }
}

impl_with_semantics!(Literal);

impl<T, C> Parser<T, C> for Literal<T, C> {
    fn parse(&self, pd: &mut ParseData<T>, ctx: &mut C) {
        if pd.remaining().starts_with(&self.literal) {
            pd.create_matched_result(self.literal.len());
        } else {
            pd.create_unmatched_result(0, &format!("literal '{}' expected", self.literal), None);
        }
        handle_semantics(self.semantics.as_ref(), pd, ctx);
    }
}
