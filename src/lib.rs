//! Trellis: a parser-combinator engine.
//!
//! Parsers are values implementing [`Parser`]. They share one mutable
//! [`ParseData`] session that holds the source, the cursor and the result of
//! the most recent call. Combinators compose parsers into recursive-descent
//! grammars, restore the cursor when they fail, and merge diagnostic
//! feedback with line/column locations.

pub use crate::errors::{ConfigError, FeedbackError, SettingsError};
pub use crate::feedback::{FeedbackItem, FeedbackKind};
pub use crate::parser::{Forward, Parser, ParserExt, SemanticHook, SubParser, WeakForward};
pub use crate::result::{ParseResult, Value};
pub use crate::session::{Frame, ParseData};
pub use crate::source::{Location, SourceBuffer, SourceData};

pub mod cli;
pub mod combinators;
pub mod errors;
pub mod feedback;
pub mod parser;
pub mod primitives;
pub mod result;
pub mod session;
pub mod settings;
pub mod source;
