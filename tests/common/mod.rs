//! # Trellis Test Helpers
//!
//! Shared setup for the integration tests: run a parser from a given offset
//! and compare the outcome in one call.

#![allow(dead_code)]

use trellis::primitives::Literal;
use trellis::{ParseData, Parser, ParserExt, SubParser, Value};

/// Expected outcome of running a parser once.
pub struct Expected<'a> {
    pub pos: usize,
    pub text: &'a str,
    pub err_pos: Option<usize>,
    pub src_pos: usize,
    pub feedback: usize,
}

/// Runs `parser` on `content`, starting at `start`.
pub fn run(parser: &dyn Parser, name: &str, start: usize, content: &str) -> ParseData {
    let mut pd = ParseData::new(name, content);
    pd.set_pos(start);
    parser.parse(&mut pd, &mut ());
    assert_eq!(pd.frame_depth(), 0, "{name}: unbalanced scratch frames");
    pd
}

/// Runs `parser` and checks position, text, error position, cursor and
/// feedback count.
pub fn check(parser: &dyn Parser, name: &str, start: usize, content: &str, expected: Expected) -> ParseData {
    let pd = run(parser, name, start, content);
    let result = &pd.result;
    assert_eq!(result.pos, expected.pos, "{name}: result position");
    assert_eq!(result.text, expected.text, "{name}: result text");
    assert_eq!(result.err_pos, expected.err_pos, "{name}: error position");
    assert_eq!(pd.pos(), expected.src_pos, "{name}: source position");
    assert_eq!(
        result.feedback.len(),
        expected.feedback,
        "{name}: feedback {:#?}",
        result.feedback
    );
    assert_eq!(result.has_error(), result.err_pos.is_some());
    pd
}

pub fn lit(literal: &str) -> SubParser {
    Literal::new(literal).unwrap().boxed()
}

/// A list of `n` empty values.
pub fn nones(n: usize) -> Value<()> {
    Value::List(vec![Value::None; n])
}
