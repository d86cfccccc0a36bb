//! A small settings-file grammar built only from the public combinator API.
//!
//! ```text
//! # comment
//! name    = trellis
//! retries = 3
//! title   = "A quoted value"
//! /* block comments work too */
//! ```
//!
//! Semantic hooks turn each entry into a [`Setting`] and collect it in the
//! [`SettingsContext`]. A key defined twice produces a warning; the later
//! value wins on lookup.

use serde::{Deserialize, Serialize};

use crate::combinators::{all, any, best, many0, optional};
use crate::errors::{ConfigError, SettingsError};
use crate::parser::{ParserExt, SubParser};
use crate::primitives::{BlockComment, Eof, Ident, LineComment, Literal, Natural, Regexp, Space};
use crate::result::Value;
use crate::session::ParseData;
use crate::source::SourceBuffer;

/// The value of one setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum SettingValue {
    Number(u64),
    Word(String),
    Quoted(String),
}

/// One `key = value` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub key: String,
    pub value: SettingValue,
    /// Byte offset of the key.
    pub offset: usize,
}

/// Context threaded through the settings grammar.
#[derive(Debug, Default, Clone)]
pub struct SettingsContext {
    pub settings: Vec<Setting>,
}

impl SettingsContext {
    /// The last value defined for `key`.
    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.settings
            .iter()
            .rev()
            .find(|setting| setting.key == key)
            .map(|setting| &setting.value)
    }
}

/// Grammar configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsOptions {
    /// Radix of number values.
    pub radix: u32,
    /// Whether line breaks may appear around `=`.
    pub eol_is_space: bool,
    /// Start of a line comment.
    pub comment: String,
}

impl Default for SettingsOptions {
    fn default() -> Self {
        Self {
            radix: 10,
            eol_is_space: false,
            comment: "#".to_string(),
        }
    }
}

/// Outcome of a successful settings parse.
#[derive(Debug, Clone)]
pub struct ParsedSettings {
    pub settings: Vec<Setting>,
    /// Combined info and warning feedback; empty if there was none.
    pub info: String,
}

pub type SettingsParser = SubParser<SettingValue, SettingsContext>;

/// Builds the settings grammar. Fails only on invalid options.
pub fn grammar(options: &SettingsOptions) -> Result<SettingsParser, ConfigError> {
    let gap = || -> SettingsParser { optional(Space::new(options.eol_is_space).boxed()).boxed() };

    let number = Natural::new(options.radix)?
        .with_semantics(|pd: &mut ParseData<SettingValue>, _ctx: &mut SettingsContext| {
            if let Value::Natural(n) = pd.result.value {
                pd.result.value = Value::Custom(SettingValue::Number(n));
            }
        })
        .boxed();
    let word = Ident::new("_", "_-.")
        .with_semantics(|pd: &mut ParseData<SettingValue>, _ctx: &mut SettingsContext| {
            pd.result.value = Value::Custom(SettingValue::Word(pd.result.text.clone()));
        })
        .boxed();
    let quoted = Regexp::new(r#""[^"\n]*""#)?
        .with_semantics(|pd: &mut ParseData<SettingValue>, _ctx: &mut SettingsContext| {
            let inner = pd.result.text.trim_matches('"').to_string();
            pd.result.value = Value::Custom(SettingValue::Quoted(inner));
        })
        .boxed();

    let entry = all(vec![
        Ident::new("_", "_-.").boxed(),
        gap(),
        Literal::new("=")?.boxed(),
        gap(),
        best(vec![number, word, quoted]).boxed(),
        gap(),
    ])
    .with_semantics(collect_entry)
    .boxed();

    let item = any(vec![
        Space::new(true).boxed(),
        LineComment::new(options.comment.clone())?.boxed(),
        BlockComment::new("/*", "*/")?.boxed(),
        entry.clone(),
    ])
    .boxed();

    // retrying the entry at the end reports why it failed, not just that
    // input is left over
    let end = any(vec![Eof::new().boxed(), entry]).boxed();
    Ok(all(vec![many0(item).boxed(), end]).boxed())
}

fn collect_entry(pd: &mut ParseData<SettingValue>, ctx: &mut SettingsContext) {
    let (Some(key), Some(value)) = (pd.sub_results.first(), pd.sub_results.get(4)) else {
        return;
    };
    let Some(value) = value.value.as_custom().cloned() else {
        return;
    };
    let setting = Setting {
        key: key.text.clone(),
        value,
        offset: key.pos,
    };

    if ctx.get(&setting.key).is_some() {
        pd.add_warning(
            setting.offset,
            &format!("key '{}' is defined more than once", setting.key),
        );
    }
    pd.result.value = Value::Custom(setting.value.clone());
    ctx.settings.push(setting);
}

/// Parses one settings buffer with an already built grammar.
pub fn parse_with(
    grammar: &SettingsParser,
    buffer: SourceBuffer,
) -> Result<ParsedSettings, SettingsError> {
    let mut pd = ParseData::from_buffer(buffer);
    let mut ctx = SettingsContext::default();
    grammar.parse(&mut pd, &mut ctx);

    let (info, error) = pd.feedback();
    if let Some(error) = error {
        return Err(error.into());
    }
    Ok(ParsedSettings {
        settings: ctx.settings,
        info,
    })
}

/// Builds the grammar and parses one settings buffer.
pub fn parse_settings(
    name: &str,
    content: &str,
    options: &SettingsOptions,
) -> Result<ParsedSettings, SettingsError> {
    let grammar = grammar(options)?;
    parse_with(&grammar, SourceBuffer::new(name, content))
}
