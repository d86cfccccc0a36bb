// tests/settings_tests.rs

use miette::Diagnostic;
use trellis::settings::{grammar, parse_settings, parse_with, SettingValue, SettingsOptions};
use trellis::{ConfigError, SettingsError, SourceBuffer};

fn word(s: &str) -> SettingValue {
    SettingValue::Word(s.to_string())
}

#[test]
fn test_all_value_kinds() {
    let content = r#"
# service settings
name    = trellis
retries = 3
title   = "A quoted value"
/* block comments
   span lines */
path=/srv/data
"#;
    let parsed = parse_settings("app.conf", content, &SettingsOptions::default());
    // a path is neither a number, a word nor a quoted string
    assert!(parsed.is_err());

    let content = content.replace("path=/srv/data", "level=debug.v2");
    let parsed = parse_settings("app.conf", &content, &SettingsOptions::default()).unwrap();
    let values: Vec<_> = parsed
        .settings
        .iter()
        .map(|s| (s.key.as_str(), s.value.clone()))
        .collect();
    assert_eq!(
        values,
        vec![
            ("name", word("trellis")),
            ("retries", SettingValue::Number(3)),
            ("title", SettingValue::Quoted("A quoted value".to_string())),
            ("level", word("debug.v2")),
        ]
    );
}

#[test]
fn test_duplicate_key_warns() {
    let parsed = parse_settings("dup.conf", "a = 1\na = 2\n", &SettingsOptions::default()).unwrap();
    assert_eq!(parsed.settings.len(), 2);
    assert_eq!(parsed.settings[1].offset, 6);
    assert!(parsed.info.starts_with("WARNING: File 'dup.conf', line 2, column 1:"));
    assert!(parsed.info.ends_with("key 'a' is defined more than once."));
}

#[test]
fn test_number_followed_by_letters_fails() {
    // words can't start with a digit, so "12ab" leaves "ab" behind
    let parsed = parse_settings("t", "k = 12ab", &SettingsOptions::default());
    assert!(parsed.is_err());

    let parsed = parse_settings("t", "k = ab12", &SettingsOptions::default()).unwrap();
    assert_eq!(parsed.settings[0].value, word("ab12"));
}

#[test]
fn test_radix_tie_prefers_number() {
    let options = SettingsOptions {
        radix: 16,
        ..SettingsOptions::default()
    };
    let parsed = parse_settings("hex", "mask = ff\n", &options).unwrap();
    assert_eq!(parsed.settings[0].value, SettingValue::Number(255));
}

#[test]
fn test_line_breaks_around_equals() {
    let content = "key\n=\nvalue\n";
    assert!(parse_settings("t", content, &SettingsOptions::default()).is_err());

    let options = SettingsOptions {
        eol_is_space: true,
        ..SettingsOptions::default()
    };
    let parsed = parse_settings("t", content, &options).unwrap();
    assert_eq!(parsed.settings[0].value, word("value"));
}

#[test]
fn test_custom_comment() {
    let options = SettingsOptions {
        comment: ";".to_string(),
        ..SettingsOptions::default()
    };
    let parsed = parse_settings("t", "; note\nx = 1\n", &options).unwrap();
    assert_eq!(parsed.settings.len(), 1);
    assert!(parse_settings("t", "# note\nx = 1\n", &options).is_err());
}

#[test]
fn test_failure_is_a_diagnostic() {
    let err = parse_settings("bad.conf", "ok = 1\n= 2\n", &SettingsOptions::default()).unwrap_err();
    let SettingsError::Parse(feedback) = &err else {
        panic!("expected a parse failure, got {err:?}");
    };
    assert!(feedback
        .message
        .contains("expecting end of input but still got 4 bytes"));
    let labels: Vec<_> = err.labels().into_iter().flatten().collect();
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].offset(), 7);
}

#[test]
fn test_invalid_options() {
    let options = SettingsOptions {
        radix: 40,
        ..SettingsOptions::default()
    };
    assert!(matches!(
        grammar(&options),
        Err(ConfigError::InvalidRadix(40))
    ));
    let options = SettingsOptions {
        comment: String::new(),
        ..SettingsOptions::default()
    };
    assert!(matches!(
        parse_settings("t", "", &options),
        Err(SettingsError::Config(ConfigError::EmptyDelimiter { .. }))
    ));
}

#[test]
fn test_grammar_is_reusable() {
    let grammar = grammar(&SettingsOptions::default()).unwrap();
    let first = parse_with(&grammar, SourceBuffer::new("one", "a = 1")).unwrap();
    let second = parse_with(&grammar, SourceBuffer::new("two", "b = 2\nc = 3")).unwrap();
    assert_eq!(first.settings.len(), 1);
    assert_eq!(second.settings.len(), 2);
    assert_eq!(second.settings[1].key, "c");
}
