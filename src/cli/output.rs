//! Handles all user-facing output for the CLI.
//!
//! Settings go to stdout, plain and colored or as JSON; warnings and
//! diagnostics go to stderr.

use std::io::{self, Write};
use std::path::Path;

use miette::Report;
use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::errors::FeedbackError;
use crate::settings::{ParsedSettings, Setting, SettingValue};

#[derive(Serialize)]
struct FileReport<'a> {
    file: String,
    settings: &'a [Setting],
}

/// Prints the settings of one successfully parsed file.
pub fn print_settings(path: &Path, parsed: &ParsedSettings, json: bool) -> io::Result<()> {
    if json {
        let report = FileReport {
            file: path.display().to_string(),
            settings: &parsed.settings,
        };
        let text = serde_json::to_string_pretty(&report).map_err(io::Error::other)?;
        println!("{text}");
    } else {
        let mut stdout = StandardStream::stdout(ColorChoice::Auto);
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(stdout, "ok")?;
        stdout.reset()?;
        writeln!(
            stdout,
            " {} ({} settings)",
            path.display(),
            parsed.settings.len()
        )?;
        for setting in &parsed.settings {
            writeln!(stdout, "  {} = {}", setting.key, render_value(&setting.value))?;
        }
    }
    if !parsed.info.is_empty() {
        eprintln!("{}", parsed.info);
    }
    Ok(())
}

/// Prints a failed parse as a miette report.
pub fn print_failure(path: &Path, error: FeedbackError) -> io::Result<()> {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(stderr, "failed")?;
    stderr.reset()?;
    writeln!(stderr, " {}", path.display())?;
    let report = Report::new(error);
    eprintln!("{report:?}");
    Ok(())
}

fn render_value(value: &SettingValue) -> String {
    match value {
        SettingValue::Number(n) => n.to_string(),
        SettingValue::Word(word) => word.clone(),
        SettingValue::Quoted(text) => format!("\"{}\"", text),
    }
}
