//! Headless replay of key scripts, used by `--keys`.

use calc_core::{CalcError, Calculator, CalculatorSink, DisplayText, Operator};
use thiserror::Error;
use tracing::debug;

use crate::script::{KeyScriptError, parse_key_script};

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("invalid key script: {0}")]
    Script(#[from] KeyScriptError),

    #[error("cannot serialize calculator state: {0}")]
    Dump(#[from] toml::ser::Error),
}

/// One line of replay output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapeEntry {
    Display(String),
    Notice(String),
}

/// Sink that records every display update and notice, in order.
#[derive(Debug, Default)]
pub struct TapeSink {
    entries: Vec<TapeEntry>,
    current: DisplayText,
}

impl TapeSink {
    pub fn entries(&self) -> &[TapeEntry] {
        &self.entries
    }

    /// The most recent display text.
    pub fn display(&self) -> &str {
        &self.current.text
    }
}

impl CalculatorSink for TapeSink {
    fn show(
        &mut self,
        display: &DisplayText,
    ) {
        self.current = display.clone();
        self.entries.push(TapeEntry::Display(display.text.clone()));
    }

    fn highlight_operator(
        &mut self,
        _operator: Option<Operator>,
    ) {
    }

    fn notify(
        &mut self,
        error: &CalcError,
    ) {
        self.entries.push(TapeEntry::Notice(error.to_string()));
    }
}

/// Replays `script` on a fresh calculator. Keys without a binding are
/// skipped.
pub fn replay(script: &str) -> Result<Calculator<TapeSink>, ReplayError> {
    let keys = parse_key_script(script)?;
    let mut calculator = Calculator::new(TapeSink::default());

    for key in &keys {
        if calculator.press_key(key, false).is_none() {
            debug!(key = %key, "no action bound to key; skipping");
        }
    }

    Ok(calculator)
}

/// Renders the tape as text: display lines as-is, notices prefixed by `!`.
pub fn render_tape(entries: &[TapeEntry]) -> String {
    entries
        .iter()
        .map(|entry| match entry {
            TapeEntry::Display(text) => text.clone(),
            TapeEntry::Notice(message) => format!("! {message}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serializes the calculator state as TOML.
pub fn dump_state(calculator: &Calculator<TapeSink>) -> Result<String, ReplayError> {
    Ok(toml::to_string(calculator.state())?)
}
