//! Key scripts for headless replay.
//!
//! A script is a sequence of keys. Each character is one key, `<name>` is a
//! named key such as `<Enter>` or `<Escape>`, `<<` is a literal `<`, and
//! whitespace is ignored:
//!
//! ```
//! use calc_ui::script::parse_key_script;
//!
//! let keys = parse_key_script("12 + 3<Enter>").unwrap();
//! assert_eq!(keys, ["1", "2", "+", "3", "Enter"]);
//! ```

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyScriptError {
    #[error("unterminated key name starting at offset {0}")]
    Unterminated(usize),

    #[error("empty key name at offset {0}")]
    EmptyName(usize),
}

/// Splits a key script into key names suitable for
/// [`calc_core::Action::from_key`].
pub fn parse_key_script(script: &str) -> Result<Vec<String>, KeyScriptError> {
    let mut keys = Vec::new();
    let mut chars = script.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }
        if c != '<' {
            keys.push(c.to_string());
            continue;
        }
        if chars.next_if(|&(_, next)| next == '<').is_some() {
            keys.push("<".to_string());
            continue;
        }

        let mut name = String::new();
        loop {
            match chars.next() {
                Some((_, '>')) => break,
                Some((_, ch)) => name.push(ch),
                None => return Err(KeyScriptError::Unterminated(offset)),
            }
        }
        if name.trim().is_empty() {
            return Err(KeyScriptError::EmptyName(offset));
        }
        keys.push(name.trim().to_string());
    }

    Ok(keys)
}
