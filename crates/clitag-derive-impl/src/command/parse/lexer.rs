// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Lexer for field metadata strings.
//!
//! # Grammar
//!
//! ```text
//! props  := pair (' '+ pair)*
//! pair   := key (':' value)?
//! key    := (char | quoted)*
//! value  := (char | quoted)*
//! quoted := '\'' any* '\'' | '"' any* '"' | '`' any* '`'
//! ```
//!
//! There are no escape sequences. Inside a quoted span, spaces and `:` are
//! ordinary text. Quote characters never reach a key or value: the opening
//! character closes the span and the other two are dropped.
//!
//! # Example
//!
//! ```text
//! type:option short:v name:"Very Verbose"
//!   → [("type", "option"), ("short", "v"), ("name", "Very Verbose")]
//! ```

use std::fmt;

/// Decoded `key:value` properties in first-seen key order.
///
/// Inserting an existing key replaces its value in place.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Props {
    entries: Vec<(String, String)>
}

impl Props {
    /// Insert or replace a property.
    pub fn insert(&mut self, key: String, value: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value))
        }
    }

    /// Iterate properties in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Metadata string that cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A quoted span was still open at the end of input.
    UnterminatedQuote {
        /// The opening quote character.
        quote:  char,
        /// Byte offset of the opening quote.
        offset: usize
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedQuote {
                quote,
                offset
            } => write!(f, "unterminated quote {quote} opened at offset {offset}")
        }
    }
}

/// Scanner state for one `key:value` pair.
#[derive(Default)]
struct Pair {
    key:       String,
    value:     String,
    in_value:  bool,
    collected: bool
}

impl Pair {
    fn push(&mut self, ch: char) {
        self.collected = true;
        if self.in_value {
            self.value.push(ch);
        } else {
            self.key.push(ch);
        }
    }

    fn flush_into(&mut self, props: &mut Props) {
        let pair = std::mem::take(self);
        props.insert(pair.key, pair.value);
    }
}

fn is_quote(ch: char) -> bool {
    matches!(ch, '\'' | '"' | '`')
}

/// Decode a metadata string into properties.
///
/// An empty or all-space string decodes to empty [`Props`].
///
/// # Errors
///
/// Returns [`LexError::UnterminatedQuote`] when a quote is never closed.
///
/// # Example
///
/// ```rust,ignore
/// let props = parse_props("type:option name:'Dry Run'")?;
/// let name = props.iter().find(|(k, _)| *k == "name");
/// assert_eq!(name, Some(("name", "Dry Run")));
/// ```
pub fn parse_props(src: &str) -> Result<Props, LexError> {
    let mut props = Props::default();
    let mut pair = Pair::default();
    let mut open: Option<(char, usize)> = None;

    for (offset, ch) in src.char_indices() {
        match open {
            Some((quote, _)) if ch == quote => open = None,
            Some(_) if is_quote(ch) => {}
            Some(_) => pair.push(ch),
            None if ch == ':' => pair.in_value = true,
            None if ch == ' ' => {
                if pair.collected {
                    pair.flush_into(&mut props);
                }
            }
            None if is_quote(ch) => open = Some((ch, offset)),
            None => pair.push(ch)
        }
    }

    if let Some((quote, offset)) = open {
        return Err(LexError::UnterminatedQuote {
            quote,
            offset
        });
    }

    if pair.collected && !pair.key.is_empty() {
        pair.flush_into(&mut props);
    }

    Ok(props)
}
