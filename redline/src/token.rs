//! Splitting markup into word, whitespace and tag tokens.
//!
//! The tokenizer is a three-state scanner over characters. It never parses
//! tag names or attributes: a tag is everything from `<` through the next
//! `>`, inclusive. An unterminated `<` swallows the rest of the input.
//!
//! Tokens are slices of the input, so joining them in order gives back the
//! input exactly.

use crate::tracing_macros::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Text,
    Tag,
    Whitespace,
}

/// Split `markup` into tokens.
///
/// Each token is one of:
/// - a run of characters that are neither whitespace nor `<`
/// - a run of whitespace
/// - a tag, `<` through the matching `>`
pub fn tokenize(markup: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut mode = Mode::Text;
    let mut start = 0;

    for (i, c) in markup.char_indices() {
        match mode {
            Mode::Text => {
                if c == '<' {
                    flush(&mut tokens, &markup[start..i]);
                    start = i;
                    mode = Mode::Tag;
                } else if c.is_whitespace() {
                    flush(&mut tokens, &markup[start..i]);
                    start = i;
                    mode = Mode::Whitespace;
                }
            }
            Mode::Tag => {
                if c == '>' {
                    let end = i + c.len_utf8();
                    flush(&mut tokens, &markup[start..end]);
                    start = end;
                    // Tests the terminator itself, which is never whitespace,
                    // so a tag always hands back to text mode.
                    mode = if c.is_whitespace() {
                        Mode::Whitespace
                    } else {
                        Mode::Text
                    };
                }
            }
            Mode::Whitespace => {
                if c == '<' {
                    flush(&mut tokens, &markup[start..i]);
                    start = i;
                    mode = Mode::Tag;
                } else if !c.is_whitespace() {
                    flush(&mut tokens, &markup[start..i]);
                    start = i;
                    mode = Mode::Text;
                }
            }
        }
    }
    flush(&mut tokens, &markup[start..]);

    debug!(bytes = markup.len(), tokens = tokens.len(), "tokenized");
    tokens
}

fn flush<'a>(tokens: &mut Vec<&'a str>, span: &'a str) {
    if !span.is_empty() {
        tokens.push(span);
    }
}

/// Whether `token` is a complete tag, optionally surrounded by whitespace.
///
/// A tag needs at least one character between `<` and `>` and no other `>`.
/// `<>` and an unterminated `<p` are not tags.
pub fn is_tag(token: &str) -> bool {
    token
        .trim()
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
        .is_some_and(|inner| !inner.is_empty() && !inner.contains('>'))
}
