//! Backslash-marker tokenizer.
//!
//! Turns raw USFM text into the ordered token stream consumed by the
//! renderer. One token per tag-plus-value; text between markers becomes
//! `Text` tokens. Marker positions are located with `memchr`, everything
//! else is straightforward slicing.

use memchr::memchr;

use crate::error::{Error, Result};

use super::marker::{MarkerKind, Token};

/// Tokenize one USFM document.
///
/// Whitespace inside runs is word-normalized (internal runs of whitespace
/// collapse to a single space); a leading or trailing space survives as a
/// single space so adjacent runs don't jam together. Closing markers never
/// take a payload - their trailing text becomes a separate `Text` token.
/// Unknown markers and stray backslashes are structural defects and abort.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();

    // Anything before the first marker is front matter text.
    let mut pos = memchr(b'\\', bytes).unwrap_or(bytes.len());
    push_text(&mut tokens, &input[..pos]);

    while pos < bytes.len() {
        let name_start = pos + 1;
        let mut name_end = name_start;
        while name_end < bytes.len()
            && (bytes[name_end].is_ascii_lowercase() || bytes[name_end].is_ascii_digit())
        {
            name_end += 1;
        }
        let mut marker_end = name_end;
        if marker_end < bytes.len() && bytes[marker_end] == b'*' {
            marker_end += 1;
        }
        let name = &input[name_start..marker_end];
        if name.is_empty() {
            return Err(Error::Markup(format!("stray backslash at byte {pos}")));
        }
        let kind = MarkerKind::from_name(name)
            .ok_or_else(|| Error::Markup(format!("unknown marker \\{name}")))?;

        let run_start = marker_end;
        let run_end = memchr(b'\\', &bytes[run_start..])
            .map(|i| run_start + i)
            .unwrap_or(bytes.len());
        let run = &input[run_start..run_end];

        match kind {
            _ if !kind.takes_payload() => {
                tokens.push(Token::new(kind, ""));
                push_text(&mut tokens, run);
            }
            MarkerKind::Chapter | MarkerKind::Verse => {
                // Only the leading number word is the payload; the rest of
                // the run is ordinary text.
                let trimmed = run.trim_start();
                let split = trimmed
                    .find(char::is_whitespace)
                    .unwrap_or(trimmed.len());
                tokens.push(Token::new(kind, &trimmed[..split]));
                push_text(&mut tokens, &trimmed[split..]);
            }
            _ => {
                tokens.push(Token::new(kind, normalize_payload(run)));
            }
        }

        pos = run_end;
    }

    Ok(tokens)
}

/// Word-normalize a payload: internal whitespace collapses, the leading
/// separator is dropped, a single trailing space survives.
fn normalize_payload(run: &str) -> String {
    let words: Vec<&str> = run.split_whitespace().collect();
    if words.is_empty() {
        return String::new();
    }
    let mut result = words.join(" ");
    if run.ends_with(char::is_whitespace) {
        result.push(' ');
    }
    result
}

/// Push a word-normalized text run, preserving single leading/trailing
/// spaces. Whitespace-only runs (marker separation) produce no token.
fn push_text(tokens: &mut Vec<Token>, run: &str) {
    let words: Vec<&str> = run.split_whitespace().collect();
    if words.is_empty() {
        return;
    }
    let mut result = String::with_capacity(run.len());
    if run.starts_with(char::is_whitespace) {
        result.push(' ');
    }
    result.push_str(&words.join(" "));
    if run.ends_with(char::is_whitespace) {
        result.push(' ');
    }
    tokens.push(Token::text(result));
}
