//! Free-text scripture reference resolution.
//!
//! Cross-reference bodies arrive as semicolon-separated fragments like
//! `"Exodus 3:14; Deut 6:4"`. Each fragment matching the shape
//! `<word> <chapter>:<verse>` is looked up against the book-name tables and,
//! on a match, becomes a live link into the per-book output files.
//! Everything else degrades to plain text; resolution is never fatal.

use crate::books;
use crate::util::zero_pad;

/// Outcome of resolving one fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A matched reference: `href` is `{stem}.html#{anchor}`.
    Link { href: String, label: String },
    /// No match; render the original fragment verbatim, unlinked.
    Plain(String),
}

/// Resolve a single `book chapter:verse` fragment.
///
/// The book-name token is matched against the display-name table, then the
/// reader-name table, exactly first and by substring second; the first match
/// wins. A match at canon position `i` yields the alt code `ALT_CODES[i+1]`
/// (the alt table carries a leading sentinel), filename stem
/// `{i+1:02}-{alt}` and anchor `{alt}-ch-CCC-v-VVV`.
pub fn resolve(fragment: &str) -> Resolution {
    let fragment = fragment.trim();
    let Some((name, chapter, verse)) = split_fragment(fragment) else {
        return Resolution::Plain(fragment.to_string());
    };
    let Some(position) = match_book(name) else {
        return Resolution::Plain(fragment.to_string());
    };

    let alt = books::ALT_CODES[position + 1];
    let stem = format!("{:02}-{}", position + 1, alt);
    let anchor = format!(
        "{}-ch-{}-v-{}",
        alt,
        zero_pad(chapter, 3),
        zero_pad(verse, 3)
    );
    Resolution::Link {
        href: format!("{stem}.html#{anchor}"),
        label: fragment.to_string(),
    }
}

/// Split `<word> <digits>:<digits>` into its three fields, or `None` when
/// the fragment has any other shape.
fn split_fragment(fragment: &str) -> Option<(&str, &str, &str)> {
    let mut words = fragment.split_whitespace();
    let name = words.next()?;
    let position = words.next()?;
    if words.next().is_some() {
        return None;
    }
    let (chapter, verse) = position.split_once(':')?;
    if chapter.is_empty()
        || verse.is_empty()
        || !chapter.bytes().all(|b| b.is_ascii_digit())
        || !verse.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    Some((name, chapter, verse))
}

/// Match a book-name token against the four naming tables, first match
/// wins: exact display name, exact reader name, substring of a display
/// name, substring of a reader name. Returns the 0-based canon position.
fn match_book(name: &str) -> Option<usize> {
    if let Some(i) = books::NAMES.iter().position(|n| *n == name) {
        return Some(i);
    }
    if let Some(i) = books::READER_NAMES.iter().position(|n| *n == name) {
        return Some(i);
    }
    if let Some(i) = books::NAMES.iter().position(|n| n.contains(name)) {
        return Some(i);
    }
    books::READER_NAMES.iter().position(|n| n.contains(name))
}

/// Resolve a full cross-reference body: split on `;`, resolve each
/// fragment, and rejoin, rendering matched fragments as anchors.
pub fn resolve_body(body: &str) -> String {
    let mut parts = Vec::new();
    for fragment in body.split(';') {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            continue;
        }
        match resolve(fragment) {
            Resolution::Link { href, label } => {
                parts.push(format!("<a href=\"{href}\">{label}</a>"));
            }
            Resolution::Plain(text) => parts.push(text),
        }
    }
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_display_name() {
        let resolved = resolve("Genesis 1:3");
        assert_eq!(
            resolved,
            Resolution::Link {
                href: "01-GEN.html#GEN-ch-001-v-003".to_string(),
                label: "Genesis 1:3".to_string(),
            }
        );
    }

    #[test]
    fn test_reader_name_match() {
        // "1 Samuel" is a reader name; display name is "I Samuel".
        // Not a valid fragment shape (three words), so it stays plain...
        assert_eq!(
            resolve("1 Samuel 2:1"),
            Resolution::Plain("1 Samuel 2:1".to_string())
        );
        // ...but the single-word reader name "Revelation" resolves.
        let resolved = resolve("Revelation 22:21");
        assert_eq!(
            resolved,
            Resolution::Link {
                href: "66-REV.html#REV-ch-022-v-021".to_string(),
                label: "Revelation 22:21".to_string(),
            }
        );
    }

    #[test]
    fn test_substring_match() {
        // "Solomon" occurs inside "Song of Solomon" at canon position 21
        let resolved = resolve("Solomon 2:4");
        assert_eq!(
            resolved,
            Resolution::Link {
                href: "22-SOS.html#SOS-ch-002-v-004".to_string(),
                label: "Solomon 2:4".to_string(),
            }
        );
    }

    #[test]
    fn test_first_match_wins() {
        // "John" is an exact display name (the gospel), even though it is
        // also a substring of "I John", "II John", "III John"
        match resolve("John 3:16") {
            Resolution::Link { href, .. } => {
                assert_eq!(href, "43-JHN.html#JHN-ch-003-v-016");
            }
            other => panic!("expected link, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_book_stays_plain() {
        assert_eq!(
            resolve("Unknownbook 1:3"),
            Resolution::Plain("Unknownbook 1:3".to_string())
        );
    }

    #[test]
    fn test_malformed_fragments_stay_plain() {
        assert_eq!(resolve("see above"), Resolution::Plain("see above".to_string()));
        assert_eq!(resolve("Genesis 1"), Resolution::Plain("Genesis 1".to_string()));
        assert_eq!(
            resolve("Genesis 1:x"),
            Resolution::Plain("Genesis 1:x".to_string())
        );
        assert_eq!(resolve(""), Resolution::Plain("".to_string()));
    }

    #[test]
    fn test_zero_padding() {
        match resolve("Psalms 119:176") {
            Resolution::Link { href, .. } => {
                assert_eq!(href, "19-PSM.html#PSM-ch-119-v-176");
            }
            other => panic!("expected link, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_body_mixed() {
        let body = "Genesis 1:3; nowhere 9:9; Exodus 3:14";
        let rendered = resolve_body(body);
        assert_eq!(
            rendered,
            "<a href=\"01-GEN.html#GEN-ch-001-v-003\">Genesis 1:3</a>; \
             nowhere 9:9; \
             <a href=\"02-EXO.html#EXO-ch-003-v-014\">Exodus 3:14</a>"
        );
    }
}
