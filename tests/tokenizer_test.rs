//! Tokenizer behavior through the public API.

use selah::{MarkerKind, Token, tokenize};

#[test]
fn test_full_book_opening() {
    let usfm = "\\id GEN World English Bible\n\
                \\h Genesis\n\
                \\toc1 The First Book of Moses, Commonly Called Genesis\n\
                \\toc2 Genesis\n\
                \\mt Genesis\n\
                \\c 1\n\
                \\p\n\
                \\v 1 In the beginning, God created the heavens and the earth.\n";
    let tokens = tokenize(usfm).unwrap();

    let kinds: Vec<MarkerKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            MarkerKind::Id,
            MarkerKind::Header,
            MarkerKind::Toc(1),
            MarkerKind::Toc(2),
            MarkerKind::MainTitle,
            MarkerKind::Chapter,
            MarkerKind::Paragraph,
            MarkerKind::Verse,
            MarkerKind::Text,
        ]
    );
    assert_eq!(tokens[0].value, "GEN World English Bible ");
    assert_eq!(tokens[5].value, "1");
    assert_eq!(tokens[7].value, "1");
    assert_eq!(
        tokens[8].value,
        " In the beginning, God created the heavens and the earth. "
    );
}

#[test]
fn test_inline_styles_round_text() {
    let tokens = tokenize("\\p the \\nd Lord\\nd* said\n").unwrap();
    assert_eq!(tokens[0], Token::new(MarkerKind::Paragraph, "the "));
    assert_eq!(tokens[2].value, "");
    assert_eq!(tokens[3], Token::text(" said "));
}

#[test]
fn test_crossref_sub_markers() {
    let tokens = tokenize("\\x + \\xo 1.3 \\xt Genesis 1:3\\x*\n").unwrap();
    let kinds: Vec<MarkerKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            MarkerKind::XrefStart,
            MarkerKind::XrefOrigin,
            MarkerKind::XrefTarget,
            MarkerKind::XrefEnd,
        ]
    );
    assert_eq!(tokens[1].value, "1.3 ");
    assert_eq!(tokens[2].value, "Genesis 1:3");
}

#[test]
fn test_mt1_aliases_mt() {
    let tokens = tokenize("\\mt1 Genesis\n").unwrap();
    assert_eq!(tokens[0].kind, MarkerKind::MainTitle);
}

#[test]
fn test_unknown_marker_reports_name() {
    let err = tokenize("\\qt text").unwrap_err();
    assert!(err.to_string().contains("qt"));
}

#[test]
fn test_crlf_input() {
    let tokens = tokenize("\\p\r\nline one\r\nline two\r\n").unwrap();
    assert_eq!(tokens[0], Token::new(MarkerKind::Paragraph, ""));
    assert_eq!(tokens[1], Token::text("line one line two "));
}
