//! Fixed document head and footer.

/// Inline stylesheet for the rendered document.
///
/// Classes cover indent levels, chapter/verse numbering, the small-caps
/// tetragrammaton span, and the per-chapter footnote/cross-reference blocks.
const STYLESHEET: &str = r#"body { font-family: Georgia, serif; max-width: 40em; margin: 0 auto; padding: 1em; }
h1.book { text-align: center; }
h2.chapter { margin-top: 1.5em; }
p.indent-1 { margin: 0 0 0 1.5em; }
p.indent-2 { margin: 0 0 0 3em; }
p.indent-3 { margin: 0 0 0 4.5em; }
span.verse { vertical-align: super; font-size: 0.7em; color: #606060; }
span.nd { font-variant: small-caps; }
span.wj { color: #8b0000; }
span.add { font-style: italic; }
span.qs { font-style: italic; float: right; }
span.tl { font-style: italic; }
span.bk { font-style: italic; }
span.qac { font-size: 1.4em; font-weight: bold; }
sup.fn a, sup.xr a { text-decoration: none; }
div.footnotes, div.crossreferences { margin-top: 1em; border-top: 1px solid #c0c0c0; font-size: 0.85em; }
table { border-collapse: collapse; }
td { padding: 0.1em 0.5em; }
td.r { text-align: right; }
"#;

/// Emit the document head with an escaped title splice.
pub fn document_head(title: &str) -> String {
    let mut doc = String::new();
    doc.push_str(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\"/>\n<title>",
    );
    doc.push_str(&escape_title(title));
    doc.push_str("</title>\n<style>\n");
    doc.push_str(STYLESHEET);
    doc.push_str("</style>\n</head>\n<body>\n");
    doc
}

/// Closing markup appended after the last book.
pub const DOCUMENT_FOOT: &str = "</body>\n</html>\n";

/// The title is the one place where arbitrary caller text lands inside
/// markup, so it gets full escaping (body text follows the tilde rule only).
fn escape_title(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}
