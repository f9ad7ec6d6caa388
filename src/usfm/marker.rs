//! Token and marker types for the USFM stream.
//!
//! The marker vocabulary is fixed and closed: every marker the tokenizer can
//! produce is a [`MarkerKind`] variant, and the renderer dispatches over it
//! with an exhaustive `match`.

/// One decoded `(marker, payload)` unit from the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: MarkerKind,
    pub value: String,
}

impl Token {
    pub fn new(kind: MarkerKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// A plain text run.
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(MarkerKind::Text, value)
    }
}

/// Paired inline style classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineStyle {
    /// Generic emphasis (`\em`). The only style whose close is flag-guarded.
    Emphasis,
    /// Bold (`\bd`).
    Bold,
    /// Italic (`\it`).
    Italic,
    /// Bold italic (`\bdit`).
    BoldItalic,
    /// Translator-added words (`\add`).
    Added,
    /// Keyword (`\k`).
    Keyword,
    /// Foreign-language / transliterated span (`\tl`).
    Foreign,
    /// Name of deity, rendered small-caps (`\nd`).
    Deity,
    /// Words of Christ (`\wj`).
    WordsOfChrist,
    /// Acrostic character (`\qac`).
    Acrostic,
    /// Quoted book name (`\bk`).
    BookName,
    /// Selah / interjection (`\qs`).
    Selah,
}

/// The closed marker vocabulary.
///
/// Rank-carrying variants hold the marker's numeric suffix (`\q2` is
/// `Indent(2)`); the supported ranges are enforced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Book identification (`\id`): payload begins with the canonical code.
    Id,
    /// Running header text (`\h`).
    Header,
    /// Table-of-contents text (`\toc1`..`\toc3`).
    Toc(u8),
    /// Main title (`\mt`).
    MainTitle,
    /// Chapter label (`\cl`).
    ChapterLabel,
    /// Chapter number (`\c`).
    Chapter,
    /// Verse number (`\v`).
    Verse,
    /// Plain paragraph (`\p`).
    Paragraph,
    /// Indented/poetic line (`\q1`..`\q3`).
    Indent(u8),
    /// Section heading (`\s1`..`\s4`).
    Heading(u8),
    /// List item (`\li1`..`\li4`).
    ListItem(u8),
    /// Inline style open.
    InlineStart(InlineStyle),
    /// Inline style close (`\xx*`). Never takes a payload.
    InlineEnd(InlineStyle),
    /// Footnote open (`\f`): payload is the caller text, usually `"+"`.
    NoteStart,
    /// Footnote close (`\f*`). Never takes a payload.
    NoteEnd,
    /// Footnote origin reference (`\fr`).
    NoteOrigin,
    /// Footnote keyword (`\fk`).
    NoteKeyword,
    /// Verse number inside a footnote (`\fv`).
    NoteVerse,
    /// Footnote quotation open (`\fq`).
    NoteQuoteStart,
    /// Footnote quotation close (`\fq*`). Never takes a payload.
    NoteQuoteEnd,
    /// Footnote body text (`\ft`).
    NoteText,
    /// Cross-reference open (`\x`).
    XrefStart,
    /// Cross-reference close (`\x*`). Never takes a payload.
    XrefEnd,
    /// Cross-reference origin (`\xo`): overrides the rendered label.
    XrefOrigin,
    /// Cross-reference target list (`\xt`).
    XrefTarget,
    /// Table row (`\tr`). Never takes a payload.
    TableRow,
    /// Table cell, ranks 1-6 (`\tc1`..`\tc6`).
    TableCell(u8),
    /// Right-aligned table cell, ranks 1-6 (`\tcr1`..`\tcr6`).
    TableCellRight(u8),
    /// Plain text run between markers.
    Text,
}

impl MarkerKind {
    /// Whether this marker may carry a payload.
    ///
    /// A non-empty payload on a payload-less marker is a structural defect
    /// in the token stream and aborts rendering.
    pub fn takes_payload(self) -> bool {
        !matches!(
            self,
            MarkerKind::InlineEnd(_)
                | MarkerKind::NoteEnd
                | MarkerKind::NoteQuoteEnd
                | MarkerKind::XrefEnd
                | MarkerKind::TableRow
        )
    }

    /// Look up a marker by its tag name (without the backslash).
    ///
    /// Bare `\q`, `\s`, and `\li` normalize to rank 1. Returns `None` for
    /// names outside the vocabulary or ranks outside the supported range.
    pub fn from_name(name: &str) -> Option<Self> {
        use MarkerKind::*;
        let kind = match name {
            "id" => Id,
            "h" => Header,
            "toc1" => Toc(1),
            "toc2" => Toc(2),
            "toc3" => Toc(3),
            "mt" | "mt1" => MainTitle,
            "cl" => ChapterLabel,
            "c" => Chapter,
            "v" => Verse,
            "p" => Paragraph,
            "q" | "q1" => Indent(1),
            "q2" => Indent(2),
            "q3" => Indent(3),
            "s" | "s1" => Heading(1),
            "s2" => Heading(2),
            "s3" => Heading(3),
            "s4" => Heading(4),
            "li" | "li1" => ListItem(1),
            "li2" => ListItem(2),
            "li3" => ListItem(3),
            "li4" => ListItem(4),
            "em" => InlineStart(InlineStyle::Emphasis),
            "em*" => InlineEnd(InlineStyle::Emphasis),
            "bd" => InlineStart(InlineStyle::Bold),
            "bd*" => InlineEnd(InlineStyle::Bold),
            "it" => InlineStart(InlineStyle::Italic),
            "it*" => InlineEnd(InlineStyle::Italic),
            "bdit" => InlineStart(InlineStyle::BoldItalic),
            "bdit*" => InlineEnd(InlineStyle::BoldItalic),
            "add" => InlineStart(InlineStyle::Added),
            "add*" => InlineEnd(InlineStyle::Added),
            "k" => InlineStart(InlineStyle::Keyword),
            "k*" => InlineEnd(InlineStyle::Keyword),
            "tl" => InlineStart(InlineStyle::Foreign),
            "tl*" => InlineEnd(InlineStyle::Foreign),
            "nd" => InlineStart(InlineStyle::Deity),
            "nd*" => InlineEnd(InlineStyle::Deity),
            "wj" => InlineStart(InlineStyle::WordsOfChrist),
            "wj*" => InlineEnd(InlineStyle::WordsOfChrist),
            "qac" => InlineStart(InlineStyle::Acrostic),
            "qac*" => InlineEnd(InlineStyle::Acrostic),
            "bk" => InlineStart(InlineStyle::BookName),
            "bk*" => InlineEnd(InlineStyle::BookName),
            "qs" => InlineStart(InlineStyle::Selah),
            "qs*" => InlineEnd(InlineStyle::Selah),
            "f" => NoteStart,
            "f*" => NoteEnd,
            "fr" => NoteOrigin,
            "fk" => NoteKeyword,
            "fv" => NoteVerse,
            "fq" => NoteQuoteStart,
            "fq*" => NoteQuoteEnd,
            "ft" => NoteText,
            "x" => XrefStart,
            "x*" => XrefEnd,
            "xo" => XrefOrigin,
            "xt" => XrefTarget,
            "tr" => TableRow,
            "tc1" => TableCell(1),
            "tc2" => TableCell(2),
            "tc3" => TableCell(3),
            "tc4" => TableCell(4),
            "tc5" => TableCell(5),
            "tc6" => TableCell(6),
            "tcr1" => TableCellRight(1),
            "tcr2" => TableCellRight(2),
            "tcr3" => TableCellRight(3),
            "tcr4" => TableCellRight(4),
            "tcr5" => TableCellRight(5),
            "tcr6" => TableCellRight(6),
            _ => return None,
        };
        Some(kind)
    }
}
