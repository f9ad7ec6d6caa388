//! Core token -> HTML rendering.
//!
//! This module provides the single-pass rendering state machine that
//! transforms the token stream into one flat HTML document. No I/O is
//! performed here - the caller owns reading input and writing the finished
//! document. Each token is processed exactly once, in arrival order; output
//! is appended to an owned string and never re-read.

use std::fmt::Write;

use tracing::{error, warn};

use crate::books;
use crate::error::{Error, Result};
use crate::usfm::{InlineStyle, MarkerKind, Token};
use crate::util::zero_pad;

use super::blocks::BlockState;
use super::head;
use super::notes::{Accumulator, NoteKind};
use super::reference::resolve_body;

/// Per-book rendering state.
///
/// A book boundary replaces this wholesale with a fresh instance so no
/// stale field can survive the boundary. Chapter and verse are carried
/// zero-padded so generated ids sort in document order.
#[derive(Debug)]
struct DocumentState {
    /// Canonical book code from the `\id` payload; empty before the first.
    book: String,
    chapter: String,
    raw_chapter: String,
    verse: String,
    raw_verse: String,
    chapter_label: Option<String>,
    header_emitted: bool,
    chapter_seen: bool,
    emphasis_open: bool,
    blocks: BlockState,
    footnotes: Accumulator,
    crossrefs: Accumulator,
}

impl DocumentState {
    fn new(book: &str) -> Self {
        Self {
            book: book.to_string(),
            chapter: "000".to_string(),
            raw_chapter: "0".to_string(),
            verse: "000".to_string(),
            raw_verse: "0".to_string(),
            chapter_label: None,
            header_emitted: false,
            chapter_seen: false,
            emphasis_open: false,
            blocks: BlockState::new(),
            footnotes: Accumulator::new(NoteKind::Footnote),
            crossrefs: Accumulator::new(NoteKind::CrossRef),
        }
    }
}

/// The rendering state machine.
///
/// Construction emits the fixed document head; [`Renderer::feed`] consumes
/// one token at a time; [`Renderer::finish`] force-closes anything still
/// open, appends the footer, and returns the document.
pub struct Renderer {
    out: String,
    state: DocumentState,
}

impl Renderer {
    pub fn new(title: &str) -> Self {
        Self {
            out: head::document_head(title),
            state: DocumentState::new(""),
        }
    }

    /// Process one token.
    ///
    /// Fails only on structural defects in the stream (a payload on a
    /// payload-less marker); every content-level oddity degrades instead.
    pub fn feed(&mut self, token: &Token) -> Result<()> {
        if !token.kind.takes_payload() && !token.value.is_empty() {
            return Err(Error::Markup(format!(
                "marker {:?} must not carry a payload (got {:?})",
                token.kind, token.value
            )));
        }

        match token.kind {
            MarkerKind::Id => self.begin_book(&token.value),
            MarkerKind::Header | MarkerKind::MainTitle => self.supply_header(&token.value),
            MarkerKind::Toc(2) => self.supply_header(&token.value),
            // Long and tertiary TOC text is consumed with no output
            MarkerKind::Toc(_) => {}
            MarkerKind::ChapterLabel => self.chapter_label(&token.value),
            MarkerKind::Chapter => self.begin_chapter(&token.value),
            MarkerKind::Verse => self.begin_verse(&token.value),

            MarkerKind::Paragraph => {
                self.state.blocks.open_paragraph(&mut self.out);
                self.text(&token.value);
            }
            MarkerKind::Indent(level) => {
                self.state.blocks.open_indent(level, &mut self.out);
                self.text(&token.value);
            }
            MarkerKind::Heading(level) => self.heading(level, &token.value),
            MarkerKind::ListItem(level) => {
                self.state.blocks.open_item(level, &mut self.out);
                self.text(&token.value);
            }

            MarkerKind::InlineStart(style) => self.inline_start(style, &token.value),
            MarkerKind::InlineEnd(style) => self.inline_end(style),

            MarkerKind::NoteStart => self.note_start(&token.value),
            MarkerKind::NoteEnd => self.state.footnotes.close(),
            MarkerKind::NoteOrigin
            | MarkerKind::NoteKeyword
            | MarkerKind::NoteVerse
            | MarkerKind::NoteText => {
                self.state.footnotes.append(&substitute(&token.value));
            }
            MarkerKind::NoteQuoteStart => {
                self.state.footnotes.open_emphasis();
                self.state.footnotes.append(&substitute(&token.value));
            }
            MarkerKind::NoteQuoteEnd => self.state.footnotes.close_emphasis(),

            MarkerKind::XrefStart => self.xref_start(&token.value),
            MarkerKind::XrefEnd => self.state.crossrefs.close(),
            MarkerKind::XrefOrigin => self.state.crossrefs.set_origin(&token.value),
            MarkerKind::XrefTarget => {
                self.state.crossrefs.append(&substitute(&token.value));
            }

            MarkerKind::TableRow => self.state.blocks.open_row(&mut self.out),
            MarkerKind::TableCell(rank) => {
                let text = substitute(&token.value);
                self.state.blocks.cell(rank, false, text.trim_end(), &mut self.out);
            }
            MarkerKind::TableCellRight(rank) => {
                let text = substitute(&token.value);
                self.state.blocks.cell(rank, true, text.trim_end(), &mut self.out);
            }

            MarkerKind::Text => self.text(&token.value),
        }

        Ok(())
    }

    /// Force-close any open capture, list, and container, flush both
    /// accumulators, and return the finished document.
    pub fn finish(mut self) -> String {
        self.state.footnotes.close();
        self.state.crossrefs.close();
        self.state.blocks.close_all(&mut self.out);
        self.state.footnotes.flush(&mut self.out, |text| text.to_string());
        self.state.crossrefs.flush(&mut self.out, resolve_body);
        self.out.push_str(head::DOCUMENT_FOOT);
        self.out
    }

    /// Book boundary: flush everything belonging to the previous book,
    /// then replace the whole state with a fresh instance.
    fn begin_book(&mut self, payload: &str) {
        self.state.footnotes.close();
        self.state.crossrefs.close();
        self.state.footnotes.flush(&mut self.out, |text| text.to_string());
        self.state.crossrefs.flush(&mut self.out, resolve_body);
        self.state.blocks.close_all(&mut self.out);

        let code = payload
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_uppercase();
        self.state = DocumentState::new(&code);
    }

    /// First header-supplying marker wins; later ones are ignored.
    fn supply_header(&mut self, text: &str) {
        if self.state.header_emitted {
            return;
        }
        let name = text.trim();
        if name.is_empty() {
            return;
        }
        self.emit_header(name);
    }

    fn emit_header(&mut self, name: &str) {
        writeln!(
            self.out,
            "<h1 class=\"book\" id=\"{}\">{}</h1>",
            self.state.book,
            substitute(name)
        )
        .unwrap();
        self.state.header_emitted = true;
    }

    fn chapter_label(&mut self, text: &str) {
        if self.state.chapter_seen {
            // Too late to take effect without duplicating chapter numbers
            error!(
                book = %self.state.book,
                chapter = %self.state.raw_chapter,
                "chapter label after chapter numbering started; ignoring"
            );
            return;
        }
        self.state.chapter_label = Some(text.trim().to_string());
    }

    fn begin_chapter(&mut self, number: &str) {
        if !self.state.header_emitted {
            let name = books::name_for_code(&self.state.book)
                .unwrap_or(self.state.book.as_str())
                .to_string();
            warn!(
                book = %self.state.book,
                "no header marker before first chapter; using positional book name"
            );
            self.emit_header(&name);
        }

        self.state.footnotes.close();
        self.state.blocks.close_all(&mut self.out);
        self.state.footnotes.flush(&mut self.out, |text| text.to_string());
        self.state.crossrefs.flush(&mut self.out, resolve_body);
        self.state.footnotes.reset_seq();

        self.state.chapter_seen = true;
        self.state.raw_chapter = number.trim().to_string();
        self.state.chapter = zero_pad(number, 3);
        self.state.raw_verse = "0".to_string();
        self.state.verse = "000".to_string();

        let heading = match &self.state.chapter_label {
            Some(label) => format!("{} {}", label, self.state.raw_chapter),
            None => self.state.raw_chapter.clone(),
        };
        writeln!(
            self.out,
            "<h2 class=\"chapter\" id=\"{}-ch-{}\">{}</h2>",
            self.state.book, self.state.chapter, heading
        )
        .unwrap();
    }

    fn begin_verse(&mut self, number: &str) {
        self.state.blocks.set_list_level(0, &mut self.out);
        self.state.footnotes.close();

        self.state.raw_verse = number.trim().to_string();
        self.state.verse = zero_pad(number, 3);

        write!(
            self.out,
            "<span class=\"verse\" id=\"{}-ch-{}-v-{}\">{}</span> ",
            self.state.book, self.state.chapter, self.state.verse, self.state.raw_verse
        )
        .unwrap();
    }

    fn heading(&mut self, level: u8, text: &str) {
        self.state.blocks.close_all(&mut self.out);
        let tag_level = level + 2; // h1 is the book, h2 the chapter
        writeln!(
            self.out,
            "<h{tag_level}>{}</h{tag_level}>",
            substitute(text).trim_end()
        )
        .unwrap();
    }

    fn note_start(&mut self, payload: &str) {
        let label = format!("{}:{}", self.state.raw_chapter, self.state.raw_verse);
        let (book, chapter, verse) = (
            self.state.book.clone(),
            self.state.chapter.clone(),
            self.state.verse.clone(),
        );
        self.state.footnotes.open(
            &substitute(payload),
            &book,
            &chapter,
            &verse,
            &label,
            &mut self.out,
        );
    }

    fn xref_start(&mut self, payload: &str) {
        let label = format!("{}:{}", self.state.raw_chapter, self.state.raw_verse);
        let (book, chapter, verse) = (
            self.state.book.clone(),
            self.state.chapter.clone(),
            self.state.verse.clone(),
        );
        self.state.crossrefs.open(
            &substitute(payload),
            &book,
            &chapter,
            &verse,
            &label,
            &mut self.out,
        );
    }

    fn inline_start(&mut self, style: InlineStyle, payload: &str) {
        // Inside an open capture, inline content belongs to the buffer
        if self.state.footnotes.is_capturing() {
            if style == InlineStyle::Emphasis {
                self.state.footnotes.open_emphasis();
            }
            self.state.footnotes.append(&substitute(payload));
            return;
        }
        if self.state.crossrefs.is_capturing() {
            self.state.crossrefs.append(&substitute(payload));
            return;
        }

        if style == InlineStyle::Emphasis {
            self.state.emphasis_open = true;
        }
        let (open, _) = style_tags(style);
        self.out.push_str(open);
        self.out.push_str(&substitute(payload));
    }

    fn inline_end(&mut self, style: InlineStyle) {
        if self.state.footnotes.is_capturing() {
            if style == InlineStyle::Emphasis {
                self.state.footnotes.close_emphasis();
            }
            return;
        }
        if self.state.crossrefs.is_capturing() {
            return;
        }

        if style == InlineStyle::Emphasis {
            // Generic emphasis is the only flag-guarded pair
            if self.state.emphasis_open {
                self.out.push_str("</em>");
                self.state.emphasis_open = false;
            }
            return;
        }
        // All other pairs close unconditionally, opened or not
        let (_, close) = style_tags(style);
        self.out.push_str(close);
    }

    /// Route a text run: open footnote buffer, else open cross-reference
    /// buffer, else the output, applying the tilde rule.
    fn text(&mut self, value: &str) {
        if value.is_empty() {
            return;
        }
        let text = substitute(value);
        if self.state.footnotes.is_capturing() {
            self.state.footnotes.append(&text);
        } else if self.state.crossrefs.is_capturing() {
            self.state.crossrefs.append(&text);
        } else {
            self.out.push_str(&text);
        }
    }
}

/// The sole escaping rule applied to written text: `~` is a non-breaking
/// space in the source format.
fn substitute(text: &str) -> String {
    text.replace('~', "&#160;")
}

/// Open/close tag pair for an inline style.
fn style_tags(style: InlineStyle) -> (&'static str, &'static str) {
    match style {
        InlineStyle::Emphasis => ("<em>", "</em>"),
        InlineStyle::Bold => ("<b>", "</b>"),
        InlineStyle::Italic => ("<i>", "</i>"),
        InlineStyle::BoldItalic => ("<b><i>", "</i></b>"),
        InlineStyle::Added => ("<span class=\"add\">", "</span>"),
        InlineStyle::Keyword => ("<span class=\"k\">", "</span>"),
        InlineStyle::Foreign => ("<span class=\"tl\">", "</span>"),
        InlineStyle::Deity => ("<span class=\"nd\">", "</span>"),
        InlineStyle::WordsOfChrist => ("<span class=\"wj\">", "</span>"),
        InlineStyle::Acrostic => ("<span class=\"qac\">", "</span>"),
        InlineStyle::BookName => ("<span class=\"bk\">", "</span>"),
        InlineStyle::Selah => ("<span class=\"qs\">", "</span>"),
    }
}

/// Render a full token stream into one HTML document.
pub fn render_document(tokens: &[Token], title: &str) -> Result<String> {
    let mut renderer = Renderer::new(title);
    for token in tokens {
        renderer.feed(token)?;
    }
    Ok(renderer.finish())
}
