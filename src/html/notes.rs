//! Footnote and cross-reference accumulators.
//!
//! Both share the same two-state capture lifecycle (idle -> capturing ->
//! idle): a start marker opens a capture, sub-markers and text append to its
//! buffer, a close marker stores the finished record, and a flush emits all
//! pending records as one block and clears them. Opening while a capture is
//! already open is a defined transition: the previous capture is closed
//! first. Records are keyed by id in a `BTreeMap`; ids embed the zero-padded
//! chapter and verse, so lexicographic order is document order within a
//! chapter.

use std::collections::BTreeMap;
use std::fmt::Write;

/// Which accumulator this is. Footnotes and cross-references differ only in
/// their id prefix, their block markup, and their sequence-reset policy
/// (the latter is the caller's concern).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    Footnote,
    CrossRef,
}

impl NoteKind {
    fn id_prefix(self) -> &'static str {
        match self {
            NoteKind::Footnote => "fn",
            NoteKind::CrossRef => "xr",
        }
    }

    fn block_class(self) -> &'static str {
        match self {
            NoteKind::Footnote => "footnotes",
            NoteKind::CrossRef => "crossreferences",
        }
    }

    fn entry_class(self) -> &'static str {
        match self {
            NoteKind::Footnote => "footnote",
            NoteKind::CrossRef => "crossref",
        }
    }
}

/// A finished footnote or cross-reference, held until the next flush.
#[derive(Debug, Clone)]
pub struct NoteRecord {
    /// Buffered body text (cross-reference bodies are resolved at flush).
    pub text: String,
    /// Anchor of the verse the note hangs off, e.g. `GEN-ch-001-v-003`.
    pub back_anchor: String,
    /// Rendered label, `chapter:verse` unless overridden by an origin marker.
    pub label: String,
    /// Sequence number within the current reset scope.
    pub seq: u32,
}

/// An in-progress capture.
#[derive(Debug)]
struct Capture {
    id: String,
    buf: String,
    back_anchor: String,
    default_label: String,
    origin: Option<String>,
    emphasis_open: bool,
}

/// One accumulator (the renderer owns one per kind).
#[derive(Debug)]
pub struct Accumulator {
    kind: NoteKind,
    seq: u32,
    open: Option<Capture>,
    pending: BTreeMap<String, NoteRecord>,
}

impl Accumulator {
    pub fn new(kind: NoteKind) -> Self {
        Self {
            kind,
            seq: 1,
            open: None,
            pending: BTreeMap::new(),
        }
    }

    pub fn is_capturing(&self) -> bool {
        self.open.is_some()
    }

    /// Reset the sequence number to 1 (chapter boundary, footnotes only;
    /// book boundaries reset by replacing the whole accumulator).
    pub fn reset_seq(&mut self) {
        self.seq = 1;
    }

    /// Open a capture, closing any capture already open. Emits the inline
    /// superscript link for the current sequence number and begins
    /// buffering, stripping a leading `+` continuation marker from the
    /// opening payload.
    pub fn open(
        &mut self,
        payload: &str,
        book: &str,
        chapter: &str,
        verse: &str,
        raw_label: &str,
        out: &mut String,
    ) {
        if self.open.is_some() {
            self.close();
        }
        let id = format!(
            "{}-{}-{}-{}-{}",
            self.kind.id_prefix(),
            book,
            chapter,
            verse,
            self.seq
        );
        write!(
            out,
            "<sup class=\"{}\"><a href=\"#{}\">{}</a></sup>",
            self.kind.id_prefix(),
            id,
            self.seq
        )
        .unwrap();

        let body = payload
            .strip_prefix("+ ")
            .or_else(|| payload.strip_prefix('+'))
            .unwrap_or(payload);

        self.open = Some(Capture {
            id,
            buf: body.to_string(),
            back_anchor: format!("{book}-ch-{chapter}-v-{verse}"),
            default_label: raw_label.to_string(),
            origin: None,
            emphasis_open: false,
        });
    }

    /// Append literal text to the open capture. No-op when idle.
    pub fn append(&mut self, text: &str) {
        if let Some(capture) = &mut self.open {
            capture.buf.push_str(text);
        }
    }

    /// Open an emphasis span inside the capture buffer.
    pub fn open_emphasis(&mut self) {
        if let Some(capture) = &mut self.open {
            capture.buf.push_str("<em>");
            capture.emphasis_open = true;
        }
    }

    /// Close an emphasis span; a no-op if none is pending.
    pub fn close_emphasis(&mut self) {
        if let Some(capture) = &mut self.open
            && capture.emphasis_open
        {
            capture.buf.push_str("</em>");
            capture.emphasis_open = false;
        }
    }

    /// Override the label rendered at flush (cross-reference `\xo`).
    pub fn set_origin(&mut self, origin: &str) {
        if let Some(capture) = &mut self.open {
            capture.origin = Some(origin.trim().to_string());
        }
    }

    /// Close the open capture, storing its record and advancing the
    /// sequence number. No-op when idle.
    pub fn close(&mut self) {
        let Some(mut capture) = self.open.take() else {
            return;
        };
        if capture.emphasis_open {
            capture.buf.push_str("</em>");
        }
        let label = capture.origin.unwrap_or(capture.default_label);
        self.pending.insert(
            capture.id,
            NoteRecord {
                text: capture.buf,
                back_anchor: capture.back_anchor,
                label,
                seq: self.seq,
            },
        );
        self.seq += 1;
    }

    /// Emit all pending records as one block, in id order, and clear them.
    /// `render_body` maps each record's buffered text to its rendered form
    /// (identity for footnotes; reference resolution for cross-references).
    /// No-op when nothing is pending.
    pub fn flush(&mut self, out: &mut String, render_body: impl Fn(&str) -> String) {
        if self.pending.is_empty() {
            return;
        }
        writeln!(out, "<div class=\"{}\">", self.kind.block_class()).unwrap();
        for (id, record) in &self.pending {
            writeln!(
                out,
                "<p class=\"{}\" id=\"{}\"><a href=\"#{}\">{}</a> {}</p>",
                self.kind.entry_class(),
                id,
                record.back_anchor,
                record.label,
                render_body(&record.text).trim_end()
            )
            .unwrap();
        }
        out.push_str("</div>\n");
        self.pending.clear();
    }

    #[cfg(test)]
    fn pending(&self) -> &BTreeMap<String, NoteRecord> {
        &self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_simple(acc: &mut Accumulator, out: &mut String, verse: &str, text: &str) {
        acc.open("+ ", "GEN", "001", verse, &format!("1:{}", verse.trim_start_matches('0')), out);
        acc.append(text);
        acc.close();
    }

    #[test]
    fn test_footnote_id_and_inline_link() {
        let mut acc = Accumulator::new(NoteKind::Footnote);
        let mut out = String::new();

        acc.open("+ a note", "GEN", "001", "003", "1:3", &mut out);
        assert!(out.contains("<sup class=\"fn\"><a href=\"#fn-GEN-001-003-1\">1</a></sup>"));
        acc.close();

        assert!(acc.pending().contains_key("fn-GEN-001-003-1"));
        assert_eq!(acc.pending()["fn-GEN-001-003-1"].text, "a note");
    }

    #[test]
    fn test_continuation_marker_stripped() {
        let mut acc = Accumulator::new(NoteKind::Footnote);
        let mut out = String::new();

        acc.open("+note", "GEN", "001", "001", "1:1", &mut out);
        acc.close();
        assert_eq!(acc.pending()["fn-GEN-001-001-1"].text, "note");
    }

    #[test]
    fn test_reopen_closes_previous() {
        let mut acc = Accumulator::new(NoteKind::Footnote);
        let mut out = String::new();

        acc.open("+ first", "GEN", "001", "001", "1:1", &mut out);
        // No close marker arrived; opening again closes the first capture
        acc.open("+ second", "GEN", "001", "002", "1:2", &mut out);
        acc.close();

        assert_eq!(acc.pending().len(), 2);
        assert_eq!(acc.pending()["fn-GEN-001-001-1"].text, "first");
        assert_eq!(acc.pending()["fn-GEN-001-002-2"].text, "second");
    }

    #[test]
    fn test_sequence_increments_and_resets() {
        let mut acc = Accumulator::new(NoteKind::Footnote);
        let mut out = String::new();

        open_simple(&mut acc, &mut out, "001", "a");
        open_simple(&mut acc, &mut out, "002", "b");
        assert_eq!(acc.pending()["fn-GEN-001-002-2"].seq, 2);

        acc.reset_seq();
        open_simple(&mut acc, &mut out, "003", "c");
        assert_eq!(acc.pending()["fn-GEN-001-003-1"].seq, 1);
    }

    #[test]
    fn test_emphasis_flag_guard() {
        let mut acc = Accumulator::new(NoteKind::Footnote);
        let mut out = String::new();

        acc.open("+ ", "GEN", "001", "001", "1:1", &mut out);
        // Close with nothing open is a no-op
        acc.close_emphasis();
        acc.open_emphasis();
        acc.append("quoted");
        // Capture close flushes the pending </em>
        acc.close();

        assert_eq!(acc.pending()["fn-GEN-001-001-1"].text, "<em>quoted</em>");
    }

    #[test]
    fn test_origin_overrides_label() {
        let mut acc = Accumulator::new(NoteKind::CrossRef);
        let mut out = String::new();

        acc.open("+ ", "GEN", "001", "003", "1:3", &mut out);
        acc.set_origin("1.3: ");
        acc.append("Exodus 3:14");
        acc.close();

        assert_eq!(acc.pending()["xr-GEN-001-003-1"].label, "1.3:");
    }

    #[test]
    fn test_flush_emits_block_in_id_order() {
        let mut acc = Accumulator::new(NoteKind::Footnote);
        let mut out = String::new();

        open_simple(&mut acc, &mut out, "010", "later");
        open_simple(&mut acc, &mut out, "002", "earlier");

        out.clear();
        acc.flush(&mut out, |text| text.to_string());

        assert!(out.starts_with("<div class=\"footnotes\">\n"));
        assert!(out.ends_with("</div>\n"));
        let earlier = out.find("earlier").unwrap();
        let later = out.find("later").unwrap();
        assert!(earlier < later, "entries must be in verse order");

        // Flush clears pending; a second flush emits nothing
        out.clear();
        acc.flush(&mut out, |text| text.to_string());
        assert!(out.is_empty());
    }
}
