//! # selah
//!
//! A fast, lightweight renderer that turns USFM Bible-translation markup
//! into a single self-contained HTML document.
//!
//! ## Features
//!
//! - Single-pass, streaming token renderer (paragraphs, poetry indents,
//!   lists, tables, section headings, inline styles)
//! - Per-chapter footnote and cross-reference blocks with stable anchors
//! - Cross-reference text resolved into live links via a multi-scheme
//!   book-name lookup
//! - Tolerant input decoding (UTF-8 with Windows-1252 fallback)
//!
//! ## Quick Start
//!
//! ```
//! use selah::{tokenize, render_document};
//!
//! let usfm = "\\id GEN\n\\h Genesis\n\\c 1\n\\p\n\\v 1 In the beginning...\n";
//! let tokens = tokenize(usfm).unwrap();
//! let html = render_document(&tokens, "Genesis").unwrap();
//! assert!(html.contains("id=\"GEN-ch-001-v-001\""));
//! ```
//!
//! ## Working with the stream directly
//!
//! [`Renderer`] exposes the token-at-a-time interface when the stream comes
//! from somewhere other than [`tokenize`]:
//!
//! ```
//! use selah::{Renderer, Token, MarkerKind};
//!
//! let mut renderer = Renderer::new("My Bible");
//! renderer.feed(&Token::new(MarkerKind::Id, "JHN")).unwrap();
//! renderer.feed(&Token::new(MarkerKind::Header, "John")).unwrap();
//! let html = renderer.finish();
//! assert!(html.contains("<h1 class=\"book\" id=\"JHN\">John</h1>"));
//! ```

pub mod books;
pub mod error;
pub mod html;
pub mod usfm;
pub(crate) mod util;

pub use error::{Error, Result};
pub use html::{Renderer, render_document};
pub use usfm::{InlineStyle, MarkerKind, Token, tokenize};

use std::path::Path;

/// Read and render one or more USFM files into a single HTML document.
///
/// Files are rendered in argument order; each `\id` marker starts a new
/// book section within the same document.
pub fn render_files<P: AsRef<Path>>(paths: &[P], title: &str) -> Result<String> {
    let mut renderer = Renderer::new(title);
    for path in paths {
        let bytes = std::fs::read(path)?;
        let text = util::decode_text(&bytes);
        for token in tokenize(&text)? {
            renderer.feed(&token)?;
        }
    }
    Ok(renderer.finish())
}
