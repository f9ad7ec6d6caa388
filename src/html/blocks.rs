//! Block, list, and table state machine.
//!
//! At most one of paragraph / indent / table is open at any time; opening
//! one force-closes whichever was open. List nesting is an independent axis,
//! but the list is always closed before any container transition so list
//! markup never straddles a block boundary.

/// The currently open structural container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Container {
    #[default]
    None,
    Paragraph,
    Indent(u8),
    Table {
        row_open: bool,
    },
}

/// Container and list state, scoped to one book.
#[derive(Debug, Default)]
pub struct BlockState {
    container: Container,
    list_level: u8,
    item_open: bool,
}

impl BlockState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn container(&self) -> Container {
        self.container
    }

    pub fn list_level(&self) -> u8 {
        self.list_level
    }

    /// Open a plain paragraph, closing the list and any open container.
    pub fn open_paragraph(&mut self, out: &mut String) {
        self.set_list_level(0, out);
        self.close_container(out);
        out.push_str("<p>");
        self.container = Container::Paragraph;
    }

    /// Open an indented paragraph at `level` (1-3).
    pub fn open_indent(&mut self, level: u8, out: &mut String) {
        self.set_list_level(0, out);
        self.close_container(out);
        out.push_str(&format!("<p class=\"indent-{level}\">"));
        self.container = Container::Indent(level);
    }

    /// Open a table, closing the list and any open container.
    pub fn open_table(&mut self, out: &mut String) {
        self.set_list_level(0, out);
        self.close_container(out);
        out.push_str("<table>\n");
        self.container = Container::Table { row_open: false };
    }

    /// Start a table row, opening the table first if absent. A row already
    /// open is closed with a well-formed `</tr>` before the new one opens.
    pub fn open_row(&mut self, out: &mut String) {
        match self.container {
            Container::Table { row_open } => {
                if row_open {
                    out.push_str("</tr>\n");
                }
            }
            _ => self.open_table(out),
        }
        out.push_str("<tr>");
        self.container = Container::Table { row_open: true };
    }

    /// Emit one table cell. A cell arriving outside a row opens the
    /// table and a row first.
    pub fn cell(&mut self, rank: u8, right: bool, text: &str, out: &mut String) {
        if !matches!(self.container, Container::Table { row_open: true }) {
            self.open_row(out);
        }
        if right {
            out.push_str(&format!("<td class=\"c{rank} r\">{text}</td>"));
        } else {
            out.push_str(&format!("<td class=\"c{rank}\">{text}</td>"));
        }
    }

    /// Close whichever container is open, emitting its closing markup.
    pub fn close_container(&mut self, out: &mut String) {
        match self.container {
            Container::None => {}
            Container::Paragraph | Container::Indent(_) => out.push_str("</p>\n"),
            Container::Table { row_open } => {
                if row_open {
                    out.push_str("</tr>\n");
                }
                out.push_str("</table>\n");
            }
        }
        self.container = Container::None;
    }

    /// Close the list and the container. Used at chapter/book boundaries
    /// and at end of document.
    pub fn close_all(&mut self, out: &mut String) {
        self.set_list_level(0, out);
        self.close_container(out);
    }

    /// Move the list to `level`.
    ///
    /// A level change always fully closes the current list to depth 0 and
    /// reopens up to the requested depth; partial deltas are never applied.
    pub fn set_list_level(&mut self, level: u8, out: &mut String) {
        if level == self.list_level {
            return;
        }
        self.close_item(out);
        for _ in 0..self.list_level {
            out.push_str("</ul>\n");
        }
        for _ in 0..level {
            out.push_str("<ul>");
        }
        self.list_level = level;
    }

    /// Start a list item at `level`, closing the previous item first.
    pub fn open_item(&mut self, level: u8, out: &mut String) {
        self.set_list_level(level, out);
        self.close_item(out);
        out.push_str("<li>");
        self.item_open = true;
    }

    fn close_item(&mut self, out: &mut String) {
        if self.item_open {
            out.push_str("</li>");
            self.item_open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_exclusivity() {
        let mut state = BlockState::new();
        let mut out = String::new();

        state.open_paragraph(&mut out);
        assert_eq!(state.container(), Container::Paragraph);

        // Opening an indent closes the paragraph first
        state.open_indent(2, &mut out);
        assert_eq!(state.container(), Container::Indent(2));
        assert!(out.contains("</p>\n<p class=\"indent-2\">"));

        // Opening a table closes the indent first
        state.open_table(&mut out);
        assert_eq!(state.container(), Container::Table { row_open: false });
        assert_eq!(out.matches("</p>").count(), 2);
    }

    #[test]
    fn test_list_full_close_and_reopen() {
        let mut state = BlockState::new();
        let mut out = String::new();

        state.set_list_level(2, &mut out);
        assert_eq!(out, "<ul><ul>");

        out.clear();
        state.set_list_level(1, &mut out);
        // Never a single close: two closes then one reopen
        assert_eq!(out, "</ul>\n</ul>\n<ul>");
        assert_eq!(state.list_level(), 1);
    }

    #[test]
    fn test_list_closed_before_container() {
        let mut state = BlockState::new();
        let mut out = String::new();

        state.open_item(1, &mut out);
        state.open_paragraph(&mut out);

        let ul_close = out.find("</ul>").unwrap();
        let p_open = out.find("<p>").unwrap();
        assert!(ul_close < p_open);
    }

    #[test]
    fn test_items_at_same_level() {
        let mut state = BlockState::new();
        let mut out = String::new();

        state.open_item(1, &mut out);
        out.push_str("first");
        state.open_item(1, &mut out);
        out.push_str("second");
        state.close_all(&mut out);

        assert_eq!(out, "<ul><li>first</li><li>second</li></ul>\n");
    }

    #[test]
    fn test_row_reopen_is_well_formed() {
        let mut state = BlockState::new();
        let mut out = String::new();

        state.open_row(&mut out);
        state.cell(1, false, "a", &mut out);
        state.open_row(&mut out);
        state.cell(1, true, "b", &mut out);
        state.close_container(&mut out);

        assert_eq!(
            out,
            "<table>\n<tr><td class=\"c1\">a</td></tr>\n<tr><td class=\"c1 r\">b</td></tr>\n</table>\n"
        );
    }

    #[test]
    fn test_cell_outside_row_opens_table() {
        let mut state = BlockState::new();
        let mut out = String::new();

        state.cell(2, false, "x", &mut out);
        assert!(out.starts_with("<table>\n<tr><td class=\"c2\">x</td>"));
    }
}
