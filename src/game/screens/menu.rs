// Generic selectable list
//
// A `Menu` is a column of entries with a wrapping cursor. Only `Select`
// entries can hold the cursor; `Text` and `Blank` entries are skipped.
// Each selectable entry carries a value the owning screen acts on.

use super::{DrawCommand, TextColor};

/// Height of one text line in pixels
pub const LINE_HEIGHT: i32 = 8;

/// Extra pixels between lines
const LINE_SPACING: i32 = 2;

/// A row in a menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry<T> {
    Select { label: String, value: T },
    Text { text: String, color: TextColor },
    Blank,
}

impl<T> MenuEntry<T> {
    pub fn select(label: impl Into<String>, value: T) -> Self {
        MenuEntry::Select {
            label: label.into(),
            value,
        }
    }

    pub fn text(text: impl Into<String>, color: TextColor) -> Self {
        MenuEntry::Text {
            text: text.into(),
            color,
        }
    }

    pub fn is_selectable(&self) -> bool {
        matches!(self, MenuEntry::Select { .. })
    }
}

/// A list of entries with a cursor
#[derive(Debug, Clone)]
pub struct Menu<T> {
    title: Option<String>,
    entries: Vec<MenuEntry<T>>,
    selection: usize,

    /// Rows shown at once; the list scrolls to keep the cursor visible
    visible_rows: Option<usize>,
}

impl<T> Menu<T> {
    /// Create a menu with the cursor on the first selectable entry
    pub fn new(entries: Vec<MenuEntry<T>>) -> Self {
        let mut menu = Self {
            title: None,
            entries,
            selection: 0,
            visible_rows: None,
        };
        menu.selection = menu.first_selectable().unwrap_or(0);
        menu
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_visible_rows(mut self, rows: usize) -> Self {
        self.visible_rows = Some(rows.max(1));
        self
    }

    pub fn entries(&self) -> &[MenuEntry<T>] {
        &self.entries
    }

    /// Replace the entries, keeping the cursor in range
    pub fn set_entries(&mut self, entries: Vec<MenuEntry<T>>) {
        self.entries = entries;
        if !self.set_selection(self.selection.min(self.entries.len().saturating_sub(1))) {
            self.selection = self.first_selectable().unwrap_or(0);
        }
    }

    /// Index of the entry under the cursor
    pub fn selection(&self) -> usize {
        self.selection
    }

    /// Move the cursor to `index`. Returns false (and leaves the cursor) if
    /// that entry cannot be selected.
    pub fn set_selection(&mut self, index: usize) -> bool {
        match self.entries.get(index) {
            Some(entry) if entry.is_selectable() => {
                self.selection = index;
                true
            }
            _ => false,
        }
    }

    /// Move the cursor down, wrapping to the top
    pub fn select_next(&mut self) {
        let len = self.entries.len();
        for step in 1..=len {
            let index = (self.selection + step) % len;
            if self.entries[index].is_selectable() {
                self.selection = index;
                return;
            }
        }
    }

    /// Move the cursor up, wrapping to the bottom
    pub fn select_previous(&mut self) {
        let len = self.entries.len();
        for step in 1..=len {
            let index = (self.selection + len - step) % len;
            if self.entries[index].is_selectable() {
                self.selection = index;
                return;
            }
        }
    }

    /// Value of the entry under the cursor
    pub fn selected_value(&self) -> Option<&T> {
        match self.entries.get(self.selection) {
            Some(MenuEntry::Select { value, .. }) => Some(value),
            _ => None,
        }
    }

    /// Append draw commands for the menu, starting at `top_y`
    pub fn render(&self, top_y: i32, frame: &mut Vec<DrawCommand>) {
        let line = LINE_HEIGHT + LINE_SPACING;
        let mut y = top_y;

        if let Some(title) = &self.title {
            frame.push(DrawCommand::text(title.clone(), y, TextColor::White));
            y += line * 2;
        }

        let (start, end) = self.visible_range();
        for (index, entry) in self.entries.iter().enumerate().take(end).skip(start) {
            match entry {
                MenuEntry::Select { label, .. } if index == self.selection => {
                    frame.push(DrawCommand::text(
                        format!("> {} <", label),
                        y,
                        TextColor::White,
                    ));
                }
                MenuEntry::Select { label, .. } => {
                    frame.push(DrawCommand::text(label.clone(), y, TextColor::Gray));
                }
                MenuEntry::Text { text, color } => {
                    frame.push(DrawCommand::text(text.clone(), y, *color));
                }
                MenuEntry::Blank => {}
            }
            y += line;
        }
    }

    /// Entries shown, as a half-open range
    fn visible_range(&self) -> (usize, usize) {
        let len = self.entries.len();
        let Some(rows) = self.visible_rows.filter(|rows| *rows < len) else {
            return (0, len);
        };

        // Keep the cursor in the middle where possible
        let start = self
            .selection
            .saturating_sub(rows / 2)
            .min(len - rows);
        (start, start + rows)
    }

    fn first_selectable(&self) -> Option<usize> {
        self.entries.iter().position(MenuEntry::is_selectable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_menu() -> Menu<u8> {
        Menu::new(vec![
            MenuEntry::Blank,
            MenuEntry::select("one", 1),
            MenuEntry::text("note", TextColor::Gray),
            MenuEntry::select("two", 2),
            MenuEntry::Blank,
        ])
    }

    fn texts(frame: &[DrawCommand]) -> Vec<&str> {
        frame.iter().filter_map(DrawCommand::as_text).collect()
    }

    #[test]
    fn test_cursor_starts_on_first_selectable() {
        let menu = mixed_menu();
        assert_eq!(menu.selection(), 1);
        assert_eq!(menu.selected_value(), Some(&1));
    }

    #[test]
    fn test_navigation_skips_and_wraps() {
        let mut menu = mixed_menu();

        menu.select_next();
        assert_eq!(menu.selection(), 3);
        menu.select_next();
        assert_eq!(menu.selection(), 1);

        menu.select_previous();
        assert_eq!(menu.selection(), 3);
    }

    #[test]
    fn test_set_selection_rejects_unselectable() {
        let mut menu = mixed_menu();
        assert!(!menu.set_selection(2));
        assert!(!menu.set_selection(10));
        assert_eq!(menu.selection(), 1);
        assert!(menu.set_selection(3));
    }

    #[test]
    fn test_set_entries_clamps_cursor() {
        let mut menu = Menu::new((0..5).map(|i| MenuEntry::select(i.to_string(), i)).collect());
        menu.set_selection(4);

        menu.set_entries((0..3).map(|i| MenuEntry::select(i.to_string(), i)).collect());
        assert_eq!(menu.selection(), 2);
    }

    #[test]
    fn test_empty_menu_navigation() {
        let mut menu: Menu<u8> = Menu::new(Vec::new());
        menu.select_next();
        menu.select_previous();
        assert_eq!(menu.selected_value(), None);
    }

    #[test]
    fn test_render_highlights_cursor() {
        let menu = mixed_menu().with_title("Paused");
        let mut frame = Vec::new();
        menu.render(10, &mut frame);

        assert_eq!(texts(&frame), vec!["Paused", "> one <", "note", "two"]);
        assert_eq!(frame[0], DrawCommand::text("Paused", 10, TextColor::White));
        // Title takes two lines, then the blank entry
        assert_eq!(frame[1], DrawCommand::text("> one <", 40, TextColor::White));
    }

    #[test]
    fn test_render_scrolls_to_cursor() {
        let mut menu = Menu::new((0..10).map(|i| MenuEntry::select(format!("s{}", i), i)).collect())
            .with_visible_rows(3);
        menu.set_selection(6);

        let mut frame = Vec::new();
        menu.render(0, &mut frame);
        assert_eq!(texts(&frame), vec!["s5", "> s6 <", "s7"]);

        menu.set_selection(9);
        frame.clear();
        menu.render(0, &mut frame);
        assert_eq!(texts(&frame), vec!["s7", "s8", "> s9 <"]);
    }
}
