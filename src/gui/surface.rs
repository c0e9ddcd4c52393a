// surface module - the editable text widget with an explicit undo/redo stack
use crate::core::edit_history::{diff, EditHistory};
use egui::text::{CCursor, CCursorRange};
use egui::{Context, Id, ScrollArea, TextEdit, Ui};

const MAX_HISTORY: usize = 500;

pub struct TextSurface {
    id: Id,
    history: EditHistory,
    // previous-frame snapshot, diffed against the buffer to capture each edit
    last_text: String,
    line: usize,   // 1-indexed
    column: usize, // 0-indexed
}

impl TextSurface {
    pub fn new(text: &str) -> Self {
        Self {
            id: Id::new("text_surface"),
            history: EditHistory::new(MAX_HISTORY),
            last_text: text.to_string(),
            line: 1,
            column: 0,
        }
    }

    // wholesale buffer replacement (Open) - edit history does not survive
    pub fn reset(&mut self, text: &str) {
        self.history = EditHistory::new(MAX_HISTORY);
        self.last_text = text.to_string();
        self.line = 1;
        self.column = 0;
    }

    /// Caret position as 1-indexed line and 0-indexed column, the text
    /// widget's native indexing convention.
    pub fn line_col(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    /// Draws the widget. Returns true when this frame changed the buffer.
    pub fn show(&mut self, ui: &mut Ui, text: &mut String) -> bool {
        let mut changed = false;

        ScrollArea::vertical().auto_shrink(false).show(ui, |ui| {
            let output = TextEdit::multiline(text)
                .id(self.id)
                .font(egui::TextStyle::Monospace)
                .desired_width(f32::INFINITY)
                .desired_rows(30)
                .frame(false)
                .lock_focus(true)
                .show(ui);

            if output.response.changed() {
                if let Some(edit) = diff(&self.last_text, text) {
                    self.history.push(edit);
                }
                self.last_text = text.clone();
                changed = true;
            }

            if let Some(range) = output.state.cursor.char_range() {
                let (line, column) = line_col_at(text, range.primary.index);
                self.line = line;
                self.column = column;
            }
        });

        changed
    }

    /// Undo one step; silent no-op on an empty history.
    pub fn undo(&mut self, ctx: &Context, text: &mut String) -> bool {
        match self.history.undo() {
            Some(edit) => {
                edit.revert(text);
                self.last_text = text.clone();
                self.set_caret(ctx, text, edit.caret_after_revert());
                true
            }
            None => false,
        }
    }

    /// Redo one step; silent no-op on an empty history.
    pub fn redo(&mut self, ctx: &Context, text: &mut String) -> bool {
        match self.history.redo() {
            Some(edit) => {
                edit.apply(text);
                self.last_text = text.clone();
                self.set_caret(ctx, text, edit.caret_after_apply());
                true
            }
            None => false,
        }
    }

    fn set_caret(&mut self, ctx: &Context, text: &str, caret: usize) {
        let mut state = TextEdit::load_state(ctx, self.id).unwrap_or_default();
        state
            .cursor
            .set_char_range(Some(CCursorRange::one(CCursor::new(caret))));
        TextEdit::store_state(ctx, self.id, state);

        let (line, column) = line_col_at(text, caret);
        self.line = line;
        self.column = column;
    }
}

fn line_col_at(text: &str, char_idx: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 0;
    for (i, ch) in text.chars().enumerate() {
        if i >= char_idx {
            break;
        }
        if ch == '\n' {
            line += 1;
            column = 0;
        } else {
            column += 1;
        }
    }
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret_at_buffer_start_is_line_one_column_zero() {
        assert_eq!(line_col_at("", 0), (1, 0));
        assert_eq!(line_col_at("hello", 0), (1, 0));
    }

    #[test]
    fn column_counts_chars_since_line_start() {
        assert_eq!(line_col_at("hello", 3), (1, 3));
        assert_eq!(line_col_at("hello", 5), (1, 5));
    }

    #[test]
    fn lines_are_one_indexed_across_newlines() {
        let text = "ab\ncd\nef";
        assert_eq!(line_col_at(text, 2), (1, 2));
        assert_eq!(line_col_at(text, 3), (2, 0));
        assert_eq!(line_col_at(text, 5), (2, 2));
        assert_eq!(line_col_at(text, 8), (3, 2));
    }

    #[test]
    fn offsets_past_the_end_clamp_to_the_last_position() {
        assert_eq!(line_col_at("ab\ncd", 99), (2, 2));
    }

    #[test]
    fn multibyte_chars_count_as_one_column() {
        assert_eq!(line_col_at("héllo", 2), (1, 2));
        assert_eq!(line_col_at("☃\n☃☃", 3), (2, 1));
    }
}
