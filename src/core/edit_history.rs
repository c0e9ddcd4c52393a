// edit_history module - delta-based undo/redo over a flat text buffer
use std::time::{Duration, Instant};

// A single reversible edit, positioned by char offset into the buffer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Edit {
    Insert { at: usize, text: String },
    Delete { at: usize, text: String },
    // typed over a selection: old text swapped for new at the same offset
    Replace { at: usize, old: String, new: String },
}

pub struct EditHistory {
    undo_stack: Vec<Edit>,
    redo_stack: Vec<Edit>,
    max_history: usize,

    // For grouping rapid edits (like continuous typing)
    last_edit_time: Instant,
    grouping_threshold: Duration,
}

impl EditHistory {
    pub fn new(max_history: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_history,
            last_edit_time: Instant::now(),
            grouping_threshold: Duration::from_millis(500), // group edits within 500ms
        }
    }

    // Push a new edit, merging typing bursts into one undo step
    pub fn push(&mut self, edit: Edit) {
        // A new edit invalidates anything that was undone
        self.redo_stack.clear();

        let now = Instant::now();
        if now.duration_since(self.last_edit_time) <= self.grouping_threshold {
            if let Some(mut last) = self.undo_stack.pop() {
                if Self::try_merge(&mut last, &edit) {
                    self.undo_stack.push(last);
                    self.last_edit_time = now;
                    return;
                }
                self.undo_stack.push(last);
            }
        }

        self.undo_stack.push(edit);
        self.last_edit_time = now;

        // Limit stack size
        if self.undo_stack.len() > self.max_history {
            self.undo_stack.remove(0);
        }
    }

    // Merge adjacent single-run edits; never across a line break so an undo
    // step stays within one line of typing
    fn try_merge(last: &mut Edit, new: &Edit) -> bool {
        match (last, new) {
            // continuous typing
            (
                Edit::Insert { at: a1, text: t1 },
                Edit::Insert { at: a2, text: t2 },
            ) if *a1 + t1.chars().count() == *a2
                && !t1.contains('\n')
                && !t2.contains('\n') =>
            {
                t1.push_str(t2);
                true
            }
            // continuous backspacing
            (
                Edit::Delete { at: a1, text: t1 },
                Edit::Delete { at: a2, text: t2 },
            ) if *a2 + t2.chars().count() == *a1
                && !t1.contains('\n')
                && !t2.contains('\n') =>
            {
                *t1 = format!("{}{}", t2, t1);
                *a1 = *a2;
                true
            }
            // continuous forward deletes
            (
                Edit::Delete { at: a1, text: t1 },
                Edit::Delete { at: a2, text: t2 },
            ) if *a1 == *a2 && !t1.contains('\n') && !t2.contains('\n') => {
                t1.push_str(t2);
                true
            }
            _ => false,
        }
    }

    /// Pop the next edit to undo, or None when the stack is empty.
    pub fn undo(&mut self) -> Option<Edit> {
        let edit = self.undo_stack.pop()?;
        self.redo_stack.push(edit.clone());
        Some(edit)
    }

    /// Pop the next edit to redo, or None when the stack is empty.
    pub fn redo(&mut self) -> Option<Edit> {
        let edit = self.redo_stack.pop()?;
        self.undo_stack.push(edit.clone());
        Some(edit)
    }
}

impl Edit {
    // Apply this edit to the buffer (for redo)
    pub fn apply(&self, text: &mut String) {
        match self {
            Edit::Insert { at, text: inserted } => {
                let start = byte_index(text, *at);
                text.insert_str(start, inserted);
            }
            Edit::Delete { at, text: deleted } => {
                let start = byte_index(text, *at);
                text.replace_range(start..start + deleted.len(), "");
            }
            Edit::Replace { at, old, new } => {
                let start = byte_index(text, *at);
                text.replace_range(start..start + old.len(), new);
            }
        }
    }

    // Reverse this edit (for undo)
    pub fn revert(&self, text: &mut String) {
        match self {
            Edit::Insert { at, text: inserted } => {
                let start = byte_index(text, *at);
                text.replace_range(start..start + inserted.len(), "");
            }
            Edit::Delete { at, text: deleted } => {
                let start = byte_index(text, *at);
                text.insert_str(start, deleted);
            }
            Edit::Replace { at, old, new } => {
                let start = byte_index(text, *at);
                text.replace_range(start..start + new.len(), old);
            }
        }
    }

    // Caret position (char offset) after applying / reverting
    pub fn caret_after_apply(&self) -> usize {
        match self {
            Edit::Insert { at, text } => at + text.chars().count(),
            Edit::Delete { at, .. } => *at,
            Edit::Replace { at, new, .. } => at + new.chars().count(),
        }
    }

    pub fn caret_after_revert(&self) -> usize {
        match self {
            Edit::Insert { at, .. } => *at,
            Edit::Delete { at, text } => at + text.chars().count(),
            Edit::Replace { at, old, .. } => at + old.chars().count(),
        }
    }
}

/// Compute the single edit between two frames of the buffer, as the common
/// prefix/suffix diff in chars. Returns None when the texts are identical.
pub fn diff(old: &str, new: &str) -> Option<Edit> {
    let old_chars: Vec<char> = old.chars().collect();
    let new_chars: Vec<char> = new.chars().collect();

    let mut prefix = 0;
    while prefix < old_chars.len()
        && prefix < new_chars.len()
        && old_chars[prefix] == new_chars[prefix]
    {
        prefix += 1;
    }

    let mut suffix = 0;
    while suffix < old_chars.len() - prefix
        && suffix < new_chars.len() - prefix
        && old_chars[old_chars.len() - 1 - suffix] == new_chars[new_chars.len() - 1 - suffix]
    {
        suffix += 1;
    }

    let removed: String = old_chars[prefix..old_chars.len() - suffix].iter().collect();
    let inserted: String = new_chars[prefix..new_chars.len() - suffix].iter().collect();

    match (removed.is_empty(), inserted.is_empty()) {
        (true, true) => None,
        (true, false) => Some(Edit::Insert {
            at: prefix,
            text: inserted,
        }),
        (false, true) => Some(Edit::Delete {
            at: prefix,
            text: removed,
        }),
        (false, false) => Some(Edit::Replace {
            at: prefix,
            old: removed,
            new: inserted,
        }),
    }
}

fn byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
