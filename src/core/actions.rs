// user actions dispatched from the menu bar and keyboard shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Open,
    Save,
    SaveAs,
    Exit,
    Undo,
    Redo,
}
