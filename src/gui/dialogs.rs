// dialogs module - native pickers and message boxes (rfd)
use crate::core::confirm::SaveAnswer;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::path::PathBuf;

pub fn pick_open_path() -> Option<PathBuf> {
    FileDialog::new()
        .add_filter("Text Files", &["txt"])
        .add_filter("All Files", &["*"])
        .pick_file()
}

pub fn pick_save_path() -> Option<PathBuf> {
    FileDialog::new()
        .add_filter("Text Files", &["txt"])
        .add_filter("All Files", &["*"])
        .set_file_name("untitled.txt")
        .save_file()
}

pub fn show_error(message: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Error")
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

// Yes = save, No = discard, anything else (Cancel, closed dialog) = cancel
pub fn ask_save_changes() -> SaveAnswer {
    let result = MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title("Unsaved changes")
        .set_description("You have unsaved changes.\nDo you want to save them?")
        .set_buttons(MessageButtons::YesNoCancel)
        .show();

    match result {
        MessageDialogResult::Yes => SaveAnswer::Save,
        MessageDialogResult::No => SaveAnswer::Discard,
        _ => SaveAnswer::Cancel,
    }
}
