// document module - the single open document and its file operations
use std::fs;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

pub struct Document {
    pub text: String,
    pub path: Option<PathBuf>,
    pub has_unsaved_changes: bool,
}

impl Document {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            path: None,
            has_unsaved_changes: false,
        }
    }

    // handle loading a file - reads UTF-8 only, the current document is
    // untouched when this fails
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path)?;
        Ok(Self {
            text,
            path: Some(path.to_path_buf()),
            has_unsaved_changes: false,
        })
    }

    /// Write the buffer to the associated path. The dirty flag is only
    /// cleared when the write succeeds, so a failed save never looks saved.
    pub fn write(&mut self) -> Result<(), Error> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "no file associated"))?;

        fs::write(path, &self.text)?;
        self.has_unsaved_changes = false;
        Ok(())
    }

    // Save As associates the path first, then saves; the reference editor
    // keeps the new path even when the write itself fails
    pub fn set_path(&mut self, path: PathBuf) {
        self.path = Some(path);
    }

    pub fn basename(&self) -> Option<&str> {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
    }

    pub fn title(&self) -> String {
        match self.basename() {
            Some(name) => format!("Editor - {}", name),
            None => "Editor".to_string(),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_populates_text_and_clears_dirty_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "hello\nworld").unwrap();

        let doc = Document::load(&path).unwrap();
        assert_eq!(doc.text, "hello\nworld");
        assert_eq!(doc.path.as_deref(), Some(path.as_path()));
        assert!(!doc.has_unsaved_changes);
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Document::load(&dir.path().join("nope.txt")).is_err());
    }

    #[test]
    fn save_round_trips_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let mut doc = Document::new();
        doc.text = "line one\nline two\n".to_string();
        doc.has_unsaved_changes = true;
        doc.set_path(path.clone());
        doc.write().unwrap();
        assert!(!doc.has_unsaved_changes);

        let reloaded = Document::load(&path).unwrap();
        assert_eq!(reloaded.text, "line one\nline two\n");
    }

    #[test]
    fn write_without_path_fails_and_stays_dirty() {
        let mut doc = Document::new();
        doc.text = "unsaved".to_string();
        doc.has_unsaved_changes = true;

        assert!(doc.write().is_err());
        assert!(doc.has_unsaved_changes);
        assert!(doc.path.is_none());
    }

    #[test]
    fn failed_write_keeps_dirty_flag() {
        let dir = tempfile::tempdir().unwrap();
        let mut doc = Document::new();
        doc.text = "content".to_string();
        doc.has_unsaved_changes = true;
        // a directory path cannot be written as a file
        doc.set_path(dir.path().to_path_buf());

        assert!(doc.write().is_err());
        assert!(doc.has_unsaved_changes);
    }

    #[test]
    fn title_reflects_associated_file() {
        let mut doc = Document::new();
        assert_eq!(doc.title(), "Editor");

        doc.set_path(PathBuf::from("/tmp/some/dir/readme.txt"));
        assert_eq!(doc.title(), "Editor - readme.txt");
    }
}
