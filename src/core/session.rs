// session module - remembers the last selected theme across runs
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Error, ErrorKind};
use std::path::Path;

/// Session file, written to the working directory on exit.
pub const SESSION_FILE: &str = "session.json";

fn default_theme() -> String {
    "Light".to_string()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Session {
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Session {
    pub fn new(theme: &str) -> Self {
        Self {
            theme: theme.to_string(),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), Error> {
        let json = serde_json::to_string(self)
            .map_err(|e| Error::new(ErrorKind::InvalidData, e))?;
        fs::write(path, json)
    }

    /// Ok(None) when no session file exists. A present but unreadable or
    /// malformed file is an error the caller must surface, not swallow.
    pub fn restore_from(path: &Path) -> Result<Option<Self>, Error> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)?;
        let session = serde_json::from_str(&content)
            .map_err(|e| Error::new(ErrorKind::InvalidData, e))?;
        Ok(Some(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_file_restores_to_none() {
        let dir = tempfile::tempdir().unwrap();
        let restored = Session::restore_from(&dir.path().join(SESSION_FILE)).unwrap();
        assert_eq!(restored, None);
    }

    #[test]
    fn round_trips_the_selected_theme() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SESSION_FILE);

        Session::new("Dark").save_to(&path).unwrap();
        let restored = Session::restore_from(&path).unwrap().unwrap();
        assert_eq!(restored.theme, "Dark");
    }

    #[test]
    fn save_overwrites_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SESSION_FILE);

        Session::new("Dark").save_to(&path).unwrap();
        Session::new("Light").save_to(&path).unwrap();
        let restored = Session::restore_from(&path).unwrap().unwrap();
        assert_eq!(restored.theme, "Light");
    }

    #[test]
    fn missing_theme_key_defaults_to_light() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SESSION_FILE);
        fs::write(&path, "{}").unwrap();

        let restored = Session::restore_from(&path).unwrap().unwrap();
        assert_eq!(restored.theme, "Light");
    }

    #[test]
    fn malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SESSION_FILE);
        fs::write(&path, "{not json").unwrap();

        let err = Session::restore_from(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn wire_format_is_a_single_theme_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SESSION_FILE);

        Session::new("Dark").save_to(&path).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw, r#"{"theme":"Dark"}"#);
    }
}
