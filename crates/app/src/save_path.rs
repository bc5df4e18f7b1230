//! Platform save-file location.

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::APP_NAME;

const SAVE_FILE_NAME: &str = "save.txt";

/// Per-user data directory for the recorded session, `None` when the
/// platform exposes no home directory.
pub fn default_save_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.data_dir().join(SAVE_FILE_NAME))
}
