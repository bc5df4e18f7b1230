//! Plain-text save file for a [`MoveJournal`].
//!
//! The format is two lines: a decimal seed and the concatenated move
//! tokens. Writes go through a temp file and an atomic rename so a crash
//! never leaves a torn save. Loading validates the seed line and stops
//! there; a malformed save is the caller's cue to fall back to a freshly
//! seeded world rather than a core error.

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::journal::MoveJournal;

/// Describes why a save file could not be loaded.
#[derive(Debug)]
pub enum JournalLoadError {
    /// Underlying I/O failure (including a missing file).
    Io(io::Error),
    /// The file contains no lines at all.
    EmptyFile,
    /// Line 1 is not a decimal 32-bit seed.
    InvalidSeed { value: String },
}

impl fmt::Display for JournalLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "save file I/O error: {e}"),
            Self::EmptyFile => write!(f, "save file is empty"),
            Self::InvalidSeed { value } => {
                write!(f, "save file seed line {value:?} is not a 32-bit integer")
            }
        }
    }
}

impl Error for JournalLoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Write the journal, creating parent directories as needed.
pub fn write_journal_file(path: &Path, journal: &MoveJournal) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("txt.tmp");
    fs::write(&tmp_path, journal.to_save_text())?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

pub fn load_journal_from_file(path: &Path) -> Result<MoveJournal, JournalLoadError> {
    let content = fs::read_to_string(path).map_err(JournalLoadError::Io)?;
    parse_save_text(&content)
}

/// Parse two-line save text. A missing second line means no recorded moves,
/// and a missing trailing newline is accepted (the original save artifact
/// carried none).
pub fn parse_save_text(text: &str) -> Result<MoveJournal, JournalLoadError> {
    let mut lines = text.lines();
    let Some(seed_line) = lines.next() else {
        return Err(JournalLoadError::EmptyFile);
    };
    let seed = seed_line
        .trim()
        .parse::<i32>()
        .map_err(|_| JournalLoadError::InvalidSeed { value: seed_line.to_string() })?;
    let tokens = lines.next().map(|line| line.chars().collect()).unwrap_or_default();
    Ok(MoveJournal { seed, tokens })
}
