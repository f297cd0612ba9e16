//! JSON file store.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::board::Scoreboard;
use crate::error::LedgerResult;
use crate::store::ScoreStore;

/// Stores the scoreboard as a single pretty-printed JSON document.
///
/// Each save writes a uniquely named temporary file next to the target and
/// renames it into place, so concurrent writers never share a temp file and a
/// reader sees either the old or the new snapshot.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    /// A store backed by the file at `path`. Nothing is touched until the
    /// first load or save.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The score file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn temp_file(&self) -> LedgerResult<NamedTempFile> {
        let prefix = match self.path.file_name() {
            Some(name) => format!(".{}.", name.to_string_lossy()),
            None => ".scores.".to_string(),
        };
        let file = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(".tmp")
            .tempfile_in(self.dir())?;
        Ok(file)
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> LedgerResult<Scoreboard> {
        if !self.path.exists() {
            return Ok(Scoreboard::new());
        }
        let text = fs::read_to_string(&self.path)?;
        if text.trim().is_empty() {
            return Ok(Scoreboard::new());
        }
        let board = serde_json::from_str(&text)?;
        debug!("Loaded scores from {}", self.path.display());
        Ok(board)
    }

    fn save(&self, board: &Scoreboard) -> LedgerResult<()> {
        fs::create_dir_all(self.dir())?;
        let json = serde_json::to_string_pretty(board)?;

        let mut temp = self.temp_file()?;
        temp.write_all(json.as_bytes())?;
        temp.flush()?;
        // A failed persist drops the temp file, which removes it.
        temp.persist(&self.path).map_err(|e| e.error)?;

        debug!("Saved scores to {}", self.path.display());
        Ok(())
    }
}
