use crate::domain::ports::ProgressStore;
use crate::utils::error::Result;
use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Write-through progress ledger: an in-memory set of processed identifiers
/// backed by an append-only file, one identifier per line.
pub struct FileProgressStore {
    path: PathBuf,
    file: File,
    done: HashSet<String>,
}

impl FileProgressStore {
    /// Opens the ledger for append, creating it if absent. An unwritable
    /// ledger fails here, before any item is processed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file,
            done: HashSet::new(),
        })
    }
}

impl ProgressStore for FileProgressStore {
    fn load(&mut self) -> Result<usize> {
        self.done.clear();
        for line in BufReader::new(File::open(&self.path)?).lines() {
            let line = line?;
            let usdot_number = line.trim();
            if !usdot_number.is_empty() {
                self.done.insert(usdot_number.to_string());
            }
        }
        if !self.done.is_empty() {
            info!(
                "resuming previous session: {} identifiers already processed",
                self.done.len()
            );
        }
        Ok(self.done.len())
    }

    fn contains(&self, usdot_number: &str) -> bool {
        self.done.contains(usdot_number)
    }

    fn record(&mut self, usdot_number: &str) -> Result<()> {
        writeln!(self.file, "{usdot_number}")?;
        self.file.flush()?;
        self.done.insert(usdot_number.to_string());
        Ok(())
    }
}
