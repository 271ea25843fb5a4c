//! Durable leaderboard backed by a CSV table.
//!
//! The whole table is rewritten on every change (temp file + rename in the
//! same directory), so the file on disk is always a complete, readable table.
//! The in-memory collection is the source of truth for the running session.

use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::model::error::StoreError;
use crate::model::leaderboard_entry::{LeaderboardEntry, HEADER};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Total,
    Timestamp,
    Name,
}

impl SortField {
    pub const ALL: [SortField; 3] = [SortField::Total, SortField::Timestamp, SortField::Name];

    pub fn label(self) -> &'static str {
        match self {
            SortField::Total => "Total",
            SortField::Timestamp => "Timestamp",
            SortField::Name => "Name",
        }
    }

    fn compare(self, a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
        match self {
            SortField::Total => a.total.cmp(&b.total),
            SortField::Timestamp => a.timestamp.cmp(&b.timestamp),
            SortField::Name => a.name.cmp(&b.name),
        }
    }
}

pub struct LeaderboardStore {
    path: PathBuf,
    entries: Vec<LeaderboardEntry>,
}

impl LeaderboardStore {
    /// Load from `path`. Missing or unreadable files give an empty leaderboard.
    pub fn load(path: &Path) -> Self {
        let entries = if path.exists() {
            match read_entries(path) {
                Ok(entries) => {
                    info!(path = %path.display(), count = entries.len(), "leaderboard loaded");
                    entries
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "leaderboard unreadable, starting empty");
                    Vec::new()
                }
            }
        } else {
            debug!(path = %path.display(), "no leaderboard file yet");
            Vec::new()
        };

        Self {
            path: path.to_path_buf(),
            entries,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries in append order.
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keeps the entry in memory even when the write fails.
    pub fn append(&mut self, entry: LeaderboardEntry) -> Result<(), StoreError> {
        debug!(name = %entry.name, scenario = %entry.scenario, total = entry.total, "leaderboard append");
        self.entries.push(entry);
        write_entries(&self.path, &self.entries)
    }

    /// Entries of one scenario (exact match), or everything for `None`.
    pub fn filter(&self, scenario: Option<&str>) -> Vec<&LeaderboardEntry> {
        self.entries
            .iter()
            .filter(|e| scenario.map_or(true, |s| e.scenario == s))
            .collect()
    }

    /// Sorted, de-duplicated scenario names present in the table.
    pub fn scenario_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.iter().map(|e| e.scenario.clone()).collect();
        names.sort();
        names.dedup();
        names
    }

    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.entries.clear();
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "leaderboard cleared");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Write a copy of the current table somewhere else.
    pub fn export_to(&self, path: &Path) -> Result<(), StoreError> {
        write_entries(path, &self.entries)
    }
}

/// Stable sort. Entries that compare equal keep their relative order.
pub fn sort<'a>(
    mut entries: Vec<&'a LeaderboardEntry>,
    field: SortField,
    ascending: bool,
) -> Vec<&'a LeaderboardEntry> {
    if ascending {
        entries.sort_by(|a, b| field.compare(a, b));
    } else {
        entries.sort_by(|a, b| field.compare(b, a));
    }
    entries
}

/// Highest totals first; ties keep append order. Expects entries in append order.
pub fn top_n<'a>(entries: &[&'a LeaderboardEntry], n: usize) -> Vec<&'a LeaderboardEntry> {
    let mut ranked = sort(entries.to_vec(), SortField::Total, false);
    ranked.truncate(n);
    ranked
}

fn read_entries(path: &Path) -> Result<Vec<LeaderboardEntry>, StoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    let mut entries = Vec::new();
    for record in reader.deserialize() {
        let entry: LeaderboardEntry = record?;
        entries.push(entry);
    }
    Ok(entries)
}

fn write_entries(path: &Path, entries: &[LeaderboardEntry]) -> Result<(), StoreError> {
    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => parent,
        None => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    // Unique temp file per write; it is deleted on drop if persisting fails.
    let mut tmp = NamedTempFile::new_in(parent)?;
    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(tmp.as_file_mut());
        writer.write_record(HEADER)?;
        for entry in entries {
            writer.serialize(entry)?;
        }
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;

    tmp.persist(path).map_err(|e| e.error)?;
    debug!(path = %path.display(), count = entries.len(), "leaderboard written");
    Ok(())
}
