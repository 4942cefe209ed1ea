//! JSON-file-backed gallery of generated media.
//!
//! Mutations persist immediately. Artifact payload paths are plain
//! filesystem paths; deleting the underlying files leaves a dangling
//! entry, mirroring how ephemeral resource handles behaved in the
//! system this replaces. The store does not try to repair that.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use crate::foundation::error::{ClipsynthError, ClipsynthResult};
use crate::media::artifact::MediaArtifact;

/// One persisted, browsable record wrapping a media artifact.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct GalleryEntry {
    pub id: u64,
    /// Unix timestamp (seconds) of creation.
    pub created_at: u64,
    /// Originating tool id (e.g. `text-to-video`).
    pub tool: String,
    /// Snapshot of the generation settings that produced the artifact.
    pub settings: serde_json::Value,
    pub artifact: MediaArtifact,
}

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
struct GalleryFile {
    next_id: u64,
    entries: Vec<GalleryEntry>,
}

/// Gallery store bound to one JSON file.
#[derive(Debug)]
pub struct GalleryStore {
    path: PathBuf,
    state: GalleryFile,
}

impl GalleryStore {
    /// Load the store at `path`, initializing an empty one if the file
    /// does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> ClipsynthResult<Self> {
        let path = path.into();
        let state = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| {
                ClipsynthError::storage(format!(
                    "gallery file '{}' is not valid JSON: {e}",
                    path.display()
                ))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => GalleryFile::default(),
            Err(e) => {
                return Err(ClipsynthError::storage(format!(
                    "failed to read gallery file '{}': {e}",
                    path.display()
                )));
            }
        };
        Ok(Self { path, state })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.state.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.entries.is_empty()
    }

    /// Append an artifact; assigns an id and timestamp, persists, and
    /// returns the stored entry.
    pub fn add(
        &mut self,
        artifact: MediaArtifact,
        tool: impl Into<String>,
        settings: serde_json::Value,
    ) -> ClipsynthResult<&GalleryEntry> {
        let id = self.state.next_id;
        self.state.next_id += 1;
        let entry = GalleryEntry {
            id,
            created_at: unix_now(),
            tool: tool.into(),
            settings,
            artifact,
        };
        self.state.entries.push(entry);
        self.persist()?;
        debug!(id, "gallery entry added");
        Ok(&self.state.entries[self.state.entries.len() - 1])
    }

    /// Delete an entry by id; persists when something was removed.
    pub fn remove(&mut self, id: u64) -> ClipsynthResult<bool> {
        let before = self.state.entries.len();
        self.state.entries.retain(|e| e.id != id);
        if self.state.entries.len() == before {
            return Ok(false);
        }
        self.persist()?;
        debug!(id, "gallery entry removed");
        Ok(true)
    }

    pub fn get(&self, id: u64) -> Option<&GalleryEntry> {
        self.state.entries.iter().find(|e| e.id == id)
    }

    /// All entries, newest first.
    pub fn iter_newest_first(&self) -> impl Iterator<Item = &GalleryEntry> {
        self.state.entries.iter().rev()
    }

    /// One page of entries, newest first. Pages are 1-based; an
    /// out-of-range page is empty.
    pub fn page(&self, page: usize, page_size: usize) -> Vec<&GalleryEntry> {
        if page == 0 || page_size == 0 {
            return Vec::new();
        }
        self.iter_newest_first()
            .skip((page - 1) * page_size)
            .take(page_size)
            .collect()
    }

    fn persist(&self) -> ClipsynthResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ClipsynthError::storage(format!(
                    "failed to create gallery directory '{}': {e}",
                    parent.display()
                ))
            })?;
        }
        let json = serde_json::to_string_pretty(&self.state).map_err(|e| {
            ClipsynthError::storage(format!("failed to serialize gallery: {e}"))
        })?;
        std::fs::write(&self.path, json).map_err(|e| {
            ClipsynthError::storage(format!(
                "failed to write gallery file '{}': {e}",
                self.path.display()
            ))
        })
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "../../tests/unit/gallery/store.rs"]
mod tests;
