//! dv-load: Reads dungeon descriptions from JSON
//!
//! The only place that touches the filesystem. Decoding failures, including
//! a missing required field, surface as [`LoadError::Malformed`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use dv_core::DungeonDescription;

/// Load errors
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File {} not found", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed dungeon description: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Decode a description from a JSON string
pub fn load_from_str(json: &str) -> Result<DungeonDescription, LoadError> {
    Ok(serde_json::from_str(json)?)
}

/// Decode a description from any reader
pub fn load_from_reader(reader: impl Read) -> Result<DungeonDescription, LoadError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load a description from a JSON file
pub fn load_from_file(path: impl AsRef<Path>) -> Result<DungeonDescription, LoadError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let desc = load_from_reader(BufReader::new(file))?;
    debug!(
        path = %path.display(),
        rooms = desc.rooms.len(),
        corridors = desc.corridors.len(),
        entities = desc.entities.len(),
        "loaded dungeon description"
    );
    Ok(desc)
}
