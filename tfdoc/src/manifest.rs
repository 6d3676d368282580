//! Provider manifest loading.

use crate::error::{Error, Result};
use crate::model::Provider;
use std::fs;
use std::path::Path;

/// Read and deserialize a JSON provider manifest.
pub fn load(path: &Path) -> Result<Provider> {
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| Error::Manifest {
        path: path.to_path_buf(),
        source,
    })
}
