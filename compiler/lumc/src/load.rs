//! Reading serialized trees.

use std::io;
use std::path::{Path, PathBuf};

use lum_ir::Node;

/// Failure loading a program file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is not a valid program tree", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Decode a program tree from JSON text.
pub fn parse_program(text: &str) -> Result<Node, serde_json::Error> {
    serde_json::from_str(text)
}

/// Read and decode a program tree from a JSON file.
pub fn load_program(path: impl AsRef<Path>) -> Result<Node, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_program(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
