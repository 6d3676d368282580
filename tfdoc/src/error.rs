//! Fatal generation errors.
//!
//! Every variant names the offending entity (and field, where there is one)
//! so the message alone is enough to find the authoring defect upstream.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{entity}: field `{field}` is marked both required and optional")]
    RequiredAndOptional { entity: String, field: String },

    #[error("{entity}: computed field `{field}` of a data source must not be force_new")]
    ForceNewOnComputed { entity: String, field: String },

    #[error("{entity}: description is empty")]
    EmptyDescription { entity: String },

    #[error("{entity}: description has no `Example Usage` section")]
    MissingExampleUsage { entity: String },

    #[error("{entity}: `Example Usage` contains no fenced code block")]
    MissingCodeBlock { entity: String },

    #[error("{entity}: unterminated code fence in `Example Usage`")]
    UnterminatedFence { entity: String },

    #[error("index line {line}: `{name}` appears before any product header")]
    EntityWithoutProduct { line: usize, name: String },

    #[error("index line {line}: `{name}` is not under a `Resource` or `Data Source` header")]
    EntityWithoutSection { line: usize, name: String },

    #[error("index line {line}: `{header}` header appears before any product header")]
    SectionWithoutProduct { line: usize, header: String },

    #[error("{entity}: {kind} is not listed in the index")]
    NotIndexed { entity: String, kind: &'static str },

    #[error("index lists {kind} `{name}` under both `{first}` and `{second}`")]
    DuplicateIndexEntry {
        name: String,
        kind: &'static str,
        first: String,
        second: String,
    },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest {}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
