// crates/validate_doc_set/src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Problems with a schema definition.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("schema '{0}' declares no documents")]
    NoDocuments(String),

    #[error("schema '{schema}' declares document '{doc}' more than once")]
    DuplicateDocument { schema: String, doc: String },

    #[error("schema '{schema}': document '{doc}' has an empty file name")]
    EmptyFileName { schema: String, doc: String },

    #[error("schema '{schema}': document '{doc}' file '{file}' must be a relative path inside the docs root")]
    UnsafeFilePath {
        schema: String,
        doc: String,
        file: String,
    },

    #[error("schema '{schema}': document '{doc}' has an empty section name")]
    EmptySection { schema: String, doc: String },

    #[error("unknown built-in schema '{0}'")]
    UnknownSchema(String),

    #[error("failed to read schema file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors that stop a doc-set validation before any document is analysed.
#[derive(Debug, Error)]
pub enum DocSetError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] SchemaError),

    #[error("documentation root not found: {0}")]
    RootNotFound(PathBuf),

    #[error("cannot access documentation root {path}: {source}")]
    RootAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DocSetError>;
