// crates/validate_doc_set/src/lib.rs

//! Completeness checks for a documentation directory.
//!
//! A [`DocSchema`] lists the documents a doc set must contain and the
//! sections each of them needs. [`validate_doc_set`] reads those documents,
//! collects their TODO markers and reports structural problems. One
//! algorithm serves every schema; the built-in ones are
//! [`DocSchema::ctrlspec`] and [`DocSchema::portolan`].
//!
//! File access goes through the [`DocReader`] trait so the analysis itself
//! stays a pure function over loaded content.

pub mod error;
pub mod reader;
pub mod schema;
pub mod types;
mod validator;

pub use error::{DocSetError, Result, SchemaError};
pub use reader::{DefaultDocReader, DocReader};
pub use schema::{DocKind, DocSchema, BUILTIN_SCHEMAS};
pub use types::{
    DocumentRecord, IssueKind, Severity, TodoItem, ValidationError, ValidationResult,
    ValidationStats, ValidationWarning,
};
pub use validator::{
    analyze_document, load_doc_set, validate_doc_set, validate_doc_set_with_reader,
    validate_documents, DocReport,
};
