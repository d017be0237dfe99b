// crates/validate_doc_set/src/types.rs

use std::path::PathBuf;

use serde::Serialize;

pub use extract_todos::TodoItem;
pub use validate_structure::Severity;

use crate::schema::DocKind;

/// One expected document after the read step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentRecord {
    pub kind: DocKind,
    pub path: PathBuf,
    /// Empty unless the document was read successfully.
    pub content: String,
    pub exists: bool,
    /// Set when the file exists but could not be read.
    pub read_error: Option<String>,
}

impl DocumentRecord {
    pub fn name(&self) -> &str {
        &self.kind.name
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    AccessError,
    MalformedStructure,
    DuplicateSection,
    OrderMismatch,
    UnterminatedFence,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub file: String,
    pub message: String,
    pub severity: Severity,
    pub kind: IssueKind,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidationWarning {
    pub file: String,
    pub message: String,
    pub kind: IssueKind,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ValidationStats {
    pub total_docs: usize,
    /// Documents that exist and have no errors.
    pub complete_docs: usize,
    pub missing_docs: Vec<String>,
    pub todo_count: usize,
    pub todos: Vec<TodoItem>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// `true` iff `errors` is empty. Warnings, TODOs and missing documents
    /// do not affect it.
    pub valid: bool,
    pub stats: ValidationStats,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}
