// crates/validate_doc_set/src/validator.rs

use std::io;
use std::path::Path;

use extract_sections::extract_sections;
use extract_todos::extract_todos;
use validate_structure::{check_sections, Finding, Severity};

use crate::error::{DocSetError, Result};
use crate::reader::{DefaultDocReader, DocReader};
use crate::schema::{DocKind, DocSchema};
use crate::types::{
    DocumentRecord, IssueKind, TodoItem, ValidationError, ValidationResult, ValidationStats,
    ValidationWarning,
};

/// Validates the doc set under `root` against `schema` using the filesystem.
pub fn validate_doc_set(root: &Path, schema: &DocSchema) -> Result<ValidationResult> {
    validate_doc_set_with_reader(&DefaultDocReader, root, schema)
}

/// Validates the doc set under `root` against `schema`, reading documents
/// through `reader`.
///
/// Only configuration and root-level problems are returned as `Err`;
/// everything wrong with individual documents ends up in the result.
pub fn validate_doc_set_with_reader(
    reader: &dyn DocReader,
    root: &Path,
    schema: &DocSchema,
) -> Result<ValidationResult> {
    let docs = load_doc_set(reader, root, schema)?;
    Ok(validate_documents(&docs))
}

/// Reads every document of `schema` from `root`, in declaration order.
pub fn load_doc_set(
    reader: &dyn DocReader,
    root: &Path,
    schema: &DocSchema,
) -> Result<Vec<DocumentRecord>> {
    schema.check()?;
    reader.check_root(root).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            DocSetError::RootNotFound(root.to_path_buf())
        } else {
            DocSetError::RootAccess {
                path: root.to_path_buf(),
                source,
            }
        }
    })?;

    log::debug!(
        "Loading {} document(s) for schema '{}' from {}",
        schema.docs.len(),
        schema.name,
        root.display()
    );

    Ok(schema
        .docs
        .iter()
        .map(|kind| load_document(reader, root, kind))
        .collect())
}

fn load_document(reader: &dyn DocReader, root: &Path, kind: &DocKind) -> DocumentRecord {
    let path = root.join(&kind.file);
    let (content, exists, read_error) = match reader.read_doc(&path) {
        Ok(Some(content)) => (content, true, None),
        Ok(None) => {
            log::debug!("{} is missing", path.display());
            (String::new(), false, None)
        }
        Err(err) => {
            log::warn!("Failed to read {}: {}", path.display(), err);
            (String::new(), true, Some(err.to_string()))
        }
    };
    DocumentRecord {
        kind: kind.clone(),
        path,
        content,
        exists,
        read_error,
    }
}

/// Analyses already loaded documents and aggregates the result.
pub fn validate_documents(docs: &[DocumentRecord]) -> ValidationResult {
    let mut stats = ValidationStats {
        total_docs: docs.len(),
        ..ValidationStats::default()
    };
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for doc in docs {
        if !doc.exists {
            stats.missing_docs.push(doc.name().to_string());
            continue;
        }

        let report = analyze_document(doc);
        log::debug!(
            "{}: {} TODO(s), {} error(s), {} warning(s)",
            doc.kind.file,
            report.todos.len(),
            report.errors.len(),
            report.warnings.len()
        );
        if report.errors.is_empty() {
            stats.complete_docs += 1;
        }
        stats.todos.extend(report.todos);
        errors.extend(report.errors);
        warnings.extend(report.warnings);
    }

    stats.todo_count = stats.todos.len();
    ValidationResult {
        valid: errors.is_empty(),
        stats,
        errors,
        warnings,
    }
}

/// Findings for a single existing document.
#[derive(Debug, Default)]
pub struct DocReport {
    pub todos: Vec<TodoItem>,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

/// Runs TODO extraction and structure validation on one document.
pub fn analyze_document(doc: &DocumentRecord) -> DocReport {
    let file = doc.kind.file.as_str();
    let mut report = DocReport::default();

    if let Some(reason) = &doc.read_error {
        report.errors.push(ValidationError {
            file: file.to_string(),
            message: format!("cannot read document: {reason}"),
            severity: Severity::Error,
            kind: IssueKind::AccessError,
        });
        return report;
    }

    let mut todos = extract_todos(file, &doc.content);
    report.todos.extend(todos.by_ref());
    if todos.ended_in_fence() {
        log::warn!("{} ends inside an unterminated code fence", doc.path.display());
        report.warnings.push(ValidationWarning {
            file: file.to_string(),
            message: "unterminated code fence; the rest of the document was skipped".to_string(),
            kind: IssueKind::UnterminatedFence,
        });
    }

    let sections = extract_sections(&doc.content);
    for check in check_sections(&sections, &doc.kind.sections) {
        for finding in &check.findings {
            let message = finding.describe(&check.section);
            let kind = match finding {
                Finding::Missing => IssueKind::MalformedStructure,
                Finding::Duplicate { .. } => IssueKind::DuplicateSection,
                Finding::OutOfOrder { .. } => IssueKind::OrderMismatch,
            };
            match finding.severity() {
                Severity::Error => report.errors.push(ValidationError {
                    file: file.to_string(),
                    message,
                    severity: Severity::Error,
                    kind,
                }),
                Severity::Warning => report.warnings.push(ValidationWarning {
                    file: file.to_string(),
                    message,
                    kind,
                }),
            }
        }
    }

    report
}
