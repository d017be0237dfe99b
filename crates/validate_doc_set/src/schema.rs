// crates/validate_doc_set/src/schema.rs

//! Document schemas: which documents a doc set needs and which sections
//! each of them must contain.

use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// One required document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocKind {
    pub name: String,
    /// Path of the document relative to the documentation root.
    pub file: String,
    #[serde(default)]
    pub sections: Vec<String>,
}

impl DocKind {
    pub fn new(name: &str, file: &str, sections: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            file: file.to_string(),
            sections: sections.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Required documents of a doc set, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocSchema {
    pub name: String,
    #[serde(default)]
    pub docs: Vec<DocKind>,
}

/// Names accepted by [`DocSchema::builtin`].
pub const BUILTIN_SCHEMAS: &[&str] = &["ctrlspec", "portolan"];

impl DocSchema {
    /// Generic project-specification schema.
    pub fn ctrlspec() -> Self {
        Self {
            name: "ctrlspec".to_string(),
            docs: vec![
                DocKind::new("overview", "overview.md", &["Purpose", "Scope", "Goals"]),
                DocKind::new(
                    "requirements",
                    "requirements.md",
                    &["Functional Requirements", "Non-Functional Requirements"],
                ),
                DocKind::new("design", "design.md", &["Architecture", "Components", "Data Model"]),
                DocKind::new("interfaces", "interfaces.md", &["Inputs", "Outputs", "Errors"]),
                DocKind::new("testing", "testing.md", &["Strategy", "Acceptance Criteria"]),
            ],
        }
    }

    /// Portolan schema: the documents an assistant-oriented project keeps
    /// next to its code.
    pub fn portolan() -> Self {
        Self {
            name: "portolan".to_string(),
            docs: vec![
                DocKind::new("llm", "llm.md", &["Project Summary", "Key Files", "Conventions"]),
                DocKind::new(
                    "requirements",
                    "requirements.md",
                    &["Functional Requirements", "Non-Functional Requirements"],
                ),
                DocKind::new("architecture", "architecture.md", &["Overview", "Components", "Data Flow"]),
                DocKind::new("constraints", "constraints.md", &["Technical Constraints", "Business Constraints"]),
                DocKind::new("decisions", "decisions.md", &["Decision Log"]),
                DocKind::new("testing", "testing.md", &["Test Strategy", "Coverage"]),
                DocKind::new("deployment", "deployment.md", &["Environments", "Release Process"]),
            ],
        }
    }

    /// Looks up a built-in schema by name (case-insensitive).
    pub fn builtin(name: &str) -> Result<Self, SchemaError> {
        match name.to_ascii_lowercase().as_str() {
            "ctrlspec" => Ok(Self::ctrlspec()),
            "portolan" => Ok(Self::portolan()),
            _ => Err(SchemaError::UnknownSchema(name.to_string())),
        }
    }

    /// Parses and checks a schema written in TOML.
    pub fn from_toml_str(source: &str) -> Result<Self, SchemaError> {
        let schema: DocSchema = toml::from_str(source)?;
        schema.check()?;
        Ok(schema)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, SchemaError> {
        let source = fs::read_to_string(path).map_err(|source| SchemaError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Rejects schemas that cannot be validated against.
    pub fn check(&self) -> Result<(), SchemaError> {
        if self.docs.is_empty() {
            return Err(SchemaError::NoDocuments(self.name.clone()));
        }
        let mut seen = HashSet::new();
        for doc in &self.docs {
            if !seen.insert(doc.name.as_str()) {
                return Err(SchemaError::DuplicateDocument {
                    schema: self.name.clone(),
                    doc: doc.name.clone(),
                });
            }
            if doc.file.trim().is_empty() {
                return Err(SchemaError::EmptyFileName {
                    schema: self.name.clone(),
                    doc: doc.name.clone(),
                });
            }
            if !is_inside_root(&doc.file) {
                return Err(SchemaError::UnsafeFilePath {
                    schema: self.name.clone(),
                    doc: doc.name.clone(),
                    file: doc.file.clone(),
                });
            }
            if doc.sections.iter().any(|s| s.trim().is_empty()) {
                return Err(SchemaError::EmptySection {
                    schema: self.name.clone(),
                    doc: doc.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Names of the required documents, in declaration order.
    pub fn doc_names(&self) -> Vec<String> {
        self.docs.iter().map(|d| d.name.clone()).collect()
    }
}

// Relative, and no component that climbs out of the root.
fn is_inside_root(file: &str) -> bool {
    Path::new(file)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
