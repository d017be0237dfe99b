// crates/check_docs/src/lib.rs

use std::fmt::Write as _;

use anyhow::{Context, Result};
use serde::Serialize;

use validate_doc_set::{validate_doc_set, DocSchema, ValidationResult};

pub mod config;

use config::{AppConfig, SchemaSource};

/// Outcome of validating the docs root against one schema.
#[derive(Debug, Serialize)]
pub struct SchemaReport {
    pub schema: String,
    pub result: ValidationResult,
}

impl SchemaReport {
    /// Whether this report counts as a pass. With `require_all`, missing
    /// documents fail it as well.
    pub fn passed(&self, require_all: bool) -> bool {
        self.result.valid && !(require_all && !self.result.stats.missing_docs.is_empty())
    }
}

/// Resolves a schema source into a schema value.
pub fn load_schema(source: &SchemaSource) -> Result<DocSchema> {
    match source {
        SchemaSource::Builtin(name) => DocSchema::builtin(name)
            .with_context(|| format!("Failed to load built-in schema '{name}'")),
        SchemaSource::File(path) => DocSchema::from_toml_file(path)
            .with_context(|| format!("Failed to load schema file {}", path.display())),
    }
}

/// Validates the docs root against every configured schema, in order.
pub fn run_checks(config: &AppConfig) -> Result<Vec<SchemaReport>> {
    let mut reports = Vec::with_capacity(config.schemas.len());
    for source in &config.schemas {
        let schema = load_schema(source)?;
        let result = validate_doc_set(&config.docs_root, &schema).with_context(|| {
            format!(
                "Failed to validate {} against schema '{}'",
                config.docs_root.display(),
                schema.name
            )
        })?;
        log::debug!(
            "Schema '{}': valid={} errors={} warnings={}",
            schema.name,
            result.valid,
            result.errors.len(),
            result.warnings.len()
        );
        reports.push(SchemaReport {
            schema: schema.name,
            result,
        });
    }
    Ok(reports)
}

/// `true` if every report passes.
pub fn all_passed(reports: &[SchemaReport], require_all: bool) -> bool {
    reports.iter().all(|report| report.passed(require_all))
}

pub fn render_json(reports: &[SchemaReport]) -> Result<String> {
    serde_json::to_string_pretty(reports).context("Failed to serialize results")
}

/// Human readable listing of every report.
pub fn render_text(reports: &[SchemaReport], require_all: bool) -> String {
    let mut out = String::new();
    for report in reports {
        let stats = &report.result.stats;
        let _ = writeln!(out, "Schema: {}", report.schema);
        let _ = writeln!(
            out,
            "  Documents: {}/{} complete",
            stats.complete_docs, stats.total_docs
        );
        if !stats.missing_docs.is_empty() {
            let _ = writeln!(out, "  Missing: {}", stats.missing_docs.join(", "));
        }

        let _ = writeln!(out, "  TODOs: {}", stats.todo_count);
        for todo in &stats.todos {
            let _ = writeln!(out, "    {}:{} {}", todo.file, todo.line, todo.text);
        }

        if !report.result.errors.is_empty() {
            let _ = writeln!(out, "  Errors:");
            for error in &report.result.errors {
                let _ = writeln!(out, "    {}: {}", error.file, error.message);
            }
        }
        if !report.result.warnings.is_empty() {
            let _ = writeln!(out, "  Warnings:");
            for warning in &report.result.warnings {
                let _ = writeln!(out, "    {}: {}", warning.file, warning.message);
            }
        }

        let verdict = if report.passed(require_all) { "PASS" } else { "FAIL" };
        let _ = writeln!(out, "  Result: {verdict}");
    }
    out
}
