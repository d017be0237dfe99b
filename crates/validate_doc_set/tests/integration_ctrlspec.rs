// crates/validate_doc_set/tests/integration_ctrlspec.rs

#[cfg(test)]
mod integration_ctrlspec {
    use std::fs;
    use tempfile::tempdir;
    use validate_doc_set::{validate_doc_set, DocKind, DocSchema, DocSetError, IssueKind, SchemaError};

    #[test]
    fn test_misordered_sections_warn_but_pass() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("overview.md"),
            "## Goals\n## Scope\n## Purpose\n",
        )
        .unwrap();

        let result = validate_doc_set(dir.path(), &DocSchema::ctrlspec()).unwrap();
        assert!(result.valid);
        assert_eq!(result.stats.complete_docs, 1);
        assert!(!result.warnings.is_empty());
        assert!(result
            .warnings
            .iter()
            .all(|w| w.kind == IssueKind::OrderMismatch && w.file == "overview.md"));
    }

    #[test]
    fn test_duplicate_section_is_error() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("testing.md"),
            "## Strategy\n## Acceptance Criteria\n## strategy\n",
        )
        .unwrap();

        let result = validate_doc_set(dir.path(), &DocSchema::ctrlspec()).unwrap();
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].kind, IssueKind::DuplicateSection);
    }

    #[test]
    fn test_nested_doc_paths() {
        let dir = tempdir().unwrap();
        let schema = DocSchema::from_toml_str(
            r#"
name = "nested"

[[docs]]
name = "guide"
file = "guides/start.md"
sections = ["Install"]
"#,
        )
        .unwrap();
        fs::create_dir(dir.path().join("guides")).unwrap();
        fs::write(dir.path().join("guides/start.md"), "## Install\n").unwrap();

        let result = validate_doc_set(dir.path(), &schema).unwrap();
        assert!(result.valid);
        assert_eq!(result.stats.complete_docs, 1);
    }

    #[test]
    fn test_directory_in_place_of_document() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("design.md")).unwrap();

        let result = validate_doc_set(dir.path(), &DocSchema::ctrlspec()).unwrap();
        assert!(!result.valid);
        assert_eq!(result.errors[0].kind, IssueKind::AccessError);
        assert!(!result.stats.missing_docs.contains(&"design".to_string()));
    }

    #[test]
    fn test_missing_root() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("does-not-exist");
        let err = validate_doc_set(&root, &DocSchema::ctrlspec()).unwrap_err();
        assert!(matches!(err, DocSetError::RootNotFound(path) if path == root));
    }

    #[test]
    fn test_root_is_a_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("docs");
        fs::write(&file, "").unwrap();
        let err = validate_doc_set(&file, &DocSchema::ctrlspec()).unwrap_err();
        assert!(matches!(err, DocSetError::RootAccess { .. }));
    }

    #[test]
    fn test_empty_schema_fails_before_io() {
        let schema = DocSchema {
            name: "empty".to_string(),
            docs: Vec::new(),
        };
        // The root does not exist, yet the configuration error wins.
        let err = validate_doc_set(std::path::Path::new("/definitely/not/here"), &schema).unwrap_err();
        assert!(matches!(err, DocSetError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_document_outside_root_is_not_read() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("docs");
        fs::create_dir(&root).unwrap();
        fs::write(dir.path().join("secret.md"), "## Secret
[TODO] leaked
").unwrap();

        let schema = DocSchema {
            name: "escape".to_string(),
            docs: vec![DocKind::new("secret", "../secret.md", &["Secret"])],
        };
        let err = validate_doc_set(&root, &schema).unwrap_err();
        assert!(matches!(
            err,
            DocSetError::InvalidConfiguration(SchemaError::UnsafeFilePath { .. })
        ));
    }
}
