// crates/check_docs/src/config.rs

use std::path::PathBuf;

/// Environment variable consulted when `--docs` is not given.
pub const DOCS_ROOT_ENV: &str = "CHECK_DOCS_ROOT";

/// Docs root used when neither `--docs` nor the environment provide one.
pub const DEFAULT_DOCS_ROOT: &str = "docs";

/// Built-in schema used when no schema is requested.
pub const DEFAULT_SCHEMA: &str = "ctrlspec";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemaSource {
    Builtin(String),
    File(PathBuf),
}

/// Runtime configuration composed from CLI flags and the environment.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub docs_root: PathBuf,
    pub schemas: Vec<SchemaSource>,
    pub format: OutputFormat,
    /// Treat missing documents as failures.
    pub require_all: bool,
}

impl AppConfig {
    /// Picks the docs root: explicit flag, then environment, then default.
    pub fn resolve_docs_root(flag: Option<&str>, env_value: Option<String>) -> PathBuf {
        flag.map(PathBuf::from)
            .or_else(|| env_value.filter(|v| !v.trim().is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCS_ROOT))
    }

    /// Builtins first, then schema files; falls back to the default schema.
    pub fn resolve_schemas(builtins: Vec<String>, files: Vec<PathBuf>) -> Vec<SchemaSource> {
        let mut schemas: Vec<SchemaSource> = builtins
            .into_iter()
            .map(SchemaSource::Builtin)
            .chain(files.into_iter().map(SchemaSource::File))
            .collect();
        if schemas.is_empty() {
            schemas.push(SchemaSource::Builtin(DEFAULT_SCHEMA.to_string()));
        }
        schemas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docs_root_precedence() {
        assert_eq!(
            AppConfig::resolve_docs_root(Some("flag"), Some("env".to_string())),
            PathBuf::from("flag")
        );
        assert_eq!(
            AppConfig::resolve_docs_root(None, Some("env".to_string())),
            PathBuf::from("env")
        );
        assert_eq!(
            AppConfig::resolve_docs_root(None, Some("  ".to_string())),
            PathBuf::from(DEFAULT_DOCS_ROOT)
        );
        assert_eq!(AppConfig::resolve_docs_root(None, None), PathBuf::from(DEFAULT_DOCS_ROOT));
    }

    #[test]
    fn test_default_schema() {
        assert_eq!(
            AppConfig::resolve_schemas(Vec::new(), Vec::new()),
            vec![SchemaSource::Builtin(DEFAULT_SCHEMA.to_string())]
        );
    }

    #[test]
    fn test_schema_order() {
        let schemas = AppConfig::resolve_schemas(
            vec!["portolan".to_string()],
            vec![PathBuf::from("custom.toml")],
        );
        assert_eq!(
            schemas,
            vec![
                SchemaSource::Builtin("portolan".to_string()),
                SchemaSource::File(PathBuf::from("custom.toml")),
            ]
        );
    }

    #[test]
    fn test_output_format() {
        use clap::ValueEnum;

        assert_eq!(OutputFormat::from_str("json", false), Ok(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("text", false), Ok(OutputFormat::Text));
        assert!(OutputFormat::from_str("yaml", false).is_err());
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
