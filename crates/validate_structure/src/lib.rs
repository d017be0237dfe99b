// crates/validate_structure/src/lib.rs

//! Compares the sections found in a document with the sections it must have.
//!
//! Presence is strict, ordering is advisory. Sections that are not expected
//! are ignored; this enforces a minimum structure, not an exact one.

use extract_sections::extract_sections;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// Problem found for one expected section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    /// No header matches the section.
    Missing,
    /// The header appears more than once.
    Duplicate { count: usize },
    /// Present, but before a section that is expected to precede it.
    OutOfOrder { after: String },
}

impl Finding {
    pub fn severity(&self) -> Severity {
        match self {
            Finding::Missing | Finding::Duplicate { .. } => Severity::Error,
            Finding::OutOfOrder { .. } => Severity::Warning,
        }
    }

    /// Human readable description for `section`.
    pub fn describe(&self, section: &str) -> String {
        match self {
            Finding::Missing => format!("missing required section '{section}'"),
            Finding::Duplicate { count } => {
                format!("section '{section}' appears {count} times")
            }
            Finding::OutOfOrder { after } => {
                format!("section '{section}' should come after '{after}'")
            }
        }
    }
}

/// Outcome for one expected section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SectionCheck {
    pub section: String,
    pub present: bool,
    /// Empty when the section is fine. A duplicated section can also be
    /// out of order, so both findings may appear.
    pub findings: Vec<Finding>,
}

impl SectionCheck {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Extracts the sections of `content` and checks them against `expected`.
pub fn validate_structure<S: AsRef<str>>(content: &str, expected: &[S]) -> Vec<SectionCheck> {
    check_sections(&extract_sections(content), expected)
}

/// Checks already extracted section titles against `expected`.
///
/// Returns one entry per expected section, in expected order. Titles match
/// case-insensitively with runs of whitespace collapsed.
pub fn check_sections<F, S>(found: &[F], expected: &[S]) -> Vec<SectionCheck>
where
    F: AsRef<str>,
    S: AsRef<str>,
{
    let found: Vec<String> = found.iter().map(|s| normalize(s.as_ref())).collect();

    // Position of the latest expected section seen so far, with its name.
    let mut last_present: Option<(usize, &str)> = None;

    expected
        .iter()
        .map(|section| {
            let section = section.as_ref();
            let key = normalize(section);
            let positions: Vec<usize> = found
                .iter()
                .enumerate()
                .filter(|(_, title)| **title == key)
                .map(|(i, _)| i)
                .collect();

            let mut findings = Vec::new();
            match positions.first() {
                None => findings.push(Finding::Missing),
                Some(&first) => {
                    if positions.len() > 1 {
                        findings.push(Finding::Duplicate {
                            count: positions.len(),
                        });
                    }
                    if let Some((_, prev)) = last_present.filter(|(pos, _)| first < *pos) {
                        findings.push(Finding::OutOfOrder {
                            after: prev.to_string(),
                        });
                    }
                    if last_present.map_or(true, |(pos, _)| first > pos) {
                        last_present = Some((first, section));
                    }
                }
            }

            SectionCheck {
                section: section.to_string(),
                present: !positions.is_empty(),
                findings,
            }
        })
        .collect()
}

/// Returns `true` if any check carries an error-level finding.
pub fn has_errors(checks: &[SectionCheck]) -> bool {
    checks
        .iter()
        .flat_map(|check| check.findings.iter())
        .any(|finding| finding.severity() == Severity::Error)
}

fn normalize(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn findings(checks: &[SectionCheck]) -> Vec<Vec<Finding>> {
        checks.iter().map(|c| c.findings.clone()).collect()
    }

    #[test]
    fn test_exact_match_is_clean() {
        let checks = check_sections(&["Overview", "Usage"], &["Overview", "Usage"]);
        assert!(checks.iter().all(|c| c.present && c.is_clean()));
        assert!(!has_errors(&checks));
    }

    #[test]
    fn test_reversed_order_warns_only() {
        let checks = check_sections(&["Usage", "Overview"], &["Overview", "Usage"]);
        assert!(!has_errors(&checks));
        assert_eq!(
            findings(&checks),
            vec![
                vec![],
                vec![Finding::OutOfOrder {
                    after: "Overview".to_string()
                }]
            ]
        );
        assert_eq!(checks[1].findings[0].severity(), Severity::Warning);
    }

    #[test]
    fn test_missing_section_is_error() {
        let checks = check_sections(&["Overview"], &["Overview", "Usage"]);
        assert!(has_errors(&checks));
        assert!(!checks[1].present);
        assert_eq!(checks[1].findings, vec![Finding::Missing]);
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let checks = check_sections(&["getting   STARTED"], &["Getting Started"]);
        assert!(checks[0].present);
        assert!(checks[0].is_clean());
    }

    #[test]
    fn test_no_fuzzy_matching() {
        let checks = check_sections(&["Overviews"], &["Overview"]);
        assert_eq!(checks[0].findings, vec![Finding::Missing]);
    }

    #[test]
    fn test_extra_sections_ignored() {
        let checks = check_sections(&["Intro", "Overview", "Notes", "Usage"], &["Overview", "Usage"]);
        assert!(checks.iter().all(|c| c.is_clean()));
    }

    #[test]
    fn test_duplicate_is_error() {
        let checks = check_sections(&["Overview", "Usage", "Overview"], &["Overview", "Usage"]);
        assert_eq!(checks[0].findings, vec![Finding::Duplicate { count: 2 }]);
        assert!(checks[1].is_clean());
        assert!(has_errors(&checks));
    }

    #[test]
    fn test_duplicate_and_out_of_order_both_reported() {
        let checks = check_sections(&["Usage", "Overview", "Usage"], &["Overview", "Usage"]);
        assert!(checks[0].is_clean());
        assert_eq!(
            checks[1].findings,
            vec![
                Finding::Duplicate { count: 2 },
                Finding::OutOfOrder {
                    after: "Overview".to_string()
                }
            ]
        );
    }

    #[test]
    fn test_order_checked_among_present_sections() {
        let checks = check_sections(&["C", "A"], &["A", "B", "C"]);
        assert_eq!(checks[1].findings, vec![Finding::Missing]);
        assert_eq!(
            checks[2].findings,
            vec![Finding::OutOfOrder {
                after: "A".to_string()
            }]
        );
    }

    #[test]
    fn test_validate_structure_from_content() {
        let content = "## Overview\ntext\n```\n[TODO] fix\n```\n## Usage";
        let checks = validate_structure(content, &["Overview", "Usage"]);
        assert!(checks.iter().all(|c| c.present && c.is_clean()));
    }

    #[test]
    fn test_describe_messages() {
        assert_eq!(Finding::Missing.describe("Usage"), "missing required section 'Usage'");
        assert_eq!(
            Finding::Duplicate { count: 3 }.describe("Usage"),
            "section 'Usage' appears 3 times"
        );
    }
}
