// crates/extract_sections/src/lib.rs

use once_cell::sync::Lazy;
use regex::Regex;
use scan_lines::scan_lines;

// `## Title`: exactly two hashes, at least one whitespace, then text.
// A third `#` fails the whitespace requirement, so `###` never matches.
static LEVEL2_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^##\s+(\S.*)$").unwrap());

/// Returns the level-2 header titles of `content` in document order.
///
/// Headers inside code fences are skipped. Duplicates are kept.
pub fn extract_sections(content: &str) -> Vec<String> {
    sections(content).collect()
}

/// Lazy form of [`extract_sections`].
pub fn sections(content: &str) -> impl Iterator<Item = String> + Clone + '_ {
    scan_lines(content)
        .filter(|record| !record.in_fence)
        .filter_map(|record| parse_level2_header(record.text))
        .map(str::to_string)
}

/// Parses one line as a level-2 header and returns its title.
///
/// Trailing `#` decoration is stripped together with the surrounding
/// whitespace (`## Usage ##` and `## Usage##` both give `Usage`). Returns
/// `None` for other header levels, plain text and titleless headers.
pub fn parse_level2_header(line: &str) -> Option<&str> {
    let caps = LEVEL2_RE.captures(line.trim())?;
    let title = caps.get(1)?.as_str().trim_end().trim_end_matches('#').trim_end();
    (!title.is_empty()).then_some(title)
}
