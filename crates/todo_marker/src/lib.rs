// crates/todo_marker/src/lib.rs

//! The TODO marker shared by the scanning crates in this workspace.

/// Canonical spelling of the marker. Matching is ASCII case-insensitive.
pub const TODO_MARKER: &str = "[TODO]";

/// Returns `true` if `line` carries at least one marker, in any letter case.
pub fn contains_marker(line: &str) -> bool {
    marker_offsets(line).next().is_some()
}

/// Byte offsets of every marker occurrence in `line`, left to right.
///
/// Occurrences never overlap. Offsets index into the original `line`, so
/// `&line[offset + TODO_MARKER.len()..]` is the text following a marker.
pub fn marker_offsets(line: &str) -> MarkerOffsets<'_> {
    MarkerOffsets { line, pos: 0 }
}

/// Iterator returned by [`marker_offsets`].
#[derive(Clone, Debug)]
pub struct MarkerOffsets<'a> {
    line: &'a str,
    pos: usize,
}

impl Iterator for MarkerOffsets<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let bytes = self.line.as_bytes();
        let needle = TODO_MARKER.as_bytes();
        while self.pos + needle.len() <= bytes.len() {
            let start = self.pos;
            if bytes[start..start + needle.len()].eq_ignore_ascii_case(needle) {
                self.pos = start + needle.len();
                return Some(start);
            }
            self.pos += 1;
        }
        self.pos = bytes.len();
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_any_case() {
        assert!(contains_marker("[TODO] write intro"));
        assert!(contains_marker("- [todo] lower"));
        assert!(contains_marker("mixed [ToDo] case"));
        assert!(!contains_marker("TODO without brackets"));
        assert!(!contains_marker("[TO DO] spaced"));
    }

    #[test]
    fn test_offsets_for_multiple_markers() {
        let line = "[TODO] a [todo] b";
        let offsets: Vec<usize> = marker_offsets(line).collect();
        assert_eq!(offsets, vec![0, 9]);
        assert_eq!(line[offsets[1] + TODO_MARKER.len()..].trim(), "b");
    }

    #[test]
    fn test_offsets_with_multibyte_prefix() {
        // Offsets are byte offsets and must land on char boundaries.
        let line = "é → [TODO] après";
        let offsets: Vec<usize> = marker_offsets(line).collect();
        assert_eq!(offsets.len(), 1);
        assert_eq!(&line[offsets[0]..offsets[0] + TODO_MARKER.len()], "[TODO]");
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(marker_offsets("").count(), 0);
    }
}
