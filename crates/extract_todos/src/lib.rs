// crates/extract_todos/src/lib.rs

use scan_lines::{scan_lines, LineScanner};
use serde::Serialize;
use todo_marker::{marker_offsets, MarkerOffsets, TODO_MARKER};

/// One `[TODO]` occurrence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TodoItem {
    pub file: String,
    /// 1-based line number in the source document.
    pub line: usize,
    /// Text following the marker, trimmed.
    pub text: String,
}

/// Returns the TODO markers found in `content`, attributed to `file`.
///
/// The iterator is lazy and can be cloned to restart from the current
/// position. Lines inside code fences are skipped.
pub fn extract_todos<'a>(file: &'a str, content: &'a str) -> Todos<'a> {
    Todos {
        file,
        lines: scan_lines(content),
        current: None,
    }
}

/// Lazy iterator returned by [`extract_todos`].
#[derive(Clone, Debug)]
pub struct Todos<'a> {
    file: &'a str,
    lines: LineScanner<'a>,
    current: Option<(usize, &'a str, MarkerOffsets<'a>)>,
}

impl Todos<'_> {
    /// Whether the document ended inside an unterminated fence. Only
    /// meaningful once the iterator has been exhausted.
    pub fn ended_in_fence(&self) -> bool {
        self.lines.in_fence()
    }
}

impl Iterator for Todos<'_> {
    type Item = TodoItem;

    fn next(&mut self) -> Option<TodoItem> {
        loop {
            if let Some((number, text, offsets)) = &mut self.current {
                if let Some(offset) = offsets.next() {
                    let (line, text) = (*number, *text);
                    return Some(TodoItem {
                        file: self.file.to_string(),
                        line,
                        text: text[offset + TODO_MARKER.len()..].trim().to_string(),
                    });
                }
            }

            let record = self.lines.next()?;
            self.current = (!record.in_fence)
                .then(|| (record.number, record.text, marker_offsets(record.text)));
        }
    }
}
