// crates/scan_lines/src/lib.rs

//! Line scanner that tracks fenced code blocks.
//!
//! A fence marker is a line whose trimmed text starts with three or more
//! backticks or tildes. Everything from an opening marker up to and
//! including its closing marker is reported as `in_fence`, so extractors
//! downstream skip both the fenced content and the marker lines.

use std::str::Lines;

/// One line of input together with its fence state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineRecord<'a> {
    /// 1-based line number.
    pub number: usize,
    pub text: &'a str,
    pub in_fence: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Fence {
    ch: char,
    len: usize,
}

/// Lazy iterator over the [`LineRecord`]s of a document.
#[derive(Clone, Debug)]
pub struct LineScanner<'a> {
    lines: Lines<'a>,
    number: usize,
    open: Option<Fence>,
}

/// Starts scanning `content`. Nothing is read until the iterator is polled.
/// A leading UTF-8 byte order mark is skipped.
pub fn scan_lines(content: &str) -> LineScanner<'_> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    LineScanner {
        lines: content.lines(),
        number: 0,
        open: None,
    }
}

impl LineScanner<'_> {
    /// Whether the scanner is currently inside a fence. Once the iterator is
    /// exhausted, `true` means the last fence was never closed.
    pub fn in_fence(&self) -> bool {
        self.open.is_some()
    }
}

impl<'a> Iterator for LineScanner<'a> {
    type Item = LineRecord<'a>;

    fn next(&mut self) -> Option<LineRecord<'a>> {
        let text = self.lines.next()?;
        self.number += 1;

        let in_fence = match (self.open, fence_of(text)) {
            (None, Some(fence)) => {
                self.open = Some(fence);
                true
            }
            (Some(open), Some(fence)) => {
                if fence.ch == open.ch && fence.len >= open.len {
                    self.open = None;
                }
                true
            }
            (Some(_), None) => true,
            (None, None) => false,
        };

        Some(LineRecord {
            number: self.number,
            text,
            in_fence,
        })
    }
}

/// Returns `true` if the trimmed line opens or closes a code fence.
pub fn is_fence_marker(line: &str) -> bool {
    fence_of(line).is_some()
}

/// Returns `true` if `content` ends while a fence is still open.
pub fn has_unterminated_fence(content: &str) -> bool {
    let mut scanner = scan_lines(content);
    for _ in scanner.by_ref() {}
    scanner.in_fence()
}

fn fence_of(line: &str) -> Option<Fence> {
    let trimmed = line.trim();
    let ch = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = trimmed.chars().take_while(|c| *c == ch).count();
    (len >= 3).then_some(Fence { ch, len })
}
