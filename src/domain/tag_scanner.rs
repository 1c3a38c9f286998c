//! Meta tag scanning.
//!
//! This is a line-oriented substring heuristic, not an HTML parser. A tag is
//! only recognized when it sits on a single line, and the content value is cut
//! out with fixed offsets that assume the `content='...'` spelling.

use std::io::{self, BufRead};

const META: &[u8] = b"meta";
const NAME: &[u8] = b"name";
const CONTENT: &[u8] = b"content";

/// Length of the `content='` token skipped before the value starts.
const CONTENT_TOKEN_LEN: usize = "content='".len();

/// Outcome of scanning a document for the marker tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanResult {
    NotFound,
    /// Content value of the first matching tag.
    Found(String),
}

/// How a single line relates to the marker tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMatch {
    /// Not a meta-like line.
    Plain,
    /// Mentions `meta`, `name` and `content` but not the marker.
    Candidate,
    /// Candidate carrying the marker, with the extracted content value.
    Marker(String),
}

/// Classify one line (without its line terminator).
pub fn classify_line(line: impl AsRef<[u8]>, marker: &str) -> LineMatch {
    let line = line.as_ref();
    let lower = line.to_ascii_lowercase();

    if !(contains(&lower, META) && contains(&lower, NAME) && contains(&lower, CONTENT)) {
        return LineMatch::Plain;
    }
    if !contains(&lower, marker.to_ascii_lowercase().as_bytes()) {
        return LineMatch::Candidate;
    }

    // ASCII lowercasing keeps byte offsets, so positions in `lower` index `line`.
    let content_at = find(&lower, CONTENT).unwrap_or(0);
    let start = (content_at + CONTENT_TOKEN_LEN).min(line.len());
    let rest = &line[start..];
    let end = rest.iter().position(|b| *b == b'"' || *b == b'\'').unwrap_or(rest.len());

    LineMatch::Marker(String::from_utf8_lossy(&rest[..end]).into_owned())
}

/// Content value of the marker tag on `line`, if the line carries one.
pub fn extract_content_value(line: impl AsRef<[u8]>, marker: &str) -> Option<String> {
    match classify_line(line, marker) {
        LineMatch::Marker(value) => Some(value),
        LineMatch::Plain | LineMatch::Candidate => None,
    }
}

/// Scan `reader` line by line; the first marker line wins.
///
/// `on_candidate` receives every meta-like line in file order, the matching one included.
pub fn scan<R: BufRead>(
    mut reader: R,
    marker: &str,
    mut on_candidate: impl FnMut(&str),
) -> io::Result<ScanResult> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(ScanResult::NotFound);
        }
        let line = trim_line_ending(&buf);

        match classify_line(line, marker) {
            LineMatch::Plain => {}
            LineMatch::Candidate => on_candidate(String::from_utf8_lossy(line).as_ref()),
            LineMatch::Marker(value) => {
                on_candidate(String::from_utf8_lossy(line).as_ref());
                return Ok(ScanResult::Found(value));
            }
        }
    }
}

fn trim_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    find(haystack, needle).is_some()
}
