//! Extractive note summarization.
//!
//! Deliberately a rule engine rather than language understanding: summaries
//! are leading sentences, key points are marker-prefixed or labelled lines.

pub const NO_NOTES: &str = "No notes available.";

/// Characters stripped from the front of a recognized bullet or numbered line.
const MARKER_CHARS: &[char] = &[
    '-', '*', '•', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', ' ', '.',
];

/// Summarize free-text notes by keeping the first `max_sentences` sentences.
///
/// Text that already fits within `max_sentences` is returned verbatim, which
/// keeps the operation idempotent on short notes.
pub fn summarize_notes(notes: &str, max_sentences: usize) -> String {
    if notes.is_empty() {
        return NO_NOTES.to_string();
    }

    let sentences = split_sentences(notes);
    if sentences.len() <= max_sentences {
        return notes.to_string();
    }

    let mut summary = sentences[..max_sentences].join(". ");
    summary.push('.');
    summary
}

/// Naive sentence splitter: breaks on runs of `.`, `!`, `?` with no
/// abbreviation awareness.
fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

/// Extract up to `max_points` key points from free-text notes.
///
/// A line qualifies when it carries a bullet or numbering marker (stripped
/// from the result) or looks like a short labelled line (kept verbatim).
/// Unstructured notes fall back to their first `max_points` lines.
pub fn extract_key_points(notes: &str, max_points: usize) -> Vec<String> {
    if notes.is_empty() {
        return Vec::new();
    }

    let lines: Vec<&str> = notes
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut key_points: Vec<String> = Vec::new();
    for line in &lines {
        if has_list_marker(line) {
            key_points.push(line.trim_start_matches(MARKER_CHARS).to_string());
        } else if line.contains(':') && line.chars().count() < 100 {
            key_points.push((*line).to_string());
        }
    }

    if key_points.is_empty() {
        lines
            .into_iter()
            .take(max_points)
            .map(str::to_string)
            .collect()
    } else {
        key_points.truncate(max_points);
        key_points
    }
}

fn has_list_marker(line: &str) -> bool {
    line.starts_with(['-', '*', '•'])
        || line
            .chars()
            .next()
            .map_or(false, |first| ('1'..='9').contains(&first))
}
