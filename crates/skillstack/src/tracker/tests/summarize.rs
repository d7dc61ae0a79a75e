use crate::tracker::summarize::{extract_key_points, summarize_notes, NO_NOTES};

#[test]
fn empty_notes_return_sentinel() {
    assert_eq!(summarize_notes("", 3), NO_NOTES);
}

#[test]
fn short_notes_come_back_verbatim() {
    let notes = "Learned about lifetimes. Still fuzzy on variance.";
    assert_eq!(summarize_notes(notes, 3), notes);
}

#[test]
fn long_notes_truncate_to_leading_sentences() {
    let notes = "Learned loops. Learned functions. Practiced recursion. Reviewed arrays.";
    assert_eq!(
        summarize_notes(notes, 2),
        "Learned loops. Learned functions."
    );
}

#[test]
fn summary_keeps_exactly_max_sentences() {
    let notes = "One! Two? Three. Four. Five.";
    let summary = summarize_notes(notes, 3);

    assert_eq!(summary, "One. Two. Three.");
    assert_eq!(summary.matches(". ").count(), 2);
    assert!(summary.ends_with('.'));
}

#[test]
fn punctuation_runs_collapse_into_one_break() {
    let notes = "Done!!! What next?? Keep going... Rest now. Then review.";
    assert_eq!(summarize_notes(notes, 2), "Done. What next.");
}

#[test]
fn whitespace_only_notes_have_no_sentences_and_survive_unchanged() {
    assert_eq!(summarize_notes("   ", 3), "   ");
}

#[test]
fn empty_notes_yield_no_key_points() {
    assert!(extract_key_points("", 5).is_empty());
}

#[test]
fn bulleted_and_labelled_lines_become_key_points() {
    let notes = "- Use two pointers\n- Watch for overflow\nSummary: solid progress";
    assert_eq!(
        extract_key_points(notes, 5),
        vec![
            "Use two pointers".to_string(),
            "Watch for overflow".to_string(),
            "Summary: solid progress".to_string(),
        ]
    );
}

#[test]
fn numbered_lines_lose_their_markers() {
    let notes = "1. Read the borrow chapter\n2) Re-do exercises\n* Ship the demo";
    assert_eq!(
        extract_key_points(notes, 5),
        vec![
            "Read the borrow chapter".to_string(),
            ") Re-do exercises".to_string(),
            "Ship the demo".to_string(),
        ]
    );
}

#[test]
fn long_labelled_lines_are_not_key_points() {
    let mut long_line = "Context: ".to_string();
    long_line.push_str(&"x".repeat(120));
    let notes = format!("{long_line}\nplain line one\nplain line two");

    // Nothing qualifies, so the first raw lines come back instead.
    let points = extract_key_points(&notes, 2);
    assert_eq!(points.len(), 2);
    assert_eq!(points[0], long_line);
    assert_eq!(points[1], "plain line one");
}

#[test]
fn unstructured_notes_fall_back_to_leading_lines() {
    let notes = "went through the tutorial\npaired with a friend\nwrote a toy parser";
    assert_eq!(
        extract_key_points(notes, 2),
        vec![
            "went through the tutorial".to_string(),
            "paired with a friend".to_string(),
        ]
    );
}

#[test]
fn key_points_never_exceed_max_points_and_keep_input_order() {
    let notes = "- a\n- b\n- c\n- d\n- e\n- f\n- g";
    let points = extract_key_points(notes, 5);

    assert_eq!(points.len(), 5);
    assert_eq!(points, vec!["a", "b", "c", "d", "e"]);
}
