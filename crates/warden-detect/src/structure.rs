use crate::tuning;

/// Scores code-like line shape in [0, 1]. A single non-blank line has no
/// shape to measure and scores 0.
///
/// Code is structurally repetitive in a way prose is not: consistent
/// indentation, consistent terminators. The three bonuses are independent
/// and summed, so a snippet can partially satisfy several shapes without
/// needing all of them.
pub fn score(text: &str) -> f64 {
    let mut total = 0usize;
    let mut indented = 0usize;
    let mut endings = 0usize;
    let mut brackets = 0usize;

    for line in text.lines() {
        let stripped = line.trim();
        if stripped.is_empty() {
            continue;
        }
        total += 1;
        if line.starts_with("    ") || line.starts_with('\t') {
            indented += 1;
        }
        if stripped.ends_with([';', '{', '}', ':', ',']) {
            endings += 1;
        }
        if stripped.ends_with(['{', '}', '[', ']', '(', ')']) {
            brackets += 1;
        }
    }

    if total < 2 {
        return 0.0;
    }
    let total = total as f64;

    let mut score = 0.0;
    if indented >= tuning::MIN_INDENTED_LINES && indented as f64 / total >= tuning::INDENT_RATIO_MIN
    {
        score += tuning::INDENT_BONUS;
    }
    if endings as f64 / total >= tuning::ENDING_RATIO_MIN {
        score += tuning::ENDING_BONUS;
    }
    if brackets as f64 / total >= tuning::BRACKET_RATIO_MIN {
        score += tuning::BRACKET_BONUS;
    }
    score.min(1.0)
}
