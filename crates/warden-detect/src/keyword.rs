use crate::patterns::patterns;
use crate::tuning;

/// Scores language-construct tokens in [0, 1]. Expects lower-cased text.
///
/// Strong indicators are presence-tested so repeating one keyword doesn't
/// inflate the score; weak indicators need volume to matter and are counted
/// across all occurrences up to a cap.
pub fn score(text_lower: &str) -> f64 {
    let pats = patterns();

    let strong = pats
        .strong_keywords
        .iter()
        .filter(|p| p.is_match(text_lower))
        .count();

    let weak: usize = pats
        .weak_keywords
        .iter()
        .map(|p| p.find_iter(text_lower).count())
        .sum();

    let score = strong as f64 * tuning::STRONG_KEYWORD_WEIGHT
        + weak.min(tuning::WEAK_KEYWORD_CAP) as f64 * tuning::WEAK_KEYWORD_WEIGHT;

    score.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prose_with_one_control_word_barely_registers() {
        let s = score("if you want to pass the class, submit on time");
        assert!((s - 0.05).abs() < 1e-9);
    }

    #[test]
    fn function_def_and_return_both_count_once() {
        let s = score("def calculate_grade(score):\n    if score >= 90:\n        return 'a'\n    else:\n        return 'b'");
        // def + return, plus weak if/else
        assert!((s - 0.9).abs() < 1e-9);
    }

    #[test]
    fn repeated_strong_keyword_counts_once() {
        let single = score("import os");
        let repeated = score("import os\nimport sys\nimport json");
        assert_eq!(single, repeated);
    }

    #[test]
    fn weak_keyword_count_is_capped() {
        let s = score("if if if if if if if if if if");
        assert!((s - 0.25).abs() < 1e-9);
    }

    #[test]
    fn clamped_to_one() {
        let s = score(
            "def f(x):\n    return x\nclass foo:\nimport os\nfrom os import path\nprint(1)\nint x\npublic static void",
        );
        assert_eq!(s, 1.0);
    }
}
