use crate::patterns::patterns;
use crate::tuning;

/// Scores code-like symbol sequences in [0, 1]. Runs on the raw text since
/// casing carries no signal for symbols.
///
/// Five independent checks accumulate: call-like sequences, assignment
/// runs, bracket runs, comment lines, and a multi-line brace block. A
/// single assignment contributes nothing; "x = 5 is an example" is
/// ordinary prose.
pub fn score(text: &str) -> f64 {
    let pats = patterns();
    let mut score = 0.0;

    let calls = pats.function_call.find_iter(text).count();
    if calls >= 2 {
        score += tuning::CALL_RUN_BONUS;
    } else if calls == 1 {
        score += tuning::SINGLE_CALL_BONUS;
    }

    let assignments = pats.assignment.find_iter(text).count();
    if assignments >= tuning::MIN_ASSIGNMENTS {
        score += tuning::ASSIGNMENT_BONUS;
    }

    let bracket_runs = pats.bracket_run.find_iter(text).count();
    if bracket_runs >= tuning::BRACKET_RUN_HIGH_COUNT {
        score += tuning::BRACKET_RUN_HIGH_BONUS;
    } else if bracket_runs >= tuning::BRACKET_RUN_LOW_COUNT {
        score += tuning::BRACKET_RUN_LOW_BONUS;
    }

    if comment_count(text) >= 1 {
        score += tuning::COMMENT_BONUS;
    }

    if pats.brace_block.is_match(text) {
        score += tuning::BRACE_BLOCK_BONUS;
    }

    score.min(1.0)
}

/// Comment-like lines: `//...`, `/*...*/`, and `#...` where the `#` is not
/// immediately followed by "http" (URLs and bare links are not comments).
fn comment_count(text: &str) -> usize {
    let pats = patterns();
    pats.line_comment.find_iter(text).count()
        + pats.block_comment.find_iter(text).count()
        + pats
            .hash_comment
            .captures_iter(text)
            .filter(|c| !c[1].starts_with("http"))
            .count()
}
