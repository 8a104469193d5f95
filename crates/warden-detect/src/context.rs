use crate::patterns::patterns;
use crate::tuning;

/// Signed adjustment in [-0.3, 0.2] from conversational register. Expects
/// lower-cased text.
///
/// Raw structure and syntax scores alone false-positive on messages like
/// "if you submit late, you fail"; hedges, politeness markers and
/// assignment vocabulary suppress the total, while code-register
/// vocabulary nudges it up. Natural-language evidence is checked first and
/// wins outright.
pub fn score(text_lower: &str) -> f64 {
    let pats = patterns();

    let natural: usize = pats
        .natural_phrases
        .iter()
        .map(|p| p.find_iter(text_lower).count())
        .sum();

    if natural >= tuning::NATURAL_STRONG_COUNT {
        return tuning::NATURAL_STRONG_PENALTY;
    }
    if natural >= 1 {
        return tuning::NATURAL_MILD_PENALTY;
    }

    let code: usize = pats
        .code_phrases
        .iter()
        .map(|p| p.find_iter(text_lower).count())
        .sum();

    if code >= tuning::CODE_VOCAB_STRONG_COUNT {
        return tuning::CODE_VOCAB_STRONG_BONUS;
    }
    if code >= 1 {
        return tuning::CODE_VOCAB_MILD_BONUS;
    }
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dense_conversation_is_strongly_suppressed() {
        let s = score("please help me, i don't understand the assignment");
        assert_eq!(s, -0.3);
    }

    #[test]
    fn one_hedge_is_mildly_suppressed() {
        assert_eq!(score("i think the answer is 42"), -0.1);
    }

    #[test]
    fn natural_language_wins_over_code_vocabulary() {
        // "function" and "debug" would boost, but "please" suppresses first
        assert_eq!(score("please debug this function for me tomorrow"), -0.1);
    }

    #[test]
    fn code_vocabulary_boosts() {
        assert_eq!(score("the algorithm uses recursion"), 0.2);
        assert_eq!(score("the loop never terminates"), 0.1);
    }

    #[test]
    fn neutral_text_is_zero() {
        assert_eq!(score("the weather was nice on tuesday"), 0.0);
    }
}
