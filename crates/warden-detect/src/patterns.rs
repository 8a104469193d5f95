use regex::Regex;
use std::sync::OnceLock;

/// All detection regexes, compiled once per process and read-only after
/// that. Scorers borrow the registry; nothing recompiles per call.
pub struct DetectionPatterns {
    /// High-specificity constructs that rarely occur in ordinary speech.
    /// Presence-tested, one hit per pattern.
    pub strong_keywords: Vec<Regex>,
    /// Keywords that also show up in conversation; occurrence-counted.
    pub weak_keywords: Vec<Regex>,
    /// `identifier(args)` followed by a terminator.
    pub function_call: Regex,
    /// `identifier = expression` followed by a terminator.
    pub assignment: Regex,
    /// Maximal runs of brackets, counted as grouped sequences.
    pub bracket_run: Regex,
    pub line_comment: Regex,
    pub block_comment: Regex,
    /// `#...` lines; matches carrying a leading `http` are filtered out by
    /// the syntax scorer so URLs and hashtags don't count as comments.
    pub hash_comment: Regex,
    /// An opening brace, a line break, and a closing brace.
    pub brace_block: Regex,
    pub natural_phrases: Vec<Regex>,
    pub code_phrases: Vec<Regex>,
}

static PATTERNS: OnceLock<DetectionPatterns> = OnceLock::new();

pub fn patterns() -> &'static DetectionPatterns {
    PATTERNS.get_or_init(DetectionPatterns::compile)
}

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}

impl DetectionPatterns {
    fn compile() -> Self {
        Self {
            // Keyword patterns run against lower-cased text.
            strong_keywords: vec![
                re(r"\bdef\s+\w+\s*\("),
                re(r"\bclass\s+\w+\s*[:(]"),
                re(r"\bimport\s+\w+"),
                re(r"\bfrom\s+\w+\s+import"),
                re(r"\breturn\s+[^;]+[;\n]?"),
                re(r"\b(console\.log|print|printf|cout|system\.out)\s*\("),
                re(r"\b(int|string|bool|float|double|char|void)\s+\w+"),
                re(r"\b(public|private|protected|static)\s+"),
            ],
            weak_keywords: vec![
                re(r"\b(if|else|elif|for|while|try|except|catch)\b"),
                re(r"\b(function|var|let|const)\b"),
            ],
            // Syntax patterns run against the raw text.
            function_call: re(r"\w+\s*\([^)]*\)\s*[;,\n]"),
            assignment: re(r"\w+\s*=\s*[^=][^;,\n]*[;,\n]"),
            bracket_run: re(r"[{}\[\]()]+"),
            line_comment: re(r"(?m)^\s*//[^\n]+$"),
            block_comment: re(r"(?m)^\s*/\*.*\*/\s*$"),
            hash_comment: re(r"(?m)^\s*#([^\n]+)$"),
            brace_block: re(r"\{[^}]*\n[^}]*\}"),
            // Context phrases run against lower-cased text.
            natural_phrases: vec![
                re(r"\b(i think|i believe|in my opinion|what if|how about|let me know)\b"),
                re(r"\b(please|thank you|thanks|could you|would you|can you)\b"),
                re(r"\b(the problem is|i need help|i'm confused|i don't understand)\b"),
                re(r"\b(assignment|homework|project|exercise|question)\b"),
            ],
            code_phrases: vec![
                re(r"\b(compile|debug|syntax error|runtime error|null pointer)\b"),
                re(r"\b(algorithm|data structure|method|function|variable|array)\b"),
                re(r"\b(loop|iteration|recursion|binary search|sorting)\b"),
            ],
        }
    }
}
