//! Reply sanitization: removal of markdown code-fence markers before the
//! strict JSON parse. Kept separate from parsing so model-reply quirks and
//! JSON correctness stay independently testable.

use regex::Regex;
use std::sync::OnceLock;

fn fence_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)```json|```").expect("invalid fence pattern"))
}

/// Strips every occurrence of ```` ```json ```` or ```` ``` ```` markers,
/// case-insensitively, wherever they appear in the text, then trims the
/// result. Idempotent: text without markers passes through unchanged apart
/// from the trim.
pub fn strip_code_fences(text: &str) -> String {
    fence_pattern().replace_all(text.trim(), "").trim().to_string()
}
