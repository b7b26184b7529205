//! Prompt composition for section extraction.
//!
//! One prompt per request: role statement, section name, null-for-unknown
//! instruction, the section's attribute template, the Q/A transcript in the
//! caller's insertion order, and the single-object closing constraint.

/// Rendered in place of an empty or whitespace-only answer so the model treats
/// the attribute as unknown instead of inferring from blank text.
pub const NO_ANSWER_MARKER: &str = "No answer provided.";

/// Closing constraint: exactly one JSON object, wrapped in a one-element list.
const CLOSING_INSTRUCTION: &str = "Output a list of one dictionary item \
    (even if you find multiples but return one). Return only one in the JSON.";

/// Renders the `Q:`/`A:` transcript, one pair per two lines, preserving the
/// order the pairs were supplied in.
pub fn render_transcript<'a, I>(question_answers: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    question_answers
        .into_iter()
        .map(|(question, answer)| {
            let answer = if answer.trim().is_empty() {
                NO_ANSWER_MARKER
            } else {
                answer
            };
            format!("Q: {question}\nA: {answer}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the full extraction prompt for one request.
pub fn compose_prompt(section_name: &str, template: &str, transcript: &str) -> String {
    format!(
        "You are a resume-building assistant. Based on the answers related to the \
        '{section_name}' section, extract structured data in JSON format with the \
        following attributes. If any attribute is not available, set its value to null.\n\n\
        {template}\
        Answers:\n{transcript}\n\n\
        {CLOSING_INSTRUCTION}"
    )
}
