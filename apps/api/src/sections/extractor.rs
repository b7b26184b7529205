//! The extraction pipeline: template lookup, prompt composition, one oracle
//! call, sanitize, parse. Stateless; every failure exits the pipeline with a
//! typed error and nothing to roll back.

use serde_json::Value;

use crate::errors::AppError;
use crate::llm_client::Oracle;
use crate::sections::prompts::{compose_prompt, render_transcript};
use crate::sections::sanitize::strip_code_fences;
use crate::sections::templates::SectionTemplates;

/// Extracts structured section data from a question/answer transcript.
///
/// `question_answers` pairs are rendered into the prompt in the order given.
/// The returned value is exactly what the model produced after fence
/// stripping and JSON parsing; no further shaping is applied.
pub async fn extract_section(
    templates: &SectionTemplates,
    oracle: &dyn Oracle,
    section_name: &str,
    question_answers: &[(&str, &str)],
) -> Result<Value, AppError> {
    let template = templates.get(section_name).ok_or_else(|| {
        AppError::Validation(format!("Unsupported sectionName: {section_name}"))
    })?;

    let transcript = render_transcript(question_answers.iter().copied());
    let prompt = compose_prompt(section_name, template, &transcript);

    let reply = oracle.generate(&prompt).await?;

    let cleaned = strip_code_fences(&reply);

    serde_json::from_str(&cleaned).map_err(|_| AppError::decode(&cleaned))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::test_support::MockOracle;
    use serde_json::json;

    const QA: &[(&str, &str)] = &[("What languages do you know?", "Python, Go")];

    #[tokio::test]
    async fn test_unknown_section_rejected_without_oracle_call() {
        let templates = SectionTemplates::new();
        let oracle = MockOracle::replying("[]");

        let err = extract_section(&templates, &oracle, "bogus", QA)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Validation(ref msg) if msg == "Unsupported sectionName: bogus"
        ));
        assert_eq!(oracle.call_count(), 0);
    }

    #[tokio::test]
    async fn test_every_recognized_section_reaches_the_oracle() {
        let templates = SectionTemplates::new();
        for name in crate::sections::templates::SECTION_NAMES {
            let oracle = MockOracle::replying("[{}]");
            let value = extract_section(&templates, &oracle, name, QA).await.unwrap();
            assert_eq!(value, json!([{}]));
            assert_eq!(oracle.call_count(), 1, "section {name}");
        }
    }

    #[tokio::test]
    async fn test_valid_reply_round_trips_unmodified() {
        let templates = SectionTemplates::new();
        let reply = r#"[{"softSkills": null, "languages": ["Python", "Go"], "platforms": null, "frameworks": null, "tools": null}]"#;
        let oracle = MockOracle::replying(reply);

        let value = extract_section(&templates, &oracle, "skills", QA)
            .await
            .unwrap();

        assert_eq!(value, serde_json::from_str::<Value>(reply).unwrap());
    }

    #[tokio::test]
    async fn test_fenced_reply_is_sanitized_then_parsed() {
        let templates = SectionTemplates::new();
        let oracle = MockOracle::replying(
            "```json\n[{\"title\": \"Eagle Scout\", \"description\": \"...\", \"date\": null}]\n```",
        );

        let value = extract_section(&templates, &oracle, "achievements", QA)
            .await
            .unwrap();

        assert_eq!(
            value,
            json!([{"title": "Eagle Scout", "description": "...", "date": null}])
        );
    }

    #[tokio::test]
    async fn test_non_json_reply_is_a_decode_error() {
        let templates = SectionTemplates::new();
        let oracle = MockOracle::replying("Sorry, I cannot help with that.");

        let err = extract_section(&templates, &oracle, "skills", QA)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Decode { ref snippet } if snippet == "Sorry, I cannot help with that."
        ));
    }

    #[tokio::test]
    async fn test_oracle_failure_is_an_upstream_error() {
        let templates = SectionTemplates::new();
        let oracle = MockOracle::failing("model overloaded");

        let err = extract_section(&templates, &oracle, "skills", QA)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Upstream(_)));
        assert_eq!(oracle.call_count(), 1);
    }
}
