//! Axum route handlers for the Section Extraction API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::sections::extractor::extract_section;
use crate::state::AppState;

/// Wire request for POST /generate_resume_section.
///
/// Both fields are optional at the serde level so a missing field is reported
/// as a 400 client error with the contract's body shape, not a serde reject.
/// The answer map preserves the caller's insertion order.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSectionRequest {
    #[serde(default)]
    pub section_name: Option<String>,
    #[serde(default)]
    pub question_answers: Option<Map<String, Value>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSectionResponse {
    pub section_data: Value,
}

/// POST /generate_resume_section
///
/// Validates the request, then runs the extraction pipeline: template lookup,
/// prompt composition, one LLM call, fence stripping, JSON parse.
pub async fn handle_generate_section(
    State(state): State<AppState>,
    Json(request): Json<GenerateSectionRequest>,
) -> Result<Json<GenerateSectionResponse>, AppError> {
    let section_name = request.section_name.as_deref().unwrap_or_default();
    let question_answers = request.question_answers.unwrap_or_default();

    if section_name.is_empty() || question_answers.is_empty() {
        return Err(AppError::Validation(
            "Missing sectionName or questionAnswers".to_string(),
        ));
    }

    let pairs = question_answers
        .iter()
        .map(|(question, answer)| {
            answer
                .as_str()
                .map(|a| (question.as_str(), a))
                .ok_or_else(|| {
                    AppError::Validation("questionAnswers values must be strings".to_string())
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let section_data = extract_section(
        &state.templates,
        state.oracle.as_ref(),
        section_name,
        &pairs,
    )
    .await?;

    Ok(Json(GenerateSectionResponse { section_data }))
}
