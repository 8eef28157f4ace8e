//! Generative AI Proxy Handlers
//!
//! Each handler builds a prompt (optionally with an in-memory file
//! attachment), forwards it to the configured generative model and relays
//! the text answer back to the client.

use axum::{
    Json,
    extract::{Multipart, State},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::core::ServerState;
use crate::db::repository::{EmployeeRepository, PerformanceRepository};
use crate::services::generative::GenerativePrompt;
use crate::utils::validation::{MAX_NOTE_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

/// One uploaded file read fully into memory (never persisted)
struct UploadedFile {
    file_name: String,
    mime_type: String,
    data: Vec<u8>,
}

/// GET /api/ai/insights - AI summary over all performance reviews
pub async fn insights(State(state): State<ServerState>) -> AppResult<Json<Value>> {
    let repo = PerformanceRepository::new(state.get_db());
    let reviews = repo.find_all().await?;

    if reviews.is_empty() {
        return Err(AppError::not_found(
            "No performance reviews found to analyze.",
        ));
    }

    let performance_data = reviews
        .iter()
        .map(|r| {
            format!(
                "Employee: {} {}, Rating: {}, Comment: {}",
                r.employee.first_name, r.employee.last_name, r.rating, r.comments
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let prompt = GenerativePrompt::new(
        "Act as an expert HR analyst. Your tone is professional and insightful.",
        format!(
            "Analyze the following performance data and provide a 2-3 sentence summary \
             of overall team sentiment and performance. Then, identify the single \
             \"Top Performer\" and the \"Employee to Watch\" (lowest performer) based on \
             ratings and comments.\n\nData:\n{performance_data}"
        ),
    );

    let ai_text = state.generative.generate(prompt).await?;

    Ok(Json(json!({
        "sourceData": reviews,
        "aiSummary": ai_text,
    })))
}

/// GET /api/ai/sentiment - sentiment score over review comments
pub async fn sentiment(State(state): State<ServerState>) -> AppResult<Json<Value>> {
    let repo = PerformanceRepository::new(state.get_db());
    let reviews = repo.find_all().await?;

    if reviews.is_empty() {
        return Err(AppError::not_found(
            "No performance reviews found to analyze.",
        ));
    }

    let comments = reviews
        .iter()
        .map(|r| format!("- {}", r.comments))
        .collect::<Vec<_>>()
        .join("\n");

    let prompt = GenerativePrompt::new(
        "Act as an HR sentiment analyst.",
        format!(
            "Classify the overall sentiment of the following review comments as \
             Positive, Neutral or Negative, and justify the classification in \
             2-3 sentences.\n\nComments:\n{comments}"
        ),
    );

    let ai_text = state.generative.generate(prompt).await?;

    Ok(Json(json!({ "sentiment": ai_text })))
}

/// GET /api/ai/dashboard-insights - workforce overview summary
pub async fn dashboard_insights(State(state): State<ServerState>) -> AppResult<Json<Value>> {
    let employees = EmployeeRepository::new(state.get_db()).find_all().await?;
    let reviews = PerformanceRepository::new(state.get_db()).find_all().await?;

    let average_rating = if reviews.is_empty() {
        "n/a".to_string()
    } else {
        let sum: i64 = reviews.iter().map(|r| r.rating).sum();
        format!("{:.1}", sum as f64 / reviews.len() as f64)
    };

    let prompt = GenerativePrompt::new(
        "Act as an expert HR analyst. Your tone is professional and insightful.",
        format!(
            "Write a 2-3 sentence dashboard summary for an HR team. \
             Headcount: {}. Performance reviews on file: {}. \
             Average review rating: {}.",
            employees.len(),
            reviews.len(),
            average_rating
        ),
    );

    let ai_text = state.generative.generate(prompt).await?;

    Ok(Json(json!({ "insights": ai_text })))
}

/// POST /api/ai/screen-resume - screen an uploaded resume against a job description
pub async fn screen_resume(
    State(state): State<ServerState>,
    multipart: Multipart,
) -> AppResult<Json<Value>> {
    let (file, fields) = read_upload(multipart, "resume").await?;

    let file = file.ok_or_else(|| AppError::validation("No resume file uploaded"))?;
    let job_description = fields
        .get("jobDescription")
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::validation("No job description provided"))?;

    let prompt = GenerativePrompt::new(
        "Act as a senior HR recruiter. You are screening a resume against a job description.",
        format!(
            "Analyze the attached resume (file) against the provided job description (text).\n\n\
             Job Description:\n{job_description}\n\n\
             Provide your analysis with:\n\
             1.  A \"Fit Score\" from 1 to 100.\n\
             2.  A 2-3 sentence \"Summary\" of the candidate's qualifications.\n\
             3.  A list of \"Missing Key Skills\"."
        ),
    )
    .with_attachment(file.mime_type, file.data);

    let ai_text = state.generative.generate(prompt).await?;

    Ok(Json(json!({
        "fileName": file.file_name,
        "analysis": ai_text,
    })))
}

/// POST /api/ai/voice-interview - analyze an uploaded interview recording
pub async fn voice_interview(
    State(state): State<ServerState>,
    multipart: Multipart,
) -> AppResult<Json<Value>> {
    let (file, fields) = read_upload(multipart, "audio").await?;

    let file = file.ok_or_else(|| AppError::validation("No audio file uploaded"))?;
    let question = fields
        .get("question")
        .cloned()
        .unwrap_or_else(|| "general interview performance".to_string());

    let prompt = GenerativePrompt::new(
        "Act as a senior HR interviewer evaluating a recorded interview answer.",
        format!(
            "Analyze the attached interview recording with respect to: {question}.\n\
             Provide:\n\
             1.  A 2-3 sentence \"Summary\" of the answer.\n\
             2.  Communication strengths and weaknesses.\n\
             3.  A \"Score\" from 1 to 10."
        ),
    )
    .with_attachment(file.mime_type, file.data);

    let ai_text = state.generative.generate(prompt).await?;

    Ok(Json(json!({
        "fileName": file.file_name,
        "analysis": ai_text,
    })))
}

#[derive(Debug, Deserialize)]
pub struct ChatbotRequest {
    pub message: Option<String>,
}

/// POST /api/ai/chatbot - HR assistant chat
pub async fn chatbot(
    State(state): State<ServerState>,
    Json(req): Json<ChatbotRequest>,
) -> AppResult<Json<Value>> {
    let message = req
        .message
        .ok_or_else(|| AppError::validation("No message provided"))?;
    validate_required_text(&message, "message", MAX_NOTE_LEN)?;

    let prompt = GenerativePrompt::new(
        "Act as a friendly and knowledgeable HR assistant for an internal HR \
         management tool. Keep answers short and practical.",
        message,
    );

    let ai_text = state.generative.generate(prompt).await?;

    Ok(Json(json!({ "reply": ai_text })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRequest {
    pub template_type: Option<String>,
    pub details: Option<String>,
}

/// POST /api/ai/generate-template - generate an HR document template
pub async fn generate_template(
    State(state): State<ServerState>,
    Json(req): Json<TemplateRequest>,
) -> AppResult<Json<Value>> {
    let template_type = req
        .template_type
        .ok_or_else(|| AppError::validation("No templateType provided"))?;
    validate_required_text(&template_type, "templateType", MAX_NOTE_LEN)?;

    let details = req.details.unwrap_or_default();

    let prompt = GenerativePrompt::new(
        "Act as an HR operations specialist who drafts workplace documents.",
        format!(
            "Draft a reusable \"{template_type}\" template for an HR department. \
             Additional details: {details}"
        ),
    );

    let ai_text = state.generative.generate(prompt).await?;

    Ok(Json(json!({ "template": ai_text })))
}

/// Drain a multipart body: pick up the file field named `file_field`
/// plus any text fields. File bytes stay in memory only.
async fn read_upload(
    mut multipart: Multipart,
    file_field: &str,
) -> AppResult<(Option<UploadedFile>, std::collections::HashMap<String, String>)> {
    let mut file = None;
    let mut fields = std::collections::HashMap::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        if name == file_field {
            let file_name = field.file_name().unwrap_or(file_field).to_string();
            let mime_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let data = field.bytes().await?.to_vec();
            file = Some(UploadedFile {
                file_name,
                mime_type,
                data,
            });
        } else {
            fields.insert(name, field.text().await?);
        }
    }

    Ok((file, fields))
}
