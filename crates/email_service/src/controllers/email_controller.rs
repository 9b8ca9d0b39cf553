use crate::dto::{EmailEditRequestDTO, SummaryRequestDTO};
use crate::middleware::extract_trace_id;
use crate::models::{EmailAction, EmailEditRequest, SummaryRequest};
use crate::services::prompt_builder::{build_prompt, build_summary_prompt};
use crate::{error::AppError, server::AppState};
use actix_web::{post, web, HttpRequest, HttpResponse};
use gemini_client::GenerationResult;

/// Configure email editing routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(complete_email)
        .service(refine_email)
        .service(summarize_email);
}

#[post("/complete_email")]
pub async fn complete_email(
    req: HttpRequest,
    body: web::Json<EmailEditRequestDTO>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    edit_email(&req, body.into_inner(), EmailAction::Complete, &state).await
}

#[post("/refine_email")]
pub async fn refine_email(
    req: HttpRequest,
    body: web::Json<EmailEditRequestDTO>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    edit_email(&req, body.into_inner(), EmailAction::Refine, &state).await
}

#[post("/summarize_email")]
pub async fn summarize_email(
    req: HttpRequest,
    body: web::Json<SummaryRequestDTO>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let request = SummaryRequest::try_from(body.into_inner())?;

    log::info!(
        "summarize request: trace_id={}, email_chars={}",
        extract_trace_id(&req).unwrap_or_default(),
        request.email_text.chars().count()
    );

    let prompt = build_summary_prompt(&request);
    Ok(HttpResponse::Ok().json(generate(&state, &prompt).await))
}

async fn edit_email(
    req: &HttpRequest,
    body: EmailEditRequestDTO,
    action: EmailAction,
    state: &AppState,
) -> Result<HttpResponse, AppError> {
    let request = EmailEditRequest::try_from(body)?;

    log::info!(
        "{} request: trace_id={}, tone='{}', style='{}', keywords={}, document={}",
        action,
        extract_trace_id(req).unwrap_or_default(),
        request.tone,
        request.style,
        !request.keywords.is_empty(),
        !request.document_text.is_empty()
    );

    let prompt = build_prompt(&request, action);
    Ok(HttpResponse::Ok().json(generate(state, &prompt).await))
}

/// Provider failures are reported in the body with status 200.
async fn generate(state: &AppState, prompt: &str) -> GenerationResult {
    let result = state.generator.generate(prompt).await;
    if let Err(e) = &result {
        log::warn!("Generation failed: {}", e);
    }
    GenerationResult::from(result)
}
