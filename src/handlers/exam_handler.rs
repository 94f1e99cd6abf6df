use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState, errors::AppError, models::domain::ExamConfiguration,
    models::dto::request::GenerateExamRequestDto,
};

/// Draws a fresh exam from the current bank. Insufficient banks answer 422
/// with the available and requested counts in the message.
#[post("/api/exams")]
async fn generate_exam(
    state: web::Data<AppState>,
    request: web::Json<GenerateExamRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let config = ExamConfiguration::from(request);
    let exam = state.question_service.generate_exam(&config).await?;
    Ok(HttpResponse::Ok().json(exam))
}
