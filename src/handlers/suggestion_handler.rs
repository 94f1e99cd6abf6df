use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState, errors::AppError, models::dto::request::SuggestQuestionRequestDto,
    services::model_client::QuestionRequest,
};

#[post("/api/questions/suggestions")]
async fn suggest_question(
    state: web::Data<AppState>,
    request: web::Json<SuggestQuestionRequestDto>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let draft = state
        .suggestion_service
        .suggest(&QuestionRequest::from(&*request), request.model.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(draft))
}
