use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{QuestionListParams, QuestionRequestDto},
        response::{DeleteQuestionResponse, QuestionListResponse, QuestionResponse},
    },
};

#[get("/api/questions")]
async fn list_questions(
    state: web::Data<AppState>,
    query: web::Query<QuestionListParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    let questions = state
        .question_service
        .list_questions(params.grade, params.search.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(QuestionListResponse::from(questions)))
}

#[get("/api/questions/{id}")]
async fn get_question(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let question = state.question_service.get_question(&id).await?;
    Ok(HttpResponse::Ok().json(question))
}

#[post("/api/questions")]
async fn create_question(
    state: web::Data<AppState>,
    request: web::Json<QuestionRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let question = state.question_service.create_question(request.into()).await?;
    Ok(HttpResponse::Created().json(QuestionResponse {
        data: question,
        message: "Question added".to_string(),
    }))
}

#[put("/api/questions/{id}")]
async fn update_question(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<QuestionRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let question = state
        .question_service
        .update_question(&id, request.into())
        .await?;
    Ok(HttpResponse::Ok().json(QuestionResponse {
        data: question,
        message: "Question updated".to_string(),
    }))
}

#[delete("/api/questions/{id}")]
async fn delete_question(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.question_service.delete_question(&id).await?;
    Ok(HttpResponse::Ok().json(DeleteQuestionResponse {
        message: format!("Question '{}' deleted", id),
    }))
}
