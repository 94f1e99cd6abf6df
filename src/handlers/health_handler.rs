use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::response::CatalogResponse};

#[get("/health")]
async fn health_check(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let questions = state.question_service.count().await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "questions": questions
    })))
}

#[get("/api/catalog")]
async fn get_catalog(state: web::Data<AppState>) -> HttpResponse {
    let suggestions = &state.suggestion_service;
    HttpResponse::Ok().json(CatalogResponse::new(
        suggestions.preferred_model(),
        suggestions.is_enabled(),
    ))
}
