pub mod exam_handler;
pub mod health_handler;
pub mod question_handler;
pub mod suggestion_handler;

use actix_web::web;

pub use exam_handler::generate_exam;
pub use health_handler::{get_catalog, health_check};
pub use question_handler::{
    create_question, delete_question, get_question, list_questions, update_question,
};
pub use suggestion_handler::suggest_question;

/// Registers every route. Literal paths go before `/api/questions/{id}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(get_catalog)
        .service(suggest_question)
        .service(list_questions)
        .service(create_question)
        .service(get_question)
        .service(update_question)
        .service(delete_question)
        .service(generate_exam);
}
