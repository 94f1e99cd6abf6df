use std::sync::{Arc, Mutex};

use actix_web::{http::StatusCode, test, web, App};
use async_trait::async_trait;
use serde_json::{json, Value};

use exam_bank_server::{
    app_state::AppState,
    config::Config,
    handlers,
    models::domain::{Grade, Level, Question, QuestionDraft, QuestionType},
    repositories::InMemoryQuestionRepository,
    services::{
        model_client::{ModelClient, ModelError, QuestionRequest},
        suggestion_service::{FallbackPolicy, SuggestionService},
    },
};

/// Replays scripted outcomes and records which models were asked.
struct ScriptedModelClient {
    outcomes: Mutex<Vec<Result<(), ModelError>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedModelClient {
    fn new(outcomes: Vec<Result<(), ModelError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ModelClient for ScriptedModelClient {
    async fn generate_question(
        &self,
        model: &str,
        request: &QuestionRequest,
    ) -> Result<QuestionDraft, ModelError> {
        self.calls.lock().unwrap().push(model.to_string());
        self.outcomes.lock().unwrap().remove(0)?;

        Ok(QuestionDraft {
            grade: request.grade,
            topic: request.topic.clone(),
            level: request.level,
            question_type: request.question_type,
            content: format!("Câu hỏi từ {}", model),
            options: None,
            correct_answer: "x = 3".to_string(),
            explanation: "Giải phương trình bậc nhất.".to_string(),
        })
    }
}

fn config() -> Config {
    Config {
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 8080,
        cors_allowed_origin: None,
        ai_api_key: None,
        ai_api_base: "http://localhost".to_string(),
        ai_preferred_model: "gemini-3-flash-preview".to_string(),
        seed_sample_bank: false,
    }
}

fn question(id: &str, grade: Grade, question_type: QuestionType) -> Question {
    Question {
        id: id.to_string(),
        grade,
        topic: "Số học".to_string(),
        level: Level::Recognition,
        question_type,
        content: format!("Câu {}", id),
        options: (question_type == QuestionType::MultipleChoice).then(|| {
            vec![
                "A. 1".to_string(),
                "B. 2".to_string(),
                "C. 3".to_string(),
                "D. 4".to_string(),
            ]
        }),
        correct_answer: match question_type {
            QuestionType::MultipleChoice => "A".to_string(),
            QuestionType::Essay => "7".to_string(),
        },
        explanation: "Lời giải".to_string(),
    }
}

fn state(questions: Vec<Question>, client: Option<Arc<dyn ModelClient>>) -> AppState {
    let suggestions =
        SuggestionService::new(client, FallbackPolicy::default(), "gemini-3-flash-preview");
    AppState::from_parts(
        Arc::new(InMemoryQuestionRepository::with_questions(questions)),
        Arc::new(suggestions),
        config(),
    )
}

fn small_bank() -> Vec<Question> {
    vec![
        question("m1", Grade::Six, QuestionType::MultipleChoice),
        question("m2", Grade::Six, QuestionType::MultipleChoice),
        question("m3", Grade::Six, QuestionType::MultipleChoice),
        question("e1", Grade::Six, QuestionType::Essay),
        question("e2", Grade::Six, QuestionType::Essay),
        question("e3", Grade::Six, QuestionType::Essay),
        question("x1", Grade::Seven, QuestionType::Essay),
    ]
}

fn exam_body(num_questions: usize, mc_ratio: u32) -> Value {
    json!({
        "title": "ĐỀ KIỂM TRA ĐỊNH KỲ",
        "schoolName": "TRƯỜNG THCS GIÁO DỤC HIỆN ĐẠI",
        "className": "6A1",
        "timeMinutes": 45,
        "grade": "6",
        "topic": "Tất cả",
        "numQuestions": num_questions,
        "mcRatio": mc_ratio
    })
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(handlers::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn question_crud_round_trip() {
    let app = app!(state(vec![], None));

    let req = test::TestRequest::post()
        .uri("/api/questions")
        .set_json(json!({
            "grade": "8",
            "topic": "Hình học",
            "level": "Thông hiểu",
            "type": "Trắc nghiệm",
            "content": "Hình nào có bốn cạnh bằng nhau?",
            "options": ["A. Hình vuông", "B. Hình chữ nhật", "C. Hình thang", "D. Hình tròn"],
            "correctAnswer": "A",
            "explanation": "Định nghĩa hình vuông."
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/api/questions?grade=8")
        .to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed["total"], 1);

    let req = test::TestRequest::put()
        .uri(&format!("/api/questions/{}", id))
        .set_json(json!({
            "grade": "8",
            "topic": "Hình học",
            "level": "Vận dụng",
            "type": "Tự luận",
            "content": "Tính diện tích hình vuông cạnh 3cm.",
            "correctAnswer": "9 cm²",
            "explanation": "S = a²."
        }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["data"]["type"], "Tự luận");
    assert!(updated["data"].get("options").is_none());

    let req = test::TestRequest::delete()
        .uri(&format!("/api/questions/{}", id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/questions/{}", id))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn malformed_multiple_choice_is_rejected() {
    let app = app!(state(vec![], None));

    let req = test::TestRequest::post()
        .uri("/api/questions")
        .set_json(json!({
            "grade": "6",
            "topic": "Số học",
            "level": "Nhận biết",
            "type": "Trắc nghiệm",
            "content": "2 + 2 = ?",
            "options": ["A. 3", "B. 4"],
            "correctAnswer": "B",
            "explanation": ""
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn generate_exam_returns_partitioned_questions() {
    let app = app!(state(small_bank(), None));

    let req = test::TestRequest::post()
        .uri("/api/exams")
        .set_json(exam_body(4, 50))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let exam: Value = test::read_body_json(resp).await;
    let types: Vec<&str> = exam["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["type"].as_str().unwrap())
        .collect();
    assert_eq!(types, vec!["Trắc nghiệm", "Trắc nghiệm", "Tự luận", "Tự luận"]);
    assert_eq!(exam["config"]["className"], "6A1");
    assert!(exam["date"].as_str().is_some());
}

#[actix_web::test]
async fn insufficient_bank_answers_unprocessable() {
    let app = app!(state(small_bank(), None));

    let req = test::TestRequest::post()
        .uri("/api/exams")
        .set_json(exam_body(7, 50))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["kind"], "INSUFFICIENT_POOL");
    assert_eq!(body["code"], 422);

    let req = test::TestRequest::post()
        .uri("/api/exams")
        .set_json(exam_body(5, 100))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["kind"], "INSUFFICIENT_TYPE_RATIO");
}

#[actix_web::test]
async fn out_of_range_ratio_is_a_validation_error() {
    let app = app!(state(small_bank(), None));

    let req = test::TestRequest::post()
        .uri("/api/exams")
        .set_json(exam_body(4, 150))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn suggestion_falls_back_to_next_model() {
    let client = Arc::new(ScriptedModelClient::new(vec![
        Err(ModelError::Api("model overloaded".to_string())),
        Ok(()),
    ]));
    let app = app!(state(vec![], Some(client.clone() as Arc<dyn ModelClient>)));

    let req = test::TestRequest::post()
        .uri("/api/questions/suggestions")
        .set_json(json!({
            "grade": "7",
            "topic": "Phương trình",
            "level": "Vận dụng",
            "type": "Tự luận"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let draft: Value = test::read_body_json(resp).await;
    assert_eq!(draft["content"], "Câu hỏi từ gemini-3-pro-preview");
    assert_eq!(
        *client.calls.lock().unwrap(),
        vec!["gemini-3-flash-preview", "gemini-3-pro-preview"]
    );
}

#[actix_web::test]
async fn suggestion_stops_on_credential_failure() {
    let client = Arc::new(ScriptedModelClient::new(vec![Err(
        ModelError::Authentication("API key not valid".to_string()),
    )]));
    let app = app!(state(vec![], Some(client.clone() as Arc<dyn ModelClient>)));

    let req = test::TestRequest::post()
        .uri("/api/questions/suggestions")
        .set_json(json!({
            "grade": "6",
            "topic": "Số học",
            "level": "Nhận biết",
            "type": "Trắc nghiệm",
            "model": "gemini-2.5-flash"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(*client.calls.lock().unwrap(), vec!["gemini-2.5-flash"]);
}

#[actix_web::test]
async fn suggestion_without_api_key_is_unavailable() {
    let app = app!(state(vec![], None));

    let req = test::TestRequest::post()
        .uri("/api/questions/suggestions")
        .set_json(json!({
            "grade": "6",
            "topic": "Số học",
            "level": "Nhận biết",
            "type": "Tự luận"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}
