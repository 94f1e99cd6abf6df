pub mod exam_assembler;
pub mod model_client;
pub mod question_service;
pub mod sample_bank;
pub mod suggestion_service;
