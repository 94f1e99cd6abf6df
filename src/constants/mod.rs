pub mod catalog;
pub mod question_prompt;
