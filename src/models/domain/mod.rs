pub mod exam;
pub mod question;

pub use exam::{ExamConfiguration, GeneratedExam, TopicFilter};
pub use question::{Grade, Level, Question, QuestionDraft, QuestionType};
