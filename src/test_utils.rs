use crate::models::domain::{
    ExamConfiguration, Grade, Level, Question, QuestionDraft, QuestionType, TopicFilter,
};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// A multiple-choice question with four labeled options.
    pub fn mc_question(id: &str, grade: Grade, topic: &str) -> Question {
        Question {
            id: id.to_string(),
            grade,
            topic: topic.to_string(),
            level: Level::Recognition,
            question_type: QuestionType::MultipleChoice,
            content: format!("Câu hỏi trắc nghiệm {}", id),
            options: Some(vec![
                "A. 10".to_string(),
                "B. 15".to_string(),
                "C. 20".to_string(),
                "D. 25".to_string(),
            ]),
            correct_answer: "A".to_string(),
            explanation: "Áp dụng quy tắc cộng trừ nhân chia.".to_string(),
        }
    }

    pub fn essay_question(id: &str, grade: Grade, topic: &str) -> Question {
        Question {
            id: id.to_string(),
            grade,
            topic: topic.to_string(),
            level: Level::Application,
            question_type: QuestionType::Essay,
            content: format!("Bài toán tự luận {}", id),
            options: None,
            correct_answer: "x = 5".to_string(),
            explanation: "Chuyển vế đổi dấu.".to_string(),
        }
    }

    pub fn mc_draft(grade: Grade, topic: &str) -> QuestionDraft {
        let question = mc_question("draft", grade, topic);
        QuestionDraft {
            grade: question.grade,
            topic: question.topic,
            level: question.level,
            question_type: question.question_type,
            content: question.content,
            options: question.options,
            correct_answer: question.correct_answer,
            explanation: question.explanation,
        }
    }

    pub fn exam_config(grade: Grade, topic: &str, num_questions: usize, mc_ratio: u8) -> ExamConfiguration {
        ExamConfiguration {
            title: "ĐỀ KIỂM TRA ĐỊNH KỲ".to_string(),
            school_name: "TRƯỜNG THCS GIÁO DỤC HIỆN ĐẠI".to_string(),
            class_name: "6A1".to_string(),
            time_minutes: 45,
            grade,
            topic: TopicFilter::from(topic),
            num_questions,
            mc_ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn fixtures_satisfy_question_shape() {
        let mc = mc_question("q1", Grade::Six, "Số học");
        assert_eq!(mc.options.as_ref().map(Vec::len), Some(4));

        let essay = essay_question("q2", Grade::Six, "Số học");
        assert!(essay.options.is_none());

        assert!(mc_draft(Grade::Seven, "Hình học").validate_shape().is_ok());
    }

    #[test]
    fn fixtures_exam_config_parses_topic() {
        let config = exam_config(Grade::Six, "all", 10, 70);
        assert_eq!(config.topic, TopicFilter::All);
        assert_eq!(config.num_questions, 10);
    }
}
