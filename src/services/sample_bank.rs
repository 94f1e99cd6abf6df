use rand::{seq::IndexedRandom, Rng};
use uuid::Uuid;

use crate::{
    constants::catalog::SAMPLE_BANK_SIZE,
    models::domain::{Grade, Level, Question, QuestionType},
};

/// Builds the starter bank: two multiple-choice and two essay patterns for
/// every grade and level, then variants of random base questions up to
/// `SAMPLE_BANK_SIZE`.
pub fn sample_questions<R: Rng + ?Sized>(rng: &mut R) -> Vec<Question> {
    let mut questions = Vec::with_capacity(SAMPLE_BANK_SIZE);

    for grade in Grade::ALL {
        for level in Level::ALL {
            questions.extend(base_questions(grade, level));
        }
    }

    let base_count = questions.len();
    while questions.len() < SAMPLE_BANK_SIZE {
        let Some(base) = questions[..base_count].choose(rng) else {
            break;
        };
        let mut variant = base.clone();
        variant.id = new_id();
        variant.content = format!("{} (Biến thể {})", base.content, questions.len());
        questions.push(variant);
    }

    questions
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn base_questions(grade: Grade, level: Level) -> [Question; 4] {
    let arithmetic_topic = match grade {
        Grade::Six | Grade::Seven => "Số học",
        Grade::Eight | Grade::Nine => "Đại số",
    };

    [
        Question {
            id: new_id(),
            grade,
            topic: arithmetic_topic.to_string(),
            level,
            question_type: QuestionType::MultipleChoice,
            content: format!(
                "Câu hỏi trắc nghiệm Toán lớp {} - Mức độ {}: Tính giá trị biểu thức cơ bản.",
                grade, level
            ),
            options: Some(
                ["A. 10", "B. 15", "C. 20", "D. 25"]
                    .map(String::from)
                    .to_vec(),
            ),
            correct_answer: "A".to_string(),
            explanation: "Lời giải chi tiết: Áp dụng quy tắc cộng trừ nhân chia.".to_string(),
        },
        Question {
            id: new_id(),
            grade,
            topic: "Hình học".to_string(),
            level,
            question_type: QuestionType::MultipleChoice,
            content: format!(
                "Câu hỏi trắc nghiệm Hình học lớp {} - Mức độ {}: Nhận biết các hình cơ bản.",
                grade, level
            ),
            options: Some(
                [
                    "A. Hình vuông",
                    "B. Hình chữ nhật",
                    "C. Hình thoi",
                    "D. Hình tròn",
                ]
                .map(String::from)
                .to_vec(),
            ),
            correct_answer: "B".to_string(),
            explanation: "Lời giải: Dựa vào định nghĩa các hình học phẳng.".to_string(),
        },
        Question {
            id: new_id(),
            grade,
            topic: "Đại số".to_string(),
            level,
            question_type: QuestionType::Essay,
            content: format!(
                "Bài toán tự luận lớp {} - Mức độ {}: Tìm x trong biểu thức chứa biến.",
                grade, level
            ),
            options: None,
            correct_answer: "x = 5".to_string(),
            explanation: "Lời giải chi tiết: Chuyển vế đổi dấu và rút gọn biểu thức.".to_string(),
        },
        Question {
            id: new_id(),
            grade,
            topic: "Thống kê".to_string(),
            level,
            question_type: QuestionType::Essay,
            content: format!(
                "Bài tập thống kê lớp {} - Mức độ {}: Tính số trung bình cộng của bảng số liệu.",
                grade, level
            ),
            options: None,
            correct_answer: "12.5".to_string(),
            explanation: "Lời giải: Tổng các giá trị chia cho số lượng các giá trị.".to_string(),
        },
    ]
}
