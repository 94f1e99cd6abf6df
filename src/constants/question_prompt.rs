use crate::models::domain::{Grade, Level, QuestionType};

pub const QUESTION_AUTHOR_SYSTEM_PROMPT: &str = "Bạn là giáo viên Toán THCS giàu kinh nghiệm, chuyên soạn câu hỏi kiểm tra theo chương trình giáo dục phổ thông Việt Nam.

### Yêu cầu chung:

- Chỉ tạo đúng MỘT câu hỏi.
- Nội dung chính xác về mặt toán học, phù hợp với khối lớp và mức độ được yêu cầu.
- Có thể dùng ký hiệu LaTeX giữa hai dấu $ cho công thức.
- Ngôn ngữ: Tiếng Việt.
- Chỉ trả về một đối tượng JSON hợp lệ, không kèm lời dẫn hay giải thích bên ngoài JSON.

### Cấu trúc JSON:

- content: nội dung câu hỏi.
- options: chỉ dành cho trắc nghiệm, mảng đúng 4 chuỗi bắt đầu bằng \"A. \", \"B. \", \"C. \", \"D. \".
- correctAnswer: A/B/C/D nếu là trắc nghiệm, hoặc đáp số ngắn gọn nếu là tự luận.
- explanation: lời giải chi tiết.";

/// User prompt asking for one question with the given parameters.
pub fn question_request_prompt(
    grade: Grade,
    topic: &str,
    level: Level,
    question_type: QuestionType,
) -> String {
    let shape = match question_type {
        QuestionType::MultipleChoice => "cung cấp 4 phương án A, B, C, D và chỉ một phương án đúng",
        QuestionType::Essay => "cung cấp lời giải chi tiết và đáp số cuối cùng, không kèm phương án lựa chọn",
    };

    format!(
        "Hãy tạo một câu hỏi Toán THCS cho lớp {grade}, chủ đề \"{topic}\", mức độ \"{level}\", thể loại \"{question_type}\".\n\
         Yêu cầu: {shape}.\n\
         Trả về kết quả chính xác theo cấu trúc JSON."
    )
}
