pub const TOPICS: [&str; 6] = [
    "Số học",
    "Đại số",
    "Hình học",
    "Thống kê",
    "Xác suất",
    "Phương trình",
];

/// Model identifiers in the order they are tried after the preferred one.
pub const FALLBACK_MODELS: [&str; 3] = [
    "gemini-3-flash-preview",
    "gemini-3-pro-preview",
    "gemini-2.5-flash",
];

pub const DEFAULT_MODEL: &str = FALLBACK_MODELS[0];

/// OpenAI-compatible endpoint of the Gemini API.
pub const DEFAULT_AI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

pub const SAMPLE_BANK_SIZE: usize = 120;
