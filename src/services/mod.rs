pub(crate) mod gemini;
pub(crate) mod pdf_text;
pub(crate) mod prompts;
pub(crate) mod storage;
