// Section Extraction Service.
// Turns question/answer text into structured section data via one LLM call:
// validate -> resolve template -> compose prompt -> call oracle -> sanitize -> parse.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod extractor;
pub mod handlers;
pub mod prompts;
pub mod sanitize;
pub mod templates;
