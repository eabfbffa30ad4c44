pub mod handlers;
pub mod prompts;
pub mod question_generator;
