// Letters: category rules, validation, prompt building and generation.
// All text-generation calls go through llm_client::TextGenerator.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod session;
pub mod validation;
