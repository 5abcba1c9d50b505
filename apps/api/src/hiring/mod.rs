// Hiring assistant operations.
// Implements: job descriptions, resume screening, screening questions,
// answer evaluation, feedback emails. All LLM calls go through llm_client.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod service;
pub mod validation;
