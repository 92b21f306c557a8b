// HTTP server modules
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

// Comfort message generation
pub mod comfort;

// LLM abstraction layer
pub mod llm;
