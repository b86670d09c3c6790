//! tutorly-web — HTTP front for the Tutorly relay.
//! Provides:
//!   - POST /api/ask     LLM answer, optionally enriched by Wolfram|Alpha
//!   - GET  /api/google  Google Custom Search passthrough
//!   - the static frontend, with index.html as the catch-all route

pub mod router;
pub mod handlers;
pub mod state;
