//! HTTP handlers for the `/api` routes.

pub mod ask;
pub mod search;
