//! HTTP/REST API layer for Patter.
//!
//! Axum-based REST API at `/api/v1/` with envelope response format and
//! CORS support. Sessions live in the in-memory registry and vanish when
//! the process exits.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
