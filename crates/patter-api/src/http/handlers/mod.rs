//! HTTP request handlers for the REST API.

pub mod rules;
pub mod session;
