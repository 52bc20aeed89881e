//! Integration tests
//!
//! HTTP API tests run against the full router; realtime tests drive the
//! SSE handler directly.

pub mod realtime;
