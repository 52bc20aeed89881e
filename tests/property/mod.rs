//! Property-based tests for the pure domain layer

mod analytics_proptest;
mod sentiment_proptest;
mod validation_proptest;
