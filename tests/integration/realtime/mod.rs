//! Real-time event integration tests

#[cfg(feature = "ssr")]
mod subscription_test;
