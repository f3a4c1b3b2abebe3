//! Provider Unit Tests
//!
//! Uses wiremock for HTTP mocking so no test ever reaches a real API:
//! - request formatting (headers, body shape, credentials placement)
//! - response envelope parsing
//! - error mapping (auth failures, API errors, malformed replies)
//! - connection probes

mod gemini_tests;
