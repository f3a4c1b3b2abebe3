//! Test suite for the content studio.
//!
//! Unit tests live under `unit/`, mirroring the `core/` module layout.
//! Provider tests use wiremock so no test ever reaches a real API.
