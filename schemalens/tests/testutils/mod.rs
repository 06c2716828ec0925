//! Test utilities for SchemaLens integration tests
//!
//! Fixtures are built through the public crawler-facing API only.

pub mod test_fixture;
