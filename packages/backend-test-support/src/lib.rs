//! Shared helpers for the backend's unit and integration tests.
//!
//! Nothing here depends on backend types, so the crate can be pulled in by
//! any test binary without creating a dependency cycle.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;

pub use problem_details::assert_problem_details_from_service_response;
pub use unique_helpers::{unique_email, unique_str};
