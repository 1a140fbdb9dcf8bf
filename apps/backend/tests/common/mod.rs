#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::dev::ServiceResponse;
use actix_web::http::header::HeaderName;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// `x-trace-id` of a response; panics when it is missing.
pub fn trace_id_header<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get(HeaderName::from_static("x-trace-id"))
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present and valid UTF-8")
        .to_string()
}
