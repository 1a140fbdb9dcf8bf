// Rate limiter wiring as used in main.rs, exercised against the real auth
// routes with a short window.

use std::time::Duration;

use actix_extensible_rate_limit::backend::memory::InMemoryBackend;
use actix_extensible_rate_limit::backend::SimpleInputFunctionBuilder;
use actix_extensible_rate_limit::RateLimiter;
use actix_web::{test, web, App};
use backend::middleware::rate_limit::{api_rate_limit_config, auth_rate_limit_config};
use backend::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use backend::routes;
use serde_json::json;

use crate::support::build_test_state;

fn login_attempt() -> actix_http::Request {
    test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({}))
        .to_request()
}

#[actix_web::test]
async fn auth_scope_is_limited_to_five_per_window() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let backend = InMemoryBackend::builder().build();
    // TestRequest has no peer address, so key on the path instead of the IP
    let input = SimpleInputFunctionBuilder::new(Duration::from_secs(60), 5)
        .path_key()
        .build();
    let limiter = RateLimiter::builder(backend, input).add_headers().build();

    let app = test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .service(
                web::scope("/api/auth")
                    .wrap(limiter)
                    .configure(routes::auth::configure_routes),
            ),
    )
    .await;

    for i in 0..5 {
        let resp = test::call_service(&app, login_attempt()).await;
        // the handler runs and rejects the empty body
        assert_eq!(resp.status().as_u16(), 400, "attempt {} should reach the handler", i + 1);
        assert!(resp.headers().contains_key("x-ratelimit-remaining"));
    }

    let resp = test::call_service(&app, login_attempt()).await;
    assert_eq!(resp.status().as_u16(), 429);

    Ok(())
}

#[actix_web::test]
async fn window_resets() -> Result<(), Box<dyn std::error::Error>> {
    let backend = InMemoryBackend::builder().build();
    let input = SimpleInputFunctionBuilder::new(Duration::from_millis(10), 1)
        .path_key()
        .build();
    let limiter = RateLimiter::builder(backend, input).add_headers().build();

    let app = test::init_service(
        App::new()
            .wrap(limiter)
            .route("/ping", web::get().to(|| async { "pong" })),
    )
    .await;

    let ping = || test::TestRequest::get().uri("/ping").to_request();
    assert_eq!(test::call_service(&app, ping()).await.status().as_u16(), 200);
    assert_eq!(test::call_service(&app, ping()).await.status().as_u16(), 429);

    tokio::time::sleep(Duration::from_millis(25)).await;
    assert_eq!(test::call_service(&app, ping()).await.status().as_u16(), 200);

    Ok(())
}

#[::core::prelude::v1::test]
fn production_limits_build() {
    // real_ip_key builders; only checks they construct
    let _auth = auth_rate_limit_config().build();
    let _api = api_rate_limit_config().build();
}
