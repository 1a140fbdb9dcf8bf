// Every way of failing authentication looks identical to the client.

use actix_web::http::header::AUTHORIZATION;
use actix_web::http::StatusCode;
use actix_web::test;
use backend::auth::ClaimSet;
use backend::state::security_config::SecurityConfig;
use backend_test_support::assert_problem_details_from_service_response;

use crate::common::trace_id_header;
use crate::support::auth::{mint_expired_token, mint_token, signup};
use crate::support::test_state::test_security;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn rejected_credentials_all_get_the_same_401() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let claims = ClaimSet::new("01HZX3K8J9Q2W4E6R8T0Y2U4V6", "mina@example.test");
    let valid = mint_token(&claims, &test_security());
    let expired = mint_expired_token(&claims, &test_security());
    let forged = mint_token(&claims, &SecurityConfig::new(b"some-other-secret".to_vec()));
    let mut tampered = valid.clone();
    tampered.push('x');

    let headers: Vec<Option<String>> = vec![
        None,
        Some(String::new()),
        Some("Bearer".to_string()),
        Some("Bearer ".to_string()),
        Some(format!("Basic {valid}")),
        Some(format!("bearer {valid}")),
        Some(format!("Bearer {valid} extra")),
        Some(format!("Bearer  {valid}")),
        Some(format!("Bearer {expired}")),
        Some(format!("Bearer {forged}")),
        Some(format!("Bearer {tampered}")),
        Some("Bearer not.a.jwt".to_string()),
    ];

    let mut details = Vec::new();
    for header in headers {
        let mut req = test::TestRequest::get().uri("/api/users/profile");
        if let Some(value) = &header {
            req = req.insert_header((AUTHORIZATION, value.as_str()));
        }
        let resp = test::call_service(&app, req.to_request()).await;
        let problem = assert_problem_details_from_service_response(
            resp,
            "UNAUTHORIZED",
            StatusCode::UNAUTHORIZED,
            None,
        )
        .await;
        details.push(problem.detail);
    }

    details.dedup();
    assert_eq!(details.len(), 1, "every failure should carry the same detail");

    Ok(())
}

#[actix_web::test]
async fn valid_token_reaches_the_handler() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let session = signup(&app, "mina").await;
    let req = test::TestRequest::get()
        .uri("/api/users/profile")
        .insert_header(session.bearer())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[actix_web::test]
async fn auth_routes_are_not_behind_the_gate() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    // a validation error proves the handler ran without a token
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(serde_json::json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[actix_web::test]
async fn unauthorized_response_keeps_the_request_trace_id() -> Result<(), Box<dyn std::error::Error>>
{
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/api/todos").to_request();
    let resp = test::call_service(&app, req).await;
    let header = trace_id_header(&resp);
    let problem = assert_problem_details_from_service_response(
        resp,
        "UNAUTHORIZED",
        StatusCode::UNAUTHORIZED,
        None,
    )
    .await;
    assert_eq!(problem.trace_id, header);
    assert_ne!(header, "unknown");

    Ok(())
}
