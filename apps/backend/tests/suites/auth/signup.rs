// Integration tests for POST /api/auth/signup.

use actix_web::http::StatusCode;
use actix_web::test;
use backend::auth::decode_token;
use backend_test_support::{assert_problem_details_from_service_response, unique_email};
use serde_json::{json, Value};

use crate::support::auth::TEST_PASSWORD;
use crate::support::test_state::test_security;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn signup_returns_user_and_token_without_couple() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let email = unique_email("bride");
    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(json!({
            "email": format!("  {}  ", email.to_uppercase()),
            "name": " Mina ",
            "password": TEST_PASSWORD,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["user"]["email"], email);
    assert_eq!(body["user"]["name"], "Mina");
    assert!(body["user"]["couple_id"].is_null());
    assert!(body["user"]["created_at"].is_string());
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("password_hash").is_none());

    let claims = decode_token(body["token"].as_str().unwrap(), &test_security())?;
    assert_eq!(claims.subject_id, body["user"]["id"].as_str().unwrap());
    assert_eq!(claims.email, email);
    assert_eq!(claims.group_id, None);

    Ok(())
}

#[actix_web::test]
async fn duplicate_email_is_conflict() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let email = unique_email("groom");
    let signup = |email: String| {
        test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(json!({ "email": email, "name": "Jun", "password": TEST_PASSWORD }))
            .to_request()
    };

    let first = test::call_service(&app, signup(email.clone())).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    // differently cased, same account
    let second = test::call_service(&app, signup(email.to_uppercase())).await;
    assert_problem_details_from_service_response(
        second,
        "UNIQUE_EMAIL",
        StatusCode::CONFLICT,
        None,
    )
    .await;

    Ok(())
}

#[actix_web::test]
async fn invalid_fields_are_validation_errors() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let cases = [
        (json!({ "email": "not-an-email", "name": "A", "password": TEST_PASSWORD }), "email"),
        (json!({ "email": unique_email("a"), "name": "   ", "password": TEST_PASSWORD }), "name"),
        (json!({ "email": unique_email("a"), "name": "A", "password": "short" }), "Password"),
        (json!({ "name": "A", "password": TEST_PASSWORD }), "email"),
    ];

    for (body, detail) in cases {
        let req = test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details_from_service_response(
            resp,
            "VALIDATION_ERROR",
            StatusCode::BAD_REQUEST,
            Some(detail),
        )
        .await;
    }

    Ok(())
}

#[actix_web::test]
async fn malformed_json_is_bad_request() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"email\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST, None)
        .await;

    Ok(())
}
