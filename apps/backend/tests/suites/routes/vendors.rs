use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::assert_problem_details_from_service_response;
use serde_json::{json, Value};

use crate::support::auth::{couple_session, Session};
use crate::support::{build_test_state, create_test_app};

fn post(session: &Session, body: Value) -> actix_http::Request {
    test::TestRequest::post()
        .uri("/api/vendors")
        .insert_header(session.bearer())
        .set_json(body)
        .to_request()
}

fn patch(session: &Session, id: &Value, body: Value) -> actix_http::Request {
    test::TestRequest::patch()
        .uri(&format!("/api/vendors/{id}"))
        .insert_header(session.bearer())
        .set_json(body)
        .to_request()
}

#[actix_web::test]
async fn create_defaults_status_to_considering() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let (_, session) = couple_session(&app, "mina").await;

    let resp = test::call_service(
        &app,
        post(
            &session,
            json!({ "name": "Grand Hall", "category": "WEDDING_HALL", "cost": 12000000, "pros": "parking" }),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let vendor: Value = test::read_body_json(resp).await;
    assert_eq!(vendor["name"], "Grand Hall");
    assert_eq!(vendor["category"], "WEDDING_HALL");
    assert_eq!(vendor["status"], "considering");
    assert_eq!(vendor["cost"], 12000000);
    assert_eq!(vendor["pros"], "parking");
    assert!(vendor["cons"].is_null());
    assert!(vendor["contact"].is_null());

    Ok(())
}

#[actix_web::test]
async fn unknown_or_missing_category_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let (_, session) = couple_session(&app, "mina").await;

    for body in [
        json!({ "name": "Somebody", "category": "CATERING" }),
        json!({ "name": "Somebody" }),
        json!({ "category": "STUDIO" }),
    ] {
        let resp = test::call_service(&app, post(&session, body)).await;
        assert_problem_details_from_service_response(
            resp,
            "VALIDATION_ERROR",
            StatusCode::BAD_REQUEST,
            None,
        )
        .await;
    }

    Ok(())
}

#[actix_web::test]
async fn patch_updates_and_clears_fields() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let (_, session) = couple_session(&app, "mina").await;

    let resp = test::call_service(
        &app,
        post(
            &session,
            json!({ "name": "Studio K", "category": "STUDIO", "contact": "010-0000-0000", "cost": 900000 }),
        ),
    )
    .await;
    let vendor: Value = test::read_body_json(resp).await;

    let resp = test::call_service(
        &app,
        patch(
            &session,
            &vendor["id"],
            json!({ "status": "booked", "cost": null, "category": "DRESS" }),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["status"], "booked");
    assert_eq!(updated["category"], "DRESS");
    assert!(updated["cost"].is_null());
    assert_eq!(updated["contact"], "010-0000-0000");
    assert_eq!(updated["name"], "Studio K");

    let resp = test::call_service(
        &app,
        patch(&session, &vendor["id"], json!({ "category": "CATERING" })),
    )
    .await;
    assert_problem_details_from_service_response(
        resp,
        "VALIDATION_ERROR",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;

    let resp = test::call_service(&app, patch(&session, &vendor["id"], json!({}))).await;
    assert_problem_details_from_service_response(
        resp,
        "VALIDATION_ERROR",
        StatusCode::BAD_REQUEST,
        Some("No fields"),
    )
    .await;

    Ok(())
}

#[actix_web::test]
async fn other_couples_vendor_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let (_, owner) = couple_session(&app, "mina").await;
    let (_, stranger) = couple_session(&app, "other").await;

    let resp = test::call_service(
        &app,
        post(&owner, json!({ "name": "Bloom", "category": "BOUQUET" })),
    )
    .await;
    let vendor: Value = test::read_body_json(resp).await;

    let resp = test::call_service(
        &app,
        patch(&stranger, &vendor["id"], json!({ "status": "booked" })),
    )
    .await;
    assert_problem_details_from_service_response(
        resp,
        "VENDOR_NOT_FOUND",
        StatusCode::NOT_FOUND,
        None,
    )
    .await;

    Ok(())
}
