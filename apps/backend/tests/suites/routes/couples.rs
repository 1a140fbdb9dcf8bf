// Couple creation, joining and the couple-required rule.

use actix_web::http::StatusCode;
use actix_web::test;
use backend::auth::decode_token;
use backend_test_support::assert_problem_details_from_service_response;
use serde_json::{json, Value};

use crate::support::auth::{create_couple, signup, Session};
use crate::support::test_state::test_security;
use crate::support::{build_test_state, create_test_app};

fn join_request(session: &Session, couple_id: &str) -> actix_http::Request {
    test::TestRequest::post()
        .uri("/api/couples/join")
        .insert_header(session.bearer())
        .set_json(json!({ "couple_id": couple_id }))
        .to_request()
}

#[actix_web::test]
async fn create_reissues_token_with_the_new_couple() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let session = signup(&app, "mina").await;
    let req = test::TestRequest::post()
        .uri("/api/couples")
        .insert_header(session.bearer())
        .set_json(json!({ "wedding_date": "2026-05-17" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    let couple_id = body["couple"]["id"].as_str().unwrap();
    assert_eq!(couple_id.len(), 26);
    assert_eq!(body["couple"]["wedding_date"], "2026-05-17");
    assert_eq!(body["couple"]["members"], json!([{ "id": session.user_id, "name": "mina" }]));

    let old = decode_token(&session.token, &test_security())?;
    let new = decode_token(body["token"].as_str().unwrap(), &test_security())?;
    assert_eq!(old.group_id, None);
    assert_eq!(new.group_id.as_deref(), Some(couple_id));
    assert_eq!(new.subject_id, old.subject_id);

    Ok(())
}

#[actix_web::test]
async fn second_couple_for_same_user_is_conflict() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let session = signup(&app, "mina").await;
    create_couple(&app, &session).await;

    // still the pre-couple token; membership is checked against storage
    let req = test::TestRequest::post()
        .uri("/api/couples")
        .insert_header(session.bearer())
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "ALREADY_IN_COUPLE",
        StatusCode::CONFLICT,
        None,
    )
    .await;

    Ok(())
}

#[actix_web::test]
async fn partner_joins_and_both_see_the_couple() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let mina = signup(&app, "mina").await;
    let (couple_id, mina) = create_couple(&app, &mina).await;
    let jun = signup(&app, "jun").await;

    let resp = test::call_service(&app, join_request(&jun, &couple_id)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["couple"]["members"].as_array().unwrap().len(), 2);
    let jun_token = body["token"].as_str().unwrap().to_string();
    assert_eq!(
        decode_token(&jun_token, &test_security())?.group_id.as_deref(),
        Some(couple_id.as_str())
    );

    for token in [&mina.token, &jun_token] {
        let req = test::TestRequest::get()
            .uri("/api/couples/me")
            .insert_header(crate::support::auth::bearer(token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["id"], couple_id);
        let names: Vec<&str> = body["members"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["mina", "jun"]);
    }

    Ok(())
}

#[actix_web::test]
async fn third_member_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let mina = signup(&app, "mina").await;
    let (couple_id, _) = create_couple(&app, &mina).await;
    let jun = signup(&app, "jun").await;
    let resp = test::call_service(&app, join_request(&jun, &couple_id)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let third = signup(&app, "third").await;
    let resp = test::call_service(&app, join_request(&third, &couple_id)).await;
    assert_problem_details_from_service_response(resp, "COUPLE_FULL", StatusCode::CONFLICT, None)
        .await;

    Ok(())
}

#[actix_web::test]
async fn joining_unknown_couple_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let jun = signup(&app, "jun").await;
    let resp = test::call_service(&app, join_request(&jun, "01HZX3K8J9Q2W4E6R8T0Y2U4V6")).await;
    assert_problem_details_from_service_response(
        resp,
        "COUPLE_NOT_FOUND",
        StatusCode::NOT_FOUND,
        None,
    )
    .await;

    Ok(())
}

#[actix_web::test]
async fn member_cannot_join_another_couple() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let mina = signup(&app, "mina").await;
    let (first, _) = create_couple(&app, &mina).await;
    let jun = signup(&app, "jun").await;
    let (_, jun) = create_couple(&app, &jun).await;

    let resp = test::call_service(&app, join_request(&jun, &first)).await;
    assert_problem_details_from_service_response(
        resp,
        "ALREADY_IN_COUPLE",
        StatusCode::CONFLICT,
        None,
    )
    .await;

    Ok(())
}

#[actix_web::test]
async fn couple_me_requires_a_couple_in_the_token() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let session = signup(&app, "mina").await;
    let req = test::TestRequest::get()
        .uri("/api/couples/me")
        .insert_header(session.bearer())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "COUPLE_REQUIRED",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;

    Ok(())
}

#[actix_web::test]
async fn wedding_date_can_be_set_and_cleared() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let session = signup(&app, "mina").await;
    let (_, session) = create_couple(&app, &session).await;

    let patch = |body: Value| {
        test::TestRequest::patch()
            .uri("/api/couples/me")
            .insert_header(session.bearer())
            .set_json(body)
            .to_request()
    };

    let resp = test::call_service(&app, patch(json!({ "wedding_date": "2026-10-03" }))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["wedding_date"], "2026-10-03");

    let resp = test::call_service(&app, patch(json!({ "wedding_date": null }))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["wedding_date"].is_null());

    let resp = test::call_service(&app, patch(json!({}))).await;
    assert_problem_details_from_service_response(
        resp,
        "VALIDATION_ERROR",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;

    let resp = test::call_service(&app, patch(json!({ "wedding_date": "next spring" }))).await;
    assert_problem_details_from_service_response(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST, None)
        .await;

    Ok(())
}
