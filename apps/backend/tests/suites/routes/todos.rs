// Todos: CRUD, couple isolation and partial updates.

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::assert_problem_details_from_service_response;
use serde_json::{json, Value};

use crate::support::auth::{couple_session, signup, Session};
use crate::support::{build_test_state, create_test_app};

fn post(session: &Session, body: Value) -> actix_http::Request {
    test::TestRequest::post()
        .uri("/api/todos")
        .insert_header(session.bearer())
        .set_json(body)
        .to_request()
}

fn patch(session: &Session, id: &str, body: Value) -> actix_http::Request {
    test::TestRequest::patch()
        .uri(&format!("/api/todos/{id}"))
        .insert_header(session.bearer())
        .set_json(body)
        .to_request()
}

fn list(session: &Session) -> actix_http::Request {
    test::TestRequest::get()
        .uri("/api/todos")
        .insert_header(session.bearer())
        .to_request()
}

#[actix_web::test]
async fn create_and_list_newest_first() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let (_, session) = couple_session(&app, "mina").await;

    let resp = test::call_service(
        &app,
        post(&session, json!({ "content": " Book the hall ", "due_date": "2026-03-01" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let first: Value = test::read_body_json(resp).await;
    assert_eq!(first["content"], "Book the hall");
    assert_eq!(first["due_date"], "2026-03-01");
    assert_eq!(first["is_completed"], false);

    let resp = test::call_service(&app, post(&session, json!({ "content": "Send invitations" }))).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = test::call_service(&app, list(&session)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Value = test::read_body_json(resp).await;
    let contents: Vec<&str> = todos
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, ["Send invitations", "Book the hall"]);

    Ok(())
}

#[actix_web::test]
async fn blank_content_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let (_, session) = couple_session(&app, "mina").await;

    for body in [json!({ "content": "   " }), json!({})] {
        let resp = test::call_service(&app, post(&session, body)).await;
        assert_problem_details_from_service_response(
            resp,
            "VALIDATION_ERROR",
            StatusCode::BAD_REQUEST,
            Some("content"),
        )
        .await;
    }

    Ok(())
}

#[actix_web::test]
async fn patch_distinguishes_null_from_absent() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let (_, session) = couple_session(&app, "mina").await;

    let resp = test::call_service(
        &app,
        post(&session, json!({ "content": "Dress fitting", "due_date": "2026-04-10" })),
    )
    .await;
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].to_string();

    // absent due_date stays as it was
    let resp = test::call_service(&app, patch(&session, &id, json!({ "is_completed": true }))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["is_completed"], true);
    assert_eq!(updated["due_date"], "2026-04-10");
    assert_eq!(updated["content"], "Dress fitting");

    // explicit null clears it
    let resp = test::call_service(&app, patch(&session, &id, json!({ "due_date": null }))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cleared: Value = test::read_body_json(resp).await;
    assert!(cleared["due_date"].is_null());
    assert_eq!(cleared["is_completed"], true);

    Ok(())
}

#[actix_web::test]
async fn empty_patch_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let (_, session) = couple_session(&app, "mina").await;

    let resp = test::call_service(&app, post(&session, json!({ "content": "Cake tasting" }))).await;
    let created: Value = test::read_body_json(resp).await;

    let resp = test::call_service(&app, patch(&session, &created["id"].to_string(), json!({}))).await;
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
async fn delete_then_missing() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let (_, session) = couple_session(&app, "mina").await;

    let resp = test::call_service(&app, post(&session, json!({ "content": "Pick rings" }))).await;
    let created: Value = test::read_body_json(resp).await;
    let uri = format!("/api/todos/{}", created["id"]);

    let delete = || {
        test::TestRequest::delete()
            .uri(&uri)
            .insert_header(session.bearer())
            .to_request()
    };

    let resp = test::call_service(&app, delete()).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = test::call_service(&app, delete()).await;
    assert_problem_details_from_service_response(resp, "TODO_NOT_FOUND", StatusCode::NOT_FOUND, None)
        .await;

    let resp = test::call_service(&app, list(&session)).await;
    let todos: Value = test::read_body_json(resp).await;
    assert_eq!(todos, json!([]));

    Ok(())
}

#[actix_web::test]
async fn other_couples_todos_are_invisible() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let (_, owner) = couple_session(&app, "mina").await;
    let (_, stranger) = couple_session(&app, "other").await;

    let resp = test::call_service(&app, post(&owner, json!({ "content": "Private plan" }))).await;
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].to_string();

    let resp = test::call_service(&app, list(&stranger)).await;
    let todos: Value = test::read_body_json(resp).await;
    assert_eq!(todos, json!([]));

    let resp = test::call_service(&app, patch(&stranger, &id, json!({ "content": "mine now" }))).await;
    assert_problem_details_from_service_response(resp, "TODO_NOT_FOUND", StatusCode::NOT_FOUND, None)
        .await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/todos/{id}"))
        .insert_header(stranger.bearer())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(resp, "TODO_NOT_FOUND", StatusCode::NOT_FOUND, None)
        .await;

    // still intact for the owner
    let resp = test::call_service(&app, list(&owner)).await;
    let todos: Value = test::read_body_json(resp).await;
    assert_eq!(todos[0]["content"], "Private plan");

    Ok(())
}

#[actix_web::test]
async fn without_a_couple_lists_are_empty_and_writes_fail() -> Result<(), Box<dyn std::error::Error>>
{
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let session = signup(&app, "single").await;

    let resp = test::call_service(&app, list(&session)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Value = test::read_body_json(resp).await;
    assert_eq!(todos, json!([]));

    let resp = test::call_service(&app, post(&session, json!({ "content": "Anything" }))).await;
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
async fn non_numeric_id_is_invalid() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let (_, session) = couple_session(&app, "mina").await;

    for id in ["abc", "1.5", "-3", "0"] {
        let resp =
            test::call_service(&app, patch(&session, id, json!({ "is_completed": true }))).await;
        assert_problem_details_from_service_response(
            resp,
            "INVALID_ID",
            StatusCode::BAD_REQUEST,
            None,
        )
        .await;
    }

    Ok(())
}
