use actix_web::http::StatusCode;
use actix_web::test;
use backend::auth::ClaimSet;
use backend_test_support::assert_problem_details_from_service_response;
use serde_json::{json, Value};

use crate::support::auth::{bearer, couple_session, mint_token, signup, Session};
use crate::support::test_state::test_security;
use crate::support::{build_test_state, create_test_app};

fn get_dashboard(session: &Session) -> actix_http::Request {
    test::TestRequest::get()
        .uri("/api/dashboard")
        .insert_header(session.bearer())
        .to_request()
}

#[actix_web::test]
async fn totals_cover_every_item_not_just_recent_ones() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let (_, session) = couple_session(&app, "mina").await;

    // seven items, so two fall outside the recent list
    let items = [
        (100, "bride"),
        (200, "planned"),
        (300, "groom"),
        (400, "planned"),
        (500, "both"),
        (600, "bride"),
        (700, "planned"),
    ];
    for (i, (amount, paid_by)) in items.iter().enumerate() {
        let req = test::TestRequest::post()
            .uri("/api/budget")
            .insert_header(session.bearer())
            .set_json(json!({
                "category": "misc",
                "item": format!("item-{i}"),
                "amount": amount,
                "paid_by": paid_by,
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = test::call_service(&app, get_dashboard(&session)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["total_budget"], 2800);
    assert_eq!(body["spent_amount"], 1500);
    assert_eq!(body["remaining_budget"], 1300);

    let recent = body["recent_budget_items"].as_array().unwrap();
    assert_eq!(recent.len(), 5);
    assert_eq!(recent[0]["item"], "item-6");
    assert_eq!(recent[4]["item"], "item-2");

    Ok(())
}

#[actix_web::test]
async fn recent_lists_are_capped_at_five() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let (_, session) = couple_session(&app, "mina").await;

    for i in 0..6 {
        let req = test::TestRequest::post()
            .uri("/api/todos")
            .insert_header(session.bearer())
            .set_json(json!({ "content": format!("todo-{i}") }))
            .to_request();
        test::call_service(&app, req).await;
    }
    let req = test::TestRequest::post()
        .uri("/api/vendors")
        .insert_header(session.bearer())
        .set_json(json!({ "name": "Bloom", "category": "BOUQUET" }))
        .to_request();
    test::call_service(&app, req).await;

    let resp = test::call_service(&app, get_dashboard(&session)).await;
    let body: Value = test::read_body_json(resp).await;

    let todos = body["recent_todos"].as_array().unwrap();
    assert_eq!(todos.len(), 5);
    assert_eq!(todos[0]["content"], "todo-5");
    assert_eq!(body["recent_vendors"].as_array().unwrap().len(), 1);
    assert_eq!(body["recent_budget_items"], json!([]));
    assert_eq!(body["total_budget"], 0);

    Ok(())
}

#[actix_web::test]
async fn dashboard_shows_wedding_date() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let (_, session) = couple_session(&app, "mina").await;

    let req = test::TestRequest::patch()
        .uri("/api/couples/me")
        .insert_header(session.bearer())
        .set_json(json!({ "wedding_date": "2026-11-21" }))
        .to_request();
    test::call_service(&app, req).await;

    let resp = test::call_service(&app, get_dashboard(&session)).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["wedding_date"], "2026-11-21");

    Ok(())
}

#[actix_web::test]
async fn without_a_couple_everything_is_empty() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let session = signup(&app, "single").await;

    let resp = test::call_service(&app, get_dashboard(&session)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "wedding_date": null,
            "total_budget": 0,
            "spent_amount": 0,
            "remaining_budget": 0,
            "recent_todos": [],
            "recent_vendors": [],
            "recent_budget_items": [],
        })
    );

    Ok(())
}

#[actix_web::test]
async fn unknown_couple_in_claims_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let session = signup(&app, "mina").await;

    let claims = ClaimSet::new(session.user_id.clone(), session.email.clone())
        .with_group(Some("01HZX3K8J9Q2W4E6R8T0Y2U4V6".to_string()));
    let token = mint_token(&claims, &test_security());

    let req = test::TestRequest::get()
        .uri("/api/dashboard")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "COUPLE_NOT_FOUND",
        StatusCode::NOT_FOUND,
        None,
    )
    .await;

    Ok(())
}
