use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::assert_problem_details_from_service_response;
use serde_json::{json, Value};

use crate::support::auth::{couple_session, signup};
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn wishlist_item_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let (_, session) = couple_session(&app, "mina").await;

    let req = test::TestRequest::post()
        .uri("/api/wishlist")
        .insert_header(session.bearer())
        .set_json(json!({ "item_name": "Espresso machine", "item_url": "https://shop.example/espresso", "price": 450000 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let item: Value = test::read_body_json(resp).await;
    assert_eq!(item["is_purchased"], false);
    assert_eq!(item["price"], 450000);

    let uri = format!("/api/wishlist/{}", item["id"]);
    let req = test::TestRequest::patch()
        .uri(&uri)
        .insert_header(session.bearer())
        .set_json(json!({ "is_purchased": true, "item_url": null }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["is_purchased"], true);
    assert!(updated["item_url"].is_null());
    assert_eq!(updated["price"], 450000);
    assert_eq!(updated["item_name"], "Espresso machine");

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(session.bearer())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

#[actix_web::test]
async fn item_name_is_required() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let (_, session) = couple_session(&app, "mina").await;

    let req = test::TestRequest::post()
        .uri("/api/wishlist")
        .insert_header(session.bearer())
        .set_json(json!({ "price": 1000 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "VALIDATION_ERROR",
        StatusCode::BAD_REQUEST,
        Some("item_name"),
    )
    .await;

    Ok(())
}

#[actix_web::test]
async fn mutations_need_a_couple() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let session = signup(&app, "single").await;

    let req = test::TestRequest::delete()
        .uri("/api/wishlist/1")
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
