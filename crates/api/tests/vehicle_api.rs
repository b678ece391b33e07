//! HTTP-level tests for vehicle CRUD.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_vehicle, delete, get, id_of, patch_json, post_json, vehicle_body};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_vehicle_returns_201(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/vehicles",
        vehicle_body("Volvo", "XC60"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["make"], "Volvo");
    assert_eq!(json["from_year"], 2018);
    assert_eq!(json["to_year"], 2022);
    assert!(json["variant"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn open_ended_production_range_is_accepted(pool: PgPool) {
    let mut body = vehicle_body("Tesla", "Model Y");
    body["to_year"] = serde_json::Value::Null;

    let json = create_vehicle(&pool, body).await;
    assert!(json["to_year"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn inverted_year_range_returns_422(pool: PgPool) {
    let mut body = vehicle_body("Volvo", "XC60");
    body["from_year"] = serde_json::json!(2022);
    body["to_year"] = serde_json::json!(2018);

    let response = post_json(common::build_test_app(pool), "/api/v1/vehicles", body).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_integer_year_returns_422(pool: PgPool) {
    let mut body = vehicle_body("Volvo", "XC60");
    body["from_year"] = serde_json::json!("twenty eighteen");

    let response = post_json(common::build_test_app(pool), "/api/v1/vehicles", body).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_and_list_vehicles(pool: PgPool) {
    let created = create_vehicle(&pool, vehicle_body("Volvo", "XC60")).await;
    create_vehicle(&pool, vehicle_body("BMW", "X5")).await;

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/vehicles/{}", id_of(&created)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["model"], "XC60");

    let response = get(common::build_test_app(pool), "/api/v1/vehicles").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_vehicle_merges_fields(pool: PgPool) {
    let created = create_vehicle(&pool, vehicle_body("Volvo", "XC60")).await;

    let response = patch_json(
        common::build_test_app(pool),
        &format!("/api/v1/vehicles/{}", id_of(&created)),
        serde_json::json!({"trim_level": "Inscription", "to_year": null}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["trim_level"], "Inscription");
    assert!(json["to_year"].is_null());
    assert_eq!(json["make"], "Volvo");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_that_inverts_year_range_returns_422(pool: PgPool) {
    let created = create_vehicle(&pool, vehicle_body("Volvo", "XC60")).await;
    let uri = format!("/api/v1/vehicles/{}", id_of(&created));

    // to_year stays 2022, so a from_year after it is invalid.
    let response = patch_json(
        common::build_test_app(pool.clone()),
        &uri,
        serde_json::json!({"from_year": 2024}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = get(common::build_test_app(pool), &uri).await;
    assert_eq!(body_json(response).await["from_year"], 2018);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_vehicle(pool: PgPool) {
    let created = create_vehicle(&pool, vehicle_body("Volvo", "XC60")).await;
    let uri = format!("/api/v1/vehicles/{}", id_of(&created));

    let response = delete(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(common::build_test_app(pool), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn parts_of_unknown_vehicle_returns_404(pool: PgPool) {
    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/vehicles/{}/parts", uuid::Uuid::new_v4()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_with_null_make_returns_422(pool: PgPool) {
    let created = create_vehicle(&pool, vehicle_body("Volvo", "XC60")).await;
    let uri = format!("/api/v1/vehicles/{}", id_of(&created));

    let response = patch_json(
        common::build_test_app(pool.clone()),
        &uri,
        serde_json::json!({"make": null}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = get(common::build_test_app(pool), &uri).await;
    assert_eq!(body_json(response).await["make"], "Volvo");
}
