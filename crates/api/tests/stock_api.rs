//! HTTP-level tests for per-location stock levels.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_location, create_part, delete, get, id_of, location_body, part_body,
    post_json_anon,
};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn set_stock_twice_keeps_one_row(pool: PgPool) {
    let part = create_part(&pool, part_body("Bosch", "Brakes", "Pad")).await;
    let location = create_location(&pool, location_body("Depot")).await;
    let uri = format!("/api/v1/parts/{}/stock", id_of(&part));

    let response = post_json_anon(
        common::build_test_app(pool.clone()),
        &uri,
        serde_json::json!({"location_id": location["id"], "quantity": 5}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let first = body_json(response).await;
    assert_eq!(first["quantity"], 5);

    let response = post_json_anon(
        common::build_test_app(pool.clone()),
        &uri,
        serde_json::json!({"location_id": location["id"], "quantity": 12}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let second = body_json(response).await;
    assert_eq!(second["quantity"], 12);
    assert_eq!(second["id"], first["id"]);

    let response = get(common::build_test_app(pool), &uri).await;
    let levels = body_json(response).await;
    assert_eq!(levels.as_array().unwrap().len(), 1);
    assert_eq!(levels[0]["quantity"], 12);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn quantity_defaults_to_zero(pool: PgPool) {
    let part = create_part(&pool, part_body("Bosch", "Brakes", "Pad")).await;
    let location = create_location(&pool, location_body("Depot")).await;

    let response = post_json_anon(
        common::build_test_app(pool),
        &format!("/api/v1/parts/{}/stock", id_of(&part)),
        serde_json::json!({"location_id": location["id"]}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["quantity"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn negative_quantity_returns_422(pool: PgPool) {
    let part = create_part(&pool, part_body("Bosch", "Brakes", "Pad")).await;
    let location = create_location(&pool, location_body("Depot")).await;

    let response = post_json_anon(
        common::build_test_app(pool),
        &format!("/api/v1/parts/{}/stock", id_of(&part)),
        serde_json::json!({"location_id": location["id"], "quantity": -1}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_location_returns_404(pool: PgPool) {
    let part = create_part(&pool, part_body("Bosch", "Brakes", "Pad")).await;
    let missing = uuid::Uuid::new_v4();

    let response = post_json_anon(
        common::build_test_app(pool),
        &format!("/api/v1/parts/{}/stock", id_of(&part)),
        serde_json::json!({"location_id": missing, "quantity": 3}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        format!("Location with id {missing} not found")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_part_returns_404(pool: PgPool) {
    let location = create_location(&pool, location_body("Depot")).await;

    let response = post_json_anon(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/parts/{}/stock", uuid::Uuid::new_v4()),
        serde_json::json!({"location_id": location["id"], "quantity": 3}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/parts/{}/stock", uuid::Uuid::new_v4()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn location_stock_lists_held_parts(pool: PgPool) {
    let pad = create_part(&pool, part_body("Bosch", "Brakes", "Pad")).await;
    let disc = create_part(&pool, part_body("Bosch", "Brakes", "Disc")).await;
    let location = create_location(&pool, location_body("Depot")).await;

    for (part, quantity) in [(&pad, 4), (&disc, 2)] {
        post_json_anon(
            common::build_test_app(pool.clone()),
            &format!("/api/v1/parts/{}/stock", id_of(part)),
            serde_json::json!({"location_id": location["id"], "quantity": quantity}),
        )
        .await;
    }

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/locations/{}/stock", id_of(&location)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let total: i64 = body_json(response)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["quantity"].as_i64().unwrap())
        .sum();
    assert_eq!(total, 6);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_part_or_location_removes_stock(pool: PgPool) {
    let part = create_part(&pool, part_body("Bosch", "Brakes", "Pad")).await;
    let depot = create_location(&pool, location_body("Depot")).await;
    let yard = create_location(&pool, location_body("Yard")).await;
    let stock_uri = format!("/api/v1/parts/{}/stock", id_of(&part));

    for location in [&depot, &yard] {
        post_json_anon(
            common::build_test_app(pool.clone()),
            &stock_uri,
            serde_json::json!({"location_id": location["id"], "quantity": 1}),
        )
        .await;
    }

    delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/locations/{}", id_of(&yard)),
    )
    .await;
    let response = get(common::build_test_app(pool.clone()), &stock_uri).await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/parts/{}", id_of(&part)),
    )
    .await;
    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/locations/{}/stock", id_of(&depot)),
    )
    .await;
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn stock_of_unknown_location_returns_404(pool: PgPool) {
    let missing = uuid::Uuid::new_v4();

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/locations/{missing}/stock"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        format!("Location with id {missing} not found")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn stock_of_unknown_part_returns_404(pool: PgPool) {
    let missing = uuid::Uuid::new_v4();

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/parts/{missing}/stock"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}
