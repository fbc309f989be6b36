//! Integration tests for the shopping cart download endpoint

mod common;

use axum::http::{header, StatusCode};
use common::{test_config, MemorySource, TestApp};
use foodgram_shared::{IngredientId, IngredientRef, MemoryCatalog, RecipeId, RecipeIngredientLine};
use rust_decimal::Decimal;
use uuid::Uuid;

const DOWNLOAD: &str = "/api/v1/recipes/download_shopping_cart";

fn ingredient(id: i64, name: &str, unit: &str) -> IngredientRef {
    IngredientRef {
        id: IngredientId(id),
        name: name.to_string(),
        measurement_unit: unit.to_string(),
    }
}

fn line(id: i64, amount: i64) -> RecipeIngredientLine {
    RecipeIngredientLine::new(IngredientId(id), Decimal::new(amount, 0))
}

fn pancake_catalog() -> MemoryCatalog {
    MemoryCatalog::new()
        .with_ingredient(ingredient(1, "flour", "g"))
        .with_ingredient(ingredient(2, "egg", "pcs"))
        .with_ingredient(ingredient(3, "milk", "ml"))
        .with_recipe(RecipeId(1), vec![line(1, 200), line(2, 2)])
        .with_recipe(RecipeId(2), vec![line(1, 150), line(3, 100)])
}

fn source_for(user_id: Uuid, cart: Vec<RecipeId>) -> MemorySource {
    let mut source = MemorySource {
        catalog: pancake_catalog(),
        ..Default::default()
    };
    source.carts.insert(user_id, cart);
    source
}

#[tokio::test]
async fn test_download_requires_auth() {
    let app = TestApp::new(MemorySource::default());

    let (status, body) = app.get(DOWNLOAD).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_download_rejects_bad_token() {
    let app = TestApp::new(MemorySource::default());

    let (status, _, _) = app.get_auth(DOWNLOAD, "not-a-jwt").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_download_shopping_list() {
    let user_id = Uuid::new_v4();
    let app = TestApp::new(source_for(user_id, vec![RecipeId(1), RecipeId(2)]));
    let token = app.token_for(user_id);

    let (status, headers, body) = app.get_auth(DOWNLOAD, &token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "text/plain; charset=utf-8");
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"shopping_list.txt\""
    );
    assert_eq!(body, "flour (g) — 350\negg (pcs) — 2\nmilk (ml) — 100\n");
}

#[tokio::test]
async fn test_download_is_byte_identical_across_requests() {
    let user_id = Uuid::new_v4();
    let app = TestApp::new(source_for(user_id, vec![RecipeId(2), RecipeId(1), RecipeId(1)]));
    let token = app.token_for(user_id);

    let (_, _, first) = app.get_auth(DOWNLOAD, &token).await;
    let (_, _, second) = app.get_auth(DOWNLOAD, &token).await;

    assert_eq!(first, second);
    assert_eq!(first, "flour (g) — 550\nmilk (ml) — 100\negg (pcs) — 4\n");
}

#[tokio::test]
async fn test_download_uses_configured_title_and_filename() {
    let user_id = Uuid::new_v4();
    let mut config = test_config();
    config.shopping_list.filename = "groceries.txt".to_string();
    config.shopping_list.title = Some("Shopping list:".to_string());
    let app = TestApp::with_config(source_for(user_id, vec![RecipeId(2)]), config);
    let token = app.token_for(user_id);

    let (status, headers, body) = app.get_auth(DOWNLOAD, &token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"groceries.txt\""
    );
    assert_eq!(body, "Shopping list:\n\nflour (g) — 150\nmilk (ml) — 100\n");
}

#[tokio::test]
async fn test_empty_cart_is_bad_request() {
    let user_id = Uuid::new_v4();
    let app = TestApp::new(source_for(user_id, vec![]));
    let token = app.token_for(user_id);

    let (status, _, body) = app.get_auth(DOWNLOAD, &token).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert_eq!(body["error"]["message"], "nothing selected");
}

#[tokio::test]
async fn test_missing_recipe_fails_whole_download() {
    let user_id = Uuid::new_v4();
    let app = TestApp::new(source_for(user_id, vec![RecipeId(1), RecipeId(99)]));
    let token = app.token_for(user_id);

    let (status, _, body) = app.get_auth(DOWNLOAD, &token).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "recipe 99");
}

#[tokio::test]
async fn test_corrupt_amount_is_server_error() {
    let user_id = Uuid::new_v4();
    let mut source = source_for(user_id, vec![RecipeId(3)]);
    source
        .catalog
        .insert_recipe(RecipeId(3), vec![line(2, 0)]);
    let app = TestApp::new(source);
    let token = app.token_for(user_id);

    let (status, _, body) = app.get_auth(DOWNLOAD, &token).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["error"]["code"], "DATA_INTEGRITY");
}

#[tokio::test]
async fn test_carts_are_per_user() {
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    let mut source = source_for(alice, vec![RecipeId(1)]);
    source.carts.insert(bob, vec![RecipeId(2)]);
    let app = TestApp::new(source);

    let (_, _, alice_body) = app.get_auth(DOWNLOAD, &app.token_for(alice)).await;
    let (_, _, bob_body) = app.get_auth(DOWNLOAD, &app.token_for(bob)).await;

    assert_eq!(alice_body, "flour (g) — 200\negg (pcs) — 2\n");
    assert_eq!(bob_body, "flour (g) — 150\nmilk (ml) — 100\n");
}
