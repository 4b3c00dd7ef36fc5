//! API Integration Tests
//!
//! These tests require a running PostgreSQL instance reachable through
//! the TEST_DATABASE_URL environment variable.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::json;

async fn create_user(server: &TestServer) -> (CreateUserRequest, UserResponse) {
    let request = CreateUserRequest::unique();
    let response = server.post("/users/", &request).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (request, user)
}

/// Entire listing of a collection
async fn list_all<T: DeserializeOwned>(server: &TestServer, collection: &str) -> Vec<T> {
    let response = server
        .get(&format!("{collection}?limit={}", i64::MAX))
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

/// One page together with the full listing it was cut from
///
/// Other tests write to the same tables, so the page only counts when the listing
/// was identical before and after it was fetched.
async fn page_of<T, F>(
    server: &TestServer,
    collection: &str,
    limit: usize,
    start: F,
) -> (Vec<T>, Vec<T>, usize)
where
    T: DeserializeOwned + PartialEq,
    F: Fn(&[T]) -> usize,
{
    for _ in 0..10 {
        let before: Vec<T> = list_all(server, collection).await;
        let skip = start(&before);
        let response = server
            .get(&format!("{collection}?skip={skip}&limit={limit}"))
            .await
            .unwrap();
        let page: Vec<T> = assert_json(response, StatusCode::OK).await.unwrap();
        let after: Vec<T> = list_all(server, collection).await;
        if before == after {
            return (before, page, skip);
        }
    }
    panic!("{collection} kept changing while paging");
}

fn user_position(users: &[UserResponse], id: i64) -> usize {
    users.iter().position(|u| u.id == id).unwrap()
}

fn item_position(items: &[ItemResponse], id: i64) -> usize {
    items.iter().position(|i| i.id == id).unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_root() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["message"].as_str().unwrap().starts_with("Welcome to"));
}

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let health: HealthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.database, "connected");
    assert!(health.error.is_none());
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_create_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest::unique();

    let response = server.post("/users/", &request).await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(body["email"], request.email.as_str());
    assert_eq!(body["username"], request.username.as_str());
    assert_eq!(body["is_active"], true);
    assert_eq!(body["items"], json!([]));
    assert!(body["updated_at"].is_null());
    assert!(body.get("password").is_none());
    assert!(body.get("hashed_password").is_none());

    server.delete_user(body["id"].as_i64().unwrap()).await.unwrap();
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, user) = create_user(&server).await;

    let mut duplicate = CreateUserRequest::unique();
    duplicate.email = request.email.clone();
    let response = server.post("/users/", &duplicate).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.message, "Email already registered");

    server.delete_user(user.id).await.unwrap();
}

#[tokio::test]
async fn test_create_user_duplicate_username() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, user) = create_user(&server).await;

    let mut duplicate = CreateUserRequest::unique();
    duplicate.username = request.username.clone();
    let response = server.post("/users", &duplicate).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    server.delete_user(user.id).await.unwrap();
}

#[tokio::test]
async fn test_create_user_invalid_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = CreateUserRequest::unique();
    request.email = "not-an-email".to_string();

    let response = server.post("/users/", &request).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert_eq!(error.error.code, "VALIDATION_ERROR");
    assert!(error.error.details.unwrap().get("email").is_some());
}

#[tokio::test]
async fn test_get_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, user) = create_user(&server).await;

    let response = server.get(&format!("/users/{}", user.id)).await.unwrap();
    let fetched: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched, user);

    server.delete_user(user.id).await.unwrap();
}

#[tokio::test]
async fn test_get_user_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get(&format!("/users/{}", i64::MAX)).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.message, "User not found");
}

#[tokio::test]
async fn test_list_users_pagination() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, first) = create_user(&server).await;
    let (_, second) = create_user(&server).await;

    let response = server
        .get(&format!("/users/?skip=0&limit={}", i64::MAX))
        .await
        .unwrap();
    let users: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    assert!(ids.contains(&first.id));
    assert!(ids.contains(&second.id));

    let response = server.get("/users?limit=0").await.unwrap();
    let users: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(users.is_empty());

    let response = server.get("/users/?limit=1").await.unwrap();
    let users: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(users.len(), 1);

    let response = server.get("/users/?skip=-1").await.unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY).await.unwrap();

    server.delete_user(first.id).await.unwrap();
    server.delete_user(second.id).await.unwrap();
}

#[tokio::test]
async fn test_list_users_returns_requested_window() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, first) = create_user(&server).await;
    let (_, second) = create_user(&server).await;
    let (_, third) = create_user(&server).await;

    // skip past the first user, take one
    let (all, page, skip) = page_of(&server, "/users/", 1, |users: &[UserResponse]| {
        user_position(users, first.id) + 1
    })
    .await;
    assert!(user_position(&all, first.id) < user_position(&all, second.id));
    assert!(user_position(&all, second.id) < user_position(&all, third.id));
    assert_eq!(page, all[skip..=skip].to_vec());

    let (_, page, _) = page_of(&server, "/users", 1, |users: &[UserResponse]| {
        user_position(users, second.id)
    })
    .await;
    assert_eq!(page, vec![second.clone()]);

    let (all, page, skip) = page_of(&server, "/users/", 3, |users: &[UserResponse]| {
        user_position(users, first.id)
    })
    .await;
    assert_eq!(page, all[skip..skip + 3].to_vec());
    assert_eq!(page[0], first);

    for user in [first, second, third] {
        server.delete_user(user.id).await.unwrap();
    }
}

// ============================================================================
// Item Tests
// ============================================================================

#[tokio::test]
async fn test_list_items_returns_requested_window() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = create_user(&server).await;
    let mut created = Vec::new();
    for title in ["Lamp", "Desk", "Chair"] {
        let response = server
            .post(&format!("/users/{}/items/", owner.id), &CreateItemRequest::new(title))
            .await
            .unwrap();
        let item: ItemResponse = assert_json(response, StatusCode::OK).await.unwrap();
        created.push(item);
    }
    let (lamp, desk) = (created[0].clone(), created[1].clone());

    let (all, page, skip) = page_of(&server, "/items/", 1, |items: &[ItemResponse]| {
        item_position(items, lamp.id) + 1
    })
    .await;
    assert!(item_position(&all, lamp.id) < item_position(&all, desk.id));
    assert_eq!(page, all[skip..=skip].to_vec());

    let (_, page, _) = page_of(&server, "/items", 1, |items: &[ItemResponse]| {
        item_position(items, desk.id)
    })
    .await;
    assert_eq!(page, vec![desk]);

    let (all, page, skip) = page_of(&server, "/items/", 3, |items: &[ItemResponse]| {
        item_position(items, lamp.id)
    })
    .await;
    assert_eq!(page, all[skip..skip + 3].to_vec());
    assert_eq!(page[0], lamp);

    server.delete_user(owner.id).await.unwrap();
}

#[tokio::test]
async fn test_create_item_for_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, user) = create_user(&server).await;

    let request = CreateItemRequest::with_description("Lamp", "Brass desk lamp");
    let response = server
        .post(&format!("/users/{}/items/", user.id), &request)
        .await
        .unwrap();
    let item: ItemResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(item.title, "Lamp");
    assert_eq!(item.description.as_deref(), Some("Brass desk lamp"));
    assert_eq!(item.owner_id, user.id);
    assert!(item.updated_at.is_none());

    let response = server
        .post(&format!("/users/{}/items", user.id), &CreateItemRequest::new("Desk"))
        .await
        .unwrap();
    let second: ItemResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(second.description.is_none());

    let response = server.get(&format!("/users/{}", user.id)).await.unwrap();
    let fetched: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.items, vec![item.clone(), second.clone()]);

    let response = server
        .get(&format!("/items/?limit={}", i64::MAX))
        .await
        .unwrap();
    let items: Vec<ItemResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(items.contains(&item));
    assert!(items.contains(&second));

    server.delete_user(user.id).await.unwrap();
}

#[tokio::test]
async fn test_create_item_for_missing_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let title = format!("orphan{}", unique_suffix());
    let response = server
        .post(&format!("/users/{}/items/", i64::MAX), &CreateItemRequest::new(&title))
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.message, "User not found");

    let items: Vec<ItemResponse> = list_all(&server, "/items/").await;
    assert!(items.iter().all(|i| i.title != title));
}

#[tokio::test]
async fn test_create_item_validation() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, user) = create_user(&server).await;

    let response = server
        .post(&format!("/users/{}/items/", user.id), &CreateItemRequest::new(""))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();

    let response = server
        .post(
            &format!("/users/{}/items/", user.id),
            &CreateItemRequest::new(&"x".repeat(201)),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();

    // Nothing was stored for the rejected requests
    let response = server.get(&format!("/users/{}", user.id)).await.unwrap();
    let fetched: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(fetched.items.is_empty());

    server.delete_user(user.id).await.unwrap();
}

#[tokio::test]
async fn test_deleting_user_removes_items() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, user) = create_user(&server).await;
    let response = server
        .post(&format!("/users/{}/items/", user.id), &CreateItemRequest::new("Chair"))
        .await
        .unwrap();
    let item: ItemResponse = assert_json(response, StatusCode::OK).await.unwrap();

    server.delete_user(user.id).await.unwrap();

    let response = server
        .get(&format!("/items/?limit={}", i64::MAX))
        .await
        .unwrap();
    let items: Vec<ItemResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(items.iter().all(|i| i.id != item.id));
}
