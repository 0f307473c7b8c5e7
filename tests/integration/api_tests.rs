//! API integration tests
//!
//! These run against a live server backed by PostgreSQL.

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::time::{SystemTime, UNIX_EPOCH};

const BASE_URL: &str = "http://localhost:8000";

/// Suffix that keeps names unique across runs against the same database
fn unique(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    format!("{}{}", prefix, nanos % 1_000_000_000_000)
}

/// Register a fresh user and return its bearer token
async fn register_and_login(client: &Client) -> String {
    let username = unique("user");
    let response = client
        .post(format!("{}/library/adduser", BASE_URL))
        .json(&json!({ "username": username, "password": "secret1" }))
        .send()
        .await
        .expect("Failed to send adduser request");
    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/token", BASE_URL))
        .form(&[("username", username.as_str()), ("password", "secret1")])
        .send()
        .await
        .expect("Failed to send token request");
    let body: Value = response.json().await.expect("Failed to parse token response");
    body["access_token"].as_str().expect("No token in response").to_string()
}

async fn add_author(client: &Client, token: &str, name: &str) -> reqwest::Response {
    client
        .post(format!("{}/library/addauthor", BASE_URL))
        .bearer_auth(token)
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to send addauthor request")
}

async fn add_book(client: &Client, token: &str, author: &str, title: &str, pages: i32) -> reqwest::Response {
    client
        .post(format!("{}/library/{}/addbook/", BASE_URL, author))
        .bearer_auth(token)
        .json(&json!({ "title": title, "pages": pages }))
        .send()
        .await
        .expect("Failed to send addbook request")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_token_flow() {
    let client = Client::new();
    let username = unique("alice");

    let response = client
        .post(format!("{}/library/adduser", BASE_URL))
        .json(&json!({ "username": username, "password": "secret1" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["username"], username.as_str());
    assert!(body.get("password").is_none());

    let response = client
        .post(format!("{}/token", BASE_URL))
        .form(&[("username", username.as_str()), ("password", "secret1")])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "access_token": username, "token_type": "bearer" }));

    let response = client
        .post(format!("{}/token", BASE_URL))
        .form(&[("username", username.as_str()), ("password", "wrong")])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore]
async fn test_duplicate_username() {
    let client = Client::new();
    let username = unique("bob");
    let payload = json!({ "username": username, "password": "secret1" });

    let first = client
        .post(format!("{}/library/adduser", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert!(first.status().is_success());

    let second = client
        .post(format!("{}/library/adduser", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore]
async fn test_unknown_token_rejected() {
    let client = Client::new();
    let response = add_author(&client, &unique("ghost"), &unique("Author")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore]
async fn test_author_uniqueness() {
    let client = Client::new();
    let token = register_and_login(&client).await;
    let first_name = unique("Tolkien");
    let second_name = unique("Pratchett");

    let first = add_author(&client, &token, &first_name).await;
    assert!(first.status().is_success());
    let first: Value = first.json().await.expect("Failed to parse response");

    let second = add_author(&client, &token, &second_name).await;
    assert!(second.status().is_success());
    let second: Value = second.json().await.expect("Failed to parse response");
    assert_ne!(first["id"], second["id"]);

    let duplicate = add_author(&client, &token, &first_name).await;
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore]
async fn test_add_book_links_author() {
    let client = Client::new();
    let token = register_and_login(&client).await;
    let author = unique("Tolkien");

    let response = add_author(&client, &token, &author).await;
    let created: Value = response.json().await.expect("Failed to parse response");

    let response = add_book(&client, &token, &author, "LOTR", 1200).await;
    assert_eq!(response.status(), StatusCode::OK);
    let book: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(book["author_id"], created["id"]);
    assert_eq!(book["title"], "LOTR");
    assert_eq!(book["pages"], 1200);
}

#[tokio::test]
#[ignore]
async fn test_add_book_missing_author() {
    let client = Client::new();
    let token = register_and_login(&client).await;

    let response = add_book(&client, &token, &unique("Nobody"), "Ghost", 100).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn test_pages_boundary() {
    let client = Client::new();
    let token = register_and_login(&client).await;
    let author = unique("Borges");
    add_author(&client, &token, &author).await;

    let response = add_book(&client, &token, &author, "Too short", 9).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = add_book(&client, &token, &author, "Just enough", 10).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore]
async fn test_delete_author_cascades() {
    let client = Client::new();
    let token = register_and_login(&client).await;
    let author = unique("Herbert");
    add_author(&client, &token, &author).await;
    add_book(&client, &token, &author, "Dune", 412).await;
    add_book(&client, &token, &author, "Dune Messiah", 256).await;

    let response = client
        .get(format!("{}/library/{}/getbook", BASE_URL, author))
        .send()
        .await
        .expect("Failed to send request");
    let books: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(books.as_array().map(Vec::len), Some(2));

    let response = client
        .delete(format!("{}/library/{}/deleteauthor", BASE_URL, author))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], format!("Author '{}' was successfully deleted", author));

    let response = client
        .get(format!("{}/library/{}/getbook", BASE_URL, author))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client
        .get(format!("{}/library/getbook", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    let all: Value = response.json().await.expect("Failed to parse response");
    let orphaned = all
        .as_array()
        .expect("array of books")
        .iter()
        .filter(|b| b["title"] == "Dune Messiah")
        .filter(|b| b["pages"] == 256)
        .count();
    assert_eq!(orphaned, 0);
}

#[tokio::test]
#[ignore]
async fn test_update_book_preserves_identity() {
    let client = Client::new();
    let token = register_and_login(&client).await;
    let author = unique("LeGuin");
    add_author(&client, &token, &author).await;
    let original: Value = add_book(&client, &token, &author, "Earthsea", 180)
        .await
        .json()
        .await
        .expect("Failed to parse response");

    let response = client
        .put(format!("{}/library/{}/updatebook/", BASE_URL, author))
        .query(&[("title", "Earthsea")])
        .bearer_auth(&token)
        .json(&json!({ "title": "A Wizard of Earthsea", "pages": 205 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(updated["id"], original["id"]);
    assert_eq!(updated["author_id"], original["author_id"]);
    assert_eq!(updated["title"], "A Wizard of Earthsea");
    assert_eq!(updated["pages"], 205);

    let response = client
        .put(format!("{}/library/{}/updatebook/", BASE_URL, author))
        .query(&[("title", "Earthsea")])
        .bearer_auth(&token)
        .json(&json!({ "title": "Tehanu", "pages": 250 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn test_delete_book() {
    let client = Client::new();
    let token = register_and_login(&client).await;
    let author = unique("Calvino");
    add_author(&client, &token, &author).await;
    add_book(&client, &token, &author, "Invisible Cities", 165).await;

    let response = client
        .delete(format!("{}/library/{}/deletebook", BASE_URL, author))
        .query(&[("title", "Invisible Cities")])
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], format!("Invisible Cities by {} was successfully deleted", author));

    let response = client
        .delete(format!("{}/library/{}/deletebook", BASE_URL, author))
        .query(&[("title", "Invisible Cities")])
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn test_login_form_redirects() {
    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to build client");
    let username = unique("carol");

    let response = client
        .post(format!("{}/register", BASE_URL))
        .form(&[("username", username.as_str()), ("password", "secret1")])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .post(format!("{}/login", BASE_URL))
        .form(&[("username", username.as_str()), ("password", "secret1")])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/");

    let response = client
        .post(format!("{}/login", BASE_URL))
        .form(&[("username", username.as_str()), ("password", "wrong")])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let page = response.text().await.expect("Failed to read page");
    assert!(page.contains("Incorrect username or password"));
}

#[tokio::test]
#[ignore]
async fn test_book_form_missing_author_inline_error() {
    let client = Client::new();
    let author = unique("Missing");

    let response = client
        .post(format!("{}/book/create", BASE_URL))
        .form(&[("author", author.as_str()), ("name", "Nothing"), ("pages", "50")])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let page = response.text().await.expect("Failed to read page");
    assert!(page.contains("Author not found"));
}
