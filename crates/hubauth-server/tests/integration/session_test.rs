//! Home, logout and root redirect tests

use hubauth_server::{HubState, hub_rocket};
use rocket::http::{Cookie, Status};
use rocket::local::asynchronous::Client;
use std::sync::Arc;
use tempfile::TempDir;

use crate::test_utils::hub;
use crate::test_utils::{RecordingRunner, StaticAccounts};

async fn river_client(dir: &TempDir) -> Client {
    let config = hub::config(hub::username_file(dir, Some("river\n")));
    let state = hub::state(
        &config,
        StaticAccounts::new().with_user("river"),
        Arc::new(RecordingRunner::succeeding()),
    );
    Client::tracked(hub_rocket(state))
        .await
        .expect("valid rocket instance")
}

#[rocket::async_test]
async fn home_without_cookie_redirects_to_login() {
    let dir = TempDir::new().unwrap();
    let client = river_client(&dir).await;

    let response = client.get("/hub/home").dispatch().await;

    assert_eq!(response.status(), Status::SeeOther);
    assert_eq!(response.headers().get_one("Location"), Some("/hub/login"));
}

#[rocket::async_test]
async fn home_greets_logged_in_user() {
    let dir = TempDir::new().unwrap();
    let client = river_client(&dir).await;

    client.get("/hub/login").dispatch().await;
    let response = client.get("/hub/home").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    let body = response.into_string().await.unwrap();
    assert!(body.contains("Welcome, river"));
    assert!(body.contains("Log out"));
    assert!(body.contains("logout"));
}

#[rocket::async_test]
async fn home_rejects_forged_cookie() {
    let dir = TempDir::new().unwrap();
    let client = river_client(&dir).await;

    let response = client
        .get("/hub/home")
        .cookie(Cookie::new("hubauth-session", "not-a-token"))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::SeeOther);
    assert_eq!(response.headers().get_one("Location"), Some("/hub/login"));
}

#[rocket::async_test]
async fn logout_clears_cookie_and_returns_to_login() {
    let dir = TempDir::new().unwrap();
    let client = river_client(&dir).await;

    client.get("/hub/login").dispatch().await;
    let response = client.get("/hub/logout").dispatch().await;

    assert_eq!(response.status(), Status::SeeOther);
    assert_eq!(response.headers().get_one("Location"), Some("/hub/login"));
    let removal = response
        .headers()
        .get("Set-Cookie")
        .find(|header| header.starts_with("hubauth-session="))
        .expect("removal cookie sent");
    assert!(removal.starts_with("hubauth-session=;"));
    assert!(removal.contains("Max-Age=0"));
}

#[rocket::async_test]
async fn root_redirects_to_home() {
    let dir = TempDir::new().unwrap();
    let client = river_client(&dir).await;

    let response = client.get("/").dispatch().await;

    assert_eq!(response.status(), Status::SeeOther);
    assert_eq!(response.headers().get_one("Location"), Some("/hub/home"));
}
