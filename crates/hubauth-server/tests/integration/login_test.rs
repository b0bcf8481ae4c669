//! Auto-login route tests
//!
//! Drive `GET /hub/login` through a local Rocket client with fake OS ports.

use hubauth_server::{HubState, hub_rocket};
use rocket::http::Status;
use rocket::local::asynchronous::Client;
use std::sync::Arc;
use tempfile::TempDir;

use crate::test_utils::hub;
use crate::test_utils::{RecordingRunner, StaticAccounts};

async fn client_for(state: HubState) -> Client {
    Client::tracked(hub_rocket(state))
        .await
        .expect("valid rocket instance")
}

fn registry_has(client: &Client, name: &str) -> bool {
    client
        .rocket()
        .state::<HubState>()
        .expect("hub state managed")
        .registry
        .get(name)
        .is_some()
}

#[rocket::async_test]
async fn login_redirects_home_with_cookie() {
    let dir = TempDir::new().unwrap();
    let config = hub::config(hub::username_file(&dir, Some("river\n")));
    let runner = Arc::new(RecordingRunner::succeeding());
    let state = hub::state(&config, StaticAccounts::new().with_user("river"), runner.clone());
    let client = client_for(state).await;

    let response = client.get("/hub/login").dispatch().await;

    assert_eq!(response.status(), Status::SeeOther);
    assert_eq!(response.headers().get_one("Location"), Some("/hub/home"));
    let cookie = response
        .cookies()
        .get("hubauth-session")
        .expect("login cookie set");
    let username = client
        .rocket()
        .state::<HubState>()
        .unwrap()
        .cookies
        .username_from(cookie.value())
        .unwrap();
    assert_eq!(username, "river");
    assert!(registry_has(&client, "river"));
    assert!(runner.calls().is_empty());
}

#[rocket::async_test]
async fn missing_username_file_is_server_error() {
    let dir = TempDir::new().unwrap();
    let config = hub::config(hub::username_file(&dir, None));
    let state = hub::state(
        &config,
        StaticAccounts::new(),
        Arc::new(RecordingRunner::succeeding()),
    );
    let client = client_for(state).await;

    let response = client.get("/hub/login").dispatch().await;

    assert_eq!(response.status(), Status::InternalServerError);
    assert!(response.cookies().get("hubauth-session").is_none());
}

#[rocket::async_test]
async fn unknown_account_without_creation_is_forbidden() {
    let dir = TempDir::new().unwrap();
    let config = hub::config(hub::username_file(&dir, Some("river\n")));
    let runner = Arc::new(RecordingRunner::succeeding());
    let state = hub::state(&config, StaticAccounts::new(), runner.clone());
    let client = client_for(state).await;

    let response = client.get("/hub/login").dispatch().await;

    assert_eq!(response.status(), Status::Forbidden);
    assert!(!registry_has(&client, "river"));
    assert!(runner.calls().is_empty());
}

#[rocket::async_test]
async fn first_login_creates_account_once() {
    let dir = TempDir::new().unwrap();
    let mut config = hub::config(hub::username_file(&dir, Some("river\n")));
    config.auth.create_system_users = true;
    let runner = Arc::new(RecordingRunner::succeeding());
    let state = hub::state(&config, StaticAccounts::new(), runner.clone());
    let client = client_for(state).await;

    let first = client.get("/hub/login").dispatch().await;
    assert_eq!(first.status(), Status::SeeOther);
    let second = client.get("/hub/login").dispatch().await;
    assert_eq!(second.status(), Status::SeeOther);

    assert_eq!(
        runner.calls(),
        vec![vec![
            "adduser".to_string(),
            "-q".to_string(),
            "--gecos".to_string(),
            "\"\"".to_string(),
            "--disabled-password".to_string(),
            "river".to_string(),
        ]]
    );
    assert!(registry_has(&client, "river"));
}

#[rocket::async_test]
async fn failed_account_creation_is_server_error() {
    let dir = TempDir::new().unwrap();
    let mut config = hub::config(hub::username_file(&dir, Some("river\n")));
    config.auth.create_system_users = true;
    let runner = Arc::new(RecordingRunner::exiting_with(1, "useradd: user exists"));
    let state = hub::state(&config, StaticAccounts::new(), runner.clone());
    let client = client_for(state).await;

    let response = client.get("/hub/login").dispatch().await;

    assert_eq!(response.status(), Status::InternalServerError);
    assert_eq!(runner.calls().len(), 1);
    assert!(!registry_has(&client, "river"));
}

#[rocket::async_test]
async fn username_file_is_read_on_every_request() {
    let dir = TempDir::new().unwrap();
    let path = hub::username_file(&dir, Some("alice\n"));
    let config = hub::config(path.clone());
    let accounts = StaticAccounts::new().with_user("alice").with_user("bob");
    let state = hub::state(&config, accounts, Arc::new(RecordingRunner::succeeding()));
    let client = client_for(state).await;

    let response = client.get("/hub/login").dispatch().await;
    assert_eq!(response.status(), Status::SeeOther);

    std::fs::write(&path, "bob\n").unwrap();
    let response = client.get("/hub/login").dispatch().await;
    assert_eq!(response.status(), Status::SeeOther);

    assert!(registry_has(&client, "alice"));
    assert!(registry_has(&client, "bob"));
    let body = client
        .get("/hub/home")
        .dispatch()
        .await
        .into_string()
        .await
        .unwrap();
    assert!(body.contains("Welcome, bob"));
}

#[rocket::async_test]
async fn enforced_group_allow_list_refuses_non_members() {
    let dir = TempDir::new().unwrap();
    let mut config = hub::config(hub::username_file(&dir, Some("carol\n")));
    config.hub.enforce_allow_list = true;
    config.auth.group_whitelist.insert("staff".to_string());
    let accounts = StaticAccounts::new()
        .with_user("carol")
        .with_group("staff", &["alice", "bob"]);
    let state = hub::state(&config, accounts, Arc::new(RecordingRunner::succeeding()));
    let client = client_for(state).await;

    let response = client.get("/hub/login").dispatch().await;

    assert_eq!(response.status(), Status::Forbidden);
    assert!(!registry_has(&client, "carol"));
}

#[rocket::async_test]
async fn login_route_follows_base_url() {
    let dir = TempDir::new().unwrap();
    let mut config = hub::config(hub::username_file(&dir, Some("river")));
    config.hub.base_url = "/jupyter/".to_string();
    let state = hub::state(
        &config,
        StaticAccounts::new().with_user("river"),
        Arc::new(RecordingRunner::succeeding()),
    );
    let client = client_for(state).await;

    let response = client.get("/jupyter/login").dispatch().await;

    assert_eq!(response.status(), Status::SeeOther);
    assert_eq!(response.headers().get_one("Location"), Some("/jupyter/home"));
    assert_eq!(
        client.get("/hub/login").dispatch().await.status(),
        Status::NotFound
    );
}
