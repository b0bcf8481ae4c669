//! User registry tests

use hubauth_domain::error::Error;
use hubauth_domain::ports::Authenticator;
use hubauth_infrastructure::auth::AutoLoginAuthenticator;
use hubauth_server::UserRegistry;
use std::sync::Arc;

use crate::test_utils::{RecordingRunner, StaticAccounts, hub};

fn auto_login(whitelist: &[&str]) -> Arc<dyn Authenticator> {
    Arc::new(AutoLoginAuthenticator::new(
        whitelist.iter().map(|name| (*name).to_string()),
    ))
}

#[tokio::test]
async fn creates_record_once() {
    let registry = UserRegistry::new(auto_login(&[]), false);

    let first = registry.user_from_username("river").await.unwrap();
    let second = registry.user_from_username("river").await.unwrap();

    assert_eq!(first.name, "river");
    assert_eq!(first.created_at, second.created_at);
    assert_eq!(registry.len(), 1);
}

#[tokio::test]
async fn failed_hook_stores_nothing() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = hub::config(hub::username_file(&dir, None));
    let authenticator = hub::local_authenticator(
        &config,
        StaticAccounts::new(),
        Arc::new(RecordingRunner::succeeding()),
    );
    let registry = UserRegistry::new(authenticator, false);

    let err = registry.user_from_username("river").await.unwrap_err();

    assert!(matches!(err, Error::UserNotFound { .. }));
    assert!(registry.is_empty());
}

#[tokio::test]
async fn allow_list_only_gates_when_enforced() {
    let lenient = UserRegistry::new(auto_login(&["alice"]), false);
    assert!(lenient.user_from_username("mallory").await.is_ok());

    let strict = UserRegistry::new(auto_login(&["alice"]), true);
    let err = strict.user_from_username("mallory").await.unwrap_err();
    assert!(matches!(err, Error::NotAllowed { .. }));
    assert!(strict.user_from_username("alice").await.is_ok());
}

#[tokio::test]
async fn provisions_whitelisted_users() {
    let registry = UserRegistry::new(auto_login(&["alice", "bob"]), true);

    assert_eq!(registry.provision_whitelisted().await, 2);
    assert!(registry.get("alice").is_some());
    assert!(registry.get("bob").is_some());
    assert_eq!(registry.provision_whitelisted().await, 0);
}

#[tokio::test]
async fn provisioning_skips_failures() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut config = hub::config(hub::username_file(&dir, None));
    config.auth.whitelist.insert("alice".to_string());
    config.auth.whitelist.insert("ghost".to_string());
    let authenticator = hub::local_authenticator(
        &config,
        StaticAccounts::new().with_user("alice"),
        Arc::new(RecordingRunner::succeeding()),
    );
    let registry = UserRegistry::new(authenticator, false);

    assert_eq!(registry.provision_whitelisted().await, 1);
    assert!(registry.get("alice").is_some());
    assert!(registry.get("ghost").is_none());
}
