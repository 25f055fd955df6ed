//! Integration tests for the session lifecycle.
//!
//! anonymous -> authenticating -> authenticated -> anonymous

mod common;

use std::sync::Arc;
use std::time::Duration;

use content_factory::adapters::MockDataService;
use content_factory::error::ErrorCategory;
use content_factory::models::{SESSION_DEPARTMENT, SESSION_NAME, SESSION_ROLE};
use content_factory::state::{AuthPhase, AuthStore};

#[tokio::test]
async fn test_login_accepts_any_credentials() {
    let store = AuthStore::new(Arc::new(common::instant_service()));

    for (email, password) in [("editor@gov.cn", "secret"), ("", ""), ("not-an-email", "x")] {
        store.login(email, password).await.unwrap();
        let state = store.snapshot();
        assert_eq!(state.phase(), AuthPhase::Authenticated);
        let user = state.user.unwrap();
        assert_eq!(user.email, email);
        assert_eq!(user.name, SESSION_NAME);
        assert_eq!(user.role, SESSION_ROLE);
        assert_eq!(user.department, SESSION_DEPARTMENT);
    }
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let store = AuthStore::new(Arc::new(common::instant_service()));
    store.login("a@b.c", "x").await.unwrap();

    store.logout().await;
    let once = store.snapshot();
    store.logout().await;

    assert_eq!(once.phase(), AuthPhase::Anonymous);
    assert_eq!(store.snapshot(), once);
}

#[tokio::test]
async fn test_logout_ends_service_session() {
    let service = common::instant_service();
    let store = AuthStore::new(Arc::new(service.clone()));
    store.login("a@b.c", "x").await.unwrap();
    assert!(service.session().await.is_some());

    store.logout().await;
    assert!(service.session().await.is_none());

    // Nothing to restore afterwards
    store.check_auth().await;
    assert_eq!(store.snapshot().phase(), AuthPhase::Anonymous);
}

#[tokio::test]
async fn test_configured_failure_leaves_store_anonymous() {
    let service = common::instant_service();
    service.set_auth_should_fail(true);
    let store = AuthStore::new(Arc::new(service));

    let err = store.login("a@b.c", "x").await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Service);
    assert!(err.is_retryable());
    let state = store.snapshot();
    assert_eq!(state.phase(), AuthPhase::Anonymous);
    assert!(!state.is_loading);
}

#[tokio::test(start_paused = true)]
async fn test_authenticating_phase_is_observable() {
    let store = AuthStore::new(Arc::new(
        MockDataService::without_session().with_latency(Duration::from_millis(500)),
    ));
    let mut rx = store.subscribe();

    let login = store.login("a@b.c", "x");
    tokio::pin!(login);

    assert!(tokio::time::timeout(Duration::from_millis(10), &mut login)
        .await
        .is_err());
    assert_eq!(rx.borrow_and_update().phase(), AuthPhase::Authenticating);

    login.await.unwrap();
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().phase(), AuthPhase::Authenticated);
}
