//! Session initialize/login/logout and auth-failure handling

mod support;

use std::sync::Arc;

use support::{FakeApi, MemoryTokenStore};
use tasktime_core::views::{LoginForm, RegisterForm};
use tasktime_core::{Session, SessionState};
use tasktime_domain::TaskTimeError;

fn session(api: FakeApi, store: &Arc<MemoryTokenStore>) -> (Session, Arc<FakeApi>) {
    let api = Arc::new(api);
    (Session::new(api.clone(), store.clone()), api)
}

#[tokio::test]
async fn starts_loading_and_resolves_anonymous_without_token() {
    let store = Arc::new(MemoryTokenStore::default());
    let (mut session, api) = session(FakeApi::new(), &store);
    assert_eq!(session.state(), &SessionState::Loading);

    assert_eq!(session.initialize().await, &SessionState::Anonymous);
    assert_eq!(api.call_count("current_user"), 0);
}

#[tokio::test]
async fn rehydrates_user_from_persisted_token() {
    let store = Arc::new(MemoryTokenStore::with_token("persisted"));
    let (mut session, _api) = session(FakeApi::new().with_user(), &store);

    session.initialize().await;
    assert_eq!(session.user(), Some(&FakeApi::user()));
    assert_eq!(store.token().as_deref(), Some("persisted"));
}

#[tokio::test]
async fn rejected_token_is_cleared() {
    let store = Arc::new(MemoryTokenStore::with_token("expired"));
    let (mut session, _api) = session(FakeApi::new(), &store);

    assert_eq!(session.initialize().await, &SessionState::Anonymous);
    assert_eq!(store.token(), None);
}

#[tokio::test]
async fn login_persists_token_and_logout_clears_it() {
    let store = Arc::new(MemoryTokenStore::default());
    let (mut session, _api) = session(FakeApi::new(), &store);
    session.initialize().await;

    let credentials = LoginForm::new("ada", "secret").credentials().unwrap();
    let user = session.login(&credentials).await.unwrap();
    assert_eq!(user.username, "ada");
    assert_eq!(store.token().as_deref(), Some("fresh-token"));

    session.logout().unwrap();
    assert_eq!(session.state(), &SessionState::Anonymous);
    assert_eq!(store.token(), None);
}

#[tokio::test]
async fn failed_login_leaves_session_anonymous() {
    let store = Arc::new(MemoryTokenStore::default());
    let (mut session, _api) = session(FakeApi::new(), &store);
    session.initialize().await;

    let credentials = LoginForm::new("ada", "wrong").credentials().unwrap();
    let err = session.login(&credentials).await.unwrap_err();
    assert_eq!(err.user_message(), "Invalid username or password");
    assert!(!session.is_authenticated());
    assert_eq!(store.token(), None);
}

#[tokio::test]
async fn register_signs_in() {
    let store = Arc::new(MemoryTokenStore::default());
    let (mut session, _api) = session(FakeApi::new(), &store);

    let registration =
        RegisterForm::new("grace", "grace@example.com", "hopper1").registration().unwrap();
    session.register(&registration).await.unwrap();
    assert_eq!(session.user().map(|u| u.username.as_str()), Some("grace"));
    assert_eq!(store.token().as_deref(), Some("registered-token"));
}

#[tokio::test]
async fn observed_auth_failure_ends_session() {
    let store = Arc::new(MemoryTokenStore::with_token("persisted"));
    let (mut session, _api) = session(FakeApi::new().with_user(), &store);
    session.initialize().await;
    assert!(session.is_authenticated());

    let remote: Result<(), _> =
        Err(TaskTimeError::Remote { status: 400, message: "Bad request".into() });
    assert!(session.observe(remote).is_err());
    assert!(session.is_authenticated());

    let auth: Result<(), _> = Err(TaskTimeError::Auth("Could not validate credentials".into()));
    assert!(session.observe(auth).is_err());
    assert_eq!(session.state(), &SessionState::Anonymous);
    assert_eq!(store.token(), None);
}

#[tokio::test]
async fn token_write_failure_fails_login() {
    let store = Arc::new(MemoryTokenStore::default());
    store.fail_writes();
    let (mut session, _api) = session(FakeApi::new(), &store);

    let credentials = LoginForm::new("ada", "secret").credentials().unwrap();
    let err = session.login(&credentials).await.unwrap_err();
    assert!(matches!(err, TaskTimeError::Storage(_)));
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn rejected_login_keeps_persisted_token() {
    let store = Arc::new(MemoryTokenStore::with_token("persisted"));
    let (mut session, api) = session(FakeApi::new(), &store);
    api.fail_next("login", TaskTimeError::Auth("Invalid username or password".into()));

    let credentials = LoginForm::new("ada", "wrong").credentials().unwrap();
    let result = session.login(&credentials).await.map(|_| ());
    assert!(session.observe(result).is_err());

    assert_eq!(session.state(), &SessionState::Loading);
    assert_eq!(store.token().as_deref(), Some("persisted"));
}
