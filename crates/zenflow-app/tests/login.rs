mod support;

use rstest::rstest;
use serde_json::json;
use support::{FakeBackend, Reply, session, user, user_client, user_json};
use zenflow_api::{ApiError, Method};
use zenflow_app::controllers::LoginController;
use zenflow_app::error::AppError;
use zenflow_app::navigation::{AuthState, Route};
use zenflow_app::session::SessionContext;
use zenflow_storage::error::StorageError;
use zenflow_storage::{KeyValueStore, MemoryStore, SessionStore};

#[tokio::test]
async fn regular_login_saves_session_and_opens_home() {
    let backend = FakeBackend::new([Reply::Json(200, user_json(7, false))]);
    let (mut ctx, memory) = session(None);
    let login = LoginController::new(user_client(&backend));

    let route = login.login(&mut ctx, " ana@zenflow.app ", "secret").await.unwrap();

    assert_eq!(route, Route::Home);
    assert_eq!(ctx.auth_state(), AuthState::AuthenticatedUser);
    assert_eq!(memory.len(), 2);

    let sent = backend.requests();
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].path, "Usuario/login");
    assert_eq!(
        sent[0].body,
        Some(json!({"email": "ana@zenflow.app", "senha": "secret"}))
    );
}

#[tokio::test]
async fn manager_account_is_turned_away_from_regular_login() {
    let backend = FakeBackend::new([Reply::Json(200, user_json(1, true))]);
    let (mut ctx, memory) = session(None);
    let login = LoginController::new(user_client(&backend));

    let err = login.login(&mut ctx, "boss@zenflow.app", "secret").await.unwrap_err();

    assert!(matches!(err, AppError::ManagerAccount));
    assert!(memory.is_empty());
    assert_eq!(ctx.auth_state(), AuthState::Unauthenticated);
}

#[tokio::test]
async fn manager_login_opens_dashboard() {
    let backend = FakeBackend::new([Reply::Json(200, user_json(1, true))]);
    let (mut ctx, _memory) = session(None);
    let login = LoginController::new(user_client(&backend));

    let route = login
        .manager_login(&mut ctx, "boss@zenflow.app", "secret")
        .await
        .unwrap();

    assert_eq!(route, Route::ManagerDashboard);
    assert_eq!(ctx.auth_state(), AuthState::AuthenticatedManager);
    assert!(ctx.require_manager().is_ok());
}

#[tokio::test]
async fn regular_account_is_turned_away_from_manager_login() {
    let backend = FakeBackend::new([Reply::Json(200, user_json(7, false))]);
    let (mut ctx, memory) = session(None);
    let login = LoginController::new(user_client(&backend));

    let err = login
        .manager_login(&mut ctx, "ana@zenflow.app", "secret")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotManager));
    assert!(memory.is_empty());
}

#[rstest]
#[case("", "secret")]
#[case("   ", "secret")]
#[case("ana@zenflow.app", "")]
#[tokio::test]
async fn blank_credentials_never_reach_the_server(#[case] email: &str, #[case] password: &str) {
    let backend = FakeBackend::silent();
    let (mut ctx, _memory) = session(None);
    let login = LoginController::new(user_client(&backend));

    let err = login.login(&mut ctx, email, password).await.unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(backend.calls(), 0);
}

#[tokio::test]
async fn rejected_credentials_surface_the_server_message() {
    let backend = FakeBackend::new([Reply::Json(
        401,
        json!({"message": "Email ou senha inválidos"}),
    )]);
    let (mut ctx, memory) = session(None);
    let login = LoginController::new(user_client(&backend));

    let err = login.login(&mut ctx, "ana@zenflow.app", "wrong").await.unwrap_err();

    assert!(matches!(
        err,
        AppError::Api(ApiError::ServerRejection { status: 401, .. })
    ));
    assert_eq!(err.to_string(), "Email ou senha inválidos");
    assert!(memory.is_empty());
}

#[tokio::test]
async fn closed_login_screen_does_not_sign_in() {
    let backend = FakeBackend::new([Reply::Hang]);
    let (mut ctx, memory) = session(None);
    let login = LoginController::new(user_client(&backend));
    let handle = login.scope();
    tokio::spawn(async move {
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        handle.close();
    });

    let err = login.login(&mut ctx, "ana@zenflow.app", "secret").await.unwrap_err();

    assert!(matches!(err, AppError::Cancelled));
    assert!(memory.is_empty());
    assert!(ctx.user().is_none());
}

#[test]
fn stored_session_decides_the_start_route() {
    let (anonymous, _) = session(None);
    let (regular, _) = session(Some(&user(7, false)));
    let (manager, _) = session(Some(&user(1, true)));

    assert_eq!(anonymous.start_route(), Route::Login);
    assert_eq!(regular.start_route(), Route::Home);
    assert_eq!(manager.start_route(), Route::ManagerDashboard);
}

#[test]
fn logout_clears_session_and_returns_to_login() {
    let (mut ctx, memory) = session(Some(&user(7, false)));

    assert_eq!(ctx.logout(), Route::Login);

    assert!(memory.is_empty());
    assert_eq!(ctx.auth_state(), AuthState::Unauthenticated);
    assert!(matches!(ctx.require_user(), Err(AppError::Unauthorized)));
}

/// Reads and writes work; removals always fail.
struct StickyStore(MemoryStore);

impl KeyValueStore for StickyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.0.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Err(StorageError::Remove {
            key: key.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}

#[test]
fn logout_reaches_login_even_when_clearing_fails() {
    let store = SessionStore::new(std::sync::Arc::new(StickyStore(MemoryStore::new())));
    store.save(&user(7, false)).unwrap();
    let mut ctx = SessionContext::init(store);

    assert_eq!(ctx.logout(), Route::Login);
    assert_eq!(ctx.auth_state(), AuthState::Unauthenticated);
}
