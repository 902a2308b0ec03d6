//! Auth commands: login, registration, logout and session restore.

use serde::Deserialize;
use tauri::State;
use uuid::Uuid;

use crate::session::{
    ClientRegisterRequest, CoachRegisterRequest, CurrentUser, LoginRequest, RegisterRequest,
    StoredSession, TokenResponse,
};
use crate::AppState;

/// Body of `GET /api/auth/verify`.
#[derive(Debug, Deserialize)]
struct VerifyResponse {
    user_id: Uuid,
    email: String,
}

fn store_session(
    state: &AppState,
    token: TokenResponse,
    email: String,
) -> Result<CurrentUser, String> {
    let user = CurrentUser {
        user_id: token.user_id,
        email,
        user_type: token.user_type,
        super_admin: token.role == "super_admin",
    };
    state
        .session
        .set(StoredSession {
            access_token: token.access_token,
            user: user.clone(),
        })
        .map_err(|e| e.to_string())?;
    Ok(user)
}

#[tauri::command]
pub async fn login(
    state: State<'_, AppState>,
    email: String,
    password: String,
) -> Result<CurrentUser, String> {
    let token: TokenResponse = state
        .api
        .post(
            "/api/auth/login",
            &LoginRequest {
                email: email.clone(),
                password,
            },
        )
        .await
        .map_err(|e| e.to_string())?;

    log::info!("Logged in as {} ({:?})", email, token.user_type);
    store_session(&state, token, email)
}

#[tauri::command]
pub async fn register(
    state: State<'_, AppState>,
    data: RegisterRequest,
) -> Result<CurrentUser, String> {
    let email = data.email.clone();
    let token: TokenResponse = state
        .api
        .post("/api/auth/register", &data)
        .await
        .map_err(|e| e.to_string())?;

    log::info!("Registered new {:?} account for {email}", token.user_type);
    store_session(&state, token, email)
}

#[tauri::command]
pub async fn register_client(
    state: State<'_, AppState>,
    data: ClientRegisterRequest,
) -> Result<CurrentUser, String> {
    let email = data.email.clone();
    let token: TokenResponse = state
        .api
        .post("/api/auth/register/client", &data)
        .await
        .map_err(|e| e.to_string())?;

    log::info!("Registered new client account for {email}");
    store_session(&state, token, email)
}

/// Coach self-registration, gated by an invitation code the backend checks.
#[tauri::command]
pub async fn register_coach(
    state: State<'_, AppState>,
    data: CoachRegisterRequest,
) -> Result<CurrentUser, String> {
    let email = data.email.clone();
    let token: TokenResponse = state
        .api
        .post("/api/auth/register/coach", &data)
        .await
        .map_err(|e| e.to_string())?;

    log::info!("Registered new coach account for {email}");
    store_session(&state, token, email)
}

/// Clears the session and the query cache. Never fails, even when no one
/// is signed in.
#[tauri::command]
pub fn logout(state: State<'_, AppState>) -> Result<(), String> {
    state.session.clear();
    state.cache.clear();
    log::info!("Logged out");
    Ok(())
}

/// Restore the persisted session on startup. The stored token is checked
/// against the backend; a stale one drops the session and returns `None`
/// so the UI lands on the login route.
#[tauri::command]
pub async fn restore_session(
    state: State<'_, AppState>,
) -> Result<Option<CurrentUser>, String> {
    let Some(user) = state.session.current() else {
        return Ok(None);
    };

    match state.api.get::<VerifyResponse>("/api/auth/verify").await {
        Ok(verified) => {
            if verified.user_id != user.user_id || verified.email != user.email {
                log::warn!("Stored session does not match the verified account, dropping it");
                state.session.clear();
                return Ok(None);
            }
            Ok(Some(user))
        }
        Err(err) => {
            log::info!("Stored session failed verification: {err}");
            state.session.clear();
            Ok(None)
        }
    }
}

#[tauri::command]
pub fn current_user(state: State<'_, AppState>) -> Result<Option<CurrentUser>, String> {
    Ok(state.session.current())
}
