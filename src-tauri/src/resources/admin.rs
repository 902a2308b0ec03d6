//! Super-admin account management commands.
//!
//! The backend enforces the super-admin gate on every endpoint here; the
//! router additionally keeps non-admins off the admin screens.

use tauri::State;

use crate::models::{AccountCreate, AccountSummary};
use crate::AppState;

#[tauri::command]
pub async fn list_accounts(state: State<'_, AppState>) -> Result<Vec<AccountSummary>, String> {
    state
        .api
        .get("/api/admin/users")
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn create_account(
    state: State<'_, AppState>,
    data: AccountCreate,
) -> Result<AccountSummary, String> {
    let account: AccountSummary = state
        .api
        .post("/api/admin/users", &data)
        .await
        .map_err(|e| e.to_string())?;

    log::info!("Created {} account {}", account.user_type, account.email);
    Ok(account)
}

/// Set an account's status to `active`, `inactive` or `suspended`. The
/// backend rejects changing one's own status.
#[tauri::command]
pub async fn set_account_status(
    state: State<'_, AppState>,
    user_id: String,
    status: String,
) -> Result<(), String> {
    let _: serde_json::Value = state
        .api
        .patch(
            &format!("/api/admin/users/{user_id}/status"),
            &serde_json::json!({ "status": status }),
        )
        .await
        .map_err(|e| e.to_string())?;

    log::info!("Set account {user_id} status to {status}");
    Ok(())
}

#[tauri::command]
pub async fn delete_account(state: State<'_, AppState>, user_id: String) -> Result<(), String> {
    state
        .api
        .delete(&format!("/api/admin/users/{user_id}"))
        .await
        .map_err(|e| e.to_string())?;

    log::info!("Deleted account {user_id}");
    Ok(())
}
