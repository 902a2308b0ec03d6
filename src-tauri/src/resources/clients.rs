//! Client profile and roster commands.
//!
//! The coach-client roster is edited through the add/remove pair; the
//! backend decides who may see which clients.

use tauri::State;
use uuid::Uuid;

use crate::cache::QueryKey;
use crate::models::{ClientProfile, ClientProfileUpdate};
use crate::AppState;

#[tauri::command]
pub async fn get_my_client_profile(state: State<'_, AppState>) -> Result<ClientProfile, String> {
    state
        .api
        .get("/api/clients/me")
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn list_clients(state: State<'_, AppState>) -> Result<Vec<ClientProfile>, String> {
    if let Some(clients) = state.cache.get(QueryKey::Clients) {
        return Ok(clients);
    }

    let clients: Vec<ClientProfile> = state
        .api
        .get("/api/clients")
        .await
        .map_err(|e| e.to_string())?;

    state.cache.put(QueryKey::Clients, &clients);
    Ok(clients)
}

#[tauri::command]
pub async fn get_client(
    state: State<'_, AppState>,
    client_id: Uuid,
) -> Result<ClientProfile, String> {
    state
        .api
        .get(&format!("/api/clients/{client_id}"))
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn update_client(
    state: State<'_, AppState>,
    client_id: Uuid,
    data: ClientProfileUpdate,
) -> Result<ClientProfile, String> {
    let client: ClientProfile = state
        .api
        .put(&format!("/api/clients/{client_id}"), &data)
        .await
        .map_err(|e| e.to_string())?;

    state.cache.invalidate(QueryKey::Clients);
    Ok(client)
}

/// Put a client on a coach's roster.
#[tauri::command]
pub async fn assign_coach(
    state: State<'_, AppState>,
    client_id: Uuid,
    coach_id: Uuid,
) -> Result<(), String> {
    let _: serde_json::Value = state
        .api
        .post_empty(&format!("/api/clients/{client_id}/coaches/{coach_id}"))
        .await
        .map_err(|e| e.to_string())?;

    log::info!("Assigned coach {coach_id} to client {client_id}");
    state.cache.invalidate(QueryKey::Clients);
    Ok(())
}

#[tauri::command]
pub async fn unassign_coach(
    state: State<'_, AppState>,
    client_id: Uuid,
    coach_id: Uuid,
) -> Result<(), String> {
    state
        .api
        .delete(&format!("/api/clients/{client_id}/coaches/{coach_id}"))
        .await
        .map_err(|e| e.to_string())?;

    log::info!("Removed coach {coach_id} from client {client_id}");
    state.cache.invalidate(QueryKey::Clients);
    Ok(())
}
