//! Coach profile commands.

use tauri::State;
use uuid::Uuid;

use crate::cache::QueryKey;
use crate::models::{CoachProfile, CoachProfileUpdate};
use crate::AppState;

#[tauri::command]
pub async fn get_my_coach_profile(state: State<'_, AppState>) -> Result<CoachProfile, String> {
    state
        .api
        .get("/api/coaches/me")
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn list_coaches(state: State<'_, AppState>) -> Result<Vec<CoachProfile>, String> {
    if let Some(coaches) = state.cache.get(QueryKey::Coaches) {
        return Ok(coaches);
    }

    let coaches: Vec<CoachProfile> = state
        .api
        .get("/api/coaches")
        .await
        .map_err(|e| e.to_string())?;

    state.cache.put(QueryKey::Coaches, &coaches);
    Ok(coaches)
}

#[tauri::command]
pub async fn get_coach(
    state: State<'_, AppState>,
    coach_id: Uuid,
) -> Result<CoachProfile, String> {
    state
        .api
        .get(&format!("/api/coaches/{coach_id}"))
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn update_coach(
    state: State<'_, AppState>,
    coach_id: Uuid,
    data: CoachProfileUpdate,
) -> Result<CoachProfile, String> {
    let coach: CoachProfile = state
        .api
        .put(&format!("/api/coaches/{coach_id}"), &data)
        .await
        .map_err(|e| e.to_string())?;

    state.cache.invalidate(QueryKey::Coaches);
    Ok(coach)
}
