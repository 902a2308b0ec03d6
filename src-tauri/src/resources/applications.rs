//! Job application tracking commands.

use tauri::State;
use uuid::Uuid;

use crate::cache::QueryKey;
use crate::models::{Application, ApplicationCreate, ApplicationHistory, ApplicationUpdate};
use crate::AppState;

#[tauri::command]
pub async fn list_applications(state: State<'_, AppState>) -> Result<Vec<Application>, String> {
    if let Some(applications) = state.cache.get(QueryKey::Applications) {
        return Ok(applications);
    }

    let applications: Vec<Application> = state
        .api
        .get("/api/applications")
        .await
        .map_err(|e| e.to_string())?;

    state.cache.put(QueryKey::Applications, &applications);
    Ok(applications)
}

#[tauri::command]
pub async fn get_application(
    state: State<'_, AppState>,
    application_id: Uuid,
) -> Result<Application, String> {
    state
        .api
        .get(&format!("/api/applications/{application_id}"))
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn create_application(
    state: State<'_, AppState>,
    data: ApplicationCreate,
) -> Result<Application, String> {
    let application: Application = state
        .api
        .post("/api/applications", &data)
        .await
        .map_err(|e| e.to_string())?;

    log::info!("Created application for {}", application.company_name);
    state.cache.invalidate(QueryKey::Applications);
    Ok(application)
}

#[tauri::command]
pub async fn update_application(
    state: State<'_, AppState>,
    application_id: Uuid,
    data: ApplicationUpdate,
) -> Result<Application, String> {
    let application: Application = state
        .api
        .put(&format!("/api/applications/{application_id}"), &data)
        .await
        .map_err(|e| e.to_string())?;

    state.cache.invalidate(QueryKey::Applications);
    Ok(application)
}

#[tauri::command]
pub async fn delete_application(
    state: State<'_, AppState>,
    application_id: Uuid,
) -> Result<(), String> {
    state
        .api
        .delete(&format!("/api/applications/{application_id}"))
        .await
        .map_err(|e| e.to_string())?;

    state.cache.invalidate(QueryKey::Applications);
    Ok(())
}

/// Field-level change log for one application.
#[tauri::command]
pub async fn get_application_history(
    state: State<'_, AppState>,
    application_id: Uuid,
) -> Result<Vec<ApplicationHistory>, String> {
    state
        .api
        .get(&format!("/api/applications/history/{application_id}"))
        .await
        .map_err(|e| e.to_string())
}
