mod api;
mod booking;
mod cache;
mod models;
mod resources;
mod routing;
mod session;

use api::ApiClient;
use booking::commands::{
    approve_appointment, book_slot_group, cancel_appointment, get_appointment,
    list_appointments, list_my_availability, list_open_slots, publish_availability,
    reject_appointment, request_appointment, withdraw_availability,
};
use cache::QueryCache;
use resources::admin::{create_account, delete_account, list_accounts, set_account_status};
use resources::applications::{
    create_application, delete_application, get_application, get_application_history,
    list_applications, update_application,
};
use resources::clients::{
    assign_coach, get_client, get_my_client_profile, list_clients, unassign_coach, update_client,
};
use resources::coaches::{get_coach, get_my_coach_profile, list_coaches, update_coach};
use resources::resumes::{
    add_review_comment, apply_review, complete_review, create_resume, delete_resume, get_resume,
    list_client_resumes, list_my_resumes, list_pending_resumes, list_resume_reviews,
    start_review, submit_resume, update_resume,
};
use routing::resolve_route;
use session::commands::{
    current_user, login, logout, register, register_client, register_coach, restore_session,
};
use session::SessionStore;
use tauri::{Emitter, Manager};

pub(crate) struct AppState {
    pub(crate) api: ApiClient,
    pub(crate) session: SessionStore,
    pub(crate) cache: QueryCache,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("CoachDesk starting up...");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let result = (|| -> anyhow::Result<()> {
                let app_data_dir = app
                    .path()
                    .app_data_dir()
                    .map_err(|err| anyhow::anyhow!(err))?;
                std::fs::create_dir_all(&app_data_dir)?;

                let session_path = app_data_dir.join("session.json");
                let session = SessionStore::load(session_path);
                if session.is_authenticated() {
                    log::info!("Found a persisted session, will verify on first use");
                }

                let handle = app.handle().clone();
                let api = ApiClient::new(session.clone(), move || {
                    if let Err(err) = handle.emit(api::SESSION_EXPIRED_EVENT, ()) {
                        log::warn!("Failed to emit {}: {err}", api::SESSION_EXPIRED_EVENT);
                    }
                });

                app.manage(AppState {
                    api,
                    session,
                    cache: QueryCache::new(),
                });

                Ok(())
            })();

            result.map_err(|err| err.into())
        })
        .invoke_handler(tauri::generate_handler![
            login,
            register,
            register_client,
            register_coach,
            logout,
            restore_session,
            current_user,
            resolve_route,
            list_open_slots,
            list_appointments,
            get_appointment,
            request_appointment,
            book_slot_group,
            approve_appointment,
            reject_appointment,
            cancel_appointment,
            list_my_availability,
            publish_availability,
            withdraw_availability,
            get_my_coach_profile,
            list_coaches,
            get_coach,
            update_coach,
            get_my_client_profile,
            list_clients,
            get_client,
            update_client,
            assign_coach,
            unassign_coach,
            list_applications,
            get_application,
            create_application,
            update_application,
            delete_application,
            get_application_history,
            list_my_resumes,
            list_client_resumes,
            get_resume,
            create_resume,
            update_resume,
            submit_resume,
            delete_resume,
            list_pending_resumes,
            list_resume_reviews,
            start_review,
            add_review_comment,
            complete_review,
            apply_review,
            list_accounts,
            create_account,
            set_account_status,
            delete_account,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
