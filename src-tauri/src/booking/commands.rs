//! Booking commands.
//!
//! Reads go through the query cache; every mutation invalidates the cache
//! key it touches exactly once, right after the backend confirms.

use chrono::{DateTime, Utc};
use tauri::State;
use uuid::Uuid;

use crate::booking::grouping::{self, SlotGroup};
use crate::cache::QueryKey;
use crate::models::{
    Appointment, AppointmentCreate, AvailabilityCreate, AvailabilitySlot, CoachProfile,
};
use crate::AppState;

const DEFAULT_APPOINTMENT_TYPE: &str = "定期面談";

/// Window checks applied before a slot is published.
fn validate_new_window(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), String> {
    if end <= start {
        return Err("終了時刻は開始時刻より後に設定してください".to_string());
    }
    if start < now {
        return Err("過去の日時には空き枠を登録できません".to_string());
    }
    Ok(())
}

/// Booked slots never leave the calendar from this side.
fn ensure_unbooked(is_booked: bool) -> Result<(), String> {
    if is_booked {
        return Err("予約済みの空き枠は削除できません".to_string());
    }
    Ok(())
}

/// Every coach's open slots, collapsed into bookable groups.
#[tauri::command]
pub async fn list_open_slots(state: State<'_, AppState>) -> Result<Vec<SlotGroup>, String> {
    if let Some(groups) = state.cache.get(QueryKey::OpenSlots) {
        return Ok(groups);
    }

    let slots: Vec<AvailabilitySlot> = state
        .api
        .get("/api/appointments/coach-availability")
        .await
        .map_err(|e| e.to_string())?;

    let groups = grouping::group_slots(&slots);
    state.cache.put(QueryKey::OpenSlots, &groups);
    Ok(groups)
}

#[tauri::command]
pub async fn list_appointments(state: State<'_, AppState>) -> Result<Vec<Appointment>, String> {
    if let Some(appointments) = state.cache.get(QueryKey::Appointments) {
        return Ok(appointments);
    }

    let appointments: Vec<Appointment> = state
        .api
        .get("/api/appointments")
        .await
        .map_err(|e| e.to_string())?;

    state.cache.put(QueryKey::Appointments, &appointments);
    Ok(appointments)
}

#[tauri::command]
pub async fn get_appointment(
    state: State<'_, AppState>,
    appointment_id: Uuid,
) -> Result<Appointment, String> {
    state
        .api
        .get(&format!("/api/appointments/{appointment_id}"))
        .await
        .map_err(|e| e.to_string())
}

/// Manual appointment request against a single chosen coach.
#[tauri::command]
pub async fn request_appointment(
    state: State<'_, AppState>,
    appointment_date: DateTime<Utc>,
    appointment_type: Option<String>,
    notes: Option<String>,
    coach_id: Uuid,
) -> Result<Appointment, String> {
    let payload = AppointmentCreate::requested(
        appointment_date,
        appointment_type.unwrap_or_else(|| DEFAULT_APPOINTMENT_TYPE.to_string()),
        notes,
        vec![coach_id],
    );

    let appointment: Appointment = state
        .api
        .post("/api/appointments", &payload)
        .await
        .map_err(|e| e.to_string())?;

    log::info!("Requested appointment {}", appointment.appointment_id);
    state.cache.invalidate(QueryKey::Appointments);
    state.cache.invalidate(QueryKey::OpenSlots);
    Ok(appointment)
}

/// Book a slot group. An empty selection requests every coach in the group.
#[tauri::command]
pub async fn book_slot_group(
    state: State<'_, AppState>,
    group: SlotGroup,
    selected_coach_ids: Vec<Uuid>,
    notes: Option<String>,
) -> Result<Appointment, String> {
    let coach_ids = grouping::coach_ids_for_booking(&group, selected_coach_ids);

    let payload = AppointmentCreate::requested(
        group.available_start,
        DEFAULT_APPOINTMENT_TYPE.to_string(),
        notes,
        coach_ids,
    );

    let appointment: Appointment = state
        .api
        .post("/api/appointments", &payload)
        .await
        .map_err(|e| e.to_string())?;

    log::info!(
        "Booked slot group starting {} as appointment {}",
        group.available_start,
        appointment.appointment_id
    );
    state.cache.invalidate(QueryKey::Appointments);
    state.cache.invalidate(QueryKey::OpenSlots);
    Ok(appointment)
}

/// Coach-side transition (approve or reject). Invalidates the appointment
/// collection once on success so the next fetch is authoritative.
async fn post_transition(
    state: &AppState,
    appointment_id: Uuid,
    action: &str,
) -> Result<Appointment, String> {
    let appointment: Appointment = state
        .api
        .post_empty(&format!("/api/appointments/{appointment_id}/{action}"))
        .await
        .map_err(|e| e.to_string())?;

    state.cache.invalidate(QueryKey::Appointments);
    Ok(appointment)
}

async fn delete_appointment(state: &AppState, appointment_id: Uuid) -> Result<(), String> {
    state
        .api
        .delete(&format!("/api/appointments/{appointment_id}"))
        .await
        .map_err(|e| e.to_string())?;

    state.cache.invalidate(QueryKey::Appointments);
    state.cache.invalidate(QueryKey::OpenSlots);
    Ok(())
}

#[tauri::command]
pub async fn approve_appointment(
    state: State<'_, AppState>,
    appointment_id: Uuid,
) -> Result<Appointment, String> {
    let appointment = post_transition(&state, appointment_id, "approve").await?;
    log::info!("Approved appointment {appointment_id}");
    Ok(appointment)
}

#[tauri::command]
pub async fn reject_appointment(
    state: State<'_, AppState>,
    appointment_id: Uuid,
) -> Result<Appointment, String> {
    let appointment = post_transition(&state, appointment_id, "reject").await?;
    log::info!("Rejected appointment {appointment_id}");
    Ok(appointment)
}

#[tauri::command]
pub async fn cancel_appointment(
    state: State<'_, AppState>,
    appointment_id: Uuid,
) -> Result<(), String> {
    delete_appointment(&state, appointment_id).await?;
    log::info!("Cancelled appointment {appointment_id}");
    Ok(())
}

/// The signed-in coach's own slots, booked ones included.
#[tauri::command]
pub async fn list_my_availability(
    state: State<'_, AppState>,
) -> Result<Vec<AvailabilitySlot>, String> {
    if let Some(slots) = state.cache.get(QueryKey::MyAvailability) {
        return Ok(slots);
    }

    let me: CoachProfile = state
        .api
        .get("/api/coaches/me")
        .await
        .map_err(|e| e.to_string())?;

    let slots: Vec<AvailabilitySlot> = state
        .api
        .get(&format!(
            "/api/appointments/coach-availability/{}",
            me.coach_id
        ))
        .await
        .map_err(|e| e.to_string())?;

    state.cache.put(QueryKey::MyAvailability, &slots);
    Ok(slots)
}

/// Publish an availability window. The backend splits it into 30-minute
/// slots and returns the whole batch.
#[tauri::command]
pub async fn publish_availability(
    state: State<'_, AppState>,
    available_start: DateTime<Utc>,
    available_end: DateTime<Utc>,
) -> Result<Vec<AvailabilitySlot>, String> {
    validate_new_window(available_start, available_end, Utc::now())?;

    let me: CoachProfile = state
        .api
        .get("/api/coaches/me")
        .await
        .map_err(|e| e.to_string())?;

    let payload = AvailabilityCreate {
        coach_id: me.coach_id,
        available_start,
        available_end,
        is_booked: false,
    };

    let slots: Vec<AvailabilitySlot> = state
        .api
        .post("/api/appointments/coach-availability", &payload)
        .await
        .map_err(|e| e.to_string())?;

    log::info!("Published {} availability slot(s)", slots.len());
    state.cache.invalidate(QueryKey::MyAvailability);
    state.cache.invalidate(QueryKey::OpenSlots);
    Ok(slots)
}

/// Withdraw an unbooked slot. Booked slots are refused before any request
/// goes out; the backend enforces the same rule.
#[tauri::command]
pub async fn withdraw_availability(
    state: State<'_, AppState>,
    availability_id: Uuid,
    is_booked: bool,
) -> Result<(), String> {
    ensure_unbooked(is_booked)?;

    state
        .api
        .delete(&format!(
            "/api/appointments/coach-availability/{availability_id}"
        ))
        .await
        .map_err(|e| e.to_string())?;

    log::info!("Withdrew availability slot {availability_id}");
    state.cache.invalidate(QueryKey::MyAvailability);
    state.cache.invalidate(QueryKey::OpenSlots);
    Ok(())
}
