//! Appointment types and the approval lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::{ClientInfo, CoachInfo};

/// Lifecycle of an appointment request.
///
/// Only `Requested` accepts transitions: a coach on the appointment may
/// approve (→ `Confirmed`) or reject (→ `Rejected`), the client may cancel
/// (→ `Cancelled`). The other three states are terminal; the client never
/// initiates a transition out of them. The serialized labels are the
/// backend's Japanese status strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppointmentStatus {
    #[serde(rename = "予約申請中")]
    Requested,
    // Older backend rows carry "予約済" for confirmed appointments.
    #[serde(rename = "確定", alias = "予約済")]
    Confirmed,
    #[serde(rename = "キャンセル")]
    Cancelled,
    #[serde(rename = "拒否")]
    Rejected,
}

impl AppointmentStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, AppointmentStatus::Requested)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub appointment_id: Uuid,
    pub client_id: Uuid,
    /// First coach on the appointment, kept for backward compatibility;
    /// `coaches` is the authoritative list.
    pub coach_id: Uuid,
    pub appointment_date: DateTime<Utc>,
    pub appointment_type: Option<String>,
    pub status: AppointmentStatus,
    pub mtg_url: Option<String>,
    pub notes: Option<String>,
    pub duration_minutes: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub client: Option<ClientInfo>,
    pub coaches: Option<Vec<CoachInfo>>,
}

/// Payload for `POST /api/appointments`. Always submitted as `Requested`;
/// the backend owns slot consumption and conflict rejection.
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentCreate {
    pub appointment_date: DateTime<Utc>,
    pub appointment_type: String,
    pub notes: Option<String>,
    pub status: AppointmentStatus,
    pub coach_ids: Vec<Uuid>,
}

impl AppointmentCreate {
    pub fn requested(
        appointment_date: DateTime<Utc>,
        appointment_type: String,
        notes: Option<String>,
        coach_ids: Vec<Uuid>,
    ) -> Self {
        Self {
            appointment_date,
            appointment_type,
            notes,
            status: AppointmentStatus::Requested,
            coach_ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_to_backend_labels() {
        let json = serde_json::to_string(&AppointmentStatus::Requested).unwrap();
        assert_eq!(json, "\"予約申請中\"");
        let json = serde_json::to_string(&AppointmentStatus::Confirmed).unwrap();
        assert_eq!(json, "\"確定\"");
        let json = serde_json::to_string(&AppointmentStatus::Cancelled).unwrap();
        assert_eq!(json, "\"キャンセル\"");
        let json = serde_json::to_string(&AppointmentStatus::Rejected).unwrap();
        assert_eq!(json, "\"拒否\"");
    }

    #[test]
    fn legacy_confirmed_label_decodes() {
        let status: AppointmentStatus = serde_json::from_str("\"予約済\"").unwrap();
        assert_eq!(status, AppointmentStatus::Confirmed);
    }

    #[test]
    fn only_requested_is_non_terminal() {
        assert!(!AppointmentStatus::Requested.is_terminal());
        assert!(AppointmentStatus::Confirmed.is_terminal());
        assert!(AppointmentStatus::Cancelled.is_terminal());
        assert!(AppointmentStatus::Rejected.is_terminal());
    }

    #[test]
    fn requested_builder_forces_status() {
        let create = AppointmentCreate::requested(
            Utc::now(),
            "定期面談".to_string(),
            None,
            vec![Uuid::new_v4()],
        );
        assert_eq!(create.status, AppointmentStatus::Requested);
    }
}
