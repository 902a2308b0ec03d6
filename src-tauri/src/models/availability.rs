//! Coach availability slots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::CoachInfo;

/// A coach-published bookable time window. Owned by exactly one coach;
/// `is_booked` flips server-side when an appointment consumes the slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub availability_id: Uuid,
    pub coach_id: Uuid,
    pub available_start: DateTime<Utc>,
    pub available_end: DateTime<Utc>,
    pub is_booked: bool,
    pub created_at: DateTime<Utc>,
    pub coach: Option<CoachInfo>,
}

/// Payload for `POST /api/appointments/coach-availability`. The backend
/// splits the window into 30-minute slots, so the response is a list.
#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityCreate {
    pub coach_id: Uuid,
    pub available_start: DateTime<Utc>,
    pub available_end: DateTime<Utc>,
    pub is_booked: bool,
}
