//! Coach, client and account profile types.
//!
//! Field names mirror the backend's wire format (snake_case), including the
//! legacy combined `name`/`furigana` fields kept alongside the split
//! last/first variants.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Compact coach record embedded in appointments and availability slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachInfo {
    pub coach_id: Uuid,
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub email: String,
}

impl CoachInfo {
    /// Display name with the backend's fallback placeholder.
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| "コーチ".to_string())
    }
}

/// Compact client record embedded in appointments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientInfo {
    pub client_id: Uuid,
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachProfile {
    pub coach_id: Uuid,
    pub user_id: Uuid,
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub furigana: Option<String>,
    pub last_name_kana: Option<String>,
    pub first_name_kana: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub mtg_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientProfile {
    pub client_id: Uuid,
    pub user_id: Uuid,
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub furigana: Option<String>,
    pub last_name_kana: Option<String>,
    pub first_name_kana: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub occupation: Option<String>,
    pub registration_date: Option<NaiveDate>,
    pub contract_end_date: Option<NaiveDate>,
    pub status: String,
    pub will_can_must: Option<String>,
    pub strengths_finder: Option<String>,
    pub desired_income: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial coach profile update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoachProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name_kana: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name_kana: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtg_url: Option<String>,
}

/// Partial client profile update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name_kana: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name_kana: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub will_can_must: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strengths_finder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_income: Option<i64>,
}

/// Account row shown on the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSummary {
    pub user_id: String,
    pub email: String,
    pub user_type: String,
    pub role: String,
    pub status: String,
    pub name: Option<String>,
    pub created_at: String,
}

/// Admin-issued account creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountCreate {
    pub email: String,
    pub password: String,
    /// `coach` or `client`.
    pub user_type: String,
    pub last_name: String,
    pub first_name: String,
    pub last_name_kana: Option<String>,
    pub first_name_kana: Option<String>,
    pub phone: Option<String>,
}
