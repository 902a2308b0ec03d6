//! Job application tracking types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub application_id: Uuid,
    pub client_id: Uuid,
    pub company_name: String,
    pub application_date: Option<NaiveDate>,
    pub selection_stage: Option<String>,
    pub next_interview_date: Option<NaiveDate>,
    pub next_action_date: Option<NaiveDate>,
    pub priority: i32,
    pub preference_rating: i32,
    pub status: String,
    pub notes: Option<String>,
    pub interview_questions: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationCreate {
    pub company_name: String,
    pub application_date: Option<NaiveDate>,
    pub selection_stage: Option<String>,
    pub next_interview_date: Option<NaiveDate>,
    pub next_action_date: Option<NaiveDate>,
    pub priority: i32,
    pub preference_rating: i32,
    pub status: String,
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<Uuid>,
}

/// Partial update; `None` fields are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_interview_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_action_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preference_rating: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Audit entry for an application field change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationHistory {
    pub history_id: Uuid,
    pub application_id: Uuid,
    pub changed_date: DateTime<Utc>,
    pub changed_field: Option<String>,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub changed_by: Option<Uuid>,
}
