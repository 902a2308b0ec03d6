//! Resume and review types.
//!
//! A resume is a client's versioned document; a review is coach feedback
//! against a submitted version. A client can apply a completed review's
//! feedback back onto the draft.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::CoachInfo;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResumeStatus {
    Draft,
    Submitted,
    Reviewed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    pub resume_id: Uuid,
    pub client_id: Uuid,
    pub content: Option<String>,
    pub template_type: String,
    pub version_number: i32,
    pub status: ResumeStatus,
    pub submitted_at: Option<DateTime<Utc>>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub reviews: Vec<ResumeReview>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeCreate {
    pub content: Option<String>,
    pub template_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeReview {
    pub review_id: Uuid,
    pub resume_id: Uuid,
    pub coach_id: Uuid,
    pub review_status: ReviewStatus,
    pub overall_comment: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub comments: Vec<ReviewComment>,
    pub coach: Option<CoachInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewComment {
    pub comment_id: Uuid,
    pub review_id: Uuid,
    pub section_type: String,
    pub section_id: Option<Uuid>,
    pub comment_type: String,
    pub priority: Option<String>,
    pub original_text: Option<String>,
    pub suggested_text: Option<String>,
    pub comment_text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewCommentCreate {
    pub section_type: String,
    pub section_id: Option<Uuid>,
    pub comment_type: String,
    pub priority: Option<String>,
    pub original_text: Option<String>,
    pub suggested_text: Option<String>,
    pub comment_text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewCreate {
    pub review_status: ReviewStatus,
    pub overall_comment: Option<String>,
}

impl ReviewCreate {
    pub fn in_progress(overall_comment: Option<String>) -> Self {
        Self {
            review_status: ReviewStatus::InProgress,
            overall_comment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resume_status_uses_lowercase_labels() {
        assert_eq!(
            serde_json::to_string(&ResumeStatus::Draft).unwrap(),
            "\"draft\""
        );
        assert_eq!(
            serde_json::to_string(&ResumeStatus::Submitted).unwrap(),
            "\"submitted\""
        );
    }

    #[test]
    fn review_status_uses_snake_case_labels() {
        assert_eq!(
            serde_json::to_string(&ReviewStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(
            serde_json::to_string(&ReviewStatus::Completed).unwrap(),
            "\"completed\""
        );
    }
}
