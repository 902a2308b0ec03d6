//! Resume and review workflow commands.
//!
//! Clients draft and submit; coaches pick submissions off the pending
//! queue, review them, and complete; clients may then apply the review's
//! feedback back onto the draft.

use tauri::State;
use uuid::Uuid;

use crate::cache::QueryKey;
use crate::models::{
    Resume, ResumeCreate, ResumeReview, ReviewComment, ReviewCommentCreate, ReviewCreate,
};
use crate::AppState;

#[tauri::command]
pub async fn list_my_resumes(state: State<'_, AppState>) -> Result<Vec<Resume>, String> {
    if let Some(resumes) = state.cache.get(QueryKey::Resumes) {
        return Ok(resumes);
    }

    let resumes: Vec<Resume> = state
        .api
        .get("/api/resumes/me")
        .await
        .map_err(|e| e.to_string())?;

    state.cache.put(QueryKey::Resumes, &resumes);
    Ok(resumes)
}

/// A client's resumes as seen by their coach.
#[tauri::command]
pub async fn list_client_resumes(
    state: State<'_, AppState>,
    client_id: Uuid,
) -> Result<Vec<Resume>, String> {
    state
        .api
        .get(&format!("/api/resumes/client/{client_id}"))
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_resume(state: State<'_, AppState>, resume_id: Uuid) -> Result<Resume, String> {
    state
        .api
        .get(&format!("/api/resumes/{resume_id}"))
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn create_resume(
    state: State<'_, AppState>,
    data: ResumeCreate,
) -> Result<Resume, String> {
    let resume: Resume = state
        .api
        .post("/api/resumes", &data)
        .await
        .map_err(|e| e.to_string())?;

    state.cache.invalidate(QueryKey::Resumes);
    Ok(resume)
}

#[tauri::command]
pub async fn update_resume(
    state: State<'_, AppState>,
    resume_id: Uuid,
    data: ResumeCreate,
) -> Result<Resume, String> {
    let resume: Resume = state
        .api
        .put(&format!("/api/resumes/{resume_id}"), &data)
        .await
        .map_err(|e| e.to_string())?;

    state.cache.invalidate(QueryKey::Resumes);
    Ok(resume)
}

/// Hand the draft to the coaches for review.
#[tauri::command]
pub async fn submit_resume(
    state: State<'_, AppState>,
    resume_id: Uuid,
) -> Result<Resume, String> {
    let resume: Resume = state
        .api
        .post_empty(&format!("/api/resumes/{resume_id}/submit"))
        .await
        .map_err(|e| e.to_string())?;

    log::info!("Submitted resume {resume_id} for review");
    state.cache.invalidate(QueryKey::Resumes);
    Ok(resume)
}

#[tauri::command]
pub async fn delete_resume(state: State<'_, AppState>, resume_id: Uuid) -> Result<(), String> {
    state
        .api
        .delete(&format!("/api/resumes/{resume_id}"))
        .await
        .map_err(|e| e.to_string())?;

    state.cache.invalidate(QueryKey::Resumes);
    Ok(())
}

/// Submitted resumes awaiting review by the signed-in coach.
#[tauri::command]
pub async fn list_pending_resumes(state: State<'_, AppState>) -> Result<Vec<Resume>, String> {
    state
        .api
        .get("/api/resumes/coach/pending")
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn list_resume_reviews(
    state: State<'_, AppState>,
    resume_id: Uuid,
) -> Result<Vec<ResumeReview>, String> {
    state
        .api
        .get(&format!("/api/resumes/{resume_id}/reviews"))
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn start_review(
    state: State<'_, AppState>,
    resume_id: Uuid,
    overall_comment: Option<String>,
) -> Result<ResumeReview, String> {
    let review: ResumeReview = state
        .api
        .post(
            &format!("/api/resumes/{resume_id}/reviews"),
            &ReviewCreate::in_progress(overall_comment),
        )
        .await
        .map_err(|e| e.to_string())?;

    log::info!("Started review {} on resume {resume_id}", review.review_id);
    Ok(review)
}

#[tauri::command]
pub async fn add_review_comment(
    state: State<'_, AppState>,
    review_id: Uuid,
    data: ReviewCommentCreate,
) -> Result<ReviewComment, String> {
    state
        .api
        .post(&format!("/api/resumes/reviews/{review_id}/comments"), &data)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn complete_review(
    state: State<'_, AppState>,
    review_id: Uuid,
) -> Result<ResumeReview, String> {
    let review: ResumeReview = state
        .api
        .post_empty(&format!("/api/resumes/reviews/{review_id}/complete"))
        .await
        .map_err(|e| e.to_string())?;

    log::info!("Completed review {review_id}");
    state.cache.invalidate(QueryKey::Resumes);
    Ok(review)
}

/// Fold a completed review's suggestions back into the client's draft.
#[tauri::command]
pub async fn apply_review(
    state: State<'_, AppState>,
    resume_id: Uuid,
    review_id: Uuid,
) -> Result<Resume, String> {
    let resume: Resume = state
        .api
        .post_empty(&format!("/api/resumes/{resume_id}/apply-review/{review_id}"))
        .await
        .map_err(|e| e.to_string())?;

    log::info!("Applied review {review_id} to resume {resume_id}");
    state.cache.invalidate(QueryKey::Resumes);
    Ok(resume)
}
