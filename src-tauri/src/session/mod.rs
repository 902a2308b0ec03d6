//! Session state: the current user identity and access token.
//!
//! The only durable client-side state in the app. Persisted as a small JSON
//! file under the app data dir so a restart can restore the session; the
//! restored token is verified against the backend before it is trusted.

pub mod commands;

use std::{
    fs,
    path::PathBuf,
    sync::{Arc, RwLock},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Primary role of an account. Mutually exclusive; the super-admin
/// capability is layered on top via [`CurrentUser::is_super_admin`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Client,
    Coach,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentUser {
    pub user_id: Uuid,
    pub email: String,
    pub user_type: UserRole,
    /// Capability on top of the role, derived from the backend's
    /// `super_admin` role string at login.
    pub super_admin: bool,
}

impl CurrentUser {
    pub fn is_coach(&self) -> bool {
        self.user_type == UserRole::Coach
    }

    pub fn is_client(&self) -> bool {
        self.user_type == UserRole::Client
    }

    pub fn is_super_admin(&self) -> bool {
        self.super_admin
    }
}

/// What gets written to `session.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub access_token: String,
    pub user: CurrentUser,
}

/// Response of the auth endpoints (`/api/auth/login`, `/api/auth/register*`).
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user_type: UserRole,
    pub user_id: Uuid,
    pub role: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub user_type: UserRole,
    pub name: String,
    pub furigana: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub furigana: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachRegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub furigana: Option<String>,
    pub phone: Option<String>,
    pub invitation_code: String,
}

struct SessionInner {
    path: PathBuf,
    data: RwLock<Option<StoredSession>>,
}

/// Shared session holder. Cheap to clone; the HTTP adapter and every
/// command handler hold the same instance.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<SessionInner>,
}

impl SessionStore {
    /// Load any persisted session from `path`. A missing or unreadable
    /// file simply starts the store logged out.
    pub fn load(path: PathBuf) -> Self {
        let data = if path.exists() {
            fs::read_to_string(&path)
                .ok()
                .and_then(|contents| serde_json::from_str(&contents).ok())
        } else {
            None
        };

        Self {
            inner: Arc::new(SessionInner {
                path,
                data: RwLock::new(data),
            }),
        }
    }

    /// In-memory store with no backing file, for tests.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(SessionInner {
                path: PathBuf::new(),
                data: RwLock::new(None),
            }),
        }
    }

    pub fn current(&self) -> Option<CurrentUser> {
        self.inner
            .data
            .read()
            .unwrap()
            .as_ref()
            .map(|s| s.user.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.inner
            .data
            .read()
            .unwrap()
            .as_ref()
            .map(|s| s.access_token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.data.read().unwrap().is_some()
    }

    /// Store a fresh session in memory and on disk.
    pub fn set(&self, session: StoredSession) -> Result<()> {
        {
            let mut guard = self.inner.data.write().unwrap();
            *guard = Some(session.clone());
        }
        self.persist(&session)
    }

    /// Drop the session unconditionally. A failed file unlink is logged
    /// and swallowed; logout must never fail.
    pub fn clear(&self) {
        {
            let mut guard = self.inner.data.write().unwrap();
            *guard = None;
        }
        if self.inner.path.as_os_str().is_empty() || !self.inner.path.exists() {
            return;
        }
        if let Err(err) = fs::remove_file(&self.inner.path) {
            log::warn!("Failed to remove session file: {err}");
        }
    }

    fn persist(&self, session: &StoredSession) -> Result<()> {
        if self.inner.path.as_os_str().is_empty() {
            return Ok(());
        }
        let serialized = serde_json::to_string_pretty(session)?;
        fs::write(&self.inner.path, serialized).with_context(|| {
            format!("Failed to write session to {}", self.inner.path.display())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole, super_admin: bool) -> CurrentUser {
        CurrentUser {
            user_id: Uuid::new_v4(),
            email: "user@example.com".to_string(),
            user_type: role,
            super_admin,
        }
    }

    #[test]
    fn store_starts_logged_out() {
        let store = SessionStore::in_memory();
        assert!(!store.is_authenticated());
        assert!(store.current().is_none());
        assert!(store.token().is_none());
    }

    #[test]
    fn set_then_clear_round_trip() {
        let store = SessionStore::in_memory();
        store
            .set(StoredSession {
                access_token: "tok".to_string(),
                user: user(UserRole::Client, false),
            })
            .unwrap();
        assert!(store.is_authenticated());
        assert_eq!(store.token().as_deref(), Some("tok"));

        store.clear();
        assert!(!store.is_authenticated());
        assert!(store.token().is_none());
    }

    #[test]
    fn clear_on_logged_out_store_is_safe() {
        let store = SessionStore::in_memory();
        store.clear();
        store.clear();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn role_flags_are_mutually_exclusive() {
        let coach = user(UserRole::Coach, false);
        assert!(coach.is_coach());
        assert!(!coach.is_client());
        assert!(!coach.is_super_admin());

        let client = user(UserRole::Client, false);
        assert!(client.is_client());
        assert!(!client.is_coach());
    }

    #[test]
    fn super_admin_is_orthogonal_to_role() {
        let admin = user(UserRole::Coach, true);
        assert!(admin.is_coach());
        assert!(admin.is_super_admin());
    }

    #[test]
    fn persisted_session_survives_reload() {
        let dir = std::env::temp_dir().join(format!("coachdesk-test-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("session.json");

        let store = SessionStore::load(path.clone());
        store
            .set(StoredSession {
                access_token: "persisted".to_string(),
                user: user(UserRole::Client, false),
            })
            .unwrap();

        let reloaded = SessionStore::load(path.clone());
        assert_eq!(reloaded.token().as_deref(), Some("persisted"));

        reloaded.clear();
        assert!(!path.exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn user_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Coach).unwrap(), "\"coach\"");
        assert_eq!(
            serde_json::to_string(&UserRole::Client).unwrap(),
            "\"client\""
        );
    }
}
