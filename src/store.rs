//! # Session Store
//!
//! Persistence seam for photobooth session records. The store is injected
//! into the HTTP server as a trait object so handlers and tests never touch
//! a concrete datastore. [`MemStore`] is the only shipped implementation:
//! an in-memory map constructed at process start, no teardown required.
//!
//! Records are keyed by the caller-chosen `session_id` string. Photos travel
//! as PNG data URLs, matching what the booth client submits.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::layout::{BackgroundColor, PrintFormat};
use crate::session::clamp_copy_count;

/// A stored photobooth session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Server-assigned record id.
    pub id: String,
    /// Caller-chosen session key, unique per booth run.
    pub session_id: String,
    pub print_format: PrintFormat,
    pub background_color: BackgroundColor,
    pub copy_count: u32,
    /// Captured photos as data URLs, in capture order.
    pub photos: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSession {
    pub session_id: String,
    pub print_format: PrintFormat,
    pub background_color: BackgroundColor,
    /// Defaults to 1; clamped to 1..=10.
    #[serde(default)]
    pub copy_count: Option<u32>,
    #[serde(default)]
    pub photos: Vec<String>,
}

/// Partial update applied to a stored session.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUpdate {
    pub print_format: Option<PrintFormat>,
    pub background_color: Option<BackgroundColor>,
    pub copy_count: Option<u32>,
    pub photos: Option<Vec<String>>,
}

/// Session persistence interface.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store a new session. An existing record under the same `session_id`
    /// is replaced.
    async fn create(&self, session: NewSession) -> SessionRecord;

    async fn get(&self, session_id: &str) -> Option<SessionRecord>;

    /// Apply a partial update; `None` when the session does not exist.
    async fn update(&self, session_id: &str, updates: SessionUpdate) -> Option<SessionRecord>;

    /// Remove a session; `false` when it did not exist.
    async fn delete(&self, session_id: &str) -> bool;
}

/// In-memory session store.
pub struct MemStore {
    sessions: RwLock<HashMap<String, SessionRecord>>,
}

impl MemStore {
    pub fn new() -> MemStore {
        MemStore {
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for MemStore {
    async fn create(&self, session: NewSession) -> SessionRecord {
        let record = SessionRecord {
            id: Uuid::new_v4().to_string(),
            session_id: session.session_id.clone(),
            print_format: session.print_format,
            background_color: session.background_color,
            copy_count: clamp_copy_count(session.copy_count.unwrap_or(1)),
            photos: session.photos,
            created_at: Utc::now(),
        };
        let mut sessions = self.sessions.write().await;
        sessions.insert(record.session_id.clone(), record.clone());
        record
    }

    async fn get(&self, session_id: &str) -> Option<SessionRecord> {
        let sessions = self.sessions.read().await;
        sessions.get(session_id).cloned()
    }

    async fn update(&self, session_id: &str, updates: SessionUpdate) -> Option<SessionRecord> {
        let mut sessions = self.sessions.write().await;
        let record = sessions.get_mut(session_id)?;
        if let Some(format) = updates.print_format {
            record.print_format = format;
        }
        if let Some(background) = updates.background_color {
            record.background_color = background;
        }
        if let Some(count) = updates.copy_count {
            record.copy_count = clamp_copy_count(count);
        }
        if let Some(photos) = updates.photos {
            record.photos = photos;
        }
        Some(record.clone())
    }

    async fn delete(&self, session_id: &str) -> bool {
        let mut sessions = self.sessions.write().await;
        sessions.remove(session_id).is_some()
    }
}
