use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use crate::models::{ColorEntry, SupportInfo, UserRecord};
use crate::stub::fixtures;

/// The stub state: read-only fixtures plus the id sequence of created users.
#[derive(Debug, Clone)]
pub struct AppState {
    started_at: Instant,
    users: Arc<[UserRecord]>,
    colors: Arc<[ColorEntry]>,
    next_id: Arc<AtomicU64>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            users: fixtures::users().into(),
            colors: fixtures::colors().into(),
            next_id: Arc::new(AtomicU64::new(fixtures::FIRST_CREATED_ID)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub(crate) fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub(crate) fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub(crate) fn user(&self, id: u32) -> Option<&UserRecord> {
        self.users.iter().find(|user| user.id == id)
    }

    pub(crate) fn colors(&self) -> &[ColorEntry] {
        &self.colors
    }

    pub(crate) fn color(&self, id: u32) -> Option<&ColorEntry> {
        self.colors.iter().find(|color| color.id == id)
    }

    pub(crate) fn support(&self) -> SupportInfo {
        fixtures::support()
    }

    pub(crate) fn next_user_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}
