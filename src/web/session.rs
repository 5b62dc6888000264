// src/web/session.rs
//! One controller per visitor, keyed by a private session cookie

use rocket::http::{Cookie, CookieJar};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::controller::{AnalysisBackend, UiController};

pub const SESSION_COOKIE: &str = "cvlens_session";

struct Session {
    controller: Arc<UiController>,
    last_seen: Instant,
}

impl Session {
    fn is_idle(&self, now: Instant, idle_timeout: Duration) -> bool {
        now.saturating_duration_since(self.last_seen) > idle_timeout
    }
}

/// Sessions are created only by form submissions and dropped once idle for
/// longer than `idle_timeout`.
pub struct SessionStore {
    backend: Arc<dyn AnalysisBackend>,
    idle_timeout: Duration,
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn AnalysisBackend>, idle_timeout: Duration) -> Self {
        Self {
            backend,
            idle_timeout,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Controller of the visitor behind `cookies`, if a live session exists.
    pub async fn existing(&self, cookies: &CookieJar<'_>) -> Option<Arc<UiController>> {
        let id = cookies
            .get_private(SESSION_COOKIE)
            .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())?;

        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id)?;
        if session.is_idle(now, self.idle_timeout) {
            debug!("Session {} expired", id);
            sessions.remove(&id);
            return None;
        }
        session.last_seen = now;
        Some(session.controller.clone())
    }

    /// Controller of the visitor behind `cookies`, starting a session if needed.
    pub async fn controller(&self, cookies: &CookieJar<'_>) -> Arc<UiController> {
        if let Some(controller) = self.existing(cookies).await {
            return controller;
        }

        let id = Uuid::new_v4();
        cookies.add_private(Cookie::new(SESSION_COOKIE, id.to_string()));

        let now = Instant::now();
        let controller = self.detached();
        let mut sessions = self.sessions.write().await;
        prune_idle(&mut sessions, now, self.idle_timeout);
        sessions.insert(
            id,
            Session {
                controller: controller.clone(),
                last_seen: now,
            },
        );
        info!("Starting session {} ({} active)", id, sessions.len());
        controller
    }

    /// A fresh controller that is not stored, for visitors without a session.
    pub fn detached(&self) -> Arc<UiController> {
        Arc::new(UiController::new(self.backend.clone()))
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

fn prune_idle(sessions: &mut HashMap<Uuid, Session>, now: Instant, idle_timeout: Duration) {
    let before = sessions.len();
    sessions.retain(|_, session| !session.is_idle(now, idle_timeout));
    let removed = before - sessions.len();
    if removed > 0 {
        debug!("Dropped {} idle sessions", removed);
    }
}
