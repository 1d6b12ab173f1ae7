//! In-Process Session Store
//!
//! Holds the logged-in drivers' sessions in memory, keyed by an opaque
//! token that travels in an HttpOnly cookie. Each session also carries the
//! per-session dashboard visit counter.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use super::config::SessionConfig;
use crate::domain::models::driver::DriverId;

/// Identity data handed out when a session token resolves
#[derive(Debug, Clone)]
pub struct Session {
    pub driver_id: DriverId,
    pub username: String,
}

struct SessionEntry {
    driver_id: DriverId,
    username: String,
    expires_at: DateTime<Utc>,
    num_visits: u64,
}

/// Session store shared across all requests
pub struct SessionManager {
    cookie_name: String,
    ttl: Duration,
    sessions: RwLock<HashMap<Uuid, SessionEntry>>,
}

impl SessionManager {
    /// Create a new SessionManager
    #[must_use]
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            cookie_name: config.cookie_name.clone(),
            ttl: Duration::seconds(config.expires_in_secs),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Start a session for a driver and return its token
    pub fn create(&self, driver_id: DriverId, username: &str) -> Uuid {
        let token = Uuid::new_v4();
        let entry = SessionEntry {
            driver_id,
            username: username.to_string(),
            expires_at: Utc::now() + self.ttl,
            num_visits: 0,
        };
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token, entry);

        tracing::debug!(driver_id = %driver_id, "Session created");
        token
    }

    /// Resolve a token to its session, evicting it when expired
    pub fn resolve(&self, token: Uuid) -> Option<Session> {
        let now = Utc::now();
        {
            let sessions = self.sessions.read().unwrap_or_else(PoisonError::into_inner);
            match sessions.get(&token) {
                Some(entry) if entry.expires_at > now => {
                    return Some(Session {
                        driver_id: entry.driver_id,
                        username: entry.username.clone(),
                    });
                }
                Some(_) => {}
                None => return None,
            }
        }

        // Expired entry, drop it
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&token);
        None
    }

    /// End a session; returns whether it existed
    pub fn destroy(&self, token: Uuid) -> bool {
        let removed = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&token)
            .is_some();

        if removed {
            tracing::debug!("Session destroyed");
        }
        removed
    }

    /// Bump the session's dashboard visit counter and return the new count.
    ///
    /// The first recorded visit yields 1. Returns `None` when the token no
    /// longer resolves to a live session.
    pub fn record_visit(&self, token: Uuid) -> Option<u64> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let entry = sessions.get_mut(&token).filter(|e| e.expires_at > now)?;
        entry.num_visits += 1;
        Some(entry.num_visits)
    }

    /// Name of the cookie carrying the session token
    #[must_use]
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Pull the session token out of a Cookie header value
    #[must_use]
    pub fn token_from_cookie_header(&self, header: &str) -> Option<Uuid> {
        header
            .split(';')
            .map(str::trim)
            .find_map(|pair| pair.strip_prefix(self.cookie_name.as_str())?.strip_prefix('='))
            .and_then(|value| Uuid::parse_str(value).ok())
    }

    /// Set-Cookie value that installs a session token
    #[must_use]
    pub fn login_cookie(&self, token: Uuid) -> String {
        format!(
            "{}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
            self.cookie_name,
            self.ttl.num_seconds()
        )
    }

    /// Set-Cookie value that clears the session cookie
    #[must_use]
    pub fn logout_cookie(&self) -> String {
        format!(
            "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
            self.cookie_name
        )
    }
}
