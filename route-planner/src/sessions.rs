//! In-memory booking sessions.
//!
//! Each session holds one [`BookingFlow`]. Sessions expire after a fixed
//! time to live; an expired id behaves exactly like an unknown one.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use rand::Rng;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::booking::{BookingAction, BookingError, BookingFlow};

/// Configuration for the session store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// How long a session lives after it is created.
    pub ttl: Duration,

    /// Maximum number of live sessions.
    pub max_capacity: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(30 * 60),
            max_capacity: 10_000,
        }
    }
}

/// Errors from session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("booking session {0} not found or expired")]
    NotFound(String),

    #[error(transparent)]
    Booking(#[from] BookingError),
}

type SessionEntry = Arc<Mutex<BookingFlow>>;

/// Store of live booking sessions.
pub struct BookingSessions {
    sessions: MokaCache<String, SessionEntry>,
}

impl BookingSessions {
    pub fn new(config: &SessionConfig) -> Self {
        let sessions = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { sessions }
    }

    /// Start a new session. Returns its id and initial flow.
    pub async fn create(&self) -> (String, BookingFlow) {
        let id = new_session_id();
        let flow = BookingFlow::new(ticket_reference(&id));

        self.sessions
            .insert(id.clone(), Arc::new(Mutex::new(flow.clone())))
            .await;
        debug!(session = %id, reference = flow.reference(), "booking session created");

        (id, flow)
    }

    /// Current flow of a session.
    pub async fn get(&self, id: &str) -> Result<BookingFlow, SessionError> {
        let entry = self.entry(id).await?;
        let flow = entry.lock().await;
        Ok(flow.clone())
    }

    /// Apply an action to a session, returning the updated flow.
    ///
    /// Transitions on one session are serialized. A rejected action leaves
    /// the session untouched.
    pub async fn apply(&self, id: &str, action: BookingAction) -> Result<BookingFlow, SessionError> {
        let entry = self.entry(id).await?;
        let mut flow = entry.lock().await;

        match flow.apply(action).map(|state| state.name()) {
            Ok(step) => {
                debug!(session = %id, step, "booking advanced");
                Ok(flow.clone())
            }
            Err(e) => {
                warn!(session = %id, step = flow.state().name(), error = %e, "booking action rejected");
                Err(e.into())
            }
        }
    }

    /// Number of live sessions (approximate).
    pub fn entry_count(&self) -> u64 {
        self.sessions.entry_count()
    }

    async fn entry(&self, id: &str) -> Result<SessionEntry, SessionError> {
        self.sessions
            .get(id)
            .await
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }
}

/// A fresh session id: 128 random bits as lowercase hex.
///
/// Ids act as bearer tokens for the booking endpoints.
fn new_session_id() -> String {
    format!("{:032x}", rand::rng().random::<u128>())
}

/// Ticket reference for a session: `RP-` and the first eight hex digits of
/// the id, upper-cased.
fn ticket_reference(id: &str) -> String {
    let digits: String = id.chars().take(8).collect();
    format!("RP-{}", digits.to_ascii_uppercase())
}
