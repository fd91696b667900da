//! # Session State
//!
//! Thread-safe wrapper for embedding a [`Session`] in a command layer.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` because:
//! 1. An embedding shell (desktop runtime, test harness) may dispatch
//!    commands from multiple threads
//! 2. Only one command should mutate the session at a time
//!
//! The domain itself is single-session and synchronous; this wrapper just
//! serializes access so commands observe checkout as one step.
//!
//! ## Why Not RwLock?
//! Session operations are quick and most of them mutate state. A RwLock
//! would add complexity with minimal benefit.

use std::sync::{Arc, Mutex};

use crate::session::Session;

/// Shared, mutex-guarded session handle.
#[derive(Debug, Clone)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
}

impl SessionState {
    /// Wraps a session for shared access.
    pub fn new(session: Session) -> Self {
        SessionState {
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = state.with_session(|s| s.cart_total());
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.session.lock().expect("Session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_session_mut(|s| s.add_to_cart("m1", None, 1, speed))?;
    /// ```
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.session.lock().expect("Session mutex poisoned");
        f(&mut session)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::new(Session::demo())
    }
}
