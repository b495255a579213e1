// web_app/session/mod.rs - Session storage collaborator
//
// A successful login hands its token and user to a `SessionStore`. The
// browser build uses `SessionContext`, which keeps the session in a signal
// for the rest of the app and mirrors it into Web Storage; tests use
// `MemorySessionStore`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::web_app::model::{Persistence, Session, User};

#[cfg(any(feature = "ssr", feature = "hydrate"))]
mod context;
#[cfg(any(feature = "ssr", feature = "hydrate"))]
mod storage;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use context::{use_session, SessionContext, SessionProvider};

/// Key the session is stored under in localStorage / sessionStorage
pub const STORAGE_KEY: &str = "pentest_lab.session";

/// Owner of the authenticated session once login succeeds
pub trait SessionStore {
    /// Persists the session for subsequent requests and navigation
    fn commit(&self, token: String, user: User, persistence: Persistence);

    fn current(&self) -> Option<Session>;

    fn clear(&self);
}

/// In-memory store, shared between clones
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    inner: Rc<RefCell<Option<(Session, Persistence)>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persistence requested by the last commit, if a session is held
    pub fn persistence(&self) -> Option<Persistence> {
        self.inner.borrow().as_ref().map(|(_, persistence)| *persistence)
    }
}

impl SessionStore for MemorySessionStore {
    fn commit(&self, token: String, user: User, persistence: Persistence) {
        *self.inner.borrow_mut() = Some((Session { token, user }, persistence));
    }

    fn current(&self) -> Option<Session> {
        self.inner.borrow().as_ref().map(|(session, _)| session.clone())
    }

    fn clear(&self) {
        self.inner.borrow_mut().take();
    }
}
