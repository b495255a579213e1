// web_app/session/storage.rs - Web Storage mirror of the session
//
// Durable sessions go to localStorage, tab sessions to sessionStorage. Only
// one of the two ever holds the key. Off the browser these are no-ops.

use crate::web_app::model::{Persistence, Session};

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_storage::{LocalStorage, SessionStorage, Storage};

    use super::super::STORAGE_KEY;
    use crate::web_app::model::{Persistence, Session};

    pub fn save(session: &Session, persistence: Persistence) {
        let result = match persistence {
            Persistence::Durable => {
                SessionStorage::delete(STORAGE_KEY);
                LocalStorage::set(STORAGE_KEY, session)
            }
            Persistence::Tab => {
                LocalStorage::delete(STORAGE_KEY);
                SessionStorage::set(STORAGE_KEY, session)
            }
        };

        if let Err(err) = result {
            tracing::warn!(error = %err, "could not persist session to web storage");
        }
    }

    pub fn load() -> Option<Session> {
        SessionStorage::get::<Session>(STORAGE_KEY)
            .or_else(|_| LocalStorage::get::<Session>(STORAGE_KEY))
            .ok()
    }

    pub fn clear() {
        SessionStorage::delete(STORAGE_KEY);
        LocalStorage::delete(STORAGE_KEY);
    }
}

#[cfg(feature = "hydrate")]
pub fn save(session: &Session, persistence: Persistence) {
    browser::save(session, persistence);
}

#[cfg(not(feature = "hydrate"))]
pub fn save(_session: &Session, _persistence: Persistence) {}

#[cfg(feature = "hydrate")]
pub fn load() -> Option<Session> {
    browser::load()
}

#[cfg(not(feature = "hydrate"))]
pub fn load() -> Option<Session> {
    None
}

#[cfg(feature = "hydrate")]
pub fn clear() {
    browser::clear();
}

#[cfg(not(feature = "hydrate"))]
pub fn clear() {}
