// web_app/session/context.rs - Leptos session context
//
// The provider restores a stored session once the app is running in the
// browser and exposes the session signal to every page.

use leptos::prelude::*;

use super::{storage, SessionStore};
use crate::web_app::model::{Persistence, Session, User};

/// Session context shared through Leptos
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: RwSignal<Option<Session>>,
    pub is_authenticated: Signal<bool>,
}

impl SessionContext {
    fn new(session: RwSignal<Option<Session>>) -> Self {
        let is_authenticated = Signal::derive(move || session.get().is_some());
        Self {
            session,
            is_authenticated,
        }
    }
}

impl SessionStore for SessionContext {
    fn commit(&self, token: String, user: User, persistence: Persistence) {
        let session = Session { token, user };
        storage::save(&session, persistence);
        self.session.set(Some(session));
    }

    fn current(&self) -> Option<Session> {
        self.session.get_untracked()
    }

    fn clear(&self) {
        storage::clear();
        self.session.set(None);
    }
}

/// Provides the session context and restores a stored session on mount
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let context = SessionContext::new(RwSignal::new(None));
    provide_context(context);

    // Effects only run in the browser, after hydration
    Effect::new(move |_| {
        if let Some(stored) = storage::load() {
            tracing::debug!("restored session from web storage");
            context.session.set(Some(stored));
        }
    });

    children()
}

/// Returns the current session context or a detached empty one
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| SessionContext::new(RwSignal::new(None)))
}
