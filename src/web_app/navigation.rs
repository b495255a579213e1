// web_app/navigation.rs - Navigation collaborator
//
// Flows ask a `Navigator` to move the user along; the browser implementation
// wraps the Leptos router, tests record the calls.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Where the user goes after a successful login
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PostLoginTarget {
    /// Full page load of the `redirect` query parameter, used verbatim
    Location(String),
    /// In-app route change
    Route(String),
}

/// Picks the post-login destination; an empty `redirect` counts as absent
pub fn post_login_target(redirect: Option<&str>, landing_route: &str) -> PostLoginTarget {
    match redirect {
        Some(url) if !url.is_empty() => PostLoginTarget::Location(url.to_string()),
        _ => PostLoginTarget::Route(landing_route.to_string()),
    }
}

pub trait Navigator {
    /// Client-side route change
    fn go(&self, path: &str);

    /// Client-side route change once `delay` has elapsed
    fn go_after(&self, path: &str, delay: Duration);

    /// Full page navigation to an arbitrary URL
    fn assign(&self, url: &str);

    fn follow(&self, target: &PostLoginTarget) {
        match target {
            PostLoginTarget::Location(url) => self.assign(url),
            PostLoginTarget::Route(path) => self.go(path),
        }
    }
}

/// One call made against a `RecordingNavigator`
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationEvent {
    Go(String),
    GoAfter(String, Duration),
    Assign(String),
}

/// Navigator that only remembers what it was asked to do
#[derive(Clone, Debug, Default)]
pub struct RecordingNavigator {
    events: Rc<RefCell<Vec<NavigationEvent>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<NavigationEvent> {
        self.events.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn go(&self, path: &str) {
        self.events.borrow_mut().push(NavigationEvent::Go(path.to_string()));
    }

    fn go_after(&self, path: &str, delay: Duration) {
        self.events
            .borrow_mut()
            .push(NavigationEvent::GoAfter(path.to_string(), delay));
    }

    fn assign(&self, url: &str) {
        self.events.borrow_mut().push(NavigationEvent::Assign(url.to_string()));
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use router::RouterNavigator;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
mod router {
    use std::time::Duration;

    use leptos::prelude::*;
    use leptos_router::NavigateOptions;

    use super::Navigator;

    /// Navigator backed by the function `use_navigate()` returns
    #[derive(Clone)]
    pub struct RouterNavigator<F> {
        navigate: F,
    }

    impl<F> RouterNavigator<F>
    where
        F: Fn(&str, NavigateOptions) + Clone + 'static,
    {
        pub fn new(navigate: F) -> Self {
            Self { navigate }
        }
    }

    impl<F> Navigator for RouterNavigator<F>
    where
        F: Fn(&str, NavigateOptions) + Clone + 'static,
    {
        fn go(&self, path: &str) {
            (self.navigate)(path, NavigateOptions::default());
        }

        fn go_after(&self, path: &str, delay: Duration) {
            let navigate = self.navigate.clone();
            let path = path.to_string();
            set_timeout(move || navigate(&path, NavigateOptions::default()), delay);
        }

        #[cfg(feature = "hydrate")]
        fn assign(&self, url: &str) {
            if let Err(err) = window().location().set_href(url) {
                tracing::error!(?err, "full page navigation failed");
            }
        }

        #[cfg(not(feature = "hydrate"))]
        fn assign(&self, url: &str) {
            tracing::warn!(url, "full page navigation requested outside the browser");
        }
    }
}
