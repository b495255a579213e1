// web_app/flows/status.rs - Form status sink
//
// The loading flag and the error/success banners of a form. Flows write to
// it; the pages read it back through signals.

/// Sink for the visible state of a submitting form
pub trait FormStatus {
    fn set_loading(&self, loading: bool);
    fn set_error(&self, message: Option<String>);
    fn set_success(&self, message: Option<String>);
}

/// Holds the loading flag up while alive and drops it on every exit path,
/// including early returns and a cancelled future
#[must_use = "the loading flag is cleared as soon as the guard is dropped"]
pub struct LoadingGuard<'a, F: FormStatus> {
    status: &'a F,
}

impl<'a, F: FormStatus> LoadingGuard<'a, F> {
    pub fn raise(status: &'a F) -> Self {
        status.set_loading(true);
        Self { status }
    }
}

impl<F: FormStatus> Drop for LoadingGuard<'_, F> {
    fn drop(&mut self) {
        self.status.set_loading(false);
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use signals::SignalFormStatus;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
mod signals {
    use leptos::prelude::*;

    use super::FormStatus;

    /// `FormStatus` backed by Leptos signals
    #[derive(Clone, Copy)]
    pub struct SignalFormStatus {
        pub loading: RwSignal<bool>,
        pub error: RwSignal<Option<String>>,
        pub success: RwSignal<Option<String>>,
    }

    impl SignalFormStatus {
        pub fn new() -> Self {
            Self {
                loading: RwSignal::new(false),
                error: RwSignal::new(None),
                success: RwSignal::new(None),
            }
        }
    }

    impl Default for SignalFormStatus {
        fn default() -> Self {
            Self::new()
        }
    }

    impl FormStatus for SignalFormStatus {
        fn set_loading(&self, loading: bool) {
            self.loading.set(loading);
        }

        fn set_error(&self, message: Option<String>) {
            self.error.set(message);
        }

        fn set_success(&self, message: Option<String>) {
            self.success.set(message);
        }
    }
}
