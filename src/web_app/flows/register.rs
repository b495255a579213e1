// web_app/flows/register.rs - Registration submission

use std::time::Duration;

use crate::web_app::api::MarketplaceApi;
use crate::web_app::error::FormError;
use crate::web_app::model::{RegisterResponse, RegistrationForm};
use crate::web_app::navigation::Navigator;

use super::status::{FormStatus, LoadingGuard};

/// Shown when the server gives no reason for a failed registration
pub const REGISTRATION_FAILED: &str = "Registration failed";

pub const REGISTERED_MESSAGE: &str = "Account created. Redirecting to login…";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// Rejected locally, nothing was sent
    Invalid(FormError),
    Registered,
    Failed(String),
}

/// Collaborators of a registration submission
pub struct RegisterFlow<A, N, F> {
    pub api: A,
    pub navigator: N,
    pub status: F,
    pub login_route: String,
    /// How long the success message stays up before the jump to login
    pub redirect_delay: Duration,
}

impl<A, N, F> RegisterFlow<A, N, F>
where
    A: MarketplaceApi,
    N: Navigator,
    F: FormStatus,
{
    /// Validates the form and submits it once
    ///
    /// The form itself is borrowed and left untouched, so a failed attempt
    /// keeps every field populated.
    pub async fn submit(&self, form: &RegistrationForm) -> RegisterOutcome {
        self.status.set_error(None);
        self.status.set_success(None);

        if !form.passwords_match() {
            let err = FormError::PasswordMismatch;
            self.status.set_error(Some(err.to_string()));
            return RegisterOutcome::Invalid(err);
        }

        let _loading = LoadingGuard::raise(&self.status);
        tracing::info!(username = %form.username, "submitting registration");

        match self.api.register(&form.to_request()).await {
            Ok(RegisterResponse { success: true, .. }) => {
                tracing::info!(username = %form.username, "registration succeeded");
                self.status.set_success(Some(REGISTERED_MESSAGE.to_string()));
                self.navigator.go_after(&self.login_route, self.redirect_delay);
                RegisterOutcome::Registered
            }
            Ok(response) => {
                let message = response
                    .error
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| REGISTRATION_FAILED.to_string());
                self.status.set_error(Some(message.clone()));
                RegisterOutcome::Failed(message)
            }
            Err(err) => {
                tracing::warn!(error = %err, "registration request failed");
                let message = err.user_message(REGISTRATION_FAILED);
                self.status.set_error(Some(message.clone()));
                RegisterOutcome::Failed(message)
            }
        }
    }
}
