// web_app/flows/login.rs - Login submission
//
// One submit = one request. Success commits the session and navigates;
// anything else ends up as a message in the form's error banner.

use crate::web_app::api::MarketplaceApi;
use crate::web_app::model::{LoginForm, LoginResponse, Persistence};
use crate::web_app::navigation::{post_login_target, Navigator, PostLoginTarget};
use crate::web_app::session::SessionStore;

use super::status::{FormStatus, LoadingGuard};

/// Shown when the server gives no reason for a failed login
pub const LOGIN_FAILED: &str = "Login failed";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn(PostLoginTarget),
    Failed(String),
}

/// Collaborators of a login submission
pub struct LoginFlow<A, S, N, F> {
    pub api: A,
    pub sessions: S,
    pub navigator: N,
    pub status: F,
    /// Destination when the page was opened without a `redirect` parameter
    pub landing_route: String,
}

impl<A, S, N, F> LoginFlow<A, S, N, F>
where
    A: MarketplaceApi,
    S: SessionStore,
    N: Navigator,
    F: FormStatus,
{
    /// Submits the credentials once
    ///
    /// Any previous error is cleared before the request goes out and the
    /// loading flag is lowered on every path out of this function.
    pub async fn submit(&self, form: LoginForm, redirect: Option<String>) -> LoginOutcome {
        self.status.set_error(None);
        let _loading = LoadingGuard::raise(&self.status);

        tracing::info!(username = %form.username, remember = form.remember, "submitting login");

        let outcome = match self.api.login(&form).await {
            Ok(LoginResponse {
                success: true,
                token: Some(token),
                user,
                ..
            }) if !token.is_empty() => {
                self.sessions.commit(
                    token,
                    user.unwrap_or_default(),
                    Persistence::from_remember(form.remember),
                );
                let target = post_login_target(redirect.as_deref(), &self.landing_route);
                tracing::info!(username = %form.username, ?target, "login succeeded");
                self.navigator.follow(&target);
                LoginOutcome::LoggedIn(target)
            }
            Ok(response) => {
                if response.success {
                    tracing::warn!("login response reported success without a token");
                }
                let message = response
                    .error
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| LOGIN_FAILED.to_string());
                LoginOutcome::Failed(message)
            }
            Err(err) => {
                tracing::warn!(error = %err, "login request failed");
                LoginOutcome::Failed(err.user_message(LOGIN_FAILED))
            }
        };

        if let LoginOutcome::Failed(message) = &outcome {
            self.status.set_error(Some(message.clone()));
        }

        outcome
    }
}
