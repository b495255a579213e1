// web_app/pages/register.rs - Registration page component

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::web_app::api::HttpApi;
use crate::web_app::app::use_app_config;
use crate::web_app::components::*;
use crate::web_app::flows::{RegisterFlow, SignalFormStatus};
use crate::web_app::model::RegistrationForm;
use crate::web_app::navigation::RouterNavigator;
use crate::web_app::paths;

/// Account creation page
///
/// The fields keep their contents after a failed attempt so the user can
/// correct and resubmit.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let config = use_app_config();
    let navigate = use_navigate();

    // Form state
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let status = SignalFormStatus::new();

    let register_action = Action::new_local(move |form: &RegistrationForm| {
        let form = form.clone();
        let flow = RegisterFlow {
            api: HttpApi::new(&config),
            navigator: RouterNavigator::new(navigate.clone()),
            status,
            login_route: config.login_route.clone(),
            redirect_delay: config.register_redirect_delay(),
        };
        async move { flow.submit(&form).await }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        register_action.dispatch(RegistrationForm {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm: confirm.get_untracked(),
        });
    };

    view! {
        <AuthCard>
            <BrandPanel tagline="Create your secure access to the offensive security laboratory." />

            <div class="p-8 md:p-12 flex flex-col justify-center">
                <FormHeader
                    title="Create Account"
                    subtitle="Register to access the Pentest Laboratory."
                />

                // Status banners
                <div class="mb-6 space-y-3">
                    <Alert kind=AlertKind::Error message=Signal::from(status.error) />
                    <Alert kind=AlertKind::Success message=Signal::from(status.success) />
                </div>

                <form class="space-y-5" on:submit=on_submit>
                    <TextInput
                        value=username
                        id="username"
                        label="Username"
                        icon="@"
                        placeholder="Choose a username"
                        autocomplete="username"
                    />
                    <TextInput
                        value=email
                        id="email"
                        label="Email"
                        icon="✉️"
                        placeholder="you@example.com"
                        input_type="email"
                        autocomplete="email"
                    />
                    <PasswordInput
                        value=password
                        id="password"
                        label="Password"
                        placeholder="Create a password"
                        autocomplete="new-password"
                        visible=show_password
                    />
                    <PasswordInput
                        value=confirm
                        id="confirm"
                        label="Confirm Password"
                        placeholder="Repeat your password"
                        autocomplete="new-password"
                    />
                    <SubmitButton
                        loading=Signal::from(status.loading)
                        idle_label="Register"
                        busy_label="Creating account…"
                    />
                </form>

                <p class="mt-8 text-center text-sm text-gray-500 dark:text-slate-400">
                    "Already have an account? "
                    <A href={paths::LOGIN} {..} class="font-semibold text-emerald-600 hover:text-emerald-500 dark:text-emerald-400">
                        "Sign in"
                    </A>
                </p>

                <MobileBrand />
            </div>
        </AuthCard>
    }
}
