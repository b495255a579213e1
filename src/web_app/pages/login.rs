// web_app/pages/login.rs - Login page component
//
// Binds the form signals to a `LoginFlow`. The flow owns everything that
// happens after submit; this file only wires signals and renders.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::web_app::api::HttpApi;
use crate::web_app::app::use_app_config;
use crate::web_app::components::*;
use crate::web_app::flows::{LoginFlow, SignalFormStatus};
use crate::web_app::model::LoginForm;
use crate::web_app::navigation::RouterNavigator;
use crate::web_app::paths;
use crate::web_app::session::use_session;

/// Login page
///
/// Honors a `?redirect=` parameter as the post-login destination.
#[component]
pub fn LoginPage() -> impl IntoView {
    let config = use_app_config();
    let session = use_session();
    let navigate = use_navigate();
    let query = use_query_map();

    // Form state
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let show_password = RwSignal::new(false);
    let status = SignalFormStatus::new();

    let login_action = Action::new_local(move |(form, redirect): &(LoginForm, Option<String>)| {
        let form = form.clone();
        let redirect = redirect.clone();
        let flow = LoginFlow {
            api: HttpApi::new(&config),
            sessions: session,
            navigator: RouterNavigator::new(navigate.clone()),
            status,
            landing_route: config.landing_route.clone(),
        };
        async move { flow.submit(form, redirect).await }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm {
            username: username.get_untracked(),
            password: password.get_untracked(),
            remember: remember.get_untracked(),
        };
        let redirect = query.with_untracked(|q| q.get(paths::REDIRECT_PARAM));
        login_action.dispatch((form, redirect));
    };

    view! {
        <ThemeToggle />
        <AuthCard>
            <BrandPanel
                tagline="The elite platform for ethical hackers and IT security experts to sharpen their skills."
                show_status=true
            />

            <div class="p-8 md:p-12 flex flex-col justify-center">
                <FormHeader
                    title="Welcome Back"
                    subtitle="Enter your credentials to access the terminal."
                />

                // Error banner
                <div class="mb-6">
                    <Alert kind=AlertKind::Error message=Signal::from(status.error) />
                </div>

                <form class="space-y-5" on:submit=on_submit>
                    <TextInput
                        value=username
                        id="username"
                        label="Username"
                        icon="@"
                        placeholder="Enter username"
                        autocomplete="username"
                    />
                    <PasswordInput
                        value=password
                        id="password"
                        label="Password"
                        placeholder="Enter password"
                        visible=show_password
                        label_extra=ViewFn::from(|| view! {
                            <a href="#" class="text-xs text-emerald-600 hover:text-emerald-500 dark:text-emerald-400">
                                "Forgot Password?"
                            </a>
                        })
                    />
                    <Checkbox checked=remember id="remember" label="Keep my session active" />
                    <SubmitButton
                        loading=Signal::from(status.loading)
                        idle_label="Sign In to Laboratory"
                        busy_label="Signing in…"
                    />
                </form>

                <p class="mt-8 text-center text-sm text-gray-500 dark:text-slate-400">
                    "Not a member yet? "
                    <A href={paths::REGISTER} {..} class="font-semibold text-emerald-600 hover:text-emerald-500 dark:text-emerald-400">
                        "Register here"
                    </A>
                </p>

                <MobileBrand version="Secure Terminal v4.2.0" />
            </div>
        </AuthCard>
    }
}
