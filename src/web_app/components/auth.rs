// web_app/components/auth.rs - Shared chrome of the login and register pages
//
// Both auth pages are a two-panel card: branding on the left (hidden on small
// screens) and the form on the right, with a compact brand line under the
// form on mobile.

use leptos::prelude::*;

/// Version line shown under the branding
pub const ENVIRONMENT_VERSION: &str = "Secure Environment v4.2.0";

/// Centered two-panel card used by the auth pages
#[component]
pub fn AuthCard(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center p-4 bg-gray-100 dark:bg-slate-950 transition-colors">
            <div class="w-full max-w-5xl grid md:grid-cols-2 overflow-hidden rounded-2xl shadow-2xl \
                        bg-white dark:bg-slate-900 border border-gray-200 dark:border-slate-800">
                {children()}
            </div>
        </div>
    }
}

/// Left-hand branding panel
#[component]
pub fn BrandPanel(
    /// Sentence under the "Pentest Lab" title
    tagline: &'static str,
    /// Show the "Systems Online" / "Encrypted Session" indicators
    #[prop(default = false)]
    show_status: bool,
) -> impl IntoView {
    view! {
        <div class="hidden md:flex relative flex-col justify-between p-10 bg-slate-950 text-slate-100 overflow-hidden">
            // Grid backdrop
            <div class="absolute inset-0 opacity-10 bg-[linear-gradient(rgba(16,185,129,.4)_1px,transparent_1px),linear-gradient(90deg,rgba(16,185,129,.4)_1px,transparent_1px)] bg-[size:32px_32px]"></div>
            <div class="absolute inset-0 bg-gradient-to-br from-emerald-500/10 via-transparent to-sky-500/10"></div>

            <div class="relative space-y-6">
                <div class="h-14 w-14 rounded-xl bg-emerald-500/15 border border-emerald-500/40 flex items-center justify-center">
                    <span class="text-3xl">"🛡"</span>
                </div>
                <h1 class="text-4xl font-bold tracking-tight">
                    "Pentest " <span class="text-emerald-400">"Lab"</span>
                </h1>
                <p class="text-slate-400 leading-relaxed max-w-sm">{tagline}</p>

                {show_status.then(|| view! {
                    <ul class="space-y-3 pt-4 font-mono text-sm">
                        <li class="flex items-center gap-3">
                            <span class="h-2 w-2 rounded-full bg-emerald-400"></span>
                            <span class="text-slate-300">"Systems Online"</span>
                        </li>
                        <li class="flex items-center gap-3">
                            <span class="h-2 w-2 rounded-full bg-sky-400 animate-pulse"></span>
                            <span class="text-slate-300">"Encrypted Session"</span>
                        </li>
                    </ul>
                })}
            </div>

            <div class="relative font-mono text-xs text-slate-500">{ENVIRONMENT_VERSION}</div>
        </div>
    }
}

/// Compact brand line shown under the form on small screens
#[component]
pub fn MobileBrand(
    #[prop(default = ENVIRONMENT_VERSION)]
    version: &'static str,
) -> impl IntoView {
    view! {
        <div class="md:hidden mt-10 flex items-center justify-center gap-2 text-sm text-gray-500 dark:text-slate-500">
            <span>"🛡"</span>
            <span class="font-semibold text-gray-700 dark:text-slate-300">"Pentest Lab"</span>
            <span class="font-mono text-xs">{version}</span>
        </div>
    }
}

/// Heading block above a form
#[component]
pub fn FormHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="mb-8">
            <h2 class="text-2xl font-bold text-gray-900 dark:text-slate-100">{title}</h2>
            <p class="mt-1 text-sm text-gray-500 dark:text-slate-400">{subtitle}</p>
        </div>
    }
}
