// web_app/components/common.rs - Reusable UI components
//
// Small building blocks shared by the auth forms and the marketplace.
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::prelude::*;

use crate::web_app::theme::use_theme;

/// Loading indicator component
///
/// Three pulsing dots over a terminal-style caption.
#[component]
pub fn Loading(
    /// Caption under the dots
    #[prop(default = ">_ LOADING...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12" role="status" aria-live="polite">
            <div class="flex gap-2">
                <span class="h-3 w-3 rounded-full bg-emerald-400 animate-pulse"></span>
                <span class="h-3 w-3 rounded-full bg-emerald-400 animate-pulse [animation-delay:150ms]"></span>
                <span class="h-3 w-3 rounded-full bg-emerald-400 animate-pulse [animation-delay:300ms]"></span>
            </div>
            <span class="mt-4 font-mono text-sm tracking-widest text-emerald-400">{message}</span>
        </div>
    }
}

/// Error display component
///
/// Block-level error for a whole section that failed to load.
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-950/40 border border-red-500/40 rounded-xl p-6 flex items-start gap-4" role="alert">
            <div class="bg-red-900/60 p-2 rounded-full text-red-300">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <div>
                <h3 class="text-red-200 font-bold mb-1 font-mono">"CONNECTION LOST"</h3>
                <p class="text-red-300 text-sm">{error}</p>
            </div>
        </div>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
}

impl AlertKind {
    pub fn class(self) -> &'static str {
        match self {
            AlertKind::Error => {
                "rounded-lg border border-red-300 bg-red-50 px-4 py-3 text-sm text-red-700 \
                 dark:border-red-500/50 dark:bg-red-950/40 dark:text-red-200"
            }
            AlertKind::Success => {
                "rounded-lg border border-emerald-300 bg-emerald-50 px-4 py-3 text-sm text-emerald-700 \
                 dark:border-emerald-500/50 dark:bg-emerald-950/40 dark:text-emerald-200"
            }
        }
    }
}

/// Inline banner above a form
///
/// Renders nothing while `message` is `None`.
#[component]
pub fn Alert(
    kind: AlertKind,
    /// Message to show, usually one of the form status signals
    message: Signal<Option<String>>,
) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! { <div class=kind.class() role="alert">{text}</div> }
        })
    }
}

/// Caption of a submit button for the current loading state
pub fn submit_label(loading: bool, idle: &'static str, busy: &'static str) -> &'static str {
    if loading {
        busy
    } else {
        idle
    }
}

/// Form submit button
///
/// Disabled and relabelled while the form's request is in flight.
#[component]
pub fn SubmitButton(
    /// Whether a request is in flight
    loading: Signal<bool>,
    /// Caption while idle
    idle_label: &'static str,
    /// Caption while loading
    busy_label: &'static str,
) -> impl IntoView {
    let class = "w-full px-4 py-3 bg-emerald-600 text-white rounded-lg hover:bg-emerald-500 \
                 transition-colors disabled:bg-gray-500 disabled:cursor-not-allowed \
                 font-semibold tracking-wide shadow-sm active:transform active:scale-95";

    view! {
        <button type="submit" class=class disabled=move || loading.get()>
            {move || submit_label(loading.get(), idle_label, busy_label)}
        </button>
    }
}

const INPUT_CLASS: &str = "w-full pl-10 py-2.5 border border-gray-300 rounded-lg bg-white \
                           text-gray-900 focus:ring-2 focus:ring-emerald-500 focus:border-transparent \
                           outline-none transition-shadow shadow-sm \
                           dark:bg-slate-900 dark:border-slate-700 dark:text-slate-100";

/// Labelled text input with a leading glyph
#[component]
pub fn TextInput(
    /// The current value
    value: RwSignal<String>,
    /// Element id, also the `for` of the label
    id: &'static str,
    label: &'static str,
    /// Glyph drawn inside the field on the left
    icon: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input type (text, email, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "off")]
    autocomplete: &'static str,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="block text-sm font-medium text-gray-700 dark:text-slate-300" for=id>
                {label}
            </label>
            <div class="relative">
                <span class="absolute inset-y-0 left-0 pl-3 flex items-center text-gray-400 pointer-events-none">
                    {icon}
                </span>
                <input
                    id=id
                    name=id
                    type=input_type
                    class=format!("{} pr-4", INPUT_CLASS)
                    placeholder=placeholder
                    autocomplete=autocomplete
                    required
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </div>
        </div>
    }
}

/// `type` attribute of a password field
pub fn password_input_type(visible: bool) -> &'static str {
    if visible {
        "text"
    } else {
        "password"
    }
}

/// Password input with an optional show/hide toggle
#[component]
pub fn PasswordInput(
    value: RwSignal<String>,
    id: &'static str,
    label: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(default = "current-password")]
    autocomplete: &'static str,
    /// Shared visibility flag; `None` renders a plain password field
    #[prop(optional)]
    visible: Option<RwSignal<bool>>,
    /// Extra content on the label row (e.g. a "forgot" link)
    #[prop(optional)]
    label_extra: Option<ViewFn>,
) -> impl IntoView {
    let input_type = move || password_input_type(visible.map(|v| v.get()).unwrap_or(false));

    view! {
        <div class="space-y-1.5">
            <div class="flex items-center justify-between">
                <label class="block text-sm font-medium text-gray-700 dark:text-slate-300" for=id>
                    {label}
                </label>
                {label_extra.map(|extra| extra.run())}
            </div>
            <div class="relative">
                <span class="absolute inset-y-0 left-0 pl-3 flex items-center text-gray-400 pointer-events-none">
                    "🔒"
                </span>
                <input
                    id=id
                    name=id
                    type=input_type
                    class=format!("{} pr-12", INPUT_CLASS)
                    placeholder=placeholder
                    autocomplete=autocomplete
                    required
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                {visible.map(|visible| view! {
                    <button
                        type="button"
                        class="absolute inset-y-0 right-0 pr-3 flex items-center text-gray-400 hover:text-gray-600"
                        aria-label="Toggle password visibility"
                        on:click=move |_| visible.update(|v| *v = !*v)
                    >
                        {move || if visible.get() { "🙈" } else { "👁️" }}
                    </button>
                })}
            </div>
        </div>
    }
}

/// Checkbox component
///
/// A styled checkbox with label.
#[component]
pub fn Checkbox(
    /// Whether the checkbox is checked
    checked: RwSignal<bool>,
    id: &'static str,
    /// Label text
    label: &'static str,
) -> impl IntoView {
    view! {
        <label class="flex items-center gap-3 cursor-pointer group" for=id>
            <input
                id=id
                name=id
                type="checkbox"
                class="rounded border-gray-300 text-emerald-600 focus:ring-emerald-500 h-4 w-4"
                prop:checked=move || checked.get()
                on:change=move |ev| checked.set(event_target_checked(&ev))
            />
            <span class="text-sm text-gray-600 group-hover:text-gray-900 dark:text-slate-400 dark:group-hover:text-slate-200 transition-colors">
                {label}
            </span>
        </label>
    }
}

/// Dark / light switch pinned to the corner of the auth pages
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            type="button"
            class="fixed top-4 right-4 z-50 h-10 w-10 rounded-full bg-white/80 shadow \
                   hover:bg-white dark:bg-slate-800/80 dark:hover:bg-slate-700 transition-colors"
            aria-label="Toggle theme"
            on:click=move |_| theme.toggle()
        >
            {move || theme.theme.get().toggle_icon()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_label() {
        assert_eq!(submit_label(false, "Register", "Creating account…"), "Register");
        assert_eq!(submit_label(true, "Register", "Creating account…"), "Creating account…");
    }

    #[test]
    fn test_password_input_type() {
        assert_eq!(password_input_type(false), "password");
        assert_eq!(password_input_type(true), "text");
    }

    #[test]
    fn test_alert_kind_classes() {
        assert!(AlertKind::Error.class().contains("bg-red-50"));
        assert!(AlertKind::Success.class().contains("bg-emerald-50"));
        assert!(AlertKind::Error.class().contains("dark:"));
    }
}
