// web_app/theme.rs - Dark / light theme toggle
//
// The choice lives in a signal for the lifetime of the page; it is not
// persisted anywhere.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Glyph on the toggle button (shows the theme you would switch to)
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }

    /// Class put on the page root; Tailwind `dark:` variants key off it
    pub fn root_class(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "",
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        self.theme.update(|theme| *theme = theme.toggled());
    }
}

/// Provides the theme context and applies the theme class to its subtree
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let theme = RwSignal::new(Theme::default());
    provide_context(ThemeContext { theme });

    view! {
        <div class=move || theme.get().root_class()>
            {children()}
        </div>
    }
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| ThemeContext {
        theme: RwSignal::new(Theme::default()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_toggle_icon_points_at_other_theme() {
        assert_eq!(Theme::Dark.toggle_icon(), "☀️");
        assert_eq!(Theme::Light.toggle_icon(), "🌙");
    }
}
