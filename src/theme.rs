//! Theme Provider
//!
//! Light/dark preference persisted to local storage under `theme` and applied
//! as the `dark` class on the document element.

use leptos::logging::warn;
use leptos::prelude::*;

const STORAGE_KEY: &str = "theme";
const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Saved preference wins; otherwise follow the system setting
    pub fn resolve(saved: Option<&str>, prefers_dark: bool) -> Self {
        match saved.and_then(Theme::parse) {
            Some(theme) => theme,
            None if prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }
}

// ========================
// Browser Bindings
// ========================

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn saved_theme() -> Option<String> {
    local_storage()?.get_item(STORAGE_KEY).ok().flatten()
}

fn save_theme(theme: Theme) {
    let saved = local_storage().map(|storage| storage.set_item(STORAGE_KEY, theme.as_str()));
    if !matches!(saved, Some(Ok(()))) {
        warn!("[THEME] Could not persist theme preference");
    }
}

fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let _ = match theme {
        Theme::Dark => classes.add_1(DARK_CLASS),
        Theme::Light => classes.remove_1(DARK_CLASS),
    };
}

// ========================
// Context
// ========================

/// Theme state shared with every component under `ThemeProvider`
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    /// Flip the theme, persist it and apply it to the document
    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        self.set_theme.set(next);
        save_theme(next);
        apply_theme(next);
    }
}

/// Provides `ThemeContext` to its children
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial = Theme::resolve(saved_theme().as_deref(), system_prefers_dark());
    apply_theme(initial);

    let (theme, set_theme) = signal(initial);
    provide_context(ThemeContext { theme, set_theme });

    children()
}

/// Access the theme; calling this outside `ThemeProvider` is a bug
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("use_theme must be used within a ThemeProvider")
}
