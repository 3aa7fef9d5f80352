//! Light/dark theme resolution, application and toggle.
//!
//! The initial theme comes from a three-tier cascade: the preference stored
//! in `localStorage`, then the browser's `prefers-color-scheme` media query,
//! then `light`. The resolved theme is written to the `data-theme` and
//! `data-bs-theme` attributes of the `<html>` element. Toggle writes back to
//! `localStorage`. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// `localStorage` key holding the user's explicit choice.
pub const STORAGE_KEY: &str = "theme";

#[cfg(feature = "hydrate")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";
#[cfg(feature = "hydrate")]
const LIGHT_QUERY: &str = "(prefers-color-scheme: light)";

/// Display theme for the whole document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `light`/`dark` is ignored.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Toggle glyph: shows the theme a click switches to.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }
}

/// Preference signals read at startup.
///
/// The browser and OS preference are the same media-query answer at this
/// layer, so only one derived value is kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeSources {
    pub stored: Option<Theme>,
    pub derived: Option<Theme>,
}

impl ThemeSources {
    /// Stored beats derived beats the light default.
    pub fn resolve(&self) -> Theme {
        self.stored.or(self.derived).unwrap_or_default()
    }

    /// Console lines describing each source, in cascade order.
    pub fn diagnostics(&self) -> [String; 3] {
        let stored = label(self.stored);
        let derived = label(self.derived);
        [
            format!("User Pref: {stored}"),
            format!("Browser Pref: {derived}"),
            format!("OS Pref: {derived}"),
        ]
    }
}

fn label(theme: Option<Theme>) -> &'static str {
    theme.map_or("unknown", Theme::as_str)
}

/// Collapse the two color-scheme media queries into one signal.
/// Dark is checked first.
pub fn derive_from_media(prefers_dark: bool, prefers_light: bool) -> Option<Theme> {
    if prefers_dark {
        Some(Theme::Dark)
    } else if prefers_light {
        Some(Theme::Light)
    } else {
        None
    }
}

/// Read the stored preference and the color-scheme media queries.
pub fn read_sources() -> ThemeSources {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return ThemeSources::default();
        };

        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|raw| Theme::parse(&raw));

        let matches = |query: &str| {
            window
                .match_media(query)
                .ok()
                .flatten()
                .map_or(false, |mq| mq.matches())
        };
        let derived = derive_from_media(matches(DARK_QUERY), matches(LIGHT_QUERY));

        ThemeSources { stored, derived }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ThemeSources::default()
    }
}

/// Resolve the startup theme, log each source, and apply the result.
pub fn resolve_initial_theme() -> Theme {
    let sources = read_sources();
    #[cfg(feature = "hydrate")]
    {
        for line in sources.diagnostics() {
            log::info!("{line}");
        }
    }
    let theme = sources.resolve();
    apply(theme);
    theme
}

/// Set the theme attributes on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", theme.as_str());
            let _ = el.set_attribute("data-bs-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, persist it to localStorage, and apply it.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    persist(next);
    apply(next);
    next
}

fn persist(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
