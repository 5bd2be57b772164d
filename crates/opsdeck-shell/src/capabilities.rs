//! Injected collaborators for theme, session and search.
//!
//! The shell renders a theme toggle, a logout button and a search trigger,
//! but owns none of the behavior behind them. Hosts hand in implementations
//! of these traits; [`ShellCapabilities::detached`] provides inert ones for
//! contexts without a real host (the CLI, tests).

use std::sync::Arc;

use opsdeck_settings::ColorScheme;
use parking_lot::Mutex;

// ─────────────────────────────────────────────────────────────────────────────
// Traits
// ─────────────────────────────────────────────────────────────────────────────

/// Color scheme owner.
pub trait ThemeControl: Send + Sync {
    /// Whether the dark scheme is active.
    fn is_dark_mode(&self) -> bool;

    /// Switch to `scheme`.
    fn set_color_scheme(&self, scheme: ColorScheme);
}

/// Authentication session owner.
pub trait SessionControl: Send + Sync {
    /// Whether a user is signed in.
    fn is_authenticated(&self) -> bool;

    /// End the session.
    fn logout(&self);
}

/// Global search / command palette.
pub trait CommandPalette: Send + Sync {
    /// Open the palette.
    fn open(&self);
}

// ─────────────────────────────────────────────────────────────────────────────
// Bundle
// ─────────────────────────────────────────────────────────────────────────────

/// The capabilities a shell is constructed with.
#[derive(Clone)]
pub struct ShellCapabilities {
    /// Theme owner.
    pub theme: Arc<dyn ThemeControl>,
    /// Session owner.
    pub session: Arc<dyn SessionControl>,
    /// Command palette.
    pub palette: Arc<dyn CommandPalette>,
}

impl ShellCapabilities {
    /// Bundle three capabilities.
    pub fn new(
        theme: Arc<dyn ThemeControl>,
        session: Arc<dyn SessionControl>,
        palette: Arc<dyn CommandPalette>,
    ) -> Self {
        Self {
            theme,
            session,
            palette,
        }
    }

    /// In-memory theme starting at `scheme`, signed-out session, no palette.
    pub fn detached_with_scheme(scheme: ColorScheme) -> Self {
        Self::new(
            Arc::new(InMemoryTheme::new(scheme)),
            Arc::new(SignedOut),
            Arc::new(NoPalette),
        )
    }

    /// Light in-memory theme, signed-out session, no palette.
    pub fn detached() -> Self {
        Self::detached_with_scheme(ColorScheme::Light)
    }
}

impl std::fmt::Debug for ShellCapabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShellCapabilities")
            .field("dark_mode", &self.theme.is_dark_mode())
            .field("authenticated", &self.session.is_authenticated())
            .finish_non_exhaustive()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Inert implementations
// ─────────────────────────────────────────────────────────────────────────────

/// Theme held in memory only.
#[derive(Debug, Default)]
pub struct InMemoryTheme {
    scheme: Mutex<ColorScheme>,
}

impl InMemoryTheme {
    /// Start at `scheme`.
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme: Mutex::new(scheme),
        }
    }

    /// Current scheme.
    pub fn scheme(&self) -> ColorScheme {
        *self.scheme.lock()
    }
}

impl ThemeControl for InMemoryTheme {
    fn is_dark_mode(&self) -> bool {
        self.scheme() == ColorScheme::Dark
    }

    fn set_color_scheme(&self, scheme: ColorScheme) {
        *self.scheme.lock() = scheme;
    }
}

/// Session that is never authenticated; logout does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct SignedOut;

impl SessionControl for SignedOut {
    fn is_authenticated(&self) -> bool {
        false
    }

    fn logout(&self) {}
}

/// Palette that cannot be opened.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPalette;

impl CommandPalette for NoPalette {
    fn open(&self) {}
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
