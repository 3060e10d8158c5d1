//! Light/dark theme control.
//!
//! The theme flag lives in the root component. Every change is pushed to a
//! [`ThemeSurface`], which for the real app is the document root element:
//! the `dark` class is present on `<html>` exactly while the dark theme is
//! active, so any descendant can style itself conditionally.

use store_types::{DARK_MARKER, Theme};

/// Something a theme can be applied to.
pub trait ThemeSurface {
    fn apply(&self, theme: Theme);
}

/// The `<html>` element of the current document.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DocumentRoot;

impl ThemeSurface for DocumentRoot {
    fn apply(&self, theme: Theme) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };

        if let Err(e) = root
            .class_list()
            .toggle_with_force(DARK_MARKER, theme.is_dark())
        {
            log::warn!("failed to apply {theme} theme: {e:?}");
        }
    }
}

/// Keeps a surface in sync with the theme flag.
///
/// Holds only what was last applied; the flag itself belongs to the caller.
#[derive(Debug)]
pub struct ThemeController<S: ThemeSurface> {
    surface: S,
    applied: Option<Theme>,
}

impl<S: ThemeSurface> ThemeController<S> {
    /// Create a controller. Nothing is applied until the first [`sync`](Self::sync).
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            applied: None,
        }
    }

    /// Apply `theme` unless it is already on the surface.
    ///
    /// Returns whether the surface was touched.
    pub fn sync(&mut self, theme: Theme) -> bool {
        if self.applied == Some(theme) {
            return false;
        }
        self.surface.apply(theme);
        self.applied = Some(theme);
        true
    }
}
