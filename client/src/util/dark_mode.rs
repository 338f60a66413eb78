//! Dark-mode marker on the document root.
//!
//! Adds or removes the `dark` class on the `<html>` element so conditional
//! styles activate. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Marking is best-effort browser-only behavior; native builds no-op so the
//! theme logic stays testable.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

pub const DARK_CLASS: &str = "dark";

/// Something that can show or hide the dark marker.
pub trait ThemeSurface {
    fn set_dark(&self, enabled: bool);
}

/// The `<html>` element of the current document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl ThemeSurface for DocumentRoot {
    fn set_dark(&self, enabled: bool) {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.document_element())
            {
                let _ = el.class_list().toggle_with_force(DARK_CLASS, enabled);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = enabled;
        }
    }
}
