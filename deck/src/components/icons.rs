//! SVG icon rendering and icon sets.
//!
//! Slides carry icons as opaque [`IconGlyph`] values. Deck files refer to
//! icons by name, and an [`IconSet`] turns names into glyphs, so the renderer
//! never depends on a particular icon library. [`PhosphorIcons`] is the
//! bundled set, taken from [Phosphor Icons](https://phosphoricons.com/)
//! (Regular weight).

use std::collections::HashMap;

use leptos::prelude::*;

use crate::types::IconGlyph;

/// Renders an inline SVG icon from a glyph.
///
/// # Props
///
/// * `glyph` - SVG path data and view box
/// * `size` - Icon size in pixels (default: "24")
/// * `class` - Additional CSS classes (default: "")
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon glyph=IconGlyph::new(ICON_CODE) size="20" /> }
/// ```
#[component]
pub fn Icon(
    /// Path data and view box
    glyph: IconGlyph,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="currentColor"
            viewBox=glyph.view_box
            class=class
            aria-hidden="true"
        >
            <path d=glyph.path></path>
        </svg>
    }
}

/// Resolves icon names to glyphs.
///
/// Implement this to plug a different icon library into deck loading.
pub trait IconSet {
    /// Glyph for `name`, or `None` when the set has no such icon.
    fn resolve(&self, name: &str) -> Option<IconGlyph>;
}

impl IconSet for HashMap<String, IconGlyph> {
    fn resolve(&self, name: &str) -> Option<IconGlyph> {
        self.get(name).cloned()
    }
}

impl<T: IconSet + ?Sized> IconSet for &T {
    fn resolve(&self, name: &str) -> Option<IconGlyph> {
        (**self).resolve(name)
    }
}

/// Icon set that knows no names. Decks resolved with it must not use named icons.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoIcons;

impl IconSet for NoIcons {
    fn resolve(&self, _name: &str) -> Option<IconGlyph> {
        None
    }
}

/// The bundled Phosphor icons, addressed by kebab-case name.
#[derive(Clone, Copy, Debug, Default)]
pub struct PhosphorIcons;

impl PhosphorIcons {
    /// Every name this set resolves, with its path data.
    pub const NAMES: &'static [(&'static str, &'static str)] = &[
        ("arrow-right", ICON_ARROW_RIGHT),
        ("code", ICON_CODE),
        ("stack", ICON_STACK),
        ("layers", ICON_STACK),
        ("paper-plane", ICON_PAPER_PLANE),
        ("send", ICON_PAPER_PLANE),
        ("check-circle", ICON_CHECK_CIRCLE),
        ("terminal", ICON_TERMINAL),
        ("warning-circle", ICON_WARNING_CIRCLE),
    ];
}

impl IconSet for PhosphorIcons {
    fn resolve(&self, name: &str) -> Option<IconGlyph> {
        Self::NAMES
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, path)| IconGlyph::new(*path))
    }
}

// =============================================================================
// Phosphor Icons (Regular weight) - https://phosphoricons.com/
// =============================================================================

/// Arrow pointing right
pub const ICON_ARROW_RIGHT: &str = "M221.66,133.66l-72,72a8,8,0,0,1-11.32-11.32L196.69,136H40a8,8,0,0,1,0-16H196.69L138.34,61.66a8,8,0,0,1,11.32-11.32l72,72A8,8,0,0,1,221.66,133.66Z";

/// Angle brackets with slash (Code)
pub const ICON_CODE: &str = "M69.12,94.15,28.5,128l40.62,33.85a8,8,0,1,1-10.24,12.29l-48-40a8,8,0,0,1,0-12.29l48-40a8,8,0,0,1,10.24,12.3Zm176,27.7-48-40a8,8,0,1,0-10.24,12.3L227.5,128l-40.62,33.85a8,8,0,1,0,10.24,12.29l48-40a8,8,0,0,0,0-12.29ZM162.73,32.48a8,8,0,0,0-10.25,4.79l-64,176a8,8,0,0,0,4.79,10.26A8.14,8.14,0,0,0,96,224a8,8,0,0,0,7.52-5.27l64-176A8,8,0,0,0,162.73,32.48Z";

/// Stacked layers (Stack)
pub const ICON_STACK: &str = "M230.91,172A8,8,0,0,1,228,182.91l-96,56a8,8,0,0,1-8.06,0l-96-56A8,8,0,0,1,36,169.09l92,53.65,92-53.65A8,8,0,0,1,230.91,172ZM220,121.09l-92,53.65L36,121.09A8,8,0,0,0,28,134.91l96,56a8,8,0,0,0,8.06,0l96-56A8,8,0,1,0,220,121.09ZM24,80a8,8,0,0,1,4-6.91l96-56a8,8,0,0,1,8.06,0l96,56a8,8,0,0,1,0,13.82l-96,56a8,8,0,0,1-8.06,0l-96-56A8,8,0,0,1,24,80Zm23.88,0L128,126.74,208.12,80,128,33.26Z";

/// Paper plane (PaperPlaneRight)
pub const ICON_PAPER_PLANE: &str = "M231.87,114l-168-95.89A16,16,0,0,0,40.92,37.34L71.55,128,40.92,218.67A16,16,0,0,0,56,240a16.15,16.15,0,0,0,7.93-2.1l167.92-96.05a16,16,0,0,0,0-27.89ZM56,224a.56.56,0,0,0,0-.12L85.74,136H144a8,8,0,0,0,0-16H85.74L56.06,32.16A.46.46,0,0,0,56,32l168,95.83Z";

/// Check mark inside a circle
pub const ICON_CHECK_CIRCLE: &str = "M173.66,98.34a8,8,0,0,1,0,11.32l-56,56a8,8,0,0,1-11.32,0l-24-24a8,8,0,0,1,11.32-11.32L112,148.69l50.34-50.35A8,8,0,0,1,173.66,98.34ZM232,128A104,104,0,1,1,128,24,104.11,104.11,0,0,1,232,128Zm-16,0a88,88,0,1,0-88,88A88.1,88.1,0,0,0,216,128Z";

/// Terminal/command line icon
pub const ICON_TERMINAL: &str = "M216,48H40A16,16,0,0,0,24,64V192a16,16,0,0,0,16,16H216a16,16,0,0,0,16-16V64A16,16,0,0,0,216,48ZM40,64H216V192H40V64Zm84,84H92a8,8,0,0,1-5.66-13.66l32-32a8,8,0,0,1,11.32,11.32L103.31,140l26.35,26.34A8,8,0,0,1,124,148Zm92,0H152a8,8,0,0,1,0-16h64a8,8,0,0,1,0,16Z";

/// Warning/alert circle icon
pub const ICON_WARNING_CIRCLE: &str = "M128,24A104,104,0,1,0,232,128,104.11,104.11,0,0,0,128,24Zm0,192a88,88,0,1,1,88-88A88.1,88.1,0,0,1,128,216Zm-8-80V80a8,8,0,0,1,16,0v56a8,8,0,0,1-16,0Zm8,40a12,12,0,1,1,12-12A12,12,0,0,1,128,176Z";
