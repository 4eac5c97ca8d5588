//! Glyphs from the [Bootstrap Icons](https://icons.getbootstrap.com/) font.
//!
//! Icons are plain `<i>` tags carrying the icon class; the stylesheet linked
//! from [`crate::types::AssetOptions::icons_css`] draws them.

use leptos::prelude::*;

/// Renders a Bootstrap Icons glyph.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon name=ICON_CHECK_ALL /> }
/// ```
#[component]
pub fn Icon(
    /// Full class list, e.g. `bi bi-globe`
    #[prop(into)]
    name: String,
) -> impl IntoView {
    view! { <i class=name></i> }
}

/// Double check mark (tab bullet lists)
pub const ICON_CHECK_ALL: &str = "bi bi-check2-all";

/// Check mark in a circle (about bullet list)
pub const ICON_CHECK_CIRCLE: &str = "bi bi-check2-circle";

/// Right arrow (read-more links)
pub const ICON_ARROW_RIGHT: &str = "bi bi-arrow-right";

/// Hamburger menu (mobile navigation toggle)
pub const ICON_LIST: &str = "bi bi-list";

pub const ICON_CHEVRON_LEFT: &str = "bi bi-chevron-left";
pub const ICON_CHEVRON_RIGHT: &str = "bi bi-chevron-right";
