//! Data types for the page content and render options.
//!
//! These types follow the same conventions throughout:
//!
//! - **Serializable** - card lists can be dumped as JSON via serde
//! - **Clone-friendly** - components take owned data, no borrowing across views
//! - **Default-able** - build partial records with `..Default::default()`
//!
//! # Example
//!
//! ```rust
//! use redes_site::types::LegalReferenceItem;
//!
//! let item = LegalReferenceItem {
//!     id: 7,
//!     title: "Ley N°8968".into(),
//!     color: "#20c997".into(),
//!     delay: 300,
//!     ..Default::default()
//! };
//! assert!(item.icon.is_empty());
//! ```

use serde::{Deserialize, Serialize};

/// One displayable record summarizing a law or legal provision.
///
/// Missing text fields are empty strings. They are carried through the
/// card renderer untouched; the services grid decides how to show them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegalReferenceItem {
    /// Rendering key, unique within a list
    pub id: u32,
    /// Law or article name
    pub title: String,
    /// Free text summary
    pub description: String,
    /// Bootstrap Icons class list, e.g. `bi bi-globe`
    pub icon: String,
    /// CSS color used as the card accent
    pub color: String,
    /// Entrance animation offset in milliseconds
    pub delay: u32,
}

/// Renderable card produced from a [`LegalReferenceItem`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDescriptor {
    /// Equals the source item's `id`
    pub key: u32,
    pub title: String,
    pub description: String,
    pub icon: String,
    /// Accent color applied to the icon
    pub color: String,
    /// Animation-start offset (`data-aos-delay`)
    pub delay: u32,
}

/// Page sections in the order they can be laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    Header,
    Hero,
    About,
    Features,
    CallToAction,
    Services,
    Problematica,
    Footer,
}

impl SectionId {
    /// Every section, in page order.
    pub const ALL: [SectionId; 8] = [
        SectionId::Header,
        SectionId::Hero,
        SectionId::About,
        SectionId::Features,
        SectionId::CallToAction,
        SectionId::Services,
        SectionId::Problematica,
        SectionId::Footer,
    ];

    /// Layout mounted by default: the problem statement and footer are opt-in.
    pub const DEFAULT_LAYOUT: [SectionId; 6] = [
        SectionId::Header,
        SectionId::Hero,
        SectionId::About,
        SectionId::Features,
        SectionId::CallToAction,
        SectionId::Services,
    ];

    /// Kebab-case name, as used in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Header => "header",
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Features => "features",
            SectionId::CallToAction => "call-to-action",
            SectionId::Services => "services",
            SectionId::Problematica => "problematica",
            SectionId::Footer => "footer",
        }
    }
}

/// Bootstrap Icons stylesheet linked unless the options name another one.
pub const DEFAULT_ICONS_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css";

/// Stylesheet and image locations referenced by the page.
///
/// An empty `icons_css` drops the stylesheet link; glyphs then render unstyled.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetOptions {
    /// URL of the Bootstrap Icons stylesheet
    pub icons_css: String,
    /// Directory (relative or absolute URL) holding the tab images
    pub image_base: String,
}

impl Default for AssetOptions {
    fn default() -> Self {
        Self {
            icons_css: DEFAULT_ICONS_CSS.into(),
            image_base: "assets/img".into(),
        }
    }
}

/// Scroll-triggered entrance animation settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationOptions {
    /// Transition duration in milliseconds
    pub duration_ms: u32,
    /// Animate each element only the first time it scrolls into view
    pub once: bool,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            duration_ms: 1000,
            once: true,
        }
    }
}

/// Everything [`crate::render_site`] needs besides the built-in content.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteOptions {
    /// Document `<title>` and brand name in the header
    pub title: String,
    /// `lang` attribute of the `<html>` element
    pub lang: String,
    pub assets: AssetOptions,
    pub animation: AnimationOptions,
    /// Hero carousel auto-advance interval in milliseconds
    pub carousel_interval_ms: u32,
    /// Sections to render, in order
    pub sections: Vec<SectionId>,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            title: "Redes Sociales Costa Rica".into(),
            lang: "es".into(),
            assets: AssetOptions::default(),
            animation: AnimationOptions::default(),
            carousel_interval_ms: 5000,
            sections: SectionId::DEFAULT_LAYOUT.to_vec(),
        }
    }
}

/// Two or more items sharing a title (reported, not rejected).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DuplicateTitle {
    pub title: String,
    /// Ids of every item carrying this title, in list order
    pub ids: Vec<u32>,
}
