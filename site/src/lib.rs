//! # redes-site
//!
//! Leptos SSR renderer for the *Redes Sociales Costa Rica* page: Costa Rican
//! and international legal frameworks on social media harms affecting
//! vulnerable populations.
//!
//! The page is produced as static HTML. Sections are Leptos components that
//! describe *what* to show; [`RenderHtml::to_html`] decides *how* it is
//! written out. No reactive runtime or hydration is involved.
//!
//! ## Quick Start
//!
//! ```rust
//! use redes_site::{render_site, types::SiteOptions};
//!
//! let html = render_site(&SiteOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - data model and render options
//! - [`content`] - built-in page text and the legal reference list
//! - [`cards`] - legal reference list -> card descriptors
//! - [`validate`] - id uniqueness and duplicate-title checks
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS and Content-Security-Policy

#![warn(rustdoc::missing_crate_level_docs)]

pub mod cards;
pub mod components;
pub mod content;
pub mod styles;
pub mod types;
pub mod validate;

use components::{ServiceGrid, SiteDocument};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::{CardDescriptor, SiteOptions};

pub use cards::render_cards;
pub use validate::{ContentError, duplicate_titles, validate_unique_ids};

/// Render the complete page.
///
/// Returns a full HTML document, including `<!DOCTYPE html>`.
///
/// # Example
///
/// ```rust
/// use redes_site::{render_site, types::{SectionId, SiteOptions}};
///
/// let options = SiteOptions {
///     sections: vec![SectionId::Services, SectionId::Footer],
///     ..Default::default()
/// };
/// let html = render_site(&options);
/// assert!(html.contains("id=\"services\""));
/// assert!(!html.contains("id=\"hero\""));
/// ```
pub fn render_site(options: &SiteOptions) -> String {
    let doc = view! { <SiteDocument options=options.clone() /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render only the card grid for the given descriptors, as an HTML fragment.
pub fn render_services(cards: &[CardDescriptor]) -> String {
    view! { <ServiceGrid cards=cards.to_vec() /> }.to_html()
}
