//! Leptos UI components for rendering the page.
//!
//! Each section is a `#[component]` function from a (possibly empty) prop
//! list to a view tree. [`crate::render_site`] turns the tree into HTML.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument
//! ├── Header
//! ├── Hero
//! ├── About
//! ├── Features
//! ├── CallToAction
//! ├── Services
//! │   └── ServiceGrid
//! │       └── ServiceCard (per card descriptor)
//! ├── Problematica   (opt-in)
//! └── Footer         (opt-in)
//! ```
//!
//! Sections appear in the order given by [`crate::types::SiteOptions::sections`].

mod about;
mod call_to_action;
mod document;
mod features;
mod footer;
mod header;
mod hero;
mod icons;
mod problematica;
mod section;
mod services;

pub use about::About;
pub use call_to_action::CallToAction;
pub use document::{SiteDocument, PAGE_SCRIPT};
pub use features::Features;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use icons::*;
pub use problematica::Problematica;
pub use section::{section_view, SectionTitle};
pub use services::{ServiceCard, ServiceGrid, Services};
