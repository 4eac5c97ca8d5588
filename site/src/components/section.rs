//! Section plumbing: the shared title block and layout dispatch.

use leptos::prelude::*;

use super::{About, CallToAction, Features, Footer, Header, Hero, Problematica, Services};
use crate::cards::render_cards;
use crate::content::legal_references;
use crate::types::{SectionId, SiteOptions};

/// Centered heading used at the top of most sections.
#[component]
pub fn SectionTitle(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="container section-title" data-aos="fade-up">
            <h2>{title}</h2>
            <p>{subtitle}</p>
        </div>
    }
}

/// View for one section of the layout.
pub fn section_view(id: SectionId, options: &SiteOptions) -> AnyView {
    match id {
        SectionId::Header => view! { <Header title=options.title.clone() /> }.into_any(),
        SectionId::Hero => view! { <Hero interval_ms=options.carousel_interval_ms /> }.into_any(),
        SectionId::About => view! { <About /> }.into_any(),
        SectionId::Features => {
            view! { <Features image_base=options.assets.image_base.clone() /> }.into_any()
        }
        SectionId::CallToAction => view! { <CallToAction /> }.into_any(),
        SectionId::Services => {
            view! { <Services cards=render_cards(legal_references()) /> }.into_any()
        }
        SectionId::Problematica => view! { <Problematica /> }.into_any(),
        SectionId::Footer => view! { <Footer /> }.into_any(),
    }
}
