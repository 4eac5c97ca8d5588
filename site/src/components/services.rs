//! Legal reference grid.
//!
//! One card per [`CardDescriptor`], in the order given. The card key lands
//! in `data-key`, the accent color on the icon, and the delay in
//! `data-aos-delay`.

use leptos::prelude::*;

use super::SectionTitle;
use crate::content::{SERVICES_SUBTITLE, SERVICES_TITLE};
use crate::types::CardDescriptor;

/// Services section with its title and card grid.
#[component]
pub fn Services(cards: Vec<CardDescriptor>) -> impl IntoView {
    view! {
        <section id="services" class="services section">
            <SectionTitle title=SERVICES_TITLE subtitle=SERVICES_SUBTITLE />

            <div class="container">
                <ServiceGrid cards=cards />
            </div>
        </section>
    }
}

/// The bare card grid, without the surrounding section.
#[component]
pub fn ServiceGrid(cards: Vec<CardDescriptor>) -> impl IntoView {
    view! {
        <div class="row gy-4">
            {cards.into_iter().map(|card| view! { <ServiceCard card=card /> }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
pub fn ServiceCard(card: CardDescriptor) -> impl IntoView {
    let CardDescriptor {
        key,
        title,
        description,
        icon,
        color,
        delay,
    } = card;

    // Empty values stay out of the markup instead of producing `color: ;`
    let icon_style = if color.is_empty() {
        String::new()
    } else {
        format!("color: {}", color)
    };
    let glyph = (!icon.is_empty()).then(|| view! { <i class=icon></i> });

    view! {
        <div
            class="col-lg-4 col-md-6"
            data-key=key.to_string()
            data-aos="fade-up"
            data-aos-delay=delay.to_string()
        >
            <div class="service-item position-relative">
                <div class="icon" style=icon_style>
                    {glyph}
                </div>
                <div class="stretched-link">
                    <h3>{title}</h3>
                </div>
                <p>{description}</p>
            </div>
        </div>
    }
}
