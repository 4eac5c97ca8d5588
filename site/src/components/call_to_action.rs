//! Call-to-action banner.

use leptos::prelude::*;

use crate::content::{CTA_BODY, CTA_BUTTON, CTA_HEADING};

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section id="call-to-action" class="call-to-action section dark-background">
            <div class="container">
                <div class="row" data-aos="zoom-in" data-aos-delay="100">
                    <div class="col-xl-9 text-center text-xl-start">
                        <h3>{CTA_HEADING}</h3>
                        <p>{CTA_BODY}</p>
                    </div>
                    <div class="col-xl-3 cta-btn-container text-center">
                        <a class="cta-btn align-middle" href="#services">{CTA_BUTTON}</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
