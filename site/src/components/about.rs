//! About section: introduction, key points and detail text.

use leptos::prelude::*;

use super::{Icon, SectionTitle, ICON_ARROW_RIGHT, ICON_CHECK_CIRCLE};
use crate::content::{ABOUT_BULLETS, ABOUT_DETAIL, ABOUT_INTRO, ABOUT_SUBTITLE, ABOUT_TITLE};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about section">
            <SectionTitle title=ABOUT_TITLE subtitle=ABOUT_SUBTITLE />

            <div class="container">
                <div class="row gy-4">
                    <div class="col-lg-6 content" data-aos="fade-up" data-aos-delay="100">
                        <p>{ABOUT_INTRO}</p>
                        <ul>
                            {ABOUT_BULLETS.iter().map(|bullet| view! {
                                <li><Icon name=ICON_CHECK_CIRCLE />" "<span>{*bullet}</span></li>
                            }).collect::<Vec<_>>()}
                        </ul>
                    </div>

                    <div class="col-lg-6" data-aos="fade-up" data-aos-delay="200">
                        <p>{ABOUT_DETAIL}</p>
                        <a href="#features" class="read-more">
                            <span>"Informarse más"</span>
                            <Icon name=ICON_ARROW_RIGHT />
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
