//! Hero carousel: fading slides, auto-advance, prev/next controls.
//!
//! Slide switching is done by the page script; the markup only marks the
//! first slide active and exposes the interval as `data-interval`.

use leptos::prelude::*;

use super::{ICON_CHEVRON_LEFT, ICON_CHEVRON_RIGHT};
use crate::content::HERO_SLIDES;

/// Decorative waves under the carousel. Kept as raw markup because the
/// `<use>` element has no view-macro spelling.
const HERO_WAVES_SVG: &str = r##"<svg class="hero-waves" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" viewBox="0 24 150 28" preserveAspectRatio="none"><defs><path id="wave-path" d="M-160 44c30 0 58-18 88-18s58 18 88 18 58-18 88-18 58 18 88 18 v44h-352z"></path></defs><g class="wave1"><use xlink:href="#wave-path" x="50" y="3"></use></g><g class="wave2"><use xlink:href="#wave-path" x="50" y="0"></use></g><g class="wave3"><use xlink:href="#wave-path" x="50" y="9"></use></g></svg>"##;

#[component]
pub fn Hero(interval_ms: u32) -> impl IntoView {
    view! {
        <section id="hero" class="hero section dark-background">
            <div id="hero-carousel" class="container carousel carousel-fade" data-interval=interval_ms.to_string()>
                <div class="carousel-inner">
                    {HERO_SLIDES.iter().enumerate().map(|(idx, slide)| {
                        let class = if idx == 0 { "carousel-item active" } else { "carousel-item" };
                        view! {
                            <div class=class>
                                <div class="carousel-container">
                                    <h2 class="animate__animated animate__fadeInDown">{slide.title}</h2>
                                    <p class="animate__animated animate__fadeInUp">{slide.body}</p>
                                    <button
                                        class="btn-get-started animate__animated animate__fadeInUp scrollto"
                                        data-scroll-to=slide.scroll_target
                                    >
                                        "Leer más"
                                    </button>
                                </div>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>

                <a class="carousel-control-prev" href="#hero-carousel" role="button" data-slide="prev">
                    <span class=format!("carousel-control-prev-icon {}", ICON_CHEVRON_LEFT) aria-hidden="true"></span>
                </a>

                <a class="carousel-control-next" href="#hero-carousel" role="button" data-slide="next">
                    <span class=format!("carousel-control-next-icon {}", ICON_CHEVRON_RIGHT) aria-hidden="true"></span>
                </a>
            </div>

            <div class="hero-waves-wrap" inner_html=HERO_WAVES_SVG></div>
        </section>
    }
}
