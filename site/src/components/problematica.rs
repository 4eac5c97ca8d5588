//! Problem statement with links to the supporting reports.

use leptos::prelude::*;

use crate::content::{PROBLEMATICA_HEADING, PROBLEMATICA_PARAGRAPHS, RESOURCE_LINKS};

#[component]
pub fn Problematica() -> impl IntoView {
    view! {
        <section id="problematica" class="portfolio-details section">
            <div class="container" data-aos="fade-up">
                <div class="row justify-content-between gy-4 mt-4">
                    <div class="col-lg-8" data-aos="fade-up">
                        <div class="portfolio-description">
                            <h2>{PROBLEMATICA_HEADING}</h2>
                            {PROBLEMATICA_PARAGRAPHS.iter().map(|text| view! { <p>{*text}</p> }).collect::<Vec<_>>()}
                        </div>
                    </div>
                    <div class="col-lg-3" data-aos="fade-up" data-aos-delay="100">
                        <div class="portfolio-info">
                            {RESOURCE_LINKS.iter().map(|link| view! {
                                <h3>{link.title}</h3>
                                <ul>
                                    <li>
                                        <a
                                            href=link.href
                                            class="btn-visit align-self-start"
                                            target="_blank"
                                            rel="noopener noreferrer"
                                        >
                                            "Visitar Sitio Web"
                                        </a>
                                    </li>
                                </ul>
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
