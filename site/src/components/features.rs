//! Tabbed legal reference panes (Costa Rica / international).
//!
//! Buttons carry `data-tab`, panes carry `data-tab-panel`; the page script
//! switches the `active` class. The default pane is active in the markup so
//! the section reads correctly without script.

use leptos::prelude::*;

use super::{Icon, ICON_CHECK_ALL};
use crate::content::{DEFAULT_FEATURE_TAB, FEATURE_TABS};

/// Join the image base and file name with exactly one slash.
fn image_src(base: &str, file: &str) -> String {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        file.to_string()
    } else {
        format!("{}/{}", base, file)
    }
}

#[component]
pub fn Features(image_base: String) -> impl IntoView {
    view! {
        <section id="features" class="features section">
            <div class="container">
                <ul class="nav nav-tabs row d-flex" role="tablist" data-aos="fade-up" data-aos-delay="100">
                    {FEATURE_TABS.iter().map(|tab| {
                        let class = if tab.key == DEFAULT_FEATURE_TAB { "nav-link active show" } else { "nav-link" };
                        view! {
                            <li class="nav-item col-6">
                                <a class=class href=format!("#{}", tab.key) data-tab=tab.key role="tab">
                                    <Icon name=tab.icon />
                                    <h4 class="d-none d-lg-block">{tab.label}</h4>
                                </a>
                            </li>
                        }
                    }).collect::<Vec<_>>()}
                </ul>

                <div class="tab-content" data-aos="fade-up" data-aos-delay="200">
                    {FEATURE_TABS.iter().map(|tab| {
                        let class = if tab.key == DEFAULT_FEATURE_TAB { "tab-pane active show" } else { "tab-pane" };
                        let intro_class = if tab.intro_italic { "fst-italic" } else { "" };
                        view! {
                            <div id=tab.key class=class data-tab-panel=tab.key role="tabpanel">
                                <div class="row">
                                    <div class="col-lg-6">
                                        <h3>{tab.heading}</h3>
                                        <p class=intro_class>{tab.intro}</p>
                                        <ul>
                                            {tab.items.iter().map(|item| view! {
                                                <li><Icon name=ICON_CHECK_ALL />" "{*item}</li>
                                            }).collect::<Vec<_>>()}
                                        </ul>
                                    </div>
                                    <div class="col-lg-6 text-center">
                                        <img src=image_src(&image_base, tab.image) alt="" class="img-fluid" />
                                    </div>
                                </div>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
