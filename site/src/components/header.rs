//! Fixed top bar with the brand and in-page navigation.

use leptos::prelude::*;

use super::ICON_LIST;
use crate::content::NAV_LINKS;

#[component]
pub fn Header(title: String) -> impl IntoView {
    view! {
        <header id="header" class="header d-flex align-items-center fixed-top">
            <div class="container-fluid container-xl position-relative d-flex align-items-center justify-content-between">
                <a href="index.html" class="logo d-flex align-items-center">
                    <h1 class="sitename">{title}</h1>
                </a>

                <nav id="navmenu" class="navmenu">
                    <ul>
                        {NAV_LINKS.iter().map(|link| {
                            let class = if link.active { "active" } else { "" };
                            view! {
                                <li><a href=link.href class=class>{link.label}</a></li>
                            }
                        }).collect::<Vec<_>>()}
                    </ul>
                    <i class=format!("mobile-nav-toggle d-xl-none {}", ICON_LIST)></i>
                </nav>
            </div>
        </header>
    }
}
