//! Page footer with the site name and credit link.

use leptos::prelude::*;

use crate::content::{FOOTER_CREDIT_URL, FOOTER_SITE_NAME};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id="footer" class="footer dark-background">
            <div class="container">
                <div class="copyright">
                    <span>"Copyright"</span>
                    " "
                    <strong class="px-1 sitename">{FOOTER_SITE_NAME}</strong>
                    " "
                    <span>"All Rights Reserved"</span>
                </div>
                <div class="credits">
                    "Designed by "
                    <a href=FOOTER_CREDIT_URL target="_blank" rel="noopener noreferrer">"BootstrapMade"</a>
                </div>
            </div>
        </footer>
    }
}
