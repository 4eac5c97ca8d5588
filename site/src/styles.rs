//! CSS and Content-Security-Policy for the page.
//!
//! The stylesheet covers the grid and utility classes the markup uses, the
//! section styles, the carousel fade, the tab panes and the entrance
//! animation states driven by the page script.
//!
//! # Customization
//!
//! ```rust
//! use redes_site::styles::SITE_CSS;
//!
//! let my_css = ".service-item h3 { font-size: 22px; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! assert!(combined.ends_with("}"));
//! ```

use crate::types::AssetOptions;

/// Complete CSS for the page.
pub const SITE_CSS: &str = r#"
:root {
    --default-font: "Roboto", system-ui, -apple-system, "Segoe UI", "Helvetica Neue", Arial, sans-serif;
    --heading-font: "Raleway", sans-serif;
    --nav-font: "Poppins", sans-serif;
    --background-color: #ffffff;
    --default-color: #444444;
    --heading-color: #2a2c39;
    --accent-color: #ef6603;
    --surface-color: #ffffff;
    --contrast-color: #ffffff;
    --dark-background: #2a2c39;
    --container-max: 1320px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    color: var(--default-color);
    background-color: var(--background-color);
    font-family: var(--default-font);
    line-height: 1.6;
}

a {
    color: var(--accent-color);
    text-decoration: none;
    transition: 0.3s;
}

a:hover {
    color: color-mix(in srgb, var(--accent-color), transparent 25%);
}

h1, h2, h3, h4, h5, h6 {
    color: var(--heading-color);
    font-family: var(--heading-font);
    margin-top: 0;
}

img {
    max-width: 100%;
}

/* Grid and utilities */
.container, .container-fluid {
    width: 100%;
    padding-left: 12px;
    padding-right: 12px;
    margin-left: auto;
    margin-right: auto;
}

.container, .container-xl {
    max-width: var(--container-max);
}

.row {
    display: flex;
    flex-wrap: wrap;
    margin-left: -12px;
    margin-right: -12px;
}

.row > * {
    width: 100%;
    padding-left: 12px;
    padding-right: 12px;
}

.gy-4 > * {
    margin-top: 24px;
}

.mt-4 {
    margin-top: 24px;
}

.col-6 {
    flex: 0 0 auto;
    width: 50%;
}

@media (min-width: 768px) {
    .col-md-6 { flex: 0 0 auto; width: 50%; }
}

@media (min-width: 992px) {
    .col-lg-3 { flex: 0 0 auto; width: 25%; }
    .col-lg-4 { flex: 0 0 auto; width: 33.3333%; }
    .col-lg-6 { flex: 0 0 auto; width: 50%; }
    .col-lg-8 { flex: 0 0 auto; width: 66.6667%; }
    .d-lg-block { display: block !important; }
}

@media (min-width: 1200px) {
    .col-xl-3 { flex: 0 0 auto; width: 25%; }
    .col-xl-9 { flex: 0 0 auto; width: 75%; }
    .text-xl-start { text-align: left !important; }
    .d-xl-none { display: none !important; }
}

.d-flex { display: flex; }
.d-none { display: none; }
.align-items-center { align-items: center; }
.align-middle { vertical-align: middle; }
.align-self-start { align-self: flex-start; }
.justify-content-between { justify-content: space-between; }
.position-relative { position: relative; }
.text-center { text-align: center; }
.fst-italic { font-style: italic; }
.px-1 { padding-left: 4px; padding-right: 4px; }
.img-fluid { max-width: 100%; height: auto; }

.fixed-top {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 997;
}

/* Sections */
section, .section {
    color: var(--default-color);
    background-color: var(--background-color);
    padding: 60px 0;
    scroll-margin-top: 90px;
    overflow: clip;
}

.dark-background {
    --background-color: var(--dark-background);
    --default-color: #ffffff;
    --heading-color: #ffffff;
    color: var(--default-color);
    background-color: var(--background-color);
}

.section-title {
    text-align: center;
    padding-bottom: 60px;
}

.section-title h2 {
    font-size: 14px;
    font-weight: 500;
    padding: 0;
    margin: 0;
    letter-spacing: 1px;
    text-transform: uppercase;
    color: color-mix(in srgb, var(--default-color), transparent 50%);
}

.section-title p {
    color: var(--heading-color);
    margin: 10px 0 0 0;
    font-size: 32px;
    font-weight: 700;
    font-family: var(--heading-font);
}

/* Header */
.header {
    color: #ffffff;
    background-color: rgba(42, 44, 57, 0.9);
    padding: 15px 0;
    transition: all 0.5s;
}

.header .logo h1 {
    font-size: 28px;
    margin: 0;
    font-weight: 700;
    color: #ffffff;
}

.navmenu ul {
    margin: 0;
    padding: 0;
    display: flex;
    list-style: none;
    align-items: center;
}

.navmenu a {
    color: rgba(255, 255, 255, 0.8);
    padding: 18px 15px;
    font-size: 15px;
    font-family: var(--nav-font);
    display: flex;
    align-items: center;
    white-space: nowrap;
}

.navmenu a:hover, .navmenu .active {
    color: #ffffff;
}

.mobile-nav-toggle {
    color: #ffffff;
    font-size: 28px;
    line-height: 0;
    cursor: pointer;
}

@media (max-width: 1199px) {
    .navmenu ul {
        display: none;
    }

    .mobile-nav-active .navmenu ul {
        display: block;
        position: absolute;
        inset: 60px 20px 20px 20px;
        padding: 10px 0;
        background-color: var(--surface-color);
        border-radius: 6px;
        z-index: 9998;
    }

    .mobile-nav-active .navmenu a {
        color: var(--default-color);
    }
}

/* Hero */
.hero {
    width: 100%;
    min-height: 100vh;
    position: relative;
    padding: 0;
    display: flex;
    align-items: center;
    flex-direction: column;
    justify-content: center;
}

.hero .carousel {
    position: relative;
    min-height: 80vh;
    padding-top: 60px;
}

.hero .carousel-item {
    position: absolute;
    inset: 0;
    opacity: 0;
    visibility: hidden;
    transition: opacity 0.6s ease-in-out, visibility 0.6s;
}

.hero .carousel-item.active {
    opacity: 1;
    visibility: visible;
}

.hero .carousel-container {
    display: flex;
    justify-content: center;
    align-items: center;
    flex-direction: column;
    text-align: center;
    min-height: 80vh;
    padding: 0 60px;
}

.hero h2 {
    margin-bottom: 30px;
    font-size: 48px;
    font-weight: 700;
}

.hero p {
    max-width: 80%;
    margin: 0 auto 30px auto;
}

.hero .btn-get-started {
    color: var(--contrast-color);
    background: var(--accent-color);
    font-family: var(--heading-font);
    font-weight: 500;
    font-size: 15px;
    letter-spacing: 1px;
    border: 0;
    display: inline-block;
    padding: 12px 32px;
    border-radius: 50px;
    cursor: pointer;
}

.hero .carousel-control-prev, .hero .carousel-control-next {
    position: absolute;
    top: 50%;
    font-size: 32px;
    color: rgba(255, 255, 255, 0.6);
    z-index: 2;
}

.hero .carousel-control-prev { left: 0; }
.hero .carousel-control-next { right: 0; }

.hero-waves-wrap {
    width: 100%;
}

.hero .hero-waves {
    display: block;
    width: 100%;
    height: 60px;
}

.hero .wave1 use { fill: rgba(255, 255, 255, 0.1); }
.hero .wave2 use { fill: rgba(255, 255, 255, 0.2); }
.hero .wave3 use { fill: #ffffff; }

@media (max-width: 768px) {
    .hero h2 { font-size: 30px; }
}

/* About */
.about .content ul {
    list-style: none;
    padding: 0;
}

.about .content ul li {
    padding-bottom: 10px;
}

.about .content ul i {
    font-size: 20px;
    padding-right: 4px;
    color: var(--accent-color);
}

.about .read-more {
    color: var(--accent-color);
    font-weight: 600;
    display: inline-flex;
    align-items: center;
    gap: 6px;
}

/* Features (tabs) */
.features .nav-tabs {
    list-style: none;
    padding: 0;
    border: 0;
}

.features .nav-link {
    color: var(--heading-color);
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 10px;
    padding: 15px;
    border: 1px solid color-mix(in srgb, var(--default-color), transparent 85%);
    transition: 0.3s;
}

.features .nav-link i {
    font-size: 32px;
}

.features .nav-link h4 {
    font-size: 18px;
    margin: 0;
}

.features .nav-link.active {
    color: var(--contrast-color);
    background: var(--accent-color);
    border-color: var(--accent-color);
}

.features .nav-link.active h4 {
    color: var(--contrast-color);
}

.features .tab-content {
    margin-top: 30px;
}

.features .tab-pane {
    display: none;
}

.features .tab-pane.active {
    display: block;
}

.features .tab-pane ul {
    list-style: none;
    padding: 0;
}

.features .tab-pane ul li {
    padding-top: 10px;
}

.features .tab-pane ul i {
    color: var(--accent-color);
    font-size: 20px;
    padding-right: 4px;
}

/* Call to action */
.call-to-action h3 {
    font-size: 28px;
    font-weight: 700;
}

.call-to-action .cta-btn {
    font-family: var(--heading-font);
    font-weight: 500;
    font-size: 16px;
    letter-spacing: 1px;
    display: inline-block;
    padding: 12px 40px;
    border-radius: 50px;
    transition: 0.5s;
    margin: 10px;
    border: 2px solid var(--contrast-color);
    color: var(--contrast-color);
}

.call-to-action .cta-btn:hover {
    background: var(--accent-color);
    border-color: var(--accent-color);
}

/* Services */
.services .service-item {
    background-color: var(--surface-color);
    box-shadow: 0px 5px 90px 0px rgba(0, 0, 0, 0.1);
    height: 100%;
    padding: 60px 30px;
    text-align: center;
    transition: 0.3s;
    border-radius: 5px;
}

.services .service-item .icon {
    margin: 0 auto;
    width: 100px;
    height: 100px;
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 20px;
    font-size: 36px;
}

.services .service-item h3 {
    font-weight: 700;
    margin: 10px 0 15px 0;
    font-size: 22px;
}

.services .service-item p {
    line-height: 24px;
    font-size: 14px;
    margin-bottom: 0;
}

/* Problem statement */
.portfolio-details .portfolio-description h2 {
    font-size: 26px;
    font-weight: 700;
    margin-bottom: 20px;
}

.portfolio-details .portfolio-info h3 {
    font-size: 18px;
    font-weight: 700;
    margin: 20px 0 10px 0;
}

.portfolio-details .portfolio-info ul {
    list-style: none;
    padding: 0;
}

.portfolio-details .btn-visit {
    padding: 8px 40px;
    background: var(--accent-color);
    color: var(--contrast-color);
    border-radius: 50px;
    display: inline-block;
}

/* Footer */
.footer {
    font-size: 14px;
    text-align: center;
    padding: 30px 0;
}

.footer .credits {
    padding-top: 4px;
    font-size: 13px;
}

/* Entrance animation (data-aos) */
.aos-ready [data-aos] {
    transition-property: opacity, transform;
    transition-timing-function: ease;
}

.aos-ready [data-aos="fade-up"]:not(.aos-animate) {
    opacity: 0;
    transform: translate3d(0, 100px, 0);
}

.aos-ready [data-aos="zoom-in"]:not(.aos-animate) {
    opacity: 0;
    transform: scale(0.6);
}

.aos-ready [data-aos].aos-animate {
    opacity: 1;
    transform: none;
}

/* Hero text animation */
@keyframes fadeInDown {
    from { opacity: 0; transform: translate3d(0, -100%, 0); }
    to { opacity: 1; transform: none; }
}

@keyframes fadeInUp {
    from { opacity: 0; transform: translate3d(0, 100%, 0); }
    to { opacity: 1; transform: none; }
}

.animate__animated {
    animation-duration: 1s;
    animation-fill-mode: both;
}

.carousel-item.active .animate__fadeInDown { animation-name: fadeInDown; }
.carousel-item.active .animate__fadeInUp { animation-name: fadeInUp; }

@media (prefers-reduced-motion: reduce) {
    .aos-ready [data-aos] { transition: none !important; }
    .animate__animated { animation: none !important; }
}
"#;

/// Scheme and host of an absolute `http(s)` URL, e.g. `https://cdn.example`.
fn origin_of(url: &str) -> Option<&str> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;
    let host_len = rest.find('/').unwrap_or(rest.len());
    if host_len == 0 {
        return None;
    }
    let scheme_len = url.len() - rest.len();
    Some(&url[..scheme_len + host_len])
}

/// Content-Security-Policy for the page.
///
/// Inline style and script are allowed (both are embedded). The icon font
/// origin and an absolute image base are added when configured.
pub fn content_security_policy(assets: &AssetOptions) -> String {
    let mut style_src = String::from("'self' 'unsafe-inline'");
    let mut font_src = String::from("'self' data:");
    let mut img_src = String::from("'self' data:");

    if let Some(origin) = origin_of(&assets.icons_css) {
        style_src.push(' ');
        style_src.push_str(origin);
        font_src.push(' ');
        font_src.push_str(origin);
    }
    if let Some(origin) = origin_of(&assets.image_base) {
        img_src.push(' ');
        img_src.push_str(origin);
    }

    format!(
        "default-src 'self'; img-src {img_src}; style-src {style_src}; script-src 'self' 'unsafe-inline'; connect-src 'none'; font-src {font_src};"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_of_absolute_urls() {
        assert_eq!(
            origin_of("https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css"),
            Some("https://cdn.jsdelivr.net")
        );
        assert_eq!(origin_of("http://localhost:8080"), Some("http://localhost:8080"));
        assert_eq!(origin_of("assets/img"), None);
        assert_eq!(origin_of("https:///nohost"), None);
    }

    #[test]
    fn csp_without_remote_assets_is_self_only() {
        let assets = AssetOptions {
            icons_css: String::new(),
            ..Default::default()
        };
        let csp = content_security_policy(&assets);
        assert!(csp.contains("style-src 'self' 'unsafe-inline';"));
        assert!(csp.contains("font-src 'self' data:;"));
        assert!(!csp.contains("https://"));
    }

    #[test]
    fn csp_allows_icon_font_origin() {
        let assets = AssetOptions {
            icons_css: "https://cdn.jsdelivr.net/npm/bootstrap-icons/font/bootstrap-icons.min.css".into(),
            image_base: "https://img.example.org/legal".into(),
        };
        let csp = content_security_policy(&assets);
        assert!(csp.contains("style-src 'self' 'unsafe-inline' https://cdn.jsdelivr.net;"));
        assert!(csp.contains("font-src 'self' data: https://cdn.jsdelivr.net;"));
        assert!(csp.contains("img-src 'self' data: https://img.example.org;"));
    }

    #[test]
    fn default_csp_admits_default_icon_origin() {
        let csp = content_security_policy(&AssetOptions::default());
        assert!(csp.contains("style-src 'self' 'unsafe-inline' https://cdn.jsdelivr.net;"));
        assert!(csp.contains("img-src 'self' data:;"));
    }
}
