//! Root document component - the complete HTML page
//!
//! The page script is embedded exactly once, at the end of `<body>`. It owns
//! every bit of client behavior: scroll-triggered entrance animation, the
//! hero carousel, the feature tabs, smooth scrolling and the mobile menu.
//! Sections only emit data attributes for it.

use leptos::prelude::*;

use super::section_view;
use crate::styles::{content_security_policy, SITE_CSS};
use crate::types::SiteOptions;

/// The complete HTML document for the site
#[component]
pub fn SiteDocument(options: SiteOptions) -> impl IntoView {
    let csp = content_security_policy(&options.assets);
    let icons_css = options.assets.icons_css.clone();
    let has_icons = !icons_css.is_empty();
    let duration = options.animation.duration_ms.to_string();
    let once = options.animation.once.to_string();

    view! {
        <html lang=options.lang.clone()>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <meta http-equiv="Content-Security-Policy" content=csp />
                <title>{options.title.clone()}</title>
                {has_icons.then(|| view! { <link rel="stylesheet" href=icons_css /> })}
                <style>{SITE_CSS}</style>
            </head>
            <body class="index-page" data-aos-duration=duration data-aos-once=once>
                {options.sections.iter().map(|id| section_view(*id, &options)).collect::<Vec<_>>()}
                <script>{PAGE_SCRIPT}</script>
            </body>
        </html>
    }
}

/// Client behavior (entrance animation, carousel, tabs, scrolling, menu)
pub const PAGE_SCRIPT: &str = r#"
(() => {
  const root = document.documentElement;
  const body = document.body;

  // 1. Entrance animation, initialized once for the whole page
  const duration = parseInt(body.dataset.aosDuration || '1000', 10);
  const once = body.dataset.aosOnce !== 'false';
  const animated = document.querySelectorAll('[data-aos]');

  animated.forEach(el => {
      el.style.transitionDuration = duration + 'ms';
      const delay = parseInt(el.dataset.aosDelay || '0', 10);
      if (delay > 0) {
          el.style.transitionDelay = delay + 'ms';
      }
  });

  if ('IntersectionObserver' in window) {
      root.classList.add('aos-ready');
      const observer = new IntersectionObserver(entries => {
          entries.forEach(entry => {
              if (entry.isIntersecting) {
                  entry.target.classList.add('aos-animate');
                  if (once) {
                      observer.unobserve(entry.target);
                  }
              } else if (!once) {
                  entry.target.classList.remove('aos-animate');
              }
          });
      }, { threshold: 0.1 });
      animated.forEach(el => observer.observe(el));
  }

  // 2. Hero carousel
  const carousel = document.getElementById('hero-carousel');
  if (carousel) {
      const slides = Array.from(carousel.querySelectorAll('.carousel-item'));
      const interval = parseInt(carousel.dataset.interval || '5000', 10);
      let current = Math.max(0, slides.findIndex(s => s.classList.contains('active')));
      let timer = null;

      const show = (idx) => {
          if (slides.length === 0) {
              return;
          }
          current = (idx + slides.length) % slides.length;
          slides.forEach((s, i) => s.classList.toggle('active', i === current));
      };

      const restart = () => {
          if (timer) {
              clearInterval(timer);
          }
          if (interval > 0 && slides.length > 1) {
              timer = setInterval(() => show(current + 1), interval);
          }
      };

      carousel.querySelectorAll('[data-slide]').forEach(ctrl => {
          ctrl.addEventListener('click', (ev) => {
              ev.preventDefault();
              show(ctrl.dataset.slide === 'prev' ? current - 1 : current + 1);
              restart();
          });
      });

      restart();
  }

  // 3. Feature tabs
  document.querySelectorAll('[data-tab]').forEach(btn => {
      btn.addEventListener('click', (ev) => {
          ev.preventDefault();
          const key = btn.dataset.tab;
          document.querySelectorAll('[data-tab]').forEach(b => {
              const active = b.dataset.tab === key;
              b.classList.toggle('active', active);
              b.classList.toggle('show', active);
          });
          document.querySelectorAll('[data-tab-panel]').forEach(p => {
              const active = p.dataset.tabPanel === key;
              p.classList.toggle('active', active);
              p.classList.toggle('show', active);
          });
      });
  });

  // 4. Smooth scroll buttons
  document.querySelectorAll('[data-scroll-to]').forEach(btn => {
      btn.addEventListener('click', () => {
          const target = document.getElementById(btn.dataset.scrollTo);
          if (target) {
              target.scrollIntoView({ behavior: 'smooth' });
          }
      });
  });

  // 5. Mobile navigation
  const toggle = document.querySelector('.mobile-nav-toggle');
  if (toggle) {
      toggle.addEventListener('click', () => {
          body.classList.toggle('mobile-nav-active');
          toggle.classList.toggle('bi-list');
          toggle.classList.toggle('bi-x');
      });
      document.querySelectorAll('#navmenu a').forEach(link => {
          link.addEventListener('click', () => {
              if (body.classList.contains('mobile-nav-active')) {
                  toggle.click();
              }
          });
      });
  }
})();
"#;
