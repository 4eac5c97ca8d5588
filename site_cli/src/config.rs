//! Configuration file support.
//!
//! Loads an optional `site.toml`. Every table and key may be omitted.

use std::path::{Path, PathBuf};

use redes_site::types::{AnimationOptions, AssetOptions, SectionId, SiteOptions};
pub use redes_site::types::DEFAULT_ICONS_CSS;
use serde::Deserialize;
use tracing::{debug, warn};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "site.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub assets: AssetsSection,
    pub animation: AnimationOptions,
    pub carousel: CarouselSection,
    pub layout: LayoutSection,
    pub output: OutputSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub title: String,
    pub lang: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        let defaults = SiteOptions::default();
        Self {
            title: defaults.title,
            lang: defaults.lang,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetsSection {
    /// Bootstrap Icons stylesheet URL; empty disables the link
    pub icons_css: String,
    pub image_base: String,
}

impl Default for AssetsSection {
    fn default() -> Self {
        let defaults = AssetOptions::default();
        Self {
            icons_css: defaults.icons_css,
            image_base: defaults.image_base,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CarouselSection {
    pub interval_ms: u32,
}

impl Default for CarouselSection {
    fn default() -> Self {
        Self {
            interval_ms: SiteOptions::default().carousel_interval_ms,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutSection {
    pub sections: Vec<SectionId>,
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            sections: SectionId::DEFAULT_LAYOUT.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub dir: PathBuf,
    /// Also write `cards.json` next to `index.html`
    pub cards_json: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("dist"),
            cards_json: false,
        }
    }
}

impl SiteConfig {
    /// Load `site.toml` from the given directory.
    pub fn load(root: &Path) -> Self {
        Self::load_from_path(&root.join(CONFIG_FILE))
    }

    /// Load config from a specific path.
    /// Returns the default config if the file doesn't exist or is invalid.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    debug!("loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    warn!("failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Render options for the site library.
    pub fn site_options(&self) -> SiteOptions {
        SiteOptions {
            title: self.site.title.clone(),
            lang: self.site.lang.clone(),
            assets: AssetOptions {
                icons_css: self.assets.icons_css.clone(),
                image_base: self.assets.image_base.clone(),
            },
            animation: self.animation.clone(),
            carousel_interval_ms: self.carousel.interval_ms,
            sections: self.layout.sections.clone(),
        }
    }
}
