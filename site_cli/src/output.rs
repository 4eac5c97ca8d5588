//! Writes the rendered page (and optionally the card list) to disk.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use redes_site::types::{LegalReferenceItem, SiteOptions};
use redes_site::{render_cards, render_site, validate_unique_ids};
use tracing::{debug, info};

pub const INDEX_FILE: &str = "index.html";
pub const CARDS_FILE: &str = "cards.json";

/// Files produced by one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub index: PathBuf,
    pub cards: Option<PathBuf>,
    /// Size of `index.html` in bytes
    pub html_bytes: usize,
}

/// Validate the legal references, render the page and write the output directory.
///
/// Nothing is written when validation fails.
pub fn build_site(
    items: &[LegalReferenceItem],
    options: &SiteOptions,
    out_dir: &Path,
    cards_json: bool,
) -> Result<BuildReport> {
    validate_unique_ids(items).context("legal reference list is invalid")?;

    let html = render_site(options);
    debug!(bytes = html.len(), sections = options.sections.len(), "rendered page");

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let index = out_dir.join(INDEX_FILE);
    std::fs::write(&index, &html)
        .with_context(|| format!("failed to write {}", index.display()))?;
    info!("wrote {}", index.display());

    let cards = if cards_json {
        let path = out_dir.join(CARDS_FILE);
        let json = serde_json::to_string_pretty(&render_cards(items))?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("wrote {}", path.display());
        Some(path)
    } else {
        None
    };

    Ok(BuildReport {
        index,
        cards,
        html_bytes: html.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use redes_site::content::legal_references;
    use redes_site::types::CardDescriptor;
    use tempfile::TempDir;

    #[test]
    fn writes_index_only_by_default() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("dist");

        let report = build_site(legal_references(), &SiteOptions::default(), &out, false).expect("build");

        assert_eq!(report.index, out.join(INDEX_FILE));
        assert!(report.cards.is_none());
        let html = std::fs::read_to_string(&report.index).expect("read index");
        assert_eq!(html.len(), report.html_bytes);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(!out.join(CARDS_FILE).exists());
    }

    #[test]
    fn writes_cards_json_when_asked() {
        let temp = TempDir::new().expect("temp dir");

        let report = build_site(legal_references(), &SiteOptions::default(), temp.path(), true).expect("build");

        let path = report.cards.expect("cards path");
        let json = std::fs::read_to_string(path).expect("read cards");
        let cards: Vec<CardDescriptor> = serde_json::from_str(&json).expect("parse cards");
        assert_eq!(cards.len(), 5);
        assert_eq!(cards[0].key, 1);
        assert_eq!(cards[4].color, "#f3268c");
    }

    #[test]
    fn fails_when_output_is_a_file() {
        let temp = TempDir::new().expect("temp dir");
        let blocker = temp.path().join("taken");
        std::fs::write(&blocker, "x").expect("write blocker");

        let err = build_site(legal_references(), &SiteOptions::default(), &blocker, false).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to"));
    }

    #[test]
    fn duplicate_ids_abort_before_writing() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("dist");
        let mut items = legal_references().to_vec();
        items[3].id = items[0].id;

        let err = build_site(&items, &SiteOptions::default(), &out, true).unwrap_err();

        let msg = format!("{:#}", err);
        assert!(msg.contains("legal reference list is invalid"));
        assert!(msg.contains("duplicate id 1 at positions 0 and 3"));
        assert!(!out.join(INDEX_FILE).exists());
        assert!(!out.exists());
    }
}
