//! Subcommand handlers.
//!
//! Handlers write their human-facing output to the given writer and return
//! whether the run succeeded; errors that stop the run are `anyhow` errors.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use redes_site::types::LegalReferenceItem;
use redes_site::{duplicate_titles, render_cards, validate_unique_ids};
use tracing::{error, warn};

use crate::colors::Painter;
use crate::config::SiteConfig;
use crate::output::build_site;

pub fn run_build(
    items: &[LegalReferenceItem],
    config: &SiteConfig,
    out: Option<PathBuf>,
    cards_json: bool,
    painter: Painter,
    w: &mut dyn Write,
) -> Result<bool> {
    let out_dir = out.unwrap_or_else(|| config.output.dir.clone());
    let cards_json = cards_json || config.output.cards_json;

    let report = build_site(items, &config.site_options(), &out_dir, cards_json)?;

    writeln!(
        w,
        "{}",
        painter.status_ok(&format!(
            "{} ({} bytes)",
            report.index.display(),
            painter.number(report.html_bytes)
        ))
    )?;
    if let Some(cards) = &report.cards {
        writeln!(w, "{}", painter.status_ok(&cards.display().to_string()))?;
    }
    Ok(true)
}

pub fn run_cards(
    items: &[LegalReferenceItem],
    json: bool,
    painter: Painter,
    w: &mut dyn Write,
) -> Result<bool> {
    let cards = render_cards(items);

    if json {
        writeln!(w, "{}", serde_json::to_string_pretty(&cards)?)?;
        return Ok(true);
    }

    for card in &cards {
        writeln!(
            w,
            "{} {}",
            painter.number(format!("[{}]", card.key)),
            painter.header(&card.title)
        )?;
        writeln!(
            w,
            "    {} {} {}",
            painter.swatch(&card.color),
            painter.dim(&card.icon),
            painter.dim(&format!("+{}ms", card.delay))
        )?;
        writeln!(w, "    {}", card.description)?;
    }
    Ok(true)
}

/// Duplicate ids fail the check; duplicate titles only warn.
pub fn run_check(
    items: &[LegalReferenceItem],
    painter: Painter,
    w: &mut dyn Write,
) -> Result<bool> {
    if let Err(e) = validate_unique_ids(items) {
        error!("{}", e);
        writeln!(w, "{}", painter.status_error(&e.to_string()))?;
        return Ok(false);
    }
    writeln!(
        w,
        "{}",
        painter.status_ok(&format!("{} legal references, ids unique", items.len()))
    )?;

    for dup in duplicate_titles(items) {
        let ids = dup
            .ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        warn!(title = %dup.title, ids = %ids, "title shared by several items");
        writeln!(
            w,
            "{}",
            painter.status_warn(&format!("\"{}\" used by ids {}", dup.title, ids))
        )?;
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::ColorMode;
    use redes_site::content::legal_references;
    use tempfile::TempDir;

    fn plain() -> Painter {
        Painter::new(ColorMode::Never)
    }

    #[test]
    fn check_passes_and_warns_about_titles() {
        let mut buf = Vec::new();
        assert!(run_check(legal_references(), plain(), &mut buf).expect("check"));
        let out = String::from_utf8(buf).expect("utf8");
        assert!(out.contains("[OK] 5 legal references, ids unique"));
        assert!(out.contains("[WARN] \"Código Penal de Costa Rica\" used by ids 1, 2"));
        assert!(out.contains("used by ids 4, 5"));
    }

    #[test]
    fn check_fails_on_duplicate_id() {
        let mut items = legal_references().to_vec();
        items[2].id = 2;

        let mut buf = Vec::new();
        assert!(!run_check(&items, plain(), &mut buf).expect("check"));
        let out = String::from_utf8(buf).expect("utf8");
        assert!(out.contains("[ERROR] duplicate id 2 at positions 1 and 2"));
        assert!(!out.contains("[OK]"));
        assert!(!out.contains("[WARN]"));
    }

    #[test]
    fn build_with_duplicate_id_writes_nothing() {
        let temp = TempDir::new().expect("temp dir");
        let mut config = SiteConfig::default();
        config.output.dir = temp.path().join("dist");
        let mut items = legal_references().to_vec();
        items[4].id = 5;
        items[0].id = 5;

        let mut buf = Vec::new();
        assert!(run_build(&items, &config, None, true, plain(), &mut buf).is_err());
        assert!(buf.is_empty());
        assert!(!temp.path().join("dist/index.html").exists());
    }

    #[test]
    fn cards_text_lists_every_card_in_order() {
        let mut buf = Vec::new();
        run_cards(legal_references(), false, plain(), &mut buf).expect("cards");
        let out = String::from_utf8(buf).expect("utf8");
        let first = out.find("[1]").expect("card 1");
        let last = out.find("[5]").expect("card 5");
        assert!(first < last);
        assert!(out.contains("#6610f2 bi bi-globe +500ms"));
    }

    #[test]
    fn cards_json_is_parseable() {
        let mut buf = Vec::new();
        run_cards(legal_references(), true, plain(), &mut buf).expect("cards");
        let value: serde_json::Value = serde_json::from_slice(&buf).expect("json");
        assert_eq!(value.as_array().map(|a| a.len()), Some(5));
        assert_eq!(value[2]["key"], 3);
        assert_eq!(value[2]["delay"], 300);
    }

    #[test]
    fn build_uses_config_output_dir_unless_overridden() {
        let temp = TempDir::new().expect("temp dir");
        let mut config = SiteConfig::default();
        config.output.dir = temp.path().join("from-config");
        config.output.cards_json = true;

        let mut buf = Vec::new();
        run_build(legal_references(), &config, None, false, plain(), &mut buf).expect("build");
        assert!(temp.path().join("from-config/index.html").exists());
        assert!(temp.path().join("from-config/cards.json").exists());

        let other = temp.path().join("override");
        run_build(legal_references(), &config, Some(other.clone()), false, plain(), &mut buf).expect("build");
        assert!(other.join("index.html").exists());
    }
}
