//! # redes-cr
//!
//! Command line front end for [`redes_site`]: loads `site.toml`, renders the
//! page and writes it out.
//!
//! ```bash
//! redes-cr build --out dist --cards-json
//! redes-cr cards
//! redes-cr check
//! ```

pub mod cli;
pub mod colors;
pub mod commands;
pub mod config;
pub mod output;

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use redes_site::content::legal_references;

use cli::{Cli, Command};
use colors::Painter;
use config::SiteConfig;

/// Run a parsed command line. Returns `false` when the command reported a
/// failure (e.g. `check` found a duplicate id).
pub fn run(cli: Cli, w: &mut dyn Write) -> Result<bool> {
    let config = match &cli.config {
        Some(path) => SiteConfig::load_from_path(path),
        None => SiteConfig::load(Path::new(".")),
    };
    let painter = Painter::new(cli.color);
    let items = legal_references();

    match cli.command {
        Command::Build { out, cards_json } => {
            commands::run_build(items, &config, out, cards_json, painter, w)
        }
        Command::Cards { json } => commands::run_cards(items, json, painter, w),
        Command::Check => commands::run_check(items, painter, w),
    }
}
