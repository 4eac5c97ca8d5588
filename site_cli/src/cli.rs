//! Command line definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::colors::ColorMode;

#[derive(Parser, Debug)]
#[command(name = "redes-cr")]
#[command(about = "Static site builder for the Redes Sociales Costa Rica legal-information page")]
#[command(version)]
pub struct Cli {
    /// Config file (default: ./site.toml, optional)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Colorize terminal output
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render index.html into the output directory
    Build {
        /// Output directory (overrides [output].dir)
        #[arg(long, short)]
        out: Option<PathBuf>,
        /// Also write cards.json
        #[arg(long)]
        cards_json: bool,
    },
    /// Print the legal reference cards
    Cards {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Validate the built-in content
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_build_with_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["redes-cr", "build", "--out", "public", "--color", "never"]);
        assert_eq!(cli.color, ColorMode::Never);
        match cli.command {
            Command::Build { out, cards_json } => {
                assert_eq!(out, Some(PathBuf::from("public")));
                assert!(!cards_json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
