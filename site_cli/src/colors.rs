//! Terminal color utilities for CLI output.

use std::io::IsTerminal;

use clap::ValueEnum;

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RESET: &str = "\x1b[0m";
pub const BRIGHT_CYAN: &str = "\x1b[96m";

/// When to emit ANSI escapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Determines if colors should be used based on ColorMode and terminal detection.
pub fn is_enabled(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}

/// Colorizer that can be passed around to format functions.
#[derive(Clone, Copy, Debug)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(mode: ColorMode) -> Self {
        Self {
            enabled: is_enabled(mode),
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn error(&self, s: &str) -> String {
        self.wrap(s, RED)
    }

    pub fn warn(&self, s: &str) -> String {
        self.wrap(s, YELLOW)
    }

    pub fn ok(&self, s: &str) -> String {
        self.wrap(s, GREEN)
    }

    pub fn header(&self, s: &str) -> String {
        self.wrap(s, BOLD)
    }

    pub fn dim(&self, s: &str) -> String {
        self.wrap(s, DIM)
    }

    pub fn number(&self, n: impl std::fmt::Display) -> String {
        self.wrap(&n.to_string(), BRIGHT_CYAN)
    }

    pub fn status_ok(&self, msg: &str) -> String {
        format!("{} {}", self.ok("[OK]"), msg)
    }

    pub fn status_warn(&self, msg: &str) -> String {
        format!("{} {}", self.warn("[WARN]"), msg)
    }

    pub fn status_error(&self, msg: &str) -> String {
        format!("{} {}", self.error("[ERROR]"), msg)
    }

    /// Two-cell block in the given `#rrggbb` color, followed by the color text.
    ///
    /// Falls back to the bare text when colors are off or the value is not a
    /// six-digit hex color.
    pub fn swatch(&self, color: &str) -> String {
        match (self.enabled, parse_hex_rgb(color)) {
            (true, Some((r, g, b))) => format!("\x1b[48;2;{r};{g};{b}m  {RESET} {color}"),
            _ => color.to_string(),
        }
    }

    pub fn wrap(&self, s: &str, code: &str) -> String {
        if self.enabled {
            format!("{code}{s}{RESET}")
        } else {
            s.to_string()
        }
    }
}

/// `#rrggbb` -> (r, g, b)
pub fn parse_hex_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_painter_disabled() {
        let p = Painter { enabled: false };
        assert_eq!(p.error("test"), "test");
        assert_eq!(p.ok("test"), "test");
        assert_eq!(p.swatch("#0dcaf0"), "#0dcaf0");
    }

    #[test]
    fn test_painter_enabled() {
        let p = Painter { enabled: true };
        assert_eq!(p.ok("ok"), format!("{GREEN}ok{RESET}"));
        assert_eq!(
            p.swatch("#0dcaf0"),
            format!("\x1b[48;2;13;202;240m  {RESET} #0dcaf0")
        );
        assert_eq!(p.swatch("teal"), "teal");
    }

    #[test]
    fn test_parse_hex_rgb() {
        assert_eq!(parse_hex_rgb("#f3268c"), Some((0xf3, 0x26, 0x8c)));
        assert_eq!(parse_hex_rgb("#FD7E14"), Some((0xfd, 0x7e, 0x14)));
        assert_eq!(parse_hex_rgb("f3268c"), None);
        assert_eq!(parse_hex_rgb("#fff"), None);
        assert_eq!(parse_hex_rgb("#gg0000"), None);
        assert_eq!(parse_hex_rgb("#ñ0000"), None);
    }

    #[test]
    fn test_never_mode_disables() {
        assert!(!Painter::new(ColorMode::Never).enabled());
        assert!(Painter::new(ColorMode::Always).enabled());
    }
}
