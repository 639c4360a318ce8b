// Chunk: docs/chunks/palette - Grayscale color palette
//!
//! The terminal's color scheme.
//!
//! The default is a grayscale scheme: light gray text on near-black, with the
//! 16 ANSI colors replaced by evenly spread grays. Colors come in as `#rrggbb`
//! (or `#rgb`) strings so they can live in the config file; a string that does
//! not parse becomes opaque black instead of failing.

use serde::{Deserialize, Serialize};

/// Default foreground, as configured.
pub const DEFAULT_FOREGROUND: &str = "#d0d0d0";
/// Default background, as configured.
pub const DEFAULT_BACKGROUND: &str = "#050505";

/// The 16 ANSI entries of the grayscale scheme (normal 0-7, bright 8-15).
pub const GRAYSCALE_ANSI: [&str; 16] = [
    "#000000", "#202020", "#404040", "#606060", "#808080", "#9a9a9a", "#bcbcbc", "#dcdcdc",
    "#101010", "#303030", "#505050", "#707070", "#909090", "#b0b0b0", "#d0d0d0", "#ffffff",
];

/// An 8-bit-per-channel color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);

    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 0xff,
        }
    }

    /// Parses `#rrggbb` or `#rgb`.
    pub fn parse(text: &str) -> Option<Rgba> {
        let hex = text.trim().strip_prefix('#')?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            6 => Some(Rgba::opaque(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let short = |s: &str| channel(s).map(|v| v * 0x11);
                Some(Rgba::opaque(
                    short(&hex[0..1])?,
                    short(&hex[1..2])?,
                    short(&hex[2..3])?,
                ))
            }
            _ => None,
        }
    }

    /// Parses a color, substituting opaque black for anything malformed.
    pub fn parse_or_black(text: &str) -> Rgba {
        Rgba::parse(text).unwrap_or_else(|| {
            log::warn!("unparsable color {:?}, using black", text);
            Rgba::BLACK
        })
    }

    /// The `rgb:rr/gg/bb` form used by xterm color-setting sequences.
    pub fn to_xparse(&self) -> String {
        format!("rgb:{:02x}/{:02x}/{:02x}", self.red, self.green, self.blue)
    }
}

/// Color settings as they appear in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub foreground: String,
    pub background: String,
    pub ansi: Vec<String>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            foreground: DEFAULT_FOREGROUND.to_string(),
            background: DEFAULT_BACKGROUND.to_string(),
            ansi: GRAYSCALE_ANSI.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A resolved color scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub foreground: Rgba,
    pub background: Rgba,
    pub ansi: [Rgba; 16],
}

impl Default for Palette {
    fn default() -> Self {
        Self::grayscale()
    }
}

impl Palette {
    /// The built-in grayscale scheme.
    pub fn grayscale() -> Self {
        Self::from_config(&PaletteConfig::default())
    }

    /// Resolves configured color strings.
    ///
    /// Missing ANSI entries take their grayscale default.
    pub fn from_config(config: &PaletteConfig) -> Self {
        let mut ansi = [Rgba::BLACK; 16];
        for (index, slot) in ansi.iter_mut().enumerate() {
            *slot = match config.ansi.get(index) {
                Some(text) => Rgba::parse_or_black(text),
                None => Rgba::parse_or_black(GRAYSCALE_ANSI[index]),
            };
        }
        if config.ansi.len() > ansi.len() {
            log::warn!(
                "palette has {} ANSI entries, ignoring all past 16",
                config.ansi.len()
            );
        }
        Self {
            foreground: Rgba::parse_or_black(&config.foreground),
            background: Rgba::parse_or_black(&config.background),
            ansi,
        }
    }

    /// xterm sequences (OSC 4, 10, 11) that install this palette in a hosting
    /// terminal.
    pub fn osc_sequences(&self) -> String {
        let mut out = String::new();
        for (index, color) in self.ansi.iter().enumerate() {
            out.push_str(&format!("\x1b]4;{};{}\x07", index, color.to_xparse()));
        }
        out.push_str(&format!("\x1b]10;{}\x07", self.foreground.to_xparse()));
        out.push_str(&format!("\x1b]11;{}\x07", self.background.to_xparse()));
        out
    }

    /// Sequences (OSC 104, 110, 111) that restore the hosting terminal's own
    /// colors.
    pub fn osc_reset() -> &'static str {
        "\x1b]104\x07\x1b]110\x07\x1b]111\x07"
    }
}
