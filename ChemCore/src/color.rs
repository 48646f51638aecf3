//! Hex color parsing and per-substance color overrides
//!
//! Catalog colors are six-digit RGB hex strings without a leading `#`. Parsed
//! values are packed as opaque ARGB (`0xFFRRGGBB`). Malformed input never
//! fails: it degrades to [`FALLBACK_ARGB`] and reports `ok = false` so the
//! caller can log it.

use indexmap::IndexMap;

/// Neutral gray used whenever a color cannot be parsed.
pub const FALLBACK_ARGB: u32 = 0xFF888888;

/// Fully opaque alpha channel.
const OPAQUE: u32 = 0xFF000000;

/// Colors pinned by name before generic parsing.
const BUILTIN_OVERRIDES: &[(&str, u32)] = &[
    // catalog value "62af0a7" is one digit too long
    ("promethium", 0xFF4AAFAA),
];

/// Parse a catalog hex color into ARGB.
///
/// Returns the packed color and whether parsing succeeded. A seven character
/// string is truncated to its first six characters before parsing.
///
/// ```
/// use chemcore::color::parse_color;
///
/// assert_eq!(parse_color("FF0000"), (0xFFFF0000, true));
/// assert_eq!(parse_color("zz"), (0xFF888888, false));
/// ```
#[must_use]
pub fn parse_color(hex: &str) -> (u32, bool) {
    let digits = if hex.chars().count() == 7 {
        match hex.char_indices().nth(6) {
            Some((end, _)) => &hex[..end],
            None => hex,
        }
    } else {
        hex
    };

    // from_str_radix alone would accept a leading '+'
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return (FALLBACK_ARGB, false);
    }

    match u32::from_str_radix(digits, 16) {
        Ok(rgb) => (OPAQUE | rgb, true),
        Err(_) => (FALLBACK_ARGB, false),
    }
}

/// Render an ARGB value as `#AARRGGBB`.
#[must_use]
pub fn format_argb(argb: u32) -> String {
    format!("#{argb:08X}")
}

/// Color resolver with a name-keyed override table.
///
/// Overrides are consulted before the hex string is parsed and always count
/// as a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorCodec {
    overrides: IndexMap<String, u32>,
}

impl Default for ColorCodec {
    fn default() -> Self {
        let overrides = BUILTIN_OVERRIDES
            .iter()
            .map(|(name, argb)| ((*name).to_string(), *argb))
            .collect();
        Self { overrides }
    }
}

impl ColorCodec {
    /// Codec with the built-in overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Codec with no overrides at all.
    #[must_use]
    pub fn without_overrides() -> Self {
        Self {
            overrides: IndexMap::new(),
        }
    }

    /// Add or replace an override.
    #[must_use]
    pub fn with_override(mut self, name: impl Into<String>, argb: u32) -> Self {
        self.set_override(name, argb);
        self
    }

    pub fn set_override(&mut self, name: impl Into<String>, argb: u32) {
        self.overrides.insert(name.into(), argb);
    }

    pub fn override_for(&self, name: &str) -> Option<u32> {
        self.overrides.get(name).copied()
    }

    /// Iterate the override table in insertion order.
    pub fn overrides(&self) -> impl Iterator<Item = (&str, u32)> {
        self.overrides.iter().map(|(name, argb)| (name.as_str(), *argb))
    }

    /// Resolve the color for a named substance.
    #[must_use]
    pub fn resolve(&self, name: &str, hex: &str) -> (u32, bool) {
        match self.override_for(name) {
            Some(argb) => (argb, true),
            None => parse_color(hex),
        }
    }
}
