/// Treemap configuration — palette, label metrics and tree-building policy.
///
/// A single [`TreemapConfig`] value is threaded through the tree builder and
/// the layout engine. Nothing in the core reads global state, so several
/// configurations can coexist (e.g. in parallel tests).
///
/// Configuration files are JSON. Every field is optional:
///
/// ```json
/// {
///   "palette": ["fb4b2d", "#db6e2c", "fb9928"],
///   "font_size": 10,
///   "pad": 2,
///   "min_visible": 1,
///   "sort_by_size": true
/// }
/// ```
use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Largest accepted `pad` or `font_size`, in pixels.
pub const MAX_METRIC: u32 = 4096;

/// An opaque 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse six hex digits, with or without a leading `#`.
    pub fn from_hex(text: &str) -> Result<Self, ConfigError> {
        let digits = text.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidColor(text.to_string()));
        }
        let n = u32::from_str_radix(digits, 16)
            .map_err(|_| ConfigError::InvalidColor(text.to_string()))?;
        Ok(Self::new((n >> 16) as u8, (n >> 8) as u8, n as u8))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

/// Default warm-to-cool palette; the colour of a rectangle is picked by the
/// depth of its entry, so neighbouring nesting levels always contrast.
pub const DEFAULT_PALETTE: [Rgb; 10] = [
    Rgb::new(0xfb, 0x4b, 0x2d), // red
    Rgb::new(0xdb, 0x6e, 0x2c), // rust
    Rgb::new(0xfb, 0x99, 0x28), // orange
    Rgb::new(0xf3, 0xc7, 0x1c), // yellow
    Rgb::new(0xa7, 0xc7, 0x1c), // lime
    Rgb::new(0x80, 0x99, 0x21), // olive
    Rgb::new(0x86, 0xc1, 0xa1), // sage
    Rgb::new(0x72, 0x41, 0xbc), // purple
    Rgb::new(0xc5, 0x3a, 0xa9), // magenta
    Rgb::new(0xff, 0x3a, 0x90), // pink
];

/// All tunables for building and laying out a treemap.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TreemapConfig {
    /// Ordered colours; `PlacedRect::color_index` indexes into this list.
    pub palette: Vec<Rgb>,

    /// Label font size in pixels. Also drives the directory header height.
    pub font_size: u32,

    /// Border inside directory frames and gutter between split regions.
    pub pad: u32,

    /// Rectangles no larger than this in both dimensions are not emitted,
    /// and groups are not split into regions no larger than this in either.
    pub min_visible: u32,

    /// Sort directory children ascending by size (stable).
    pub sort_by_size: bool,
}

impl Default for TreemapConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.to_vec(),
            font_size: 8,
            pad: 1,
            min_visible: 1,
            sort_by_size: true,
        }
    }
}

impl TreemapConfig {
    /// Load and validate a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the layout engine cannot colour or whose
    /// metrics exceed [`MAX_METRIC`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        for (field, value) in [("pad", self.pad), ("font_size", self.font_size)] {
            if value > MAX_METRIC {
                return Err(ConfigError::MetricTooLarge {
                    field,
                    value,
                    max: MAX_METRIC,
                });
            }
        }
        Ok(())
    }

    /// Height of the band reserved atop a directory for its label.
    ///
    /// Saturates, so configs built in code without [`validate`](Self::validate)
    /// still yield a usable value.
    #[inline]
    pub fn header_height(&self) -> u32 {
        self.font_size.saturating_add(self.pad.saturating_mul(2))
    }

    /// Both sides of a rectangle must exceed this for its label to be drawn.
    #[inline]
    pub fn label_threshold(&self) -> u32 {
        self.header_height()
    }

    /// Resolve a colour index produced by the layout engine.
    pub fn color(&self, color_index: usize) -> Rgb {
        self.palette
            .get(color_index)
            .copied()
            .unwrap_or(DEFAULT_PALETTE[color_index % DEFAULT_PALETTE.len()])
    }
}
