use std::fmt;
use std::path::Path;

use anyhow::Context;

/// Common install locations tried by [`FontSystem::system`], first hit wins.
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Loaded fonts. Text commands carry no font id, so every run uses the
/// first font loaded.
#[derive(Default)]
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// First readable font among the usual system locations.
    ///
    /// Returns an empty system (text is skipped) when none is found.
    pub fn system() -> Self {
        let mut fonts = Self::new();
        for path in SYSTEM_FONT_CANDIDATES {
            let Ok(bytes) = std::fs::read(path) else {
                continue;
            };
            match fonts.load_font(&bytes) {
                Ok(()) => {
                    log::info!("font: {path}");
                    return fonts;
                }
                Err(e) => log::warn!("{path}: {e}"),
            }
        }
        log::warn!("no system font found; text will not be drawn (pass a font file to enable it)");
        fonts
    }

    /// Loads a single font file.
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        let mut fonts = Self::new();
        fonts
            .load_font(&bytes)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(fonts)
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<(), FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        self.fonts.push(font);
        Ok(())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    #[inline]
    pub(crate) fn primary(&self) -> Option<&fontdue::Font> {
        self.fonts.first()
    }
}
