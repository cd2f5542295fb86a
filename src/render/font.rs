//! Label typeface loading
//!
//! Labels are optional decoration: when no font can be found the page is still
//! rendered with identical geometry, just without text.

use crate::constants::FONT_SIZE;
use crate::errors::{VisError, VisResult};
use ab_glyph::{Font, FontVec, PxScale};
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Fonts tried in order when none is given on the command line
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "segoeuib.ttf",
    "C:\\Windows\\Fonts\\segoeuib.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
];

/// A loaded font scaled to the label size
pub struct Typeface {
    pub font: FontVec,
    pub scale: PxScale,
}

impl Typeface {
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, ab_glyph::InvalidFont> {
        let font = FontVec::try_from_vec(data)?;
        // FONT_SIZE is an em size; PxScale measures ascent to descent
        let scale = match font.units_per_em() {
            Some(upem) if upem > 0.0 => {
                PxScale::from(FONT_SIZE as f32 * font.height_unscaled() / upem)
            }
            _ => PxScale::from(FONT_SIZE as f32),
        };
        Ok(Typeface { font, scale })
    }

    /// Load a font file; failure is an error
    pub fn load(path: &Path) -> VisResult<Self> {
        let data = std::fs::read(path).map_err(|e| VisError::Font {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Typeface::from_bytes(data).map_err(|e| VisError::Font {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// First loadable font among well-known system locations
    pub fn find_system() -> Option<Self> {
        for candidate in SYSTEM_FONT_CANDIDATES {
            let path = PathBuf::from(candidate);
            if !path.is_file() {
                continue;
            }
            match Typeface::load(&path) {
                Ok(typeface) => {
                    debug!("Using label font {}", path.display());
                    return Some(typeface);
                }
                Err(e) => debug!("Skipping font candidate: {}", e),
            }
        }
        None
    }
}

/// Resolve the label font: an explicit path must load, otherwise fall back to
/// system fonts, otherwise render without labels
pub fn resolve_typeface(explicit: Option<&Path>) -> VisResult<Option<Typeface>> {
    if let Some(path) = explicit {
        return Typeface::load(path).map(Some);
    }
    let typeface = Typeface::find_system();
    if typeface.is_none() {
        warn!("No usable font found; rendering without text labels (use --font to pick one)");
    }
    Ok(typeface)
}
