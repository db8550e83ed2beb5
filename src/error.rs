//! .
//!
//! Everything that may terminate the program flows through [`anyhow`]. Caption failures are typed
//! separately, because the renderer recovers from them and only reports them.
use std::{
  fmt::{self, Display, Formatter},
  path::PathBuf
};

/// Convenient wrapper around `std::Result`.
pub type Result<T> = anyhow::Result<T>;

#[derive(Debug)]
pub enum CaptionError {
  /// None of the candidate font paths could be used.
  NoUsableFont,
  FontRead {
    path: PathBuf,
    source: std::io::Error
  },
  FontParse {
    path: PathBuf,
    source: ab_glyph::InvalidFont
  },
  /// The font has no outline for a character of the caption.
  MissingGlyph {
    path: PathBuf,
    glyph: char
  },
}

impl Display for CaptionError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    use CaptionError::*;
    match self {
      NoUsableFont => write!(f, "no usable caption font found"),
      FontRead { path, source } =>
        write!(f, "failed to read font {}: {}", path.display(), source),
      FontParse { path, source } =>
        write!(f, "failed to parse font {}: {}", path.display(), source),
      MissingGlyph { path, glyph } =>
        write!(f, "font {} has no glyph for {:?}", path.display(), glyph),
    }
  }
}

impl std::error::Error for CaptionError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    use CaptionError::*;
    match self {
      FontRead { source, .. } => Some(source),
      FontParse { source, .. } => Some(source),
      NoUsableFont | MissingGlyph { .. } => None,
    }
  }
}
