//! Caption fonts and text drawing.
//!
//! Fonts are picked from an ordered list of candidate files. The first one that exists, parses,
//! and has an outline for every character of the caption wins.

use {
  std::path::{Path, PathBuf},
  ab_glyph::{point, Font, FontVec, Glyph, GlyphId, PxScale, PxScaleFont, ScaleFont},
  euclid::Point2D,
  image::{Rgba, RgbaImage},
  crate::{
    drawing::blend_coverage,
    error::CaptionError,
    geometry::PixelSpace
  }
};

pub const DEFAULT_CAPTION: &str = "智慧河道";

/// Probed in order after any user supplied fonts.
pub const FONT_CANDIDATES: &[&str] = &[
  "/System/Library/Fonts/PingFang.ttc",
  "/System/Library/Fonts/STHeiti Light.ttc",
  "/Library/Fonts/Arial Unicode.ttf",
  "/System/Library/Fonts/Helvetica.ttc",
  "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
  "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
  "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
  "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
  "/usr/share/fonts/wenquanyi/wqy-microhei/wqy-microhei.ttc",
  "C:\\Windows\\Fonts\\msyh.ttc",
];

pub struct CaptionFont {
  path: PathBuf,
  font: FontVec
}

impl CaptionFont {
  /// Load the first face of a font file, and check it covers `text`.
  pub fn load(path: impl AsRef<Path>, text: &str) -> Result<Self, CaptionError> {
    let path = path.as_ref().to_path_buf();
    let data = std::fs::read(&path)
      .map_err(|source| CaptionError::FontRead { path: path.clone(), source })?;
    let font = FontVec::try_from_vec(data)
      .map_err(|source| CaptionError::FontParse { path: path.clone(), source })?;
    if let Some(glyph) = text.chars()
      .filter(|c| !c.is_whitespace())
      .find(|&c| font.glyph_id(c) == GlyphId(0))
    {
      return Err(CaptionError::MissingGlyph { path, glyph });
    }
    Ok(Self { path, font })
  }

  /// Try every candidate in order. Paths that do not exist are skipped without a word.
  pub fn probe<P: AsRef<Path>>(
    candidates: impl IntoIterator<Item = P>,
    text: &str
  ) -> Result<Self, CaptionError> {
    candidates.into_iter()
      .filter(|path| path.as_ref().exists())
      .find_map(|path| match Self::load(path, text) {
        Ok(font) => Some(font),
        Err(e) => {
          log::debug!("skipping font candidate: {}", e);
          None
        }
      })
      .ok_or(CaptionError::NoUsableFont)
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Horizontal advance of `text` set at `font_size` pixels per em.
  pub fn measure(&self, text: &str, font_size: f32) -> f32 {
    self.layout(text, font_size, Point2D::zero()).1
  }

  /// Draw a single line of text. `origin` is the left end of the ascender line.
  pub fn draw(
    &self,
    image: &mut RgbaImage,
    text: &str,
    font_size: f32,
    origin: Point2D<f32, PixelSpace>,
    color: Rgba<u8>
  ) {
    let (width, height) = (image.width() as i32, image.height() as i32);
    let (glyphs, _) = self.layout(text, font_size, origin);

    glyphs.into_iter()
      .filter_map(|glyph| self.font.outline_glyph(glyph))
      .for_each(|outlined| {
        let bounds = outlined.px_bounds();
        outlined.draw(|x, y, coverage| {
          let x = bounds.min.x as i32 + x as i32;
          let y = bounds.min.y as i32 + y as i32;
          if (0..width).contains(&x) && (0..height).contains(&y) {
            blend_coverage(image.get_pixel_mut(x as u32, y as u32), color, coverage);
          }
        });
      });
  }

  // em size in pixels -> ab_glyph scale, which is the ascent-to-descent height
  fn scaled(&self, font_size: f32) -> PxScaleFont<&FontVec> {
    let px_height = match self.font.units_per_em() {
      Some(units_per_em) => font_size * self.font.height_unscaled() / units_per_em,
      None => font_size
    };
    self.font.as_scaled(PxScale::from(px_height))
  }

  fn layout(&self, text: &str, font_size: f32, origin: Point2D<f32, PixelSpace>) -> (Vec<Glyph>, f32) {
    let font = self.scaled(font_size);
    let baseline = origin.y + font.ascent();
    let mut caret = origin.x;
    let mut previous: Option<GlyphId> = None;

    let glyphs = text.chars()
      .map(|c| {
        let id = font.glyph_id(c);
        if let Some(previous) = previous {
          caret += font.kern(previous, id);
        }
        let glyph = id.with_scale_and_position(font.scale(), point(caret, baseline));
        caret += font.h_advance(id);
        previous = Some(id);
        glyph
      })
      .collect::<Vec<_>>();

    (glyphs, caret - origin.x)
  }
}

impl std::fmt::Debug for CaptionFont {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CaptionFont")
      .field("path", &self.path)
      .finish()
  }
}
