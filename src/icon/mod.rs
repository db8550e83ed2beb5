//! The river patrol app icon.
//!
//! Layers, bottom to top: background disk, three waves, foreground disk, location pin, and the
//! caption on a rounded backdrop for icons of at least [`CAPTION_MIN_SIZE`] pixels.
//! All lengths are given for a 1024 px icon and scaled down with integer truncation, so every
//! size lands on the same pixel grid.

use {
  std::{cell::OnceCell, path::PathBuf},
  euclid::Point2D,
  image::{Rgba, RgbaImage},
  crate::{
    caption::{CaptionFont, DEFAULT_CAPTION, FONT_CANDIDATES},
    drawing::Draw,
    error::CaptionError,
    geometry::{self, Shape}
  }
};

pub mod waves;
#[cfg(test)] mod tests;
pub use waves::{Wave, Pattern, WAVES};

pub const CAPTION_MIN_SIZE: u32 = 256;
pub const BLUE: Rgba<u8> = Rgba([59, 130, 246, 255]);

pub const fn white(alpha: u8) -> Rgba<u8> {
  Rgba([255, 255, 255, alpha])
}

/// Integer layout helpers for one icon size.
#[derive(Debug, Copy, Clone)]
pub struct Metrics {
  pub size: i32,
  pub scale: f64
}

impl Metrics {
  pub fn new(size: u32) -> Self {
    Self { size: size as i32, scale: size as f64 / 1024.0 }
  }
  /// A length of the 1024 px icon, scaled and truncated.
  pub fn px(&self, length: f64) -> i32 {
    (length * self.scale) as i32
  }
  /// A fraction of the icon size, truncated.
  pub fn frac(&self, fraction: f64) -> i32 {
    (self.size as f64 * fraction) as i32
  }
  /// Inset of the background disk from the icon edges.
  pub fn margin(&self) -> i32 {
    self.px(74.0)
  }
  /// Center of the foreground disk and the pin.
  pub fn pin_center(&self) -> (i32, i32) {
    (self.size / 2, self.frac(0.35))
  }
}

#[derive(Debug)]
pub struct IconRenderer {
  fonts: Vec<PathBuf>,
  caption: Option<String>,
  font: OnceCell<Option<CaptionFont>>
}

impl Default for IconRenderer {
  fn default() -> Self {
    Self {
      fonts: FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
      caption: Some(DEFAULT_CAPTION.to_string()),
      font: OnceCell::new()
    }
  }
}

impl IconRenderer {
  pub fn new() -> Self {
    Self::default()
  }

  /// Replace the candidate font list. The first usable one is picked on the first captioned icon.
  pub fn with_fonts<P: Into<PathBuf>>(self, fonts: impl IntoIterator<Item = P>) -> Self {
    Self {
      fonts: fonts.into_iter().map(Into::into).collect(),
      font: OnceCell::new(),
      ..self
    }
  }

  /// `None` disables captions at every size.
  pub fn with_caption(self, caption: Option<String>) -> Self {
    Self {
      caption,
      font: OnceCell::new(),
      ..self
    }
  }

  pub fn fonts(&self) -> &[PathBuf] {
    &self.fonts
  }

  pub fn caption(&self) -> Option<&str> {
    self.caption.as_deref()
  }

  /// Compose a `size` x `size` icon. Caption failures are logged and leave the caption out.
  pub fn render(&self, size: u32) -> RgbaImage {
    let mut image = RgbaImage::new(size, size);
    if size == 0 {
      return image;
    }
    let metrics = Metrics::new(size);
    let (s, margin) = (metrics.size, metrics.margin());

    geometry::ellipse_in_box([margin, margin, s - margin, s - margin], size)
      .texture(BLUE)
      .draw(&mut image);

    WAVES.iter()
      .for_each(|wave| wave.draw(&mut image, &metrics));

    let (cx, cy) = metrics.pin_center();
    let disk = metrics.px(120.0) / 2;
    geometry::ellipse_in_box([cx - disk, cy - disk, cx + disk, cy + disk], size)
      .texture(white(230))
      .draw(&mut image);

    let pin = metrics.px(60.0);
    geometry::ellipse_in_box([cx - pin / 4, cy - pin / 3, cx + pin / 4, cy + pin / 3], size)
      .texture(BLUE)
      .draw(&mut image);
    let dot = metrics.px(15.0) / 2;
    geometry::ellipse_in_box([cx - dot, cy - dot, cx + dot, cy + dot], size)
      .texture(white(255))
      .draw(&mut image);

    if size >= CAPTION_MIN_SIZE {
      if let Some(caption) = &self.caption {
        if let Err(e) = self.draw_caption(&mut image, &metrics, caption) {
          log::warn!("unable to add caption to {}x{} icon: {}", size, size, e);
        }
      }
    }

    image
  }

  fn caption_font(&self, caption: &str) -> Result<&CaptionFont, CaptionError> {
    self.font
      .get_or_init(|| match CaptionFont::probe(&self.fonts, caption) {
        Ok(font) => {
          log::info!("caption font: {}", font.path().display());
          Some(font)
        }
        Err(e) => {
          log::debug!("font probing failed: {}", e);
          None
        }
      })
      .as_ref()
      .ok_or(CaptionError::NoUsableFont)
  }

  fn draw_caption(&self, image: &mut RgbaImage, metrics: &Metrics, caption: &str) -> Result<(), CaptionError> {
    let font = self.caption_font(caption)?;
    let font_size = metrics.px(48.0);
    let text_width = font.measure(caption, font_size as f32).round() as i32;
    let text_x = (metrics.size - text_width).div_euclid(2);
    let text_y = metrics.frac(0.75);
    let padding = metrics.px(20.0);

    geometry::rounded_rect_in_box(
      [
        text_x - padding,
        text_y - padding,
        text_x + text_width + padding,
        text_y + font_size + padding
      ],
      metrics.px(15.0) as f32,
      image.width()
    )
      .texture(white(230))
      .draw(image);

    font.draw(image, caption, font_size as f32, Point2D::new(text_x as f32, text_y as f32), BLUE);
    Ok(())
  }
}
