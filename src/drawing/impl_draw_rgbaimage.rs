#![allow(non_snake_case)]
use {
  euclid::{Point2D, Size2D, Vector2D as V2},
  image::{Rgba, RgbaImage},
  crate::{
    drawing::{Draw, Shape, Texture, rescale_bounding_box},
    geometry::{BoundingBox, PixelSpace},
    sdf::SDF
  }
};

impl <Cutie> Draw<RgbaImage> for Texture<Cutie, Rgba<u8>>
  where Cutie: Shape
{
  fn draw(&self, image: &mut RgbaImage) {
    let resolution: Size2D<_, PixelSpace> = image.dimensions().into();
    let (bounding_box, offset, min_side) = rescale_bounding_box(self.bounding_box(), resolution);
    let bounding_box = match bounding_box {
      Some(x) => x,
      None => return // bounding box has no intersection with screen at all
    };
    let Δp = 1.0 / min_side;

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .map(|(y, x)| Point2D::<_, PixelSpace>::from([x, y]))
      .for_each(|pixel| {
        // sample at the pixel center
        let pixel_world = ((pixel.to_f32() + V2::splat(0.5) - offset).to_vector() / min_side)
          .cast_unit().to_point();
        let sdf = self.sdf(pixel_world);
        let pixel = image.get_pixel_mut(pixel.x, pixel.y);
        *pixel = sdf_overlay_aa(sdf, Δp, *pixel, self.texture);
      });
  }
}

fn sdf_overlay_aa(sdf: f32, Δp: f32, col1: Rgba<u8>, col2: Rgba<u8>) -> Rgba<u8> {
  let Δf = (0.5 * Δp - sdf) // antialias
    .clamp(0.0, Δp);
  overlay(col1, col2, Δf / Δp)
}

/// Blend `color` over `pixel`, with its alpha multiplied by `coverage` in `[0, 1]`.
pub fn blend_coverage(pixel: &mut Rgba<u8>, color: Rgba<u8>, coverage: f32) {
  *pixel = overlay(*pixel, color, coverage.clamp(0.0, 1.0));
}

fn overlay(col1: Rgba<u8>, col2: Rgba<u8>, coverage: f32) -> Rgba<u8> {
  let fg_a = col2.0[3] as f32 / 255.0 * coverage;
  if fg_a <= 0.0 {
    return col1;
  }
  // "over" blending, non-premultiplied; rounded, so an opaque destination stays opaque
  let bg_a = col1.0[3] as f32 / 255.0;
  let out_a = fg_a + bg_a * (1.0 - fg_a);
  let channel = |fg: u8, bg: u8| {
    let c = (fg as f32 * fg_a + bg as f32 * bg_a * (1.0 - fg_a)) / out_a;
    c.round().clamp(0.0, 255.0) as u8
  };
  Rgba([
    channel(col2.0[0], col1.0[0]),
    channel(col2.0[1], col1.0[1]),
    channel(col2.0[2], col1.0[2]),
    (out_a * 255.0).round().clamp(0.0, 255.0) as u8
  ])
}
