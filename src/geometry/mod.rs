//! .
//!
//! The origin of coordinate system is in top-left corner. World space spans `[0, 1]` along the
//! shortest side of the canvas; unit shapes live in the interval `[-1, 1]`, centered in the origin.

use {
  euclid::{Point2D, Box2D, Vector2D as V2, Size2D},
  num_traits::NumCast,
  crate::sdf::SDF
};

pub mod shapes;
pub use shapes::*;

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;
/// Normalized coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct WorldSpace;

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// Something inside a rectangular area.
pub trait Shape: SDF<f32> + BoundingBox<f32, WorldSpace> {
  fn translate<T>(self, offset: V2<T, WorldSpace>) -> Translation<Self, T> where Self: Sized {
    Translation { shape: self, offset }
  }
  /// Scale around the center of shape's bounding box
  fn scale<T>(self, scale: V2<T, WorldSpace>) -> Scale<Self, T> where Self: Sized {
    Scale { shape: self, scale }
  }
  fn texture<T>(self, texture: T) -> crate::drawing::Texture<Self, T> where Self: Sized {
    crate::drawing::Texture { shape: self, texture }
  }
}
impl <T> Shape for T where T: SDF<f32> + BoundingBox<f32, WorldSpace> {}

#[derive(Debug, Copy, Clone)]
pub struct Translation<S, T> {
  pub shape: S,
  pub offset: V2<T, WorldSpace>
}
impl <S> BoundingBox<f32, WorldSpace> for Translation<S, f32>
  where S: BoundingBox<f32, WorldSpace> {
  fn bounding_box(&self) -> Box2D<f32, WorldSpace> {
    self.shape.bounding_box().translate(self.offset)
  }
}

/// Scale around the center of shape's bounding box
#[derive(Debug, Copy, Clone)]
pub struct Scale<S, T> {
  pub shape: S,
  pub scale: V2<T, WorldSpace>
}
impl <S> BoundingBox<f32, WorldSpace> for Scale<S, f32>
  where S: BoundingBox<f32, WorldSpace> {
  fn bounding_box(&self) -> Box2D<f32, WorldSpace> {
    let c = self.shape.bounding_box().center().to_vector();
    self.shape.bounding_box()
      .translate(-c)
      .scale(self.scale.x, self.scale.y)
      .translate(c)
  }
}

pub fn to_world_space<T: NumCast + Copy>(
  point: Point2D<T, PixelSpace>,
  resolution: Size2D<T, PixelSpace>
) -> Point2D<f32, WorldSpace> {
  let resolution = resolution.to_f32();
  let side = resolution.width.min(resolution.height);
  (point.to_f32().to_vector() / side)
    .cast_unit()
    .to_point()
}

/// Axis-aligned ellipse inscribed into a pixel box `[x0, y0, x1, y1]`, both corners inclusive.
pub fn ellipse_in_box(bbox: [i32; 4], resolution: u32) -> Scale<Translation<Circle, f32>, f32> {
  let rect = pixel_box(bbox, resolution);
  Circle
    .translate(rect.center().to_vector())
    .scale(rect.size().to_vector() / 2.0)
}

/// Rounded rectangle covering a pixel box `[x0, y0, x1, y1]`, both corners inclusive.
pub fn rounded_rect_in_box(bbox: [i32; 4], radius: f32, resolution: u32) -> Translation<RoundedRect, f32> {
  let rect = pixel_box(bbox, resolution);
  RoundedRect {
    half_size: rect.size().to_vector() / 2.0,
    radius: radius / resolution as f32
  }.translate(rect.center().to_vector())
}

/// Center of a pixel in world space.
pub fn pixel_center(x: i32, y: i32, resolution: u32) -> Point2D<f32, WorldSpace> {
  to_world_space(
    Point2D::<_, PixelSpace>::new(x as f32 + 0.5, y as f32 + 0.5),
    Size2D::splat(resolution as f32)
  )
}

fn pixel_box([x0, y0, x1, y1]: [i32; 4], resolution: u32) -> Box2D<f32, WorldSpace> {
  let min = Point2D::<_, PixelSpace>::new(x0.min(x1), y0.min(y1)).to_f32();
  let max = Point2D::<_, PixelSpace>::new(x0.max(x1) + 1, y0.max(y1) + 1).to_f32();
  let resolution = Size2D::splat(resolution as f32);
  Box2D::new(
    to_world_space(min, resolution),
    to_world_space(max, resolution)
  )
}
