use {
  euclid::{Point2D, Vector2D as V2},
  crate::geometry::{WorldSpace, Shape, Scale, Translation},
};

/// Signed distance function
pub trait SDF<T> {
  fn sdf(&self, pixel: Point2D<T, WorldSpace>) -> T;
}

impl <S> SDF<f32> for Translation<S, f32>
  where S: Shape {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    self.shape.sdf(pixel - self.offset)
  }
}

/// Exact for uniform scale. For a non-uniform one (ellipses), the distance is divided by the
/// length of the scaled gradient, which is accurate near the boundary, where anti-aliasing needs it.
impl <S> SDF<f32> for Scale<S, f32>
  where S: Shape {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    let c = self.shape.bounding_box().center();
    let pixel = ((pixel - c)
      .component_div(self.scale) + c.to_vector())
      .to_point();
    let distance = self.shape.sdf(pixel);
    if self.scale.x == self.scale.y {
      return distance * self.scale.x;
    }

    // central differences in the shape's own space
    let h = 1e-3;
    let (dx, dy) = (V2::new(h, 0.0), V2::new(0.0, h));
    let gradient = V2::<_, WorldSpace>::new(
      (self.shape.sdf(pixel + dx) - self.shape.sdf(pixel - dx)) / (2.0 * h),
      (self.shape.sdf(pixel + dy) - self.shape.sdf(pixel - dy)) / (2.0 * h)
    ).component_div(self.scale);
    match gradient.length() {
      length if length > f32::EPSILON => distance / length,
      _ => distance * self.scale.x.min(self.scale.y)
    }
  }
}
