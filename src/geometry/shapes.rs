use {
  super::{BoundingBox, WorldSpace},
  crate::sdf::SDF,
  euclid::{Box2D, Point2D, Vector2D as V2}
};

/// Unit circle
#[derive(Debug, Copy, Clone)]
pub struct Circle;

/// Rectangle with rounded corners, centered in the origin.
#[derive(Debug, Copy, Clone)]
pub struct RoundedRect {
  pub half_size: V2<f32, WorldSpace>,
  pub radius: f32
}

/// Open polyline stroked with round caps and joins.
#[derive(Debug, Clone)]
pub struct Polyline {
  pub points: Vec<Point2D<f32, WorldSpace>>,
  pub half_width: f32
}

impl<S> BoundingBox<f32, S> for Circle {
  fn bounding_box(&self) -> Box2D<f32, S> {
    Box2D::new(
      Point2D::splat(-1.0),
      Point2D::splat(1.0)
    )}}

impl BoundingBox<f32, WorldSpace> for RoundedRect {
  fn bounding_box(&self) -> Box2D<f32, WorldSpace> {
    Box2D::new(
      (-self.half_size).to_point(),
      self.half_size.to_point()
    )}}

impl BoundingBox<f32, WorldSpace> for Polyline {
  fn bounding_box(&self) -> Box2D<f32, WorldSpace> {
    Box2D::from_points(self.points.iter().copied())
      .inflate(self.half_width, self.half_width)
  }}

impl SDF<f32> for Circle {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    pixel.to_vector().length() - 1.0
  }
}

impl SDF<f32> for RoundedRect {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    let radius = self.radius
      .min(self.half_size.x)
      .min(self.half_size.y)
      .max(0.0);
    let dist = pixel.to_vector().abs() - self.half_size + V2::splat(radius);
    let outside_dist = dist
      .max(V2::splat(0.0))
      .length();
    let inside_dist = dist.x
      .max(dist.y)
      .min(0.0);
    outside_dist + inside_dist - radius
  }
}

impl SDF<f32> for Polyline {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    let centerline = match self.points.as_slice() {
      [] => return f32::MAX,
      [point] => (pixel - *point).length(),
      points => points
        .windows(2)
        .map(|segment| segment_distance(pixel, segment[0], segment[1]))
        .fold(f32::MAX, f32::min)
    };
    centerline - self.half_width
  }
}

fn segment_distance(
  pixel: Point2D<f32, WorldSpace>,
  a: Point2D<f32, WorldSpace>,
  b: Point2D<f32, WorldSpace>
) -> f32 {
  let pa = pixel - a;
  let ba = b - a;
  let len2 = ba.square_length();
  let h = if len2 > 0.0 {
    (pa.dot(ba) / len2).clamp(0.0, 1.0)
  } else {
    0.0
  };
  (pa - ba * h).length()
}
