use {
  image::{Rgba, RgbaImage},
  crate::{
    drawing::Draw,
    geometry::{self, Polyline, Shape},
    icon::{Metrics, white}
  }
};

/// Horizontal distance between two wave points, in pixels at any icon size.
const STEP: usize = 10;

/// Vertical offset of a wave point from its baseline.
#[derive(Debug, Copy, Clone)]
pub enum Pattern {
  /// Low over the first third of the span, high over the second, a sawtooth ramp over the last.
  Thirds { amplitude: f64, ramp: f64, ramp_period: i32 },
  /// Low and high plateaus alternating every `half_period` pixels.
  Square { amplitude: f64, half_period: i32 }
}

/// One decorative stroke. Lengths are in pixels of a 1024 px icon, unless noted.
#[derive(Debug, Copy, Clone)]
pub struct Wave {
  /// fraction of the icon size
  pub baseline: f64,
  /// unscaled distance of both ends from the background margin
  pub inset: i32,
  pub width: f64,
  pub alpha: u8,
  pub pattern: Pattern
}

/// Top to bottom; every next wave is flatter, thinner, and fainter.
pub const WAVES: [Wave; 3] = [
  Wave {
    baseline: 0.45, inset: 50, width: 30.0, alpha: 200,
    pattern: Pattern::Thirds { amplitude: 30.0, ramp: 20.0, ramp_period: 100 }
  },
  Wave {
    baseline: 0.55, inset: 50, width: 25.0, alpha: 150,
    pattern: Pattern::Square { amplitude: 25.0, half_period: 80 }
  },
  Wave {
    baseline: 0.65, inset: 80, width: 20.0, alpha: 100,
    pattern: Pattern::Square { amplitude: 20.0, half_period: 60 }
  },
];

impl Pattern {
  fn offset(&self, dx: i32, span: f64, metrics: &Metrics) -> i32 {
    match *self {
      Pattern::Thirds { amplitude, ramp, ramp_period } => {
        let third = span / 3.0;
        if (dx as f64) < third {
          -metrics.px(amplitude)
        } else if (dx as f64) < 2.0 * third {
          metrics.px(amplitude)
        } else {
          (ramp * metrics.scale * dx.rem_euclid(ramp_period) as f64 / (ramp_period / 2) as f64) as i32
        }
      }
      Pattern::Square { amplitude, half_period } => {
        if dx.rem_euclid(2 * half_period) < half_period {
          -metrics.px(amplitude)
        } else {
          metrics.px(amplitude)
        }
      }
    }
  }
}

impl Wave {
  /// Pixel coordinates of the polyline. Empty when the icon is too small to fit the insets.
  pub fn points(&self, metrics: &Metrics) -> Vec<(i32, i32)> {
    let margin = metrics.margin();
    let start = margin + self.inset;
    let stop = metrics.size - margin - self.inset;
    let span = (stop - start) as f64;
    let baseline = metrics.frac(self.baseline);

    (start..stop)
      .step_by(STEP)
      .map(|x| (x, baseline + self.pattern.offset(x - start, span, metrics)))
      .collect()
  }

  pub fn stroke_width(&self, metrics: &Metrics) -> i32 {
    metrics.px(self.width)
  }

  pub fn color(&self) -> Rgba<u8> {
    white(self.alpha)
  }

  pub fn draw(&self, image: &mut RgbaImage, metrics: &Metrics) {
    let points = self.points(metrics);
    let width = self.stroke_width(metrics);
    if points.len() < 2 || width <= 0 {
      log::trace!("skipping wave at {}: {} points, width {}", self.baseline, points.len(), width);
      return;
    }
    let resolution = metrics.size as u32;
    Polyline {
      points: points.into_iter()
        .map(|(x, y)| geometry::pixel_center(x, y, resolution))
        .collect(),
      half_width: width as f32 / 2.0 / resolution as f32
    }
      .texture(self.color())
      .draw(image);
  }
}
