use {
  super::*,
  crate::caption::CaptionFont,
  anyhow::Result,
  std::path::PathBuf,
};

fn without_fonts() -> IconRenderer {
  IconRenderer::new().with_fonts(Vec::<PathBuf>::new())
}

fn fixture_font() -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/DejaVuSans.ttf")
}

fn blue_pixels(image: &RgbaImage, xs: std::ops::Range<u32>, ys: std::ops::Range<u32>) -> usize {
  ys.flat_map(|y| xs.clone().map(move |x| (x, y)))
    .filter(|&(x, y)| {
      let p = image.get_pixel(x, y).0;
      p[0] < 120 && p[2] > 200
    })
    .count()
}

fn installed_font() -> Option<PathBuf> {
  FONT_CANDIDATES.iter()
    .map(PathBuf::from)
    .find(|path| CaptionFont::load(path, DEFAULT_CAPTION).is_ok())
}

fn assert_close(actual: Rgba<u8>, expected: [u8; 4]) {
  let close = actual.0.iter().zip(expected)
    .all(|(&a, e)| (a as i16 - e as i16).abs() <= 2);
  assert!(close, "{:?} is not close to {:?}", actual.0, expected);
}

#[test] fn dimensions_match_size() {
  let renderer = without_fonts();
  for size in [1, 2, 16, 48, 255, 256, 400, 1024] {
    let image = renderer.render(size);
    assert_eq!(image.dimensions(), (size, size));
  }
  assert_eq!(renderer.render(0).dimensions(), (0, 0));
}

#[test] fn metrics() {
  let m = Metrics::new(1024);
  assert_eq!(m.margin(), 74);
  assert_eq!(m.frac(0.45), 460);
  assert_eq!(m.pin_center(), (512, 358));

  let m = Metrics::new(400);
  assert_eq!(m.margin(), 28);
  assert_eq!(m.frac(0.35), 140);
  assert_eq!(m.px(48.0), 18);

  assert_eq!(Metrics::new(48).margin(), 3);
}

#[test] fn wave_points() {
  let m = Metrics::new(1024);
  let [first, second, third] = WAVES.map(|wave| wave.points(&m));

  assert_eq!(first.len(), 78);
  assert_eq!(first[0], (124, 430));
  // second third of the span is raised
  assert_eq!(first[26], (384, 490));
  // last third is a sawtooth ramp
  assert_eq!(first[52], (644, 468));

  assert_eq!(second[0], (124, 538));
  assert_eq!(second[8], (204, 588));
  assert_eq!(second[16], (284, 538));

  assert_eq!(third.len(), 72);
  assert_eq!(third[0], (154, 645));
  assert_eq!(third[6], (214, 685));

  let widths = WAVES.map(|wave| wave.stroke_width(&Metrics::new(400)));
  assert_eq!(widths, [11, 9, 7]);
}

#[test] fn favicon_has_no_waves() {
  let m = Metrics::new(48);
  assert!(WAVES.iter().all(|wave| wave.points(&m).is_empty()));
}

#[test] fn layers() {
  let image = without_fonts().render(1024);

  assert_eq!(image.get_pixel(0, 0).0, [0; 4]);
  // background disk
  assert_close(*image.get_pixel(512, 100), BLUE.0);
  // first wave, over the background
  let wave = image.get_pixel(200, 430).0;
  assert!(wave[0] > 150 && wave[3] == 255, "{:?}", wave);
  // foreground disk, mostly white
  let disk = image.get_pixel(512, 313).0;
  assert!(disk[0] > 220 && disk[2] > 240 && disk[3] == 255, "{:?}", disk);
  // pin body and inner dot
  assert_close(*image.get_pixel(512, 345), BLUE.0);
  assert_close(*image.get_pixel(512, 358), [255; 4]);
}

#[test] fn no_caption_without_fonts() {
  let image = without_fonts().render(1024);
  // where the caption backdrop would be
  assert_close(*image.get_pixel(512, 755), BLUE.0);
  assert_close(*image.get_pixel(512, 800), BLUE.0);
}

#[test] fn small_icons_ignore_fonts() {
  let with_fonts = IconRenderer::new().render(255);
  let without = without_fonts().render(255);
  assert_eq!(with_fonts.as_raw(), without.as_raw());
}

#[test] fn disabled_caption() {
  let renderer = IconRenderer::new().with_caption(None);
  assert_eq!(renderer.caption(), None);
  assert_eq!(renderer.render(400).as_raw(), without_fonts().render(400).as_raw());
}

#[test] fn caption_backdrop() -> Result<()> {
  let font = match installed_font() {
    Some(font) => font,
    None => {
      eprintln!("no caption font installed, skipping");
      return Ok(());
    }
  };
  let renderer = IconRenderer::new().with_fonts([font]);
  let image = renderer.render(1024);

  // top padding of the backdrop, above the text
  let backdrop = image.get_pixel(512, 755).0;
  assert!(backdrop[0] > 200 && backdrop[3] == 255, "{:?}", backdrop);
  assert_ne!(image.as_raw(), without_fonts().render(1024).as_raw());

  // the text itself is blue on the backdrop
  assert!(blue_pixels(&image, 440..584, 768..816) > 0);
  Ok(())
}

#[test] fn opaque_disk_stays_opaque() {
  let image = without_fonts().render(1024);
  let translucent = image.enumerate_pixels()
    .filter(|&(x, y, _)| {
      let (dx, dy) = (x as f32 + 0.5 - 512.5, y as f32 + 0.5 - 512.5);
      (dx * dx + dy * dy).sqrt() < 430.0
    })
    .filter(|(_, _, p)| p.0[3] < 255)
    .count();
  assert_eq!(translucent, 0);
}

#[test] fn latin_caption() {
  let renderer = IconRenderer::new()
    .with_fonts([fixture_font()])
    .with_caption(Some("River Patrol".to_string()));
  let image = renderer.render(1024);

  // backdrop padding above the ascender line
  let backdrop = image.get_pixel(512, 755).0;
  assert!(backdrop[0] > 200 && backdrop[3] == 255, "{:?}", backdrop);
  // glyphs hang below the ascender line at y = 768, never above it
  assert_eq!(blue_pixels(&image, 440..584, 750..766), 0);
  assert!(blue_pixels(&image, 440..584, 768..830) > 0);
  // the backdrop stops at the padding below the em box
  assert_close(*image.get_pixel(512, 845), BLUE.0);
}

#[test] fn caption_wider_than_icon() {
  let renderer = IconRenderer::new()
    .with_fonts([fixture_font()])
    .with_caption(Some("River Patrol ".repeat(6)));
  let image = renderer.render(256);
  assert_eq!(image.dimensions(), (256, 256));
  // the backdrop runs past both edges, over the transparent corners
  assert_close(*image.get_pixel(0, 189), [255, 255, 255, 230]);
  assert_close(*image.get_pixel(255, 189), [255, 255, 255, 230]);
}
