use {
  std::path::PathBuf,
  clap::Parser,
  env_logger::{Env, Target},
  river_patrol_icons::{
    batch::{self, DEFAULT_OUTPUT_DIR, FOLLOW_UP},
    caption::{DEFAULT_CAPTION, FONT_CANDIDATES},
    error::Result,
    icon::IconRenderer
  }
};

#[derive(Debug, Parser)]
#[command(name = "river-patrol-icons")]
#[command(about = "Generate the river patrol app icons")]
struct Args {
  /// Directory the PNG files are written to. Must exist.
  #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
  out_dir: PathBuf,

  /// Caption font, tried before the built-in candidates. May be repeated.
  #[arg(short = 'f', long = "font", value_name = "PATH")]
  fonts: Vec<PathBuf>,

  /// Caption drawn on icons of 256 px and larger.
  #[arg(long, value_name = "TEXT", default_value = DEFAULT_CAPTION)]
  caption: String,

  /// Leave the caption out at every size.
  #[arg(long)]
  no_caption: bool,
}

fn main() -> Result<()> {
  env_logger::Builder::from_env(Env::default().default_filter_or("info"))
    .target(Target::Stdout)
    .init();
  let args = Args::parse();

  let renderer = IconRenderer::new()
    .with_fonts(args.fonts.into_iter()
      .chain(FONT_CANDIDATES.iter().map(PathBuf::from)))
    .with_caption((!args.no_caption).then_some(args.caption));

  batch::generate(&args.out_dir, &renderer)?;

  println!("\nAll icons generated!");
  println!("Run '{}' to apply the new icons", FOLLOW_UP);
  Ok(())
}
