//! Renders the fixed set of app icons and writes them as PNG files.

use {
  std::path::{Path, PathBuf},
  anyhow::Context,
  image::ImageFormat,
  crate::{
    error::Result,
    icon::IconRenderer,
    profile
  }
};

/// Output file name and icon size, in the order they are written.
pub const SIZE_TABLE: &[(&str, u32)] = &[
  ("icon.png", 1024),
  ("adaptive-icon.png", 1024),
  ("splash-icon.png", 400),
  ("favicon.png", 48),
];

/// Relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "assets/images";

/// Printed once all icons are written.
pub const FOLLOW_UP: &str = "npx expo prebuild --clean";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenIcon {
  pub path: PathBuf,
  pub size: u32,
  /// Encoded file size.
  pub bytes: u64
}

/// Write every icon of [`SIZE_TABLE`] into `out_dir`.
pub fn generate(out_dir: impl AsRef<Path>, renderer: &IconRenderer) -> Result<Vec<WrittenIcon>> {
  generate_table(out_dir, renderer, SIZE_TABLE)
}

/// Write one icon per `(file name, size)` entry. The directory must exist; the first failed write
/// aborts the batch.
pub fn generate_table(
  out_dir: impl AsRef<Path>,
  renderer: &IconRenderer,
  table: &[(&str, u32)]
) -> Result<Vec<WrittenIcon>> {
  use humansize::{FileSize, file_size_opts as options};

  table.iter()
    .map(|&(file_name, size)| {
      let path = out_dir.as_ref().join(file_name);
      println!("Generating {} ({}x{})...", file_name, size, size);

      let image = profile!(file_name, renderer.render(size));
      image.save_with_format(&path, ImageFormat::Png)
        .with_context(|| format!("failed to write {}", path.display()))?;
      let bytes = std::fs::metadata(&path)
        .with_context(|| format!("failed to stat {}", path.display()))?
        .len();

      println!(
        "Saved to {} ({})",
        path.display(),
        bytes.file_size(options::CONVENTIONAL).unwrap_or_else(|e| e)
      );
      Ok(WrittenIcon { path, size, bytes })
    })
    .collect()
}
