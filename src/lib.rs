//! Procedural app icons for the river patrol app.
//!
//! The crate is split into a small rasterizer ([`sdf`], [`geometry`], [`drawing`]), which draws
//! shapes described by signed distance functions onto an [`image::RgbaImage`], the icon itself
//! ([`icon`], [`caption`]), and the [`batch`] driver that writes every icon size to disk.
//!
//! # Basic usage
//! ```no_run
//! # use river_patrol_icons::{error::Result, icon::IconRenderer};
//! # fn main() -> Result<()> {
//! let renderer = IconRenderer::new();
//! renderer.render(1024).save("icon.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! Custom shapes are drawn the same way the icon layers are:
//! ```
//! # use river_patrol_icons::{geometry::{Circle, Shape}, drawing::Draw};
//! # use euclid::Vector2D as V2;
//! # use image::{Rgba, RgbaImage};
//! let mut image = RgbaImage::new(64, 64);
//! Circle
//!   .translate(V2::splat(0.5)) // world space spans [0, 1] over the image
//!   .scale(V2::splat(0.25))
//!   .texture(Rgba([59, 130, 246, 255]))
//!   .draw(&mut image);
//! assert_eq!(image.get_pixel(32, 32).0[3], 255);
//! ```

pub mod error;
pub mod sdf;
pub mod geometry;
pub mod drawing;
pub mod caption;
pub mod icon;
pub mod batch;
mod util;
