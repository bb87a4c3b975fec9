//! # Recolor Drinks
//!
//! A Rust crate for generating bubble tea menu product images by
//! recoloring a small set of template photographs.
//!
//! The library:
//! - Classifies template pixels as drink liquid or cup body via a
//!   hue/saturation/lightness heuristic
//! - Blends subject pixels toward a per-product target color while
//!   preserving the template's shading and highlights
//! - Drives idempotent batch generation: one JPEG per catalog entry,
//!   existing outputs skipped, per-item failures counted but never
//!   aborting the run
//!
//! ## Example
//!
//! ```rust,no_run
//! use recolor_drinks::{recolor_product, RgbColor, SubjectKind};
//! use std::path::Path;
//!
//! let image = recolor_product(
//!     Path::new("public/images/original-cup.jpg"),
//!     RgbColor::new(120, 80, 50),
//!     SubjectKind::MilkTea,
//! )?;
//! image.save("tra-sua-socola.jpg")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::path::Path;

use image::RgbImage;

pub mod batch;
pub mod color;
pub mod config;
pub mod constants;
pub mod detection;
pub mod error;
pub mod recolor;
pub mod template;

pub use batch::{run_batch, BatchSummary, ItemOutcome};
pub use config::{BatchConfig, ProductSpec, RgbColor, TemplatePaths};
pub use detection::SubjectKind;
pub use error::{RecolorError, Result};
pub use recolor::Recolorer;

/// Recolor a single template into one product image.
///
/// Loads the template, recolors its subject region toward `target`, and
/// returns the new image buffer. This is the single-item entry point;
/// batch generation with skip-if-exists semantics goes through
/// [`run_batch`].
///
/// # Errors
///
/// Returns [`RecolorError::ImageLoad`] if the template cannot be read or
/// decoded.
pub fn recolor_product(
    template_path: &Path,
    target: RgbColor,
    kind: SubjectKind,
) -> Result<RgbImage> {
    let template = template::load_template(template_path)?;
    let recolorer = Recolorer::new(target.into(), kind);
    Ok(recolorer.recolor_image(&template))
}
