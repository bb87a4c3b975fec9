//! Template image loading
//!
//! Templates are the small fixed set of source photographs (one per
//! subject kind) reused read-only across every generated product image.
//! Each template is decoded at most once per batch run. A template file
//! that is absent is fatal; a file that exists but fails to decode is
//! remembered so that every item of that kind reports a per-item failure
//! instead of aborting the run.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbImage};
use log::debug;

use crate::detection::SubjectKind;
use crate::error::{RecolorError, Result};

/// Load a template photo as RGB, flattening transparency onto white.
pub fn load_template(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|e| {
        RecolorError::image_load(format!("failed to decode template {}", path.display()), e)
    })?;
    Ok(flatten_to_rgb(img))
}

/// Normalize any decoded image to RGB against a white background.
///
/// Product photos are shot on white, so transparent template regions
/// composite onto white rather than black.
fn flatten_to_rgb(img: DynamicImage) -> RgbImage {
    match img {
        DynamicImage::ImageRgb8(rgb) => rgb,
        other => {
            let rgba = other.to_rgba8();
            let (width, height) = rgba.dimensions();
            let mut out = RgbImage::new(width, height);
            for (src, dst) in rgba.pixels().zip(out.pixels_mut()) {
                let alpha = src[3] as f32 / 255.0;
                for c in 0..3 {
                    let v = src[c] as f32 * alpha + 255.0 * (1.0 - alpha);
                    dst[c] = v.round() as u8;
                }
            }
            out
        }
    }
}

/// The per-kind template images for one batch run.
///
/// Decode results are kept per kind: `get` hands back either the shared
/// read-only image or the original decode failure message.
pub struct TemplateSet {
    templates: HashMap<SubjectKind, std::result::Result<RgbImage, String>>,
}

impl TemplateSet {
    /// Load the templates for the given kinds.
    ///
    /// Returns a fatal [`RecolorError::TemplateMissing`] if any required
    /// template file does not exist. Decode failures are captured per
    /// kind and surface later through [`TemplateSet::get`].
    pub fn load<I>(kinds: I, path_for: impl Fn(SubjectKind) -> PathBuf) -> Result<Self>
    where
        I: IntoIterator<Item = SubjectKind>,
    {
        let mut templates = HashMap::new();
        for kind in kinds {
            if templates.contains_key(&kind) {
                continue;
            }
            let path = path_for(kind);
            if !path.exists() {
                return Err(RecolorError::TemplateMissing { kind, path });
            }
            let slot = match load_template(&path) {
                Ok(img) => {
                    debug!(
                        "loaded {} template {} ({}x{})",
                        kind,
                        path.display(),
                        img.width(),
                        img.height()
                    );
                    Ok(img)
                }
                Err(e) => Err(e.to_string()),
            };
            templates.insert(kind, slot);
        }
        Ok(Self { templates })
    }

    /// Get the template image for a kind.
    ///
    /// A kind whose template failed to decode returns the stored failure
    /// as a per-item [`RecolorError::ImageLoad`].
    pub fn get(&self, kind: SubjectKind) -> Result<&RgbImage> {
        match self.templates.get(&kind) {
            Some(Ok(img)) => Ok(img),
            Some(Err(message)) => Err(RecolorError::ImageLoad {
                message: message.clone(),
                source: None,
            }),
            None => Err(RecolorError::ImageLoad {
                message: format!("no template loaded for {}", kind),
                source: None,
            }),
        }
    }
}
