//! Per-pixel hue-targeted recolor transform
//!
//! Subject pixels take the target color's hue outright, while lightness
//! and saturation are blended between the template pixel and the target
//! with kind-specific weights, then clamped into a kind-specific safe
//! range. Shading, highlights and the translucency feel of fruit teas
//! survive because the template's own lightness keeps the larger share
//! of the blend. Non-subject pixels pass through bit-identical.
//!
//! The transform is pixel-local and order-independent: no pixel's output
//! depends on any other pixel.

use image::{Rgb, RgbImage};

use crate::color::conversion::{hls_to_rgb, rgb_to_hls};
use crate::detection::{is_subject_pixel, SubjectKind};

/// Blend weights and clamp bounds for one subject kind.
///
/// `keep` weights apply to the template pixel's component; the target
/// color's component receives the complement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendProfile {
    /// Weight of the template pixel's lightness in the blend
    pub lightness_keep: f32,
    /// Weight of the template pixel's saturation in the blend
    pub saturation_keep: f32,
    /// Floor for blended lightness and saturation
    pub clamp_min: f32,
    /// Ceiling for blended lightness and saturation
    pub clamp_max: f32,
}

/// Opaque drinks keep most of their lightness for creaminess
const MILK_TEA_BLEND: BlendProfile = BlendProfile {
    lightness_keep: 0.6,
    saturation_keep: 0.4,
    clamp_min: 0.10,
    clamp_max: 0.95,
};

/// Fruit teas keep even more original brightness for the transparency feel
const FRUIT_TEA_BLEND: BlendProfile = BlendProfile {
    lightness_keep: 0.7,
    saturation_keep: 0.5,
    clamp_min: 0.10,
    clamp_max: 0.95,
};

/// Cup body takes the target color more strongly than the drinks do
const PAPER_CUP_BLEND: BlendProfile = BlendProfile {
    lightness_keep: 0.5,
    saturation_keep: 0.3,
    clamp_min: 0.15,
    clamp_max: 0.90,
};

impl SubjectKind {
    /// Blend weights and clamp bounds for this kind
    pub const fn blend_profile(self) -> BlendProfile {
        match self {
            SubjectKind::MilkTea => MILK_TEA_BLEND,
            SubjectKind::FruitTea => FRUIT_TEA_BLEND,
            SubjectKind::PaperCup => PAPER_CUP_BLEND,
        }
    }
}

/// Recolorer for one target color and subject kind.
///
/// The target color is converted to HLS once at construction; the
/// recolorer is then reusable across any number of template images.
#[derive(Debug, Clone)]
pub struct Recolorer {
    kind: SubjectKind,
    profile: BlendProfile,
    target_h: f32,
    target_l: f32,
    target_s: f32,
}

impl Recolorer {
    /// Create a recolorer for the given target color and subject kind
    pub fn new(target: Rgb<u8>, kind: SubjectKind) -> Self {
        let Rgb([r, g, b]) = target;
        let (target_h, target_l, target_s) = rgb_to_hls(r, g, b);
        Self {
            kind,
            profile: kind.blend_profile(),
            target_h,
            target_l,
            target_s,
        }
    }

    /// Subject kind this recolorer classifies against
    pub fn kind(&self) -> SubjectKind {
        self.kind
    }

    /// Transform a single pixel.
    ///
    /// Returns the input unchanged when the pixel is not classified as
    /// subject for this recolorer's kind.
    pub fn recolor_pixel(&self, pixel: Rgb<u8>) -> Rgb<u8> {
        let Rgb([r, g, b]) = pixel;
        if !is_subject_pixel(r, g, b, self.kind) {
            return pixel;
        }

        let (_, orig_l, orig_s) = rgb_to_hls(r, g, b);
        let p = &self.profile;

        let new_l = orig_l * p.lightness_keep + self.target_l * (1.0 - p.lightness_keep);
        let new_s = orig_s * p.saturation_keep + self.target_s * (1.0 - p.saturation_keep);

        let new_l = new_l.clamp(p.clamp_min, p.clamp_max);
        let new_s = new_s.clamp(p.clamp_min, p.clamp_max);

        let (r, g, b) = hls_to_rgb(self.target_h, new_l, new_s);
        Rgb([r, g, b])
    }

    /// Transform a whole template into a new image buffer.
    ///
    /// The template is read-only; output dimensions equal the template's.
    pub fn recolor_image(&self, template: &RgbImage) -> RgbImage {
        let mut result = template.clone();
        for pixel in result.pixels_mut() {
            *pixel = self.recolor_pixel(*pixel);
        }
        result
    }
}
