//! Heuristic subject-pixel classification
//!
//! Classifies a pixel as recolorable subject when its hue falls in the
//! brown/orange band characteristic of the template drink or cup, with a
//! kind-specific saturation floor and lightness window.
//!
//! The predicate is a heuristic, not exact segmentation: logo, lid, ice
//! or highlight pixels that happen to fall inside the band are recolored
//! too, and true subject pixels in deep shadow or blown-out highlights
//! are left untouched. The threshold values are a behavioral contract
//! with the existing menu assets; changing them changes the rendered
//! look of every product image.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::conversion::rgb_to_hls;

/// Subject region tag, selecting thresholds and blend weights.
///
/// Milk teas and fruit teas use overlapping hue bands with different
/// saturation and lightness floors; the two definitions are deliberately
/// kept separate per drink transparency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectKind {
    /// Opaque milk-based drink liquid
    MilkTea,
    /// Translucent fruit tea liquid
    FruitTea,
    /// Bare paper cup body
    PaperCup,
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubjectKind::MilkTea => write!(f, "milk tea"),
            SubjectKind::FruitTea => write!(f, "fruit tea"),
            SubjectKind::PaperCup => write!(f, "paper cup"),
        }
    }
}

/// Classification thresholds for one subject kind.
///
/// Hue bounds are inclusive; the saturation floor and both lightness
/// bounds are strict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubjectThresholds {
    /// Lower hue bound, fraction of a turn
    pub hue_min: f32,
    /// Upper hue bound, fraction of a turn
    pub hue_max: f32,
    /// Minimum saturation for a subject pixel
    pub min_saturation: f32,
    /// Pixels at or below this lightness are shadow, left untouched
    pub min_lightness: f32,
    /// Pixels at or above this lightness are highlights, left untouched
    pub max_lightness: f32,
}

/// Brownish/tan liquid tones of the milk tea template
const MILK_TEA_THRESHOLDS: SubjectThresholds = SubjectThresholds {
    hue_min: 0.02,
    hue_max: 0.15,
    min_saturation: 0.15,
    min_lightness: 0.20,
    max_lightness: 0.90,
};

/// Orange/amber liquid tones of the fruit tea template, more saturated
const FRUIT_TEA_THRESHOLDS: SubjectThresholds = SubjectThresholds {
    hue_min: 0.02,
    hue_max: 0.18,
    min_saturation: 0.20,
    min_lightness: 0.25,
    max_lightness: 0.85,
};

/// Brown/tan body of the paper cup template
const PAPER_CUP_THRESHOLDS: SubjectThresholds = SubjectThresholds {
    hue_min: 0.02,
    hue_max: 0.12,
    min_saturation: 0.15,
    min_lightness: 0.20,
    max_lightness: 0.85,
};

impl SubjectKind {
    /// Classification thresholds for this kind
    pub const fn thresholds(self) -> SubjectThresholds {
        match self {
            SubjectKind::MilkTea => MILK_TEA_THRESHOLDS,
            SubjectKind::FruitTea => FRUIT_TEA_THRESHOLDS,
            SubjectKind::PaperCup => PAPER_CUP_THRESHOLDS,
        }
    }
}

/// Check whether a pixel belongs to the recolorable subject region.
pub fn is_subject_pixel(r: u8, g: u8, b: u8, kind: SubjectKind) -> bool {
    let (h, l, s) = rgb_to_hls(r, g, b);
    let t = kind.thresholds();

    let in_band = h >= t.hue_min && h <= t.hue_max;
    let saturated = s > t.min_saturation;
    let not_shadow = l > t.min_lightness;
    let not_highlight = l < t.max_lightness;

    in_band && saturated && not_shadow && not_highlight
}
