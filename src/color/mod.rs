//! Color space conversion module
//!
//! This module handles conversion between integer RGB and the
//! hue/lightness/saturation representation used for classification
//! and recoloring.

pub mod conversion;

pub use conversion::{hls_to_rgb, rgb_to_hls};
