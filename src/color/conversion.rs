//! RGB to hue/lightness/saturation conversion
//!
//! Classification and recoloring both work on HLS components in the unit
//! interval: hue as a fraction of a full turn, lightness and saturation
//! as in the standard HSL model. Conversions are built on the `palette`
//! crate and are total over valid RGB input.

use palette::{FromColor, Hsl, Srgb};

/// Convert integer RGB to (hue, lightness, saturation), each in [0, 1].
///
/// Achromatic input yields hue 0 and saturation 0.
pub fn rgb_to_hls(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let srgb = Srgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
    let hsl: Hsl = Hsl::from_color(srgb);
    (
        hsl.hue.into_positive_degrees() / 360.0,
        hsl.lightness,
        hsl.saturation,
    )
}

/// Convert (hue, lightness, saturation) in [0, 1] back to integer RGB.
///
/// Channels are quantized with rounding, so a round trip through
/// [`rgb_to_hls`] reproduces the original triple to within ±1 per channel.
pub fn hls_to_rgb(h: f32, l: f32, s: f32) -> (u8, u8, u8) {
    let hsl = Hsl::new_srgb(h * 360.0, s, l);
    let srgb = Srgb::from_color(hsl);
    (
        (srgb.red.clamp(0.0, 1.0) * 255.0).round() as u8,
        (srgb.green.clamp(0.0, 1.0) * 255.0).round() as u8,
        (srgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_colors() {
        let (h, l, s) = rgb_to_hls(255, 0, 0);
        assert!(h.abs() < 1e-4);
        assert!((l - 0.5).abs() < 1e-4);
        assert!((s - 1.0).abs() < 1e-4);

        let (h, _, _) = rgb_to_hls(0, 255, 0);
        assert!((h - 1.0 / 3.0).abs() < 1e-4);

        let (h, _, _) = rgb_to_hls(0, 0, 255);
        assert!((h - 2.0 / 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_achromatic_has_no_saturation() {
        for v in [0u8, 128, 255] {
            let (_, l, s) = rgb_to_hls(v, v, v);
            assert!(s.abs() < 1e-4, "grey {} should be unsaturated", v);
            assert!((l - v as f32 / 255.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_brown_template_tone() {
        // The brown drink tone sits in the orange-brown hue band.
        let (h, l, s) = rgb_to_hls(200, 150, 100);
        assert!((h - 30.0 / 360.0).abs() < 1e-3);
        assert!((l - 0.588).abs() < 1e-3);
        assert!(s > 0.4 && s < 0.55);
    }

    #[test]
    fn test_round_trip_within_one_step() {
        // Sample the RGB cube on a 16-point lattice per channel.
        for r in (0..=255u16).step_by(17) {
            for g in (0..=255u16).step_by(17) {
                for b in (0..=255u16).step_by(17) {
                    let (r, g, b) = (r as u8, g as u8, b as u8);
                    let (h, l, s) = rgb_to_hls(r, g, b);
                    let (r2, g2, b2) = hls_to_rgb(h, l, s);
                    assert!(
                        (r as i16 - r2 as i16).abs() <= 1
                            && (g as i16 - g2 as i16).abs() <= 1
                            && (b as i16 - b2 as i16).abs() <= 1,
                        "round trip drifted: ({},{},{}) -> ({},{},{})",
                        r,
                        g,
                        b,
                        r2,
                        g2,
                        b2
                    );
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_lightness_is_clamped() {
        assert_eq!(hls_to_rgb(0.1, 1.2, 0.5), (255, 255, 255));
        assert_eq!(hls_to_rgb(0.1, -0.2, 0.5), (0, 0, 0));
    }
}
