//! Fixed output and asset-path constants for menu image generation
//!
//! These values mirror the menu asset pipeline: every generated product
//! image is a quality-92 JPEG, resized to a fixed square when a size is
//! configured, and the templates live under the site's public image tree.

/// Output encoding parameters
pub mod output {
    /// Square output resolution in pixels when resizing is enabled
    pub const SQUARE_SIZE: u32 = 600;

    /// JPEG encoder quality (1-100)
    pub const JPEG_QUALITY: u8 = 92;

    /// File extension for generated product images
    pub const EXTENSION: &str = "jpg";
}

/// Default template and output locations relative to the site root
pub mod paths {
    /// Template photo for opaque milk-based drinks
    pub const MILK_TEA_TEMPLATE: &str = "public/images/original-cup.jpg";

    /// Template photo for translucent fruit teas
    pub const FRUIT_TEA_TEMPLATE: &str = "public/images/original-tea.jpg";

    /// Template photo for the bare paper cup
    pub const PAPER_CUP_TEMPLATE: &str = "public/images/paper-cup-an.jpg";

    /// Directory receiving one `<identifier>.jpg` per product
    pub const PRODUCTS_DIR: &str = "public/images/products";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_ranges() {
        assert!(output::SQUARE_SIZE > 0);
        assert!(output::JPEG_QUALITY >= 1 && output::JPEG_QUALITY <= 100);
    }

    #[test]
    fn test_template_paths_distinct() {
        assert_ne!(paths::MILK_TEA_TEMPLATE, paths::FRUIT_TEA_TEMPLATE);
        assert_ne!(paths::FRUIT_TEA_TEMPLATE, paths::PAPER_CUP_TEMPLATE);
    }
}
