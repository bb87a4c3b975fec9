//! Batch configuration and product catalogs
//!
//! A [`BatchConfig`] names the template photo per subject kind, the
//! output directory, the optional square output size, the JPEG quality,
//! and the product catalog mapping each output identifier to a target
//! color, display label and subject kind. Configurations load from JSON
//! and are validated before use.
//!
//! The two menu catalogs shipped with the crate ([`BatchConfig::drink_menu`]
//! and [`BatchConfig::paper_cup_menu`]) reproduce the full product tables
//! of the menu asset pipeline; the catalog is the only supported
//! customization surface.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{output, paths};
use crate::detection::SubjectKind;
use crate::error::{RecolorError, Result};

/// RGB target color for configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    /// Create a color from channel values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<RgbColor> for image::Rgb<u8> {
    fn from(color: RgbColor) -> Self {
        image::Rgb([color.r, color.g, color.b])
    }
}

/// One product entry: target color, display label and subject kind
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSpec {
    /// Target color the subject region is recolored toward
    pub color: RgbColor,
    /// Human-readable product name
    pub label: String,
    /// Template and threshold selection
    pub kind: SubjectKind,
}

/// Template photo path per subject kind
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplatePaths {
    pub milk_tea: PathBuf,
    pub fruit_tea: PathBuf,
    pub paper_cup: PathBuf,
}

impl TemplatePaths {
    /// Default template locations under the site image tree
    pub fn site_defaults() -> Self {
        Self {
            milk_tea: PathBuf::from(paths::MILK_TEA_TEMPLATE),
            fruit_tea: PathBuf::from(paths::FRUIT_TEA_TEMPLATE),
            paper_cup: PathBuf::from(paths::PAPER_CUP_TEMPLATE),
        }
    }

    /// Path of the template used for the given kind
    pub fn for_kind(&self, kind: SubjectKind) -> PathBuf {
        match kind {
            SubjectKind::MilkTea => self.milk_tea.clone(),
            SubjectKind::FruitTea => self.fruit_tea.clone(),
            SubjectKind::PaperCup => self.paper_cup.clone(),
        }
    }
}

/// Complete configuration for one batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Template photo per subject kind
    pub templates: TemplatePaths,

    /// Directory receiving one `<identifier>.jpg` per product
    pub output_dir: PathBuf,

    /// Square output resolution; `None` keeps template dimensions
    #[serde(default)]
    pub output_size: Option<u32>,

    /// JPEG encoder quality (1-100)
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,

    /// Catalog of products to generate, keyed by output identifier
    pub products: BTreeMap<String, ProductSpec>,
}

fn default_jpeg_quality() -> u8 {
    output::JPEG_QUALITY
}

type DrinkRow = (&'static str, (u8, u8, u8), &'static str, SubjectKind);
type CupRow = (&'static str, (u8, u8, u8), &'static str);

use crate::detection::SubjectKind::{FruitTea, MilkTea};

/// Drink menu: liquid colors per product, against the two drink templates
const DRINK_MENU: &[DrinkRow] = &[
    // Tra Sua (opaque milk teas)
    ("tra-sua", (210, 180, 140), "Tra Sua", MilkTea),
    ("tra-sua-default", (210, 180, 140), "Tra Sua Default", MilkTea),
    ("tra-sua-tc-trang", (220, 195, 160), "Tra Sua TC Trang", MilkTea),
    ("tra-sua-tc-den", (180, 140, 100), "Tra Sua TC Den", MilkTea),
    ("tra-sua-tc-hoang-kim", (200, 160, 80), "Tra Sua TC Hoang Kim", MilkTea),
    ("tra-sua-socola", (120, 80, 50), "Tra Sua Socola", MilkTea),
    ("tra-sua-cacao", (100, 70, 45), "Tra Sua Cacao", MilkTea),
    ("tra-sua-full-topping", (190, 150, 110), "Tra Sua Full Topping", MilkTea),
    ("tra-sua-lai", (230, 220, 200), "Tra Sua Lai", MilkTea),
    ("tra-sua-lai-vai", (240, 210, 200), "Tra Sua Lai Vai", MilkTea),
    // Tra Trai Cay (translucent fruit teas)
    ("tra-trai-cay-default", (255, 150, 80), "Tra Trai Cay Default", FruitTea),
    ("tra-xanh-xoai", (255, 180, 50), "Tra Xanh Xoai", FruitTea),
    ("tra-xanh-dao", (255, 160, 120), "Tra Xanh Dao", FruitTea),
    ("tra-xanh-vai", (255, 200, 200), "Tra Xanh Vai", FruitTea),
    ("tra-dao-xoai", (255, 140, 70), "Tra Dao Xoai", FruitTea),
    ("tra-dao-vai", (255, 170, 150), "Tra Dao Vai", FruitTea),
    ("tra-vai-xoai", (255, 190, 120), "Tra Vai Xoai", FruitTea),
    ("tra-sen-vang", (240, 180, 80), "Tra Sen Vang", FruitTea),
    ("tra-xoai-macchiato", (255, 180, 50), "Tra Xoai Macchiato", FruitTea),
    // Tra Dong Gia 12K
    ("tra-12k-default", (180, 200, 120), "Tra 12K Default", FruitTea),
    ("tra-xanh", (150, 190, 100), "Tra Xanh", FruitTea),
    ("tra-xanh-chanh", (180, 200, 80), "Tra Xanh Chanh", FruitTea),
    ("tra-tac", (255, 160, 50), "Tra Tac", FruitTea),
    ("tra-dao", (255, 160, 120), "Tra Dao", FruitTea),
    // Tra Bi Dao
    ("tra-bi-dao-default", (220, 200, 120), "Tra Bi Dao Default", FruitTea),
    ("tra-bi-dao", (220, 200, 120), "Tra Bi Dao", FruitTea),
    ("tra-xanh-bi-dao", (180, 200, 100), "Tra Xanh Bi Dao", FruitTea),
    // Latte (creamy, use milk tea template)
    ("latte-default", (180, 150, 120), "Latte Default", MilkTea),
    ("latte-matcha", (120, 180, 100), "Latte Matcha", MilkTea),
    ("latte-socola", (100, 70, 50), "Latte Socola", MilkTea),
    ("latte-khoai-mon", (180, 140, 180), "Latte Khoai Mon", MilkTea),
    ("latte-cacao", (90, 60, 40), "Latte Cacao", MilkTea),
    // Sua Tuoi (fresh milk)
    ("sua-tuoi-default", (250, 250, 245), "Sua Tuoi Default", MilkTea),
    ("sua-tuoi-matcha", (150, 200, 120), "Sua Tuoi Matcha", MilkTea),
    ("sua-tuoi-socola", (130, 90, 60), "Sua Tuoi Socola", MilkTea),
    ("sua-tuoi-khoai-mon", (200, 170, 200), "Sua Tuoi Khoai Mon", MilkTea),
    ("sua-tuoi-duong-den", (240, 230, 220), "Sua Tuoi Duong Den", MilkTea),
    ("sua-tuoi-tran-chau", (250, 250, 245), "Sua Tuoi Tran Chau", MilkTea),
    // Yaourt
    ("yaourt-default", (250, 245, 240), "Yaourt Default", MilkTea),
    ("yaourt-da", (250, 248, 245), "Yaourt Da", MilkTea),
    ("yaourt-dau", (255, 180, 190), "Yaourt Dau", MilkTea),
    ("yaourt-viet-quat", (140, 100, 160), "Yaourt Viet Quat", MilkTea),
    ("yaourt-tc-duong-den", (245, 235, 225), "Yaourt TC Duong Den", MilkTea),
];

/// Paper cup menu: cup body colors per product, against the cup template
const PAPER_CUP_MENU: &[CupRow] = &[
    // Tra Sua (brown/tan cups)
    ("tra-sua", (180, 130, 90), "Tra Sua"),
    ("tra-sua-default", (180, 130, 90), "Tra Sua Default"),
    ("tra-sua-tc-trang", (190, 145, 105), "Tra Sua TC Trang"),
    ("tra-sua-tc-den", (160, 110, 75), "Tra Sua TC Den"),
    ("tra-sua-tc-hoang-kim", (200, 160, 80), "Tra Sua TC Hoang Kim"),
    ("tra-sua-socola", (120, 80, 50), "Tra Sua Socola"),
    ("tra-sua-cacao", (100, 70, 45), "Tra Sua Cacao"),
    ("tra-sua-full-topping", (175, 125, 85), "Tra Sua Full Topping"),
    ("tra-sua-lai", (200, 180, 150), "Tra Sua Lai"),
    ("tra-sua-lai-vai", (210, 170, 160), "Tra Sua Lai Vai"),
    // Tra Trai Cay (orange/yellow/pink cups)
    ("tra-trai-cay-default", (255, 150, 80), "Tra Trai Cay Default"),
    ("tra-xanh-xoai", (255, 180, 50), "Tra Xanh Xoai"),
    ("tra-xanh-dao", (255, 160, 120), "Tra Xanh Dao"),
    ("tra-xanh-vai", (255, 180, 190), "Tra Xanh Vai"),
    ("tra-dao-xoai", (255, 140, 70), "Tra Dao Xoai"),
    ("tra-dao-vai", (255, 170, 150), "Tra Dao Vai"),
    ("tra-vai-xoai", (255, 190, 120), "Tra Vai Xoai"),
    ("tra-sen-vang", (240, 180, 80), "Tra Sen Vang"),
    ("tra-xoai-macchiato", (255, 180, 50), "Tra Xoai Macchiato"),
    // Tra Dong Gia 12K (green/yellow cups)
    ("tra-12k-default", (150, 180, 100), "Tra 12K Default"),
    ("tra-xanh", (130, 170, 90), "Tra Xanh"),
    ("tra-xanh-chanh", (170, 190, 70), "Tra Xanh Chanh"),
    ("tra-tac", (255, 160, 50), "Tra Tac"),
    ("tra-dao", (255, 160, 120), "Tra Dao"),
    // Tra Bi Dao (light yellow/green cups)
    ("tra-bi-dao-default", (210, 200, 130), "Tra Bi Dao Default"),
    ("tra-bi-dao", (210, 200, 130), "Tra Bi Dao"),
    ("tra-xanh-bi-dao", (170, 190, 110), "Tra Xanh Bi Dao"),
    // Latte (creamy/pastel cups)
    ("latte-default", (180, 150, 120), "Latte Default"),
    ("latte-matcha", (120, 170, 100), "Latte Matcha"),
    ("latte-socola", (100, 70, 50), "Latte Socola"),
    ("latte-khoai-mon", (170, 130, 170), "Latte Khoai Mon"),
    ("latte-cacao", (90, 60, 40), "Latte Cacao"),
    // Sua Tuoi (white/cream cups)
    ("sua-tuoi-default", (240, 235, 230), "Sua Tuoi Default"),
    ("sua-tuoi-matcha", (140, 190, 120), "Sua Tuoi Matcha"),
    ("sua-tuoi-socola", (130, 90, 60), "Sua Tuoi Socola"),
    ("sua-tuoi-khoai-mon", (190, 160, 190), "Sua Tuoi Khoai Mon"),
    ("sua-tuoi-duong-den", (220, 200, 180), "Sua Tuoi Duong Den"),
    ("sua-tuoi-tran-chau", (245, 240, 235), "Sua Tuoi Tran Chau"),
    // Yaourt (white/pink/purple cups)
    ("yaourt-default", (245, 240, 235), "Yaourt Default"),
    ("yaourt-da", (240, 238, 235), "Yaourt Da"),
    ("yaourt-dau", (255, 180, 190), "Yaourt Dau"),
    ("yaourt-viet-quat", (140, 100, 160), "Yaourt Viet Quat"),
    ("yaourt-tc-duong-den", (235, 225, 215), "Yaourt TC Duong Den"),
];

impl BatchConfig {
    /// Built-in drink catalog: recolors the two drink templates into the
    /// full menu of liquid colors. Keeps original template dimensions.
    pub fn drink_menu() -> Self {
        let products = DRINK_MENU
            .iter()
            .map(|&(code, (r, g, b), label, kind)| {
                (
                    code.to_string(),
                    ProductSpec {
                        color: RgbColor::new(r, g, b),
                        label: label.to_string(),
                        kind,
                    },
                )
            })
            .collect();
        Self {
            templates: TemplatePaths::site_defaults(),
            output_dir: PathBuf::from(paths::PRODUCTS_DIR),
            output_size: None,
            jpeg_quality: output::JPEG_QUALITY,
            products,
        }
    }

    /// Built-in paper cup catalog: recolors the cup body per product and
    /// resizes output to the standard square resolution.
    pub fn paper_cup_menu() -> Self {
        let products = PAPER_CUP_MENU
            .iter()
            .map(|&(code, (r, g, b), label)| {
                (
                    code.to_string(),
                    ProductSpec {
                        color: RgbColor::new(r, g, b),
                        label: label.to_string(),
                        kind: SubjectKind::PaperCup,
                    },
                )
            })
            .collect();
        Self {
            templates: TemplatePaths::site_defaults(),
            output_dir: PathBuf::from(paths::PRODUCTS_DIR),
            output_size: Some(output::SQUARE_SIZE),
            jpeg_quality: output::JPEG_QUALITY,
            products,
        }
    }

    /// Load and validate a configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RecolorError::io(format!("failed to read {}", path.display()), e))?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            RecolorError::config(format!("failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| RecolorError::config(format!("failed to serialize config: {}", e)))?;
        fs::write(path, json)
            .map_err(|e| RecolorError::io(format!("failed to write {}", path.display()), e))
    }

    /// Validate catalog and output settings.
    ///
    /// Identifiers become file stems, so they are restricted to ASCII
    /// alphanumerics, `-` and `_`.
    pub fn validate(&self) -> Result<()> {
        if self.products.is_empty() {
            return Err(RecolorError::config("product catalog is empty"));
        }
        for (code, spec) in &self.products {
            if code.is_empty() {
                return Err(RecolorError::config("empty product identifier"));
            }
            if !code
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            {
                return Err(RecolorError::config(format!(
                    "identifier {:?} is not usable as a file stem",
                    code
                )));
            }
            if spec.label.is_empty() {
                return Err(RecolorError::config(format!(
                    "product {:?} has an empty label",
                    code
                )));
            }
        }
        if self.output_size == Some(0) {
            return Err(RecolorError::config("output size must be positive"));
        }
        if self.jpeg_quality == 0 || self.jpeg_quality > 100 {
            return Err(RecolorError::config(format!(
                "JPEG quality {} outside 1-100",
                self.jpeg_quality
            )));
        }
        Ok(())
    }

    /// Output file path for a product identifier
    pub fn output_path(&self, code: &str) -> PathBuf {
        self.output_dir.join(format!("{}.{}", code, output::EXTENSION))
    }
}
