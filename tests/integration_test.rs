//! Integration tests for the batch recoloring driver
//!
//! These tests validate the end-to-end workflow over synthetic template
//! images:
//! - Full batch generation across every subject kind
//! - Skip-if-exists idempotence with byte-identical outputs
//! - Per-item failure accounting when a template does not decode
//! - Fatal handling of missing template files
//! - Fixed square output dimensions when resizing is configured
//! - Isolation between catalog identifiers

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use tempfile::TempDir;

use recolor_drinks::color::conversion::rgb_to_hls;
use recolor_drinks::{
    run_batch, BatchConfig, ItemOutcome, ProductSpec, RecolorError, RgbColor, SubjectKind,
    TemplatePaths,
};

/// Brown tone inside every subject kind's classification band
const SUBJECT_BROWN: Rgb<u8> = Rgb([170, 120, 70]);

fn write_template(path: &Path, width: u32, height: u32) {
    RgbImage::from_pixel(width, height, SUBJECT_BROWN)
        .save(path)
        .unwrap();
}

fn product(color: RgbColor, label: &str, kind: SubjectKind) -> ProductSpec {
    ProductSpec {
        color,
        label: label.to_string(),
        kind,
    }
}

/// Config over per-test template files in `dir`, outputs under
/// `dir/products`.
fn test_config(dir: &Path, products: BTreeMap<String, ProductSpec>) -> BatchConfig {
    BatchConfig {
        templates: TemplatePaths {
            milk_tea: dir.join("milk.png"),
            fruit_tea: dir.join("fruit.png"),
            paper_cup: dir.join("cup.png"),
        },
        output_dir: dir.join("products"),
        output_size: None,
        jpeg_quality: 92,
        products,
    }
}

fn write_all_templates(dir: &Path) {
    write_template(&dir.join("milk.png"), 12, 9);
    write_template(&dir.join("fruit.png"), 10, 10);
    write_template(&dir.join("cup.png"), 8, 8);
}

// ============================================================================
// Full batch generation
// ============================================================================

#[test]
fn test_batch_generates_every_kind() {
    let dir = TempDir::new().unwrap();
    write_all_templates(dir.path());

    let mut products = BTreeMap::new();
    products.insert(
        "tra-sua-socola".to_string(),
        product(RgbColor::new(120, 80, 50), "Tra Sua Socola", SubjectKind::MilkTea),
    );
    products.insert(
        "tra-dao".to_string(),
        product(RgbColor::new(255, 160, 120), "Tra Dao", SubjectKind::FruitTea),
    );
    products.insert(
        "cup-tra-sua".to_string(),
        product(RgbColor::new(180, 130, 90), "Tra Sua Cup", SubjectKind::PaperCup),
    );

    let config = test_config(dir.path(), products);
    let summary = run_batch(&config).unwrap();

    assert_eq!(summary.generated(), 3);
    assert_eq!(summary.failed(), 0);
    assert_eq!(summary.skipped(), 0);

    // Without resizing, outputs keep their template's dimensions.
    let milk_out = image::open(config.output_path("tra-sua-socola")).unwrap();
    assert_eq!(milk_out.width(), 12);
    assert_eq!(milk_out.height(), 9);

    let fruit_out = image::open(config.output_path("tra-dao")).unwrap();
    assert_eq!(fruit_out.width(), 10);
    assert_eq!(fruit_out.height(), 10);
}

#[test]
fn test_generated_image_carries_target_hue() {
    let dir = TempDir::new().unwrap();
    write_all_templates(dir.path());

    // Matcha green is far from the template brown, so the hue shift
    // must survive JPEG encoding.
    let target = RgbColor::new(120, 180, 100);
    let mut products = BTreeMap::new();
    products.insert(
        "latte-matcha".to_string(),
        product(target, "Latte Matcha", SubjectKind::MilkTea),
    );

    let config = test_config(dir.path(), products);
    run_batch(&config).unwrap();

    let out = image::open(config.output_path("latte-matcha"))
        .unwrap()
        .to_rgb8();
    let center = out.get_pixel(out.width() / 2, out.height() / 2);

    let (target_h, _, _) = rgb_to_hls(target.r, target.g, target.b);
    let (out_h, _, _) = rgb_to_hls(center[0], center[1], center[2]);
    assert!(
        (out_h - target_h).abs() < 0.05,
        "output hue {} should track target hue {}",
        out_h,
        target_h
    );
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn test_rerun_skips_and_preserves_bytes() {
    let dir = TempDir::new().unwrap();
    write_all_templates(dir.path());

    let mut products = BTreeMap::new();
    products.insert(
        "tra-sua".to_string(),
        product(RgbColor::new(210, 180, 140), "Tra Sua", SubjectKind::MilkTea),
    );
    products.insert(
        "tra-tac".to_string(),
        product(RgbColor::new(255, 160, 50), "Tra Tac", SubjectKind::FruitTea),
    );

    let config = test_config(dir.path(), products);

    let first = run_batch(&config).unwrap();
    assert_eq!(first.generated(), 2);
    assert_eq!(first.skipped(), 0);

    let bytes_before: Vec<Vec<u8>> = ["tra-sua", "tra-tac"]
        .iter()
        .map(|code| fs::read(config.output_path(code)).unwrap())
        .collect();

    let second = run_batch(&config).unwrap();
    assert_eq!(second.generated(), 0);
    assert_eq!(second.failed(), 0);
    assert_eq!(second.skipped(), 2);

    for (code, before) in ["tra-sua", "tra-tac"].iter().zip(&bytes_before) {
        let after = fs::read(config.output_path(code)).unwrap();
        assert_eq!(&after, before, "{} was rewritten on rerun", code);
    }
}

#[test]
fn test_existing_output_is_never_overwritten() {
    let dir = TempDir::new().unwrap();
    write_all_templates(dir.path());

    let mut products = BTreeMap::new();
    products.insert(
        "tra-sua".to_string(),
        product(RgbColor::new(210, 180, 140), "Tra Sua", SubjectKind::MilkTea),
    );
    let config = test_config(dir.path(), products);

    // Pre-seed the output with sentinel bytes that are not a valid JPEG.
    fs::create_dir_all(&config.output_dir).unwrap();
    let out_path = config.output_path("tra-sua");
    fs::write(&out_path, b"sentinel").unwrap();

    let summary = run_batch(&config).unwrap();
    assert_eq!(summary.skipped(), 1);
    assert_eq!(summary.outcome("tra-sua"), Some(&ItemOutcome::Skipped));
    assert_eq!(fs::read(&out_path).unwrap(), b"sentinel");
}

// ============================================================================
// Failure accounting
// ============================================================================

#[test]
fn test_mixed_preexisting_and_decode_failure() {
    let dir = TempDir::new().unwrap();
    write_template(&dir.path().join("milk.png"), 8, 8);
    write_template(&dir.path().join("fruit.png"), 8, 8);
    // The cup template exists but is not a decodable image.
    fs::write(dir.path().join("cup.png"), b"not an image").unwrap();

    let mut products = BTreeMap::new();
    products.insert(
        "m1".to_string(),
        product(RgbColor::new(120, 80, 50), "Milk One", SubjectKind::MilkTea),
    );
    products.insert(
        "m2".to_string(),
        product(RgbColor::new(100, 70, 45), "Milk Two", SubjectKind::MilkTea),
    );
    products.insert(
        "f1".to_string(),
        product(RgbColor::new(255, 160, 50), "Fruit One", SubjectKind::FruitTea),
    );
    products.insert(
        "f2".to_string(),
        product(RgbColor::new(255, 140, 70), "Fruit Two", SubjectKind::FruitTea),
    );
    products.insert(
        "c1".to_string(),
        product(RgbColor::new(180, 130, 90), "Cup One", SubjectKind::PaperCup),
    );

    let config = test_config(dir.path(), products);

    // Two outputs already exist.
    fs::create_dir_all(&config.output_dir).unwrap();
    fs::write(config.output_path("m2"), b"existing").unwrap();
    fs::write(config.output_path("f2"), b"existing").unwrap();

    let summary = run_batch(&config).unwrap();

    assert_eq!(summary.generated(), 2);
    assert_eq!(summary.failed(), 1);
    assert_eq!(summary.skipped(), 2);
    assert_eq!(summary.total(), 5);

    assert_eq!(summary.outcome("m1"), Some(&ItemOutcome::Generated));
    assert_eq!(summary.outcome("f1"), Some(&ItemOutcome::Generated));
    assert_eq!(summary.outcome("m2"), Some(&ItemOutcome::Skipped));
    assert_eq!(summary.outcome("f2"), Some(&ItemOutcome::Skipped));
    assert!(matches!(
        summary.outcome("c1"),
        Some(ItemOutcome::Failed(_))
    ));

    // The failed item produced no output file.
    assert!(!config.output_path("c1").exists());
}

#[test]
fn test_missing_template_is_fatal() {
    let dir = TempDir::new().unwrap();
    // No template files are written at all.

    let mut products = BTreeMap::new();
    products.insert(
        "tra-sua".to_string(),
        product(RgbColor::new(210, 180, 140), "Tra Sua", SubjectKind::MilkTea),
    );
    let config = test_config(dir.path(), products);

    match run_batch(&config) {
        Err(e) => {
            assert!(e.is_fatal());
            assert!(matches!(e, RecolorError::TemplateMissing { .. }));
        }
        Ok(_) => panic!("expected a fatal error for a missing template"),
    }
}

#[test]
fn test_unreferenced_template_may_be_absent() {
    let dir = TempDir::new().unwrap();
    // Only the milk tea template exists; the catalog never references
    // the other kinds.
    write_template(&dir.path().join("milk.png"), 8, 8);

    let mut products = BTreeMap::new();
    products.insert(
        "tra-sua".to_string(),
        product(RgbColor::new(210, 180, 140), "Tra Sua", SubjectKind::MilkTea),
    );
    let config = test_config(dir.path(), products);

    let summary = run_batch(&config).unwrap();
    assert_eq!(summary.generated(), 1);
}

// ============================================================================
// Output dimensions
// ============================================================================

#[test]
fn test_resize_yields_fixed_square() {
    let dir = TempDir::new().unwrap();
    // Deliberately non-square template.
    write_template(&dir.path().join("cup.png"), 10, 7);
    write_template(&dir.path().join("milk.png"), 8, 8);
    write_template(&dir.path().join("fruit.png"), 8, 8);

    let mut products = BTreeMap::new();
    products.insert(
        "cup-one".to_string(),
        product(RgbColor::new(150, 180, 100), "Cup One", SubjectKind::PaperCup),
    );

    let mut config = test_config(dir.path(), products);
    config.output_size = Some(64);

    run_batch(&config).unwrap();

    let out = image::open(config.output_path("cup-one")).unwrap();
    assert_eq!((out.width(), out.height()), (64, 64));
}

// ============================================================================
// Isolation
// ============================================================================

#[test]
fn test_identifier_outputs_are_independent() {
    // The image generated for one identifier does not depend on which
    // other identifiers share the catalog.
    let make_products = |with_second: bool| {
        let mut products = BTreeMap::new();
        products.insert(
            "tra-sua-socola".to_string(),
            product(RgbColor::new(120, 80, 50), "Tra Sua Socola", SubjectKind::MilkTea),
        );
        if with_second {
            products.insert(
                "latte-matcha".to_string(),
                product(RgbColor::new(120, 180, 100), "Latte Matcha", SubjectKind::MilkTea),
            );
        }
        products
    };

    let solo_dir = TempDir::new().unwrap();
    write_all_templates(solo_dir.path());
    let solo_config = test_config(solo_dir.path(), make_products(false));
    run_batch(&solo_config).unwrap();

    let pair_dir = TempDir::new().unwrap();
    write_all_templates(pair_dir.path());
    let pair_config = test_config(pair_dir.path(), make_products(true));
    run_batch(&pair_config).unwrap();

    let solo_bytes = fs::read(solo_config.output_path("tra-sua-socola")).unwrap();
    let pair_bytes = fs::read(pair_config.output_path("tra-sua-socola")).unwrap();
    assert_eq!(solo_bytes, pair_bytes);
}

// ============================================================================
// Configuration round trip
// ============================================================================

#[test]
fn test_config_file_round_trip_drives_batch() {
    let dir = TempDir::new().unwrap();
    write_all_templates(dir.path());

    let mut products = BTreeMap::new();
    products.insert(
        "tra-xanh".to_string(),
        product(RgbColor::new(150, 190, 100), "Tra Xanh", SubjectKind::FruitTea),
    );
    let config = test_config(dir.path(), products);

    let config_path: PathBuf = dir.path().join("batch.json");
    config.to_json_file(&config_path).unwrap();

    let loaded = BatchConfig::from_json_file(&config_path).unwrap();
    let summary = run_batch(&loaded).unwrap();

    assert_eq!(summary.generated(), 1);
    assert!(loaded.output_path("tra-xanh").exists());
}
