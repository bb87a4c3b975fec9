//! Batch generation driver
//!
//! Walks a product catalog and writes one recolored image per
//! identifier. Outputs that already exist are skipped, never
//! recomputed or overwritten; regenerating an image means deleting the
//! file first. A failing item is logged and counted, and the batch
//! moves on to the next identifier. Only a missing template file or an
//! unusable configuration aborts the whole run.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::RgbImage;
use log::{info, warn};

use crate::config::{BatchConfig, ProductSpec};
use crate::error::{RecolorError, Result};
use crate::recolor::Recolorer;
use crate::template::TemplateSet;

/// Terminal outcome for one catalog item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    /// Output image was computed and written
    Generated,
    /// Output file already existed; nothing was recomputed
    Skipped,
    /// Decode, transform or write failed; message retained for the report
    Failed(String),
}

/// Per-item outcomes of one batch run, keyed by identifier.
///
/// Every catalog identifier appears exactly once.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    outcomes: BTreeMap<String, ItemOutcome>,
}

impl BatchSummary {
    fn record(&mut self, code: &str, outcome: ItemOutcome) {
        self.outcomes.insert(code.to_string(), outcome);
    }

    /// Number of images computed and written in this run
    pub fn generated(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Generated))
    }

    /// Number of items skipped because the output already existed
    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Skipped))
    }

    /// Number of items that failed
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Failed(_)))
    }

    /// Total number of catalog items accounted for
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Outcome for a single identifier
    pub fn outcome(&self, code: &str) -> Option<&ItemOutcome> {
        self.outcomes.get(code)
    }

    /// Iterate identifiers with their outcomes
    pub fn outcomes(&self) -> impl Iterator<Item = (&str, &ItemOutcome)> {
        self.outcomes.iter().map(|(code, o)| (code.as_str(), o))
    }

    fn count(&self, pred: impl Fn(&ItemOutcome) -> bool) -> usize {
        self.outcomes.values().filter(|o| pred(o)).count()
    }
}

/// Run a full batch over the catalog in `config`.
///
/// Templates are decoded once up front and reused read-only across
/// items. Returns a fatal error when a required template file is
/// missing or the configuration is invalid; per-item failures are
/// captured in the returned [`BatchSummary`] instead.
pub fn run_batch(config: &BatchConfig) -> Result<BatchSummary> {
    config.validate()?;

    fs::create_dir_all(&config.output_dir).map_err(|e| {
        RecolorError::io(
            format!("failed to create {}", config.output_dir.display()),
            e,
        )
    })?;

    let templates = TemplateSet::load(
        config.products.values().map(|spec| spec.kind),
        |kind| config.templates.for_kind(kind),
    )?;

    let mut summary = BatchSummary::default();
    for (code, spec) in &config.products {
        let output_path = config.output_path(code);

        if output_path.exists() {
            info!("[skip] {} exists", output_path.display());
            summary.record(code, ItemOutcome::Skipped);
            continue;
        }

        match render_item(&templates, spec, config, &output_path) {
            Ok(()) => {
                info!("[ok] {} ({})", output_path.display(), spec.label);
                summary.record(code, ItemOutcome::Generated);
            }
            Err(e) => {
                warn!("[fail] {}: {}", code, e);
                summary.record(code, ItemOutcome::Failed(e.to_string()));
            }
        }
    }

    info!(
        "batch complete: {} generated, {} failed, {} skipped",
        summary.generated(),
        summary.failed(),
        summary.skipped()
    );
    Ok(summary)
}

/// Recolor, optionally resize, and persist one product image.
fn render_item(
    templates: &TemplateSet,
    spec: &ProductSpec,
    config: &BatchConfig,
    output_path: &Path,
) -> Result<()> {
    let template = templates.get(spec.kind)?;

    let recolorer = Recolorer::new(spec.color.into(), spec.kind);
    let mut result = recolorer.recolor_image(template);

    if let Some(size) = config.output_size {
        result = imageops::resize(&result, size, size, FilterType::Lanczos3);
    }

    save_jpeg(&result, output_path, config.jpeg_quality)
}

/// Encode an image as JPEG at the configured quality.
fn save_jpeg(image: &RgbImage, path: &Path, quality: u8) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| RecolorError::encode(format!("failed to create {}", path.display()), e))?;
    let mut writer = BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(&mut writer, quality);
    image
        .write_with_encoder(encoder)
        .map_err(|e| RecolorError::encode(format!("failed to encode {}", path.display()), e))
}
