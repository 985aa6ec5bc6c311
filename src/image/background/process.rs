use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use crate::config::RemovalConfig;
use crate::image::background::classify::{ClassCounts, PixelClassifier, apply_classification};
use crate::image::background::color::sample_background;

/// Outcome of one removal pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemovalStats {
    /// Top-left color used as reference, `None` for an empty image.
    pub background: Option<Rgba<u8>>,
    pub counts: ClassCounts,
}

/// Remove background from an image file and write PNG output.
pub fn remove_background(
    input: &Path,
    output: &Path,
    config: &RemovalConfig,
) -> Result<RemovalStats> {
    let img =
        image::open(input).with_context(|| format!("failed to open {}", input.display()))?;
    let (processed, stats) = remove_background_pixels(img.into_rgba8(), config);

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    DynamicImage::ImageRgba8(processed)
        .save_with_format(output, ImageFormat::Png)
        .with_context(|| format!("failed to save {}", output.display()))?;
    Ok(stats)
}

/// Make pixels close to the top-left color transparent.
///
/// Rewrites `img` in place and hands it back with the same dimensions and
/// pixel order.
pub(super) fn remove_background_pixels(
    mut img: RgbaImage,
    config: &RemovalConfig,
) -> (RgbaImage, RemovalStats) {
    let Some(background) = sample_background(&img) else {
        return (img, RemovalStats::default());
    };

    let classifier = PixelClassifier::new(background, config);
    let counts = apply_classification(&mut img, &classifier);

    let stats = RemovalStats {
        background: Some(background),
        counts,
    };
    (img, stats)
}
