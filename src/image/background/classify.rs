use image::{Pixel, Rgba, RgbaImage};
use rayon::prelude::*;

use crate::config::RemovalConfig;
use crate::image::background::color::color_distance;

const PARALLEL_PIXEL_THRESHOLD: usize = 32 * 1024;

/// Bucket a pixel falls into relative to the background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelClass {
    /// Close to the background: becomes (0, 0, 0, 0).
    Transparent,
    /// Inside the fade band: color kept, alpha replaced.
    Faded(u8),
    /// Far from the background: left untouched.
    Opaque,
}

/// Number of pixels per class after one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassCounts {
    pub transparent: usize,
    pub faded: usize,
    pub opaque: usize,
}

impl ClassCounts {
    #[inline]
    fn record(mut self, class: PixelClass) -> Self {
        match class {
            PixelClass::Transparent => self.transparent += 1,
            PixelClass::Faded(_) => self.faded += 1,
            PixelClass::Opaque => self.opaque += 1,
        }
        self
    }

    #[inline]
    fn merge(self, other: Self) -> Self {
        Self {
            transparent: self.transparent + other.transparent,
            faded: self.faded + other.faded,
            opaque: self.opaque + other.opaque,
        }
    }

    pub fn total(&self) -> usize {
        self.transparent + self.faded + self.opaque
    }
}

pub(super) struct PixelClassifier {
    background: Rgba<u8>,
    threshold: f64,
    fade: f64,
}

impl PixelClassifier {
    pub(super) fn new(background: Rgba<u8>, config: &RemovalConfig) -> Self {
        Self {
            background,
            threshold: f64::from(config.threshold),
            fade: f64::from(config.fade),
        }
    }

    #[inline]
    pub(super) fn classify(&self, pixel: &Rgba<u8>) -> PixelClass {
        let distance = color_distance(pixel, &self.background);
        if distance < self.threshold {
            PixelClass::Transparent
        } else if self.fade > 0.0 && distance < self.threshold + self.fade {
            // distance is in [threshold, threshold + fade), so the ratio is in [0, 1)
            let alpha = ((distance - self.threshold) / self.fade * 255.0).floor();
            PixelClass::Faded(alpha as u8)
        } else {
            PixelClass::Opaque
        }
    }

    /// Classify one RGBA chunk and rewrite it in place.
    #[inline]
    fn apply(&self, chunk: &mut [u8]) -> PixelClass {
        let class = self.classify(Rgba::from_slice(chunk));
        match class {
            PixelClass::Transparent => chunk.fill(0),
            PixelClass::Faded(alpha) => chunk[3] = alpha,
            PixelClass::Opaque => {}
        }
        class
    }
}

/// Rewrite every pixel of `output` according to its class.
///
/// Large images are split across the rayon pool; pixels are independent, so
/// both paths give the same result.
pub(super) fn apply_classification(
    output: &mut RgbaImage,
    classifier: &PixelClassifier,
) -> ClassCounts {
    let len = output.width() as usize * output.height() as usize;
    let raw: &mut [u8] = output;

    if len >= PARALLEL_PIXEL_THRESHOLD {
        raw.par_chunks_exact_mut(4)
            .map(|chunk| classifier.apply(chunk))
            .fold(ClassCounts::default, ClassCounts::record)
            .reduce(ClassCounts::default, ClassCounts::merge)
    } else {
        raw.chunks_exact_mut(4)
            .map(|chunk| classifier.apply(chunk))
            .fold(ClassCounts::default(), ClassCounts::record)
    }
}
