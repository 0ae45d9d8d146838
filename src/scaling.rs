//! Scaling option computation.
use std::{fmt, str::FromStr};

use clap::ValueEnum;
use num::rational::Ratio;
use thiserror::Error;
use tracing::debug;

/// Default bound for width and height, in pixels.
pub const DEFAULT_MAX_SIZE: u32 = 1024;

const DOWNSCALE_START: f64 = 0.1;
const DOWNSCALE_STEP: f64 = 0.05;
const UPSCALE_STEP: f64 = 0.1;
const UPSCALE_SPAN: f64 = 2.0;

/// Most scale factors a single call will generate.
pub const MAX_CANDIDATES: usize = 1 << 20;

/// Errors for invalid scaling inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScalingError {
    /// The mode string is neither `downscale` nor `upscale`.
    #[error("mode must be 'downscale' or 'upscale', got '{0}'")]
    InvalidMode(String),

    /// Width or height is zero.
    #[error("dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// The size bound is zero.
    #[error("max size must be positive, got {0}")]
    InvalidMaxSize(u32),

    /// The bound is so large relative to the image that the option list cannot be held.
    #[error("{count} scaling options exceed the limit of {limit}")]
    TooManyCandidates { count: usize, limit: usize },
}

/// Direction to scale an image in relation to the size bound.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum ScaleMode {
    /// Shrink so that both dimensions fit within the bound.
    #[default]
    Downscale,
    /// Enlarge so that both dimensions reach at least the bound.
    Upscale,
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleMode::Downscale => f.write_str("downscale"),
            ScaleMode::Upscale => f.write_str("upscale"),
        }
    }
}

impl FromStr for ScaleMode {
    type Err = ScalingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "downscale" => Ok(ScaleMode::Downscale),
            "upscale" => Ok(ScaleMode::Upscale),
            other => Err(ScalingError::InvalidMode(other.to_owned())),
        }
    }
}

/// Width and height of an image, both strictly positive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Create a pair of dimensions.
    ///
    /// # Errors
    /// [`ScalingError::InvalidDimension`] if either side is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, ScalingError> {
        if width == 0 || height == 0 {
            return Err(ScalingError::InvalidDimension { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// The aspect ratio in lowest terms, e.g. `16/9` for 2048x1152.
    pub fn reduced_ratio(&self) -> Ratio<u32> {
        Ratio::new(self.width, self.height)
    }

    /// Dimensions multiplied by `scale`, truncated toward zero.
    ///
    /// Upscaling a `u32` side can pass `u32::MAX`, hence the wider result.
    fn scaled(&self, scale: f64) -> (u64, u64) {
        (
            (f64::from(self.width) * scale).floor() as u64,
            (f64::from(self.height) * scale).floor() as u64,
        )
    }
}

/// One resize option.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScaleCandidate {
    pub width: u64,
    pub height: u64,
    /// Uniform scale factor, rounded to 3 decimal places.
    pub scale: f64,
}

/// Aspect ratio of the original image along with its resize options.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalingResult {
    pub aspect_ratio: f64,
    pub mode: ScaleMode,
    pub max_size: u32,
    /// Ordered by ascending scale factor.
    pub candidates: Vec<ScaleCandidate>,
}

/// Compute aspect-preserving resize options for an image.
///
/// In [`ScaleMode::Downscale`] the factors run from 0.1 in steps of 0.05 up to the
/// largest factor that keeps both sides within `max_size`; if that factor is below 0.1
/// the candidate list is empty. In [`ScaleMode::Upscale`] the factors start at the
/// smallest factor that brings both sides up to `max_size` and run for a span of 2.0
/// in steps of 0.1, with no further bound.
///
/// # Args
/// * `width` - The original width.
/// * `height` - The original height.
/// * `max_size` - The bound applied to both width and height.
/// * `mode` - Whether to shrink toward or grow past the bound.
///
/// # Returns
/// The aspect ratio and the candidates, or an error for zero dimensions or bound, or
/// when more than [`MAX_CANDIDATES`] factors would be generated.
pub fn compute(
    width: u32,
    height: u32,
    max_size: u32,
    mode: ScaleMode,
) -> Result<ScalingResult, ScalingError> {
    let dims = Dimensions::new(width, height)?;
    if max_size == 0 {
        return Err(ScalingError::InvalidMaxSize(max_size));
    }

    let width_scale = f64::from(max_size) / f64::from(width);
    let height_scale = f64::from(max_size) / f64::from(height);

    let (bound, scales): (f64, Vec<f64>) = match mode {
        ScaleMode::Downscale => {
            let max_scale = width_scale.min(height_scale);
            let scales = arange(DOWNSCALE_START, max_scale + DOWNSCALE_STEP, DOWNSCALE_STEP);
            if scales.len() > MAX_CANDIDATES {
                return Err(ScalingError::TooManyCandidates {
                    count: scales.len(),
                    limit: MAX_CANDIDATES,
                });
            }
            let scales = scales
                .map(round3)
                .filter(|s| *s <= max_scale)
                .collect();
            (max_scale, scales)
        }
        ScaleMode::Upscale => {
            let min_scale = width_scale.max(height_scale);
            let scales = arange(min_scale, min_scale + UPSCALE_SPAN, UPSCALE_STEP)
                .map(round3)
                .collect();
            (min_scale, scales)
        }
    };

    let candidates: Vec<ScaleCandidate> = scales
        .into_iter()
        .map(|scale| {
            let (width, height) = dims.scaled(scale);
            ScaleCandidate {
                width,
                height,
                scale,
            }
        })
        .collect();

    debug!(
        width,
        height,
        max_size,
        %mode,
        ratio = %dims.reduced_ratio(),
        bound,
        count = candidates.len(),
        "computed scaling options"
    );

    Ok(ScalingResult {
        aspect_ratio: dims.aspect_ratio(),
        mode,
        max_size,
        candidates,
    })
}

/// Evenly spaced values over the half-open interval `[start, stop)`.
///
/// The length is `ceil((stop - start) / step)`. Elements past the second are
/// `start + i * delta` with `delta = (start + step) - start`, so accumulated
/// floating-point error matches the usual array-range generators exactly.
fn arange(start: f64, stop: f64, step: f64) -> impl ExactSizeIterator<Item = f64> {
    let len = ((stop - start) / step).ceil().max(0.0) as usize;
    let delta = (start + step) - start;
    (0..len).map(move |i| match i {
        0 => start,
        1 => start + step,
        _ => start + i as f64 * delta,
    })
}

/// Round to 3 decimal places from the exact decimal expansion, ties to even.
fn round3(value: f64) -> f64 {
    format!("{value:.3}").parse().unwrap_or(value)
}
