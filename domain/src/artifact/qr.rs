//! QR rendering parameters and the raster produced by an encoder.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// QR error-correction level.
///
/// Printed plan sheets get folded, photocopied and scribbled on, so the
/// default is [`ErrorCorrection::High`] (about 30% of the symbol may be lost).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCorrection {
    Low,
    Medium,
    Quartile,
    #[default]
    High,
}

impl ErrorCorrection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCorrection::Low => "low",
            ErrorCorrection::Medium => "medium",
            ErrorCorrection::Quartile => "quartile",
            ErrorCorrection::High => "high",
        }
    }
}

impl FromStr for ErrorCorrection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" | "l" => Ok(ErrorCorrection::Low),
            "medium" | "m" => Ok(ErrorCorrection::Medium),
            "quartile" | "q" => Ok(ErrorCorrection::Quartile),
            "high" | "h" => Ok(ErrorCorrection::High),
            other => Err(format!("unknown error correction level: {}", other)),
        }
    }
}

impl std::fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a QR symbol is rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrRenderOptions {
    pub error_correction: ErrorCorrection,
    /// Edge length of one module in pixels.
    pub module_size: u32,
    /// Quiet zone width in modules.
    pub border: u32,
}

impl QrRenderOptions {
    /// Largest accepted module edge in pixels.
    pub const MAX_MODULE_SIZE: u32 = 32;
    /// Largest accepted quiet zone in modules.
    pub const MAX_BORDER: u32 = 16;
}

impl Default for QrRenderOptions {
    fn default() -> Self {
        Self {
            error_correction: ErrorCorrection::High,
            module_size: 10,
            border: 4,
        }
    }
}

/// 8-bit greyscale raster, row-major, black modules on white.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterImage {
    pub const BLACK: u8 = 0;
    pub const WHITE: u8 = 255;

    /// Returns `None` if the buffer length does not match `width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        let expected = (width as usize).checked_mul(height as usize)?;
        (pixels.len() == expected).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Scale a square module matrix (`true` = dark) into a raster.
    ///
    /// Each module becomes a `module_size` x `module_size` block and a
    /// `border`-module white quiet zone surrounds the symbol. Returns `None`
    /// if `modules` is not `modules_per_side` squared, if the options exceed
    /// [`QrRenderOptions::MAX_MODULE_SIZE`] or [`QrRenderOptions::MAX_BORDER`],
    /// or if the raster edge does not fit into a `u32`.
    pub fn from_modules(
        modules: &[bool],
        modules_per_side: usize,
        options: &QrRenderOptions,
    ) -> Option<Self> {
        if modules_per_side.checked_mul(modules_per_side)? != modules.len()
            || options.module_size > QrRenderOptions::MAX_MODULE_SIZE
            || options.border > QrRenderOptions::MAX_BORDER
        {
            return None;
        }
        let scale = options.module_size.max(1) as usize;
        let border = options.border as usize;
        let side_modules = border.checked_mul(2)?.checked_add(modules_per_side)?;
        let side = side_modules.checked_mul(scale)?;
        let edge = u32::try_from(side).ok()?;

        let mut pixels = vec![Self::WHITE; side.checked_mul(side)?];
        for my in 0..modules_per_side {
            for mx in 0..modules_per_side {
                if !modules[my * modules_per_side + mx] {
                    continue;
                }
                let top = (my + border) * scale;
                let left = (mx + border) * scale;
                for row in top..top + scale {
                    pixels[row * side + left..row * side + left + scale].fill(Self::BLACK);
                }
            }
        }

        Some(Self {
            width: edge,
            height: edge,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Pixel value at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}
