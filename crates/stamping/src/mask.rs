//! Drawable-area mask sampling
//!
//! The mask bitmap is produced elsewhere (rasterized template regions) and
//! is read-only while strokes are processed. Swapping it or toggling masking
//! is expected between strokes.

use glam::DVec2;
use patternist_config::CanvasConfig;
use thiserror::Error;
use tracing::warn;

use crate::constants::MASK_THRESHOLD;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MaskError {
    #[error("Mask dimensions must be non-zero, got {width}x{height}")]
    EmptyDimensions { width: u32, height: u32 },
    #[error("Mask data length {actual} does not match {width}x{height}")]
    LengthMismatch {
        width: u32,
        height: u32,
        actual: usize,
    },
}

/// Single-channel bitmap, 255 = drawable, 0 = restricted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawableMask {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl DrawableMask {
    /// Wrap row-major intensity bytes
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, MaskError> {
        if width == 0 || height == 0 {
            return Err(MaskError::EmptyDimensions { width, height });
        }
        if data.len() != (width as usize) * (height as usize) {
            return Err(MaskError::LengthMismatch {
                width,
                height,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Mask with every pixel set to `value`
    pub fn filled(width: u32, height: u32, value: u8) -> Result<Self, MaskError> {
        Self::new(width, height, vec![value; (width as usize) * (height as usize)])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Intensity at a pixel, `None` out of bounds
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        self.data.get(index).copied()
    }

    /// Set a pixel's intensity. Does nothing out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: u8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        self.data[index] = value;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

/// Source of the drawable-area mask
pub trait MaskProvider {
    fn drawable_mask(&self) -> Option<&DrawableMask>;
    fn is_masking_enabled(&self) -> bool;
    /// Canvas dimensions that stroke points are expressed in
    fn canvas_size(&self) -> DVec2;
}

/// Whether a canvas-space point may receive ink
///
/// Always true without a mask or with masking disabled. Otherwise the point
/// is scaled from canvas space into mask pixels and the pixel must be
/// brighter than 127. Points mapping outside the mask are restricted.
pub fn is_point_in_drawable_area(
    provider: &(impl MaskProvider + ?Sized),
    point: DVec2,
    canvas_size: DVec2,
) -> bool {
    if !provider.is_masking_enabled() {
        return true;
    }
    let Some(mask) = provider.drawable_mask() else {
        return true;
    };
    if !point.is_finite() {
        return false;
    }

    let mask_size = DVec2::new(mask.width() as f64, mask.height() as f64);
    let canvas_size = if canvas_size.is_finite() && canvas_size.min_element() > 0.0 {
        canvas_size
    } else {
        mask_size
    };

    let mapped = (point * mask_size / canvas_size).floor();
    if mapped.x < 0.0 || mapped.y < 0.0 || mapped.x >= mask_size.x || mapped.y >= mask_size.y {
        return false;
    }

    mask.pixel(mapped.x as u32, mapped.y as u32)
        .is_some_and(|value| value > MASK_THRESHOLD)
}

/// Mask state owned by the pipeline: optional bitmap, enabled flag and the
/// canvas dimensions points are expressed in
#[derive(Debug, Clone)]
pub struct RegionMask {
    mask: Option<DrawableMask>,
    enabled: bool,
    canvas_size: DVec2,
}

impl Default for RegionMask {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl RegionMask {
    /// Unrestricted mask state for a canvas
    pub fn new(canvas: CanvasConfig) -> Self {
        Self {
            mask: None,
            enabled: false,
            canvas_size: DVec2::new(canvas.width_f64(), canvas.height_f64()),
        }
    }

    /// Install a mask and enable masking
    pub fn set_mask(&mut self, mask: DrawableMask) {
        self.mask = Some(mask);
        self.enabled = true;
    }

    /// Install a mask from raw bytes
    ///
    /// Malformed data leaves masking unrestricted and returns the error.
    pub fn set_mask_bytes(&mut self, width: u32, height: u32, data: Vec<u8>) -> Result<(), MaskError> {
        match DrawableMask::new(width, height, data) {
            Ok(mask) => {
                self.set_mask(mask);
                Ok(())
            }
            Err(err) => {
                warn!("set_mask_bytes: {err}, masking disabled");
                self.clear_mask();
                Err(err)
            }
        }
    }

    pub fn clear_mask(&mut self) {
        self.mask = None;
        self.enabled = false;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Change the canvas the mask is stretched over
    pub fn set_canvas(&mut self, canvas: CanvasConfig) {
        self.canvas_size = DVec2::new(canvas.width_f64(), canvas.height_f64());
    }

    pub fn is_point_in_drawable_area(&self, point: DVec2) -> bool {
        is_point_in_drawable_area(self, point, self.canvas_size)
    }
}

impl MaskProvider for RegionMask {
    fn drawable_mask(&self) -> Option<&DrawableMask> {
        self.mask.as_ref()
    }

    fn is_masking_enabled(&self) -> bool {
        self.enabled
    }

    fn canvas_size(&self) -> DVec2 {
        self.canvas_size
    }
}
