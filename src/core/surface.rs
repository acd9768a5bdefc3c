use serde::{Deserialize, Serialize};

use crate::core::types::Viewport;

/// Logical fallback size used when the host element could not be measured.
pub const DEFAULT_LOGICAL_WIDTH: f64 = 320.0;
pub const DEFAULT_LOGICAL_HEIGHT: f64 = 240.0;

/// Host-side description of the drawing surface to prepare.
///
/// `measured_size` is the element's CSS box in logical pixels, when known.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceRequest {
    #[serde(default)]
    pub measured_size: Option<(f64, f64)>,
    pub device_pixel_ratio: f64,
}

impl SurfaceRequest {
    #[must_use]
    pub fn new(measured_size: Option<(f64, f64)>, device_pixel_ratio: f64) -> Self {
        Self {
            measured_size,
            device_pixel_ratio,
        }
    }

    /// Resolves a usable drawing surface.
    ///
    /// Returns `None` when no surface can be prepared (non-finite ratio,
    /// zero-sized result). Callers treat `None` as "nothing rendered", not
    /// as a fatal error.
    #[must_use]
    pub fn resolve(self) -> Option<SurfaceMetrics> {
        if !self.device_pixel_ratio.is_finite() || self.device_pixel_ratio <= 0.0 {
            return None;
        }

        let (logical_width, logical_height) = match self.measured_size {
            Some((width, height))
                if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 =>
            {
                (width, height)
            }
            _ => (DEFAULT_LOGICAL_WIDTH, DEFAULT_LOGICAL_HEIGHT),
        };

        let backing_width = (logical_width * self.device_pixel_ratio).round();
        let backing_height = (logical_height * self.device_pixel_ratio).round();
        if backing_width < 1.0 || backing_height < 1.0 {
            return None;
        }

        let viewport = Viewport::new(logical_width.ceil() as u32, logical_height.ceil() as u32);
        if !viewport.is_valid() {
            return None;
        }

        Some(SurfaceMetrics {
            viewport,
            logical_width,
            logical_height,
            pixel_ratio: self.device_pixel_ratio,
        })
    }
}

/// Resolved drawing surface in logical (CSS-pixel) coordinates.
///
/// Backends multiply by `pixel_ratio` to size their backing store; all
/// layout math in `core` stays in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceMetrics {
    pub viewport: Viewport,
    pub logical_width: f64,
    pub logical_height: f64,
    pub pixel_ratio: f64,
}
